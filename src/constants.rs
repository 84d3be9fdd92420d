pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const CONFIG_FILE: &str = ".taskboard-config.json";

pub const ENV_API_URL: &str = "TASKBOARD_API_URL";
pub const ENV_TOKEN: &str = "TASKBOARD_TOKEN";

// Endpoint paths, relative to the configured base URL
pub const MY_TEAMS_PATH: &str = "/teams/myteams";
pub const DELETE_TEAM_PATH: &str = "/teams/";
pub const CREATE_TEAM_PATH: &str = "/teams/create";
pub const ALL_TASKS_PATH: &str = "/tasks/all";

pub const DELETE_TEAM_PROMPT: &str = "Are you sure you want to delete this team?";

/// Number of tickets shown in the dashboard's ticket section.
pub const TICKET_PREVIEW_LIMIT: usize = 5;

// Labels written to the diagnostic sink alongside the error
pub const FETCH_TEAMS_FAILED: &str = "Error fetching teams";
pub const FETCH_TASKS_FAILED: &str = "Error fetching tasks";
pub const DELETE_TEAM_FAILED: &str = "Error deleting team";
pub const CREATE_TEAM_FAILED: &str = "Error creating team";
