use crate::board_error;
use crate::constants::DELETE_TEAM_PROMPT;
use crate::error::BoardResult;
use crate::models::TeamId;

use super::{Request, SubmissionId};

/// Asks the user a yes/no question.
pub trait Confirm {
    fn confirm(&mut self, prompt: &str) -> BoardResult<bool>;
}

/// A pre-recorded answer, for `--yes` and for answers collected elsewhere
/// (the TUI confirmation popup).
#[derive(Debug, Clone, Copy)]
pub struct Answer(pub bool);

impl Confirm for Answer {
    fn confirm(&mut self, _prompt: &str) -> BoardResult<bool> {
        Ok(self.0)
    }
}

/// First step of deleting a team: nothing is sent until the prompt is accepted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeletePrompt {
    team_id: TeamId,
}

impl DeletePrompt {
    pub fn new(team_id: TeamId) -> Self {
        Self { team_id }
    }

    pub fn team_id(&self) -> TeamId {
        self.team_id
    }

    pub fn prompt(&self) -> &'static str {
        DELETE_TEAM_PROMPT
    }

    pub fn resolve(self, accepted: bool) -> Option<Request> {
        accepted.then_some(Request::DeleteTeam(self.team_id))
    }

    pub fn ask(self, confirm: &mut dyn Confirm) -> BoardResult<Option<Request>> {
        let accepted = confirm.confirm(self.prompt())?;
        Ok(self.resolve(accepted))
    }
}

/// Validate a team name from the create form, returning it trimmed.
pub fn validate_team_name(name: &str) -> BoardResult<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(board_error!(InvalidInput, "Team name is required"));
    }
    Ok(name.to_string())
}

/// Turn a submitted create form into the request that posts it.
pub fn create_team_request(name: &str, submission: SubmissionId) -> BoardResult<Request> {
    let team_name = validate_team_name(name)?;
    Ok(Request::CreateTeam { team_name, submission })
}
