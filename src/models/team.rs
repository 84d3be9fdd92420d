use serde::{Deserialize, Serialize};

pub type TeamId = i64;

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Team {
    pub team_id: TeamId,
    pub team_name: String,
    pub created_at: String,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CreateTeamRequest {
    pub team_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_team_uses_snake_case_fields() {
        let team: Team = serde_json::from_value(json!({
            "team_id": 7,
            "team_name": "Platform",
            "created_at": "2024-03-01"
        }))
        .unwrap();
        assert_eq!(team.team_id, 7);
        assert_eq!(team.team_name, "Platform");
    }

    #[test]
    fn test_create_request_body() {
        let body = serde_json::to_value(CreateTeamRequest {
            team_name: "Ops".to_string(),
        })
        .unwrap();
        assert_eq!(body, json!({ "teamName": "Ops" }));
    }
}
