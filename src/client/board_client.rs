use async_trait::async_trait;
use reqwest::header::{HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;

use super::BoardApi;
use crate::config::Credentials;
use crate::constants::{ALL_TASKS_PATH, CREATE_TEAM_PATH, DELETE_TEAM_PATH, MY_TEAMS_PATH};
use crate::error::{BoardError, BoardResult};
use crate::models::*;

/// How the token is presented in the `Authorization` header.
#[derive(Debug, Clone, Copy)]
enum AuthScheme {
    /// The raw token, as the list and delete endpoints expect.
    Raw,
    /// `Bearer <token>`, as the create endpoint expects.
    Bearer,
}

pub struct TaskBoardClient {
    client: reqwest::Client,
    base_url: String,
    authorization: HeaderValue,
    bearer: HeaderValue,
}

impl TaskBoardClient {
    pub fn new(base_url: impl Into<String>, credentials: &Credentials) -> BoardResult<Self> {
        let authorization = HeaderValue::from_str(credentials.authorization())
            .map_err(|_| BoardError::InvalidInput("Token contains invalid header characters".to_string()))?;
        let bearer = HeaderValue::from_str(&credentials.bearer())
            .map_err(|_| BoardError::InvalidInput("Token contains invalid header characters".to_string()))?;

        let client = reqwest::Client::builder().build()?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            authorization,
            bearer,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str, scheme: AuthScheme) -> RequestBuilder {
        let auth = match scheme {
            AuthScheme::Raw => self.authorization.clone(),
            AuthScheme::Bearer => self.bearer.clone(),
        };
        self.client
            .request(method, format!("{}{}", self.base_url, path))
            .header(AUTHORIZATION, auth)
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
    }

    async fn send(&self, request: RequestBuilder, path: &str) -> BoardResult<Response> {
        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(BoardError::HttpStatus {
                status: response.status().as_u16(),
                endpoint: path.to_string(),
            });
        }

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> BoardResult<T> {
        let request = self.request(Method::GET, path, AuthScheme::Raw);
        let response = self.send(request, path).await?;
        Ok(response.json().await?)
    }
}

#[async_trait]
impl BoardApi for TaskBoardClient {
    async fn my_teams(&self) -> BoardResult<Vec<Team>> {
        self.get_json(MY_TEAMS_PATH).await
    }

    async fn all_tasks(&self) -> BoardResult<Vec<Ticket>> {
        self.get_json(ALL_TASKS_PATH).await
    }

    async fn delete_team(&self, team_id: TeamId) -> BoardResult<()> {
        let request = self
            .request(Method::DELETE, DELETE_TEAM_PATH, AuthScheme::Raw)
            .query(&[("teamId", team_id)]);
        self.send(request, DELETE_TEAM_PATH).await?;
        Ok(())
    }

    async fn create_team(&self, team_name: &str) -> BoardResult<()> {
        let body = CreateTeamRequest {
            team_name: team_name.to_string(),
        };
        let request = self
            .request(Method::POST, CREATE_TEAM_PATH, AuthScheme::Bearer)
            .json(&body);
        self.send(request, CREATE_TEAM_PATH).await?;
        Ok(())
    }
}
