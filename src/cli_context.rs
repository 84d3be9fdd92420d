use std::sync::Arc;

use crate::client::TaskBoardClient;
use crate::config::{load_config, Config, Credentials};
use crate::dashboard::{Dashboard, DashboardController, Request};
use crate::error::{BoardError, BoardResult};
use crate::logging::MemorySink;

/// Central context for CLI operations, managing configuration, credentials
/// and the client built from them
pub struct CliContext {
    config: Config,
    credentials: Option<Credentials>,
    client: Option<Arc<TaskBoardClient>>,
}

impl CliContext {
    /// Load context from the environment and saved configuration
    pub fn load() -> Self {
        Self {
            config: load_config(),
            credentials: Credentials::current().ok(),
            client: None,
        }
    }

    pub fn base_url(&self) -> String {
        self.config.base_url()
    }

    pub fn credentials(&self) -> BoardResult<&Credentials> {
        self.credentials.as_ref().ok_or(BoardError::CredentialsNotFound)
    }

    /// Get or create a client (requires credentials)
    pub fn verified_client(&mut self) -> BoardResult<Arc<TaskBoardClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let client = Arc::new(TaskBoardClient::new(self.base_url(), self.credentials()?)?);
        self.client = Some(client.clone());
        Ok(client)
    }

    pub fn controller(&mut self) -> BoardResult<DashboardController> {
        Ok(DashboardController::new(self.verified_client()?))
    }

    /// Run `requests` against a freshly mounted dashboard and return it.
    ///
    /// Unlike the interactive view, a one-shot command fails when anything
    /// was reported to the diagnostic sink.
    pub async fn run_requests(&mut self, requests: Vec<Request>) -> BoardResult<Dashboard> {
        let controller = self.controller()?;
        let sink = MemorySink::new();
        let mut dashboard = Dashboard::new();
        dashboard.mount();

        controller.settle(&mut dashboard, requests, &sink).await?;

        if let Some(diagnostic) = sink.entries().into_iter().next() {
            return Err(BoardError::ApiError(format!("{}: {}", diagnostic.label, diagnostic.detail)));
        }
        Ok(dashboard)
    }

    /// Store a newly issued token and switch to it
    pub fn login(&mut self, token: String, api_url: Option<String>) -> BoardResult<()> {
        let credentials = Credentials::issue(token, api_url)?;
        self.config = load_config();
        self.credentials = Some(credentials);
        self.client = None;
        Ok(())
    }

    /// Revoke the stored token. Returns whether one was stored.
    pub fn logout(&mut self) -> BoardResult<bool> {
        let had_token = Credentials::revoke()?;
        self.credentials = None;
        self.client = None;
        Ok(had_token)
    }
}

/// Builder for contexts that should not read the user's configuration
pub struct CliContextBuilder {
    api_url: Option<String>,
    token: Option<String>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            api_url: None,
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    pub fn build(self) -> BoardResult<CliContext> {
        let credentials = self.token.map(Credentials::new).transpose()?;
        Ok(CliContext {
            config: Config {
                api_url: self.api_url,
                token: None,
            },
            credentials,
            client: None,
        })
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_with_token() {
        let context = CliContextBuilder::new()
            .with_token("test-token")
            .with_api_url("http://board.test")
            .build()
            .unwrap();

        assert_eq!(context.credentials().unwrap().authorization(), "test-token");
    }

    #[test]
    fn test_client_requires_credentials() {
        let mut context = CliContextBuilder::new().build().unwrap();
        assert!(matches!(context.verified_client(), Err(BoardError::CredentialsNotFound)));
    }

    #[test]
    fn test_client_is_reused() {
        let mut context = CliContextBuilder::new().with_token("test-token").build().unwrap();

        let first = context.verified_client().unwrap();
        let second = context.verified_client().unwrap();
        assert!(Arc::ptr_eq(&first, &second));
    }

    #[test]
    fn test_blank_token_rejected_by_builder() {
        assert!(CliContextBuilder::new().with_token(" ").build().is_err());
    }
}
