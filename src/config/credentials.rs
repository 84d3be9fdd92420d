use std::env;
use std::fmt;

use crate::config::{load_config, save_config};
use crate::constants::ENV_TOKEN;
use crate::error::{BoardError, BoardResult};

/// The bearer token attached to every request.
///
/// Issued by `taskboard login`, persisted in the config file, and revoked by
/// `taskboard logout`. `TASKBOARD_TOKEN` takes precedence over the stored value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    token: String,
}

impl Credentials {
    pub fn new(token: impl Into<String>) -> BoardResult<Self> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(BoardError::InvalidInput("Token must not be empty".to_string()));
        }
        Ok(Self { token })
    }

    /// Resolve credentials from the environment, then the config file.
    pub fn current() -> BoardResult<Self> {
        if let Ok(token) = env::var(ENV_TOKEN) {
            return Self::new(token);
        }
        match load_config().token {
            Some(token) => Self::new(token),
            None => Err(BoardError::CredentialsNotFound),
        }
    }

    /// Persist a freshly issued token.
    pub fn issue(token: impl Into<String>, api_url: Option<String>) -> BoardResult<Self> {
        let credentials = Self::new(token)?;
        let mut config = load_config();
        config.token = Some(credentials.token.clone());
        if api_url.is_some() {
            config.api_url = api_url;
        }
        save_config(&config)?;
        Ok(credentials)
    }

    /// Forget the stored token. Returns whether one was stored.
    pub fn revoke() -> BoardResult<bool> {
        let mut config = load_config();
        let had_token = config.token.take().is_some();
        if had_token {
            save_config(&config)?;
        }
        Ok(had_token)
    }

    /// Value for the `Authorization` header on the list and delete endpoints.
    pub fn authorization(&self) -> &str {
        &self.token
    }

    /// Value for the `Authorization` header on the create endpoint.
    pub fn bearer(&self) -> String {
        format!("Bearer {}", self.token)
    }

    /// Token with everything but the last four characters masked.
    pub fn masked(&self) -> String {
        let chars: Vec<char> = self.token.chars().collect();
        let visible = chars.len().min(4);
        let hidden = chars.len() - visible;
        let tail: String = chars[hidden..].iter().collect();
        format!("{}{}", "*".repeat(hidden), tail)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("token", &self.masked())
            .finish()
    }
}
