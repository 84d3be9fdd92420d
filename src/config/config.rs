use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};

use crate::constants::{CONFIG_FILE, DEFAULT_API_URL, ENV_API_URL};
use crate::error::{BoardError, BoardResult};

#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    pub api_url: Option<String>,
    pub token: Option<String>,
}

impl Config {
    /// Base URL with any trailing slash removed, so endpoint paths can be appended.
    pub fn base_url(&self) -> String {
        let url = env::var(ENV_API_URL)
            .ok()
            .or_else(|| self.api_url.clone())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        url.trim_end_matches('/').to_string()
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => Config::default(),
    }
}

pub fn load_config_from(path: &Path) -> Config {
    if !path.exists() {
        return Config::default();
    }
    fs::read_to_string(path)
        .ok()
        .and_then(|config_str| serde_json::from_str(&config_str).ok())
        .unwrap_or_default()
}

pub fn save_config(config: &Config) -> BoardResult<()> {
    let path = config_path()
        .ok_or_else(|| BoardError::ConfigError("Could not find home directory".to_string()))?;
    save_config_to(config, &path)
}

pub fn save_config_to(config: &Config, path: &Path) -> BoardResult<()> {
    let config_str = serde_json::to_string_pretty(config)?;
    fs::write(path, config_str)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&dir.path().join("absent.json"));
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        let config = Config {
            api_url: Some("https://board.example.com/".to_string()),
            token: Some("secret".to_string()),
        };

        save_config_to(&config, &path).unwrap();
        assert_eq!(load_config_from(&path), config);
    }

    #[test]
    fn test_garbage_file_gives_default() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        fs::write(&path, "not json").unwrap();
        assert_eq!(load_config_from(&path), Config::default());
    }

    #[test]
    fn test_base_url_strips_trailing_slash() {
        if env::var(ENV_API_URL).is_ok() {
            return;
        }
        let config = Config {
            api_url: Some("https://board.example.com/".to_string()),
            token: None,
        };
        assert_eq!(config.base_url(), "https://board.example.com");
        assert_eq!(Config::default().base_url(), DEFAULT_API_URL);
    }
}
