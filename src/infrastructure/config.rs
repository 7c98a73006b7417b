//! Configuration management

use crate::error::{Result, TinybeansError};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Base URL of the Tinybeans REST API
pub const DEFAULT_BASE_URL: &str = "https://tinybeans.com/api/1/";

/// Client identifier of the official iOS app
pub const IOS_CLIENT_ID: &str = "13bcd503-2137-9085-a437-d9f2ac9281a1";

/// Config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "tinybeans.toml";

/// Where and as whom the client talks to the API
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_client_id")]
    pub client_id: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_client_id() -> String {
    IOS_CLIENT_ID.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        ApiConfig {
            base_url: default_base_url(),
            client_id: default_client_id(),
        }
    }
}

/// Settings for the command-line client, read from tinybeans.toml
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub username: String,
    pub password: Option<String>,
    #[serde(default)]
    pub api: ApiConfig,
}

impl Config {
    /// Load config from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                TinybeansError::ConfigNotFound(path.to_path_buf())
            } else {
                TinybeansError::Io(e)
            }
        })?;

        toml::from_str(&contents).map_err(|e| {
            TinybeansError::Config(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Resolve the config path: explicit path, then the default file name
    pub fn resolve_path(explicit: Option<&Path>) -> PathBuf {
        explicit
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Get the password, checking the TINYBEANS_PASSWORD environment variable first
    pub fn get_password(&self) -> Result<String> {
        std::env::var("TINYBEANS_PASSWORD")
            .ok()
            .or_else(|| self.password.clone())
            .ok_or_else(|| {
                TinybeansError::Config(
                    "No password configured. Set 'password' in the config file \
                    or the TINYBEANS_PASSWORD environment variable"
                        .to_string(),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_api_defaults() {
        let api = ApiConfig::default();
        assert_eq!(api.base_url, "https://tinybeans.com/api/1/");
        assert_eq!(api.client_id, IOS_CLIENT_ID);
    }

    #[test]
    fn test_load_minimal_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tinybeans.toml");
        fs::write(&path, "username = \"ada\"\npassword = \"secret\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.username, "ada");
        assert_eq!(config.password.as_deref(), Some("secret"));
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn test_load_api_section() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tinybeans.toml");
        fs::write(
            &path,
            "username = \"ada\"\n\n[api]\nbase_url = \"http://localhost:9000/api/1/\"\n",
        )
        .unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9000/api/1/");
        // Unset keys in the section still get defaults
        assert_eq!(config.api.client_id, IOS_CLIENT_ID);
        assert!(config.password.is_none());
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();

        let result = Config::load(&temp.path().join("tinybeans.toml"));

        match result.unwrap_err() {
            TinybeansError::ConfigNotFound(_) => {}
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_load_invalid_config() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("tinybeans.toml");
        fs::write(&path, "password = \"secret\"\n").unwrap();

        match Config::load(&path).unwrap_err() {
            TinybeansError::Config(msg) => assert!(msg.contains("username")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_get_password_uses_env() {
        let config = Config {
            username: "ada".to_string(),
            password: Some("from-file".to_string()),
            api: ApiConfig::default(),
        };

        // Single test touching the variable, so set and clear in sequence
        std::env::remove_var("TINYBEANS_PASSWORD");
        assert_eq!(config.get_password().unwrap(), "from-file");

        std::env::set_var("TINYBEANS_PASSWORD", "from-env");
        let password = config.get_password();
        std::env::remove_var("TINYBEANS_PASSWORD");
        assert_eq!(password.unwrap(), "from-env");

        let without_password = Config {
            password: None,
            ..config
        };
        assert!(matches!(
            without_password.get_password(),
            Err(TinybeansError::Config(_))
        ));
    }

    #[test]
    fn test_resolve_path() {
        assert_eq!(
            Config::resolve_path(None),
            PathBuf::from("tinybeans.toml")
        );
        assert_eq!(
            Config::resolve_path(Some(Path::new("/etc/tb.toml"))),
            PathBuf::from("/etc/tb.toml")
        );
    }
}
