//! Error types for tinybeans

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the tinybeans client
#[derive(Debug, Error)]
pub enum TinybeansError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid JSON response: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Missing field '{field}' in {object}")]
    MissingField {
        object: &'static str,
        field: &'static str,
    },

    #[error("Field '{field}' in {object} is not {expected}")]
    InvalidField {
        object: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    #[error("Invalid date '{value}': {source}")]
    InvalidDate {
        value: String,
        source: chrono::ParseError,
    },

    #[error("Journal {journal_id} reported remaining entries but returned an empty page")]
    EmptyPage { journal_id: i64 },

    #[error("Config file not found: {0}")]
    ConfigNotFound(PathBuf),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Export rejected for journal {0}")]
    ExportRejected(i64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TinybeansError {
    pub(crate) fn missing(object: &'static str, field: &'static str) -> Self {
        TinybeansError::MissingField { object, field }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TinybeansError::ConfigNotFound(_) => 2,
            TinybeansError::MissingField { .. } | TinybeansError::InvalidField { .. } => 3,
            TinybeansError::NotFound(_) => 4,
            TinybeansError::ExportRejected(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            TinybeansError::ConfigNotFound(path) => {
                format!(
                    "Config file not found: {}\n\n\
                    Suggestions:\n\
                    • Create tinybeans.toml with 'username' and 'password' keys\n\
                    • Pass a config path with --config <PATH>\n\
                    • Set TINYBEANS_CONFIG environment variable to your config path",
                    path.display()
                )
            }
            TinybeansError::MissingField { object, field } => {
                format!(
                    "The service response did not contain '{}' in {}\n\n\
                    Suggestions:\n\
                    • Check your username and password\n\
                    • Run with RUST_LOG=tinybeans=debug to see the requests",
                    field, object
                )
            }
            TinybeansError::NotFound(what) => {
                format!(
                    "Not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'tinybeans children' to list child ids\n\
                    • Use 'tinybeans followings' to list journal ids",
                    what
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using TinybeansError
pub type Result<T> = std::result::Result<T, TinybeansError>;
