// src/error.rs
// =============================================================================
// Library error type.
//
// Only things that happen before or after the scan can fail: reading input,
// loading configuration and writing exports. Individual checks never fail,
// they always end up as a CheckResult (see checker::fetch).
// =============================================================================

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HunterError {
    #[error("Please provide a username (--username) or a username file (--userfile)")]
    NoUsernames,

    #[error("Username file not found: {}", .0.display())]
    UsernameFileNotFound(PathBuf),

    #[error("Invalid platform '{name}': {reason}")]
    InvalidPlatform { name: String, reason: String },

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON export error: {0}")]
    Json(#[from] serde_json::Error),
}

impl HunterError {
    /// Input errors are reported to the user and end the run before any
    /// request is sent.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            HunterError::NoUsernames
                | HunterError::UsernameFileNotFound(_)
                | HunterError::UnknownPlatform(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, HunterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_errors_are_flagged() {
        assert!(HunterError::NoUsernames.is_input_error());
        assert!(HunterError::UsernameFileNotFound(PathBuf::from("users.txt")).is_input_error());
        assert!(!HunterError::Config {
            message: "bad".to_string()
        }
        .is_input_error());
    }

    #[test]
    fn test_missing_file_message_names_the_path() {
        let err = HunterError::UsernameFileNotFound(PathBuf::from("missing.txt"));
        assert_eq!(err.to_string(), "Username file not found: missing.txt");
    }
}
