//! Error types for mindcare

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for mindcare application
#[derive(Debug, Error)]
pub enum MindcareError {
    #[error("Not a mindcare directory: {0}")]
    NotMindcareDirectory(PathBuf),

    #[error("Journal entry not found: {0}")]
    EntryNotFound(u64),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Template error: {0}")]
    Template(String),

    #[error("Response generator error: {0}")]
    Responder(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MindcareError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MindcareError::NotMindcareDirectory(_) => 2,
            MindcareError::EntryNotFound(_) => 3,
            MindcareError::InvalidInput(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MindcareError::NotMindcareDirectory(path) => {
                format!(
                    "Not a mindcare directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'mindcare init' in this directory to create a new workspace\n\
                    • Navigate to an existing mindcare directory\n\
                    • Set MINDCARE_ROOT environment variable to your workspace path",
                    path.display()
                )
            }
            MindcareError::EntryNotFound(id) => {
                format!(
                    "Journal entry not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'mindcare journal recent' to see entry ids\n\
                    • Use 'mindcare journal search <keyword>' to find an entry",
                    id
                )
            }
            MindcareError::InvalidInput(msg) => {
                if msg.contains("level") {
                    format!(
                        "{}\n\n\
                        Energy and anxiety are rated from 1 (lowest) to 10 (highest)\n\
                        Example: mindcare mood log good --energy 6 --anxiety 3",
                        msg
                    )
                } else {
                    self.to_string()
                }
            }
            MindcareError::Config(msg) => {
                if msg.contains("therapy approach") {
                    format!(
                        "{}\n\n\
                        Valid approaches: cbt, dbt, act, supportive\n\
                        Example: mindcare config therapy_approach cbt",
                        msg
                    )
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MindcareError
pub type Result<T> = std::result::Result<T, MindcareError>;
