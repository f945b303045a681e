//! Config management use case

use crate::domain::TherapyApproach;
use crate::error::{MindcareError, Result};
use crate::infrastructure::{Config, FileSystemRepository, WorkspaceRepository};
use std::str::FromStr;

const KEYS: &str = "language, therapy_approach, auto_delete, retention_days, created";

/// Service for managing workspace configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    /// Create a new config service
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "language" => Ok(config.language),
            "therapy_approach" => Ok(config.therapy_approach.to_string()),
            "auto_delete" => Ok(config.auto_delete.to_string()),
            "retention_days" => Ok(config.retention_days.to_string()),
            "created" => Ok(config.created.to_rfc3339()),
            _ => Err(MindcareError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, KEYS
            ))),
        }
    }

    /// Set a config value
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "language" => {
                if value.trim().is_empty() {
                    return Err(MindcareError::InvalidInput(
                        "language cannot be empty".to_string(),
                    ));
                }
                config.language = value.trim().to_string();
            }
            "therapy_approach" => {
                config.therapy_approach =
                    TherapyApproach::from_str(value).map_err(MindcareError::Config)?;
            }
            "auto_delete" => {
                config.auto_delete = value.parse().map_err(|_| {
                    MindcareError::InvalidInput(format!(
                        "auto_delete must be true or false, got '{}'",
                        value
                    ))
                })?;
            }
            "retention_days" => {
                config.retention_days = match value.parse::<u32>() {
                    Ok(days) if days > 0 => days,
                    _ => {
                        return Err(MindcareError::InvalidInput(format!(
                            "retention_days must be a positive whole number, got '{}'",
                            value
                        )))
                    }
                };
            }
            "created" => {
                return Err(MindcareError::Config(
                    "Cannot modify 'created' field (read-only)".to_string(),
                ));
            }
            _ => {
                return Err(MindcareError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, KEYS
                )));
            }
        }

        self.repository.save_config(&config)?;
        Ok(())
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
