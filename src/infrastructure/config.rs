//! Configuration management

use crate::domain::TherapyApproach;
use crate::error::{MindcareError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_LANGUAGE: &str = "en-US";
pub const DEFAULT_RETENTION_DAYS: u32 = 30;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub therapy_approach: TherapyApproach,
    #[serde(default = "default_auto_delete")]
    pub auto_delete: bool,
    #[serde(default = "default_retention_days")]
    pub retention_days: u32,
    pub created: DateTime<Utc>,
}

fn default_language() -> String {
    DEFAULT_LANGUAGE.to_string()
}

fn default_auto_delete() -> bool {
    true
}

fn default_retention_days() -> u32 {
    DEFAULT_RETENTION_DAYS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            language: default_language(),
            therapy_approach: TherapyApproach::default(),
            auto_delete: default_auto_delete(),
            retention_days: default_retention_days(),
            created: Utc::now(),
        }
    }
}

impl Config {
    /// Load config from .mindcare/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(".mindcare").join("config.toml");

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MindcareError::NotMindcareDirectory(path.to_path_buf())
            } else {
                MindcareError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| MindcareError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .mindcare/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let mindcare_dir = path.join(".mindcare");
        let config_path = mindcare_dir.join("config.toml");

        if !mindcare_dir.exists() {
            fs::create_dir(&mindcare_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(&config_path, contents)?;

        Ok(())
    }

    /// Get the reply language, checking MINDCARE_LANGUAGE first
    pub fn get_language(&self) -> String {
        std::env::var("MINDCARE_LANGUAGE")
            .ok()
            .filter(|tag| !tag.trim().is_empty())
            .unwrap_or_else(|| self.language.clone())
    }
}
