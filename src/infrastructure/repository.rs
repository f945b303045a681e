//! Workspace repository
//!
//! A workspace is a directory holding `.mindcare/config.toml` and the three
//! JSON resources.

use crate::error::{MindcareError, Result};
use crate::infrastructure::{Config, JournalStore, MoodStore, SessionStore};
use std::fs;
use std::path::{Path, PathBuf};

pub const SESSIONS_FILE: &str = "sessions.json";
pub const MOOD_FILE: &str = "mood_data.json";
pub const JOURNAL_FILE: &str = "journal_entries.json";

/// Abstract repository for workspace operations
pub trait WorkspaceRepository {
    /// Get the root directory of this repository
    fn root(&self) -> &Path;

    /// Load configuration from .mindcare/config.toml
    fn load_config(&self) -> Result<Config>;

    /// Save configuration to .mindcare/config.toml
    fn save_config(&self, config: &Config) -> Result<()>;

    /// Check if .mindcare directory exists
    fn is_initialized(&self) -> bool;

    /// Create .mindcare directory structure
    fn initialize(&self) -> Result<()>;
}

/// File system implementation of WorkspaceRepository
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    /// Create a new repository with the given root directory
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Discover workspace root by walking up from current directory
    /// First checks MINDCARE_ROOT environment variable, then falls back to discovery
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MINDCARE_ROOT") {
            let repo = FileSystemRepository::new(PathBuf::from(root_path));
            if repo.is_initialized() {
                return Ok(repo);
            } else {
                return Err(MindcareError::Config(format!(
                    "MINDCARE_ROOT is set to '{}' but no .mindcare directory found. \
                    Run 'mindcare init' in that directory or unset MINDCARE_ROOT.",
                    repo.root.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover workspace root by walking up from a specific starting directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            let repo = FileSystemRepository::new(current.clone());
            if repo.is_initialized() {
                return Ok(repo);
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(MindcareError::NotMindcareDirectory(start.to_path_buf()));
                }
            }
        }
    }

    pub fn sessions_path(&self) -> PathBuf {
        self.root.join(SESSIONS_FILE)
    }

    pub fn mood_path(&self) -> PathBuf {
        self.root.join(MOOD_FILE)
    }

    pub fn journal_path(&self) -> PathBuf {
        self.root.join(JOURNAL_FILE)
    }

    /// Open the session store; this starts a new current session
    pub fn open_sessions(&self) -> SessionStore {
        SessionStore::open(self.sessions_path())
    }

    pub fn open_mood(&self) -> MoodStore {
        MoodStore::open(self.mood_path())
    }

    pub fn open_journal(&self) -> JournalStore {
        JournalStore::open(self.journal_path())
    }
}

impl WorkspaceRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn is_initialized(&self) -> bool {
        self.root.join(".mindcare").is_dir()
    }

    fn initialize(&self) -> Result<()> {
        let mindcare_dir = self.root.join(".mindcare");

        if mindcare_dir.exists() {
            return Err(MindcareError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir(&mindcare_dir)?;
        Ok(())
    }
}
