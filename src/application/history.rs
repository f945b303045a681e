//! Session history use case
//!
//! Reads the sessions resource directly so that looking at history does not
//! start a new session the way opening a `SessionStore` does.

use crate::domain::Session;
use crate::infrastructure::session_store::latest;
use crate::infrastructure::{FileSystemRepository, JsonFile, SessionMap};

/// All sessions, newest first
pub fn list_sessions(repository: &FileSystemRepository) -> Vec<Session> {
    let mut sessions: Vec<Session> = load(repository).into_values().collect();
    sessions.sort_by(|a, b| b.created_at.datetime().cmp(&a.created_at.datetime()));
    sessions
}

/// The most recently created session, if any
pub fn latest_session(repository: &FileSystemRepository) -> Option<Session> {
    latest(&load(repository)).cloned()
}

fn load(repository: &FileSystemRepository) -> SessionMap {
    let loaded = JsonFile::<SessionMap>::new(repository.sessions_path()).load();
    if let Some(warning) = loaded.warning {
        tracing::warn!("{}", warning);
    }
    loaded.records
}
