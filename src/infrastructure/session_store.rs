//! Chat session store

use crate::domain::retention::{sweep_sessions, PurgeReport};
use crate::domain::session::{session_id, session_number};
use crate::domain::timestamp::{self, days_before};
use crate::domain::{Message, Role, Session};
use crate::infrastructure::store::{Diagnostics, IdSequence, JsonFile, StoreWarning};
use chrono::NaiveDateTime;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Sessions keyed by id, as stored on disk
pub type SessionMap = BTreeMap<String, Session>;

/// Sessions plus the one this store instance writes to.
///
/// Opening a store always starts a fresh session and makes it current.
#[derive(Debug)]
pub struct SessionStore {
    file: JsonFile<SessionMap>,
    sessions: SessionMap,
    sequence: IdSequence,
    current_id: String,
    diagnostics: Diagnostics,
}

impl SessionStore {
    /// Load sessions from `path` and start a new current session
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::open_at(path, timestamp::now())
    }

    /// Like [`SessionStore::open`], with the new session stamped `now`
    pub fn open_at(path: impl Into<PathBuf>, now: NaiveDateTime) -> Self {
        let file = JsonFile::new(path);
        let mut diagnostics = Diagnostics::default();

        let loaded = file.load();
        if let Some(warning) = loaded.warning {
            diagnostics.record(warning);
        }
        let sessions = loaded.records;
        let sequence = IdSequence::open(file.path(), next_number(&sessions), &mut diagnostics);

        let mut store = SessionStore {
            file,
            sessions,
            sequence,
            current_id: String::new(),
            diagnostics,
        };
        store.new_session_at(now);
        store
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Start a new, empty session and make it current
    pub fn new_session(&mut self) -> String {
        self.new_session_at(timestamp::now())
    }

    pub fn new_session_at(&mut self, now: NaiveDateTime) -> String {
        let mut id = session_id(self.sequence.allocate());
        while self.sessions.contains_key(&id) {
            id = session_id(self.sequence.allocate());
        }

        self.sessions.insert(id.clone(), Session::new(id.clone(), now));
        self.current_id = id.clone();
        tracing::info!("started {}", id);
        self.flush();
        id
    }

    pub fn current_id(&self) -> &str {
        &self.current_id
    }

    /// The current session, unless it has been purged
    pub fn current_session(&self) -> Option<&Session> {
        self.sessions.get(&self.current_id)
    }

    /// Append a message to the current session.
    /// Returns false, and does nothing, when the current session is gone.
    pub fn add_message(&mut self, role: Role, content: &str, emotion: Option<String>) -> bool {
        self.add_message_at(role, content, emotion, timestamp::now())
    }

    pub fn add_message_at(
        &mut self,
        role: Role,
        content: &str,
        emotion: Option<String>,
        now: NaiveDateTime,
    ) -> bool {
        let Some(session) = self.sessions.get_mut(&self.current_id) else {
            tracing::debug!("{} no longer exists, message dropped", self.current_id);
            return false;
        };

        session
            .messages
            .push(Message::new(role, content, emotion, now));
        self.flush();
        true
    }

    pub fn all_sessions(&self) -> &SessionMap {
        &self.sessions
    }

    /// The most recently created session
    pub fn latest_session(&self) -> Option<&Session> {
        latest(&self.sessions)
    }

    /// Drop every message of the current session
    pub fn clear_current_session(&mut self) {
        if let Some(session) = self.sessions.get_mut(&self.current_id) {
            session.messages.clear();
            self.flush();
        }
    }

    /// Delete sessions created more than `days` days ago
    pub fn purge_older_than(&mut self, days: u32) -> PurgeReport {
        self.purge_older_than_at(days, timestamp::now())
    }

    pub fn purge_older_than_at(&mut self, days: u32, now: NaiveDateTime) -> PurgeReport {
        let report = sweep_sessions(&mut self.sessions, days_before(now, days));

        for skipped in &report.skipped {
            self.diagnostics.record(StoreWarning::MalformedDate {
                id: skipped.id.clone(),
                reason: skipped.reason.clone(),
            });
        }
        if !report.removed.is_empty() {
            tracing::info!("purged {} session(s)", report.removed.len());
            self.flush();
        }
        report
    }

    pub fn diagnostics(&self) -> &[StoreWarning] {
        self.diagnostics.warnings()
    }

    pub fn take_diagnostics(&mut self) -> Vec<StoreWarning> {
        self.diagnostics.take()
    }

    fn flush(&mut self) {
        self.file.flush(&self.sessions, &mut self.diagnostics);
        self.sequence.flush(&mut self.diagnostics);
    }
}

/// Smallest session number that can't clash with what is stored
pub fn next_number(sessions: &SessionMap) -> u64 {
    let highest = sessions
        .keys()
        .filter_map(|id| session_number(id))
        .max()
        .unwrap_or(0);
    highest.max(sessions.len() as u64) + 1
}

/// Latest session by creation date; unreadable dates sort first
pub fn latest(sessions: &SessionMap) -> Option<&Session> {
    sessions.values().max_by_key(|s| s.created_at.datetime())
}
