//! Retention use case
//!
//! Sweeps the sessions resource without opening a `SessionStore`, so a purge
//! never leaves a fresh empty session behind.

use crate::domain::retention::sweep_sessions;
use crate::domain::timestamp::{self, days_before};
use crate::domain::PurgeReport;
use crate::infrastructure::session_store::next_number;
use crate::infrastructure::store::IdSequence;
use crate::infrastructure::{Diagnostics, FileSystemRepository, JsonFile, SessionMap, StoreWarning};
use chrono::NaiveDateTime;

/// What one purge removed across the workspace
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurgeSummary {
    pub sessions: PurgeReport,
    pub mood_removed: usize,
}

/// Delete sessions and mood entries older than `days` days
pub fn purge(repository: &FileSystemRepository, days: u32) -> PurgeSummary {
    purge_at(repository, days, timestamp::now())
}

pub fn purge_at(repository: &FileSystemRepository, days: u32, now: NaiveDateTime) -> PurgeSummary {
    let mut diagnostics = Diagnostics::default();
    let file = JsonFile::<SessionMap>::new(repository.sessions_path());

    let loaded = file.load();
    if let Some(warning) = loaded.warning {
        diagnostics.record(warning);
    }
    let mut sessions = loaded.records;
    // Pin the counter before ids disappear from the collection
    let sequence = IdSequence::open(file.path(), next_number(&sessions), &mut diagnostics);

    let report = sweep_sessions(&mut sessions, days_before(now, days));
    for skipped in &report.skipped {
        diagnostics.record(StoreWarning::MalformedDate {
            id: skipped.id.clone(),
            reason: skipped.reason.clone(),
        });
    }
    if !report.removed.is_empty() {
        tracing::info!("purged {} session(s)", report.removed.len());
        file.flush(&sessions, &mut diagnostics);
        sequence.flush(&mut diagnostics);
    }

    let mut mood = repository.open_mood();
    let mood_removed = mood.purge_older_than_at(days, now);

    PurgeSummary {
        sessions: report,
        mood_removed,
    }
}
