//! Age-based retention
//!
//! A sweep walks every record, classifies it against the cutoff, and keeps
//! going when a record's date can't be read.

use crate::domain::session::Session;
use crate::domain::timestamp::DateCheck;
use chrono::NaiveDateTime;
use std::collections::BTreeMap;

/// A record left in place because its date could not be read
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub id: String,
    pub reason: String,
}

/// Result of one retention sweep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PurgeReport {
    pub removed: Vec<String>,
    pub skipped: Vec<SkippedRecord>,
}

impl PurgeReport {
    pub fn removed_count(&self) -> usize {
        self.removed.len()
    }
}

/// Remove every session created strictly before `cutoff`.
pub fn sweep_sessions(
    sessions: &mut BTreeMap<String, Session>,
    cutoff: NaiveDateTime,
) -> PurgeReport {
    let mut report = PurgeReport::default();

    for (id, session) in sessions.iter() {
        match session.created_at.check() {
            DateCheck::Ok(created) if created < cutoff => report.removed.push(id.clone()),
            DateCheck::Ok(_) => {}
            DateCheck::Skipped(reason) => report.skipped.push(SkippedRecord {
                id: id.clone(),
                reason,
            }),
        }
    }

    for id in &report.removed {
        sessions.remove(id);
    }

    report
}
