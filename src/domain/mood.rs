//! Mood samples and their aggregate statistics

use crate::error::{MindcareError, Result};
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A self-reported 1-10 rating
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    pub fn value(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Level {
    type Error = String;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        if (Self::MIN..=Self::MAX).contains(&value) {
            Ok(Level(value))
        } else {
            Err(format!(
                "level must be between {} and {}, got {}",
                Self::MIN,
                Self::MAX,
                value
            ))
        }
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

/// One mood sample
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodEntry {
    pub mood: String,
    pub energy: Level,
    pub anxiety: Level,
    #[serde(default)]
    pub triggers: BTreeSet<String>,
    #[serde(default)]
    pub notes: String,
    pub timestamp: NaiveDateTime,
}

impl MoodEntry {
    /// Create an entry, validating both ratings
    pub fn new(
        mood: impl Into<String>,
        energy: u8,
        anxiety: u8,
        timestamp: NaiveDateTime,
    ) -> Result<Self> {
        let mood = mood.into();
        if mood.trim().is_empty() {
            return Err(MindcareError::InvalidInput(
                "mood label cannot be empty".to_string(),
            ));
        }
        let energy = Level::try_from(energy)
            .map_err(|e| MindcareError::InvalidInput(format!("energy {}", e)))?;
        let anxiety = Level::try_from(anxiety)
            .map_err(|e| MindcareError::InvalidInput(format!("anxiety {}", e)))?;

        Ok(MoodEntry {
            mood,
            energy,
            anxiety,
            triggers: BTreeSet::new(),
            notes: String::new(),
            timestamp,
        })
    }

    pub fn with_triggers<I, S>(mut self, triggers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.triggers = triggers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }
}

/// Aggregates over the recent window
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MoodStats {
    pub total_entries: usize,
    pub recent_entries: usize,
    pub avg_energy: f64,
    pub avg_anxiety: f64,
}

impl MoodStats {
    /// Compute stats from the full count and the entries inside the window.
    /// Averages stay at zero when the window is empty.
    pub fn from_window(total_entries: usize, window: &[&MoodEntry]) -> Self {
        if window.is_empty() {
            return MoodStats {
                total_entries,
                ..MoodStats::default()
            };
        }

        let count = window.len() as f64;
        let energy: u32 = window.iter().map(|e| u32::from(e.energy.value())).sum();
        let anxiety: u32 = window.iter().map(|e| u32::from(e.anxiety.value())).sum();

        MoodStats {
            total_entries,
            recent_entries: window.len(),
            avg_energy: f64::from(energy) / count,
            avg_anxiety: f64::from(anxiety) / count,
        }
    }
}
