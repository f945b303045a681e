//! Log mood use case

use crate::domain::timestamp;
use crate::domain::MoodEntry;
use crate::error::Result;
use crate::infrastructure::MoodStore;

/// What the user reported
#[derive(Debug, Clone, Default)]
pub struct MoodInput {
    pub mood: String,
    pub energy: u8,
    pub anxiety: u8,
    pub triggers: Vec<String>,
    pub notes: Option<String>,
}

/// Validate and append a mood sample stamped now
pub fn log_mood(store: &mut MoodStore, input: MoodInput) -> Result<MoodEntry> {
    let triggers = input
        .triggers
        .iter()
        .map(|t| t.trim().to_lowercase())
        .filter(|t| !t.is_empty());

    let entry = MoodEntry::new(
        input.mood.trim(),
        input.energy,
        input.anxiety,
        timestamp::now(),
    )?
    .with_triggers(triggers)
    .with_notes(input.notes.unwrap_or_default());

    store.log(entry.clone());
    Ok(entry)
}
