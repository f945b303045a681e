//! Journal use cases

use crate::domain::{timestamp, JournalEntry};
use crate::error::{MindcareError, Result};
use crate::infrastructure::JournalStore;

/// Save an entry stamped now. Blank entries are refused.
pub fn write_entry(store: &mut JournalStore, content: &str) -> Result<JournalEntry> {
    if content.trim().is_empty() {
        return Err(MindcareError::InvalidInput(
            "Please write something before saving".to_string(),
        ));
    }
    Ok(store.save(content, timestamp::now()))
}

/// Look up an entry or report it missing
pub fn show_entry(store: &JournalStore, id: u64) -> Result<JournalEntry> {
    store
        .by_id(id)
        .cloned()
        .ok_or(MindcareError::EntryNotFound(id))
}
