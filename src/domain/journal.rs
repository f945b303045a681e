//! Journal entries

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A saved free-text entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub content: String,
    pub timestamp: NaiveDateTime,
    pub word_count: usize,
    pub id: u64,
}

impl JournalEntry {
    pub fn new(id: u64, content: impl Into<String>, timestamp: NaiveDateTime) -> Self {
        let content = content.into();
        JournalEntry {
            word_count: word_count(&content),
            content,
            timestamp,
            id,
        }
    }

    /// Case-insensitive substring match; an empty keyword matches everything
    pub fn matches(&self, keyword: &str) -> bool {
        self.content
            .to_lowercase()
            .contains(&keyword.to_lowercase())
    }

    /// The first `max_chars` characters, with an ellipsis when cut
    pub fn preview(&self, max_chars: usize) -> String {
        match self.content.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}...", &self.content[..cut]),
            None => self.content.clone(),
        }
    }
}

/// Number of whitespace-delimited tokens
pub fn word_count(content: &str) -> usize {
    content.split_whitespace().count()
}
