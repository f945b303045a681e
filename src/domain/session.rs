//! Chat sessions and their messages

use crate::domain::timestamp::SessionDate;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

const SESSION_ID_PREFIX: &str = "session_";

/// Who wrote a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            _ => Err(format!(
                "Invalid role: '{}'. Valid roles are: user, assistant",
                s
            )),
        }
    }
}

/// One turn of a conversation. Never modified after it is appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    pub timestamp: NaiveDateTime,
    #[serde(default)]
    pub emotion: Option<String>,
}

impl Message {
    pub fn new(
        role: Role,
        content: impl Into<String>,
        emotion: Option<String>,
        timestamp: NaiveDateTime,
    ) -> Self {
        Message {
            role,
            content: content.into(),
            timestamp,
            emotion,
        }
    }
}

/// Lifecycle state of a session. Sessions stay active until purged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    #[default]
    Active,
}

/// A conversational thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    #[serde(rename = "date")]
    pub created_at: SessionDate,
    #[serde(default)]
    pub messages: Vec<Message>,
    /// Opaque duration value carried through untouched
    #[serde(default = "zero_duration")]
    pub duration: serde_json::Number,
    #[serde(default)]
    pub status: SessionStatus,
}

fn zero_duration() -> serde_json::Number {
    serde_json::Number::from(0)
}

impl Session {
    /// Create an empty, active session
    pub fn new(id: impl Into<String>, created_at: NaiveDateTime) -> Self {
        Session {
            id: id.into(),
            created_at: SessionDate::from_datetime(created_at),
            messages: Vec::new(),
            duration: zero_duration(),
            status: SessionStatus::Active,
        }
    }
}

/// Format the id for the n-th session
pub fn session_id(number: u64) -> String {
    format!("{}{}", SESSION_ID_PREFIX, number)
}

/// Extract the sequence number from a `session_<n>` id
pub fn session_number(id: &str) -> Option<u64> {
    id.strip_prefix(SESSION_ID_PREFIX)?.parse().ok()
}
