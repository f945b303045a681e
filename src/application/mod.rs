//! Application layer - Use cases and orchestration

pub mod chat;
pub mod history;
pub mod init;
pub mod journal;
pub mod log_mood;
pub mod manage_config;
pub mod purge;

pub use chat::{ChatService, ChatTurn};
pub use history::{latest_session, list_sessions};
pub use journal::{show_entry, write_entry};
pub use log_mood::{log_mood, MoodInput};
pub use manage_config::ConfigService;
pub use purge::{purge, PurgeSummary};
