//! CLI layer - Command-line interface

pub mod commands;
pub mod output;

pub use commands::{Cli, Commands, JournalCommand, MoodCommand};
pub use output::{
    format_journal_entry, format_journal_list, format_mood_history, format_mood_stats,
    format_purge_summary, format_session_detail, format_sessions,
};
