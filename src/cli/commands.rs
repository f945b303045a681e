//! CLI command definitions

use crate::infrastructure::journal_store::DEFAULT_RECENT_LIMIT;
use crate::infrastructure::mood_store::DEFAULT_HISTORY_DAYS;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "mindcare")]
#[command(about = "Private wellness companion: chat, mood tracking and journaling", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize a new workspace
    Init {
        /// Directory to initialize (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,
    },

    /// View or modify configuration
    Config {
        /// Config key to get or set
        key: Option<String>,

        /// Value to set (if provided, sets the key)
        value: Option<String>,

        /// List all configuration
        #[arg(short, long)]
        list: bool,
    },

    /// Send one message and print the reply
    Chat {
        message: String,

        /// How you are feeling, stored with your message
        #[arg(short, long)]
        emotion: Option<String>,

        /// Also speak the reply
        #[arg(long)]
        voice: bool,
    },

    /// Track your mood
    #[command(subcommand)]
    Mood(MoodCommand),

    /// Write and read journal entries
    #[command(subcommand)]
    Journal(JournalCommand),

    /// List chat sessions
    Sessions {
        /// Show only the most recent session
        #[arg(long)]
        latest: bool,
    },

    /// Delete sessions and mood entries older than the retention period
    Purge {
        /// Age limit in days (default: retention_days from config)
        #[arg(short, long)]
        days: Option<u32>,
    },
}

#[derive(Subcommand, Debug)]
pub enum MoodCommand {
    /// Record how you feel right now
    Log {
        /// Mood label (e.g. good, anxious, calm)
        mood: String,

        /// Energy level, 1-10
        #[arg(short, long)]
        energy: u8,

        /// Anxiety level, 1-10
        #[arg(short, long)]
        anxiety: u8,

        /// What contributed (repeatable)
        #[arg(short, long = "trigger")]
        triggers: Vec<String>,

        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Show entries from the last few days
    History {
        #[arg(short, long, default_value_t = DEFAULT_HISTORY_DAYS)]
        days: u32,
    },

    /// Averages over the last week
    Stats,
}

#[derive(Subcommand, Debug)]
pub enum JournalCommand {
    /// Save a new entry
    Write { text: String },

    /// List the newest entries
    Recent {
        #[arg(short, long, default_value_t = DEFAULT_RECENT_LIMIT)]
        limit: usize,
    },

    /// Find entries containing a keyword (case-insensitive)
    Search { keyword: String },

    /// Print one entry in full
    Show { id: u64 },

    /// Suggest something to write about today
    Prompt,
}
