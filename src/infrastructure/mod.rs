//! Infrastructure layer - Persistence and external collaborators

pub mod collaborators;
pub mod config;
pub mod journal_store;
pub mod mood_store;
pub mod repository;
pub mod session_store;
pub mod store;

pub use collaborators::{ResponseGenerator, SimulatedVoice, SupportiveResponder, VoiceOutput};
pub use config::Config;
pub use journal_store::JournalStore;
pub use mood_store::MoodStore;
pub use repository::{FileSystemRepository, WorkspaceRepository};
pub use session_store::{SessionMap, SessionStore};
pub use store::{Diagnostics, JsonFile, Loaded, StoreWarning};
