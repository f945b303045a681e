//! Domain layer - Records and business rules

pub mod approach;
pub mod journal;
pub mod mood;
pub mod retention;
pub mod session;
pub mod template;
pub mod timestamp;

pub use approach::TherapyApproach;
pub use journal::JournalEntry;
pub use mood::{Level, MoodEntry, MoodStats};
pub use retention::{PurgeReport, SkippedRecord};
pub use session::{Message, Role, Session, SessionStatus};
pub use template::{journal_prompt_for, load_template, PromptTemplate};
pub use timestamp::SessionDate;
