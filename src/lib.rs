//! mindcare - Private wellness companion
//!
//! Keeps chat sessions, mood samples and journal entries as JSON files in a
//! workspace directory. Each store loads its whole collection on open and
//! writes it back after every change.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MindcareError;
