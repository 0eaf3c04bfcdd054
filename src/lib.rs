//! chrono-notes - Periodic note launcher
//!
//! Resolves a symbolic time reference such as `CurrentDaily` or `NextWeekly`
//! to a note file inside an Obsidian vault, creates the note from a template
//! when it is missing, and hands an `obsidian://` URI to the system opener.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::ChronoNoteError;
