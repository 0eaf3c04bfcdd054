//! Application layer - Use cases and orchestration

pub mod open_note;
pub mod show_config;

pub use open_note::{note_uri, OpenNoteOutcome, OpenNoteService};
pub use show_config::{ConfigReport, ConfigService};
