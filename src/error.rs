//! Error types for chrono-notes

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for chrono-notes
#[derive(Debug, Error)]
pub enum ChronoNoteError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Missing configuration: {0}")]
    MissingConfiguration(String),

    #[error("Invalid date format: '{0}' produced an empty file name")]
    InvalidDateFormat(String),

    #[error("Invalid path schema: {0}")]
    InvalidFilePathSchema(String),

    #[error("File does not exist at {0}")]
    FileDoesNotExist(PathBuf),

    #[error("Path is not a file at {0}")]
    PathNotFile(PathBuf),

    #[error("File already exists at {0}")]
    FileAlreadyExists(PathBuf),

    #[error("Could not read template file at {path}: {source}")]
    FatalReadFileSync {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not create templated file at {path}: {source}")]
    FatalWriteFileSync {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not open note: {0}")]
    OpenNote(String),

    #[error("Date out of range: {0}")]
    DateOutOfRange(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl ChronoNoteError {
    /// Name of the error kind, as reported in logs
    pub fn name(&self) -> &'static str {
        match self {
            ChronoNoteError::InvalidArgument(_) => "InvalidArgument",
            ChronoNoteError::MissingConfiguration(_) => "MissingConfiguration",
            ChronoNoteError::InvalidDateFormat(_) => "InvalidDateFormat",
            ChronoNoteError::InvalidFilePathSchema(_) => "InvalidFilePathSchema",
            ChronoNoteError::FileDoesNotExist(_) => "FileDoesNotExist",
            ChronoNoteError::PathNotFile(_) => "PathNotFile",
            ChronoNoteError::FileAlreadyExists(_) => "FileAlreadyExists",
            ChronoNoteError::FatalReadFileSync { .. } => "FatalReadFileSync",
            ChronoNoteError::FatalWriteFileSync { .. } => "FatalWriteFileSync",
            ChronoNoteError::OpenNote(_) => "OpenNote",
            ChronoNoteError::DateOutOfRange(_) => "DateOutOfRange",
            ChronoNoteError::Config(_) => "Config",
            ChronoNoteError::Io(_) => "Io",
            ChronoNoteError::TomlDeserialize(_) => "TomlDeserialize",
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            ChronoNoteError::MissingConfiguration(_) => 2,
            ChronoNoteError::InvalidArgument(_) => 3,
            ChronoNoteError::FileAlreadyExists(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            ChronoNoteError::InvalidArgument(arg) => {
                format!(
                    "Invalid argument: '{}'\n\n\
                    The argument must name one ordinal and one interval:\n\
                    • Ordinals: Current, Next, Previous\n\
                    • Intervals: Daily, Weekly, Monthly, Quarterly, Annually\n\n\
                    Examples:\n\
                    chrono-notes CurrentDaily\n\
                    chrono-notes NextWeekly\n\
                    chrono-notes PreviousMonthly",
                    arg
                )
            }
            ChronoNoteError::MissingConfiguration(key) => {
                format!(
                    "Missing configuration: {}\n\n\
                    Suggestions:\n\
                    • Export the variable, e.g. export {}=...\n\
                    • Or set it in the config file passed with --config\n\
                    • Run 'chrono-notes config' to see what is currently resolved",
                    key, key
                )
            }
            ChronoNoteError::InvalidDateFormat(token) => {
                format!(
                    "{}\n\n\
                    Format tokens follow Luxon, e.g. 'yyyy-MM-dd cccc' or \"yyyy-'W'nn\"",
                    ChronoNoteError::InvalidDateFormat(token.clone())
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using ChronoNoteError
pub type Result<T> = std::result::Result<T, ChronoNoteError>;
