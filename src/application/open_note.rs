//! Open note use case

use crate::domain::{ChronoNote, ChronoSpec};
use crate::error::Result;
use crate::infrastructure::{ConfigProvider, FileProvider, UriOpener, NOTE_EXTENSION};
use chrono::NaiveDate;
use std::path::PathBuf;

/// What an open-note run resolved and did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenNoteOutcome {
    /// Note file name, e.g. "2022-10-10 Monday.md"
    pub file_name: String,
    /// Absolute path of the note
    pub full_path: PathBuf,
    /// `obsidian://` URI for the note
    pub uri: String,
    /// True when this run created the note from its template
    pub created: bool,
}

/// Build the URI Obsidian uses to open a note by file name
pub fn note_uri(vault: &str, file_name: &str) -> String {
    format!("obsidian://open?vault={}&file={}", vault, file_name)
}

/// Service resolving, creating and opening periodic notes
pub struct OpenNoteService<F: FileProvider, O: UriOpener> {
    config: ConfigProvider,
    files: F,
    opener: O,
    reference_date: NaiveDate,
}

impl<F: FileProvider, O: UriOpener> OpenNoteService<F, O> {
    /// Create a new open note service; dates resolve relative to `reference_date`
    pub fn new(config: ConfigProvider, files: F, opener: O, reference_date: NaiveDate) -> Self {
        OpenNoteService {
            config,
            files,
            opener,
            reference_date,
        }
    }

    /// Resolve `arg` to a note, creating it from its template if needed.
    /// Hands the URI to the opener only when `open_note` is true.
    pub fn execute(&self, arg: &str, open_note: bool) -> Result<OpenNoteOutcome> {
        tracing::debug!("Passed in argument: {}", arg);

        // 1. Parse argument and resolve the note date
        let spec = ChronoSpec::parse(arg)?;
        tracing::info!(
            "Parsed argument with interval as {} and ordinal as {}",
            spec.interval,
            spec.ordinal
        );
        let note = ChronoNote::new(spec, self.reference_date)?;

        // 2. Vault name must be set
        let vault = self.config.validate_vault_name()?;

        // 3. Interval config must be complete
        let interval_config = self.config.interval_config(note.interval());
        ConfigProvider::validate_interval_config(note.interval(), &interval_config)?;

        // 4. File name and full path
        let formatted = note.format_date(&interval_config.file_format)?;
        let file_name = format!("{}.{}", formatted, NOTE_EXTENSION);
        tracing::info!("File name: {}", file_name);

        let full_path = self
            .files
            .resolve_note_full_path(&interval_config.folder_path, &formatted);
        tracing::info!("Full path: {}", full_path.display());

        // 5. Create from template when missing
        let full_path_str = full_path.to_string_lossy();
        let created = if self.files.does_file_exist(&full_path_str) {
            tracing::info!("File already exists");
            false
        } else {
            tracing::info!("File does not exist, creating one from provided template");
            self.files
                .create_templated_note(&full_path_str, &interval_config.template_path)?;
            true
        };

        // 6. Open in Obsidian
        let uri = note_uri(&vault, &file_name);
        if open_note {
            self.opener.open(&uri)?;
        }

        Ok(OpenNoteOutcome {
            file_name,
            full_path,
            uri,
            created,
        })
    }
}
