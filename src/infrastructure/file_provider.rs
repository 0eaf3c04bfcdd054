//! Filesystem access for notes and templates
//!
//! Every path handed to the filesystem is first expanded (`~` to the home
//! directory) and checked against the home-anchored path schema.

use crate::error::{ChronoNoteError, Result};
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};

/// Extension appended to every note file name
pub const NOTE_EXTENSION: &str = "md";

/// Abstract file operations used by the open-note flow
pub trait FileProvider {
    /// Expand a leading `~` to the home directory
    fn resolve_home_path(&self, path: &str) -> PathBuf;

    /// True when `path` lies under the home directory and uses only safe characters
    fn is_valid_path_schema(&self, path: &Path) -> bool;

    /// True only when `path` exists and is a regular file
    fn does_file_exist(&self, path: &str) -> bool;

    /// Fail unless `path` is a valid, existing regular file
    fn check_if_file_exists(&self, path: &str) -> Result<()>;

    /// `<directory>/<formatted_date>.md`, with `~` expanded
    fn resolve_note_full_path(&self, directory: &str, formatted_date: &str) -> PathBuf;

    /// Read a template file as UTF-8 text
    fn read_template(&self, path: &Path) -> Result<String>;

    /// Create `target` as a verbatim copy of `template`; never overwrites
    fn create_templated_note(&self, target: &str, template: &str) -> Result<()>;
}

/// File system implementation of FileProvider
#[derive(Debug, Clone)]
pub struct FileSystemProvider {
    home: PathBuf,
    schema: Regex,
}

impl FileSystemProvider {
    /// Create a provider rooted at the given home directory
    pub fn new(home: PathBuf) -> Result<Self> {
        let home_str = home.to_str().ok_or_else(|| {
            ChronoNoteError::Config(format!(
                "Home directory is not valid UTF-8: {}",
                home.display()
            ))
        })?;
        let anchor = regex::escape(home_str.trim_end_matches('/'));
        // A root home leaves no anchor; at least one `/` segment must follow then
        let segments = if anchor.is_empty() { "+" } else { "*" };
        let schema = Regex::new(&format!(
            r"^{}(?:/[A-Za-z0-9._ -]*){}$",
            anchor, segments
        ))
            .map_err(|e| ChronoNoteError::Config(format!("Invalid path schema: {}", e)))?;

        Ok(FileSystemProvider { home, schema })
    }

    /// Provider for the current user: `$HOME`, falling back to the platform lookup
    pub fn from_env() -> Result<Self> {
        let home = std::env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .map(PathBuf::from)
            .or_else(dirs::home_dir)
            .ok_or_else(|| {
                ChronoNoteError::Config("Unable to determine home directory".to_string())
            })?;
        Self::new(home)
    }

    fn check_schema(&self, path: &Path) -> Result<()> {
        if !self.is_valid_path_schema(path) {
            return Err(ChronoNoteError::InvalidFilePathSchema(
                path.display().to_string(),
            ));
        }
        Ok(())
    }
}

impl FileProvider for FileSystemProvider {
    fn resolve_home_path(&self, path: &str) -> PathBuf {
        match path.strip_prefix('~') {
            Some(rest) => self.home.join(rest.trim_start_matches('/')),
            None => PathBuf::from(path),
        }
    }

    fn is_valid_path_schema(&self, path: &Path) -> bool {
        let Some(path) = path.to_str() else {
            return false;
        };

        !path.is_empty()
            && self.schema.is_match(path)
            && !path.split('/').any(|segment| segment == "..")
    }

    fn does_file_exist(&self, path: &str) -> bool {
        self.resolve_home_path(path).is_file()
    }

    fn check_if_file_exists(&self, path: &str) -> Result<()> {
        let path = self.resolve_home_path(path);

        self.check_schema(&path)?;

        if !path.exists() {
            return Err(ChronoNoteError::FileDoesNotExist(path));
        }

        if !path.is_file() {
            return Err(ChronoNoteError::PathNotFile(path));
        }

        Ok(())
    }

    fn resolve_note_full_path(&self, directory: &str, formatted_date: &str) -> PathBuf {
        self.resolve_home_path(directory)
            .join(format!("{}.{}", formatted_date, NOTE_EXTENSION))
    }

    fn read_template(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|source| ChronoNoteError::FatalReadFileSync {
            path: path.to_path_buf(),
            source,
        })
    }

    fn create_templated_note(&self, target: &str, template: &str) -> Result<()> {
        // 1. Never overwrite an existing note
        if self.does_file_exist(target) {
            return Err(ChronoNoteError::FileAlreadyExists(
                self.resolve_home_path(target),
            ));
        }

        let target_path = self.resolve_home_path(target);
        self.check_schema(&target_path)?;

        // 2. Template must be a valid, existing file
        self.check_if_file_exists(template)?;

        // 3. Fetch the template contents
        let template_path = self.resolve_home_path(template);
        let content = self.read_template(&template_path)?;

        // 4. Create the note from the template
        fs::write(&target_path, content).map_err(|source| {
            ChronoNoteError::FatalWriteFileSync {
                path: target_path.clone(),
                source,
            }
        })?;

        tracing::info!(
            "Created {} from template {}",
            target_path.display(),
            template_path.display()
        );
        Ok(())
    }
}
