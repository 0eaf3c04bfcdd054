//! Hand-off of note URIs to the desktop URI handler

use crate::error::{ChronoNoteError, Result};
use std::process::Command;

/// Environment variable overriding the opener command
pub const OPENER_ENV: &str = "CHRONO_NOTES_OPENER";

/// Something that can open a URI
pub trait UriOpener {
    fn open(&self, uri: &str) -> Result<()>;
}

/// Opens URIs with the platform handler and returns immediately
#[derive(Debug, Clone)]
pub struct SystemOpener {
    command: String,
}

impl SystemOpener {
    /// Create an opener with an explicit command (URI is appended as last argument)
    pub fn new(command: String) -> Self {
        SystemOpener { command }
    }

    /// Use `CHRONO_NOTES_OPENER` when set, otherwise the platform default
    pub fn from_env() -> Self {
        let command = std::env::var(OPENER_ENV)
            .ok()
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| Self::platform_default().to_string());
        SystemOpener::new(command)
    }

    fn platform_default() -> &'static str {
        if cfg!(target_os = "macos") {
            "open"
        } else if cfg!(windows) {
            // Not `cmd /C start`: cmd would split the URI at `&`
            "explorer"
        } else {
            "xdg-open"
        }
    }

    /// Parse command into program and arguments
    fn parse_command(&self) -> (String, Vec<String>) {
        let mut parts: Vec<&str> = self.command.split_whitespace().collect();

        if parts.is_empty() {
            parts = Self::platform_default().split_whitespace().collect();
        }

        let program = parts[0].to_string();
        let args = parts[1..].iter().map(|s| s.to_string()).collect();

        (program, args)
    }
}

impl UriOpener for SystemOpener {
    fn open(&self, uri: &str) -> Result<()> {
        let (program, mut args) = self.parse_command();
        args.push(uri.to_string());

        tracing::info!("Attempting to open {} with {}", uri, program);

        // Fire and forget: the handler's exit status is not awaited
        Command::new(&program).args(&args).spawn().map_err(|e| {
            ChronoNoteError::OpenNote(format!("Failed to launch '{}': {}", program, e))
        })?;

        Ok(())
    }
}
