//! Output formatting utilities

use crate::application::{ConfigReport, OpenNoteOutcome};
use crate::infrastructure::{IntervalConfig, VAULT_NAME_KEY};

const UNSET: &str = "<unset>";

/// Format the result of an open-note run: the URI goes to stdout
pub fn format_outcome(outcome: &OpenNoteOutcome) -> String {
    outcome.uri.clone()
}

/// Format the resolved configuration as `KEY = value` lines
pub fn format_config_report(report: &ConfigReport) -> String {
    let mut output = String::new();
    output.push_str(&line(VAULT_NAME_KEY, report.vault.as_deref().unwrap_or("")));

    for (interval, config) in &report.intervals {
        output.push_str(&line(
            &IntervalConfig::file_format_key(*interval),
            &config.file_format,
        ));
        output.push_str(&line(
            &IntervalConfig::folder_path_key(*interval),
            &config.folder_path,
        ));
        output.push_str(&line(
            &IntervalConfig::template_path_key(*interval),
            &config.template_path,
        ));
    }

    output
}

fn line(key: &str, value: &str) -> String {
    let value = if value.trim().is_empty() { UNSET } else { value };
    format!("{} = {}\n", key, value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Interval;
    use std::path::PathBuf;

    #[test]
    fn test_format_outcome_is_uri() {
        let outcome = OpenNoteOutcome {
            file_name: "2022-W42.md".to_string(),
            full_path: PathBuf::from("/home/u/Vault/2022-W42.md"),
            uri: "obsidian://open?vault=V&file=2022-W42.md".to_string(),
            created: true,
        };

        assert_eq!(
            format_outcome(&outcome),
            "obsidian://open?vault=V&file=2022-W42.md"
        );
    }

    #[test]
    fn test_format_config_report() {
        let report = ConfigReport {
            vault: Some("Personal".to_string()),
            intervals: vec![(
                Interval::Weekly,
                IntervalConfig {
                    file_format: "yyyy-'W'nn".to_string(),
                    folder_path: "~/Vault/Weekly".to_string(),
                    template_path: String::new(),
                },
            )],
        };

        assert_eq!(
            format_config_report(&report),
            "OBSIDIAN_VAULT_NAME = Personal\n\
             WEEKLY_FILE_FORMAT = yyyy-'W'nn\n\
             WEEKLY_PATH = ~/Vault/Weekly\n\
             WEEKLY_TEMPLATE_PATH = <unset>\n"
        );
    }

    #[test]
    fn test_format_missing_vault() {
        let report = ConfigReport {
            vault: None,
            intervals: vec![],
        };

        assert_eq!(
            format_config_report(&report),
            "OBSIDIAN_VAULT_NAME = <unset>\n"
        );
    }
}
