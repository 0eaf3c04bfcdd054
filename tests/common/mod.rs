#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::Path;

const INTERVALS: [&str; 5] = ["DAILY", "WEEKLY", "MONTHLY", "QUARTERLY", "ANNUALLY"];

/// Command with a clean environment and `home` as the user's home directory
pub fn chrono_notes_cmd(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("chrono-notes").unwrap();
    cmd.env_remove("OBSIDIAN_VAULT_NAME");
    for interval in INTERVALS {
        cmd.env_remove(format!("{}_FILE_FORMAT", interval));
        cmd.env_remove(format!("{}_PATH", interval));
        cmd.env_remove(format!("{}_TEMPLATE_PATH", interval));
    }
    cmd.env_remove("CHRONO_NOTES_CONFIG");
    cmd.env_remove("CHRONO_NOTES_OPENER");
    cmd.env("HOME", home);
    cmd.env("XDG_CONFIG_HOME", home.join(".config"));
    cmd
}

/// Vault with Daily and Weekly folders plus their templates
pub fn setup_vault(home: &Path) {
    fs::create_dir_all(home.join("Vault/Daily")).unwrap();
    fs::create_dir_all(home.join("Vault/Weekly")).unwrap();
    fs::create_dir_all(home.join("Vault/Templates")).unwrap();
    fs::write(home.join("Vault/Templates/Daily.md"), "# Daily\n\n## Tasks\n").unwrap();
    fs::write(home.join("Vault/Templates/Weekly.md"), "# Week\n").unwrap();
}

/// Environment configuring the vault name plus the Daily and Weekly intervals
pub fn vault_env(cmd: &mut Command) -> &mut Command {
    cmd.env("OBSIDIAN_VAULT_NAME", "Personal")
        .env("DAILY_FILE_FORMAT", "yyyy-MM-dd cccc")
        .env("DAILY_PATH", "~/Vault/Daily")
        .env("DAILY_TEMPLATE_PATH", "~/Vault/Templates/Daily.md")
        .env("WEEKLY_FILE_FORMAT", "yyyy-'W'nn")
        .env("WEEKLY_PATH", "~/Vault/Weekly")
        .env("WEEKLY_TEMPLATE_PATH", "~/Vault/Templates/Weekly.md")
}
