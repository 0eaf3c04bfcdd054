//! Fixture-driven CLI synthetic tests.
//!
//! Each case under `tests/fixtures/synthetic/<case>/` provides:
//! - `input/`    initial home tree copied to a temp directory used as `$HOME`
//! - `scenario.toml` environment, command list and command-level assertions
//! - `expected/` expected final home tree after executing scenario

use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use walkdir::WalkDir;

#[derive(Debug, Deserialize)]
struct Scenario {
    #[serde(default)]
    env: BTreeMap<String, String>,
    #[serde(rename = "command")]
    commands: Vec<CommandSpec>,
}

#[derive(Debug, Deserialize)]
struct CommandSpec {
    args: Vec<String>,
    #[serde(default = "default_exit_code")]
    expect_exit: i32,
    #[serde(default)]
    stdout_contains: Vec<String>,
    #[serde(default)]
    stdout_not_contains: Vec<String>,
    #[serde(default)]
    stderr_contains: Vec<String>,
    #[serde(default)]
    stderr_not_contains: Vec<String>,
}

fn default_exit_code() -> i32 {
    0
}

#[test]
fn test_synthetic_fixtures() {
    let root = Path::new("tests").join("fixtures").join("synthetic");
    assert!(
        root.exists(),
        "Synthetic fixture root missing: {}",
        root.display()
    );

    let mut case_dirs: Vec<PathBuf> = fs::read_dir(&root)
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_dir())
        .collect();
    case_dirs.sort();
    assert!(!case_dirs.is_empty(), "No synthetic test cases found");

    for case_dir in case_dirs {
        run_case(&case_dir);
    }
}

fn run_case(case_dir: &Path) {
    let case_name = case_dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown-case>");

    let input_dir = case_dir.join("input");
    let expected_dir = case_dir.join("expected");
    let scenario_path = case_dir.join("scenario.toml");

    for required in [&input_dir, &expected_dir, &scenario_path] {
        assert!(
            required.exists(),
            "Case '{}' is missing {}",
            case_name,
            required.display()
        );
    }

    let scenario_content = fs::read_to_string(&scenario_path).unwrap_or_else(|e| {
        panic!(
            "Case '{}' failed to read scenario file {}: {}",
            case_name,
            scenario_path.display(),
            e
        )
    });
    let scenario: Scenario = toml::from_str(&scenario_content).unwrap_or_else(|e| {
        panic!(
            "Case '{}' has invalid scenario TOML in {}: {}",
            case_name,
            scenario_path.display(),
            e
        )
    });

    let temp = tempfile::TempDir::new().unwrap();
    copy_tree(&input_dir, temp.path());

    for (idx, command) in scenario.commands.iter().enumerate() {
        let output = run_chrono_notes(temp.path(), &scenario.env, &command.args);
        let code = output.status.code().unwrap_or(-1);
        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        assert_eq!(
            code,
            command.expect_exit,
            "Case '{}', command #{} ({:?}) exit code mismatch.\nstdout:\n{}\nstderr:\n{}",
            case_name,
            idx + 1,
            command.args,
            stdout,
            stderr
        );

        let label = format!("Case '{}', command #{} ({:?})", case_name, idx + 1, command.args);
        assert_stream(&label, "stdout", &stdout, &command.stdout_contains, true);
        assert_stream(&label, "stdout", &stdout, &command.stdout_not_contains, false);
        assert_stream(&label, "stderr", &stderr, &command.stderr_contains, true);
        assert_stream(&label, "stderr", &stderr, &command.stderr_not_contains, false);
    }

    assert_trees_match(case_name, &expected_dir, temp.path());
}

fn run_chrono_notes(home: &Path, env: &BTreeMap<String, String>, args: &[String]) -> Output {
    let mut cmd = std::process::Command::new(env!("CARGO_BIN_EXE_chrono-notes"));
    cmd.current_dir(home)
        .env_remove("OBSIDIAN_VAULT_NAME")
        .env_remove("CHRONO_NOTES_CONFIG")
        .env_remove("CHRONO_NOTES_OPENER")
        .env("HOME", home)
        .env("XDG_CONFIG_HOME", home.join(".config"));
    for interval in ["DAILY", "WEEKLY", "MONTHLY", "QUARTERLY", "ANNUALLY"] {
        cmd.env_remove(format!("{}_FILE_FORMAT", interval))
            .env_remove(format!("{}_PATH", interval))
            .env_remove(format!("{}_TEMPLATE_PATH", interval));
    }
    cmd.envs(env).args(args);

    cmd.output().unwrap_or_else(|e| {
        panic!(
            "Failed to execute chrono-notes in {} with args {:?}: {}",
            home.display(),
            args,
            e
        )
    })
}

fn assert_stream(label: &str, stream: &str, text: &str, needles: &[String], present: bool) {
    for needle in needles {
        assert_eq!(
            text.contains(needle.as_str()),
            present,
            "{} expected {} {} {:?}.\n{}:\n{}",
            label,
            stream,
            if present { "to contain" } else { "to NOT contain" },
            needle,
            stream,
            text
        );
    }
}

fn copy_tree(from: &Path, to: &Path) {
    for entry in WalkDir::new(from).into_iter().filter_map(|e| e.ok()) {
        let src_path = entry.path();
        let rel_path = src_path.strip_prefix(from).unwrap();
        if rel_path.as_os_str().is_empty() {
            continue;
        }

        let dest_path = to.join(rel_path);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&dest_path).unwrap();
        } else if entry.file_type().is_file() {
            if let Some(parent) = dest_path.parent() {
                fs::create_dir_all(parent).unwrap();
            }
            fs::copy(src_path, &dest_path).unwrap();
        }
    }
}

fn assert_trees_match(case_name: &str, expected_root: &Path, actual_root: &Path) {
    let expected_files = collect_relative_files(expected_root);
    let actual_files = collect_relative_files(actual_root);

    let missing: Vec<_> = expected_files.difference(&actual_files).cloned().collect();
    let extra: Vec<_> = actual_files.difference(&expected_files).cloned().collect();

    assert!(
        missing.is_empty() && extra.is_empty(),
        "Case '{}' tree mismatch.\nMissing files: {:?}\nExtra files: {:?}",
        case_name,
        missing,
        extra
    );

    for rel in expected_files {
        let expected_path = expected_root.join(&rel);
        let actual_path = actual_root.join(&rel);
        assert_file_matches(case_name, &rel, &expected_path, &actual_path);
    }
}

fn collect_relative_files(root: &Path) -> BTreeSet<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.path().strip_prefix(root).unwrap().to_path_buf())
        .collect()
}

fn assert_file_matches(case_name: &str, rel: &Path, expected_path: &Path, actual_path: &Path) {
    let expected = fs::read(expected_path).unwrap();
    let actual = fs::read(actual_path).unwrap();

    if expected == actual {
        return;
    }

    match (String::from_utf8(expected), String::from_utf8(actual)) {
        (Ok(expected_text), Ok(actual_text)) => assert_eq!(
            expected_text.replace("\r\n", "\n"),
            actual_text.replace("\r\n", "\n"),
            "Case '{}' file mismatch at {}",
            case_name,
            rel.display()
        ),
        _ => panic!(
            "Case '{}' binary file mismatch at {}",
            case_name,
            rel.display()
        ),
    }
}
