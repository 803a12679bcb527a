//! Integration tests for the pafilter binary.

mod common;

use assert_cmd::cargo::cargo_bin_cmd;
use common::{too_early, well_placed, write_example};
use predicates::prelude::*;
use tempfile::TempDir;

/// Command isolated from any user configuration.
fn pafilter(config_dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("pafilter");
    cmd.env("PAFILTER_CONFIG", config_dir.path().join("config.toml"))
        .env_remove("RUST_LOG")
        .env_remove("PAFILTER_LEFT_WINDOW_MS")
        .env_remove("PAFILTER_RIGHT_WINDOW_MS");
    cmd
}

#[test]
fn test_no_arguments_is_usage_error() {
    let config_dir = TempDir::new().unwrap();

    pafilter(&config_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn test_two_directories_is_usage_error() {
    let config_dir = TempDir::new().unwrap();
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    write_example(a.path(), "x", &too_early());

    pafilter(&config_dir)
        .arg(a.path())
        .arg(b.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unexpected argument"));

    // Nothing was processed
    assert!(a.path().join("x.TextGrid").exists());
}

#[test]
fn test_narrates_removal_and_deletion() {
    let config_dir = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    write_example(data.path(), "early", &too_early());

    pafilter(&config_dir)
        .arg("--no-progress")
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Parsing \""))
        .stdout(predicate::str::contains(
            "early.TextGrid - removing pre interval due to illegal range: (0.01, 0.3)",
        ))
        .stdout(predicate::str::contains(
            "Deleting early.TextGrid since it has no pre intervals in the expected range",
        ));

    assert!(!data.path().join("early.TextGrid").exists());
    assert!(!data.path().join("early.wav").exists());
}

#[test]
fn test_kept_example_is_not_narrated_as_removal() {
    let config_dir = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    write_example(data.path(), "good", &well_placed());

    pafilter(&config_dir)
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("removing").not())
        .stdout(predicate::str::contains("Deleting").not());

    let content = std::fs::read_to_string(data.path().join("good.TextGrid")).unwrap();
    assert!(content.contains("name = \"bell\""));
}

#[test]
fn test_window_flag_overrides_default() {
    let config_dir = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    write_example(data.path(), "early", &too_early());

    pafilter(&config_dir)
        .arg("--left-window-ms")
        .arg("5")
        .arg(data.path())
        .assert()
        .success();

    assert!(data.path().join("early.TextGrid").exists());
}

#[test]
fn test_config_file_windows_apply() {
    let config_dir = TempDir::new().unwrap();
    std::fs::write(
        config_dir.path().join("config.toml"),
        "[filter]\nleft_window_ms = 200\n",
    )
    .unwrap();
    let data = TempDir::new().unwrap();
    write_example(data.path(), "good", &well_placed());

    pafilter(&config_dir).arg(data.path()).assert().success();

    // 0.1 s start is now inside the 200 ms left window
    assert!(!data.path().join("good.TextGrid").exists());
}

#[test]
fn test_dry_run_keeps_files() {
    let config_dir = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    write_example(data.path(), "early", &too_early());

    pafilter(&config_dir)
        .arg("--dry-run")
        .arg(data.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Would delete early.TextGrid"));

    assert!(data.path().join("early.TextGrid").exists());
    assert!(data.path().join("early.wav").exists());
}

#[test]
fn test_missing_directory_fails() {
    let config_dir = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();

    pafilter(&config_dir)
        .arg(data.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read directory"));
}

#[test]
fn test_malformed_annotation_fails() {
    let config_dir = TempDir::new().unwrap();
    let data = TempDir::new().unwrap();
    write_example(data.path(), "bad", "File type = \"ooTextFile\"\n");

    pafilter(&config_dir)
        .arg(data.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to parse annotation file"));
}

#[test]
fn test_config_init_and_path() {
    let config_dir = TempDir::new().unwrap();
    let config_path = config_dir.path().join("config.toml");

    pafilter(&config_dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));

    pafilter(&config_dir)
        .args(["config", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));
    assert!(config_path.exists());

    pafilter(&config_dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("left_window_ms = 50"))
        .stdout(predicate::str::contains("tier_name = \"bell\""));
}

#[test]
fn test_directory_named_config_is_filtered() {
    let config_dir = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    let data = work.path().join("config");
    std::fs::create_dir(&data).unwrap();
    write_example(&data, "early", &too_early());
    write_example(&data, "good", &well_placed());

    pafilter(&config_dir)
        .current_dir(work.path())
        .args(["--no-progress", "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleting early.TextGrid"));

    assert!(!data.join("early.TextGrid").exists());
    assert!(!data.join("early.wav").exists());
    let content = std::fs::read_to_string(data.join("good.TextGrid")).unwrap();
    assert!(content.contains("name = \"bell\""));
}

#[test]
fn test_bare_config_without_directory_fails() {
    let config_dir = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();

    pafilter(&config_dir)
        .current_dir(work.path())
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("needs an action"));
}
