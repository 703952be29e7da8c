//! Binary surface tests for the ninety CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn ninety(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("ninety").unwrap();
    cmd.env("HOME", home.path());
    cmd
}

#[test]
fn help_lists_commands() {
    let home = TempDir::new().unwrap();
    ninety(&home)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run").and(predicate::str::contains("config")));
}

#[test]
fn version_prints() {
    let home = TempDir::new().unwrap();
    ninety(&home)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("ninety"));
}

#[test]
fn unknown_command_fails() {
    let home = TempDir::new().unwrap();
    ninety(&home).arg("bogus").assert().failure();
}

#[test]
fn config_show_defaults_as_json() {
    let home = TempDir::new().unwrap();
    ninety(&home)
        .args(["-o", "json", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"focus_minutes\": 90"));
}

#[test]
fn config_init_writes_file_and_refuses_overwrite() {
    let home = TempDir::new().unwrap();

    ninety(&home).args(["config", "init"]).assert().success();
    assert!(home.path().join(".ninety/config.yaml").exists());

    ninety(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    ninety(&home)
        .args(["config", "init", "--force"])
        .assert()
        .success();
}

#[test]
fn config_show_reads_custom_path() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("custom.yaml");
    std::fs::write(&path, "session:\n  focus_minutes: 25\n").unwrap();

    ninety(&home)
        .args(["-o", "json", "config", "show", "--config"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"focus_minutes\": 25"));
}
