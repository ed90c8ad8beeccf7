//! Shared test helpers for integration tests
//!
//! This module provides common utilities used across all test files.

#![allow(dead_code)]

use assert_cmd::cargo;
use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Date every test tracker is created on
pub const SETUP_DAY: &str = "2025-06-01";

/// Helper to get a pregtrack command with a clean environment
pub fn pregtrack() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("pregtrack"));
    cmd.env_remove("PREGTRACK_CONFIG")
        .env_remove("PREGTRACK_TODAY")
        .env_remove("RUST_LOG");
    cmd
}

/// Path of the tracker store inside a temp directory
pub fn store_path(tmp: &TempDir) -> PathBuf {
    tmp.path().join("trackers.yaml")
}

/// pregtrack command bound to the temp store, evaluated on `today`
pub fn pregtrack_at(tmp: &TempDir, today: &str) -> Command {
    let mut cmd = pregtrack();
    cmd.arg("--config")
        .arg(store_path(tmp))
        .args(["--today", today]);
    cmd
}

/// Helper to create an empty store directory
pub fn setup_store() -> TempDir {
    TempDir::new().unwrap()
}

/// Helper to create a tracker and return the store directory
pub fn setup_tracker(due_date: &str) -> TempDir {
    let tmp = setup_store();
    create_tracker(&tmp, due_date, &[]);
    tmp
}

/// Helper to add a tracker with extra init flags
pub fn create_tracker(tmp: &TempDir, due_date: &str, extra: &[&str]) {
    pregtrack_at(tmp, SETUP_DAY)
        .args(["init", "--due-date", due_date])
        .args(extra)
        .assert()
        .success();
}

/// Run a command and parse its JSON output
pub fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.args(["-o", "json"]).output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}
