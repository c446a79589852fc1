#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Mutex;

use assert_cmd::Command;
use once_cell::sync::Lazy;
use tempfile::TempDir;

/// Holds TempDir guards so temporary folders live for the duration of the test run.
static TEST_DIRS: Lazy<Mutex<Vec<TempDir>>> = Lazy::new(|| Mutex::new(Vec::new()));

pub const TODAY: &str = "2025-01-15";

/// A fresh application directory that outlives the calling test.
pub fn isolated_home() -> PathBuf {
    let temp = TempDir::new().expect("create temp dir");
    let base = temp.path().to_path_buf();
    TEST_DIRS.lock().expect("lock temp dir registry").push(temp);
    base
}

/// The CLI binary in script mode with a pinned date and its own config directory.
pub fn script_cli(home: &PathBuf) -> Command {
    let mut cmd = Command::cargo_bin("finance_core_cli").expect("binary builds");
    cmd.env("FINANCE_CORE_CLI_SCRIPT", "1")
        .env("FINANCE_CORE_HOME", home)
        .env("FINANCE_CORE_TODAY", TODAY)
        .env("NO_COLOR", "1")
        .env_remove("FINANCE_CORE_EMPTY")
        .env_remove("RUST_LOG");
    cmd
}
