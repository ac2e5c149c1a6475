//! Tests for the configuration loader.
//!
//! Invariants:
//! - Tests use `serial_test` and `global_test_lock()` to prevent environment pollution.
//! - Tests never read the real default config path; they always pass an explicit one.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

pub mod env_tests;

/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write `contents` to `config.json` inside `dir` and return its path.
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("config.json");
    std::fs::write(&path, contents).expect("Failed to write test config");
    path
}
