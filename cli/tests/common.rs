//! # travelrs CLI Integration Test Common Helpers
//!
//! File: cli/tests/common.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! Shared helpers for the integration test files (`chat.rs`, `ask.rs`, ...).
//! Every command built here runs in an isolated temporary directory with its
//! own `HOME` and config directory, so a developer's real configuration or a
//! `TRAVELRS_DATA` variable cannot change the outcome.
//!

// Different test files use different helpers.
#![allow(dead_code)]

pub use assert_cmd::Command;
use std::path::Path;
use tempfile::TempDir;

/// The built-in Paris -> Lyon answer when asked before the first train.
pub const PARIS_LYON_MORNING: &str = "Here are your travel options from Paris to Lyon:

By Car:
Estimated time: 4.4 hours
Traffic conditions:
- A1: heavy
- A2: light

By Train:
Next available train:
- Departure: 08:00
- Arrival: 10:00
- Available seats: 45
";

/// A fresh sandbox directory for one test.
pub fn sandbox() -> TempDir {
    tempfile::tempdir().expect("Failed to create temp dir for test sandbox")
}

/// `travelrs` running inside `dir`, with the environment scrubbed.
pub fn travelrs_cmd_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("travelrs").expect("Failed to find travelrs binary");
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env("XDG_CONFIG_HOME", dir.join(".config"))
        .env_remove("TRAVELRS_DATA")
        .env_remove("RUST_LOG");
    cmd
}
