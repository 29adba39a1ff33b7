//! Shared testing utilities for tt-badger CLI tests.

#![allow(dead_code)]

#[cfg(unix)]
pub mod fake_gh;

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const STATE_FILE: &str = ".tt-badges.json";

/// Testing harness providing an isolated `$HOME` for CLI exercises.
pub struct TestContext {
    root: TempDir,
}

impl TestContext {
    /// Create a new isolated environment.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        Self { root }
    }

    /// Absolute path to the emulated `$HOME` directory.
    pub fn home(&self) -> &Path {
        self.root.path()
    }

    /// Build a command for invoking the compiled `tt-badger` binary.
    pub fn cli(&self) -> Command {
        let mut cmd = Command::cargo_bin("tt-badger").expect("Failed to locate tt-badger binary");
        cmd.current_dir(self.home())
            .env("HOME", self.home())
            .env_remove("USERPROFILE")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn state_path(&self) -> PathBuf {
        self.home().join(STATE_FILE)
    }

    pub fn write_state(&self, content: &str) {
        fs::write(self.state_path(), content).expect("Failed to write state file");
    }

    pub fn read_state(&self) -> Option<String> {
        fs::read_to_string(self.state_path()).ok()
    }

    /// Write a catalog config file and return its path.
    pub fn write_config(&self, content: &str) -> PathBuf {
        let path = self.home().join("badges.toml");
        fs::write(&path, content).expect("Failed to write config");
        path
    }
}

/// Config with three workflows `w0.yaml`..`w2.yaml` on `org/repo`.
pub const THREE_WORKFLOWS: &str = r#"
repo = "org/repo"

[[workflows]]
title = "Zero"
file = "w0.yaml"

[[workflows]]
title = "One"
file = "w1.yaml"

[[workflows]]
title = "Two"
file = "w2.yaml"
"#;
