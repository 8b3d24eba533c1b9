//! Test helpers for behavioral specifications.
//!
//! Provides high-level DSL for testing skillcue CLI behavior.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::PredicateBooleanExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Returns a Command configured to run the skillcue binary
pub fn skillcue_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("skillcue"))
}

/// Same as [`skillcue_cmd`], with stdin support.
pub fn skillcue_stdin_cmd() -> assert_cmd::Command {
    assert_cmd::Command::from_std(skillcue_cmd())
}

/// Workspace root (holds the shipped `hooks/hooks.json`).
pub fn workspace_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .expect("parent should exist")
        .parent()
        .expect("grandparent should exist")
        .to_path_buf()
}

/// Path to the shipped hook config.
pub fn shipped_config() -> PathBuf {
    workspace_root().join("hooks/hooks.json")
}

/// Hook document registering `matcher` for `UserPromptSubmit`.
pub fn hooks_json(matcher: &str) -> String {
    serde_json::json!({ "hooks": { "UserPromptSubmit": [{ "matcher": matcher }] } }).to_string()
}

/// Temporary project directory.
pub struct Project {
    dir: TempDir,
}

impl Project {
    /// Empty project rooted at a git repository, so discovery stops here.
    pub fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        Self { dir }
    }

    /// Project with the shipped hook config.
    pub fn shipped() -> Self {
        let project = Self::empty();
        project.config(&std::fs::read_to_string(shipped_config()).unwrap());
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write `hooks/hooks.json`.
    pub fn config(&self, content: &str) {
        self.file("hooks/hooks.json", content);
    }

    pub fn file(&self, path: &str, content: &str) {
        let full = self.dir.path().join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(full, content).unwrap();
    }
}
