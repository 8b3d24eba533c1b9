//! Behavioral specs for hook config errors.
//!
//! Every configuration or pattern problem is fatal at startup: exit code 2
//! and nothing classified.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > A missing config file is an error
#[test]
fn missing_config_file_fails() {
    let project = Project::empty();
    skillcue_cmd()
        .args(["test", "--config", "missing.json"])
        .current_dir(project.path())
        .assert()
        .code(2)
        .stdout(predicates::str::is_empty())
        .stderr(predicates::str::contains("failed to read"));
}

/// > No discoverable config is an error
#[test]
fn no_config_found_fails() {
    let project = Project::empty();
    skillcue_cmd()
        .arg("test")
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("no hooks/hooks.json found"));
}

/// > Malformed JSON is an error
#[test]
fn malformed_config_fails() {
    let project = Project::empty();
    project.config("{ \"hooks\": ");
    skillcue_cmd()
        .arg("test")
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("failed to parse"));
}

/// > An unregistered event is an error
#[test]
fn missing_event_fails() {
    skillcue_cmd()
        .args(["test", "--event", "Stop", "--config"])
        .arg(shipped_config())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("no hooks registered for event `Stop`"));
}

/// > A first entry without a matcher is an error
#[test]
fn missing_matcher_fails() {
    let project = Project::empty();
    project.config(r#"{"hooks": {"UserPromptSubmit": [{"hooks": []}]}}"#);
    skillcue_cmd()
        .arg("test")
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("has no `matcher`"));
}

/// > Invalid pattern syntax is an error
#[test]
fn invalid_pattern_fails() {
    let project = Project::empty();
    project.config(&hooks_json("(unclosed"));
    skillcue_cmd()
        .arg("test")
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("invalid matcher pattern"));
}

/// > An empty pattern is an error
#[test]
fn empty_pattern_fails() {
    let project = Project::empty();
    project.config(&hooks_json(""));
    skillcue_cmd()
        .arg("classify")
        .arg("anything")
        .current_dir(project.path())
        .assert()
        .code(2)
        .stderr(predicates::str::contains("matcher pattern is empty"));
}
