//! Behavioral specs for the `skillcue lexicon` command.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

/// > The rendered pattern is the one shipped in hooks/hooks.json
#[test]
fn rendered_pattern_matches_shipped_config() {
    let output = skillcue_cmd().arg("lexicon").output().expect("command should run");
    assert!(output.status.success());

    let shipped: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(shipped_config()).unwrap()).unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.trim_end(), shipped["hooks"]["UserPromptSubmit"][0]["matcher"]);
}

/// > The table lists each alternative with its category
#[test]
fn table_lists_categories() {
    skillcue_cmd()
        .args(["lexicon", "--table"])
        .assert()
        .success()
        .stdout(predicates::str::contains(r"error-code  E\d{4}"))
        .stdout(predicates::str::contains("tool        cargo  (ignore case)"))
        .stdout(predicates::str::contains(r"concept     \bSend\b"))
        .stdout(predicates::str::contains("weak        怎么"));
}

/// > The JSON document reproduces the shipped hooks/hooks.json
#[test]
fn json_document_matches_shipped_config() {
    let output = skillcue_cmd()
        .args(["lexicon", "-o", "json"])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let generated: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let shipped: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(shipped_config()).unwrap()).unwrap();
    assert_eq!(generated, shipped);
}

/// > The JSON document is a working hook config
#[test]
fn json_document_is_usable_config() {
    let output = skillcue_cmd()
        .args(["lexicon", "-o", "json"])
        .output()
        .expect("command should run");
    assert!(output.status.success());

    let project = Project::empty();
    project.config(&String::from_utf8(output.stdout).unwrap());
    skillcue_cmd()
        .arg("test")
        .current_dir(project.path())
        .assert()
        .success()
        .stdout(predicates::str::contains("Failed: 0/26"));
}
