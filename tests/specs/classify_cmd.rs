//! Behavioral specs for the `skillcue classify` command.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use crate::prelude::*;

fn classify() -> std::process::Command {
    let mut cmd = skillcue_cmd();
    cmd.arg("classify").arg("--config").arg(shipped_config());
    cmd
}

/// > An error code wins at the start of the prompt
#[test]
fn error_code_matches() {
    classify()
        .arg("E0382 error, how do I fix it")
        .assert()
        .success()
        .stdout("matched 'E0382' at 0..5 (error-code)\n");
}

/// > A tool name inside unrelated chatter matches
#[test]
fn tool_name_in_chatter_matches() {
    classify()
        .arg("could you run cargo clippy on this before lunch")
        .assert()
        .success()
        .stdout("matched 'cargo' at 14..19 (tool)\n");
}

/// > Conversation without a cue does not match and exits 1
#[test]
fn conversation_does_not_match() {
    classify()
        .arg("what should I eat for dinner")
        .assert()
        .code(1)
        .stdout("no match\n");
}

/// > Empty input does not match
#[test]
fn empty_input_does_not_match() {
    classify().arg("").assert().code(1).stdout("no match\n");
}

/// > Prompt is read from stdin when no text is given
#[test]
fn reads_prompt_from_stdin() {
    let mut cmd = skillcue_stdin_cmd();
    cmd.arg("classify").arg("--config").arg(shipped_config());
    cmd.write_stdin("帮我订一张机票")
        .assert()
        .success()
        .stdout(predicates::str::contains("'帮我'").and(predicates::str::contains("(weak)")));
}

/// > Invalid UTF-8 on stdin is still classified
#[test]
fn invalid_utf8_stdin_is_classified() {
    let mut cmd = skillcue_stdin_cmd();
    cmd.arg("classify").arg("--config").arg(shipped_config());
    // Each invalid byte decodes to a 3-byte U+FFFD.
    cmd.write_stdin(&b"\xff\xfe cargo"[..])
        .assert()
        .success()
        .stdout("matched 'cargo' at 7..12 (tool)\n");
}

/// > JSON output has span offsets and category
#[test]
fn json_output() {
    let output = classify()
        .args(["-o", "json", "explain this piece of code"])
        .output()
        .expect("command should run");
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "matched": true,
            "span": "explain",
            "start": 0,
            "end": 7,
            "category": "phrasing",
        })
    );
}
