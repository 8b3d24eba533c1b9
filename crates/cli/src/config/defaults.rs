// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.

/// Hook event the trigger is registered under.
pub const EVENT: &str = "UserPromptSubmit";

/// Config location relative to a project root.
pub const CONFIG_PATH: &str = "hooks/hooks.json";

/// Document description written by `skillcue lexicon -o json`.
pub const DESCRIPTION: &str = "Rust help skill trigger";

/// Command run by the host when the trigger fires.
pub const COMMAND: &str = "echo 'rust help skill triggered'";
