// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hook configuration loading.
//!
//! The hook document is shared with the host pipeline, so only the fields
//! needed here are modeled and everything else is ignored:
//!
//! ```json
//! { "hooks": { "UserPromptSubmit": [ { "matcher": "...", "hooks": [ ... ] } ] } }
//! ```

pub mod defaults;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};
use crate::lexicon::Lexicon;
use crate::pattern::Matcher;

/// Parsed hook document.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Event name to registered hook entries.
    #[serde(alias = "triggers")]
    pub hooks: BTreeMap<String, Vec<HookEntry>>,

    /// Where the document was loaded from.
    #[serde(skip)]
    pub path: PathBuf,
}

/// One registered hook entry.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct HookEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matcher: Option<String>,

    /// Host-side actions, passed through untouched.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hooks: Vec<serde_json::Value>,
}

impl Config {
    /// Read and parse a hook document.
    pub fn load(path: &Path) -> std::result::Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content, path)?;
        tracing::debug!("loaded {} event(s) from {}", config.hooks.len(), path.display());
        Ok(config)
    }

    /// Parse a hook document. `path` is recorded for error messages.
    pub fn parse(content: &str, path: &Path) -> std::result::Result<Self, ConfigError> {
        let mut config: Self = serde_json::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.path = path.to_path_buf();
        Ok(config)
    }

    /// Build a complete hook document registering `lexicon` for `event`.
    pub fn from_lexicon(lexicon: &Lexicon, event: &str) -> Self {
        let entry = HookEntry {
            matcher: Some(lexicon.render()),
            hooks: vec![serde_json::json!({ "type": "command", "command": defaults::COMMAND })],
        };
        Self {
            description: Some(defaults::DESCRIPTION.to_string()),
            hooks: BTreeMap::from([(event.to_string(), vec![entry])]),
            path: PathBuf::new(),
        }
    }

    /// The matcher of the first hook registered for `event`.
    pub fn matcher_for(&self, event: &str) -> std::result::Result<&str, ConfigError> {
        let entries = self.hooks.get(event).ok_or_else(|| ConfigError::MissingEvent {
            path: self.path.clone(),
            event: event.to_string(),
        })?;
        let first = entries.first().ok_or_else(|| ConfigError::EmptyEvent {
            path: self.path.clone(),
            event: event.to_string(),
        })?;
        first.matcher.as_deref().ok_or_else(|| ConfigError::MissingMatcher {
            path: self.path.clone(),
            event: event.to_string(),
        })
    }
}

/// The explicit config path, or one discovered from `cwd`.
pub fn resolve_path(explicit: Option<&Path>, cwd: &Path) -> std::result::Result<PathBuf, ConfigError> {
    match explicit {
        Some(path) => Ok(cwd.join(path)),
        None => crate::discovery::find_config(cwd)
            .ok_or_else(|| ConfigError::NotFound { start: cwd.to_path_buf() }),
    }
}

/// Load `path` and compile the matcher registered for `event`.
pub fn load_matcher(path: &Path, event: &str) -> Result<Matcher> {
    let config = Config::load(path)?;
    let pattern = config.matcher_for(event)?;
    Ok(Matcher::compile(pattern)?)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
