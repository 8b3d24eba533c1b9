// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Prompt trigger classifier for assistant skill hooks.
//!
//! Decides whether a user prompt carries a lexical cue (error code, tool
//! name, concept term, or help-seeking phrasing) that should invoke a
//! Rust help skill.

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod harness;
pub mod lexicon;
pub mod pattern;
pub mod report;

#[cfg(test)]
pub mod test_utils;

pub use error::{ConfigError, Error, ExitCode, PatternError};
pub use lexicon::{Alternative, Category, Lexicon, SpanIndex};
pub use pattern::{Classification, Matcher, Span};
