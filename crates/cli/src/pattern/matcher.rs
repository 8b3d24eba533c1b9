// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Compiled trigger matcher.

use regex::Regex;
use serde::Serialize;

use crate::error::PatternError;
use crate::lexicon::Lexicon;

/// A compiled trigger pattern.
///
/// Immutable once built. `classify` takes `&self` and holds no lock, so one
/// matcher can be shared across threads.
#[derive(Debug, Clone)]
pub struct Matcher {
    regex: Regex,
}

/// The part of the input that satisfied a trigger alternative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Span<'t> {
    pub text: &'t str,
    /// Byte offset of the first matched character.
    pub start: usize,
    /// Byte offset one past the last matched character.
    pub end: usize,
}

/// Outcome of classifying one input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classification<'t> {
    span: Option<Span<'t>>,
}

impl<'t> Classification<'t> {
    pub fn matched(&self) -> bool {
        self.span.is_some()
    }

    pub fn span(&self) -> Option<Span<'t>> {
        self.span
    }

    /// Matched text, if any.
    pub fn text(&self) -> Option<&'t str> {
        self.span.map(|s| s.text)
    }
}

impl Matcher {
    /// Compile a trigger pattern.
    ///
    /// A blank pattern is rejected: it would match every prompt with an
    /// empty span.
    pub fn compile(pattern: &str) -> Result<Self, PatternError> {
        if pattern.trim().is_empty() {
            return Err(PatternError::Empty);
        }
        let regex = Regex::new(pattern)?;
        tracing::debug!("compiled matcher ({} bytes of pattern)", pattern.len());
        Ok(Self { regex })
    }

    /// Compile the rendered form of a lexicon.
    pub fn from_lexicon(lexicon: &Lexicon) -> Result<Self, PatternError> {
        Self::compile(&lexicon.render())
    }

    /// The pattern text this matcher was compiled from.
    pub fn source(&self) -> &str {
        self.regex.as_str()
    }

    /// Find the leftmost trigger cue in `text`.
    pub fn classify<'t>(&self, text: &'t str) -> Classification<'t> {
        let span = self.regex.find(text).map(|m| Span {
            text: m.as_str(),
            start: m.start(),
            end: m.end(),
        });
        Classification { span }
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
