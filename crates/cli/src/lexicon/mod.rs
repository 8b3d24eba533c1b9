// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Tagged trigger lexicon.
//!
//! A lexicon is an ordered list of alternatives, each tagged with a
//! [`Category`]. It renders to the single pattern string stored in the hook
//! config, and maps a matched span back to the alternative that produced it.

mod rust_help;

use std::fmt;

use regex::RegexSet;
use serde::Serialize;

use crate::error::PatternError;

/// Semantic category of a trigger alternative.
///
/// Declaration order is precedence order within a rendered lexicon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Compiler diagnostic codes (`E0382`).
    ErrorCode,
    /// Tool and ecosystem proper nouns.
    Tool,
    /// Domain concept terms.
    Concept,
    /// Question and help-seeking phrasings.
    Phrasing,
    /// Generic interrogative fragments. These over-match ordinary
    /// conversation and that is accepted.
    Weak,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::ErrorCode,
        Category::Tool,
        Category::Concept,
        Category::Phrasing,
        Category::Weak,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::ErrorCode => "error-code",
            Category::Tool => "tool",
            Category::Concept => "concept",
            Category::Phrasing => "phrasing",
            Category::Weak => "weak",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Form {
    /// Matched anywhere, escaped.
    Literal(String),
    /// Escaped and wrapped in `\b` on both sides.
    Word(String),
    /// Raw pattern syntax.
    Pattern(String),
}

/// One lexical alternative.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alternative {
    category: Category,
    form: Form,
    ignore_case: bool,
}

impl Alternative {
    pub fn literal(category: Category, text: impl Into<String>) -> Self {
        Self::new(category, Form::Literal(text.into()))
    }

    pub fn word(category: Category, text: impl Into<String>) -> Self {
        Self::new(category, Form::Word(text.into()))
    }

    pub fn pattern(category: Category, pattern: impl Into<String>) -> Self {
        Self::new(category, Form::Pattern(pattern.into()))
    }

    fn new(category: Category, form: Form) -> Self {
        Self { category, form, ignore_case: false }
    }

    /// Match ASCII letters case-insensitively.
    pub fn ignore_case(mut self) -> Self {
        self.ignore_case = true;
        self
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn is_ignore_case(&self) -> bool {
        self.ignore_case
    }

    /// The literal text, or `None` for raw patterns.
    pub fn literal_text(&self) -> Option<&str> {
        match &self.form {
            Form::Literal(s) | Form::Word(s) => Some(s),
            Form::Pattern(_) => None,
        }
    }

    pub fn is_word_bounded(&self) -> bool {
        matches!(self.form, Form::Word(_))
    }

    /// Pattern syntax for this alternative, without the case flag.
    pub fn source(&self) -> String {
        match &self.form {
            Form::Literal(s) => regex::escape(s),
            Form::Word(s) => format!(r"\b{}\b", regex::escape(s)),
            Form::Pattern(p) => p.clone(),
        }
    }

    fn flagged_source(&self) -> String {
        if self.ignore_case {
            format!("(?i:{})", self.source())
        } else {
            self.source()
        }
    }
}

/// Ordered, tagged set of trigger alternatives.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lexicon {
    alternatives: Vec<Alternative>,
}

impl Lexicon {
    pub fn new(alternatives: Vec<Alternative>) -> Self {
        Self { alternatives }
    }

    /// The built-in Rust help lexicon shipped in `hooks/hooks.json`.
    pub fn rust_help() -> Self {
        rust_help::lexicon()
    }

    pub fn alternatives(&self) -> &[Alternative] {
        &self.alternatives
    }

    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &Alternative> {
        self.alternatives.iter().filter(move |a| a.category == category)
    }

    /// Render to a single disjunctive pattern.
    ///
    /// Runs of case-insensitive alternatives share one `(?i:...)` group.
    /// Grouping keeps declaration order, so precedence is unchanged.
    pub fn render(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        let mut folded: Vec<String> = Vec::new();

        for alt in &self.alternatives {
            if alt.ignore_case {
                folded.push(alt.source());
                continue;
            }
            flush_folded(&mut parts, &mut folded);
            parts.push(alt.source());
        }
        flush_folded(&mut parts, &mut folded);

        parts.join("|")
    }

    /// Compile every alternative, anchored, for whole-span lookup.
    pub fn span_index(&self) -> Result<SpanIndex<'_>, PatternError> {
        let anchored = self
            .alternatives
            .iter()
            .map(|alt| format!("^(?:{})$", alt.flagged_source()));
        let set = RegexSet::new(anchored)?;
        Ok(SpanIndex { lexicon: self, set })
    }
}

/// Maps a matched span back to the alternative that produced it.
#[derive(Debug)]
pub struct SpanIndex<'l> {
    lexicon: &'l Lexicon,
    set: RegexSet,
}

impl<'l> SpanIndex<'l> {
    /// First declared alternative that matches the whole of `span`.
    pub fn alternative_for(&self, span: &str) -> Option<(usize, &'l Alternative)> {
        let index = self.set.matches(span).into_iter().next()?;
        self.lexicon.alternatives.get(index).map(|alt| (index, alt))
    }

    pub fn category_of(&self, span: &str) -> Option<Category> {
        self.alternative_for(span).map(|(_, alt)| alt.category)
    }
}

fn flush_folded(parts: &mut Vec<String>, folded: &mut Vec<String>) {
    if !folded.is_empty() {
        parts.push(format!("(?i:{})", folded.join("|")));
        folded.clear();
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
