// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Self-test harness for a trigger matcher.
//!
//! Runs every case of a battery, never stopping at the first failure, and
//! aggregates the outcome so the caller decides the exit status once.

mod cases;

pub use cases::battery;

use serde::Serialize;

use crate::pattern::{Classification, Matcher};

/// Expected outcome of one case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "span", rename_all = "kebab-case")]
pub enum Expectation {
    /// Must match with exactly this span.
    Match(&'static str),
    /// Must not match.
    NoMatch,
    /// Conversational text that matches on a weak fragment. Accepted, and
    /// counted toward the over-match rate.
    OverMatch(&'static str),
}

impl Expectation {
    pub fn should_match(self) -> bool {
        !matches!(self, Expectation::NoMatch)
    }

    pub fn span(self) -> Option<&'static str> {
        match self {
            Expectation::Match(span) | Expectation::OverMatch(span) => Some(span),
            Expectation::NoMatch => None,
        }
    }
}

/// One input and its expected outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Case {
    pub input: &'static str,
    pub expect: Expectation,
}

impl Case {
    pub const fn matches(input: &'static str, span: &'static str) -> Self {
        Self { input, expect: Expectation::Match(span) }
    }

    pub const fn rejects(input: &'static str) -> Self {
        Self { input, expect: Expectation::NoMatch }
    }

    pub const fn over_matches(input: &'static str, span: &'static str) -> Self {
        Self { input, expect: Expectation::OverMatch(span) }
    }

    /// Whether `actual` satisfies this case.
    pub fn check(&self, actual: &Classification<'_>) -> bool {
        actual.matched() == self.expect.should_match()
            && match self.expect.span() {
                Some(span) => actual.text() == Some(span),
                None => true,
            }
    }
}

/// Result of running one case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseResult {
    pub input: &'static str,
    pub expect: Expectation,
    /// Matched text, or `None` when nothing matched.
    pub actual: Option<String>,
    pub passed: bool,
}

/// Aggregated harness outcome.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Summary {
    pub results: Vec<CaseResult>,
    /// Highest accepted over-match rate, if limited.
    pub max_overmatch_rate: Option<f64>,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.results.len()
    }

    pub fn passed(&self) -> usize {
        self.results.iter().filter(|r| r.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    /// Cases that matched on a known weak fragment.
    pub fn overmatches(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.passed && matches!(r.expect, Expectation::OverMatch(_)))
            .count()
    }

    /// Share of all cases that are accepted over-matches.
    pub fn overmatch_rate(&self) -> f64 {
        if self.results.is_empty() {
            0.0
        } else {
            self.overmatches() as f64 / self.total() as f64
        }
    }

    pub fn with_overmatch_limit(mut self, max_rate: Option<f64>) -> Self {
        self.max_overmatch_rate = max_rate;
        self
    }

    pub fn exceeds_overmatch_limit(&self) -> bool {
        self.max_overmatch_rate.is_some_and(|max| self.overmatch_rate() > max)
    }

    /// No failures, and the over-match rate is within the limit if one is set.
    pub fn is_success(&self) -> bool {
        self.failed() == 0 && !self.exceeds_overmatch_limit()
    }
}

/// Run every case through `matcher`.
pub fn run(matcher: &Matcher, cases: &[Case]) -> Summary {
    let results = cases
        .iter()
        .map(|case| {
            let actual = matcher.classify(case.input);
            let passed = case.check(&actual);
            if !passed {
                tracing::debug!("case failed: {:?} -> {:?}", case.input, actual.text());
            }
            CaseResult {
                input: case.input,
                expect: case.expect,
                actual: actual.text().map(String::from),
                passed,
            }
        })
        .collect();
    Summary { results, max_overmatch_rate: None }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
