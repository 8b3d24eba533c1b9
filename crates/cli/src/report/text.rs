// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text format report output.

use std::io::{self, Write};

use termcolor::{ColorSpec, WriteColor};

use super::{ReportFormatter, percent};
use crate::color::scheme;
use crate::harness::{CaseResult, Expectation, Summary};
use crate::lexicon::Category;
use crate::pattern::Classification;

/// Text format report formatter.
pub struct TextFormatter;

fn colored(out: &mut dyn WriteColor, spec: &ColorSpec, text: &str) -> io::Result<()> {
    out.set_color(spec)?;
    write!(out, "{text}")?;
    out.reset()
}

fn write_case(out: &mut dyn WriteColor, result: &CaseResult) -> io::Result<()> {
    if result.passed {
        colored(out, &scheme::pass(), "PASS")?;
    } else {
        colored(out, &scheme::fail(), "FAIL")?;
    }
    write!(out, ": '{}' -> ", result.input)?;

    match &result.actual {
        Some(actual) => {
            write!(out, "matched '")?;
            colored(out, &scheme::span(), actual)?;
            write!(out, "'")?;
        }
        None => write!(out, "no match")?,
    }

    match (result.passed, result.expect) {
        (true, Expectation::NoMatch) => write!(out, " (expected)")?,
        (true, Expectation::OverMatch(_)) => write!(out, " (accepted over-match)")?,
        (true, Expectation::Match(_)) => {}
        (false, Expectation::NoMatch) => write!(out, " (should NOT match)")?,
        (false, Expectation::Match(span) | Expectation::OverMatch(span)) => {
            write!(out, " (should match '{span}')")?
        }
    }
    writeln!(out)
}

impl ReportFormatter for TextFormatter {
    fn summary(&self, out: &mut dyn WriteColor, source: &str, summary: &Summary) -> io::Result<()> {
        colored(out, &scheme::header(), "=== Hook Matcher Tests ===")?;
        writeln!(out)?;
        writeln!(out, "Matcher loaded from: {source}")?;
        writeln!(out)?;

        for result in &summary.results {
            write_case(out, result)?;
        }

        let total = summary.total();
        writeln!(out)?;
        colored(out, &scheme::header(), "=== Summary ===")?;
        writeln!(out)?;
        writeln!(out, "Passed: {}/{}", summary.passed(), total)?;
        writeln!(out, "Failed: {}/{}", summary.failed(), total)?;
        writeln!(
            out,
            "Accepted over-matches: {}/{} ({})",
            summary.overmatches(),
            total,
            percent(summary.overmatch_rate())
        )
    }

    fn classification(
        &self,
        out: &mut dyn WriteColor,
        classification: &Classification<'_>,
        category: Option<Category>,
    ) -> io::Result<()> {
        let Some(span) = classification.span() else {
            return writeln!(out, "no match");
        };
        write!(out, "matched '")?;
        colored(out, &scheme::span(), span.text)?;
        write!(out, "' at {}..{}", span.start, span.end)?;
        if let Some(category) = category {
            write!(out, " ({category})")?;
        }
        writeln!(out)
    }
}
