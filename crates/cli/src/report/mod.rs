// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Report output for harness summaries and single classifications.
//!
//! Formatters write to a `WriteColor` sink; the JSON formatter never
//! emits color.

mod json;
mod text;

use std::io;

use termcolor::WriteColor;

use crate::cli::OutputFormat;
use crate::harness::Summary;
use crate::lexicon::Category;
use crate::pattern::Classification;

pub use json::JsonFormatter;
pub use text::TextFormatter;

/// Output formatter.
pub trait ReportFormatter {
    /// Write a harness summary. `source` names where the matcher came from.
    fn summary(&self, out: &mut dyn WriteColor, source: &str, summary: &Summary) -> io::Result<()>;

    /// Write one classification outcome.
    fn classification(
        &self,
        out: &mut dyn WriteColor,
        classification: &Classification<'_>,
        category: Option<Category>,
    ) -> io::Result<()>;
}

/// Formatter for an output format.
pub fn formatter(format: OutputFormat) -> Box<dyn ReportFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter),
        OutputFormat::Json => Box::new(JsonFormatter),
    }
}

/// Format a ratio as a percentage with one decimal.
pub fn percent(rate: f64) -> String {
    format!("{:.1}%", rate * 100.0)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
