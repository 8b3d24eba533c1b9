// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON format report output.

use std::io::{self, Write};

use serde_json::json;
use termcolor::WriteColor;

use super::ReportFormatter;
use crate::harness::Summary;
use crate::lexicon::Category;
use crate::pattern::Classification;

/// JSON format report formatter.
pub struct JsonFormatter;

fn write_json(out: &mut dyn WriteColor, value: &serde_json::Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, value)?;
    writeln!(out)
}

impl ReportFormatter for JsonFormatter {
    fn summary(&self, out: &mut dyn WriteColor, source: &str, summary: &Summary) -> io::Result<()> {
        let value = json!({
            "source": source,
            "total": summary.total(),
            "passed": summary.passed(),
            "failed": summary.failed(),
            "overmatches": summary.overmatches(),
            "overmatch_rate": summary.overmatch_rate(),
            "max_overmatch_rate": summary.max_overmatch_rate,
            "success": summary.is_success(),
            "cases": summary.results,
        });
        write_json(out, &value)
    }

    fn classification(
        &self,
        out: &mut dyn WriteColor,
        classification: &Classification<'_>,
        category: Option<Category>,
    ) -> io::Result<()> {
        let span = classification.span();
        let value = json!({
            "matched": classification.matched(),
            "span": span.map(|s| s.text),
            "start": span.map(|s| s.start),
            "end": span.map(|s| s.end),
            "category": category,
        });
        write_json(out, &value)
    }
}
