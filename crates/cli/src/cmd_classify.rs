// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `skillcue classify` command implementation.

use std::io::Read;

use termcolor::StandardStream;

use skillcue::cli::{ClassifyArgs, Cli};
use skillcue::color;
use skillcue::config;
use skillcue::error::ExitCode;
use skillcue::lexicon::Lexicon;
use skillcue::report;

/// Run the `skillcue classify` command. Exits 0 on a match, 1 otherwise.
pub fn run(cli: &Cli, args: &ClassifyArgs) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;
    let path = config::resolve_path(cli.config.as_deref(), &cwd)?;
    let matcher = config::load_matcher(&path, &cli.event)?;

    let text = match &args.text {
        Some(text) => text.clone(),
        None => {
            let mut buf = Vec::new();
            std::io::stdin().read_to_end(&mut buf)?;
            // Prompts are classified, never rejected; invalid bytes become U+FFFD.
            String::from_utf8_lossy(&buf).into_owned()
        }
    };

    let classification = matcher.classify(&text);
    // Category lookup uses the built-in lexicon; spans from a custom
    // pattern that no built-in alternative covers get none.
    let lexicon = Lexicon::rust_help();
    let category = match classification.text() {
        Some(span) => lexicon.span_index()?.category_of(span),
        None => None,
    };

    let mut out = StandardStream::stdout(color::stdout_choice(args.color));
    report::formatter(args.output).classification(&mut out, &classification, category)?;

    if classification.matched() {
        Ok(ExitCode::Success)
    } else {
        Ok(ExitCode::Failed)
    }
}
