// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `skillcue lexicon` command implementation.
//!
//! Prints the built-in lexicon as a rendered pattern, a category table, or
//! a hook config document ready to save as `hooks/hooks.json`.

use std::io::Write;

use skillcue::cli::{Cli, LexiconArgs, OutputFormat};
use skillcue::config::Config;
use skillcue::error::ExitCode;
use skillcue::lexicon::Lexicon;

/// Run the `skillcue lexicon` command.
pub fn run(cli: &Cli, args: &LexiconArgs) -> anyhow::Result<ExitCode> {
    let lexicon = Lexicon::rust_help();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match args.output {
        OutputFormat::Json => {
            let config = Config::from_lexicon(&lexicon, &cli.event);
            serde_json::to_writer_pretty(&mut out, &config)?;
            writeln!(out)?;
        }
        OutputFormat::Text if args.table => {
            for alt in lexicon.alternatives() {
                let flag = if alt.is_ignore_case() { "  (ignore case)" } else { "" };
                writeln!(out, "{:<11} {}{}", alt.category().as_str(), alt.source(), flag)?;
            }
        }
        OutputFormat::Text => writeln!(out, "{}", lexicon.render())?,
    }

    Ok(ExitCode::Success)
}
