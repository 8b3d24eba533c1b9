// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::Parser;
use tracing_subscriber::EnvFilter;

use skillcue::cli::{Cli, Command, TestArgs};
use skillcue::error::ExitCode;

mod cmd_classify;
mod cmd_lexicon;

/// Log level comes from `SKILLCUE_LOG`; `--verbose` forces debug.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("SKILLCUE_LOG").unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    match &cli.command {
        None => cmd_test::run(cli, &TestArgs::default()),
        Some(Command::Test(args)) => cmd_test::run(cli, args),
        Some(Command::Classify(args)) => cmd_classify::run(cli, args),
        Some(Command::Lexicon(args)) => cmd_lexicon::run(cli, args),
    }
}

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(code) => code.into(),
        Err(e) => {
            eprintln!("skillcue: {e:#}");
            ExitCode::ConfigError.into()
        }
    }
}
