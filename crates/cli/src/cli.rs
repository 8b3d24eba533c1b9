//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::color::ColorMode;
use crate::config::defaults;

/// Prompt trigger classifier for assistant skill hooks
#[derive(Parser)]
#[command(name = "skillcue")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific hook config file (default: discover hooks/hooks.json)
    #[arg(short = 'C', long = "config", global = true)]
    pub config: Option<PathBuf>,

    /// Hook event whose matcher is used
    #[arg(long, global = true, default_value = defaults::EVENT)]
    pub event: String,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the built-in case battery against the configured matcher
    Test(TestArgs),
    /// Classify one prompt
    Classify(ClassifyArgs),
    /// Print the built-in lexicon
    Lexicon(LexiconArgs),
}

#[derive(clap::Args, Default)]
pub struct TestArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,

    /// Fail when accepted over-matches exceed this share of all cases
    #[arg(long, value_name = "RATE", value_parser = parse_rate)]
    pub max_overmatch_rate: Option<f64>,
}

#[derive(clap::Args)]
pub struct ClassifyArgs {
    /// Prompt text (read from stdin when omitted)
    #[arg(value_name = "TEXT")]
    pub text: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Color output mode
    #[arg(long, default_value = "auto", value_name = "WHEN")]
    pub color: ColorMode,
}

#[derive(clap::Args)]
pub struct LexiconArgs {
    /// List alternatives with their categories instead of the rendered pattern
    #[arg(long)]
    pub table: bool,

    /// Output format (json prints a hook config document)
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Parse a rate in `0.0..=1.0`.
fn parse_rate(s: &str) -> Result<f64, String> {
    let rate: f64 = s.parse().map_err(|_| format!("`{s}` is not a number"))?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(format!("`{s}` is not between 0 and 1"))
    }
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
