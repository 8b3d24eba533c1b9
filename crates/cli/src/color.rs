// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling.

use std::io::IsTerminal;

use termcolor::{Color, ColorChoice, ColorSpec};

/// `--color` argument.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolve the color choice for a stream.
///
/// `Auto` only colors when the stream is a terminal; termcolor then still
/// honors `NO_COLOR` and `TERM=dumb`.
pub fn resolve_color(mode: ColorMode, is_terminal: bool) -> ColorChoice {
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if is_terminal => ColorChoice::Auto,
        ColorMode::Auto => ColorChoice::Never,
    }
}

/// Color choice for stdout.
pub fn stdout_choice(mode: ColorMode) -> ColorChoice {
    resolve_color(mode, std::io::stdout().is_terminal())
}

/// Color scheme for report output.
pub mod scheme {
    use super::*;

    /// Passing case marker.
    pub fn pass() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Failing case marker.
    pub fn fail() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Matched span.
    pub fn span() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Section headers.
    pub fn header() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
