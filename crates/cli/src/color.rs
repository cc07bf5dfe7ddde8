// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal color handling.

use std::io::IsTerminal;

use termcolor::ColorChoice;

/// `--color` argument values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Resolve the color choice for stdout.
///
/// `--no-color` wins over everything. `auto` colors only a terminal and
/// leaves `NO_COLOR` / `TERM=dumb` handling to termcolor.
pub fn resolve_color(mode: ColorMode, no_color: bool, is_tty: bool) -> ColorChoice {
    if no_color {
        return ColorChoice::Never;
    }
    match mode {
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
        ColorMode::Auto if is_tty => ColorChoice::Auto,
        ColorMode::Auto => ColorChoice::Never,
    }
}

/// Color choice for the real stdout.
pub fn stdout_color(mode: ColorMode, no_color: bool) -> ColorChoice {
    resolve_color(mode, no_color, std::io::stdout().is_terminal())
}

/// Color scheme for rendered threads.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Thread name: bold.
    pub fn name() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Thread state: green.
    pub fn state() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green));
        spec
    }

    /// Interesting line in full mode: yellow bold.
    pub fn marked() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow)).set_bold(true);
        spec
    }

    /// Collapsed placeholder: dimmed.
    pub fn placeholder() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_dimmed(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
