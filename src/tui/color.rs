//! Terminal color codes.
//!
//! Colors are plain values; whether they actually emit escape sequences is
//! decided by [`Options::no_colors`] at the call site.

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::config::Options;

const BLACK: &str = "\u{1b}[30m";
const RED: &str = "\u{1b}[31m";
const GREEN: &str = "\u{1b}[32m";
const YELLOW: &str = "\u{1b}[33m";
const BLUE: &str = "\u{1b}[34m";
const MAGENTA: &str = "\u{1b}[35m";
const CYAN: &str = "\u{1b}[36m";
const WHITE: &str = "\u{1b}[37m";
const RESET: &str = "\u{1b}[0m";

/// A named foreground color. `Reset` counts as a color.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    #[display("black")]
    Black,
    #[display("red")]
    Red,
    #[default]
    #[display("green")]
    Green,
    #[display("yellow")]
    Yellow,
    #[display("blue")]
    Blue,
    #[display("magenta")]
    Magenta,
    #[display("cyan")]
    Cyan,
    #[display("white")]
    White,
    #[display("reset")]
    Reset,
}

impl Color {
    /// Every known color, reset included.
    pub const ALL: [Color; 9] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Magenta,
        Color::Cyan,
        Color::White,
        Color::Reset,
    ];

    /// The raw escape sequence for this color.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Color::Black => BLACK,
            Color::Red => RED,
            Color::Green => GREEN,
            Color::Yellow => YELLOW,
            Color::Blue => BLUE,
            Color::Magenta => MAGENTA,
            Color::Cyan => CYAN,
            Color::White => WHITE,
            Color::Reset => RESET,
        }
    }

    /// Returns `s` surrounded by this color and a reset.
    #[must_use]
    pub fn wrap(self, s: &str, options: &Options) -> String {
        if options.no_colors {
            return s.to_string();
        }
        format!("{}{s}{RESET}", self.code())
    }

    /// Colors every occurrence of `needle` inside `s`.
    #[must_use]
    pub fn replace_occurrences(self, s: &str, needle: &str, options: &Options) -> String {
        if options.no_colors || needle.is_empty() {
            return s.to_string();
        }
        s.replace(needle, &self.wrap(needle, options))
    }

    /// Removes this color's escape sequence from `s`.
    #[must_use]
    pub fn strip(self, s: &str) -> String {
        s.replace(self.code(), "")
    }
}
