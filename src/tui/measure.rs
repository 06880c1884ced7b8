//! Visual width of color-coded, possibly multi-line text.

use super::color::Color;

/// Removes every known color sequence from `text`.
#[must_use]
pub fn strip_all_colors(text: &str) -> String {
    Color::ALL
        .iter()
        .fold(text.to_string(), |acc, color| color.strip(&acc))
}

/// Character count of the longest line of `text` once colors are stripped.
#[must_use]
pub fn visual_width(text: &str) -> usize {
    strip_all_colors(text)
        .split('\n')
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
}
