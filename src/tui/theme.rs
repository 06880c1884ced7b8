//! Color roles shared by every prompt.

use super::color::Color;

/// Which color each part of a prompt is drawn in.
///
/// The bubble color itself is chosen per prompt; the theme covers the
/// supporting pieces around it.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Border and label of warning bubbles
    pub warning: Color,
    /// Numbers called out inside warning messages
    pub emphasis: Color,
    /// Marker of the highlighted choice
    pub selected: Color,
    /// Marker of every other choice
    pub unselected: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            warning: Color::Yellow,
            emphasis: Color::Blue,
            selected: Color::Cyan,
            unselected: Color::Magenta,
        }
    }
}

impl Theme {
    /// Creates a new theme with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
