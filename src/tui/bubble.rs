//! Text bubbles: text framed with box-drawing glyphs.

use bon::Builder;
use derive_more::Display;
use serde::{Deserialize, Serialize};

use super::{color::Color, measure::visual_width, theme::Theme};
use crate::config::Options;

/// Corner style of a bubble.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Display, Serialize, Deserialize, clap::ValueEnum,
)]
pub enum Shape {
    #[default]
    Round,
    Square,
}

struct Glyphs {
    top_left: &'static str,
    top_right: &'static str,
    bottom_right: &'static str,
    bottom_left: &'static str,
    tee: &'static str,
    vertical: &'static str,
    horizontal: &'static str,
}

impl Shape {
    const fn glyphs(self) -> Glyphs {
        let (top_left, top_right, bottom_right, bottom_left) = match self {
            Shape::Round => ("╭", "╮", "╯", "╰"),
            Shape::Square => ("┌", "┐", "┘", "└"),
        };
        Glyphs {
            top_left,
            top_right,
            bottom_right,
            bottom_left,
            tee: "├",
            vertical: "│",
            horizontal: "─",
        }
    }
}

/// Everything needed to draw one bubble.
///
/// ```ignore
/// let out = Bubble::builder()
///     .text("What is your name?")
///     .label("Name")
///     .input_decorator(true)
///     .build()
///     .render(&options);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct Bubble<'a> {
    /// Body text, may span several lines and contain color codes.
    text: &'a str,
    label: Option<&'a str>,
    #[builder(default)]
    color: Color,
    /// Falls back to [`Options::text_bubble_shape`] when unset.
    shape: Option<Shape>,
    /// Swap the bottom-left corner for a tee and add a `│> ` line below.
    #[builder(default)]
    input_decorator: bool,
}

impl Bubble<'_> {
    /// Renders the bubble. Lines are joined with `\n`, without a trailing newline.
    #[must_use]
    pub fn render(&self, options: &Options) -> String {
        let glyphs = self.shape.unwrap_or(options.text_bubble_shape).glyphs();
        let paint = |s: &str| self.color.wrap(s, options);
        let rule = |len: usize| paint(&glyphs.horizontal.repeat(len));

        let content_width = visual_width(self.text);
        let label_width = self.label.map(visual_width);

        // Length of the horizontal rule between two corners.
        let mut border_len = content_width.saturating_add(2);
        if let Some(label_width) = label_width {
            border_len = border_len.max(label_width.saturating_add(3));
        }

        let side = paint(glyphs.vertical);
        let mut lines = Vec::new();

        let top = match (self.label, label_width) {
            (Some(label), Some(label_width)) => {
                let right = border_len.saturating_sub(label_width.saturating_add(3));
                format!(
                    "{}{} {} {}{}",
                    paint(glyphs.top_left),
                    rule(1),
                    paint(label),
                    rule(right),
                    paint(glyphs.top_right),
                )
            }
            _ => format!(
                "{}{}{}",
                paint(glyphs.top_left),
                rule(border_len),
                paint(glyphs.top_right)
            ),
        };
        lines.push(top);

        for part in self.text.split('\n') {
            let padding = border_len
                .saturating_sub(1)
                .saturating_sub(visual_width(part));
            lines.push(format!("{side} {part}{}{side}", " ".repeat(padding)));
        }

        let bottom_left = if self.input_decorator {
            glyphs.tee
        } else {
            glyphs.bottom_left
        };
        lines.push(format!(
            "{}{}{}",
            paint(bottom_left),
            rule(border_len),
            paint(glyphs.bottom_right)
        ));

        if self.input_decorator {
            lines.push(format!("{} ", paint("│>")));
        }

        lines.join("\n")
    }
}

/// Yellow bubble labelled "Warning" used to explain why input was rejected.
#[must_use]
pub fn warning_bubble(message: &str, theme: &Theme, options: &Options) -> String {
    Bubble::builder()
        .text(message)
        .label("Warning")
        .color(theme.warning)
        .build()
        .render(options)
}
