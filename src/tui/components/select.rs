//! Single selection component.

use anyhow::{Result, bail};

use crate::tui::{
    bubble::{Bubble, Shape},
    color::Color,
    console::Console,
    keys::{Key, KeyReader},
    screen::Screen,
};

const INSTRUCTIONS: &str = "Use the up/down arrow keys to move, Return to select.";

/// The highlighted entry of a list, 1-based.
///
/// Moves are clamped at both ends, never wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    len: usize,
    index: usize,
}

impl Selection {
    /// `start` is clamped into `1..=len`. `len` must be at least 1.
    #[must_use]
    pub fn new(len: usize, start: usize) -> Self {
        Self {
            len,
            index: start.clamp(1, len.max(1)),
        }
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns false when already at the top.
    pub fn move_up(&mut self) -> bool {
        if self.index <= 1 {
            return false;
        }
        self.index = self.index.saturating_sub(1);
        true
    }

    /// Returns false when already at the bottom.
    pub fn move_down(&mut self) -> bool {
        if self.index >= self.len {
            return false;
        }
        self.index = self.index.saturating_add(1);
        true
    }
}

/// Picks one of several options with the arrow keys.
#[derive(Debug, Clone)]
pub struct Select<'a> {
    text: &'a str,
    items: Vec<&'a str>,
    label: Option<&'a str>,
    color: Color,
    shape: Option<Shape>,
    starting_index: usize,
    show_instructions: bool,
}

impl<'a> Select<'a> {
    /// Creates a new select prompt asking `text`.
    #[must_use]
    pub fn new(text: &'a str, items: Vec<&'a str>) -> Self {
        Self {
            text,
            items,
            label: None,
            color: Color::default(),
            shape: None,
            starting_index: 1,
            show_instructions: true,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    #[must_use]
    pub fn maybe_label(mut self, label: Option<&'a str>) -> Self {
        self.label = label;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Sets the initially highlighted option (1-based).
    #[must_use]
    pub fn with_starting_cursor(mut self, index: usize) -> Self {
        self.starting_index = index;
        self
    }

    /// Drops the line explaining which keys to use.
    #[must_use]
    pub fn without_instructions(mut self) -> Self {
        self.show_instructions = false;
        self
    }

    /// Runs until Return and yields the chosen option's 1-based index.
    pub fn prompt<K, S>(&self, console: &mut Console<'_, K, S>) -> Result<usize>
    where
        K: KeyReader,
        S: Screen,
    {
        if self.items.is_empty() {
            bail!("A select prompt needs at least one option");
        }

        let mut selection = Selection::new(self.items.len(), self.starting_index);

        loop {
            let frame = self.frame(console, selection);
            console.redraw(&frame)?;

            match console.read_key()? {
                Key::Return => return Ok(selection.index()),
                Key::Up => {
                    selection.move_up();
                }
                Key::Down => {
                    selection.move_down();
                }
                _ => {}
            }
        }
    }

    fn frame<K, S>(&self, console: &Console<'_, K, S>, selection: Selection) -> String
    where
        K: KeyReader,
        S: Screen,
    {
        let options = console.options();
        let theme = console.theme();

        let list = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| {
                let marker = if idx.saturating_add(1) == selection.index() {
                    theme.selected.wrap("➜", options)
                } else {
                    theme.unselected.wrap("•", options)
                };
                format!("{marker} {item}")
            })
            .collect::<Vec<_>>()
            .join("\n");

        let list_bubble = Bubble::builder()
            .text(&list)
            .color(self.color)
            .maybe_shape(self.shape)
            .build()
            .render(options);

        let mut text = self.text.to_string();
        if self.show_instructions {
            text.push('\n');
            text.push_str(INSTRUCTIONS);
        }
        text.push('\n');
        text.push_str(&list_bubble);

        Bubble::builder()
            .text(&text)
            .maybe_label(self.label)
            .color(self.color)
            .maybe_shape(self.shape)
            .build()
            .render(options)
    }
}
