//! Where prompt frames are drawn.

use std::io::{self, Stdout, Write};

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};

/// A surface prompts redraw on. Every cycle is `clear` then one `draw`.
pub trait Screen {
    fn clear(&mut self) -> io::Result<()>;

    /// Writes a complete frame. The cursor is left right after it, which is
    /// where typed input is echoed.
    fn draw(&mut self, frame: &str) -> io::Result<()>;
}

/// Draws on stdout.
pub struct TerminalScreen {
    out: Stdout,
}

impl TerminalScreen {
    #[must_use]
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for TerminalScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for TerminalScreen {
    fn clear(&mut self) -> io::Result<()> {
        execute!(self.out, Clear(ClearType::All), MoveTo(0, 0))
    }

    fn draw(&mut self, frame: &str) -> io::Result<()> {
        self.out.write_all(frame.as_bytes())?;
        self.out.flush()
    }
}

/// Keeps every frame in memory instead of drawing it.
#[derive(Debug, Default)]
pub struct RecordingScreen {
    frames: Vec<String>,
    clears: usize,
}

impl RecordingScreen {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn frames(&self) -> &[String] {
        &self.frames
    }

    #[must_use]
    pub fn last_frame(&self) -> Option<&str> {
        self.frames.last().map(String::as_str)
    }

    #[must_use]
    pub fn clears(&self) -> usize {
        self.clears
    }
}

impl Screen for RecordingScreen {
    fn clear(&mut self) -> io::Result<()> {
        self.clears = self.clears.saturating_add(1);
        Ok(())
    }

    fn draw(&mut self, frame: &str) -> io::Result<()> {
        self.frames.push(frame.to_string());
        Ok(())
    }
}
