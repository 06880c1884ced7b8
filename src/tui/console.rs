//! The key reader, screen and options a prompt runs against.

use anyhow::{Context, Result};

use super::{
    keys::{CrosstermKeys, Key, KeyReader},
    screen::{Screen, TerminalScreen},
    theme::Theme,
};
use crate::config::Options;

/// Bundles everything a prompt needs to interact with the user.
///
/// Prompts borrow the console mutably for their whole run; the options are
/// only ever read.
pub struct Console<'o, K, S> {
    keys: K,
    screen: S,
    options: &'o Options,
    theme: Theme,
}

/// Console wired to the real terminal.
pub type TerminalConsole<'o> = Console<'o, CrosstermKeys, TerminalScreen>;

impl<'o> TerminalConsole<'o> {
    #[must_use]
    pub fn terminal(options: &'o Options) -> Self {
        Console::new(CrosstermKeys::new(), TerminalScreen::new(), options)
    }
}

impl<'o, K, S> Console<'o, K, S>
where
    K: KeyReader,
    S: Screen,
{
    #[must_use]
    pub fn new(keys: K, screen: S, options: &'o Options) -> Self {
        Self {
            keys,
            screen,
            options,
            theme: Theme::default(),
        }
    }

    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    #[must_use]
    pub fn options(&self) -> &'o Options {
        self.options
    }

    #[must_use]
    pub fn theme(&self) -> &Theme {
        &self.theme
    }

    #[must_use]
    pub fn screen(&self) -> &S {
        &self.screen
    }

    #[must_use]
    pub fn keys(&self) -> &K {
        &self.keys
    }

    pub(crate) fn clear(&mut self) -> Result<()> {
        self.screen.clear().context("Failed to clear the screen")
    }

    /// Clears the screen and draws `frame` in its place.
    pub(crate) fn redraw(&mut self, frame: &str) -> Result<()> {
        self.clear()?;
        self.screen.draw(frame).context("Failed to draw prompt")
    }

    pub(crate) fn read_key(&mut self) -> Result<Key> {
        self.keys.read_key().context("Failed to read key")
    }
}
