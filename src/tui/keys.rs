//! Key events and the readers that produce them.

use std::{collections::VecDeque, io};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use derive_more::Display;

/// A single keystroke, normalized.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Key {
    #[display("up")]
    Up,
    #[display("down")]
    Down,
    #[display("left")]
    Left,
    #[display("right")]
    Right,
    #[display("return")]
    Return,
    #[display("tab")]
    Tab,
    #[display("backspace")]
    Backspace,
    #[display("{_0}")]
    Char(char),
    /// Anything without a name above, carrying its raw payload.
    #[display("{_0}")]
    Other(String),
}

impl Key {
    /// A character that may be appended to an input buffer.
    #[must_use]
    pub fn printable(&self) -> Option<char> {
        match self {
            Key::Char(c) if !c.is_control() => Some(*c),
            _ => None,
        }
    }

    /// Parses a compact key script: literal characters plus named keys in
    /// angle brackets, e.g. `"ab<backspace>c<return>"`. `<lt>` is a literal `<`.
    #[must_use]
    pub fn parse_script(script: &str) -> Vec<Key> {
        let mut keys = Vec::new();
        let mut chars = script.chars();

        while let Some(c) = chars.next() {
            if c != '<' {
                keys.push(Key::Char(c));
                continue;
            }

            let name: String = chars.by_ref().take_while(|c| *c != '>').collect();
            keys.push(match name.as_str() {
                "up" => Key::Up,
                "down" => Key::Down,
                "left" => Key::Left,
                "right" => Key::Right,
                "return" | "enter" => Key::Return,
                "tab" => Key::Tab,
                "backspace" => Key::Backspace,
                "lt" => Key::Char('<'),
                _ => Key::Other(name),
            });
        }

        keys
    }
}

impl From<KeyEvent> for Key {
    fn from(event: KeyEvent) -> Self {
        match event.code {
            KeyCode::Up => Key::Up,
            KeyCode::Down => Key::Down,
            KeyCode::Left => Key::Left,
            KeyCode::Right => Key::Right,
            KeyCode::Enter => Key::Return,
            KeyCode::Tab => Key::Tab,
            KeyCode::Backspace => Key::Backspace,
            KeyCode::Char(c) if !event.modifiers.contains(KeyModifiers::CONTROL) => Key::Char(c),
            code => Key::Other(code.to_string()),
        }
    }
}

/// Source of key events. Reads block until a key is available.
pub trait KeyReader {
    fn read_key(&mut self) -> io::Result<Key>;
}

/// Enables raw mode for its lifetime and restores the terminal on drop.
struct RawMode;

impl RawMode {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawMode {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}

/// Reads keys from the real terminal.
///
/// Raw mode is only held while waiting for a key, so anything printed
/// between reads behaves like normal terminal output. Ctrl+C surfaces as an
/// [`io::ErrorKind::Interrupted`] error since raw mode swallows the signal.
#[derive(Debug, Default)]
pub struct CrosstermKeys;

impl CrosstermKeys {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl KeyReader for CrosstermKeys {
    fn read_key(&mut self) -> io::Result<Key> {
        let _raw = RawMode::enable()?;

        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Err(io::Error::new(io::ErrorKind::Interrupted, "interrupted"));
                }
                return Ok(Key::from(key));
            }
        }
    }
}

/// Replays a fixed sequence of keys, then reports end of input.
#[derive(Debug, Clone, Default)]
pub struct ScriptedKeys {
    keys: VecDeque<Key>,
}

impl ScriptedKeys {
    #[must_use]
    pub fn new(keys: impl IntoIterator<Item = Key>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    /// Shorthand for `ScriptedKeys::new(Key::parse_script(script))`.
    #[must_use]
    pub fn from_script(script: &str) -> Self {
        Self::new(Key::parse_script(script))
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl KeyReader for ScriptedKeys {
    fn read_key(&mut self) -> io::Result<Key> {
        self.keys
            .pop_front()
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more scripted keys"))
    }
}
