//! Text bubbles and the prompts drawn with them.
//!
//! - `Bubble` - renders text inside a box-drawing frame
//! - `TextInput` - text, hidden, integer and float input with validation
//! - `Select` - single selection from a list

mod bubble;
#[cfg(test)]
mod bubble_tests;
pub mod color;
pub mod components;
mod console;
pub mod keys;
pub mod measure;
mod prompts;
pub mod screen;
mod theme;

pub use bubble::{Bubble, Shape, warning_bubble};
pub use color::Color;
pub use components::{LineBuffer, Select, Selection, TextInput, ValidationResult};
pub use console::{Console, TerminalConsole};
pub use keys::{CrosstermKeys, Key, KeyReader, ScriptedKeys};
pub use measure::{strip_all_colors, visual_width};
pub use prompts::{
    float_prompt, hidden_prompt, integer_prompt, print_bubble, select_prompt, text_prompt,
};
pub use screen::{RecordingScreen, Screen, TerminalScreen};
pub use theme::Theme;
