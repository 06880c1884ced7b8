//! One-call prompts against the real terminal.
//!
//! Each function builds a [`TerminalConsole`], runs one prompt and clears the
//! screen behind it. Use the components directly for anything fancier.

use anyhow::Result;

use super::{
    bubble::Bubble,
    components::{Select, TextInput},
    console::TerminalConsole,
};
use crate::config::Options;

/// Asks for a line of text.
///
/// # Example
///
/// ```ignore
/// let name = text_prompt("What is your name?", Some("Name"), &options)?;
/// ```
pub fn text_prompt(text: &str, label: Option<&str>, options: &Options) -> Result<String> {
    let mut console = TerminalConsole::terminal(options);
    TextInput::new(text).maybe_label(label).prompt(&mut console)
}

/// Asks for a line of text, echoing `*` instead of the characters.
pub fn hidden_prompt(text: &str, label: Option<&str>, options: &Options) -> Result<String> {
    let mut console = TerminalConsole::terminal(options);
    TextInput::new(text)
        .maybe_label(label)
        .hidden()
        .prompt(&mut console)
}

/// Asks for a whole number within `min..=max`.
pub fn integer_prompt(
    text: &str,
    label: Option<&str>,
    min: i64,
    max: i64,
    options: &Options,
) -> Result<i64> {
    let mut console = TerminalConsole::terminal(options);
    TextInput::new(text)
        .maybe_label(label)
        .prompt_integer(&mut console, min, max)
}

/// Asks for a decimal number within `min..=max`.
pub fn float_prompt(
    text: &str,
    label: Option<&str>,
    min: f64,
    max: f64,
    options: &Options,
) -> Result<f64> {
    let mut console = TerminalConsole::terminal(options);
    TextInput::new(text)
        .maybe_label(label)
        .prompt_float(&mut console, min, max)
}

/// Lets the user pick one of `items`; returns its 1-based index.
///
/// # Example
///
/// ```ignore
/// let choice = select_prompt("Favorite color?", vec!["Red", "Green"], None, &options)?;
/// ```
pub fn select_prompt(
    text: &str,
    items: Vec<&str>,
    label: Option<&str>,
    options: &Options,
) -> Result<usize> {
    let mut console = TerminalConsole::terminal(options);
    Select::new(text, items).maybe_label(label).prompt(&mut console)
}

/// Renders `bubble`, prints it and hands back the rendered string.
pub fn print_bubble(bubble: &Bubble<'_>, options: &Options) -> String {
    let rendered = bubble.render(options);
    println!("{rendered}");
    rendered
}

