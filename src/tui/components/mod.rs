//! Interactive prompts built on bubbles.

mod select;
mod text_input;

pub use select::{Select, Selection};
pub use text_input::{LineBuffer, TextInput};

use std::fmt::Display;

use super::theme::Theme;
use crate::config::Options;

/// Result of validating a submitted buffer.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationResult<T> {
    /// Input is accepted and converted
    Valid(T),
    /// Input is rejected; the message is shown above the next attempt
    Invalid(String),
}

impl<T> ValidationResult<T> {
    /// Returns true if the validation passed.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid(_))
    }
}

/// Colors the numbers called out in warning messages.
pub(crate) struct Emphasis<'c> {
    pub theme: &'c Theme,
    pub options: &'c Options,
}

impl Emphasis<'_> {
    pub fn paint(&self, value: impl Display) -> String {
        self.theme.emphasis.wrap(&value.to_string(), self.options)
    }
}
