//! Line-edited text and number input.

use anyhow::Result;
use log::debug;
use tui_input::{Input, InputRequest};

use super::{Emphasis, ValidationResult};
use crate::tui::{
    bubble::{Bubble, Shape, warning_bubble},
    color::Color,
    console::Console,
    keys::{Key, KeyReader},
    screen::Screen,
};

const DEFAULT_MAX_LENGTH: usize = 99_999_999_999_999;
const INTEGER_MAX_LENGTH: usize = 15;
const FLOAT_MAX_LENGTH: usize = 30;

/// The characters typed so far.
///
/// Editing goes through [`tui_input::Input`] with the cursor pinned to the
/// end: only inserts and deletes of the previous character are ever sent.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    input: Input,
}

impl LineBuffer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one key. Returns true when the key submits the buffer.
    pub fn apply(&mut self, key: &Key) -> bool {
        let request = match key {
            Key::Return => return true,
            Key::Backspace => InputRequest::DeletePrevChar,
            other => match other.printable() {
                Some(c) => InputRequest::InsertChar(c),
                None => return false,
            },
        };
        self.input.handle(request);
        false
    }

    #[must_use]
    pub fn value(&self) -> &str {
        self.input.value()
    }

    #[must_use]
    pub fn into_value(self) -> String {
        self.input.value().to_string()
    }

    /// Length in characters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.value().chars().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value().is_empty()
    }

    /// What is shown after the `│> ` decorator.
    #[must_use]
    pub fn echo(&self, hidden: bool) -> String {
        if hidden {
            "*".repeat(self.len())
        } else {
            self.value().to_string()
        }
    }
}

/// A question drawn in a bubble with an input decorator, answered by typing.
///
/// The typed value is validated on Return. A rejected value is discarded and
/// the question is asked again with a warning bubble above it.
#[derive(Debug, Clone)]
pub struct TextInput<'a> {
    text: &'a str,
    label: Option<&'a str>,
    color: Color,
    shape: Option<Shape>,
    hidden: bool,
    length: Option<(usize, usize)>,
}

impl<'a> TextInput<'a> {
    /// Creates a new text input asking `text`.
    #[must_use]
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            label: None,
            color: Color::default(),
            shape: None,
            hidden: false,
            length: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: &'a str) -> Self {
        self.label = Some(label);
        self
    }

    /// Like [`with_label`](Self::with_label), leaving the bubble unlabeled on `None`.
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

    /// Overrides [`Options::text_bubble_shape`](crate::config::Options) for this prompt.
    #[must_use]
    pub fn with_shape(mut self, shape: Shape) -> Self {
        self.shape = Some(shape);
        self
    }

    /// Echo a `*` per character instead of the characters themselves.
    #[must_use]
    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    /// Accepted input length in characters, inclusive on both ends.
    ///
    /// Defaults to `1..=99999999999999` for text, `1..=15` for integers and
    /// `1..=30` for floats.
    #[must_use]
    pub fn with_length(mut self, min: usize, max: usize) -> Self {
        self.length = Some((min, max));
        self
    }

    /// Asks until a value of acceptable length is entered.
    pub fn prompt<K, S>(&self, console: &mut Console<'_, K, S>) -> Result<String>
    where
        K: KeyReader,
        S: Screen,
    {
        let (min, max) = self.length.unwrap_or((1, DEFAULT_MAX_LENGTH));
        self.run(console, |buffer, em| {
            match check_length(buffer, min, max, em) {
                ValidationResult::Valid(()) => ValidationResult::Valid(buffer.to_string()),
                ValidationResult::Invalid(msg) => ValidationResult::Invalid(msg),
            }
        })
    }

    /// Asks until a whole number within `min..=max` is entered.
    ///
    /// Only decimal digits are accepted, so negative numbers can't be typed.
    pub fn prompt_integer<K, S>(
        &self,
        console: &mut Console<'_, K, S>,
        min: i64,
        max: i64,
    ) -> Result<i64>
    where
        K: KeyReader,
        S: Screen,
    {
        let (min_len, max_len) = self.length.unwrap_or((1, INTEGER_MAX_LENGTH));
        self.run(console, |buffer, em| {
            validate_integer(buffer, (min_len, max_len), (min, max), em)
        })
    }

    /// Asks until a finite decimal number within `min..=max` is entered.
    pub fn prompt_float<K, S>(
        &self,
        console: &mut Console<'_, K, S>,
        min: f64,
        max: f64,
    ) -> Result<f64>
    where
        K: KeyReader,
        S: Screen,
    {
        let (min_len, max_len) = self.length.unwrap_or((1, FLOAT_MAX_LENGTH));
        self.run(console, |buffer, em| {
            validate_float(buffer, (min_len, max_len), (min, max), em)
        })
    }

    fn run<T, K, S, V>(&self, console: &mut Console<'_, K, S>, validate: V) -> Result<T>
    where
        K: KeyReader,
        S: Screen,
        V: Fn(&str, &Emphasis<'_>) -> ValidationResult<T>,
    {
        let mut warning: Option<String> = None;

        loop {
            let buffer = self.collect(console, warning.as_deref())?;
            console.clear()?;

            let em = Emphasis {
                theme: console.theme(),
                options: console.options(),
            };
            match validate(buffer.value(), &em) {
                ValidationResult::Valid(value) => return Ok(value),
                ValidationResult::Invalid(msg) => {
                    debug!("input rejected: {msg}");
                    warning = Some(msg);
                }
            }
        }
    }

    /// Redraws after every key until Return is pressed.
    fn collect<K, S>(
        &self,
        console: &mut Console<'_, K, S>,
        warning: Option<&str>,
    ) -> Result<LineBuffer>
    where
        K: KeyReader,
        S: Screen,
    {
        let mut buffer = LineBuffer::new();

        loop {
            let frame = self.frame(console, warning, &buffer);
            console.redraw(&frame)?;

            let key = console.read_key()?;
            if buffer.apply(&key) {
                return Ok(buffer);
            }
        }
    }

    fn frame<K, S>(
        &self,
        console: &Console<'_, K, S>,
        warning: Option<&str>,
        buffer: &LineBuffer,
    ) -> String
    where
        K: KeyReader,
        S: Screen,
    {
        let options = console.options();
        let mut frame = String::new();

        if let Some(warning) = warning {
            frame.push_str(&warning_bubble(warning, console.theme(), options));
            frame.push('\n');
        }

        let bubble = Bubble::builder()
            .text(self.text)
            .maybe_label(self.label)
            .color(self.color)
            .maybe_shape(self.shape)
            .input_decorator(true)
            .build();
        frame.push_str(&bubble.render(options));
        frame.push_str(&buffer.echo(self.hidden));

        frame
    }
}

fn check_length(buffer: &str, min: usize, max: usize, em: &Emphasis<'_>) -> ValidationResult<()> {
    let len = buffer.chars().count();
    if len < min || len > max {
        return ValidationResult::Invalid(format!(
            "Input must be between {} and {} characters long.",
            em.paint(min),
            em.paint(max)
        ));
    }
    ValidationResult::Valid(())
}

fn out_of_range<T: std::fmt::Display>(min: T, max: T, em: &Emphasis<'_>) -> String {
    format!(
        "Input must be between {} and {}.",
        em.paint(min),
        em.paint(max)
    )
}

pub(crate) fn validate_integer(
    buffer: &str,
    (min_len, max_len): (usize, usize),
    (min, max): (i64, i64),
    em: &Emphasis<'_>,
) -> ValidationResult<i64> {
    if let ValidationResult::Invalid(msg) = check_length(buffer, min_len, max_len, em) {
        return ValidationResult::Invalid(msg);
    }

    if buffer.is_empty() || !buffer.chars().all(|c| c.is_ascii_digit()) {
        return ValidationResult::Invalid("Input must be a number (integer).".to_string());
    }

    // digits only, so a parse failure can only be overflow
    match buffer.parse::<i64>() {
        Ok(value) if (min..=max).contains(&value) => ValidationResult::Valid(value),
        _ => ValidationResult::Invalid(out_of_range(min, max, em)),
    }
}

pub(crate) fn validate_float(
    buffer: &str,
    (min_len, max_len): (usize, usize),
    (min, max): (f64, f64),
    em: &Emphasis<'_>,
) -> ValidationResult<f64> {
    if let ValidationResult::Invalid(msg) = check_length(buffer, min_len, max_len, em) {
        return ValidationResult::Invalid(msg);
    }

    let value = match buffer.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => return ValidationResult::Invalid("Input must be a number (float).".to_string()),
    };

    if value < min || value > max {
        return ValidationResult::Invalid(out_of_range(min, max, em));
    }
    ValidationResult::Valid(value)
}
