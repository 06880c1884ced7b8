use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use bon::Builder;
use derive_more::{Display, Error};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use tabled::{
    Table, Tabled,
    settings::{Margin, Rotate, Style},
};

use crate::common::{print_header, project_config_dir};
use crate::tui::Shape;

const CONFIG_FILE_NAME: &str = "config.json";

/// Options every render and prompt call reads.
///
/// Created once at startup and passed around by reference.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize, Builder)]
#[serde(default)]
pub struct Options {
    /// No escape sequences are emitted, even when a color is requested.
    #[builder(default)]
    pub no_colors: bool,
    /// Shape of bubbles that don't pick one explicitly.
    #[builder(default)]
    pub text_bubble_shape: Shape,
}

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[display("Type mismatch! Expected '{expected}' but got '{actual}'.")]
    TypeMismatch {
        expected: &'static str,
        actual: &'static str,
    },
    #[display("Unknown option '{name}'. Known options: no_colors, text_bubble_shape.")]
    UnknownOption { name: String },
    #[display("Cannot interpret '{raw}' as an option value.")]
    InvalidValue { raw: String },
}

/// A value that can be assigned to one of the [`Options`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum OptionValue {
    Bool(bool),
    Shape(Shape),
}

impl OptionValue {
    #[must_use]
    pub const fn type_name(self) -> &'static str {
        match self {
            OptionValue::Bool(_) => "bool",
            OptionValue::Shape(_) => "Shape",
        }
    }

    /// Reads `true` / `false` as a bool and `Round` / `Square` (any case) as a shape.
    pub fn parse(raw: &str) -> Result<Self, ConfigError> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "true" => Ok(OptionValue::Bool(true)),
            "false" => Ok(OptionValue::Bool(false)),
            "round" => Ok(OptionValue::Shape(Shape::Round)),
            "square" => Ok(OptionValue::Shape(Shape::Square)),
            _ => Err(ConfigError::InvalidValue {
                raw: raw.to_string(),
            }),
        }
    }
}

#[derive(Tabled)]
struct OptionsDisplay {
    no_colors: bool,
    text_bubble_shape: Shape,
}

impl From<&Options> for OptionsDisplay {
    fn from(options: &Options) -> Self {
        Self {
            no_colors: options.no_colors,
            text_bubble_shape: options.text_bubble_shape,
        }
    }
}

impl Options {
    /// Sets the option called `name`, refusing values of the wrong type.
    pub fn set(&mut self, name: &str, value: OptionValue) -> Result<(), ConfigError> {
        match (name, value) {
            ("no_colors", OptionValue::Bool(v)) => self.no_colors = v,
            ("text_bubble_shape", OptionValue::Shape(v)) => self.text_bubble_shape = v,
            ("no_colors", other) => {
                return Err(ConfigError::TypeMismatch {
                    expected: "bool",
                    actual: other.type_name(),
                });
            }
            ("text_bubble_shape", other) => {
                return Err(ConfigError::TypeMismatch {
                    expected: "Shape",
                    actual: other.type_name(),
                });
            }
            _ => {
                return Err(ConfigError::UnknownOption {
                    name: name.to_string(),
                });
            }
        }

        debug!("option {name} set to {value}");
        Ok(())
    }

    pub(crate) fn load_from(config_file: &Path) -> Result<Self> {
        let config_string = fs::read_to_string(config_file)
            .with_context(|| format!("Unable to read {}", config_file.display()))?;

        let options: Options = serde_json::from_str(&config_string)
            .context("Unable to deserialize configuration data")?;

        Ok(options)
    }

    pub(crate) fn save_to(&self, config_file: &Path) -> Result<()> {
        let config_string =
            serde_json::to_string_pretty(self).context("Unable to serialize configuration data")?;

        let mut fd = fs::OpenOptions::new()
            .write(true)
            .truncate(true)
            .create(true)
            .open(config_file)
            .with_context(|| format!("Unable to write {}", config_file.display()))?;

        fd.write_all(config_string.as_bytes()).with_context(|| {
            format!("Failed to write configuration to {}", config_file.display())
        })?;

        Ok(())
    }

    /// Loads `config.json` from the project config directory, or defaults when
    /// there is none yet.
    pub fn load() -> Result<Self> {
        let config_file = config_file_path()?;

        if config_file.exists() {
            info!("loading options from {}", config_file.display());
            Options::load_from(&config_file)
        } else {
            Ok(Options::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        let config_file = config_file_path()?;
        self.save_to(&config_file)?;
        info!("options saved to {}", config_file.display());
        Ok(())
    }
}

fn config_file_path() -> Result<PathBuf> {
    Ok(project_config_dir()?.join(CONFIG_FILE_NAME))
}

pub(crate) fn options_table(options: &Options) -> String {
    let display = OptionsDisplay::from(options);
    let mut table = Table::new([display]);
    table
        .with(Rotate::Left)
        .with(Style::modern())
        .with(Margin::new(4, 0, 0, 0));

    table.to_string()
}

////////////////////////////////////////////////////////////////////////////////
// PUBLIC
////////////////////////////////////////////////////////////////////////////////

pub fn show_configuration() -> Result<()> {
    let options = Options::load()?;

    print_header();
    println!("{}", options_table(&options));

    Ok(())
}

/// Parses `raw`, assigns it to `name` and persists the result.
pub fn set_option(name: &str, raw: &str) -> Result<Options> {
    let mut options = Options::load()?;

    let value = OptionValue::parse(raw)?;
    options.set(name, value)?;
    options.save()?;

    print_header();
    println!("{}", options_table(&options));

    Ok(options)
}
