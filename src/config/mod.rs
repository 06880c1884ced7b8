mod options;
pub use options::{ConfigError, OptionValue, Options, set_option, show_configuration};

#[cfg(test)]
mod options_tests;
