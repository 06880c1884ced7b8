mod common;
pub mod config;
mod logging;
pub mod tui;

pub use common::{ENV_CONFIG_DIR_OVERRIDE, PROJECT_NAME, PROJECT_VERSION, print_header};
pub use config::{ConfigError, OptionValue, Options, set_option, show_configuration};
pub use logging::Logging;
