use std::{fs, path::PathBuf};

use anyhow::{Context, Result};
use env_logger::Target;
use log::LevelFilter;

use crate::common::project_data_dir;

/// `env_logger` setup for the binary.
///
/// Prompts own the whole screen, so by default log lines go to a file in the
/// project data directory instead of stderr.
#[derive(Default)]
pub struct Logging {
    file_name: Option<PathBuf>,
    debug_mode: bool,
}

impl Logging {
    #[must_use]
    pub fn new() -> Self {
        Self {
            file_name: None,
            debug_mode: false,
        }
    }

    /// Log into `file_name`, resolved relative to the project data directory.
    #[must_use]
    pub fn with_file<P>(mut self, file_name: P) -> Self
    where
        P: Into<PathBuf>,
    {
        self.file_name = Some(file_name.into());
        self
    }

    /// Raise the level filter from `Info` to `Debug`.
    #[must_use]
    pub fn with_debug_mode(mut self, enable: bool) -> Self {
        self.debug_mode = enable;
        self
    }

    fn level(&self) -> LevelFilter {
        if self.debug_mode {
            LevelFilter::Debug
        } else {
            LevelFilter::Info
        }
    }

    pub fn start(&self) -> Result<()> {
        let mut b = env_logger::builder();
        b.filter_level(self.level());

        if let Some(file_name) = &self.file_name {
            let log_file = project_data_dir()?.join(file_name);

            let fd = fs::OpenOptions::new()
                .create(true)
                .write(true)
                .truncate(true)
                .open(&log_file)
                .with_context(|| format!("Unable to open {} for writing", log_file.display()))?;

            b.target(Target::Pipe(Box::new(fd)));
        }

        b.try_init().context("Logger already initialized")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logging_default_debug_mode_disabled() {
        let logging = Logging::new();
        assert!(!logging.debug_mode);
        assert_eq!(logging.level(), LevelFilter::Info);
    }

    #[test]
    fn test_logging_with_debug_mode_enabled() {
        let logging = Logging::new().with_debug_mode(true);
        assert_eq!(logging.level(), LevelFilter::Debug);
    }

    #[test]
    fn test_logging_builder_chaining() {
        let logging = Logging::new()
            .with_file("app.log")
            .with_debug_mode(true)
            .with_debug_mode(false);

        assert!(!logging.debug_mode);
        assert_eq!(
            logging.file_name.unwrap().to_string_lossy(),
            "app.log"
        );
    }
}
