use std::{
    env, fs,
    path::{Component, PathBuf},
};

use anyhow::{Context, Result, anyhow, bail};
use log::{debug, info};

pub const PROJECT_NAME: &str = env!("CARGO_PKG_NAME");
pub const PROJECT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Overrides the directory `config.json` is read from and written to.
///
/// Must be an absolute path without `..` components. Mostly useful for tests
/// and for running several configurations side by side.
pub const ENV_CONFIG_DIR_OVERRIDE: &str = "PRETTY_INPUT_CONFIG_DIR";

pub fn print_header() {
    println!("{PROJECT_NAME} {PROJECT_VERSION}");
}

/// Returns `~/.local/share/pretty-input` (or the platform equivalent),
/// creating it if needed. Log files live here.
pub fn project_data_dir() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        anyhow!("Unable to determine data directory. Ensure XDG_DATA_HOME or HOME is set")
    })?;

    let dir = data_dir.join(PROJECT_NAME);
    ensure_directory(&dir)?;

    Ok(dir)
}

/// Returns the directory holding `config.json`, creating it if needed.
///
/// Honors [`ENV_CONFIG_DIR_OVERRIDE`]; otherwise `dirs::config_dir()/pretty-input`.
pub fn project_config_dir() -> Result<PathBuf> {
    let dir = if let Ok(override_dir) = env::var(ENV_CONFIG_DIR_OVERRIDE) {
        let path = validate_override(&override_dir)?;
        info!(
            "Using config directory override from {ENV_CONFIG_DIR_OVERRIDE}: {}",
            path.display()
        );
        path
    } else {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            anyhow!("Unable to determine config directory. Ensure XDG_CONFIG_HOME or HOME is set")
        })?;
        config_dir.join(PROJECT_NAME)
    };

    ensure_directory(&dir)?;

    Ok(dir)
}

fn validate_override(raw: &str) -> Result<PathBuf> {
    let path = PathBuf::from(raw);

    if !path.is_absolute() {
        bail!("{ENV_CONFIG_DIR_OVERRIDE} must be an absolute path: {raw}");
    }
    if path.components().any(|c| matches!(c, Component::ParentDir)) {
        bail!("{ENV_CONFIG_DIR_OVERRIDE} contains parent directory references: {raw}");
    }

    Ok(path)
}

fn ensure_directory(dir: &std::path::Path) -> Result<()> {
    debug!("Ensuring directory exists: {}", dir.display());
    fs::create_dir_all(dir)
        .with_context(|| format!("Unable to create directory: {}", dir.display()))
}
