//! Locates and loads the configuration for a checked project.
//!
//! The first match wins:
//!
//! 1. `--config` / `$PREFLIGHT_CONFIG`
//! 2. `preflight.toml`, then `.preflight.toml`, in the checked directory
//! 3. the built-in App Runner rules

use anyhow::{Context, Result};
use preflight_core::Config;
use std::path::{Path, PathBuf};

/// Project-level config file names, checked in order.
const PROJECT_CONFIG_NAMES: &[&str] = &["preflight.toml", ".preflight.toml"];

/// Returns the config file to load for `project_dir`, if any.
///
/// An explicit path is returned as given; a missing file surfaces when it is
/// loaded.
#[must_use]
pub fn locate(project_dir: &Path, explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(p) = explicit {
        return Some(p.to_path_buf());
    }

    PROJECT_CONFIG_NAMES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.is_file())
}

/// Loads the configuration for `project_dir`.
///
/// # Errors
///
/// Returns the underlying [`preflight_core::ConfigError`] with the file path as
/// context when the located file cannot be read, parsed, or validated.
pub fn load(project_dir: &Path, explicit: Option<&Path>) -> Result<Config> {
    let Some(path) = locate(project_dir, explicit) else {
        tracing::debug!("No config file found, using built-in rules");
        return Ok(Config::default());
    };

    tracing::debug!("Loading config: {}", path.display());
    Config::from_file(&path).with_context(|| format!("Failed to load config: {}", path.display()))
}
