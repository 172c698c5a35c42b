pub mod settings;

pub use settings::{AnimationSettings, NavigationSettings, Settings};

use crate::errors::{NavError, Result};
use std::path::PathBuf;

/// Get the navstack configuration directory (~/.navstack/)
pub fn get_config_dir() -> Result<PathBuf> {
    let home_dir =
        dirs::home_dir().ok_or_else(|| NavError::config("Could not find home directory"))?;
    Ok(home_dir.join(".navstack"))
}

/// Settings file used when no explicit path is given
pub fn default_settings_path() -> Result<PathBuf> {
    Ok(get_config_dir()?.join("config.json"))
}

/// Resolve the settings file and load it
pub fn load_settings(explicit: Option<&PathBuf>) -> Result<(PathBuf, Settings)> {
    let path = match explicit {
        Some(path) => path.clone(),
        None => default_settings_path()?,
    };
    let settings = Settings::load_from_file(&path)?;
    settings.validate()?;
    tracing::debug!("Loaded settings from {}", path.display());
    Ok((path, settings))
}
