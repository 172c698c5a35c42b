use crate::cli::output::Output;
use crate::cli::ConfigAction;
use crate::config::{load_settings, Settings};
use crate::errors::Result;
use std::path::{Path, PathBuf};

/// Handle configuration commands
pub async fn run(action: ConfigAction, settings_path: Option<&PathBuf>) -> Result<()> {
    let (path, settings) = load_settings(settings_path)?;

    match action {
        ConfigAction::Set { key, value } => set_config_value(&path, settings, &key, &value).await,
        ConfigAction::Get { key } => get_config_value(&settings, &key).await,
        ConfigAction::List => list_config_values(&settings).await,
        ConfigAction::Path => {
            println!("{}", path.display());
            Ok(())
        }
    }
}

async fn set_config_value(path: &Path, mut settings: Settings, key: &str, value: &str) -> Result<()> {
    settings.set_value(key, value)?;
    settings.validate()?;
    settings.save_to_file(path)?;

    Output::success(format!("Configuration updated: {key} = {value}"));
    if key == "animations.enabled" && value == "false" {
        Output::tip("Steps still report transitions, marked as skipped");
    }

    Ok(())
}

async fn get_config_value(settings: &Settings, key: &str) -> Result<()> {
    let value = settings.get_value(key)?;
    println!("{key} = {value}");
    Ok(())
}

async fn list_config_values(settings: &Settings) -> Result<()> {
    Output::section("navstack configuration");
    for key in Settings::KEYS {
        Output::sub_item(format!("{key} = {}", settings.get_value(key)?));
    }
    Ok(())
}
