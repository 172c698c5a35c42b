use crate::cli::output::Output;
use crate::config::load_settings;
use crate::errors::Result;
use crate::replay::{Replayer, Script};
use std::path::{Path, PathBuf};

/// Replay a navigation script and print the report
pub async fn run(script_path: &Path, settings_path: Option<&PathBuf>, json: bool) -> Result<()> {
    let (_, settings) = load_settings(settings_path)?;
    let script = Script::load(script_path)?;

    let report = Replayer::new(settings).run(&script).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        Output::replay_report(&report);
    }

    Ok(())
}
