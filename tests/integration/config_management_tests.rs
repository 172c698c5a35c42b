use super::test_helpers::get_binary_path;
use navstack::config::Settings;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn navstack(settings_path: &Path, args: &[&str]) -> Output {
    Command::new(get_binary_path())
        .arg("--settings")
        .arg(settings_path)
        .args(args)
        .output()
        .expect("Command should run")
}

/// Test that a value set through the CLI is persisted and read back
#[tokio::test]
async fn test_config_set_then_get() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("nested").join("config.json");

    let output = navstack(
        &settings_path,
        &["config", "set", "animations.pop_duration_ms", "400"],
    );
    assert!(
        output.status.success(),
        "set failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let settings = Settings::load_from_file(&settings_path).unwrap();
    assert_eq!(settings.animations.pop_duration_ms, 400);

    let output = navstack(&settings_path, &["config", "get", "animations.pop_duration_ms"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        "animations.pop_duration_ms = 400"
    );
}

/// Test that invalid values and keys are rejected without touching the file
#[tokio::test]
async fn test_config_rejects_invalid_input() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("config.json");

    for args in [
        ["config", "set", "animations.enabled", "maybe"],
        ["config", "set", "navigation.unknown", "true"],
        ["config", "set", "animations.push_duration_ms", "60000"],
    ] {
        let output = navstack(&settings_path, &args);
        assert!(!output.status.success(), "{args:?} should fail");
        let stderr = String::from_utf8_lossy(&output.stderr);
        assert!(stderr.contains("Configuration error"), "stderr: {stderr}");
    }

    assert!(!settings_path.exists());
}

/// Test config file corruption is reported instead of silently replaced
#[tokio::test]
async fn test_config_corruption_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("config.json");
    fs::write(&settings_path, "{ invalid json }").unwrap();

    let output = navstack(&settings_path, &["config", "list"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("Failed to parse config file"),
        "Should contain config parsing error. Stderr: {stderr}"
    );
    assert_eq!(fs::read_to_string(&settings_path).unwrap(), "{ invalid json }");
}

#[tokio::test]
async fn test_config_list_and_path() {
    let temp_dir = TempDir::new().unwrap();
    let settings_path = temp_dir.path().join("config.json");

    let output = navstack(&settings_path, &["config", "list"]);
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for key in Settings::KEYS {
        assert!(stdout.contains(key), "missing {key} in {stdout}");
    }
    assert!(stdout.contains("navigation.stack_id = root-stack"));

    let output = navstack(&settings_path, &["config", "path"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        settings_path.display().to_string()
    );
}
