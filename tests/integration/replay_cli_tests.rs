use super::test_helpers::get_binary_path;
use serde_json::Value;
use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn run_replay(dir: &Path, script: &str, extra: &[&str]) -> Output {
    let script_path = dir.join("script.json");
    fs::write(&script_path, script).unwrap();
    let settings_path = dir.join("config.json");

    Command::new(get_binary_path())
        .arg("--settings")
        .arg(&settings_path)
        .arg("replay")
        .arg(&script_path)
        .args(extra)
        .output()
        .expect("Command should run")
}

fn report(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "replay failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("report should be JSON")
}

#[tokio::test]
async fn test_replay_reports_json() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_replay(
        temp_dir.path(),
        r#"{
            "root": {"id": "home", "options": {"topBar": {"title": "Home"}}},
            "steps": [
                {"op": "push", "screen": {"id": "inbox"}},
                {"op": "push", "screen": {"id": "detail"}, "animated": false},
                {"op": "push", "screen": {"id": "settings"}},
                {"op": "pop_to", "id": "inbox"},
                {"op": "pop_specific", "id": "ghost"},
                {"op": "pop_to_root"}
            ]
        }"#,
        &["--json"],
    );

    let report = report(&output);
    assert_eq!(report["stack_id"], "root-stack");
    assert_eq!(report["final_stack"], serde_json::json!(["home"]));
    assert_eq!(report["attached_views"], serde_json::json!(["home"]));
    assert_eq!(
        report["destroyed"],
        serde_json::json!(["inbox", "detail", "settings"])
    );
    assert_eq!(report["top_bar_title"], "Home");

    let steps = report["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 6);
    assert_eq!(steps[3]["outcome"]["status"], "resolved");
    assert_eq!(steps[3]["outcome"]["id"], "inbox");
    assert_eq!(steps[4]["outcome"]["status"], "rejected");
    assert_eq!(steps[4]["outcome"]["reason"], "Not found: ghost");
    assert_eq!(steps[5]["outcome"]["id"], "inbox");
}

#[tokio::test]
async fn test_replay_uses_settings_file() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("config.json"),
        r#"{"navigation": {"stack_id": "main"}, "animations": {"enabled": false}}"#,
    )
    .unwrap();

    let output = run_replay(
        temp_dir.path(),
        r#"{"root": {"id": "home"}, "steps": [{"op": "push", "screen": {"id": "a"}}, {"op": "back"}]}"#,
        &["--json"],
    );

    let report = report(&output);
    assert_eq!(report["stack_id"], "main");
    let transitions = report["transitions"].as_array().unwrap();
    assert_eq!(transitions.len(), 2);
    assert!(transitions
        .iter()
        .all(|transition| transition["skipped"] == Value::Bool(true)));
    assert_eq!(report["steps"][1]["outcome"]["handled"], true);
}

#[tokio::test]
async fn test_replay_duplicate_push_is_reported() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_replay(
        temp_dir.path(),
        r#"{"root": {"id": "home"}, "steps": [{"op": "push", "screen": {"id": "home"}}]}"#,
        &["--json"],
    );

    let report = report(&output);
    assert_eq!(report["steps"][0]["outcome"]["status"], "rejected");
    assert_eq!(report["steps"][0]["outcome"]["reason"], "Duplicate id: home");
    assert_eq!(report["final_stack"], serde_json::json!(["home"]));
}

#[tokio::test]
async fn test_replay_human_output() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_replay(
        temp_dir.path(),
        r#"{"root": {"id": "home"}, "steps": [{"op": "push", "screen": {"id": "detail"}}]}"#,
        &["--no-color"],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("detail"), "stdout: {stdout}");
}

#[tokio::test]
async fn test_invalid_script_fails_with_message() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_replay(
        temp_dir.path(),
        r#"{"root": {}, "steps": [{"op": "teleport"}]}"#,
        &[],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Script error"), "stderr: {stderr}");
}
