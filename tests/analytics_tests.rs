//! Tests for the best-effort analytics logger.

use std::fs;
use std::path::PathBuf;

use serde_json::Value;

use simply_dice::analytics::AnalyticsLogger;

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("simply-dice-{name}-{}.jsonl", std::process::id()))
}

#[test]
fn events_append_as_json_lines() {
    let path = temp_path("events");
    let _ = fs::remove_file(&path);

    let logger = AnalyticsLogger::new(Some(path.clone()));
    logger.log_roll_dice();
    logger.log_change_settings("shake", true);
    logger.log_change_settings("sound", false);

    let contents = fs::read_to_string(&path).expect("analytics file written");
    let lines: Vec<Value> = contents
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid JSON line"))
        .collect();
    assert_eq!(lines.len(), 3);

    assert_eq!(lines[0]["name"], "roll_dice");
    assert_eq!(lines[1]["name"], "change_settings");
    assert_eq!(lines[1]["params"]["setting_name"], "shake");
    assert_eq!(lines[1]["params"]["new_value"], "on");
    assert_eq!(lines[2]["params"]["new_value"], "off");

    let _ = fs::remove_file(&path);
}

#[test]
fn unwritable_path_is_swallowed() {
    let logger = AnalyticsLogger::new(Some(PathBuf::from(
        "/definitely/not/a/real/dir/analytics.jsonl",
    )));
    // Must not panic or error out.
    logger.log_roll_dice();
    logger.log_change_settings("haptics", false);
}

#[test]
fn no_path_means_log_only() {
    let logger = AnalyticsLogger::new(None);
    logger.log_roll_dice();
}
