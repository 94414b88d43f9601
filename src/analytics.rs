//! Best-effort usage event logging.
//!
//! Events are appended as JSON lines to a local file when one is configured,
//! and always echoed at debug level. Every failure is swallowed: analytics
//! must never affect app behavior.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use bevy::log::debug;
use serde_json::{json, Value};

#[derive(Debug, Clone, Default)]
pub struct AnalyticsLogger {
    path: Option<PathBuf>,
}

impl AnalyticsLogger {
    /// `path = None` keeps events log-only.
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    fn log_event(&self, name: &str, params: Value) {
        debug!("[analytics] {name} {params}");
        let Some(path) = &self.path else {
            return;
        };
        let line = json!({ "name": name, "params": params });
        let result = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .and_then(|mut file| writeln!(file, "{line}"));
        if let Err(e) = result {
            debug!("[analytics] dropping {name}: {e}");
        }
    }

    pub fn log_roll_dice(&self) {
        self.log_event("roll_dice", json!({}));
    }

    pub fn log_change_settings(&self, setting: &str, value: bool) {
        self.log_event(
            "change_settings",
            json!({
                "setting_name": setting,
                "new_value": if value { "on" } else { "off" },
            }),
        );
    }
}
