//! User preference persistence.
//!
//! Three boolean flags stored as a small JSON file next to the binary (or
//! wherever `--settings-file` points). Loading degrades to defaults on any
//! error so a corrupt or missing file never blocks startup.

use std::fs;
use std::path::{Path, PathBuf};

use bevy::log::{debug, warn};
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

/// The persisted flags. Unknown fields are ignored and missing fields take
/// their defaults, so the file stays forward compatible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Play the roll sound.
    #[serde(default = "default_true")]
    pub sound: bool,
    /// Pulse haptics on roll start and completion.
    #[serde(default = "default_true")]
    pub haptics: bool,
    /// Arm the shake-to-roll trigger.
    #[serde(default)]
    pub shake: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sound: true,
            haptics: true,
            shake: false,
        }
    }
}

/// Owns the settings file path and the current values. Constructed once at
/// startup and handed to whatever needs it - no ambient singleton.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
    pub settings: Settings,
}

impl SettingsStore {
    /// Loads settings from `path`, falling back to defaults if the file is
    /// missing or unreadable.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let settings = match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    warn!("ignoring malformed settings file {}: {e}", path.display());
                    Settings::default()
                }
            },
            Err(e) => {
                debug!("no settings file at {} ({e}), using defaults", path.display());
                Settings::default()
            }
        };
        Self { path, settings }
    }

    /// Starts from defaults but keeps `path` for later saves.
    pub fn with_defaults(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            settings: Settings::default(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes the current settings back to disk.
    pub fn save(&self) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(&self.settings)?;
        fs::write(&self.path, json)
    }
}
