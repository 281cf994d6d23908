use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::model::DEFAULT_NOTIFICATION_DURATION;

pub const DATA_DIR_ENV: &str = "REPUBLIC_QUIZ_DATA_DIR";
const SETTINGS_FILE: &str = "settings.json";

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    #[serde(default = "default_version")]
    version: u32,

    #[serde(default = "default_notification_duration_ms")]
    pub notification_duration_ms: u64,

    #[serde(default = "default_true")]
    pub announcements_enabled: bool,

    #[serde(default = "default_true")]
    pub show_explanations: bool,
}

// Helper functions for default values
fn default_version() -> u32 {
    1
}
fn default_notification_duration_ms() -> u64 {
    DEFAULT_NOTIFICATION_DURATION.as_millis() as u64
}
fn default_true() -> bool {
    true
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            version: default_version(),
            notification_duration_ms: default_notification_duration_ms(),
            announcements_enabled: true,
            show_explanations: true,
        }
    }
}

impl Settings {
    /// Reads `settings.json` from `data_dir`, writing defaults when it is missing or unreadable.
    pub fn load(data_dir: &Path) -> Self {
        let path = Self::settings_path(data_dir);
        if let Ok(contents) = fs::read_to_string(&path) {
            match serde_json::from_str::<Settings>(&contents) {
                Ok(mut settings) => {
                    settings.migrate();
                    return settings;
                }
                Err(err) => {
                    warn!(target: "settings", "Ignoring unreadable {}: {}", path.display(), err)
                }
            }
        }
        let default = Settings::default();
        if let Err(err) = default.save(data_dir) {
            warn!(target: "settings", "Could not write default settings: {}", err);
        }
        default
    }

    pub fn save(&self, data_dir: &Path) -> Result<(), std::io::Error> {
        fs::create_dir_all(data_dir)?;
        let contents = serde_json::to_string_pretty(self)?;
        fs::write(Self::settings_path(data_dir), contents)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn notification_duration(&self) -> Duration {
        Duration::from_millis(self.notification_duration_ms)
    }

    fn settings_path(data_dir: &Path) -> PathBuf {
        data_dir.join(SETTINGS_FILE)
    }

    fn migrate(&mut self) {
        match self.version {
            0 => {
                self.version = 1;
            }
            _ => (),
        }
    }

    /// Explicit directory, then `REPUBLIC_QUIZ_DATA_DIR`, then the XDG-style
    /// default under `$HOME`, then the working directory.
    pub fn resolve_data_dir(explicit: Option<PathBuf>) -> PathBuf {
        explicit
            .or_else(|| {
                std::env::var(DATA_DIR_ENV)
                    .ok()
                    .filter(|v| !v.trim().is_empty())
                    .map(PathBuf::from)
            })
            .or_else(|| {
                std::env::var("HOME")
                    .ok()
                    .filter(|v| !v.trim().is_empty())
                    .map(|home| PathBuf::from(home).join(".local/share/republic-quiz"))
            })
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_load_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load(dir.path());

        assert_eq!(settings, Settings::default());
        assert_eq!(settings.notification_duration(), Duration::from_millis(4000));
        assert!(dir.path().join(SETTINGS_FILE).exists());
    }

    #[test]
    fn test_load_fills_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{"version": 1, "announcements_enabled": false}"#,
        )
        .unwrap();

        let settings = Settings::load(dir.path());
        assert!(!settings.announcements_enabled);
        assert!(settings.show_explanations);
        assert_eq!(settings.notification_duration_ms, 4000);
    }

    #[test]
    fn test_migrates_unversioned_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(SETTINGS_FILE),
            r#"{"version": 0, "notification_duration_ms": 2500}"#,
        )
        .unwrap();

        let settings = Settings::load(dir.path());
        assert_eq!(settings.version(), 1);
        assert_eq!(settings.notification_duration(), Duration::from_millis(2500));
    }

    #[test]
    #[serial]
    fn test_resolve_data_dir_precedence() {
        let original_home = std::env::var("HOME").ok();
        std::env::set_var(DATA_DIR_ENV, "/tmp/quiz-env");
        assert_eq!(
            Settings::resolve_data_dir(Some(PathBuf::from("/tmp/explicit"))),
            PathBuf::from("/tmp/explicit")
        );
        assert_eq!(
            Settings::resolve_data_dir(None),
            PathBuf::from("/tmp/quiz-env")
        );

        std::env::remove_var(DATA_DIR_ENV);
        std::env::set_var("HOME", "/home/tester");
        assert_eq!(
            Settings::resolve_data_dir(None),
            PathBuf::from("/home/tester/.local/share/republic-quiz")
        );

        match original_home {
            Some(home) => std::env::set_var("HOME", home),
            None => std::env::remove_var("HOME"),
        }
    }
}
