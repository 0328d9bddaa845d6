use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::identity::LaunchFlags;

/// Color scheme requested from the platform style manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    /// Follow the desktop preference.
    #[default]
    System,
    Light,
    Dark,
}

/// Application settings, persisted to `~/.config/firstwindow/settings.json`.
///
/// Fields missing from an existing file fall back to their `Default`
/// values. The window title and size are not configurable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub color_scheme: ColorScheme,
    /// Default `env_logger` filter; `RUST_LOG` takes precedence.
    pub log_level: String,
    pub non_unique: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            color_scheme: ColorScheme::System,
            log_level: String::from("info"),
            non_unique: false,
        }
    }
}

impl Settings {
    pub fn launch_flags(&self) -> LaunchFlags {
        LaunchFlags::from_non_unique(self.non_unique)
    }
}

/// `None` when neither a config nor a home directory can be determined.
pub fn settings_path() -> Option<PathBuf> {
    dirs::config_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
        .map(|dir| dir.join("firstwindow").join("settings.json"))
}

/// Read settings from the user's config directory.
///
/// Runs before logging is set up, so a malformed file is reported to the
/// caller instead of being logged here.
pub fn try_load() -> Result<Settings, String> {
    match settings_path() {
        Some(path) => try_load_from(&path),
        None => Ok(Settings::default()),
    }
}

/// Read settings from `path`. A missing or unreadable file yields defaults;
/// a file that is not valid settings JSON is an error.
pub fn try_load_from(path: &Path) -> Result<Settings, String> {
    match std::fs::read_to_string(path) {
        Ok(contents) => serde_json::from_str(&contents)
            .map_err(|e| format!("Malformed settings {}: {}", path.display(), e)),
        Err(_) => Ok(Settings::default()),
    }
}

pub fn save(settings: &Settings) -> Result<(), String> {
    let path = settings_path().ok_or_else(|| "No configuration directory available".to_string())?;
    save_to(&path, settings)
}

pub fn save_to(path: &Path, settings: &Settings) -> Result<(), String> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .map_err(|e| format!("Failed to create {}: {}", parent.display(), e))?;
    }
    let json = serde_json::to_string_pretty(settings)
        .map_err(|e| format!("Failed to serialize settings: {}", e))?;
    std::fs::write(path, json).map_err(|e| format!("Failed to write {}: {}", path.display(), e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = try_load_from(&dir.path().join("settings.json")).unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.color_scheme, ColorScheme::System);
        assert_eq!(settings.log_level, "info");
    }

    #[test]
    fn malformed_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = try_load_from(&path).unwrap_err();
        assert!(err.contains("Malformed settings"));
        assert!(err.contains("settings.json"));
    }

    #[test]
    fn wrong_field_type_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"color_scheme": "purple"}"#).unwrap();
        assert!(try_load_from(&path).is_err());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"color_scheme": "dark"}"#).unwrap();
        let settings = try_load_from(&path).unwrap();
        assert_eq!(settings.color_scheme, ColorScheme::Dark);
        assert_eq!(settings.log_level, "info");
        assert!(!settings.non_unique);
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{"window_title": "Hacked", "non_unique": true}"#).unwrap();
        let settings = try_load_from(&path).unwrap();
        assert!(settings.non_unique);
        assert_eq!(settings.launch_flags(), LaunchFlags::NonUnique);
    }

    #[test]
    fn save_creates_parent_and_reloads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings {
            color_scheme: ColorScheme::Light,
            log_level: "debug".to_string(),
            non_unique: true,
        };
        save_to(&path, &settings).unwrap();
        assert_eq!(try_load_from(&path).unwrap(), settings);
    }

    #[test]
    fn settings_path_ends_with_app_dir() {
        if let Some(path) = settings_path() {
            assert!(path.ends_with("firstwindow/settings.json"));
        }
    }
}
