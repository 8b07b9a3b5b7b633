use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use super::error::AppError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    pub fn is_dark(self) -> bool {
        self == ThemePreference::Dark
    }

    pub fn from_dark(is_dark: bool) -> Self {
        if is_dark {
            ThemePreference::Dark
        } else {
            ThemePreference::Light
        }
    }
}

/// Persisted preferences. The theme key is read once at startup and written
/// only when the user toggles the theme; nothing else survives a restart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppSettings {
    /// `None` means the user has never toggled the theme; the system
    /// preference decides the starting mode.
    #[serde(rename = "portfolio-theme", default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<ThemePreference>,
}

impl AppSettings {
    /// Load settings from disk, or fall back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    fn load_from(config_path: &Path) -> Self {
        match fs::read_to_string(config_path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<(), AppError> {
        self.save_to(&Self::get_config_path())
    }

    fn save_to(&self, config_path: &Path) -> Result<(), AppError> {
        // Ensure parent directory exists
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(config_path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("crabfolio");
        path.push("settings.json");
        path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.theme, None);
    }

    #[test]
    fn test_serialize_deserialize() {
        let settings = AppSettings {
            theme: Some(ThemePreference::Dark),
        };
        let json = serde_json::to_string(&settings).unwrap();
        let loaded: AppSettings = serde_json::from_str(&json).unwrap();
        assert_eq!(settings, loaded);
    }

    #[test]
    fn test_theme_key_and_values() {
        // The persisted shape is {"portfolio-theme": "dark"|"light"}
        let settings = AppSettings {
            theme: Some(ThemePreference::Dark),
        };
        let json = serde_json::to_string(&settings).unwrap();
        assert!(json.contains("\"portfolio-theme\":\"dark\""));

        let loaded: AppSettings = serde_json::from_str(r#"{"portfolio-theme": "light"}"#).unwrap();
        assert_eq!(loaded.theme, Some(ThemePreference::Light));
    }

    #[test]
    fn test_missing_theme_is_none() {
        let loaded: AppSettings = serde_json::from_str("{}").unwrap();
        assert_eq!(loaded.theme, None);
    }

    #[test]
    fn test_unsaved_theme_is_not_written() {
        let json = serde_json::to_string(&AppSettings::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_from_dark() {
        assert_eq!(ThemePreference::from_dark(true), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_dark(false), ThemePreference::Light);
        assert!(ThemePreference::Dark.is_dark());
        assert!(!ThemePreference::Light.is_dark());
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = AppSettings {
            theme: Some(ThemePreference::Dark),
        };
        settings.save_to(&path).unwrap();

        let loaded = AppSettings::load_from(&path);
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = AppSettings::load_from(&dir.path().join("absent.json"));
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_load_corrupt_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{not json").unwrap();
        let loaded = AppSettings::load_from(&path);
        assert_eq!(loaded, AppSettings::default());
    }
}
