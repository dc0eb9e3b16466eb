//! Settings storage
//!
//! Preferences are edited by hand in `settings.json`. The widget only reads
//! them, writing a file of defaults on first launch.

use crate::i18n::TranslationTable;
use crate::particles::DEFAULT_PARTICLE_COUNT;
use crate::storage::{get_data_dir, StorageError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Upper bound for `particle_count`
pub const MAX_PARTICLE_COUNT: u32 = 500;

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    /// UI language: "auto" to follow the system locale, or a locale code
    #[serde(default = "default_language")]
    pub language: String,
    /// Number of particles spawned when an entry is thrown away (0 disables the effect)
    #[serde(default = "default_particle_count")]
    pub particle_count: u32,
    /// Show the `HH:MM` creation time under each entry
    #[serde(default = "default_show_timestamps")]
    pub show_timestamps: bool,
}

fn default_language() -> String {
    "auto".to_string()
}

fn default_particle_count() -> u32 {
    DEFAULT_PARTICLE_COUNT as u32
}

fn default_show_timestamps() -> bool {
    true
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            language: default_language(),
            particle_count: default_particle_count(),
            show_timestamps: default_show_timestamps(),
        }
    }
}

impl AppSettings {
    /// Validate settings values
    ///
    /// Unknown languages fall back to "auto".
    pub fn validate(&mut self, table: &TranslationTable) {
        self.particle_count = self.particle_count.min(MAX_PARTICLE_COUNT);

        let language = self.language.trim();
        if language != "auto" && table.get(language).is_none() {
            tracing::warn!("Unknown language {:?}, falling back to auto", self.language);
            self.language = default_language();
        } else {
            self.language = language.to_string();
        }
    }
}

/// Get the settings file path
fn get_settings_path() -> Result<PathBuf, StorageError> {
    Ok(get_data_dir()?.join("settings.json"))
}

/// Load settings from disk
///
/// Returns default settings if the file can't be read or is corrupted
pub fn load_settings() -> AppSettings {
    match get_settings_path().and_then(|path| load_or_init_settings(&path)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::warn!("Failed to load settings, using defaults: {}", e);
            AppSettings::default()
        }
    }
}

/// Load and validate settings from a specific file
pub fn load_settings_from(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        tracing::info!("Settings file not found, using defaults");
        return Ok(AppSettings::default());
    }

    let json = fs::read_to_string(path)?;
    let mut settings: AppSettings = serde_json::from_str(&json)?;
    settings.validate(TranslationTable::builtin());

    tracing::debug!("Loaded settings from {}", path.display());
    Ok(settings)
}

/// Load settings, writing defaults to `path` first if it doesn't exist
pub fn load_or_init_settings(path: &Path) -> Result<AppSettings, StorageError> {
    if !path.exists() {
        let settings = AppSettings::default();
        save_settings_to(&settings, path)?;
        tracing::info!("Wrote default settings to {}", path.display());
        return Ok(settings);
    }
    load_settings_from(path)
}

/// Save settings to a specific file
pub fn save_settings_to(settings: &AppSettings, path: &Path) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(settings)?;
    fs::write(path, json)?;

    tracing::debug!("Saved settings to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.language, "auto");
        assert_eq!(settings.particle_count, 150);
        assert!(settings.show_timestamps);
    }

    #[test]
    fn test_settings_validation() {
        let table = TranslationTable::builtin();
        let mut settings = AppSettings::default();

        settings.particle_count = 10_000;
        settings.validate(table);
        assert_eq!(settings.particle_count, MAX_PARTICLE_COUNT);

        settings.language = "klingon".to_string();
        settings.validate(table);
        assert_eq!(settings.language, "auto");

        settings.language = " ja ".to_string();
        settings.validate(table);
        assert_eq!(settings.language, "ja");
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let settings: AppSettings = serde_json::from_str(r#"{"language":"ko"}"#).unwrap();
        assert_eq!(settings.language, "ko");
        assert_eq!(settings.particle_count, 150);
        assert!(settings.show_timestamps);
    }

    #[test]
    fn test_settings_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let settings = AppSettings {
            language: "fr".to_string(),
            particle_count: 40,
            show_timestamps: false,
        };
        save_settings_to(&settings, &path).unwrap();

        let loaded = load_settings_from(&path).unwrap();
        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load_settings_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, AppSettings::default());
    }

    #[test]
    fn test_first_launch_writes_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");

        let settings = load_or_init_settings(&path).unwrap();
        assert_eq!(settings, AppSettings::default());
        assert!(path.exists());

        fs::write(&path, r#"{"language":"de","particle_count":9000}"#).unwrap();
        let edited = load_or_init_settings(&path).unwrap();
        assert_eq!(edited.language, "de");
        assert_eq!(edited.particle_count, MAX_PARTICLE_COUNT);
    }
}
