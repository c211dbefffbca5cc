use crate::core::export::EXPORT_FILE_NAME;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_TITLE: &str = "Course Selector";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Settings {
    /// Catalog used when none is given on the command line.
    pub catalog_path: Option<PathBuf>,
    /// Where exports are written and imports are read from.
    pub export_path: Option<PathBuf>,
    /// Title shown in the header bar.
    pub title: Option<String>,
    /// Log filter directive, e.g. "info" or "coursepick=debug".
    pub log_level: Option<String>,
}

impl Settings {
    pub fn export_path(&self) -> PathBuf {
        self.export_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(EXPORT_FILE_NAME))
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or(DEFAULT_TITLE)
    }
}

/// Loads settings from disk.
/// Returns default settings if the file doesn't exist.
pub fn load_settings(config_dir: &Path) -> Result<Settings> {
    let path = config_dir.join("config.json");

    if !path.exists() {
        return Ok(Settings::default());
    }

    let content = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read settings from {}", path.display()))?;

    let settings: Settings = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse settings from {}", path.display()))?;

    Ok(settings)
}

/// Saves settings to disk.
pub fn save_settings(config_dir: &Path, settings: &Settings) -> Result<()> {
    fs::create_dir_all(config_dir)
        .with_context(|| format!("Failed to create config directory: {}", config_dir.display()))?;

    let path = config_dir.join("config.json");

    let content = serde_json::to_string_pretty(settings).context("Failed to serialize settings")?;

    fs::write(&path, content)
        .with_context(|| format!("Failed to write settings to {}", path.display()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_save_and_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let config_dir = temp_dir.path();

        let settings = Settings {
            catalog_path: Some(PathBuf::from("/data/CLASS-ROUTINE-252_cleaned.csv")),
            export_path: Some(PathBuf::from("/home/me/picks.csv")),
            title: Some("UIU Course Selector - Summer 2025".to_string()),
            log_level: Some("debug".to_string()),
        };

        save_settings(config_dir, &settings).unwrap();
        let loaded = load_settings(config_dir).unwrap();

        assert_eq!(loaded, settings);
    }

    #[test]
    fn test_load_nonexistent_returns_default() {
        let temp_dir = TempDir::new().unwrap();
        let config_dir = temp_dir.path().join("nonexistent");

        let settings = load_settings(&config_dir).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("config.json"),
            r#"{ "title": "Fall Picks" }"#,
        )
        .unwrap();

        let settings = load_settings(temp_dir.path()).unwrap();
        assert_eq!(settings.title(), "Fall Picks");
        assert!(settings.catalog_path.is_none());
        assert_eq!(settings.export_path(), PathBuf::from(EXPORT_FILE_NAME));
    }

    #[test]
    fn test_corrupted_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("config.json"), "not valid json").unwrap();

        let err = load_settings(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse settings"));
    }

    #[test]
    fn test_defaults() {
        let settings = Settings::default();
        assert_eq!(settings.title(), DEFAULT_TITLE);
        assert_eq!(settings.export_path(), PathBuf::from("my_courses.csv"));
    }

    #[test]
    fn test_save_creates_directory() {
        let temp_dir = TempDir::new().unwrap();
        let config_dir = temp_dir.path().join("nested").join("config");

        save_settings(&config_dir, &Settings::default()).unwrap();

        assert!(config_dir.join("config.json").exists());
    }
}
