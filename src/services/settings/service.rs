use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::models::settings::{PickerSettings, SettingsError};

use super::mapper::{settings_to_toml, toml_to_settings};

const CONFIG_FILE_NAME: &str = "datepicker.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid settings: {0}")]
    Invalid(#[from] SettingsError),
}

/// Resolve the settings file in the platform config directory.
pub fn default_config_path() -> PathBuf {
    if let Some(dirs) = ProjectDirs::from("com", "RustCalendar", "DatePicker") {
        dirs.config_dir().join(CONFIG_FILE_NAME)
    } else {
        log::warn!("Unable to resolve project directory; using current dir for settings");
        PathBuf::from(CONFIG_FILE_NAME)
    }
}

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the current settings. A missing file yields the defaults.
    pub fn get(&self) -> Result<PickerSettings, ConfigError> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                log::info!(
                    "No settings file at {}; using defaults",
                    self.path.display()
                );
                return Ok(PickerSettings::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let settings = toml_to_settings(&text)?;
        log::info!("Loaded settings from {}", self.path.display());
        Ok(settings)
    }

    /// Update settings
    pub fn update(&self, settings: &PickerSettings) -> Result<(), ConfigError> {
        let text = settings_to_toml(settings)?;
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        std::fs::write(&self.path, text).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("datepicker.toml"));
        assert_eq!(service.get().unwrap(), PickerSettings::default());
    }

    #[test]
    fn test_settings_persistence() {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("nested").join("datepicker.toml"));

        let settings = PickerSettings {
            first_day_of_week: 1,
            date_format: "DD/MM/YYYY".to_string(),
            heading_format: "%b %Y".to_string(),
        };
        service.update(&settings).unwrap();

        assert_eq!(service.get().unwrap(), settings);
    }

    #[test]
    fn test_update_rejects_invalid_settings() {
        let dir = TempDir::new().unwrap();
        let service = SettingsService::new(dir.path().join("datepicker.toml"));
        let settings = PickerSettings {
            first_day_of_week: 8,
            ..PickerSettings::default()
        };
        assert!(matches!(
            service.update(&settings),
            Err(ConfigError::Invalid(_))
        ));
        assert!(!service.path().exists());
    }
}
