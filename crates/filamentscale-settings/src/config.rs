//! Scale configuration
//!
//! Provides configuration file handling and validation for the scale
//! settings surface. Supports JSON and TOML files stored in a
//! platform-specific directory.
//!
//! The adapter reads `offset`, `cal_factor`, and `spool_weight`; it writes
//! only `lastknownweight`. Field names follow the plugin's settings keys so
//! configs stay interchangeable with the plugin's own store.

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Complete scale configuration
///
/// Aggregates the settings surface the companion reads and writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleConfig {
    /// Raw sensor offset established by the last tare.
    #[serde(default)]
    pub offset: f64,
    /// Conversion factor established by the last calibration.
    #[serde(default = "default_cal_factor")]
    pub cal_factor: f64,
    /// Weight of the empty spool in grams, subtracted from every reading.
    #[serde(default = "default_spool_weight")]
    pub spool_weight: f64,
    /// Last derived net weight, written through on every good reading.
    #[serde(default, rename = "lastknownweight")]
    pub last_known_weight: f64,
    /// Seconds between weight updates from the plugin.
    #[serde(default = "default_update_delay")]
    pub update_delay: f64,
}

fn default_cal_factor() -> f64 {
    1.0
}

fn default_spool_weight() -> f64 {
    200.0
}

fn default_update_delay() -> f64 {
    3.0
}

impl Default for ScaleConfig {
    fn default() -> Self {
        Self {
            offset: 0.0,
            cal_factor: default_cal_factor(),
            spool_weight: default_spool_weight(),
            last_known_weight: 0.0,
            update_delay: default_update_delay(),
        }
    }
}

impl ScaleConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(SettingsError::UnsupportedFormat(
                path.display().to_string(),
            ));
        };

        config.validate()?;
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        self.validate()?;

        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)
                .map_err(|e| SettingsError::SaveError(e.to_string()))?
        } else {
            return Err(SettingsError::UnsupportedFormat(
                path.display().to_string(),
            ));
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if self.cal_factor == 0.0 {
            return Err(SettingsError::InvalidSetting {
                key: "cal_factor".to_string(),
                reason: "must be non-zero".to_string(),
            });
        }

        if self.spool_weight < 0.0 {
            return Err(SettingsError::InvalidSetting {
                key: "spool_weight".to_string(),
                reason: "must not be negative".to_string(),
            });
        }

        if self.update_delay <= 0.0 {
            return Err(SettingsError::InvalidSetting {
                key: "update_delay".to_string(),
                reason: "must be > 0".to_string(),
            });
        }

        Ok(())
    }

    /// Default config file location for this platform
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir()
            .ok_or_else(|| SettingsError::ConfigDirectory("no config directory".to_string()))?;
        Ok(base.join("filamentscale").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_plugin() {
        let config = ScaleConfig::default();
        assert_eq!(config.offset, 0.0);
        assert_eq!(config.cal_factor, 1.0);
        assert_eq!(config.spool_weight, 200.0);
        assert_eq!(config.last_known_weight, 0.0);
        assert_eq!(config.update_delay, 3.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_cal_factor() {
        let config = ScaleConfig {
            cal_factor: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(SettingsError::InvalidSetting { key, .. }) if key == "cal_factor"
        ));
    }

    #[test]
    fn test_validate_rejects_negative_spool_weight() {
        let config = ScaleConfig {
            spool_weight: -1.0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = ScaleConfig::default();
        config.last_known_weight = 550.0;
        config.save_to_file(&path).unwrap();

        let loaded = ScaleConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_toml_uses_plugin_field_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = ScaleConfig::default();
        config.last_known_weight = 42.0;
        config.save_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("lastknownweight"));

        let loaded = ScaleConfig::load_from_file(&path).unwrap();
        assert_eq!(loaded.last_known_weight, 42.0);
    }

    #[test]
    fn test_unsupported_extension() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        assert!(matches!(
            ScaleConfig::default().save_to_file(&path),
            Err(SettingsError::UnsupportedFormat(_))
        ));
    }
}
