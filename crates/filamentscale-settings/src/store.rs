//! Shared settings handle
//!
//! The adapter reads the settings surface on every message and writes the
//! derived net weight back through it. [`SettingsStore`] is the seam; the
//! host environment decides what backs it. [`SharedSettings`] is the
//! in-process implementation with optional write-through file persistence.

use crate::config::ScaleConfig;
use parking_lot::RwLock;
use std::path::PathBuf;
use std::sync::Arc;

/// Read/write surface over the scale settings.
///
/// `offset`, `cal_factor`, and `spool_weight` are read-only to consumers;
/// only the last known weight is writable.
pub trait SettingsStore: Send + Sync {
    /// Raw sensor offset from the last tare.
    fn offset(&self) -> f64;

    /// Conversion factor from the last calibration.
    fn cal_factor(&self) -> f64;

    /// Empty spool weight in grams.
    fn spool_weight(&self) -> f64;

    /// Last derived net weight.
    fn last_known_weight(&self) -> f64;

    /// Write through the derived net weight.
    fn set_last_known_weight(&self, grams: f64);
}

/// Thread-safe settings handle backed by a [`ScaleConfig`].
///
/// Cloning yields another handle to the same underlying config.
#[derive(Clone)]
pub struct SharedSettings {
    config: Arc<RwLock<ScaleConfig>>,
    /// When set, every write-through also saves the config file.
    path: Option<PathBuf>,
}

impl SharedSettings {
    /// Create a handle over an in-memory config.
    pub fn new(config: ScaleConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            path: None,
        }
    }

    /// Create a handle that saves back to `path` on every write-through.
    pub fn with_persistence(config: ScaleConfig, path: PathBuf) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            path: Some(path),
        }
    }

    /// Load the config from `path`, falling back to defaults when the file
    /// is missing or unreadable. The handle keeps saving back to `path`.
    pub fn load_or_default(path: PathBuf) -> Self {
        let config = match ScaleConfig::load_from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Using default settings");
                ScaleConfig::default()
            }
        };
        Self::with_persistence(config, path)
    }

    /// Snapshot of the current configuration.
    pub fn snapshot(&self) -> ScaleConfig {
        self.config.read().clone()
    }
}

impl SettingsStore for SharedSettings {
    fn offset(&self) -> f64 {
        self.config.read().offset
    }

    fn cal_factor(&self) -> f64 {
        self.config.read().cal_factor
    }

    fn spool_weight(&self) -> f64 {
        self.config.read().spool_weight
    }

    fn last_known_weight(&self) -> f64 {
        self.config.read().last_known_weight
    }

    fn set_last_known_weight(&self, grams: f64) {
        let snapshot = {
            let mut config = self.config.write();
            config.last_known_weight = grams;
            self.path.as_ref().map(|_| config.clone())
        };

        // Save failures stay local: the write-through itself must not fail.
        if let (Some(path), Some(config)) = (&self.path, snapshot) {
            if let Err(e) = config.save_to_file(path) {
                tracing::warn!(path = %path.display(), error = %e, "Failed to persist settings");
            }
        }
    }
}
