//! FilamentScale Settings Crate
//!
//! Handles the scale configuration, its file persistence, and the shared
//! read/write settings handle the adapter consumes.

pub mod config;
pub mod error;
pub mod store;

pub use config::ScaleConfig;
pub use error::{SettingsError, SettingsResult};
pub use store::{SettingsStore, SharedSettings};
