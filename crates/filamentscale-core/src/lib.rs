//! # FilamentScale Core
//!
//! Core types for the filament scale companion.
//! Provides raw-reading parsing, the net-weight display derivation,
//! and the plugin push-message channel.

pub mod error;
pub mod message;
pub mod reading;

pub use error::{Error, ReadingError, Result, TransportError};
pub use message::{MessageDispatcher, PluginMessage, PLUGIN_CHANNEL};
pub use reading::{Reading, FAULT_DISPLAY, UNIT_SUFFIX};
