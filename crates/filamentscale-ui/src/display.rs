//! Observable display binding
//!
//! The adapter writes the derived display string through [`DisplaySink`];
//! the rendering layer decides how and when to re-render. [`SharedDisplay`]
//! is the plain in-process binding used by the monitor and the tests.

use parking_lot::RwLock;
use std::sync::Arc;

/// Display value shown before the first reading arrives.
pub const INITIAL_DISPLAY: &str = "Loading...";

/// Write surface for the filament-remaining display value.
pub trait DisplaySink: Send + Sync {
    /// Replace the displayed value.
    fn set_value(&self, value: &str);
}

/// Thread-safe display binding holding the current value.
///
/// Cloning yields another handle to the same value.
#[derive(Clone)]
pub struct SharedDisplay {
    value: Arc<RwLock<String>>,
}

impl SharedDisplay {
    /// Create a binding initialized to [`INITIAL_DISPLAY`].
    pub fn new() -> Self {
        Self {
            value: Arc::new(RwLock::new(INITIAL_DISPLAY.to_string())),
        }
    }

    /// The currently displayed value.
    pub fn value(&self) -> String {
        self.value.read().clone()
    }
}

impl Default for SharedDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySink for SharedDisplay {
    fn set_value(&self, value: &str) {
        *self.value.write() = value.to_string();
    }
}
