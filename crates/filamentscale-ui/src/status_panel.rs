//! Status-panel augmentation port
//!
//! The host UI may or may not expose a printer-state panel the adapter can
//! extend with a "Filament Remaining" line. The port carries a capability
//! check instead of the adapter probing the environment itself; augmentation
//! is best-effort, never a hard dependency.

use parking_lot::RwLock;
use std::sync::Arc;

/// Label for the injected status line.
pub const FILAMENT_REMAINING_LABEL: &str = "Filament Remaining";

/// Optional port onto the host's printer-state panel.
pub trait StatusPanel: Send + Sync {
    /// Whether the host status element exists.
    fn is_present(&self) -> bool;

    /// Append a labeled line bound to the display value.
    ///
    /// Only called when [`is_present`](StatusPanel::is_present) returned true.
    fn append_line(&self, label: &str);
}

/// In-process panel model for hosts without a real panel widget.
#[derive(Clone)]
pub struct StatusPanelModel {
    present: bool,
    lines: Arc<RwLock<Vec<String>>>,
}

impl StatusPanelModel {
    /// Create a panel model; `present` mirrors whether the host element exists.
    pub fn new(present: bool) -> Self {
        Self {
            present,
            lines: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Lines appended so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines.read().clone()
    }
}

impl StatusPanel for StatusPanelModel {
    fn is_present(&self) -> bool {
        self.present
    }

    fn append_line(&self, label: &str) {
        self.lines.write().push(label.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_model_records_lines() {
        let panel = StatusPanelModel::new(true);
        assert!(panel.is_present());
        assert!(panel.lines().is_empty());

        panel.append_line(FILAMENT_REMAINING_LABEL);
        assert_eq!(panel.lines(), vec!["Filament Remaining".to_string()]);
    }

    #[test]
    fn test_absent_panel() {
        let panel = StatusPanelModel::new(false);
        assert!(!panel.is_present());
    }
}
