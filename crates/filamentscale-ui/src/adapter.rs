//! Weight display view-model
//!
//! Receives pushed scale readings, derives the filament-remaining display
//! string, and forwards the two maintenance commands to the plugin API.
//! All collaborators are injected: the settings surface, the display
//! binding, the API client, and the optional status-panel port.

use filamentscale_client::{PluginApiClient, ScaleCommand};
use filamentscale_core::{PluginMessage, Reading, PLUGIN_CHANNEL};
use filamentscale_settings::SettingsStore;
use parking_lot::Mutex;
use std::sync::Arc;
use tokio::sync::broadcast;

use crate::display::DisplaySink;
use crate::status_panel::{StatusPanel, FILAMENT_REMAINING_LABEL};

/// Adapter-owned state for the calibrate workflow.
#[derive(Debug, Clone, Default)]
pub struct CalibrationState {
    /// Last raw reading, in whole grams. `None` until a numeric reading arrives.
    pub last_raw_weight: Option<i64>,
    /// User-entered reference weight for the next calibrate command.
    pub known_weight: f64,
}

/// Snapshot emitted when a reading cannot be interpreted.
///
/// Purely observational: nothing acts on it beyond logging.
#[derive(Debug, Clone, PartialEq)]
pub struct FaultDiagnostic {
    /// Configured sensor offset at the time of the fault.
    pub offset: f64,
    /// Configured calibration factor.
    pub cal_factor: f64,
    /// The raw message as received.
    pub message: String,
    /// Last known-weight input from the calibrate workflow.
    pub known_weight: f64,
    /// Configured spool weight.
    pub spool_weight: f64,
}

/// Hook invoked with the diagnostic record on every calibration fault.
pub type FaultHook = Box<dyn Fn(&FaultDiagnostic) + Send + Sync>;

/// View-model turning raw scale readings into the filament-remaining display
pub struct WeightDisplayAdapter {
    /// Source identifier this adapter listens on.
    channel: String,
    settings: Arc<dyn SettingsStore>,
    display: Arc<dyn DisplaySink>,
    client: Option<PluginApiClient>,
    panel: Option<Arc<dyn StatusPanel>>,
    state: Mutex<CalibrationState>,
    fault_hook: Option<FaultHook>,
}

impl WeightDisplayAdapter {
    /// Create an adapter over the given settings surface and display binding.
    ///
    /// Listens on the scale plugin's own channel; commands are disabled
    /// until a client is attached with [`with_client`](Self::with_client).
    pub fn new(settings: Arc<dyn SettingsStore>, display: Arc<dyn DisplaySink>) -> Self {
        Self {
            channel: PLUGIN_CHANNEL.to_string(),
            settings,
            display,
            client: None,
            panel: None,
            state: Mutex::new(CalibrationState::default()),
            fault_hook: None,
        }
    }

    /// Attach the plugin API client used by tare/calibrate.
    pub fn with_client(mut self, client: PluginApiClient) -> Self {
        self.client = Some(client);
        self
    }

    /// Attach the optional status-panel augmentation port.
    pub fn with_status_panel(mut self, panel: Arc<dyn StatusPanel>) -> Self {
        self.panel = Some(panel);
        self
    }

    /// Listen on a different source identifier.
    pub fn with_channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = channel.into();
        self
    }

    /// Attach a hook receiving the diagnostic record on calibration faults.
    pub fn with_fault_hook(mut self, hook: FaultHook) -> Self {
        self.fault_hook = Some(hook);
        self
    }

    /// Handle one pushed plugin message.
    ///
    /// Messages from other channels are discarded without side effects.
    /// Every outcome for this adapter's channel is terminal and visible only
    /// through the display binding; nothing is returned to the caller.
    pub fn on_plugin_message(&self, plugin: &str, payload: &str) {
        if plugin != self.channel {
            tracing::trace!(plugin, "Ignoring message from other channel");
            return;
        }

        let reading = Reading::parse(payload);
        let spool_weight = self.settings.spool_weight();

        match &reading {
            Reading::Grams(grams) => {
                self.state.lock().last_raw_weight = Some(*grams);

                let net = *grams as f64 - spool_weight;
                self.settings.set_last_known_weight(net);
                self.display.set_value(&reading.display(spool_weight));
            }
            Reading::Fault(raw) => {
                let diagnostic = FaultDiagnostic {
                    offset: self.settings.offset(),
                    cal_factor: self.settings.cal_factor(),
                    message: raw.clone(),
                    known_weight: self.state.lock().known_weight,
                    spool_weight,
                };
                tracing::warn!(
                    offset = diagnostic.offset,
                    cal_factor = diagnostic.cal_factor,
                    message = %diagnostic.message,
                    known_weight = diagnostic.known_weight,
                    spool_weight = diagnostic.spool_weight,
                    "Calibration fault"
                );
                if let Some(hook) = &self.fault_hook {
                    hook(&diagnostic);
                }
                self.display.set_value(&reading.display(spool_weight));
            }
        }
    }

    /// One-time startup augmentation of the host status panel.
    ///
    /// No-op when no panel port was injected or the host element is absent.
    pub fn on_startup(&self) {
        let Some(panel) = &self.panel else {
            return;
        };
        if panel.is_present() {
            panel.append_line(FILAMENT_REMAINING_LABEL);
            tracing::debug!("Appended filament remaining line to status panel");
        } else {
            tracing::debug!("Status panel absent, skipping augmentation");
        }
    }

    /// Record the user-entered reference weight for the calibrate workflow.
    pub fn set_known_weight(&self, grams: f64) {
        self.state.lock().known_weight = grams;
    }

    /// Current calibration-workflow state.
    pub fn calibration_state(&self) -> CalibrationState {
        self.state.lock().clone()
    }

    /// Send a fire-and-forget tare command.
    ///
    /// Updates no UI state; a transport failure is logged, not surfaced.
    pub fn tare(&self) {
        match &self.client {
            Some(client) => client.dispatch(ScaleCommand::Tare, 0.0, None, None),
            None => tracing::debug!("No API client attached, tare ignored"),
        }
    }

    /// Send a fire-and-forget calibrate command with the stored known weight.
    pub fn calibrate(&self) {
        let known_weight = self.state.lock().known_weight;
        match &self.client {
            Some(client) => client.dispatch(ScaleCommand::Calibrate, known_weight, None, None),
            None => tracing::debug!("No API client attached, calibrate ignored"),
        }
    }

    /// Consume messages from a dispatcher subscription until it closes.
    pub async fn run(self: Arc<Self>, mut rx: broadcast::Receiver<PluginMessage>) {
        loop {
            match rx.recv().await {
                Ok(message) => self.on_plugin_message(&message.plugin, &message.payload),
                Err(broadcast::error::RecvError::Lagged(dropped)) => {
                    tracing::warn!(dropped, "Display fell behind the message bus");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    }
}

impl std::fmt::Debug for WeightDisplayAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WeightDisplayAdapter")
            .field("channel", &self.channel)
            .field("has_client", &self.client.is_some())
            .field("has_panel", &self.panel.is_some())
            .field("state", &self.state.lock().clone())
            .finish()
    }
}
