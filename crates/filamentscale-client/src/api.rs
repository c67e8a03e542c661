//! Plugin API client
//!
//! Builds and sends the plugin's GET requests. One attempt per call, no
//! retries, no idempotency keys. [`PluginApiClient::dispatch`] is the
//! fire-and-forget form used by the UI's tare/calibrate buttons: transport
//! failures reach the caller only through an optional error callback.

use crate::command::ScaleCommand;
use filamentscale_core::{Error, Result, TransportError};

/// Fixed endpoint path on the plugin host.
pub const PLUGIN_API_PATH: &str = "/api/plugin/filament_scale";

/// Callback receiving the raw response body on success.
pub type ResponseCallback = Box<dyn FnOnce(String) + Send>;

/// Callback receiving the transport error on failure.
pub type ErrorCallback = Box<dyn FnOnce(Error) + Send>;

/// Client for the scale plugin's HTTP API
#[derive(Clone)]
pub struct PluginApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl PluginApiClient {
    /// Create a client for the plugin host at `base_url`
    /// (e.g. `http://octopi.local:5000`).
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// The full GET URL for a command.
    pub fn command_url(&self, command: ScaleCommand, value: f64) -> String {
        format!(
            "{}{}?command={}&value={}",
            self.base_url, PLUGIN_API_PATH, command, value
        )
    }

    /// Send a command and return the raw response body.
    ///
    /// Success means any 2xx status; there is no response schema beyond
    /// plain text.
    pub async fn send_command(&self, command: ScaleCommand, value: f64) -> Result<String> {
        let url = self.command_url(command, value);
        tracing::debug!(%url, "Sending plugin command");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| TransportError::RequestFailed {
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::ErrorStatus {
                status: status.as_u16(),
            }
            .into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::BadBody {
                reason: e.to_string(),
            })?;

        tracing::debug!(command = %command, body = %body, "Plugin command complete");
        Ok(body)
    }

    /// Send a command without waiting for the outcome.
    ///
    /// The success callback gets the raw body; the error callback gets the
    /// transport error. Either may be omitted, in which case a failure is
    /// only logged.
    pub fn dispatch(
        &self,
        command: ScaleCommand,
        value: f64,
        on_success: Option<ResponseCallback>,
        on_error: Option<ErrorCallback>,
    ) {
        let client = self.clone();
        tokio::spawn(async move {
            match client.send_command(command, value).await {
                Ok(body) => {
                    if let Some(callback) = on_success {
                        callback(body);
                    }
                }
                Err(e) => {
                    tracing::warn!(command = %command, error = %e, "Plugin command failed");
                    if let Some(callback) = on_error {
                        callback(e);
                    }
                }
            }
        });
    }
}

impl std::fmt::Debug for PluginApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PluginApiClient")
            .field("base_url", &self.base_url)
            .finish()
    }
}
