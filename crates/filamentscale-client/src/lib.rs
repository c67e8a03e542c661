//! FilamentScale Client Crate
//!
//! Talks to the `filament_scale` plugin's simple HTTP API. Every operation
//! is a single GET against one fixed endpoint, parameterized by command and
//! value; the response body is plain text.

pub mod api;
pub mod command;

pub use api::{ErrorCallback, PluginApiClient, ResponseCallback, PLUGIN_API_PATH};
pub use command::ScaleCommand;
