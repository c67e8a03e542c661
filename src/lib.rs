//! # FilamentScale
//!
//! Host-side companion for the `filament_scale` printer plugin:
//! - Live filament-remaining readout derived from pushed scale readings
//! - Tare and calibrate maintenance commands over the plugin HTTP API
//!
//! ## Architecture
//!
//! FilamentScale is organized as a workspace with multiple crates:
//!
//! 1. **filamentscale-core** - Readings, display derivation, plugin messages
//! 2. **filamentscale-settings** - Scale configuration and persistence
//! 3. **filamentscale-client** - Plugin API HTTP client
//! 4. **filamentscale-ui** - The weight display view-model and its UI seams
//! 5. **filamentscale** - Monitor binary that integrates all crates

pub use filamentscale_client::{PluginApiClient, ScaleCommand};
pub use filamentscale_core::{
    Error, MessageDispatcher, PluginMessage, Reading, ReadingError, Result, TransportError,
    FAULT_DISPLAY, PLUGIN_CHANNEL,
};
pub use filamentscale_settings::{ScaleConfig, SettingsStore, SharedSettings};
pub use filamentscale_ui::{
    DisplaySink, SharedDisplay, StatusPanel, StatusPanelModel, WeightDisplayAdapter,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output and RUST_LOG environment
/// variable support.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
