//! Command-line monitor for the filament scale plugin.
//!
//! Stands in for the host UI's push loop: polls the plugin for the current
//! weight, republishes each reading on the message dispatcher, and prints
//! the derived filament-remaining line whenever it changes. The `tare` and
//! `calibrate` subcommands issue the two maintenance commands directly.

use anyhow::Context;
use clap::{Parser, Subcommand};
use filamentscale::{
    init_logging, MessageDispatcher, PluginApiClient, PluginMessage, ScaleCommand, ScaleConfig,
    SharedDisplay, SharedSettings, WeightDisplayAdapter, BUILD_DATE, VERSION,
};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "filamentscale", version = VERSION, about = "Filament scale companion")]
struct Cli {
    /// Base URL of the plugin host
    #[arg(long, default_value = "http://localhost:5000")]
    host: String,

    /// Config file path (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Poll the scale and print the filament-remaining readout (default)
    Monitor,
    /// Zero out the scale's reference point
    Tare,
    /// Calibrate the scale against a known reference weight
    Calibrate {
        /// Reference weight in grams, must be positive
        grams: f64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging()?;
    tracing::info!(version = VERSION, build = BUILD_DATE, "Starting filamentscale");

    let cli = Cli::parse();

    let config_path = match cli.config {
        Some(path) => path,
        None => ScaleConfig::default_path().context("Cannot resolve config directory")?,
    };
    let settings = SharedSettings::load_or_default(config_path);
    let client = PluginApiClient::new(&cli.host);

    match cli.command.unwrap_or(Command::Monitor) {
        Command::Tare => {
            let offset = client.send_command(ScaleCommand::Tare, 0.0).await?;
            println!("Tare complete, new offset: {}", offset);
        }
        Command::Calibrate { grams } => {
            anyhow::ensure!(grams > 0.0, "Calibration weight must be greater than zero");
            let cal_factor = client.send_command(ScaleCommand::Calibrate, grams).await?;
            println!("Calibration complete, new cal_factor: {}", cal_factor);
        }
        Command::Monitor => monitor(settings, client).await?,
    }

    Ok(())
}

/// Poll the plugin and feed readings through the dispatcher, mirroring the
/// push channel a hosting UI would provide.
async fn monitor(settings: SharedSettings, client: PluginApiClient) -> anyhow::Result<()> {
    let update_delay = settings.snapshot().update_delay;
    let display = SharedDisplay::new();
    let dispatcher = MessageDispatcher::default_with_buffer();

    let adapter = Arc::new(
        WeightDisplayAdapter::new(Arc::new(settings), Arc::new(display.clone()))
            .with_client(client.clone()),
    );
    adapter.on_startup();
    tokio::spawn(adapter.run(dispatcher.subscribe()));

    let mut interval = tokio::time::interval(Duration::from_secs_f64(update_delay));
    let mut last_printed = String::new();

    loop {
        interval.tick().await;

        match client.send_command(ScaleCommand::Weight, 0.0).await {
            Ok(body) => {
                if dispatcher.publish(PluginMessage::reading(body)).is_err() {
                    anyhow::bail!("Display task stopped");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Weight poll failed");
                continue;
            }
        }

        // Give the display task a beat to process the reading.
        tokio::time::sleep(Duration::from_millis(50)).await;

        let value = display.value();
        if value != last_printed {
            println!("Filament remaining: {}", value);
            last_printed = value;
        }
    }
}
