//! # thermodisplayd — thermocouple display daemon
//!
//! Composition root that wires the hardware adapters to the monitor loop.
//!
//! ## Responsibilities
//! - Load configuration (config file, env vars)
//! - Initialise logging to stderr
//! - Open the MAX31855 on SPI and the SSD1306 on I2C
//! - Run the monitor until Ctrl+C, then blank the panel and exit
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod config;
mod console;
mod hardware;

use std::future::Future;

use anyhow::Context;
use thermodisplay_app::monitor::Monitor;
use thermodisplay_app::ports::SystemClock;
use tokio::signal::unix::{SignalKind, signal};
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::console::StdoutConsole;

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().context("unable to load configuration")?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.logging.filter))
        .with_writer(std::io::stderr)
        .init();

    let shutdown = shutdown_signal().context("unable to listen for SIGINT")?;

    // Hardware
    let sensor = hardware::open_sensor(&config.sensor)?;
    let panel = hardware::open_panel(&config.display)?;

    let mut monitor = Monitor::new(sensor, panel, StdoutConsole, SystemClock)
        .with_interval(config.interval());

    monitor
        .run(shutdown)
        .await
        .context("display loop stopped")?;

    Ok(())
}

/// Install the SIGINT handler right away and return a future that resolves
/// on the first interrupt.
///
/// From here on SIGINT no longer terminates the process, even before the
/// returned future is first polled.
fn shutdown_signal() -> std::io::Result<impl Future<Output = ()>> {
    let mut interrupt = signal(SignalKind::interrupt())?;
    Ok(async move {
        interrupt.recv().await;
        tracing::info!("interrupt received");
    })
}
