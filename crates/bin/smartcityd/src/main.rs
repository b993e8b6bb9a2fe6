//! # smartcityd — smart city demonstration
//!
//! Composition root that wires the virtual devices into the city controller
//! and runs the demonstration.
//!
//! ## Responsibilities
//! - Load configuration (`smartcity.toml`, env vars)
//! - Initialise `tracing` (logs go to stderr, narration to stdout)
//! - Create the process-wide controller with the configured lighting family
//! - Run the demonstration script and render its narration
//!
//! ## Dependency rule
//! This is the **only** crate that depends on all other crates.
//! It is the wiring layer — no domain logic belongs here.

mod city;
mod config;
mod demo;

use anyhow::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::config::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    init_tracing(&config.logging.filter);

    let family = config.lighting_family()?;
    let script = demo::Script::from_config(&config);
    tracing::info!(%family, format = %config.output.format, "starting smart city demonstration");

    city::init(family);
    let outputs = demo::run(city::controller, &script);

    let mut stdout = std::io::stdout().lock();
    demo::render(&outputs, config.output.format, &mut stdout)
        .context("failed to write narration")?;

    Ok(())
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).with_target(true))
        .init();
}
