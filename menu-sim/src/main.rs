//! Menu Sim - Context menu scenario runner
//!
//! Loads a JSON scenario, drives a context menu through its events, and
//! prints the resulting session phase and placement after each event as
//! one JSON line.
//!
//! Usage: `menu-sim <scenario.json>`; set `RUST_LOG=debug` to trace
//! session transitions.

mod scenario;

use anyhow::{bail, Result};
use scenario::Scenario;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let Some(path) = std::env::args_os().nth(1).map(PathBuf::from) else {
        bail!("usage: menu-sim <scenario.json>");
    };

    tracing::info!("Running scenario {}", path.display());
    let scenario = Scenario::load(&path)?;
    let reports = scenario.run()?;

    for report in &reports {
        println!("{}", serde_json::to_string(report)?);
    }
    tracing::info!("Scenario finished after {} events", reports.len());
    Ok(())
}
