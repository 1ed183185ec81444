//! GymTrack - Gym Member and Workout Records
//!
//! Main entry point: opens the record files and runs the text menu on the
//! terminal.

use std::io;

use anyhow::Context;
use gymtrack::menu::Menu;
use gymtrack::storage::config;
use gymtrack::Gym;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so they never interleave with the menu on stdout
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    tracing::info!("Starting GymTrack v{}", env!("CARGO_PKG_VERSION"));

    let config = config::load_config().context("Failed to load configuration")?;
    tracing::debug!(data_dir = %config.data_dir.display(), "Configuration loaded");

    let mut gym = Gym::open(&config);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut menu = Menu::new(
        &mut gym,
        stdin.lock(),
        stdout.lock(),
        config.members.default_membership_type.clone(),
    );
    menu.run().context("Terminal I/O failed")?;

    tracing::info!("GymTrack stopped");
    Ok(())
}
