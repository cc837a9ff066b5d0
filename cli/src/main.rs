mod config;
mod logging;
mod tui;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::config::{Cli, Config};

fn main() -> Result<()> {
    let config = Config::from(Cli::parse());

    if let Some(path) = &config.log_file {
        logging::init(path)?;
    }
    info!(locale = %config.locale, seeded = config.seed_tasks.len(), "tasklist starting");

    tui::run(&config)?;

    info!("tasklist exiting");
    Ok(())
}
