use std::path::Path;

use log::info;

use crate::builder;
use crate::cli::commands::load_settings;
use crate::cli::types::Cli;
use crate::utils::error::BoxResult;

/// Handle the clean command
pub fn handle_clean_command(cli: &Cli, destination: Option<&Path>) -> BoxResult<()> {
    let mut config = load_settings(cli)?;
    if let Some(destination) = destination {
        config.destination = destination.to_path_buf();
    }

    info!("Cleaning {}", config.destination.display());
    builder::clean_destination(&config)?;
    info!("Cleaned successfully");

    Ok(())
}
