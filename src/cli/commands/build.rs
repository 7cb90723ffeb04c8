use std::path::Path;

use log::{info, warn};

use crate::builder;
use crate::cli::commands::{create_renderer, load_settings};
use crate::cli::types::Cli;
use crate::config::validate_build_config;
use crate::utils::error::{BoxResult, TocError};

/// Handle the build command
pub fn handle_build_command(cli: &Cli, source: Option<&Path>, destination: Option<&Path>) -> BoxResult<()> {
    let mut config = load_settings(cli)?;

    // Command line paths take precedence over the configuration files
    if let Some(source) = source {
        config.source = source.to_path_buf();
    }
    if let Some(destination) = destination {
        config.destination = destination.to_path_buf();
    }
    validate_build_config(&config)?;

    let renderer = create_renderer(&config)?;

    info!("Building into {}...", config.destination.display());
    let report = builder::build_site(&config, &renderer)?;

    info!(
        "Processed {} documents ({} with a table of contents)",
        report.processed, report.with_toc
    );

    if report.failed > 0 {
        warn!("{} documents failed", report.failed);
        return Err(TocError::File(format!("{} documents could not be processed", report.failed)).into());
    }

    Ok(())
}
