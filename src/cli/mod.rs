pub mod types;
pub mod commands;
pub mod logging;

use std::process::ExitCode;

use clap::Parser;
use log::error;

use types::{Cli, Commands};

/// Run the command-line interface
pub fn run() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging system
    logging::init_logging(cli.debug, cli.quiet);

    // Configure backtrace
    logging::configure_backtrace(cli.trace);

    let result = match &cli.command {
        Some(Commands::Render { input, output }) => {
            commands::handle_render_command(&cli, input.as_deref(), output.as_deref())
        }
        Some(Commands::Headings { input, json }) => {
            commands::handle_headings_command(input.as_deref(), *json)
        }
        Some(Commands::Build { source, destination }) => {
            commands::handle_build_command(&cli, source.as_deref(), destination.as_deref())
        }
        Some(Commands::Clean { destination }) => {
            commands::handle_clean_command(&cli, destination.as_deref())
        }
        // Default to filtering stdin to stdout
        None => commands::handle_render_command(&cli, None, None),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
