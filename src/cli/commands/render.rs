use std::path::Path;

use log::debug;

use crate::cli::commands::{create_renderer, load_settings};
use crate::cli::types::Cli;
use crate::toc::build_toc;
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Handle the render command
pub fn handle_render_command(cli: &Cli, input: Option<&Path>, output: Option<&Path>) -> BoxResult<()> {
    let config = load_settings(cli)?;
    let renderer = create_renderer(&config)?;

    let content = fs::read_input(input)?;
    let rendered = build_toc(&content, &renderer);

    debug!(
        "Rendered {} bytes into {} bytes",
        content.len(),
        rendered.len()
    );

    fs::write_output(output, &rendered)
}
