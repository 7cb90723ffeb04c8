mod build;
mod clean;
mod headings;
mod render;

pub use build::handle_build_command;
pub use clean::handle_clean_command;
pub use headings::handle_headings_command;
pub use render::handle_render_command;

use std::path::PathBuf;

use crate::cli::types::Cli;
use crate::config::{self, Config};
use crate::i18n::{resolve_locale, Translator};
use crate::toc::{TocRenderer, TEXT_DOMAIN};
use crate::utils::error::BoxResult;

/// Load the configuration and apply the global command line overrides
pub(crate) fn load_settings(cli: &Cli) -> BoxResult<Config> {
    let config_files = if cli.config.is_empty() {
        None
    } else {
        Some(cli.config.clone())
    };

    let mut config = config::load_config(PathBuf::from("."), config_files)?;

    if let Some(locale) = &cli.locale {
        config.locale = Some(locale.clone());
    }

    if cli.escape_labels {
        config.escape_labels = true;
    }

    Ok(config)
}

/// Create the renderer, with the caption translated for the resolved locale
pub(crate) fn create_renderer(config: &Config) -> BoxResult<TocRenderer> {
    let locale = resolve_locale(config.locale.as_deref());

    let mut translator = Translator::default();
    translator.load_domain(&config.languages_dir, TEXT_DOMAIN, locale.as_deref())?;

    Ok(TocRenderer::new(&translator, &config.toc_options()))
}
