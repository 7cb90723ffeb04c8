use log::warn;

use crate::config::Config;
use crate::utils::error::{BoxResult, TocError};
use crate::utils::path::resolve_path;

/// Validate the settings every command uses
pub fn validate_config(config: &Config) -> BoxResult<()> {
    validate_locale(config);

    Ok(())
}

/// Validate the settings only `build` and `clean` use
pub fn validate_build_config(config: &Config) -> BoxResult<()> {
    validate_config(config)?;
    validate_extensions(config)?;
    validate_exclude_patterns(config)?;
    validate_destination(config)?;

    Ok(())
}

/// At least one document extension is required
fn validate_extensions(config: &Config) -> BoxResult<()> {
    if config.extensions.iter().all(|ext| ext.trim_start_matches('.').is_empty()) {
        return Err(TocError::Config(
            "At least one document extension must be configured".to_string()
        ).into());
    }

    Ok(())
}

/// Every exclude entry must be a valid glob pattern
fn validate_exclude_patterns(config: &Config) -> BoxResult<()> {
    for pattern in &config.exclude {
        if let Err(e) = glob::Pattern::new(pattern) {
            return Err(TocError::Config(format!(
                "Invalid exclude pattern '{}': {}", pattern, e
            )).into());
        }
    }

    Ok(())
}

/// The destination is written and removed wholesale, so it must not hold
/// the source or the working directory
fn validate_destination(config: &Config) -> BoxResult<()> {
    let destination = resolve_path(&config.destination);

    if resolve_path(".").starts_with(&destination) {
        return Err(TocError::Config(format!(
            "Destination must not contain the working directory: {}", config.destination.display()
        )).into());
    }

    if resolve_path(&config.source).starts_with(&destination) {
        return Err(TocError::Config(format!(
            "Destination must not contain the source: {}", config.destination.display()
        )).into());
    }

    if config.destination.exists() && !config.destination.is_dir() {
        return Err(TocError::Config(format!(
            "Destination path exists but is not a directory: {}", config.destination.display()
        )).into());
    }

    Ok(())
}

/// Unusual locale names only warn; the caption then stays untranslated
fn validate_locale(config: &Config) {
    if let Some(locale) = &config.locale {
        if crate::i18n::normalize_locale(locale).is_none() {
            warn!("Locale '{}' disables translation", locale);
        }
    }
}
