use std::path::{Path, PathBuf};
use std::fs;
use log::debug;
use serde_json::{Map, Value};

use crate::config::types::Config;
use crate::config::validation;
use crate::utils::error::{BoxResult, TocError};

/// Configuration file names to look for
const CONFIG_FILES: [&str; 4] = ["_config.yml", "_config.yaml", "_config.toml", "_config.json"];

/// Load configuration from config files.
///
/// Explicit files are applied in order, later ones overriding earlier ones
/// key by key. Without explicit files, the default file names are looked up
/// in `base_dir`.
pub fn load_config<P: AsRef<Path>>(
    base_dir: P,
    config_files: Option<Vec<PathBuf>>
) -> BoxResult<Config> {
    let config_paths = match config_files {
        Some(paths) if !paths.is_empty() => paths,
        _ => find_default_config_files(&base_dir),
    };

    if config_paths.is_empty() {
        debug!("No configuration files found, using defaults");
    }

    let mut settings = Map::new();
    for path in config_paths {
        debug!("Loading configuration from {}", path.display());
        merge_config_file(&mut settings, &path)?;
    }

    // Keys no file sets fall back to their serde defaults
    let config: Config = serde_json::from_value(Value::Object(settings))
        .map_err(|e| TocError::Config(format!("Invalid configuration: {}", e)))?;

    validation::validate_config(&config)?;

    debug!("Configuration loaded: {:?}", config);
    Ok(config)
}

/// Find default configuration files
fn find_default_config_files<P: AsRef<Path>>(base_dir: P) -> Vec<PathBuf> {
    CONFIG_FILES
        .iter()
        .map(|name| base_dir.as_ref().join(name))
        .filter(|path| path.exists())
        .collect()
}

/// Merge the keys of a configuration file over the settings read so far
fn merge_config_file(settings: &mut Map<String, Value>, config_path: &Path) -> BoxResult<()> {
    if !config_path.exists() {
        return Err(TocError::Config(format!(
            "Configuration file not found: {}", config_path.display()
        )).into());
    }

    let content = fs::read_to_string(config_path)
        .map_err(|e| TocError::Config(format!(
            "Failed to read configuration file {}: {}", config_path.display(), e
        )))?;

    let values = match parse_config(&content, config_path)? {
        Value::Null => return Ok(()),
        Value::Object(values) => values,
        _ => {
            return Err(TocError::Config(format!(
                "Configuration file {} must contain a mapping", config_path.display()
            )).into());
        }
    };

    // Report type errors against the file that caused them
    serde_json::from_value::<Config>(Value::Object(values.clone()))
        .map_err(|e| TocError::Config(format!(
            "Invalid configuration in {}: {}", config_path.display(), e
        )))?;

    settings.extend(values);
    Ok(())
}

/// Parse configuration text, choosing the format from the file extension
fn parse_config(content: &str, path: &Path) -> BoxResult<Value> {
    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        // Assume YAML if no extension
        .unwrap_or_else(|| "yml".to_string());

    match ext.as_str() {
        "yml" | "yaml" => parse_yaml_config(content, path),
        "toml" => parse_toml_config(content, path),
        "json" => parse_json_config(content, path),
        other => Err(TocError::Config(format!(
            "Unsupported configuration file format: {}", other
        )).into()),
    }
}

/// Parse a YAML configuration file
fn parse_yaml_config(content: &str, path: &Path) -> BoxResult<Value> {
    // An empty YAML document has no keys to merge
    if content.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_yaml::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse YAML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a TOML configuration file
fn parse_toml_config(content: &str, path: &Path) -> BoxResult<Value> {
    toml::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse TOML configuration ({}): {}", path.display(), e
        )).into())
}

/// Parse a JSON configuration file
fn parse_json_config(content: &str, path: &Path) -> BoxResult<Value> {
    serde_json::from_str(content)
        .map_err(|e| TocError::Config(format!(
            "Failed to parse JSON configuration ({}): {}", path.display(), e
        )).into())
}
