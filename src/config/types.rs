use std::path::PathBuf;
use serde::{Serialize, Deserialize};

use crate::config::defaults;
use crate::toc::TocOptions;

/// Tool configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory scanned by `build`
    #[serde(default = "defaults::default_source")]
    pub source: PathBuf,

    /// Directory `build` writes to
    #[serde(default = "defaults::default_destination")]
    pub destination: PathBuf,

    /// Directory holding translation catalogs
    #[serde(default = "defaults::default_languages_dir")]
    pub languages_dir: PathBuf,

    /// Locale for the caption; the environment decides when unset
    #[serde(default)]
    pub locale: Option<String>,

    /// HTML-escape heading text in TOC link labels
    #[serde(default = "defaults::default_escape_labels")]
    pub escape_labels: bool,

    /// Extensions of documents processed by `build`
    #[serde(default = "defaults::default_extensions")]
    pub extensions: Vec<String>,

    /// Glob patterns (relative to the source) skipped by `build`
    #[serde(default = "defaults::default_exclude")]
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source: defaults::default_source(),
            destination: defaults::default_destination(),
            languages_dir: defaults::default_languages_dir(),
            locale: None,
            escape_labels: defaults::default_escape_labels(),
            extensions: defaults::default_extensions(),
            exclude: defaults::default_exclude(),
        }
    }
}

impl Config {
    /// Rendering options derived from this configuration
    pub fn toc_options(&self) -> TocOptions {
        TocOptions {
            escape_labels: self.escape_labels,
        }
    }
}
