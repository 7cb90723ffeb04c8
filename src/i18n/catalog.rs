use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::utils::error::{BoxResult, TocError};

/// Catalog file extensions, in lookup order
const CATALOG_EXTENSIONS: [&str; 4] = ["yml", "yaml", "toml", "json"];

/// Translations of one text domain for one locale
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    messages: HashMap<String, String>,
}

impl Catalog {
    pub fn new(messages: HashMap<String, String>) -> Self {
        Self { messages }
    }

    /// Translated string for `msgid`, if a non-empty one exists
    pub fn get(&self, msgid: &str) -> Option<&str> {
        self.messages
            .get(msgid)
            .map(String::as_str)
            .filter(|msgstr| !msgstr.is_empty())
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

/// Find the catalog file for a domain and locale (`{domain}-{locale}.{ext}`)
pub fn find_catalog_file(languages_dir: &Path, domain: &str, locale: &str) -> Option<PathBuf> {
    CATALOG_EXTENSIONS
        .iter()
        .map(|ext| languages_dir.join(format!("{}-{}.{}", domain, locale, ext)))
        .find(|path| path.is_file())
}

/// Load a catalog file, choosing the parser from its extension
pub fn load_catalog_file(path: &Path) -> BoxResult<Catalog> {
    debug!("Loading translations from {}", path.display());

    let content = fs::read_to_string(path).map_err(|e| {
        TocError::Locale(format!(
            "Failed to read translation catalog {}: {}",
            path.display(),
            e
        ))
    })?;

    let ext = path
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let messages: HashMap<String, String> = match ext.as_str() {
        "yml" | "yaml" => serde_yaml::from_str(&content).map_err(|e| parse_error(path, e))?,
        "toml" => toml::from_str(&content).map_err(|e| parse_error(path, e))?,
        "json" => serde_json::from_str(&content).map_err(|e| parse_error(path, e))?,
        other => {
            return Err(TocError::Locale(format!(
                "Unsupported translation catalog format: {}",
                other
            ))
            .into());
        }
    };

    Ok(Catalog::new(messages))
}

fn parse_error<E: std::fmt::Display>(path: &Path, err: E) -> TocError {
    TocError::Locale(format!(
        "Failed to parse translation catalog ({}): {}",
        path.display(),
        err
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_get_ignores_empty_translations() {
        let mut messages = HashMap::new();
        messages.insert("Table of Contents".to_string(), "Inhalt".to_string());
        messages.insert("Untranslated".to_string(), String::new());
        let catalog = Catalog::new(messages);

        assert_eq!(catalog.get("Table of Contents"), Some("Inhalt"));
        assert_eq!(catalog.get("Untranslated"), None);
        assert_eq!(catalog.get("Missing"), None);
    }

    #[test]
    fn test_load_each_format() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.yml"), "\"Table of Contents\": \"תוכן עניינים\"\n").unwrap();
        fs::write(dir.path().join("b.toml"), "\"Table of Contents\" = \"Table des matières\"\n").unwrap();
        fs::write(dir.path().join("c.json"), r#"{"Table of Contents": "Índice"}"#).unwrap();

        let yaml = load_catalog_file(&dir.path().join("a.yml")).unwrap();
        let toml = load_catalog_file(&dir.path().join("b.toml")).unwrap();
        let json = load_catalog_file(&dir.path().join("c.json")).unwrap();

        assert_eq!(yaml.get("Table of Contents"), Some("תוכן עניינים"));
        assert_eq!(toml.get("Table of Contents"), Some("Table des matières"));
        assert_eq!(json.get("Table of Contents"), Some("Índice"));
    }

    #[test]
    fn test_malformed_catalog_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("page-toc-de.json");
        fs::write(&path, "{ not json").unwrap();

        let err = load_catalog_file(&path).unwrap_err();
        assert!(err.to_string().starts_with("Locale error: Failed to parse translation catalog"));
    }

    #[test]
    fn test_find_catalog_file() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("page-toc-de_DE.toml"), "").unwrap();

        assert_eq!(
            find_catalog_file(dir.path(), "page-toc", "de_DE"),
            Some(dir.path().join("page-toc-de_DE.toml"))
        );
        assert_eq!(find_catalog_file(dir.path(), "page-toc", "fr_FR"), None);
    }
}
