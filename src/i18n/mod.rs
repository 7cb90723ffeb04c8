//! Caption translation, loaded per text domain and locale

mod catalog;
mod locale;

use std::collections::HashMap;
use std::path::Path;

use log::{debug, info};

pub use catalog::{find_catalog_file, load_catalog_file, Catalog};
pub use locale::{fallback_chain, normalize_locale, resolve_locale};

use crate::utils::error::BoxResult;

/// Looks up translated strings by text domain
#[derive(Debug, Clone, Default)]
pub struct Translator {
    domains: HashMap<String, Catalog>,
}

impl Translator {
    /// Translator with a single in-memory domain
    pub fn from_messages(domain: &str, messages: HashMap<String, String>) -> Self {
        let mut translator = Self::default();
        translator.add_catalog(domain, Catalog::new(messages));
        translator
    }

    pub fn add_catalog(&mut self, domain: &str, catalog: Catalog) {
        self.domains.insert(domain.to_string(), catalog);
    }

    /// Load the catalog of `domain` for `locale` from `languages_dir`.
    ///
    /// A missing directory or catalog is not an error: the domain simply
    /// stays untranslated.
    pub fn load_domain(&mut self, languages_dir: &Path, domain: &str, locale: Option<&str>) -> BoxResult<()> {
        let locale = match locale {
            Some(locale) => locale,
            None => {
                debug!("No locale set, '{}' stays untranslated", domain);
                return Ok(());
            }
        };

        if !languages_dir.is_dir() {
            debug!("Languages directory {} not found", languages_dir.display());
            return Ok(());
        }

        for candidate in fallback_chain(locale) {
            if let Some(path) = find_catalog_file(languages_dir, domain, &candidate) {
                let catalog = load_catalog_file(&path)?;
                info!("Loaded {} translations for '{}' ({})", catalog.len(), domain, candidate);
                self.add_catalog(domain, catalog);
                return Ok(());
            }
        }

        debug!("No '{}' catalog for locale {} in {}", domain, locale, languages_dir.display());
        Ok(())
    }

    /// Translate `msgid`, falling back to the untranslated string
    pub fn translate<'a>(&'a self, domain: &str, msgid: &'a str) -> &'a str {
        self.domains
            .get(domain)
            .and_then(|catalog| catalog.get(msgid))
            .unwrap_or(msgid)
    }
}
