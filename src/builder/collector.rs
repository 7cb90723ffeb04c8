use std::path::{Path, PathBuf};

use glob::Pattern;
use log::{debug, warn};
use walkdir::WalkDir;

use crate::builder::types::Document;
use crate::config::Config;
use crate::utils::error::{BoxResult, TocError};
use crate::utils::path::{has_any_extension, make_relative, resolve_path, to_slash};

/// Collect every document under the source directory that should get a TOC
pub fn collect_documents(config: &Config) -> BoxResult<Vec<Document>> {
    let source = &config.source;
    if !source.is_dir() {
        return Err(TocError::Config(format!(
            "Source directory does not exist: {}", source.display()
        )).into());
    }

    debug!("Collecting documents from {}", source.display());

    let patterns = config
        .exclude
        .iter()
        .map(|p| Pattern::new(p))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| TocError::Config(format!("Invalid exclude pattern: {}", e)))?;

    let exclusions = Exclusions {
        source: source.as_path(),
        source_root: resolve_path(source),
        destination_root: resolve_path(&config.destination),
        patterns,
    };

    let walker = WalkDir::new(source)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| !exclusions.is_excluded(e.path()));

    let mut documents = Vec::new();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry: {}", e);
                continue;
            }
        };

        let path = entry.path();
        if !entry.file_type().is_file() || !has_any_extension(path, &config.extensions) {
            continue;
        }

        let relative_path = match make_relative(path, source) {
            Some(relative) => relative,
            None => continue,
        };

        documents.push(Document {
            path: path.to_path_buf(),
            output_path: config.destination.join(&relative_path),
            relative_path,
        });
    }

    debug!("Found {} documents", documents.len());
    Ok(documents)
}

/// Paths skipped while walking the source
struct Exclusions<'a> {
    source: &'a Path,
    source_root: PathBuf,
    destination_root: PathBuf,
    patterns: Vec<Pattern>,
}

impl Exclusions<'_> {
    /// Check if a path lies in the destination or matches an exclude pattern
    fn is_excluded(&self, path: &Path) -> bool {
        let relative = match make_relative(path, self.source) {
            Some(relative) => relative,
            None => return false,
        };

        // Compare resolved paths so `./out`, `$PWD/out` and `site/../out` agree
        if self.source_root.join(&relative).starts_with(&self.destination_root) {
            return true;
        }

        let relative = to_slash(&relative);
        !relative.is_empty() && self.patterns.iter().any(|p| p.matches(&relative))
    }
}
