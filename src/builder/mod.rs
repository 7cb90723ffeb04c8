pub mod collector;
pub mod processor;
pub mod types;

use log::info;

use crate::config::{validate_build_config, Config};
use crate::toc::TocRenderer;
use crate::utils::error::BoxResult;
use crate::utils::fs;

pub use collector::collect_documents;
pub use processor::{process_document, process_documents};
pub use types::{BuildReport, Document};

/// Add a table of contents to every document of the site
pub fn build_site(config: &Config, renderer: &TocRenderer) -> BoxResult<BuildReport> {
    let documents = collect_documents(config)?;
    info!(
        "Processing {} documents from {}",
        documents.len(),
        config.source.display()
    );

    let report = process_documents(&documents, renderer);
    Ok(report)
}

/// Remove the destination directory, refusing any destination that holds
/// the source or the working directory
pub fn clean_destination(config: &Config) -> BoxResult<()> {
    validate_build_config(config)?;
    fs::remove_directory(&config.destination)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_site(config: &Config) {
        fs::create_dir_all(&config.source).unwrap();
        fs::write(config.source.join("index.html"), "<h2>Intro</h2>").unwrap();
    }

    #[test]
    fn test_build_site() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            source: dir.path().join("site"),
            destination: dir.path().join("public"),
            ..Config::default()
        };
        fs::create_dir_all(config.source.join("posts")).unwrap();
        fs::write(config.source.join("index.html"), "<p>home</p>").unwrap();
        fs::write(
            config.source.join("posts/first.html"),
            "<h2>Setup</h2><p>..</p><h2>Usage</h2>",
        ).unwrap();
        fs::write(config.source.join("notes.txt"), "<h2>ignored</h2>").unwrap();

        let report = build_site(&config, &TocRenderer::default()).unwrap();
        assert_eq!(report, BuildReport { processed: 2, with_toc: 1, failed: 0 });

        let post = fs::read_to_string(config.destination.join("posts/first.html")).unwrap();
        assert!(post.contains("<li><a href='#title_0'>Setup</a></li><li><a href='#title_1'>Usage</a></li>"));
        assert_eq!(
            fs::read_to_string(config.destination.join("index.html")).unwrap(),
            "<p>home</p>"
        );
        assert!(!config.destination.join("notes.txt").exists());
    }

    #[test]
    fn test_rebuild_with_nested_destination() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("site");
        let config = Config {
            destination: source.join("../site/public"),
            source,
            ..Config::default()
        };
        write_site(&config);

        let first = build_site(&config, &TocRenderer::default()).unwrap();
        let second = build_site(&config, &TocRenderer::default()).unwrap();

        assert_eq!(first, BuildReport { processed: 1, with_toc: 1, failed: 0 });
        assert_eq!(second, first);
        assert!(dir.path().join("site/public/index.html").exists());
        assert!(!dir.path().join("site/public/public").exists());
    }

    #[test]
    fn test_clean_removes_destination() {
        let dir = TempDir::new().unwrap();
        let config = Config {
            source: dir.path().join("site"),
            destination: dir.path().join("public"),
            ..Config::default()
        };
        write_site(&config);
        build_site(&config, &TocRenderer::default()).unwrap();

        clean_destination(&config).unwrap();
        assert!(!config.destination.exists());
        assert!(config.source.join("index.html").exists());
    }

    #[test]
    fn test_clean_refuses_source_as_destination() {
        let dir = TempDir::new().unwrap();
        let source = dir.path().join("site");
        let config = Config {
            destination: source.clone(),
            source: source.clone(),
            ..Config::default()
        };
        write_site(&config);

        assert!(clean_destination(&config).is_err());
        assert!(source.join("index.html").exists());

        let config = Config { destination: dir.path().to_path_buf(), ..config };
        assert!(clean_destination(&config).is_err());
        assert!(source.join("index.html").exists());
    }
}
