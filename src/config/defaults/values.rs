use std::path::PathBuf;

/// Default source directory
pub fn default_source() -> PathBuf {
    PathBuf::from(".")
}

/// Default destination directory
pub fn default_destination() -> PathBuf {
    PathBuf::from("_site")
}

/// Default directory holding translation catalogs
pub fn default_languages_dir() -> PathBuf {
    PathBuf::from("languages")
}

/// Extensions of the documents that get a table of contents
pub fn default_extensions() -> Vec<String> {
    vec!["html".to_string(), "htm".to_string()]
}

/// Paths skipped during a site build, as glob patterns relative to the source
pub fn default_exclude() -> Vec<String> {
    vec![
        "_site/**".to_string(),
        ".git/**".to_string(),
    ]
}

/// Heading labels are inserted verbatim unless configured otherwise
pub fn default_escape_labels() -> bool {
    false
}
