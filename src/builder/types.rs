use std::path::PathBuf;

/// A document picked up from the source tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    /// Path of the document on disk
    pub path: PathBuf,
    /// Path relative to the source directory
    pub relative_path: PathBuf,
    /// Where the processed document is written
    pub output_path: PathBuf,
}

/// Counts gathered during a build
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Documents written to the destination
    pub processed: usize,
    /// Processed documents that received a table of contents
    pub with_toc: usize,
    /// Documents that could not be read or written
    pub failed: usize,
}
