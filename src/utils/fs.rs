use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use crate::utils::error::{BoxResult, TocError};

/// Create a directory and any parent directories if they don't exist
pub fn create_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    fs::create_dir_all(path.as_ref())?;
    Ok(())
}

/// Remove a directory and all its contents
pub fn remove_directory<P: AsRef<Path>>(path: P) -> BoxResult<()> {
    if path.as_ref().exists() && path.as_ref().is_dir() {
        fs::remove_dir_all(path.as_ref())?;
    }
    Ok(())
}

/// Read a file to string
pub fn read_file<P: AsRef<Path>>(path: P) -> BoxResult<String> {
    fs::read_to_string(path.as_ref()).map_err(|e| {
        TocError::File(format!("Failed to read {}: {}", path.as_ref().display(), e)).into()
    })
}

/// Write a string to a file, creating parent directories as needed
pub fn write_file<P: AsRef<Path>>(path: P, contents: &str) -> BoxResult<()> {
    if let Some(parent) = path.as_ref().parent() {
        create_directory(parent)?;
    }

    let mut file = fs::File::create(path.as_ref())?;
    file.write_all(contents.as_bytes())?;
    Ok(())
}

/// Read a document from a file, or from stdin when no path is given
pub fn read_input(path: Option<&Path>) -> BoxResult<String> {
    match path {
        Some(path) => read_file(path),
        None => {
            let mut contents = String::new();
            io::stdin().read_to_string(&mut contents)?;
            Ok(contents)
        }
    }
}

/// Write a document to a file, or to stdout when no path is given
pub fn write_output(path: Option<&Path>, contents: &str) -> BoxResult<()> {
    match path {
        Some(path) => write_file(path, contents),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(contents.as_bytes())?;
            stdout.flush()?;
            Ok(())
        }
    }
}
