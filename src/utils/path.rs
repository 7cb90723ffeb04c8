use std::path::{Component, Path, PathBuf};

/// Get file extension as a lowercase string
pub fn get_extension<P: AsRef<Path>>(path: P) -> Option<String> {
    path.as_ref()
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase())
}

/// Check if a path has one of the given extensions (case-insensitive)
pub fn has_any_extension<P: AsRef<Path>>(path: P, extensions: &[String]) -> bool {
    get_extension(path).map_or(false, |ext| {
        extensions
            .iter()
            .any(|candidate| candidate.trim_start_matches('.').eq_ignore_ascii_case(&ext))
    })
}

/// Make a path relative to a base directory
pub fn make_relative<P: AsRef<Path>, B: AsRef<Path>>(path: P, base: B) -> Option<PathBuf> {
    path.as_ref()
        .strip_prefix(base.as_ref())
        .ok()
        .map(Path::to_path_buf)
}

/// Drop `.` components so `./site` and `site` compare equal
pub fn normalize_path<P: AsRef<Path>>(path: P) -> PathBuf {
    path.as_ref()
        .components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

/// Absolute, symlink-free form of a path that may not exist yet.
///
/// The longest existing ancestor is canonicalized and the remaining
/// components are appended, with `..` popping and `.` skipped.
pub fn resolve_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        match std::env::current_dir() {
            Ok(cwd) => cwd.join(path),
            Err(_) => path.to_path_buf(),
        }
    };

    let components: Vec<Component> = absolute.components().collect();
    for split in (1..=components.len()).rev() {
        let head: PathBuf = components[..split].iter().collect();
        if let Ok(mut resolved) = head.canonicalize() {
            for component in &components[split..] {
                match component {
                    Component::ParentDir => {
                        resolved.pop();
                    }
                    Component::CurDir => {}
                    other => resolved.push(other),
                }
            }
            return resolved;
        }
    }

    normalize_path(absolute)
}

/// Render a relative path with forward slashes, for pattern matching
pub fn to_slash<P: AsRef<Path>>(path: P) -> String {
    path.as_ref()
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_has_any_extension() {
        let extensions = vec!["html".to_string(), ".htm".to_string()];
        assert!(has_any_extension("index.html", &extensions));
        assert!(has_any_extension("docs/ABOUT.HTM", &extensions));
        assert!(!has_any_extension("style.css", &extensions));
        assert!(!has_any_extension("README", &extensions));
    }

    #[test]
    fn test_make_relative() {
        assert_eq!(
            make_relative("site/docs/a.html", "site"),
            Some(PathBuf::from("docs/a.html"))
        );
        assert_eq!(make_relative("other/a.html", "site"), None);
    }

    #[test]
    fn test_normalize_path() {
        assert_eq!(normalize_path("./public/./a.html"), PathBuf::from("public/a.html"));
        assert_eq!(normalize_path("."), PathBuf::new());
    }

    #[test]
    fn test_resolve_path_handles_parent_and_missing_components() {
        let dir = tempfile::TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("site")).unwrap();
        let root = dir.path().canonicalize().unwrap();

        assert_eq!(
            resolve_path(dir.path().join("site/../site/public")),
            root.join("site/public")
        );
        assert_eq!(
            resolve_path(dir.path().join("missing/../site/./out")),
            root.join("site/out")
        );
        assert_eq!(resolve_path(dir.path().join("site")), root.join("site"));
    }

    #[test]
    fn test_resolve_path_makes_relative_paths_absolute() {
        let cwd = std::env::current_dir().unwrap().canonicalize().unwrap();
        assert_eq!(resolve_path("."), cwd);
        assert_eq!(resolve_path("./not-there/x"), cwd.join("not-there/x"));
    }

    #[test]
    fn test_to_slash() {
        let path: PathBuf = ["docs", "guide", "a.html"].iter().collect();
        assert_eq!(to_slash(&path), "docs/guide/a.html");
    }
}
