use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

#[derive(Debug)]
pub enum AssetError {
    Walk(walkdir::Error),
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl fmt::Display for AssetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AssetError::Walk(e) => write!(f, "failed to read static assets: {}", e),
            AssetError::Io { path, source } => {
                write!(f, "failed to copy '{}': {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for AssetError {}

impl From<walkdir::Error> for AssetError {
    fn from(err: walkdir::Error) -> Self {
        AssetError::Walk(err)
    }
}

/// Recursively copy `static_dir` into `destination`.
///
/// Merge semantics: the copy never fails because the destination
/// already exists. Files with the same relative path are overwritten
/// and everything else in the destination is left alone. A missing
/// `static_dir` is a no-op.
pub fn copy_assets(static_dir: &Path, destination: &Path) -> Result<(), AssetError> {
    if !static_dir.is_dir() {
        return Ok(());
    }

    for entry in WalkDir::new(static_dir) {
        let entry = entry?;
        let relative = entry.path().strip_prefix(static_dir).unwrap_or(entry.path());
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).map_err(|source| AssetError::Io {
                path: target.clone(),
                source,
            })?;
        } else {
            fs::copy(entry.path(), &target).map_err(|source| AssetError::Io {
                path: entry.path().to_path_buf(),
                source,
            })?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_source_is_a_noop() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out");

        copy_assets(&dir.path().join("static"), &dest).unwrap();
        assert!(!dest.exists());
    }

    #[test]
    fn copies_nested_tree_and_creates_destination() {
        let dir = tempfile::tempdir().unwrap();
        let static_dir = dir.path().join("static");
        fs::create_dir_all(static_dir.join("css")).unwrap();
        fs::write(static_dir.join("css/style.css"), "body {}").unwrap();
        fs::write(static_dir.join("logo.png"), "png").unwrap();

        let dest = dir.path().join("out");
        copy_assets(&static_dir, &dest).unwrap();

        assert_eq!(
            fs::read_to_string(dest.join("css/style.css")).unwrap(),
            "body {}"
        );
        assert_eq!(fs::read_to_string(dest.join("logo.png")).unwrap(), "png");
    }

    #[test]
    fn merges_into_existing_destination() {
        let dir = tempfile::tempdir().unwrap();
        let static_dir = dir.path().join("static");
        fs::create_dir_all(&static_dir).unwrap();
        fs::write(static_dir.join("style.css"), "new").unwrap();

        let dest = dir.path().join("out");
        fs::create_dir_all(&dest).unwrap();
        fs::write(dest.join("style.css"), "old").unwrap();
        fs::write(dest.join("index.html"), "<html></html>").unwrap();

        copy_assets(&static_dir, &dest).unwrap();

        // Same relative path gets overwritten, everything else survives.
        assert_eq!(fs::read_to_string(dest.join("style.css")).unwrap(), "new");
        assert_eq!(
            fs::read_to_string(dest.join("index.html")).unwrap(),
            "<html></html>"
        );
    }

    #[test]
    fn copy_is_repeatable() {
        let dir = tempfile::tempdir().unwrap();
        let static_dir = dir.path().join("static");
        fs::create_dir_all(&static_dir).unwrap();
        fs::write(static_dir.join("a.txt"), "a").unwrap();

        let dest = dir.path().join("out");
        copy_assets(&static_dir, &dest).unwrap();
        copy_assets(&static_dir, &dest).unwrap();

        assert_eq!(fs::read_to_string(dest.join("a.txt")).unwrap(), "a");
    }
}
