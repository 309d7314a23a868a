//! File copying.

use std::path::Path;

use crate::error::{Error, Result};

/// Check whether two paths name the same existing file.
///
/// Paths that cannot be resolved are never the same file.
pub fn is_same_file(a: &Path, b: &Path) -> bool {
    match (std::fs::canonicalize(a), std::fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Copy `from` to `to`, creating the parent directory of `to` first.
///
/// An existing file at `to` is overwritten. Content and permissions are
/// copied. Returns the number of bytes copied.
///
/// Copying a file onto itself is refused: the destination is truncated on
/// open, which would empty the source.
pub fn copy_file(from: &Path, to: &Path) -> Result<u64> {
    let wrap = |source: std::io::Error| Error::Copy {
        from: from.to_path_buf(),
        to: to.to_path_buf(),
        source,
    };

    if is_same_file(from, to) {
        return Err(wrap(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "source and destination are the same file",
        )));
    }

    if let Some(parent) = to.parent().filter(|p| !p.exists()) {
        std::fs::create_dir_all(parent).map_err(wrap)?;
    }

    std::fs::copy(from, to).map_err(wrap)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_copy_creates_parent() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("src.png");
        fs::write(&from, b"png-bytes").unwrap();

        let to = dir.path().join("out/images/x.png");
        assert_eq!(copy_file(&from, &to).unwrap(), 9);
        assert_eq!(fs::read(&to).unwrap(), b"png-bytes");
    }

    #[test]
    fn test_copy_overwrites() {
        let dir = TempDir::new().unwrap();
        let from = dir.path().join("src.png");
        let to = dir.path().join("dst.png");
        fs::write(&from, b"new").unwrap();
        fs::write(&to, b"old contents").unwrap();

        copy_file(&from, &to).unwrap();
        assert_eq!(fs::read(&to).unwrap(), b"new");
    }

    #[test]
    fn test_copy_onto_itself_refused() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("images/x.png");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, b"precious").unwrap();

        let aliased = dir.path().join("images/../images/x.png");
        assert!(is_same_file(&path, &aliased));
        assert!(matches!(copy_file(&path, &aliased), Err(Error::Copy { .. })));
        assert_eq!(fs::read(&path).unwrap(), b"precious");
    }

    #[test]
    fn test_is_same_file_missing_paths() {
        let dir = TempDir::new().unwrap();
        let existing = dir.path().join("a.png");
        fs::write(&existing, b"a").unwrap();

        assert!(!is_same_file(&existing, &dir.path().join("b.png")));
        assert!(!is_same_file(&dir.path().join("c.png"), &dir.path().join("c.png")));
    }

    #[test]
    fn test_copy_missing_source_is_error() {
        let dir = TempDir::new().unwrap();
        let result = copy_file(&dir.path().join("nope.png"), &dir.path().join("x.png"));
        assert!(matches!(result, Err(Error::Copy { .. })));
    }
}
