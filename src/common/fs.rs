//! Common file system operations with unified error handling

use std::fs;
use std::path::Path;

use crate::error::{Result, state};

/// Write a state file atomically (write temp file + rename)
///
/// Creates the parent directory when missing.
pub fn write_atomic(path: &Path, content: &[u8]) -> Result<()> {
    let display = path.display().to_string();

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| state::write_failed(&display, e.to_string()))?;
    }

    let tmp = path.with_extension("tmp");
    fs::write(&tmp, content).map_err(|e| state::write_failed(&display, e.to_string()))?;
    fs::rename(&tmp, path).map_err(|e| state::write_failed(&display, e.to_string()))?;
    Ok(())
}

/// Read a state file, returning `None` when it does not exist yet
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(state::read_failed(path.display().to_string(), e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_creates_parent() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested/state/flags.json");

        write_atomic(&path, b"{}").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
        assert!(!path.with_extension("tmp").exists());
    }

    #[test]
    fn test_write_atomic_replaces_content() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("flags.json");

        write_atomic(&path, b"first").unwrap();
        write_atomic(&path, b"second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_read_optional_missing() {
        let temp = TempDir::new().unwrap();
        assert!(read_optional(&temp.path().join("absent.json")).unwrap().is_none());
    }
}
