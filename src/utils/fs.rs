use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::{PatchError, Result};

/// Read a file's contents as string
pub fn read_file_to_string(path: impl AsRef<Path>) -> Result<String> {
    let path = path.as_ref();
    debug!("Reading file: {}", path.display());

    fs::read_to_string(path).map_err(|e| PatchError::io_error(e, path))
}

/// Overwrite a file with string content
///
/// Truncates and rewrites in place. No backup, no rename.
pub fn write_file(path: impl AsRef<Path>, content: &str) -> Result<()> {
    let path = path.as_ref();
    debug!("Writing {} bytes to file: {}", content.len(), path.display());

    fs::write(path, content).map_err(|e| PatchError::io_error(e, path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_write_then_read() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("a.txt");
        write_file(&path, "one\ntwo\n").unwrap();
        assert_eq!(read_file_to_string(&path).unwrap(), "one\ntwo\n");
    }

    #[test]
    fn test_read_missing_file_is_io_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing.cpp");
        match read_file_to_string(&path) {
            Err(PatchError::Io { path: p, .. }) => assert_eq!(p, path),
            other => panic!("expected io error, got {:?}", other),
        }
    }
}
