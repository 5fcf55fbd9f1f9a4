//! Bundle file loading
//!
//! The storage boundary of the check pipeline: a path in, raw bytes out.

use crate::utils::CheckError;
use std::path::Path;

/// Read the raw bundle bytes from disk
pub fn read_bundle(path: &Path) -> Result<Vec<u8>, CheckError> {
    std::fs::read(path).map_err(|e| CheckError::Storage {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_missing_file_is_a_storage_error() {
        let error = read_bundle(Path::new("/nonexistent/bundle.p12")).unwrap_err();
        assert_eq!(error.kind(), "storage");
        assert!(error.to_string().contains("/nonexistent/bundle.p12"));
    }

    #[test]
    fn test_reads_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"bundle bytes").unwrap();

        let data = read_bundle(file.path()).unwrap();
        assert_eq!(data, b"bundle bytes");
    }
}
