use std::{fs::File, io::Read, path::Path};

/// Convenience helpers for reading files with consistent error handling.
pub struct FileReader;

impl FileReader {
    /// Read the entire file into memory.
    ///
    /// `size_hint` (usually the metadata length) avoids regrowing the buffer.
    pub fn read_to_end(path: &Path, size_hint: Option<u64>) -> std::io::Result<Vec<u8>> {
        let mut file = File::open(path)?;
        let capacity = size_hint.and_then(|n| usize::try_from(n).ok()).unwrap_or(0);
        let mut buf = Vec::with_capacity(capacity);
        file.read_to_end(&mut buf)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn reads_whole_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"a\r\nb\n").unwrap();
        let content = FileReader::read_to_end(file.path(), Some(5)).unwrap();
        assert_eq!(content, b"a\r\nb\n");
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(FileReader::read_to_end(&dir.path().join("nope.rs"), None).is_err());
    }
}
