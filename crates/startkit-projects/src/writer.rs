//! Destinations for generated files

use crate::error::{Error, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeMap;
use std::io::Write;

/// Sink for generated project files
///
/// Implementations never overwrite: writing a path twice, or a path that
/// already exists, is an error.
pub trait ProjectWriter {
    fn write_file(&mut self, path: &Utf8Path, contents: &str) -> Result<()>;
}

/// Writes files to disk, creating parent directories on demand
#[derive(Debug, Default)]
pub struct FsWriter;

impl FsWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ProjectWriter for FsWriter {
    fn write_file(&mut self, path: &Utf8Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| match e.kind() {
                std::io::ErrorKind::AlreadyExists => Error::file_exists(path.as_str()),
                _ => Error::Io(e),
            })?;
        file.write_all(contents.as_bytes())?;
        Ok(())
    }
}

/// Keeps generated files in memory, for dry runs and tests
#[derive(Debug, Default)]
pub struct MemoryWriter {
    files: BTreeMap<Utf8PathBuf, String>,
}

impl MemoryWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generated files keyed by absolute path
    pub fn files(&self) -> &BTreeMap<Utf8PathBuf, String> {
        &self.files
    }

    pub fn get(&self, path: impl AsRef<Utf8Path>) -> Option<&str> {
        self.files.get(path.as_ref()).map(String::as_str)
    }
}

impl ProjectWriter for MemoryWriter {
    fn write_file(&mut self, path: &Utf8Path, contents: &str) -> Result<()> {
        if self.files.contains_key(path) {
            return Err(Error::file_exists(path.as_str()));
        }
        self.files.insert(path.to_path_buf(), contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::utf8_path;

    #[test]
    fn test_fs_writer_creates_parents() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = utf8_path(temp_dir.path()).unwrap();
        let target = root.join("a/b/c.py");

        FsWriter::new().write_file(&target, "x = 1\n").unwrap();
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "x = 1\n");
    }

    #[test]
    fn test_fs_writer_refuses_overwrite() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = utf8_path(temp_dir.path()).unwrap();
        let target = root.join("settings.yml");
        std::fs::write(&target, "keep: me\n").unwrap();

        let err = FsWriter::new().write_file(&target, "{}\n").unwrap_err();
        assert!(matches!(err, Error::FileExists { .. }));
        assert_eq!(std::fs::read_to_string(&target).unwrap(), "keep: me\n");
    }

    #[test]
    fn test_memory_writer() {
        let mut writer = MemoryWriter::new();
        writer.write_file(Utf8Path::new("/p/a.txt"), "a\n").unwrap();
        assert_eq!(writer.get("/p/a.txt"), Some("a\n"));
        assert!(writer.write_file(Utf8Path::new("/p/a.txt"), "b\n").is_err());
        assert_eq!(writer.files().len(), 1);
    }
}
