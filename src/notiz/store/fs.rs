use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::Result;
use crate::store::StorageBackend;

/// File backed storage. Each key lives in `<root>/<key>.json` and writes
/// are atomic: a temp file in the same directory, then a rename.
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.root)?;
        let tmp = self.root.join(format!(".{key}-{}.tmp", Uuid::new_v4()));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, self.path_for(key))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_missing_key_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let backend = FileBackend::new(dir.path());
        assert_eq!(backend.read("notes").unwrap(), None);
    }

    #[test]
    fn test_write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path());
        backend.write("notes", "[1, 2, 3]").unwrap();
        assert_eq!(backend.read("notes").unwrap(), Some("[1, 2, 3]".to_string()));
    }

    #[test]
    fn test_write_replaces_previous_value() {
        let dir = tempfile::tempdir().unwrap();
        let mut backend = FileBackend::new(dir.path());
        backend.write("notes", "old").unwrap();
        backend.write("notes", "new").unwrap();
        assert_eq!(backend.read("notes").unwrap(), Some("new".to_string()));
    }

    #[test]
    fn test_write_creates_root_and_leaves_no_temp_files() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("deep").join("home");
        let mut backend = FileBackend::new(&root);
        backend.write("notes", "[]").unwrap();

        let entries: Vec<String> = fs::read_dir(&root)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect();
        assert_eq!(entries, ["notes.json"]);
    }
}
