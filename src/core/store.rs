//! Key-value store capability behind settings and history persistence.
//!
//! The chat workflow only ever needs `get`/`set`/`remove` on string keys, so
//! persistence is injected through the [`KvStore`] trait: the app runs on
//! [`FileStore`], tests run on [`MemoryStore`].

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

use crate::core::paths;

pub trait KvStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> io::Result<()>;
    fn remove(&self, key: &str) -> io::Result<()>;
}

/// File-backed store: one file per key under the platform data dir.
/// Writes go through a tmp file plus rename so a crash never leaves a
/// half-written value.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Store rooted at the standard data directory.
    pub fn open() -> Option<Self> {
        paths::data_dir().map(|dir| Self { dir })
    }

    /// Store rooted at an explicit directory.
    pub fn at(dir: PathBuf) -> Self {
        Self { dir }
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.dir.join(key)).ok()
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(key);
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value)?;
        fs::rename(tmp, path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        match fs::remove_file(self.dir.join(key)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e),
        }
    }
}

/// In-memory store for tests and ephemeral sessions.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> io::Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| io::Error::other("store lock poisoned"))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> io::Result<()> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| io::Error::other("store lock poisoned"))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_set_get_remove() {
        let store = MemoryStore::default();
        assert!(store.get("k").is_none());
        store.set("k", "v").expect("set");
        assert_eq!(store.get("k").as_deref(), Some("v"));
        store.remove("k").expect("remove");
        assert!(store.get("k").is_none());
    }

    #[test]
    fn file_store_round_trip() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let store = FileStore::at(tmp.path().join("store"));
        assert!(store.get("language").is_none());
        store.set("language", "assamese").expect("set");
        assert_eq!(store.get("language").as_deref(), Some("assamese"));
        store.set("language", "english").expect("overwrite");
        assert_eq!(store.get("language").as_deref(), Some("english"));
    }

    #[test]
    fn file_store_remove_missing_key_is_ok() {
        let tmp = tempfile::TempDir::new().expect("temp dir");
        let store = FileStore::at(tmp.path().to_path_buf());
        store.remove("absent").expect("remove of missing key");
    }
}
