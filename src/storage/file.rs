use std::{collections::BTreeMap, io::ErrorKind, path::PathBuf};

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::{KeyValueStore, StorageError};
use crate::config;

type Slots = BTreeMap<String, String>;

/// Keeps every slot in one JSON object on disk.
///
/// Writes go to a per-process temporary sibling file which is then renamed
/// over the document, so readers see either the previous or the next state.
/// A missing or unparsable document, including one that is not UTF-8, reads
/// as an empty store.
pub struct FileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Store located at `<data_local_dir>/sponow/storage.json`.
    pub fn default_location() -> Self {
        Self::new(config::data_dir().join("storage.json"))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    async fn read_slots(&self) -> Result<Slots, StorageError> {
        let content = match async_fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Slots::new()),
            Err(e) => return Err(StorageError::Io(e)),
        };

        // not UTF-8 or not JSON: treat as empty, the next write replaces it
        Ok(serde_json::from_slice(&content).unwrap_or_default())
    }

    async fn write_slots(&self, slots: &Slots) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(slots)?;
        let tmp = self
            .path
            .with_extension(format!("json.{}.tmp", std::process::id()));
        async_fs::write(&tmp, json).await?;
        async_fs::rename(&tmp, &self.path).await?;
        Ok(())
    }
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let _guard = self.lock.lock().await;
        let mut slots = self.read_slots().await?;
        Ok(slots.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut slots = self.read_slots().await?;
        slots.insert(key.to_string(), value.to_string());
        self.write_slots(&slots).await
    }

    async fn remove(&self, keys: &[&str]) -> Result<(), StorageError> {
        let _guard = self.lock.lock().await;
        let mut slots = self.read_slots().await?;
        let before = slots.len();
        for key in keys {
            slots.remove(*key);
        }
        if slots.len() == before {
            return Ok(());
        }
        self.write_slots(&slots).await
    }
}
