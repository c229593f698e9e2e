// File backed implementation of the PersistentStore port.
//
// Responsibilities
// - Keep one `<key>.json` document per logical key under a data directory.
// - Replace documents atomically by writing a sibling temp file and renaming it.

use crate::shared::infrastructure::persistent_store::{PersistentStore, StoreError, StoreKey};
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    pub async fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).await.map_err(|e| {
            StoreError::Backend(format!("cannot create data dir {}: {e}", dir.display()))
        })?;
        Ok(Self { dir })
    }

    fn path_for(&self, key: StoreKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.as_str()))
    }
}

#[async_trait::async_trait]
impl PersistentStore for JsonFileStore {
    async fn load(&self, key: StoreKey) -> Result<Option<serde_json::Value>, StoreError> {
        let contents = match fs::read_to_string(self.path_for(key)).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(StoreError::Io { key, source }),
        };
        serde_json::from_str(&contents)
            .map(Some)
            .map_err(|source| StoreError::Encoding { key, source })
    }

    async fn save(&self, key: StoreKey, value: serde_json::Value) -> Result<(), StoreError> {
        let serialized = serde_json::to_vec_pretty(&value)
            .map_err(|source| StoreError::Encoding { key, source })?;
        let target = self.path_for(key);
        let staging = target.with_extension("json.tmp");
        fs::write(&staging, serialized)
            .await
            .map_err(|source| StoreError::Io { key, source })?;
        fs::rename(&staging, &target)
            .await
            .map_err(|source| StoreError::Io { key, source })
    }

    async fn clear(&self, key: StoreKey) -> Result<(), StoreError> {
        match fs::remove_file(self.path_for(key)).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(source) => Err(StoreError::Io { key, source }),
        }
    }
}
