// In memory implementation of the PersistentStore port.
//
// Purpose
// - Support controller and inbound tests without touching the filesystem.
// - Simulate an unreachable backend with `toggle_offline`.

use crate::shared::infrastructure::persistent_store::{PersistentStore, StoreError, StoreKey};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryPersistentStore {
    inner: RwLock<HashMap<StoreKey, serde_json::Value>>,
    offline: AtomicBool,
}

impl InMemoryPersistentStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blobs(blobs: impl IntoIterator<Item = (StoreKey, serde_json::Value)>) -> Self {
        Self {
            inner: RwLock::new(blobs.into_iter().collect()),
            offline: AtomicBool::new(false),
        }
    }

    pub fn toggle_offline(&self) {
        self.offline.fetch_xor(true, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), StoreError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(StoreError::Backend("Persistent store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl PersistentStore for InMemoryPersistentStore {
    async fn load(&self, key: StoreKey) -> Result<Option<serde_json::Value>, StoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.get(&key).cloned())
    }

    async fn save(&self, key: StoreKey, value: serde_json::Value) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.inner.write().await.insert(key, value);
        Ok(())
    }

    async fn clear(&self, key: StoreKey) -> Result<(), StoreError> {
        self.ensure_online()?;
        self.inner.write().await.remove(&key);
        Ok(())
    }
}
