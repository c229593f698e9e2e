// Typed boundary between the controller and the persisted blobs.
//
// Responsibilities
// - Decode each blob into its domain type, or fail with the key that was malformed.
// - Encode domain types back into JSON values for the store.

use crate::shared::infrastructure::persistent_store::{PersistentStore, StoreError, StoreKey};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("persisted {key} does not match its schema: {source}")]
    Schema {
        key: StoreKey,
        #[source]
        source: serde_json::Error,
    },
}

/// Loads `key`, returning `None` when the store has no blob for it.
pub async fn load_snapshot<T: DeserializeOwned>(
    store: &dyn PersistentStore,
    key: StoreKey,
) -> Result<Option<T>, LoadError> {
    match store.load(key).await? {
        None => Ok(None),
        Some(value) => serde_json::from_value(value)
            .map(Some)
            .map_err(|source| LoadError::Schema { key, source }),
    }
}

pub async fn save_snapshot<T: Serialize>(
    store: &dyn PersistentStore,
    key: StoreKey,
    value: &T,
) -> Result<(), StoreError> {
    let encoded =
        serde_json::to_value(value).map_err(|source| StoreError::Encoding { key, source })?;
    store.save(key, encoded).await
}
