// Port for the durable key-value store holding the four pass blobs.
//
// Responsibilities
// - Get, set and clear one JSON value per logical key.
// - Stay ignorant of blob shapes. Schema checks live at the snapshot boundary.

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Settings,
    Logs,
    Roster,
    Session,
}

impl StoreKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Settings => "settings",
            StoreKey::Logs => "logs",
            StoreKey::Roster => "roster",
            StoreKey::Session => "session",
        }
    }
}

impl fmt::Display for StoreKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("io error on {key}: {source}")]
    Io {
        key: StoreKey,
        #[source]
        source: std::io::Error,
    },

    #[error("stored {key} is not valid json: {source}")]
    Encoding {
        key: StoreKey,
        #[source]
        source: serde_json::Error,
    },
}

#[async_trait]
pub trait PersistentStore: Send + Sync {
    async fn load(&self, key: StoreKey) -> Result<Option<serde_json::Value>, StoreError>;
    async fn save(&self, key: StoreKey, value: serde_json::Value) -> Result<(), StoreError>;
    async fn clear(&self, key: StoreKey) -> Result<(), StoreError>;
}

pub mod in_memory;
pub mod json_file;
