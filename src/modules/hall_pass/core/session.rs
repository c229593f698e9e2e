use crate::shared::core::clock::deserialize_timestamp;
use serde::{Deserialize, Serialize};

/// The pass that is currently out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub id: String,
    pub name: String,
    pub location_token: Option<String>,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub start_time: i64,
}
