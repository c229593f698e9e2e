// Wall-clock sampling for the pass lifecycle.
//
// Timestamps are milliseconds since the Unix epoch. Elapsed values are for display only
// and are never persisted.

use chrono::{DateTime, Utc};
use serde::de::{self, Deserialize, Deserializer, Unexpected};

/// Cadence at which clients are expected to re-sample the status while a pass is out.
pub const STATUS_REFRESH_INTERVAL_MS: u64 = 500;

pub trait Clock: Send + Sync {
    fn now(&self) -> i64;

    fn elapsed(&self, since: i64) -> i64 {
        self.now().saturating_sub(since)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

/// Reads epoch milliseconds, rejecting values outside the renderable date range.
pub fn deserialize_timestamp<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    let millis = i64::deserialize(deserializer)?;
    if DateTime::from_timestamp_millis(millis).is_none() {
        return Err(de::Error::invalid_value(
            Unexpected::Signed(millis),
            &"epoch milliseconds within the supported date range",
        ));
    }
    Ok(millis)
}
