// Completed passes, newest first.
//
// Entries are immutable once appended. Removal keeps the relative order of the rest.

use crate::shared::core::clock::deserialize_timestamp;
use crate::shared::core::duration::format_mm_ss;
use chrono::{DateTime, NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

pub const LEDGER_CSV_HEADER: [&str; 6] = [
    "Restroom",
    "ID",
    "Name",
    "Start",
    "End",
    "Duration (mm:ss)",
];

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("log entry {index} does not exist (ledger has {len} entries)")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("timestamp {0} is out of range")]
    InvalidTimestamp(i64),

    #[error("ledger csv could not be written: {0}")]
    Csv(#[from] csv::Error),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogEntry {
    pub id: String,
    pub name: String,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub start_time: i64,
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub end_time: i64,
    pub duration_ms: i64,
    pub location_name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    entries: Vec<LogEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn append(&mut self, entry: LogEntry) {
        self.entries.insert(0, entry);
    }

    pub fn remove(&mut self, index: usize) -> Result<LogEntry, LedgerError> {
        if index >= self.entries.len() {
            return Err(LedgerError::IndexOutOfBounds {
                index,
                len: self.entries.len(),
            });
        }
        Ok(self.entries.remove(index))
    }

    /// Renders the ledger as CSV with start and end times shown in `tz`.
    pub fn export_csv<Tz>(&self, tz: &Tz) -> Result<String, LedgerError>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let mut writer = csv::WriterBuilder::new()
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(Vec::new());
        writer.write_record(LEDGER_CSV_HEADER)?;
        for entry in &self.entries {
            let start = format_timestamp(entry.start_time, tz)?;
            let end = format_timestamp(entry.end_time, tz)?;
            let duration = format_mm_ss(entry.duration_ms);
            writer.write_record([
                entry.location_name.as_str(),
                entry.id.as_str(),
                entry.name.as_str(),
                start.as_str(),
                end.as_str(),
                duration.as_str(),
            ])?;
        }
        let bytes = writer
            .into_inner()
            .map_err(|e| csv::Error::from(e.into_error()))?;
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

pub fn export_filename(date: NaiveDate) -> String {
    format!("hallpass_logs_{}.csv", date.format("%Y-%m-%d"))
}

fn format_timestamp<Tz>(millis: i64, tz: &Tz) -> Result<String, LedgerError>
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let utc = DateTime::from_timestamp_millis(millis).ok_or(LedgerError::InvalidTimestamp(millis))?;
    Ok(utc.with_timezone(tz).format(TIMESTAMP_FORMAT).to_string())
}
