// Shared fixtures for sessions and log entries.
// Defaults are read from the JSON documents next to this file.

use crate::modules::hall_pass::core::ledger::LogEntry;
use crate::modules::hall_pass::core::session::Session;
use std::fs;

const FIXTURES_DIR: &str = "./src/tests/fixtures/json";

fn read_fixture<T: serde::de::DeserializeOwned>(file: &str) -> T {
    let json_str = fs::read_to_string(format!("{FIXTURES_DIR}/{file}")).unwrap();
    serde_json::from_str(&json_str).unwrap()
}

pub fn make_session() -> Session {
    read_fixture("session.json")
}

pub fn make_log_entry() -> LogEntry {
    read_fixture("log_entry.json")
}

pub struct LogEntryBuilder {
    inner: LogEntry,
}

impl Default for LogEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl LogEntryBuilder {
    pub fn new() -> Self {
        Self {
            inner: make_log_entry(),
        }
    }

    pub fn id(mut self, v: impl Into<String>) -> Self {
        self.inner.id = v.into();
        self
    }

    pub fn name(mut self, v: impl Into<String>) -> Self {
        self.inner.name = v.into();
        self
    }

    pub fn start_time(mut self, v: i64) -> Self {
        self.inner.start_time = v;
        self
    }

    pub fn end_time(mut self, v: i64) -> Self {
        self.inner.end_time = v;
        self
    }

    pub fn location_name(mut self, v: impl Into<String>) -> Self {
        self.inner.location_name = v.into();
        self
    }

    /// Duration always follows the start and end times.
    pub fn build(mut self) -> LogEntry {
        self.inner.duration_ms = self.inner.end_time - self.inner.start_time;
        self.inner
    }
}

#[cfg(test)]
mod log_entry_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = LogEntryBuilder::default().build();
        assert_eq!(built, make_log_entry());
        assert_eq!(built.duration_ms, 330_000);
    }

    #[rstest]
    fn setters_override_fields_and_build_derives_the_duration() {
        let custom = LogEntryBuilder::new()
            .id("2002")
            .name("Bob")
            .start_time(1_000)
            .end_time(4_500)
            .location_name("Gym")
            .build();
        assert_eq!(custom.id, "2002");
        assert_eq!(custom.name, "Bob");
        assert_eq!(custom.duration_ms, 3_500);
        assert_eq!(custom.location_name, "Gym");
    }
}
