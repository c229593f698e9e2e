use crate::modules::hall_pass::core::session::Session;
use crate::modules::hall_pass::core::settings::Settings;
use serde::Serialize;

/// What a station display renders. Elapsed values are sampled when the view is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PassStatus {
    pub occupied: bool,
    pub session: Option<Session>,
    pub elapsed_ms: Option<i64>,
    pub elapsed: Option<String>,
    pub settings: Settings,
    pub roster_size: usize,
    pub log_count: usize,
    pub refresh_interval_ms: u64,
}
