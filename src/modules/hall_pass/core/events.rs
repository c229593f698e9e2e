use crate::modules::hall_pass::core::ledger::LogEntry;
use crate::modules::hall_pass::core::session::Session;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassStarted {
    pub session: Session,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassEnded {
    pub entry: LogEntry,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PassEvent {
    PassStarted(PassStarted),
    PassEnded(PassEnded),
}
