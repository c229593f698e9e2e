use crate::modules::hall_pass::adapters::outbound::snapshots::LoadError;
use crate::modules::hall_pass::core::ledger::LedgerError;
use crate::modules::hall_pass::core::roster::RosterImportError;
use crate::modules::hall_pass::use_cases::end_pass::decide::EndError;
use crate::modules::hall_pass::use_cases::start_pass::decide::StartError;
use crate::shared::infrastructure::capture_source::CaptureError;
use crate::shared::infrastructure::persistent_store::StoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Start(#[from] StartError),

    #[error(transparent)]
    End(#[from] EndError),

    #[error(transparent)]
    RosterImport(#[from] RosterImportError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("roster csv could not be written: {0}")]
    RosterExport(#[source] csv::Error),

    #[error(transparent)]
    Capture(#[from] CaptureError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Load(#[from] LoadError),
}

/// How a failure should be reported. None of them are fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ErrorKind {
    Validation,
    Conflict,
    Import,
    NotFound,
    Resource,
    Storage,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "validation",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Import => "import",
            ErrorKind::NotFound => "notFound",
            ErrorKind::Resource => "resource",
            ErrorKind::Storage => "storage",
        }
    }
}

impl ApplicationError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ApplicationError::Start(StartError::AlreadyOccupied) => ErrorKind::Conflict,
            ApplicationError::Start(_) => ErrorKind::Validation,
            ApplicationError::End(EndError::MissingIdentifier) => ErrorKind::Validation,
            ApplicationError::End(_) => ErrorKind::Conflict,
            ApplicationError::RosterImport(_) => ErrorKind::Import,
            ApplicationError::Ledger(LedgerError::IndexOutOfBounds { .. }) => ErrorKind::NotFound,
            ApplicationError::Capture(CaptureError::NotAttached) => ErrorKind::Conflict,
            ApplicationError::Capture(_) => ErrorKind::Resource,
            ApplicationError::Ledger(_)
            | ApplicationError::RosterExport(_)
            | ApplicationError::Store(_)
            | ApplicationError::Load(_) => ErrorKind::Storage,
        }
    }
}
