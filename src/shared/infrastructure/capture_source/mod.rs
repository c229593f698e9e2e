// Port for the device that yields decoded identifiers and location tokens.
//
// Purpose
// - Model the camera decoder or keyboard-style reader as a message emitter.
//
// Responsibilities
// - `attach` claims the device and returns the stream of decoded strings.
// - `release` gives the device back. Callers pair every successful attach with a release.
//
// Boundaries
// - No decoding here. Sources hand over strings that are already decoded.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tokio::sync::mpsc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ScanPurpose {
    Start,
    End,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "camelCase")]
pub enum CaptureEvent {
    Identifier(String),
    #[serde(alias = "location")]
    LocationToken(String),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CaptureError {
    #[error("capture device unavailable: {0}")]
    Unavailable(String),

    #[error("permission to use the capture device was denied")]
    PermissionDenied,

    #[error("no scan is active")]
    NotAttached,
}

#[async_trait]
pub trait CaptureSource: Send + Sync {
    async fn attach(&self) -> Result<mpsc::Receiver<CaptureEvent>, CaptureError>;
    async fn release(&self);
}

pub mod channel;
