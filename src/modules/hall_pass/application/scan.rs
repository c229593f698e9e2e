// Scan coordinator: owns the capture device for one scan purpose at a time.
//
// Responsibilities
// - Attach the capture source when a purpose is activated and release it on every exit:
//   a decode that completes the transition, an explicit cancel, or a different purpose
//   superseding this one.
// - Remember the latest location token and hand it to start/end with the next identifier.
// - Record the latest outcome so the station can show why a scan was rejected.
//
// A rejected transition keeps the scan waiting. Scans never time out.

use crate::modules::hall_pass::application::controller::SessionController;
use crate::modules::hall_pass::application::errors::{ApplicationError, ErrorKind};
use crate::modules::hall_pass::core::ledger::LogEntry;
use crate::modules::hall_pass::core::session::Session;
use crate::modules::hall_pass::use_cases::end_pass::command::EndPass;
use crate::modules::hall_pass::use_cases::start_pass::command::StartPass;
use crate::shared::infrastructure::capture_source::{CaptureEvent, CaptureSource, ScanPurpose};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::{Mutex, mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum ScanOutcome {
    LocationCaptured { purpose: ScanPurpose },
    Started { session: Session },
    Ended { entry: LogEntry },
    Rejected {
        purpose: ScanPurpose,
        kind: ErrorKind,
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanActivation {
    pub scan_id: Uuid,
    pub purpose: ScanPurpose,
    pub already_active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveScanView {
    pub scan_id: Uuid,
    pub purpose: ScanPurpose,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStatus {
    pub active: Option<ActiveScanView>,
    pub last_outcome: Option<ScanOutcome>,
}

struct ActiveScan {
    scan_id: Uuid,
    purpose: ScanPurpose,
    cancel: oneshot::Sender<()>,
    task: JoinHandle<()>,
}

impl ActiveScan {
    fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Stops the consumer and waits until it has released the device.
    async fn stop(self) {
        let _ = self.cancel.send(());
        if let Err(e) = self.task.await {
            warn!(scan_id = %self.scan_id, error = %e, "scan task ended abnormally");
        }
    }
}

pub struct ScanCoordinator {
    source: Arc<dyn CaptureSource>,
    controller: Arc<SessionController>,
    active: Mutex<Option<ActiveScan>>,
    last_outcome: Arc<Mutex<Option<ScanOutcome>>>,
}

impl ScanCoordinator {
    pub fn new(source: Arc<dyn CaptureSource>, controller: Arc<SessionController>) -> Self {
        Self {
            source,
            controller,
            active: Mutex::new(None),
            last_outcome: Arc::new(Mutex::new(None)),
        }
    }

    pub async fn activate(&self, purpose: ScanPurpose) -> Result<ScanActivation, ApplicationError> {
        let mut active = self.active.lock().await;
        if let Some(current) = active.as_ref().filter(|s| s.is_running()) {
            if current.purpose == purpose {
                return Ok(ScanActivation {
                    scan_id: current.scan_id,
                    purpose,
                    already_active: true,
                });
            }
        }
        if let Some(previous) = active.take() {
            let previous_id = previous.scan_id;
            previous.stop().await;
            debug!(scan_id = %previous_id, "previous scan torn down");
        }

        let events = self
            .source
            .attach()
            .await
            .inspect_err(|e| warn!(error = %e, ?purpose, "capture device unavailable"))?;

        let scan_id = Uuid::now_v7();
        let (cancel, cancelled) = oneshot::channel();
        let run = ScanRun {
            scan_id,
            purpose,
            source: self.source.clone(),
            controller: self.controller.clone(),
            last_outcome: self.last_outcome.clone(),
        };
        let task = tokio::spawn(run.consume(events, cancelled));
        *active = Some(ActiveScan {
            scan_id,
            purpose,
            cancel,
            task,
        });
        info!(%scan_id, ?purpose, "scan activated");

        Ok(ScanActivation {
            scan_id,
            purpose,
            already_active: false,
        })
    }

    /// Cancels the current scan, if any, and returns whether one was still waiting.
    pub async fn deactivate(&self) -> bool {
        let Some(scan) = self.active.lock().await.take() else {
            return false;
        };
        let was_running = scan.is_running();
        let scan_id = scan.scan_id;
        scan.stop().await;
        info!(%scan_id, "scan deactivated");
        was_running
    }

    pub async fn status(&self) -> ScanStatus {
        let active = self.active.lock().await;
        let current = active
            .as_ref()
            .filter(|s| s.is_running())
            .map(|s| ActiveScanView {
                scan_id: s.scan_id,
                purpose: s.purpose,
            });
        ScanStatus {
            active: current,
            last_outcome: self.last_outcome.lock().await.clone(),
        }
    }
}

struct ScanRun {
    scan_id: Uuid,
    purpose: ScanPurpose,
    source: Arc<dyn CaptureSource>,
    controller: Arc<SessionController>,
    last_outcome: Arc<Mutex<Option<ScanOutcome>>>,
}

impl ScanRun {
    async fn consume(
        self,
        mut events: mpsc::Receiver<CaptureEvent>,
        mut cancelled: oneshot::Receiver<()>,
    ) {
        let mut pending_token: Option<String> = None;
        loop {
            let event = tokio::select! {
                _ = &mut cancelled => break,
                event = events.recv() => match event {
                    Some(event) => event,
                    None => break,
                },
            };

            match event {
                CaptureEvent::LocationToken(token) => {
                    debug!(scan_id = %self.scan_id, "location token captured");
                    pending_token = Some(token);
                    self.record(ScanOutcome::LocationCaptured {
                        purpose: self.purpose,
                    })
                    .await;
                }
                CaptureEvent::Identifier(id) => match self.transition(&id, pending_token.as_deref()).await {
                    Ok(outcome) => {
                        self.record(outcome).await;
                        break;
                    }
                    Err(e) => {
                        self.record(ScanOutcome::Rejected {
                            purpose: self.purpose,
                            kind: e.kind(),
                            message: e.to_string(),
                        })
                        .await;
                    }
                },
            }
        }

        self.source.release().await;
        debug!(scan_id = %self.scan_id, "capture device released");
    }

    async fn transition(
        &self,
        id: &str,
        token: Option<&str>,
    ) -> Result<ScanOutcome, ApplicationError> {
        match self.purpose {
            ScanPurpose::Start => {
                let session = self
                    .controller
                    .start_pass(StartPass::new(id, token))
                    .await?;
                Ok(ScanOutcome::Started { session })
            }
            ScanPurpose::End => {
                let entry = self
                    .controller
                    .end_pass(EndPass::new(id, token))
                    .await?;
                Ok(ScanOutcome::Ended { entry })
            }
        }
    }

    async fn record(&self, outcome: ScanOutcome) {
        *self.last_outcome.lock().await = Some(outcome);
    }
}
