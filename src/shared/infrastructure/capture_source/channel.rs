// In-process capture source fed by pushed decode results.
//
// An external decoder (a browser camera widget, a USB wedge reader) posts its decoded
// strings through `emit`. Emitting only succeeds while a scan has the source attached.

use crate::shared::infrastructure::capture_source::{CaptureError, CaptureEvent, CaptureSource};
use std::sync::atomic::{AtomicBool, Ordering};
use tokio::sync::{Mutex, mpsc};

const EVENT_BUFFER: usize = 16;

pub struct ChannelCaptureSource {
    sender: Mutex<Option<mpsc::Sender<CaptureEvent>>>,
    available: AtomicBool,
}

impl Default for ChannelCaptureSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ChannelCaptureSource {
    pub fn new() -> Self {
        Self {
            sender: Mutex::new(None),
            available: AtomicBool::new(true),
        }
    }

    pub fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub async fn is_attached(&self) -> bool {
        self.sender.lock().await.is_some()
    }

    pub async fn emit(&self, event: CaptureEvent) -> Result<(), CaptureError> {
        let sender = self
            .sender
            .lock()
            .await
            .clone()
            .ok_or(CaptureError::NotAttached)?;
        sender.send(event).await.map_err(|_| CaptureError::NotAttached)
    }
}

#[async_trait::async_trait]
impl CaptureSource for ChannelCaptureSource {
    async fn attach(&self) -> Result<mpsc::Receiver<CaptureEvent>, CaptureError> {
        if !self.available.load(Ordering::SeqCst) {
            return Err(CaptureError::Unavailable("no capture device connected".into()));
        }
        let (tx, rx) = mpsc::channel(EVENT_BUFFER);
        *self.sender.lock().await = Some(tx);
        Ok(rx)
    }

    async fn release(&self) {
        self.sender.lock().await.take();
    }
}
