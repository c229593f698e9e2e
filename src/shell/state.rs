use crate::modules::hall_pass::application::controller::SessionController;
use crate::modules::hall_pass::application::scan::ScanCoordinator;
use crate::shared::infrastructure::capture_source::channel::ChannelCaptureSource;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub controller: Arc<SessionController>,
    pub scans: Arc<ScanCoordinator>,
    pub capture: Arc<ChannelCaptureSource>,
}

impl AppState {
    pub fn new(controller: Arc<SessionController>, capture: Arc<ChannelCaptureSource>) -> Self {
        let scans = Arc::new(ScanCoordinator::new(capture.clone(), controller.clone()));
        Self {
            controller,
            scans,
            capture,
        }
    }
}
