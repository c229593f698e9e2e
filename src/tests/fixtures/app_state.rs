use crate::modules::hall_pass::application::controller::SessionController;
use crate::shared::infrastructure::capture_source::channel::ChannelCaptureSource;
use crate::shared::infrastructure::persistent_store::in_memory::InMemoryPersistentStore;
use crate::shell::state::AppState;
use crate::tests::fixtures::clock::ManualClock;
use std::sync::Arc;

pub const TEST_T0: i64 = 1_700_000_000_000;

pub struct TestApp {
    pub state: AppState,
    pub store: Arc<InMemoryPersistentStore>,
    pub clock: Arc<ManualClock>,
}

pub async fn make_test_app() -> TestApp {
    let store = Arc::new(InMemoryPersistentStore::new());
    let clock = Arc::new(ManualClock::at(TEST_T0));
    let controller = Arc::new(
        SessionController::load(store.clone(), clock.clone())
            .await
            .expect("load failed"),
    );
    let state = AppState::new(controller, Arc::new(ChannelCaptureSource::new()));
    TestApp {
        state,
        store,
        clock,
    }
}
