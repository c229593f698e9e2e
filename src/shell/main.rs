use std::sync::Arc;

use anyhow::Context;
use hall_pass::modules::hall_pass::application::controller::SessionController;
use hall_pass::shared::core::clock::SystemClock;
use hall_pass::shared::infrastructure::capture_source::channel::ChannelCaptureSource;
use hall_pass::shared::infrastructure::persistent_store::json_file::JsonFileStore;
use hall_pass::shell::config::AppConfig;
use hall_pass::shell::http;
use hall_pass::shell::state::AppState;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let config = AppConfig::from_env()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_filter))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store = JsonFileStore::open(config.data_dir.clone())
        .await
        .with_context(|| format!("cannot open data dir {}", config.data_dir.display()))?;
    let controller = SessionController::load(Arc::new(store), Arc::new(SystemClock))
        .await
        .context("persisted state could not be loaded")?;

    let state = AppState::new(Arc::new(controller), Arc::new(ChannelCaptureSource::new()));
    let app = http::router(state);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("cannot bind {}", config.bind_addr))?;
    info!(addr = %config.bind_addr, data_dir = %config.data_dir.display(), "hall pass station listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
        })
        .await?;
    Ok(())
}
