use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};

use crate::modules::hall_pass::application::errors::ApplicationError;
use crate::shared::infrastructure::capture_source::{CaptureEvent, ScanPurpose};
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ActivateScanBody {
    pub purpose: ScanPurpose,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeactivateScanBody {
    pub was_active: bool,
}

pub async fn activate(
    State(state): State<AppState>,
    body: Result<Json<ActivateScanBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.scans.activate(body.purpose).await {
        Ok(activation) => Json(activation).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn deactivate(State(state): State<AppState>) -> impl IntoResponse {
    let was_active = state.scans.deactivate().await;
    Json(DeactivateScanBody { was_active })
}

pub async fn status(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.scans.status().await)
}

/// Feeds a decoded value to the attached scan, as a capture device would.
pub async fn decoded(
    State(state): State<AppState>,
    body: Result<Json<CaptureEvent>, JsonRejection>,
) -> impl IntoResponse {
    let Json(event) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.capture.emit(event).await {
        Ok(()) => StatusCode::ACCEPTED.into_response(),
        Err(e) => ApplicationError::from(e).into_response(),
    }
}
