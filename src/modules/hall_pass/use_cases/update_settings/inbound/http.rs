use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::hall_pass::core::settings::SettingsPatch;
use crate::shell::state::AppState;

pub async fn get(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.controller.settings().await)
}

pub async fn patch(
    State(state): State<AppState>,
    body: Result<Json<SettingsPatch>, JsonRejection>,
) -> impl IntoResponse {
    let Json(patch) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    match state.controller.update_settings(patch).await {
        Ok(settings) => Json(settings).into_response(),
        Err(e) => e.into_response(),
    }
}
