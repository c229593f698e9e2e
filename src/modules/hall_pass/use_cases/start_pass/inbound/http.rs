use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::hall_pass::use_cases::start_pass::command::StartPass;
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PassRequestBody {
    pub id: String,
    #[serde(default)]
    pub location_token: Option<String>,
}

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<PassRequestBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = StartPass::new(&body.id, body.location_token.as_deref());
    match state.controller.start_pass(command).await {
        Ok(session) => (StatusCode::CREATED, Json(session)).into_response(),
        Err(e) => e.into_response(),
    }
}
