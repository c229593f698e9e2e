use axum::{
    Json,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use chrono::Local;

use crate::modules::hall_pass::core::ledger::export_filename;
use crate::shell::state::AppState;

pub async fn list(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.controller.logs().await)
}

pub async fn delete(State(state): State<AppState>, Path(index): Path<usize>) -> impl IntoResponse {
    match state.controller.delete_log_entry(index).await {
        Ok(entry) => Json(entry).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn export(State(state): State<AppState>) -> impl IntoResponse {
    let csv = match state.controller.export_logs(&Local).await {
        Ok(csv) => csv,
        Err(e) => return e.into_response(),
    };
    let disposition = format!(
        "attachment; filename=\"{}\"",
        export_filename(Local::now().date_naive())
    );
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response()
}
