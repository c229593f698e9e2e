use axum::{Json, http::StatusCode, response::IntoResponse, response::Response};
use serde::Serialize;

use crate::modules::hall_pass::application::errors::{ApplicationError, ErrorKind};

#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    pub kind: ErrorKind,
}

pub fn status_for(kind: ErrorKind) -> StatusCode {
    match kind {
        ErrorKind::Validation => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Conflict => StatusCode::CONFLICT,
        ErrorKind::Import => StatusCode::BAD_REQUEST,
        ErrorKind::NotFound => StatusCode::NOT_FOUND,
        ErrorKind::Resource => StatusCode::SERVICE_UNAVAILABLE,
        ErrorKind::Storage => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl IntoResponse for ApplicationError {
    fn into_response(self) -> Response {
        let kind = self.kind();
        let body = ErrorBody {
            error: self.to_string(),
            kind,
        };
        (status_for(kind), Json(body)).into_response()
    }
}
