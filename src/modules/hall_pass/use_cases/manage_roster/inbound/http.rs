use axum::{
    Json,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Serialize;

use crate::shell::state::AppState;

#[derive(Serialize)]
pub struct ImportSummary {
    pub imported: usize,
}

pub async fn import(State(state): State<AppState>, body: String) -> impl IntoResponse {
    match state.controller.import_roster(&body).await {
        Ok(imported) => Json(ImportSummary { imported }).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn export(State(state): State<AppState>) -> impl IntoResponse {
    match state.controller.export_roster().await {
        Ok(csv) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "text/csv; charset=utf-8")],
            csv,
        )
            .into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn clear(State(state): State<AppState>) -> impl IntoResponse {
    match state.controller.clear_roster().await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod manage_roster_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::{delete, get, post},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::shell::state::AppState;
    use crate::tests::fixtures::app_state::make_test_app;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/roster/import", post(super::import))
            .route("/roster/export", get(super::export))
            .route("/roster", delete(super::clear))
            .with_state(state)
    }

    fn import_request(body: &'static str) -> Request<Body> {
        Request::post("/roster/import")
            .header("content-type", "text/csv")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_import_rows_and_report_the_count() {
        let test_app = make_test_app().await;
        let controller = test_app.state.controller.clone();

        let response = app(test_app.state)
            .oneshot(import_request("id,name\n1001,Alice\n1002,Bob\n"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["imported"], 2);
        assert_eq!(controller.status().await.roster_size, 2);
    }

    #[tokio::test]
    async fn it_should_return_400_when_columns_are_missing() {
        let test_app = make_test_app().await;
        let controller = test_app.state.controller.clone();
        controller.import_roster("id,name\n1001,Alice\n").await.unwrap();

        let response = app(test_app.state)
            .oneshot(import_request("student,label\n1,x\n"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["kind"], "import");
        assert_eq!(controller.status().await.roster_size, 1);
    }

    #[tokio::test]
    async fn it_should_export_sorted_csv() {
        let test_app = make_test_app().await;
        test_app
            .state
            .controller
            .import_roster("id,name\n2,Bob\n1,Alice\n")
            .await
            .unwrap();

        let response = app(test_app.state)
            .oneshot(Request::get("/roster/export").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(
            String::from_utf8(bytes.to_vec()).unwrap(),
            "id,name\n1,Alice\n2,Bob\n"
        );
    }

    #[tokio::test]
    async fn it_should_clear_the_roster() {
        let test_app = make_test_app().await;
        let controller = test_app.state.controller.clone();
        controller.import_roster("id,name\n1,Alice\n").await.unwrap();

        let response = app(test_app.state)
            .oneshot(Request::delete("/roster").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(controller.status().await.roster_size, 0);
    }
}
