use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::hall_pass::use_cases::end_pass::command::EndPass;
use crate::modules::hall_pass::use_cases::start_pass::inbound::http::PassRequestBody;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<PassRequestBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };

    let command = EndPass::new(&body.id, body.location_token.as_deref());
    match state.controller.end_pass(command).await {
        Ok(entry) => Json(entry).into_response(),
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
mod end_pass_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::post,
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    use crate::modules::hall_pass::use_cases::start_pass::command::StartPass;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::app_state::make_test_app;

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/end-pass", post(handle))
            .with_state(state)
    }

    fn request(body: &'static str) -> Request<Body> {
        Request::post("/end-pass")
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    #[tokio::test]
    async fn it_should_return_200_with_the_log_entry() {
        let test_app = make_test_app().await;
        test_app
            .state
            .controller
            .start_pass(StartPass::new("1001", None::<&str>))
            .await
            .unwrap();
        test_app.clock.advance(45_000);

        let response = app(test_app.state)
            .oneshot(request(r#"{"id":"1001"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["id"], "1001");
        assert_eq!(json["durationMs"], 45_000);
        assert_eq!(json["locationName"], "Restroom");
    }

    #[tokio::test]
    async fn it_should_return_409_when_the_pass_is_not_out() {
        let test_app = make_test_app().await;

        let response = app(test_app.state)
            .oneshot(request(r#"{"id":"1001"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
    }

    #[tokio::test]
    async fn it_should_return_409_for_a_different_identifier() {
        let test_app = make_test_app().await;
        test_app
            .state
            .controller
            .start_pass(StartPass::new("A", None::<&str>))
            .await
            .unwrap();
        let controller = test_app.state.controller.clone();

        let response = app(test_app.state)
            .oneshot(request(r#"{"id":"B"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::CONFLICT);
        assert!(controller.status().await.occupied);
    }

    #[tokio::test]
    async fn it_should_return_422_when_the_identifier_is_blank() {
        let test_app = make_test_app().await;
        test_app
            .state
            .controller
            .start_pass(StartPass::new("1001", None::<&str>))
            .await
            .unwrap();

        let response = app(test_app.state)
            .oneshot(request(r#"{"id":"   "}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
