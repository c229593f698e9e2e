use crate::modules::hall_pass::application::controller::SessionController;
use crate::shared::infrastructure::capture_source::channel::ChannelCaptureSource;
use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::app_state::make_test_app;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;
use tower::ServiceExt;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, String) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    let (status, text) = send(app, request).await;
    let json = if text.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(&text).unwrap()
    };
    (status, json)
}

async fn get_json(app: &Router, uri: &str) -> Value {
    let (status, text) = send(app, Request::get(uri).body(Body::empty()).unwrap()).await;
    assert_eq!(status, StatusCode::OK);
    serde_json::from_str(&text).unwrap()
}

async fn import_roster(app: &Router, csv: &str) -> (StatusCode, Value) {
    let request = Request::post("/roster/import")
        .header("content-type", "text/csv")
        .body(Body::from(csv.to_string()))
        .unwrap();
    let (status, text) = send(app, request).await;
    (status, serde_json::from_str(&text).unwrap())
}

async fn export_roster(app: &Router) -> String {
    let (status, text) = send(
        app,
        Request::get("/roster/export").body(Body::empty()).unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    text
}

#[tokio::test]
async fn verified_station_rejects_missing_and_mismatched_location_scans() {
    let test_app = make_test_app().await;
    let app = router(test_app.state);

    let request = Request::patch("/settings")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"requireQR":true}"#))
        .unwrap();
    assert_eq!(send(&app, request).await.0, StatusCode::OK);

    let (status, body) = post_json(&app, "/start-pass", json!({ "id": "1001" })).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["kind"], "validation");
    assert_eq!(body["error"], "this station requires a location scan");

    let (status, session) = post_json(
        &app,
        "/start-pass",
        json!({ "id": "1001", "locationToken": "QR-A" }),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(session["locationToken"], "QR-A");

    test_app.clock.advance(240_000);
    let (status, body) = post_json(
        &app,
        "/end-pass",
        json!({ "id": "1001", "locationToken": "QR-B" }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["kind"], "conflict");
    assert_eq!(get_json(&app, "/status").await["occupied"], true);

    let (status, entry) = post_json(
        &app,
        "/end-pass",
        json!({ "id": "1001", "locationToken": "QR-A" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(entry["id"], "1001");
    assert_eq!(entry["durationMs"], 240_000);

    let logs = get_json(&app, "/logs").await;
    assert_eq!(logs.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn unknown_identifier_starts_a_pass_as_unknown() {
    let test_app = make_test_app().await;
    let app = router(test_app.state);
    let request = Request::patch("/settings")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"requireQR":"1"}"#))
        .unwrap();
    send(&app, request).await;

    let (status, session) = post_json(
        &app,
        "/start-pass",
        json!({ "id": "9999", "locationToken": "QR-A" }),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(session["name"], "Unknown");
}

#[tokio::test]
async fn roster_import_keeps_the_later_duplicate_and_survives_export() {
    let test_app = make_test_app().await;
    let app = router(test_app.state);

    let (status, summary) =
        import_roster(&app, "id,name\n1001,Alice\n1002,Bob\n1001,Alicia\n").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(summary["imported"], 2);
    assert_eq!(get_json(&app, "/status").await["rosterSize"], 2);

    let exported = export_roster(&app).await;
    assert_eq!(exported, "id,name\n1001,Alicia\n1002,Bob\n");

    let request = Request::delete("/roster").body(Body::empty()).unwrap();
    assert_eq!(send(&app, request).await.0, StatusCode::NO_CONTENT);
    import_roster(&app, &exported).await;
    assert_eq!(export_roster(&app).await, exported);

    let (_, session) = post_json(&app, "/start-pass", json!({ "id": "1001" })).await;
    assert_eq!(session["name"], "Alicia");
}

#[tokio::test]
async fn names_with_commas_and_quotes_survive_a_roster_round_trip() {
    let test_app = make_test_app().await;
    let app = router(test_app.state);
    import_roster(&app, "id,name\n7,\"O\"\"Neil, Pat\"\n").await;

    let exported = export_roster(&app).await;
    let request = Request::delete("/roster").body(Body::empty()).unwrap();
    send(&app, request).await;
    import_roster(&app, &exported).await;

    let (_, session) = post_json(&app, "/start-pass", json!({ "id": "7" })).await;
    assert_eq!(session["name"], "O\"Neil, Pat");
}

#[tokio::test]
async fn ledger_lists_newest_first_and_deletes_by_position() {
    let test_app = make_test_app().await;
    let app = router(test_app.state);

    for id in ["e1", "e2"] {
        post_json(&app, "/start-pass", json!({ "id": id })).await;
        test_app.clock.advance(10_000);
        post_json(&app, "/end-pass", json!({ "id": id })).await;
    }
    let ids: Vec<Value> = get_json(&app, "/logs")
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["id"].clone())
        .collect();
    assert_eq!(ids, vec![json!("e2"), json!("e1")]);

    let request = Request::delete("/logs/0").body(Body::empty()).unwrap();
    let (status, _) = send(&app, request).await;
    assert_eq!(status, StatusCode::OK);
    let logs = get_json(&app, "/logs").await;
    assert_eq!(logs.as_array().unwrap().len(), 1);
    assert_eq!(logs[0]["id"], "e1");
}

#[tokio::test]
async fn an_active_pass_survives_a_restart() {
    let test_app = make_test_app().await;
    let app = router(test_app.state);
    post_json(&app, "/start-pass", json!({ "id": "1001" })).await;

    let controller = SessionController::load(test_app.store.clone(), test_app.clock.clone())
        .await
        .unwrap();
    let restarted = router(AppState::new(
        Arc::new(controller),
        Arc::new(ChannelCaptureSource::new()),
    ));
    test_app.clock.advance(5_000);

    let status = get_json(&restarted, "/status").await;
    assert_eq!(status["occupied"], true);
    assert_eq!(status["session"]["id"], "1001");
    assert_eq!(status["elapsedMs"], 5_000);
}

#[tokio::test]
async fn scanned_location_then_identifier_completes_a_verified_pass() {
    let test_app = make_test_app().await;
    let capture = test_app.state.capture.clone();
    let app = router(test_app.state);
    let request = Request::patch("/settings")
        .header("content-type", "application/json")
        .body(Body::from(r#"{"requireQR":true}"#))
        .unwrap();
    send(&app, request).await;

    let (status, _) = post_json(&app, "/scan/activate", json!({ "purpose": "start" })).await;
    assert_eq!(status, StatusCode::OK);
    post_json(
        &app,
        "/scan/decoded",
        json!({ "kind": "location", "value": "QR-A" }),
    )
    .await;
    post_json(
        &app,
        "/scan/decoded",
        json!({ "kind": "identifier", "value": "1001" }),
    )
    .await;

    let mut status = Value::Null;
    for _ in 0..100 {
        status = get_json(&app, "/status").await;
        let scan = get_json(&app, "/scan").await;
        if status["occupied"] == true && scan["active"].is_null() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert_eq!(status["occupied"], true);
    assert_eq!(status["session"]["locationToken"], "QR-A");
    assert!(!capture.is_attached().await);
    assert!(get_json(&app, "/scan").await["active"].is_null());
}
