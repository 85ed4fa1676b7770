mod common;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

async fn send(app: &Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, Value) {
    let mut builder = Request::builder().uri(uri).method(method);
    if body.is_some() {
        builder = builder.header("content-type", "application/json");
    }
    let request = builder
        .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
        .expect("request");

    let response = app.clone().oneshot(request).await.expect("response");
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

const RUN: &str =
    r#"{"kind":"running","coords":[39,-12],"distance":5.2,"duration":24,"cadence":178}"#;
const RIDE: &str =
    r#"{"kind":"cycling","coords":[39,-12],"distance":27,"duration":95,"elevationGain":523}"#;

#[tokio::test]
async fn create_running_workout_returns_pace_and_label() {
    let app = common::app();
    let (status, body) = send(&app, "POST", "/api/workouts", Some(RUN)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["kind"], "running");
    assert!(body["id"].is_string());
    assert!(body["label"].as_str().unwrap().starts_with("Running on "));
    let pace = body["pace"].as_f64().expect("pace");
    assert!((pace - 4.6154).abs() < 1e-4);
    assert_eq!(body["display"]["metric"]["value"], "4.6");
}

#[tokio::test]
async fn list_preserves_insertion_order() {
    let app = common::app();
    send(&app, "POST", "/api/workouts", Some(RUN)).await;
    send(&app, "POST", "/api/workouts", Some(RIDE)).await;

    let (status, body) = send(&app, "GET", "/api/workouts", None).await;
    assert_eq!(status, StatusCode::OK);
    let workouts = body["workouts"].as_array().expect("array");
    assert_eq!(workouts.len(), 2);
    assert_eq!(workouts[0]["kind"], "running");
    assert_eq!(workouts[1]["kind"], "cycling");
    let speed = workouts[1]["speed"].as_f64().expect("speed");
    assert!((speed - 17.0526).abs() < 1e-4);
}

#[tokio::test]
async fn create_rejects_invalid_numbers() {
    let app = common::app();

    let zero_distance =
        r#"{"kind":"running","coords":[39,-12],"distance":0,"duration":24,"cadence":178}"#;
    let (status, body) = send(&app, "POST", "/api/workouts", Some(zero_distance)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("distance"));

    let negative_duration =
        r#"{"kind":"cycling","coords":[39,-12],"distance":10,"duration":-1,"elevationGain":5}"#;
    let (status, _) = send(&app, "POST", "/api/workouts", Some(negative_duration)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let text_cadence =
        r#"{"kind":"running","coords":[39,-12],"distance":5,"duration":24,"cadence":"fast"}"#;
    let (status, _) = send(&app, "POST", "/api/workouts", Some(text_cadence)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, body) = send(&app, "GET", "/api/workouts", None).await;
    assert!(body["workouts"].as_array().expect("array").is_empty());
}

#[tokio::test]
async fn show_returns_map_view_or_not_found() {
    let app = common::app();
    let (_, created) = send(&app, "POST", "/api/workouts", Some(RIDE)).await;
    let id = created["id"].as_str().expect("id");

    let (status, body) = send(&app, "GET", &format!("/api/workouts/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["workout"]["id"], id);
    assert_eq!(body["view"]["center"], serde_json::json!([39.0, -12.0]));
    assert_eq!(body["view"]["zoom"], 12);

    let (status, _) = send(&app, "GET", "/api/workouts/nope", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn delete_resets_and_asks_for_reload() {
    let app = common::app();
    send(&app, "POST", "/api/workouts", Some(RUN)).await;

    let (status, body) = send(&app, "DELETE", "/api/workouts", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["reload"], true);

    let (_, body) = send(&app, "GET", "/api/workouts", None).await;
    assert!(body["workouts"].as_array().expect("array").is_empty());
}

#[tokio::test]
async fn map_settings_expose_zoom_and_tiles() {
    let app = common::app();
    let (status, body) = send(&app, "GET", "/api/map", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["zoomLevel"], 12);
    assert!(body["tileUrl"].as_str().unwrap().contains("{z}"));
}
