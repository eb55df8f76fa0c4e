// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::body::Body;
use axum::http::{header, Request, Response};
use chrono::NaiveDate;
use fittrack::config::Config;
use fittrack::routes::create_router;
use fittrack::services::Clock;
use fittrack::AppState;
use serde_json::Value;
use std::sync::Arc;

/// Date every test app treats as "today".
#[allow(dead_code)]
pub fn test_today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 15).unwrap()
}

/// Create a test app with no latency, an empty store and a fixed clock.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    app_with_config(Config::test_default())
}

/// Same as [`create_test_app`] but with the demo account seeded.
#[allow(dead_code)]
pub fn create_seeded_test_app() -> (axum::Router, Arc<AppState>) {
    app_with_config(Config {
        seed_demo_data: true,
        ..Config::test_default()
    })
}

fn app_with_config(config: Config) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::with_clock(config, Clock::Fixed(test_today())));
    (create_router(state.clone()), state)
}

/// Build a request with a JSON body.
#[allow(dead_code)]
pub fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

/// Build a body-less request.
#[allow(dead_code)]
pub fn empty_request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub const BOUNDARY: &str = "fittrack-test-boundary";

/// Build a multipart/form-data request. `file` is sent as the `file` part
/// when present; `fields` become plain text parts.
#[allow(dead_code)]
pub fn multipart_request(uri: &str, file: Option<&[u8]>, fields: &[(&str, &str)]) -> Request<Body> {
    let mut body = Vec::new();
    if let Some(bytes) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"file\"; filename=\"run.png\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    for (name, value) in fields {
        body.extend_from_slice(
            format!("--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n")
                .as_bytes(),
        );
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

    Request::builder()
        .method("POST")
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap()
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// Register an account and return its user id.
#[allow(dead_code)]
pub async fn register_user(app: &axum::Router, email: &str) -> u64 {
    use tower::ServiceExt;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/auth/register",
            serde_json::json!({
                "fullName": "Test User",
                "email": email,
                "password": "secret",
                "dateOfBirth": "1992-04-01",
                "height": 170,
                "weight": 65
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), 201);
    body_json(response).await["userId"].as_u64().unwrap()
}
