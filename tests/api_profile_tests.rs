// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile, picture and preference tests.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

mod common;

use common::{body_json, create_seeded_test_app, empty_request, json_request};

#[tokio::test]
async fn test_get_profile() {
    let (app, _) = create_seeded_test_app();

    let response = app.oneshot(empty_request("GET", "/users/1")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], 200);
    let data = &body["data"];
    assert_eq!(data["userId"], 1);
    assert_eq!(data["email"], "john@example.com");
    assert_eq!(data["dateOfBirth"], "1990-05-15");
    assert_eq!(data["profilePictureUrl"], "/media/avatars/default.png");
    assert!(data.get("password").is_none());
}

#[tokio::test]
async fn test_get_profile_unknown_user() {
    let (app, _) = create_seeded_test_app();

    let response = app.oneshot(empty_request("GET", "/users/99")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body, json!({ "error": "User not found", "status": 404 }));
}

#[tokio::test]
async fn test_update_profile_partial() {
    let (app, _) = create_seeded_test_app();

    let response = app
        .clone()
        .oneshot(json_request("POST", "/users/1", json!({ "weight": 72.5 })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["weight"], 72.5);
    assert_eq!(data["height"], 180.0);
    assert_eq!(data["fullName"], "John Doe");

    // The change is visible on the next read
    let response = app.oneshot(empty_request("GET", "/users/1")).await.unwrap();
    assert_eq!(body_json(response).await["data"]["weight"], 72.5);
}

#[tokio::test]
async fn test_update_profile_ignores_email_and_empty_name() {
    let (app, _) = create_seeded_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/users/1",
            json!({ "fullName": "", "email": "changed@example.com" }),
        ))
        .await
        .unwrap();

    let data = body_json(response).await["data"].clone();
    assert_eq!(data["fullName"], "John Doe");
    assert_eq!(data["email"], "john@example.com");
}

#[tokio::test]
async fn test_upload_profile_picture() {
    let (app, _) = create_seeded_test_app();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/users/1/uploadProfilePicture")
                .header("content-type", "image/png")
                .body(Body::from(vec![0x89, b'P', b'N', b'G']))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let url = body_json(response).await["data"]["profilePictureUrl"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(url.starts_with("/media/avatars/avatar_1_"), "url = {url}");

    let response = app.oneshot(empty_request("GET", "/users/1")).await.unwrap();
    assert_eq!(body_json(response).await["data"]["profilePictureUrl"], url);
}

#[tokio::test]
async fn test_upload_profile_picture_requires_file() {
    let (app, _) = create_seeded_test_app();

    let response = app
        .oneshot(empty_request("POST", "/users/1/uploadProfilePicture"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "No file provided");
}

#[tokio::test]
async fn test_preferences_default_and_merge() {
    let (app, _) = create_seeded_test_app();

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/users/1/preferences"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], json!({ "theme": "light" }));

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/users/1/preferences",
            json!({ "units": "metric" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        body_json(response).await["data"],
        json!({ "theme": "light", "units": "metric" })
    );

    let response = app
        .oneshot(json_request(
            "POST",
            "/users/1/preferences",
            json!({ "theme": "dark" }),
        ))
        .await
        .unwrap();
    assert_eq!(
        body_json(response).await["data"],
        json!({ "theme": "dark", "units": "metric" })
    );
}

#[tokio::test]
async fn test_preferences_unknown_user() {
    let (app, _) = create_seeded_test_app();

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/users/42/preferences"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app
        .oneshot(json_request(
            "POST",
            "/users/42/preferences",
            json!({ "theme": "dark" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
