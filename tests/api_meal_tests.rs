// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Meal logging tests.

use axum::http::StatusCode;
use serde_json::json;
use tower::ServiceExt;

mod common;

use common::{body_json, create_seeded_test_app, empty_request, json_request};

#[tokio::test]
async fn test_log_meal() {
    let (app, _) = create_seeded_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/meals/1",
            json!({
                "type": "lunch",
                "date": "2026-03-15",
                "food": "Salad",
                "calories": 400,
                "protein": 20,
                "carbs": 30,
                "fat": 10
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["status"], 201);
    let data = &body["data"];
    assert_eq!(data["mealId"], 2);
    assert_eq!(data["userId"], 1);
    assert_eq!(data["type"], "lunch");
    assert_eq!(data["food"], "Salad");
    assert_eq!(data["calories"], 400);
    assert_eq!(data["protein"], 20.0);
}

#[tokio::test]
async fn test_log_meal_defaults_date_to_today() {
    let (app, _) = create_seeded_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/meals/1",
            json!({ "type": "dinner", "food": "Soup" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let data = body_json(response).await["data"].clone();
    assert_eq!(data["date"], common::test_today().to_string());
    assert_eq!(data["calories"], 0);
}

#[tokio::test]
async fn test_log_meal_missing_food() {
    let (app, _) = create_seeded_test_app();

    let response = app
        .oneshot(json_request("POST", "/meals/1", json!({ "type": "lunch" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Missing meal type or food");
}

#[tokio::test]
async fn test_log_meal_unknown_user() {
    let (app, _) = create_seeded_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/meals/5",
            json!({ "type": "lunch", "food": "Salad" }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_meals_filtered_by_date() {
    let (app, _) = create_seeded_test_app();

    app.clone()
        .oneshot(json_request(
            "POST",
            "/meals/1",
            json!({ "type": "dinner", "date": "2026-03-10", "food": "Pasta", "calories": 700 }),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/meals/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 2);

    let response = app
        .clone()
        .oneshot(empty_request("GET", "/meals/1?date=2026-03-10"))
        .await
        .unwrap();
    let data = body_json(response).await["data"].clone();
    let meals = data.as_array().unwrap();
    assert_eq!(meals.len(), 1);
    assert_eq!(meals[0]["food"], "Pasta");

    let response = app
        .oneshot(empty_request("GET", "/meals/1?date=2026-01-01"))
        .await
        .unwrap();
    assert_eq!(body_json(response).await["data"], json!([]));
}

#[tokio::test]
async fn test_get_meals_invalid_date() {
    let (app, _) = create_seeded_test_app();

    let response = app
        .oneshot(empty_request("GET", "/meals/1?date=yesterday"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["status"], 400);
}

#[tokio::test]
async fn test_delete_meal() {
    let (app, _) = create_seeded_test_app();

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/meals/1/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({ "status": 200 }));

    let response = app
        .clone()
        .oneshot(empty_request("DELETE", "/meals/1/1"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["error"], "Meal not found");

    let response = app.oneshot(empty_request("GET", "/meals/1")).await.unwrap();
    assert_eq!(body_json(response).await["data"], json!([]));
}
