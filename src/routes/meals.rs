// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Meal logging routes.

use axum::{
    extract::State,
    routing::{delete, get},
    Router,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{Meal, NewMeal};
use crate::routes::extract::{AppJson, AppPath, AppQuery};
use crate::routes::{ApiResponse, StatusOnly};
use crate::time_utils::parse_date;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/meals/{user_id}", get(get_meals).post(log_meal))
        .route("/meals/{user_id}/{meal_id}", delete(delete_meal))
}

#[derive(Deserialize)]
struct MealsQuery {
    /// Only meals on this date (YYYY-MM-DD)
    date: Option<String>,
}

async fn log_meal(
    State(state): State<Arc<AppState>>,
    AppPath(user_id): AppPath<u64>,
    AppJson(form): AppJson<NewMeal>,
) -> Result<ApiResponse<Meal>> {
    Ok(ApiResponse::created(
        state.service.log_meal(user_id, form).await?,
    ))
}

async fn get_meals(
    State(state): State<Arc<AppState>>,
    AppPath(user_id): AppPath<u64>,
    AppQuery(params): AppQuery<MealsQuery>,
) -> Result<ApiResponse<Vec<Meal>>> {
    let date = params
        .date
        .as_deref()
        .filter(|raw| !raw.trim().is_empty())
        .map(|raw| {
            parse_date(raw).ok_or_else(|| {
                AppError::BadRequest("Invalid 'date' parameter: must be YYYY-MM-DD".to_string())
            })
        })
        .transpose()?;

    Ok(ApiResponse::ok(state.service.get_meals(user_id, date).await?))
}

async fn delete_meal(
    State(state): State<Arc<AppState>>,
    AppPath((user_id, meal_id)): AppPath<(u64, u64)>,
) -> Result<StatusOnly> {
    state.service.delete_meal(user_id, meal_id).await?;
    Ok(StatusOnly::ok())
}
