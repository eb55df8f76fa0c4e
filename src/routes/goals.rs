// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Goal routes.

use axum::{
    extract::State,
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::error::Result;
use crate::models::{GoalUpdate, GoalView, NewGoal};
use crate::routes::extract::{AppJson, AppPath};
use crate::routes::{ApiResponse, StatusOnly};
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/goals/{user_id}", get(get_goals).post(create_goal))
        .route(
            "/goals/{user_id}/{goal_id}",
            put(update_goal).delete(delete_goal),
        )
}

async fn create_goal(
    State(state): State<Arc<AppState>>,
    AppPath(user_id): AppPath<u64>,
    AppJson(form): AppJson<NewGoal>,
) -> Result<ApiResponse<GoalView>> {
    Ok(ApiResponse::created(
        state.service.create_goal(user_id, form).await?,
    ))
}

async fn get_goals(
    State(state): State<Arc<AppState>>,
    AppPath(user_id): AppPath<u64>,
) -> Result<ApiResponse<Vec<GoalView>>> {
    Ok(ApiResponse::ok(state.service.get_goals(user_id).await?))
}

async fn update_goal(
    State(state): State<Arc<AppState>>,
    AppPath((user_id, goal_id)): AppPath<(u64, u64)>,
    AppJson(update): AppJson<GoalUpdate>,
) -> Result<ApiResponse<GoalView>> {
    Ok(ApiResponse::ok(
        state.service.update_goal(user_id, goal_id, update).await?,
    ))
}

async fn delete_goal(
    State(state): State<Arc<AppState>>,
    AppPath((user_id, goal_id)): AppPath<(u64, u64)>,
) -> Result<StatusOnly> {
    state.service.delete_goal(user_id, goal_id).await?;
    Ok(StatusOnly::ok())
}
