// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Dashboard aggregate routes.

use axum::{
    extract::State,
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::error::Result;
use crate::models::{DashboardStats, TrendRecord};
use crate::routes::extract::AppPath;
use crate::routes::ApiResponse;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/dashboard/{user_id}/stats", get(get_stats))
        .route("/dashboard/{user_id}/weekly", get(get_weekly))
}

async fn get_stats(
    State(state): State<Arc<AppState>>,
    AppPath(user_id): AppPath<u64>,
) -> Result<ApiResponse<DashboardStats>> {
    tracing::debug!(user_id, "Fetching dashboard stats");
    Ok(ApiResponse::ok(
        state.service.get_dashboard_stats(user_id).await?,
    ))
}

async fn get_weekly(
    State(state): State<Arc<AppState>>,
    AppPath(user_id): AppPath<u64>,
) -> Result<ApiResponse<Vec<TrendRecord>>> {
    tracing::debug!(user_id, "Fetching weekly trends");
    Ok(ApiResponse::ok(state.service.get_weekly_trends(user_id).await?))
}
