// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout upload and record routes.

use axum::{
    extract::{DefaultBodyLimit, State},
    routing::get,
    Router,
};
use std::sync::Arc;

use crate::error::{AppError, Result};
use crate::models::{Workout, WorkoutUpload};
use crate::routes::extract::{AppMultipart, AppPath};
use crate::routes::{ApiResponse, StatusOnly};
use crate::AppState;

/// Largest accepted workout file (screenshots and PDF exports).
const MAX_UPLOAD_BYTES: usize = 20 * 1024 * 1024;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/workouts/{user_id}",
            get(get_workouts)
                .post(upload_workout)
                .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES)),
        )
        .route(
            "/workouts/{user_id}/{workout_id}",
            get(get_workout).delete(delete_workout),
        )
}

fn multipart_error(e: axum::extract::multipart::MultipartError) -> AppError {
    AppError::BadRequest(format!("Malformed upload: {}", e))
}

/// POST /workouts/{user_id} (multipart)
/// Fields: `file` (the workout image/PDF), `date` (YYYY-MM-DD), `location`.
async fn upload_workout(
    State(state): State<Arc<AppState>>,
    AppPath(user_id): AppPath<u64>,
    AppMultipart(mut multipart): AppMultipart,
) -> Result<ApiResponse<Workout>> {
    let mut file = Vec::new();
    let mut form = WorkoutUpload::default();

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("file") => file = field.bytes().await.map_err(multipart_error)?.to_vec(),
            Some("date") => form.date = Some(field.text().await.map_err(multipart_error)?),
            Some("location") => {
                form.location = Some(field.text().await.map_err(multipart_error)?)
            }
            other => tracing::debug!(field = ?other, "Ignoring unknown upload field"),
        }
    }

    let workout = state.service.upload_workout(user_id, &file, form).await?;
    Ok(ApiResponse::created(workout))
}

async fn get_workouts(
    State(state): State<Arc<AppState>>,
    AppPath(user_id): AppPath<u64>,
) -> Result<ApiResponse<Vec<Workout>>> {
    Ok(ApiResponse::ok(state.service.get_workouts(user_id).await?))
}

async fn get_workout(
    State(state): State<Arc<AppState>>,
    AppPath((user_id, workout_id)): AppPath<(u64, u64)>,
) -> Result<ApiResponse<Workout>> {
    Ok(ApiResponse::ok(
        state.service.get_workout_by_id(user_id, workout_id).await?,
    ))
}

async fn delete_workout(
    State(state): State<Arc<AppState>>,
    AppPath((user_id, workout_id)): AppPath<(u64, u64)>,
) -> Result<StatusOnly> {
    state.service.delete_workout(user_id, workout_id).await?;
    Ok(StatusOnly::ok())
}
