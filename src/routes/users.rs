// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Profile and preference routes.

use axum::{
    body::Bytes,
    extract::{DefaultBodyLimit, State},
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;

use crate::error::Result;
use crate::models::user::ProfileUpdate;
use crate::models::{Preferences, Profile};
use crate::routes::extract::{AppJson, AppPath};
use crate::routes::ApiResponse;
use crate::AppState;

/// Largest accepted profile picture upload.
const MAX_PICTURE_BYTES: usize = 10 * 1024 * 1024;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/users/{id}", get(get_profile).post(update_profile))
        .route(
            "/users/{id}/uploadProfilePicture",
            post(upload_profile_picture).layer(DefaultBodyLimit::max(MAX_PICTURE_BYTES)),
        )
        .route(
            "/users/{id}/preferences",
            get(get_preferences).post(update_preferences),
        )
}

async fn get_profile(
    State(state): State<Arc<AppState>>,
    AppPath(user_id): AppPath<u64>,
) -> Result<ApiResponse<Profile>> {
    Ok(ApiResponse::ok(state.service.get_profile(user_id).await?))
}

async fn update_profile(
    State(state): State<Arc<AppState>>,
    AppPath(user_id): AppPath<u64>,
    AppJson(update): AppJson<ProfileUpdate>,
) -> Result<ApiResponse<Profile>> {
    Ok(ApiResponse::ok(
        state.service.update_profile(user_id, update).await?,
    ))
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PictureResponse {
    pub profile_picture_url: String,
}

/// The request body is the raw image.
async fn upload_profile_picture(
    State(state): State<Arc<AppState>>,
    AppPath(user_id): AppPath<u64>,
    body: Bytes,
) -> Result<ApiResponse<PictureResponse>> {
    let profile_picture_url = state.service.upload_profile_picture(user_id, &body).await?;
    Ok(ApiResponse::ok(PictureResponse {
        profile_picture_url,
    }))
}

async fn get_preferences(
    State(state): State<Arc<AppState>>,
    AppPath(user_id): AppPath<u64>,
) -> Result<ApiResponse<Preferences>> {
    Ok(ApiResponse::ok(state.service.get_preferences(user_id).await?))
}

async fn update_preferences(
    State(state): State<Arc<AppState>>,
    AppPath(user_id): AppPath<u64>,
    AppJson(patch): AppJson<Preferences>,
) -> Result<ApiResponse<Preferences>> {
    Ok(ApiResponse::ok(
        state.service.update_preferences(user_id, patch).await?,
    ))
}
