// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Registration and login routes.

use axum::{extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::error::Result;
use crate::models::user::{Credentials, Registration};
use crate::models::AuthSession;
use crate::routes::extract::AppJson;
use crate::routes::serialize_status;
use crate::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/auth/register", post(register))
        .route("/auth/login", post(login))
}

/// Auth responses put the session fields at the top level next to `status`.
#[derive(Serialize)]
pub struct AuthResponse {
    #[serde(flatten)]
    pub session: AuthSession,
    #[serde(serialize_with = "serialize_status")]
    pub status: StatusCode,
}

fn respond(session: AuthSession, status: StatusCode) -> impl IntoResponse {
    (
        status,
        Json(AuthResponse { session, status }),
    )
}

async fn register(
    State(state): State<Arc<AppState>>,
    AppJson(form): AppJson<Registration>,
) -> Result<impl IntoResponse> {
    let session = state.service.register(form).await?;
    Ok(respond(session, StatusCode::CREATED))
}

async fn login(
    State(state): State<Arc<AppState>>,
    AppJson(credentials): AppJson<Credentials>,
) -> Result<impl IntoResponse> {
    let session = state.service.login(credentials).await?;
    Ok(respond(session, StatusCode::OK))
}
