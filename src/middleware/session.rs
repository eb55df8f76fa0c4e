// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session token capture.
//!
//! Clients attach the token from register/login to every call. The mock
//! backend never verifies it: the token is only recorded in request
//! extensions and logs, and requests without one are still served.

use axum::{extract::Request, http::header, middleware::Next, response::Response};
use axum_extra::extract::cookie::CookieJar;

/// Cookie name checked when no `Authorization` header is present.
pub const SESSION_COOKIE: &str = "fittrack_token";

/// Token presented by the caller, if any.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub token: Option<String>,
}

fn bearer_token(request: &Request) -> Option<String> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Middleware that records the caller's session token without validating it.
pub async fn capture_session(jar: CookieJar, mut request: Request, next: Next) -> Response {
    // Header first, then cookie
    let token = bearer_token(&request)
        .or_else(|| jar.get(SESSION_COOKIE).map(|c| c.value().to_string()));

    tracing::debug!(
        method = %request.method(),
        path = %request.uri().path(),
        has_token = token.is_some(),
        "Request session"
    );

    request.extensions_mut().insert(Session { token });
    next.run(request).await
}
