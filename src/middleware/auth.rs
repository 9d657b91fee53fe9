//! Presence-only bearer gate.
//!
//! The token itself is never inspected: any non-blank `Authorization` value is
//! let through. Paths under [`AuthConfig::public_path_prefixes`] skip the check.

use anyhow::anyhow;
use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::warn;
use usermgmt_config::AuthConfig;

use crate::utils::errors::{AppError, UNAUTHORIZED_MESSAGE};

pub fn has_credentials(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::AUTHORIZATION)
        .iter()
        .any(|value| !String::from_utf8_lossy(value.as_bytes()).trim().is_empty())
}

pub async fn require_bearer(
    State(config): State<AuthConfig>,
    req: Request,
    next: Next,
) -> Response {
    if config.is_public_path(req.uri().path()) {
        return next.run(req).await;
    }

    if !has_credentials(req.headers()) {
        warn!(
            method = %req.method(),
            path = %req.uri().path(),
            "Unauthorized request"
        );
        return AppError::unauthorized(anyhow!(UNAUTHORIZED_MESSAGE)).into_response();
    }

    next.run(req).await
}
