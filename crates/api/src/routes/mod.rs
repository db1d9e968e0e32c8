//! HTTP route handlers.

pub mod ping;

use axum::http::{Method, Uri};

use crate::error::ApiError;

/// Handles every request that matches no registered route.
pub async fn fallback(method: Method, uri: Uri) -> ApiError {
    ApiError::NotFound(format!("no route for {method} {}", uri.path()))
}
