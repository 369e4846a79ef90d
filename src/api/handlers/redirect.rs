//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, Uri, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::{debug, error};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// Responds with `302 Found` and the stored URL in the `Location` header.
///
/// # Errors
///
/// Returns 404 Not Found if the short code doesn't exist.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let long_url = state
        .registry
        .resolve(&code)
        .inspect_err(|_| debug!("Short code not found: {}", code))?;

    let location = HeaderValue::from_str(&long_url).map_err(|e| {
        error!("Stored URL for {} is not a valid header value: {}", code, e);
        AppError::internal("Stored URL cannot be redirected to", json!({ "code": code }))
    })?;

    debug!("Redirected {} to {}", code, long_url);

    Ok((StatusCode::FOUND, [(header::LOCATION, location)]).into_response())
}

/// Answers paths that match no route, such as `/` or `/a/b`.
///
/// A short code is always a single path segment, so anything else is
/// reported as a missing link rather than with an empty-body 404.
pub async fn fallback_handler(uri: Uri) -> AppError {
    debug!("No route for {}", uri.path());
    AppError::not_found("Short link not found", json!({ "path": uri.path() }))
}
