//! Handler for link shortening endpoint.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde_json::json;
use tracing::{info, warn};
use validator::Validate;

use crate::api::dto::shorten::{ShortenRequest, ShortenResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link for a long URL.
///
/// # Endpoint
///
/// `POST /shorten`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "code": "aZ3k9Q",
///   "short_url": "https://sho.rt/aZ3k9Q"
/// }
/// ```
///
/// # Errors
///
/// - 400 Bad Request if the body is not valid JSON, the URL is empty, too long,
///   or does not start with `http://` / `https://`
/// - 503 Service Unavailable if no free short code could be allocated
pub async fn shorten_handler(
    State(state): State<AppState>,
    payload: Result<Json<ShortenRequest>, JsonRejection>,
) -> Result<Json<ShortenResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        warn!("Error decoding request body: {}", rejection.body_text());
        AppError::bad_request(
            "Invalid request body",
            json!({ "reason": rejection.body_text() }),
        )
    })?;

    payload.validate()?;

    let code = state.registry.create(&payload.url)?;
    let short_url = state.short_url(&code);

    info!(long_url = %payload.url, short_url = %short_url, "Shortened URL");

    Ok(Json(ShortenResponse { code, short_url }))
}
