//! Cross-origin policy for the browser frontend.

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;

/// Creates a CORS layer that admits only the given origins.
///
/// The frontend calls `POST /shorten` with a JSON body and follows redirects
/// with `GET`, so only those methods (plus the `OPTIONS` preflight) and the
/// `Content-Type` header are allowed. Credentials are permitted, which is why
/// the origin list may never be a wildcard.
///
/// Origins that are not valid header values are skipped with a warning;
/// [`crate::config::Config::validate`] rejects them before this point in
/// normal startup.
pub fn layer(allowed_origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
