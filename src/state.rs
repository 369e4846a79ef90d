//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::domain::ShortLinkRegistry;

/// State cloned into every request handler.
///
/// The registry is created once at startup by [`crate::server::run`] and
/// shared by reference count; cloning the state never copies the table.
#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<ShortLinkRegistry>,
    /// Public origin that short URLs are built on, e.g. `https://sho.rt`.
    pub base_url: String,
}

impl AppState {
    pub fn new(registry: Arc<ShortLinkRegistry>, base_url: impl Into<String>) -> Self {
        Self {
            registry,
            base_url: base_url.into(),
        }
    }

    /// Builds the fully-qualified short URL for `code`.
    pub fn short_url(&self, code: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), code)
    }
}
