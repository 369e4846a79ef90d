//! # Shortlink
//!
//! An in-memory URL shortening service built with Axum.
//!
//! Long URLs are mapped to short random codes drawn from the 62 ASCII
//! alphanumerics; requesting a code redirects to the stored URL. All state
//! lives in process memory and is discarded on restart.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - The short-link registry and code generator
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//! - [`routes`] / [`server`] - Router composition and process bootstrap
//!
//! ## Quick Start
//!
//! ```bash
//! export PUBLIC_BASE_URL="http://localhost:8080"
//! cargo run
//!
//! curl -X POST localhost:8080/shorten -H 'Content-Type: application/json' \
//!      -d '{"url": "https://example.com/a"}'
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod domain;
pub mod error;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::domain::{RegistryError, RegistrySettings, ShortLinkRegistry};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
