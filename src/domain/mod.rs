//! Domain layer: the short-link registry and its code generator.
//!
//! This module has no knowledge of HTTP. Handlers in [`crate::api`] call into
//! [`ShortLinkRegistry`] and translate [`RegistryError`] into responses.
//!
//! # Architecture
//!
//! - [`code`] - Uniform random code generation over a configurable alphabet
//! - [`registry`] - The code→URL table and its locking discipline
//! - [`error`] - Registry failure modes

pub mod code;
pub mod error;
pub mod registry;

pub use code::{ALPHANUMERIC, CodeGenerator, DEFAULT_CODE_LENGTH, MAX_CODE_LENGTH};
pub use error::RegistryError;
pub use registry::{DEFAULT_MAX_ATTEMPTS, RegistrySettings, ShortLinkRegistry};
