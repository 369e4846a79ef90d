//! Errors raised by the short-link registry.

/// Failure modes of [`crate::domain::ShortLinkRegistry`] operations.
///
/// None of these leave the registry in a modified state: a failed
/// [`create`](crate::domain::ShortLinkRegistry::create) inserts nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The candidate long URL was rejected before reaching the table.
    #[error("Invalid URL: {0}")]
    InvalidInput(String),

    /// No mapping exists for the requested code.
    #[error("Short code not found: {0}")]
    NotFound(String),

    /// No free code was found within the configured number of draws.
    ///
    /// `attempts` is `0` when the code space was already full and no draw was made.
    #[error("No free short code found after {attempts} attempts")]
    ExhaustedCapacity { attempts: usize },

    /// The registry or generator was constructed with unusable settings.
    #[error("Invalid registry settings: {0}")]
    InvalidSettings(String),
}
