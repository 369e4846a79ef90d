//! In-memory short-link registry.
//!
//! The registry is the single authority for code allocation and resolution.
//! A single [`RwLock`] guards the code table together with the random source:
//! [`ShortLinkRegistry::create`] holds the write lock for its whole
//! generate-check-insert sequence, while [`ShortLinkRegistry::resolve`] only
//! takes the read lock and may run alongside other readers.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::{HashMap, HashSet};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};
use tracing::{debug, warn};

use crate::domain::code::{ALPHANUMERIC, CodeGenerator, DEFAULT_CODE_LENGTH};
use crate::domain::error::RegistryError;

/// Default number of draws [`ShortLinkRegistry::create`] makes before giving up.
pub const DEFAULT_MAX_ATTEMPTS: usize = 10;

const ACCEPTED_SCHEMES: &[&str] = &["http://", "https://"];

/// Construction parameters for [`ShortLinkRegistry`].
#[derive(Debug, Clone)]
pub struct RegistrySettings {
    /// Number of characters in every generated code.
    pub code_length: usize,
    /// Characters codes are drawn from.
    pub alphabet: String,
    /// Upper bound on draws per `create` call.
    pub max_attempts: usize,
    /// Codes that must never be handed out, typically fixed route segments.
    pub reserved: Vec<String>,
}

impl Default for RegistrySettings {
    fn default() -> Self {
        Self {
            code_length: DEFAULT_CODE_LENGTH,
            alphabet: ALPHANUMERIC.to_string(),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            reserved: Vec::new(),
        }
    }
}

/// State guarded by the registry lock.
struct Table<R> {
    links: HashMap<String, String>,
    rng: R,
}

/// Maps randomly generated short codes to long URLs.
///
/// Mappings are immutable once inserted and live for the lifetime of the
/// registry. Construct one instance at startup and share it behind an `Arc`.
///
/// # Examples
///
/// ```
/// use shortlink::domain::{RegistryError, RegistrySettings, ShortLinkRegistry};
///
/// let registry = ShortLinkRegistry::new(RegistrySettings::default()).unwrap();
///
/// let code = registry.create("https://example.com/a").unwrap();
/// assert_eq!(registry.resolve(&code).unwrap(), "https://example.com/a");
///
/// assert!(matches!(
///     registry.create("ftp://example.com"),
///     Err(RegistryError::InvalidInput(_))
/// ));
/// ```
pub struct ShortLinkRegistry<R = StdRng> {
    generator: CodeGenerator,
    max_attempts: usize,
    reserved: HashSet<String>,
    table: RwLock<Table<R>>,
}

impl ShortLinkRegistry<StdRng> {
    /// Creates an empty registry seeded from the operating system.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidSettings`] if the settings are unusable.
    pub fn new(settings: RegistrySettings) -> Result<Self, RegistryError> {
        Self::with_rng(settings, StdRng::from_os_rng())
    }
}

impl<R: Rng> ShortLinkRegistry<R> {
    /// Creates an empty registry that draws codes from `rng`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidSettings`] if the alphabet or code length
    /// is rejected by [`CodeGenerator::new`], or if `max_attempts` is 0.
    pub fn with_rng(settings: RegistrySettings, rng: R) -> Result<Self, RegistryError> {
        let generator = CodeGenerator::new(&settings.alphabet, settings.code_length)?;

        if settings.max_attempts == 0 {
            return Err(RegistryError::InvalidSettings(
                "max_attempts must be at least 1".to_string(),
            ));
        }

        // Entries the generator can never draw would only skew the capacity check.
        let reserved = settings
            .reserved
            .into_iter()
            .filter(|code| generator.matches(code))
            .collect();

        Ok(Self {
            generator,
            max_attempts: settings.max_attempts,
            reserved,
            table: RwLock::new(Table {
                links: HashMap::new(),
                rng,
            }),
        })
    }

    /// Stores `long_url` under a freshly generated code and returns the code.
    ///
    /// Surrounding whitespace is ignored when validating, but the URL is stored
    /// exactly as given.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::InvalidInput`] if the URL is empty, lacks an `http://`
    ///   or `https://` prefix, or contains control characters
    /// - [`RegistryError::ExhaustedCapacity`] if no free code was drawn within
    ///   the configured number of attempts
    pub fn create(&self, long_url: &str) -> Result<String, RegistryError> {
        validate_long_url(long_url)?;

        let mut table = self.write_table();
        let Table { links, rng } = &mut *table;

        let occupied = (links.len() + self.reserved.len()) as u128;
        if occupied >= self.generator.capacity() {
            metrics::counter!("shortlink_capacity_exhausted_total").increment(1);
            warn!(stored = links.len(), "Short code space is full");
            return Err(RegistryError::ExhaustedCapacity { attempts: 0 });
        }

        for attempt in 1..=self.max_attempts {
            let code = self.generator.generate(&mut *rng);

            if links.contains_key(&code) || self.reserved.contains(&code) {
                metrics::counter!("shortlink_code_collisions_total").increment(1);
                debug!(attempt, code = %code, "Short code collision");
                continue;
            }

            links.insert(code.clone(), long_url.to_string());
            metrics::counter!("shortlinks_created_total").increment(1);
            return Ok(code);
        }

        metrics::counter!("shortlink_capacity_exhausted_total").increment(1);
        warn!(
            attempts = self.max_attempts,
            stored = links.len(),
            "Failed to find a free short code"
        );

        Err(RegistryError::ExhaustedCapacity {
            attempts: self.max_attempts,
        })
    }
}

impl<R> ShortLinkRegistry<R> {
    /// Returns the long URL stored under `code`.
    ///
    /// Any string is accepted; codes that were never issued are simply misses.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::NotFound`] if no mapping exists for `code`.
    pub fn resolve(&self, code: &str) -> Result<String, RegistryError> {
        self.read_table()
            .links
            .get(code)
            .cloned()
            .ok_or_else(|| RegistryError::NotFound(code.to_string()))
    }

    /// Number of stored mappings.
    pub fn len(&self) -> usize {
        self.read_table().links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn code_length(&self) -> usize {
        self.generator.length()
    }

    /// Total number of codes the configured generator can produce.
    pub fn capacity(&self) -> u128 {
        self.generator.capacity()
    }

    // The table is only ever changed by a single `insert`, so a panic while
    // the lock was held cannot leave it half-updated.
    fn read_table(&self) -> RwLockReadGuard<'_, Table<R>> {
        self.table.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_table(&self) -> RwLockWriteGuard<'_, Table<R>> {
        self.table.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Checks a candidate long URL.
///
/// Emptiness and scheme are judged on the trimmed form; the URL itself is
/// stored exactly as given.
fn validate_long_url(raw: &str) -> Result<(), RegistryError> {
    let url = raw.trim();

    if url.is_empty() {
        return Err(RegistryError::InvalidInput(
            "URL cannot be empty".to_string(),
        ));
    }

    if !ACCEPTED_SCHEMES.iter().any(|scheme| url.starts_with(scheme)) {
        return Err(RegistryError::InvalidInput(
            "URL must start with http:// or https://".to_string(),
        ));
    }

    if raw.chars().any(char::is_control) {
        return Err(RegistryError::InvalidInput(
            "URL must not contain control characters".to_string(),
        ));
    }

    Ok(())
}
