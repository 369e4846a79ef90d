//! Random short code generation.
//!
//! Codes are fixed-length strings drawn uniformly from a closed alphabet.
//! The random source is always supplied by the caller, so tests can use a
//! seeded generator and reproduce exact code sequences.

use rand::Rng;
use std::collections::HashSet;

use crate::domain::error::RegistryError;

/// The 62 ASCII letters and digits.
pub const ALPHANUMERIC: &str = "abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Default number of characters in a generated code.
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Longest code length a generator accepts.
pub const MAX_CODE_LENGTH: usize = 32;

/// Draws random codes of a fixed length from a fixed alphabet.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use shortlink::domain::CodeGenerator;
///
/// let generator = CodeGenerator::default();
/// let mut rng = StdRng::seed_from_u64(7);
///
/// let code = generator.generate(&mut rng);
/// assert_eq!(code.len(), 6);
/// assert!(generator.matches(&code));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeGenerator {
    alphabet: Vec<char>,
    length: usize,
}

impl CodeGenerator {
    /// Creates a generator for the given alphabet and code length.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidSettings`] if:
    /// - `length` is 0 or greater than [`MAX_CODE_LENGTH`]
    /// - `alphabet` is empty
    /// - `alphabet` contains anything other than ASCII letters and digits
    /// - `alphabet` contains the same character twice
    pub fn new(alphabet: &str, length: usize) -> Result<Self, RegistryError> {
        if length == 0 || length > MAX_CODE_LENGTH {
            return Err(RegistryError::InvalidSettings(format!(
                "code length must be between 1 and {MAX_CODE_LENGTH}, got {length}"
            )));
        }

        let chars: Vec<char> = alphabet.chars().collect();

        if chars.is_empty() {
            return Err(RegistryError::InvalidSettings(
                "alphabet must not be empty".to_string(),
            ));
        }

        if !chars.iter().all(char::is_ascii_alphanumeric) {
            return Err(RegistryError::InvalidSettings(
                "alphabet may only contain ASCII letters and digits".to_string(),
            ));
        }

        let unique: HashSet<char> = chars.iter().copied().collect();
        if unique.len() != chars.len() {
            return Err(RegistryError::InvalidSettings(
                "alphabet must not contain duplicate characters".to_string(),
            ));
        }

        Ok(Self {
            alphabet: chars,
            length,
        })
    }

    /// Number of characters in every generated code.
    pub fn length(&self) -> usize {
        self.length
    }

    /// Number of distinct codes this generator can produce.
    ///
    /// Saturates at `u128::MAX`.
    pub fn capacity(&self) -> u128 {
        let base = self.alphabet.len() as u128;
        (0..self.length).fold(1u128, |acc, _| acc.saturating_mul(base))
    }

    /// Returns true if `code` could have been produced by this generator.
    pub fn matches(&self, code: &str) -> bool {
        code.chars().count() == self.length && code.chars().all(|c| self.alphabet.contains(&c))
    }

    /// Draws a new code.
    ///
    /// Each position is sampled independently and uniformly over the alphabet.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        (0..self.length)
            .map(|_| self.alphabet[rng.random_range(0..self.alphabet.len())])
            .collect()
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self {
            alphabet: ALPHANUMERIC.chars().collect(),
            length: DEFAULT_CODE_LENGTH,
        }
    }
}
