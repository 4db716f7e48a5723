//! Error types surfaced at the crate's public boundary.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

// =============================================================================
// AUTHENTICATION FAILURE
// =============================================================================

/// AEAD decryption failed authentication.
///
/// Carries no secret-derived data (not even the computed tag): an error that
/// leaked partial tag material would itself be a timing/content oracle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AeadError;

impl fmt::Display for AeadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ascon AEAD: authentication failed")
    }
}

#[cfg(feature = "std")]
impl error::Error for AeadError {}

// =============================================================================
// LENGTH PRECONDITIONS
// =============================================================================

/// A caller-supplied buffer violated a length precondition at the API
/// boundary (e.g. a key of the wrong size, or ciphertext shorter than the
/// tag). Distinct from [`AeadError`]: this is checked before any
/// cryptographic processing begins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthError {
    what: &'static str,
    expected: usize,
    actual: usize,
}

impl LengthError {
    /// Create a new `LengthError` describing which field failed its length
    /// check and the expected/actual byte counts.
    #[must_use]
    pub const fn new(what: &'static str, expected: usize, actual: usize) -> Self {
        Self {
            what,
            expected,
            actual,
        }
    }
}

impl fmt::Display for LengthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ascon: invalid {} length: expected {}, got {}",
            self.what, self.expected, self.actual
        )
    }
}

#[cfg(feature = "std")]
impl error::Error for LengthError {}
