//! Error types for enumeration lookups.

use thiserror::Error;

/// Errors that can occur during enumeration lookups.
///
/// Reverse lookup is deliberately not represented here: "no label for this
/// value" is an expected query outcome and is reported as `None`, not as an
/// error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChoiceError {
    /// Symbolic access with a name no display label sanitizes to.
    #[error("attribute '{name}' not found")]
    AttributeNotFound { name: String },

    /// Positional access outside the declaration-order range.
    #[error("index {index} out of range for enumeration of {len} entries")]
    IndexOutOfRange { index: usize, len: usize },
}
