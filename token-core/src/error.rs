//! Error types shared across the toolkit.

use thiserror::Error;

/// Failure raised by a single text-to-value conversion.
///
/// Carries only the target type name; the enclosing operation wraps it with
/// the token position and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertError {
    /// Name of the type the text failed to convert into.
    pub target: &'static str,
}

/// Top-level error type for parse and grid operations.
///
/// Failures are always local: the operation that observed the bad token or
/// bad index reports it to its immediate caller and nothing else happens.
/// Destinations written before a failing token keep their values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ParseError {
    /// A token's text does not match the lexical grammar of its destination.
    #[error("cannot convert token {index} ({text:?}) into {target}")]
    Conversion {
        /// 0-based index of the offending token.
        index: usize,
        /// Name of the destination type.
        target: &'static str,
        /// The offending token text.
        text: String,
    },

    /// Token count does not align with the destination list.
    #[error("expected {expected} tokens, found {found}")]
    Arity {
        /// Tokens the destination list requires.
        expected: usize,
        /// Tokens the input actually produced.
        found: usize,
    },

    /// A row or column index is out of range.
    #[error("index {index} out of range ({len} available)")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of elements actually available.
        len: usize,
    },

    /// An unbounded container sink appeared before the end of a destination
    /// list, where it would starve the destinations after it.
    #[error("an unbounded container sink must be the final destination")]
    GreedySinkNotLast,
}

/// Result alias used throughout the toolkit.
pub type Result<T> = std::result::Result<T, ParseError>;
