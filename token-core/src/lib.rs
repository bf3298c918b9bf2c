//! Token Core
//!
//! Shared leaf types for the tokenization toolkit: the non-owning [`Token`]
//! span, delimiter predicates, split options, text-to-value conversion, and
//! the common error type.

pub mod convert;
pub mod error;
pub mod options;
pub mod predicate;
pub mod token;

pub use convert::FromToken;
pub use error::{ConvertError, ParseError, Result};
pub use options::SplitOptions;
pub use predicate::{CharSet, Delimiter, Predicate};
pub use token::Token;
