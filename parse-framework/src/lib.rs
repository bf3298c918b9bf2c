//! Parse Framework
//!
//! The typed-parsing layer: an ordered list of [`Sink`] destinations is fed
//! from one scan over the input, converting each token in order. Scalars,
//! [`Insert`] collections, user records (via [`ParseRecord`]), and positional
//! ignores all share the one destination protocol; [`construct`] is the
//! inverse direction.

pub mod construct;
pub mod engine;
pub mod record;
pub mod sink;

pub use construct::construct;
pub use engine::{parse, parse_columns, parse_columns_with_options, parse_tokens, parse_with_options};
pub use record::ParseRecord;
pub use sink::{Insert, Sink};

pub use token_core::{FromToken, ParseError, Result, SplitOptions};
