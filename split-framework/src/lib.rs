//! Split Framework
//!
//! The scanning engine of the toolkit: a lazy [`Tokenizer`] iterator, the
//! eager [`split`] family (bounded and column-selecting variants included),
//! the inverse [`join`], and generic value-stream tokenization in [`slice`].

pub mod join;
pub mod slice;
pub mod split;
pub mod tokenizer;

pub use join::{join, join_if};
pub use slice::{SingleValue, SliceTokenizer, ValueDelimiter, ValueSet};
pub use split::{split, split_columns, split_n, split_to_vec};
pub use tokenizer::Tokenizer;

pub use token_core::{CharSet, Delimiter, Predicate, SplitOptions, Token};
