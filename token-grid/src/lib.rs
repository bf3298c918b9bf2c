//! Token Grid
//!
//! A row/column-indexed view over delimited tabular text, built on the split
//! and parse frameworks: rows are line boundaries of the borrowed buffer,
//! columns are derived per row with a configurable delimiter predicate, and
//! every cell is a zero-copy span. Provides extraction, numeric aggregation,
//! joining, in-place structural mutation, and contiguous-run partitioning.

pub mod grid;
pub mod options;
pub mod row;

pub use grid::TokenGrid;
pub use options::GridOptions;
pub use row::Row;

pub use parse_framework::Sink;
pub use token_core::{ParseError, Result, SplitOptions};
