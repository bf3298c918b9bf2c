//! Tokenization of non-character element streams.
//!
//! The same delimiter/compression semantics as the text [`Tokenizer`]
//! (crate::Tokenizer), generalized to any `&[T]`: here a "delimiter" is a
//! sentinel *value* of the element type, e.g. a literal `0` breaking a
//! stream of integers. Tokens are subslices of the input.

use token_core::{Predicate, SplitOptions};

/// Delimiter predicate over arbitrary element values.
pub trait ValueDelimiter<T> {
    /// Returns `true` if `value` separates tokens.
    fn is_delimiter(&self, value: &T) -> bool;
}

impl<T, F> ValueDelimiter<T> for Predicate<F>
where
    F: Fn(&T) -> bool,
{
    fn is_delimiter(&self, value: &T) -> bool {
        (self.0)(value)
    }
}

/// Equality test against one sentinel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SingleValue<T>(pub T);

impl<T: PartialEq> ValueDelimiter<T> for SingleValue<T> {
    fn is_delimiter(&self, value: &T) -> bool {
        *value == self.0
    }
}

/// Membership test against a set of sentinel values.
#[derive(Debug, Clone)]
pub struct ValueSet<T>(Vec<T>);

impl<T: PartialEq> ValueSet<T> {
    /// Builds the set from any collection of sentinel values.
    pub fn new<I: IntoIterator<Item = T>>(values: I) -> Self {
        Self(values.into_iter().collect())
    }

    /// Adds a sentinel value to the set.
    pub fn insert(&mut self, value: T) {
        if !self.0.contains(&value) {
            self.0.push(value);
        }
    }
}

impl<T: PartialEq> ValueDelimiter<T> for ValueSet<T> {
    fn is_delimiter(&self, value: &T) -> bool {
        self.0.contains(value)
    }
}

/// Forward iterator yielding successive token subslices of `&[T]`.
#[derive(Debug, Clone)]
pub struct SliceTokenizer<'buf, T, D> {
    buffer: &'buf [T],
    delimiter: D,
    options: SplitOptions,
    pos: usize,
    first_scan: bool,
    done: bool,
}

impl<'buf, T, D: ValueDelimiter<T>> SliceTokenizer<'buf, T, D> {
    /// Creates a tokenizer over `buffer` with default options.
    pub fn new(buffer: &'buf [T], delimiter: D) -> Self {
        Self::with_options(buffer, delimiter, SplitOptions::default())
    }

    /// Creates a tokenizer with explicit split options.
    pub fn with_options(buffer: &'buf [T], delimiter: D, options: SplitOptions) -> Self {
        Self {
            buffer,
            delimiter,
            options,
            pos: 0,
            first_scan: true,
            done: false,
        }
    }

    /// Returns the unconsumed suffix of the buffer.
    pub fn remaining(&self) -> &'buf [T] {
        &self.buffer[self.pos..]
    }

    /// Rebinds the tokenizer to a new buffer, resetting the cursor.
    pub fn assign(&mut self, buffer: &'buf [T]) {
        self.buffer = buffer;
        self.pos = 0;
        self.first_scan = true;
        self.done = false;
    }
}

impl<'buf, T, D: ValueDelimiter<T>> Iterator for SliceTokenizer<'buf, T, D> {
    type Item = &'buf [T];

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.done {
                return None;
            }
            if self.first_scan && self.buffer.is_empty() {
                self.done = true;
                return None;
            }
            let token_start = self.pos;
            let delim_start = self.buffer[self.pos..]
                .iter()
                .position(|v| self.delimiter.is_delimiter(v))
                .map(|i| self.pos + i);

            let Some(ds) = delim_start else {
                self.done = true;
                self.first_scan = false;
                self.pos = self.buffer.len();
                return Some(&self.buffer[token_start..]);
            };

            let including =
                self.options.include_first_delimiter || self.options.include_all_delimiters;

            if self.options.compress_delimiters
                && ds == token_start
                && !self.first_scan
                && !including
            {
                self.pos = ds + 1;
                continue;
            }

            let token_end = if self.options.include_all_delimiters {
                let mut end = ds + 1;
                while end < self.buffer.len() && self.delimiter.is_delimiter(&self.buffer[end]) {
                    end += 1;
                }
                self.pos = end;
                end
            } else if self.options.include_first_delimiter {
                self.pos = ds + 1;
                ds + 1
            } else {
                self.pos = ds + 1;
                ds
            };

            self.first_scan = false;
            return Some(&self.buffer[token_start..token_end]);
        }
    }
}
