//! Eager splitting: one direct scan writing every token into a caller sink.
//!
//! Semantically these are a [`Tokenizer`](crate::Tokenizer) driven to
//! completion; they share its scanning core, and the equivalence is covered
//! by the property tests.

use crate::tokenizer::{scan_next, ScanState};
use token_core::{Delimiter, SplitOptions, Token};

/// Splits `input` into tokens, feeding each to `sink` in input order.
///
/// Returns the number of tokens emitted.
pub fn split<'buf, D, F>(delimiter: &D, input: &'buf str, mut sink: F, options: SplitOptions) -> usize
where
    D: Delimiter,
    F: FnMut(Token<'buf>),
{
    let mut state = ScanState::new();
    let mut count = 0;
    while let Some((start, end)) = scan_next(input, delimiter, options, &mut state) {
        sink(Token::new(input, start, end));
        count += 1;
    }
    count
}

/// Splits at most `max_tokens` tokens into `sink`.
///
/// Returns `min(max_tokens, total token count)`. The scan stops as soon as
/// the bound is reached; the rest of the input is never visited.
pub fn split_n<'buf, D, F>(
    delimiter: &D,
    input: &'buf str,
    max_tokens: usize,
    mut sink: F,
    options: SplitOptions,
) -> usize
where
    D: Delimiter,
    F: FnMut(Token<'buf>),
{
    let mut state = ScanState::new();
    let mut count = 0;
    while count < max_tokens {
        match scan_next(input, delimiter, options, &mut state) {
            Some((start, end)) => {
                sink(Token::new(input, start, end));
                count += 1;
            }
            None => break,
        }
    }
    count
}

/// Splits only the tokens at the 0-based indices in `columns`.
///
/// `sink` receives `(column index, token)` pairs in input order. Equivalent
/// to a full split followed by keeping the selected indices, but the scan
/// short-circuits once the highest requested index has been produced. The
/// column list need not be sorted or contiguous.
///
/// Returns the number of tokens emitted (at most `columns.len()`, fewer when
/// the input has no token at some requested index).
pub fn split_columns<'buf, D, F>(
    delimiter: &D,
    input: &'buf str,
    columns: &[usize],
    mut sink: F,
    options: SplitOptions,
) -> usize
where
    D: Delimiter,
    F: FnMut(usize, Token<'buf>),
{
    let Some(max_column) = columns.iter().copied().max() else {
        return 0;
    };
    let mut state = ScanState::new();
    let mut index = 0;
    let mut count = 0;
    while index <= max_column {
        match scan_next(input, delimiter, options, &mut state) {
            Some((start, end)) => {
                if columns.contains(&index) {
                    sink(index, Token::new(input, start, end));
                    count += 1;
                }
                index += 1;
            }
            None => break,
        }
    }
    count
}

/// Convenience wrapper collecting the tokens of a full split into a `Vec`.
pub fn split_to_vec<'buf, D>(delimiter: &D, input: &'buf str, options: SplitOptions) -> Vec<Token<'buf>>
where
    D: Delimiter,
{
    let mut out = Vec::new();
    split(delimiter, input, |tok| out.push(tok), options);
    out
}
