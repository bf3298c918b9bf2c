//! The parse engine: one scan over the input, converting each token into the
//! next destination in order.

use crate::sink::Sink;
use split_framework::{split_n, Tokenizer};
use token_core::{CharSet, ParseError, Result, SplitOptions, Token};

/// Parses `input` into an ordered destination list, splitting on the
/// characters of `delimiters`.
///
/// Runs of delimiter characters are compressed, so e.g. repeated spaces
/// separate two fields rather than producing empty ones; use
/// [`parse_with_options`] for the raw behavior. Succeeds only when every
/// token converts and the token count exactly matches the list's arity.
///
/// Parsing is not transactional: destinations written before a failing token
/// keep their values.
pub fn parse(input: &str, delimiters: &str, sinks: &mut [Sink<'_>]) -> Result<()> {
    parse_with_options(
        input,
        delimiters,
        sinks,
        SplitOptions::new().compress_delimiters(true),
    )
}

/// [`parse`] with explicit split options.
pub fn parse_with_options(
    input: &str,
    delimiters: &str,
    sinks: &mut [Sink<'_>],
    options: SplitOptions,
) -> Result<()> {
    let tokens = Tokenizer::with_options(input, CharSet::new(delimiters), options);
    parse_tokens(tokens, sinks)
}

/// Feeds an already-produced token sequence through a destination list.
///
/// This is the engine underneath [`parse`]; it exists publicly so structures
/// that cache token boundaries themselves (the token grid's rows) can parse
/// without re-splitting. Same contract as [`parse`]: in-order consumption,
/// exact arity, no rollback.
pub fn parse_tokens<'buf, I>(tokens: I, sinks: &mut [Sink<'_>]) -> Result<()>
where
    I: IntoIterator<Item = Token<'buf>>,
{
    let required = required_tokens(sinks)?;
    let mut tokens = tokens.into_iter();
    let mut index = 0;
    for sink in sinks.iter_mut() {
        sink.feed(&mut tokens, &mut index, required)?;
    }
    let leftover = tokens.count();
    if leftover > 0 {
        return Err(ParseError::Arity {
            expected: index,
            found: index + leftover,
        });
    }
    Ok(())
}

/// Parses only the tokens at the 0-based `columns` indices, pairing
/// `columns[i]` with `sinks[i]`.
///
/// The column list need not be sorted or contiguous; the scan stops once the
/// highest requested index has been produced. Each paired sink must consume
/// exactly one token. Fails with [`ParseError::IndexOutOfRange`] when the
/// input has no token at a requested index.
pub fn parse_columns(
    input: &str,
    delimiters: &str,
    columns: &[usize],
    sinks: &mut [Sink<'_>],
) -> Result<()> {
    parse_columns_with_options(
        input,
        delimiters,
        columns,
        sinks,
        SplitOptions::new().compress_delimiters(true),
    )
}

/// [`parse_columns`] with explicit split options.
pub fn parse_columns_with_options(
    input: &str,
    delimiters: &str,
    columns: &[usize],
    sinks: &mut [Sink<'_>],
    options: SplitOptions,
) -> Result<()> {
    if columns.len() != sinks.len() {
        return Err(ParseError::Arity {
            expected: sinks.len(),
            found: columns.len(),
        });
    }
    for sink in sinks.iter() {
        match sink.arity() {
            Some(1) => {}
            Some(n) => return Err(ParseError::Arity { expected: 1, found: n }),
            None => return Err(ParseError::GreedySinkNotLast),
        }
    }

    let Some(max_column) = columns.iter().copied().max() else {
        return Ok(());
    };

    // Gather tokens only up to the highest requested index.
    let predicate = CharSet::new(delimiters);
    let mut seen: Vec<Token<'_>> = Vec::new();
    split_n(&predicate, input, max_column + 1, |t| seen.push(t), options);

    for (column, sink) in columns.iter().zip(sinks.iter_mut()) {
        let tok = seen.get(*column).copied().ok_or(ParseError::IndexOutOfRange {
            index: *column,
            len: seen.len(),
        })?;
        let mut one = std::iter::once(tok);
        let mut index = *column;
        sink.feed(&mut one, &mut index, columns.len())?;
    }
    Ok(())
}

/// Minimum token count the destination list requires. Errors when an
/// unbounded container sink is not the final destination.
fn required_tokens(sinks: &[Sink<'_>]) -> Result<usize> {
    let mut required = 0usize;
    for (i, sink) in sinks.iter().enumerate() {
        match sink.arity() {
            Some(n) => required += n,
            None if i + 1 == sinks.len() => {}
            None => return Err(ParseError::GreedySinkNotLast),
        }
    }
    Ok(required)
}
