use crate::record::ParseRecord;
use std::collections::{BTreeSet, BinaryHeap, HashSet, LinkedList, VecDeque};
use std::hash::Hash;
use token_core::{ConvertError, FromToken, ParseError, Token};

/// Collections usable as container destinations.
///
/// Each implementation inserts with the collection's own semantics: sequences
/// append, sets deduplicate, heaps order by comparison.
pub trait Insert<T> {
    fn insert_one(&mut self, value: T);
}

impl<T> Insert<T> for Vec<T> {
    fn insert_one(&mut self, value: T) {
        self.push(value);
    }
}

impl<T> Insert<T> for VecDeque<T> {
    fn insert_one(&mut self, value: T) {
        self.push_back(value);
    }
}

impl<T> Insert<T> for LinkedList<T> {
    fn insert_one(&mut self, value: T) {
        self.push_back(value);
    }
}

impl<T: Ord> Insert<T> for BTreeSet<T> {
    fn insert_one(&mut self, value: T) {
        self.insert(value);
    }
}

impl<T: Eq + Hash> Insert<T> for HashSet<T> {
    fn insert_one(&mut self, value: T) {
        self.insert(value);
    }
}

impl<T: Ord> Insert<T> for BinaryHeap<T> {
    fn insert_one(&mut self, value: T) {
        self.push(value);
    }
}

/// One consume step, erased over the destination type. The closure is
/// universally quantified over the token's buffer lifetime, so a sink built
/// once can be fed tokens from any buffer.
type Consume<'d> = Box<dyn for<'t> FnMut(Token<'t>) -> Result<(), ConvertError> + 'd>;

pub(crate) enum Kind<'d> {
    Scalar(Consume<'d>),
    Container { push: Consume<'d>, limit: Option<usize> },
    Record(Vec<Sink<'d>>),
    Ignore,
}

/// A typed parse destination.
///
/// A destination list is an ordered `&mut [Sink]`; the parse engine feeds
/// tokens to each sink in turn. Scalar and ignore sinks consume exactly one
/// token. A container sink consumes every remaining token unless bounded
/// with [`count`](Sink::count), in which case it consumes exactly that many;
/// an unbounded container must be the final destination. A record sink is a
/// compound destination consuming one token per registered field.
pub struct Sink<'d> {
    pub(crate) kind: Kind<'d>,
}

impl<'d> Sink<'d> {
    /// Destination writing one converted token into `slot`.
    pub fn scalar<T: FromToken>(slot: &'d mut T) -> Self {
        Self {
            kind: Kind::Scalar(Box::new(move |tok: Token<'_>| {
                *slot = T::from_token(&tok)?;
                Ok(())
            })),
        }
    }

    /// Destination appending converted tokens to any [`Insert`] collection.
    pub fn container<T, C>(container: &'d mut C) -> Self
    where
        T: FromToken,
        C: Insert<T>,
    {
        Self {
            kind: Kind::Container {
                push: Box::new(move |tok: Token<'_>| {
                    container.insert_one(T::from_token(&tok)?);
                    Ok(())
                }),
                limit: None,
            },
        }
    }

    /// Bounds a container sink to exactly `n` tokens, allowing it to appear
    /// before the end of the destination list. No effect on other kinds.
    pub fn count(mut self, n: usize) -> Self {
        if let Kind::Container { limit, .. } = &mut self.kind {
            *limit = Some(n);
        }
        self
    }

    /// Destination that consumes and discards one token, skipping a field
    /// positionally.
    pub fn ignore() -> Self {
        Self { kind: Kind::Ignore }
    }

    /// Compound destination binding the registered fields of a record type.
    pub fn record<R: ParseRecord>(record: &'d mut R) -> Self {
        Self {
            kind: Kind::Record(record.parse_fields()),
        }
    }

    /// Tokens this sink consumes; `None` for an unbounded container (or a
    /// record containing one).
    pub(crate) fn arity(&self) -> Option<usize> {
        match &self.kind {
            Kind::Scalar(_) | Kind::Ignore => Some(1),
            Kind::Container { limit, .. } => *limit,
            Kind::Record(fields) => fields
                .iter()
                .try_fold(0usize, |acc, f| f.arity().map(|n| acc + n)),
        }
    }

    /// Feeds this sink from the token stream. `index` tracks the 0-based
    /// position of the next token for error reporting; `required` is the
    /// total arity of the enclosing destination list.
    pub(crate) fn feed<'buf>(
        &mut self,
        tokens: &mut dyn Iterator<Item = Token<'buf>>,
        index: &mut usize,
        required: usize,
    ) -> Result<(), ParseError> {
        match &mut self.kind {
            Kind::Scalar(assign) => {
                let tok = next_token(tokens, *index, required)?;
                consume(assign, tok, index)
            }
            Kind::Ignore => {
                let _ = next_token(tokens, *index, required)?;
                *index += 1;
                Ok(())
            }
            Kind::Container { push, limit } => match limit {
                Some(n) => {
                    for _ in 0..*n {
                        let tok = next_token(tokens, *index, required)?;
                        consume(push, tok, index)?;
                    }
                    Ok(())
                }
                None => {
                    while let Some(tok) = tokens.next() {
                        consume(push, tok, index)?;
                    }
                    Ok(())
                }
            },
            Kind::Record(fields) => {
                for field in fields {
                    field.feed(tokens, index, required)?;
                }
                Ok(())
            }
        }
    }
}

impl std::fmt::Debug for Sink<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match &self.kind {
            Kind::Scalar(_) => "Scalar",
            Kind::Container { .. } => "Container",
            Kind::Record(_) => "Record",
            Kind::Ignore => "Ignore",
        };
        f.debug_struct("Sink").field("kind", &name).finish()
    }
}

fn next_token<'buf>(
    tokens: &mut dyn Iterator<Item = Token<'buf>>,
    index: usize,
    required: usize,
) -> Result<Token<'buf>, ParseError> {
    tokens.next().ok_or(ParseError::Arity {
        expected: required,
        found: index,
    })
}

fn consume(step: &mut Consume<'_>, tok: Token<'_>, index: &mut usize) -> Result<(), ParseError> {
    step(tok).map_err(|e| ParseError::Conversion {
        index: *index,
        target: e.target,
        text: tok.to_string(),
    })?;
    *index += 1;
    Ok(())
}
