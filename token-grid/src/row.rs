use crate::grid::{Cell, TokenGrid};
use parse_framework::{parse_tokens, Insert, Sink};
use split_framework::{join, join_if};
use token_core::{FromToken, ParseError, Result, Token};

/// A view of one grid row.
///
/// Lightweight handle; cloning or re-fetching it is free. Cell indices are
/// 0-based column positions within this row.
#[derive(Debug, Clone, Copy)]
pub struct Row<'grid, 'buf> {
    grid: &'grid TokenGrid<'buf>,
    index: usize,
}

impl<'grid, 'buf> Row<'grid, 'buf> {
    pub(crate) fn new(grid: &'grid TokenGrid<'buf>, index: usize) -> Self {
        Self { grid, index }
    }

    /// This row's position in the grid.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of columns in this row (null cells included).
    pub fn len(&self) -> usize {
        self.cells().len()
    }

    /// Returns `true` when the row has no columns.
    pub fn is_empty(&self) -> bool {
        self.cells().is_empty()
    }

    /// The raw text of the whole row, delimiters included.
    pub fn as_str(&self) -> &'buf str {
        let row = &self.grid.rows[self.index];
        &self.grid.buffer[row.start..row.end]
    }

    /// The cell text at `column`; `None` for a null cell or an index this
    /// row does not have.
    pub fn token(&self, column: usize) -> Option<&'buf str> {
        self.cell_token(column).map(|t| t.text())
    }

    /// Returns `true` when the cell at `column` is null, a column position
    /// introduced by `enforce_column_count` rather than text. An
    /// empty-string cell is not null.
    pub fn is_null(&self, column: usize) -> bool {
        matches!(self.cells().get(column), Some(Cell::Null))
    }

    /// Converts the cell at `column` into `T`.
    pub fn get<T: FromToken>(&self, column: usize) -> Result<T> {
        let tok = self.cell_token(column).ok_or(ParseError::IndexOutOfRange {
            index: column,
            len: self.len(),
        })?;
        T::from_token(&tok).map_err(|e| ParseError::Conversion {
            index: column,
            target: e.target,
            text: tok.to_string(),
        })
    }

    /// Parses this row's cells, in order, into a destination list; the
    /// row-scoped equivalent of [`parse_framework::parse`]. Null cells are
    /// absent and are not fed.
    pub fn parse(&self, sinks: &mut [Sink<'_>]) -> Result<()> {
        parse_tokens(self.iter_tokens(), sinks)
    }

    /// Parses only the cells at the `columns` indices, pairing
    /// `columns[i]` with `sinks[i]`.
    pub fn parse_with_index(&self, columns: &[usize], sinks: &mut [Sink<'_>]) -> Result<()> {
        let mut selected = Vec::with_capacity(columns.len());
        for column in columns {
            let tok = self.cell_token(*column).ok_or(ParseError::IndexOutOfRange {
                index: *column,
                len: self.len(),
            })?;
            selected.push(tok);
        }
        parse_tokens(selected, sinks)
    }

    /// Iterates the non-null cell texts of this row.
    pub fn iter(&self) -> impl Iterator<Item = &'buf str> + 'grid {
        self.iter_tokens().map(|t| t.text())
    }

    fn cells(&self) -> &'grid [Cell] {
        &self.grid.rows[self.index].cells
    }

    pub(crate) fn cell_token(&self, column: usize) -> Option<Token<'buf>> {
        match self.cells().get(column)? {
            Cell::Span { start, end } => Some(Token::new(self.grid.buffer, *start, *end)),
            Cell::Null => None,
        }
    }

    pub(crate) fn iter_tokens(&self) -> impl Iterator<Item = Token<'buf>> + 'grid {
        let grid = self.grid;
        self.cells().iter().filter_map(move |cell| match cell {
            Cell::Span { start, end } => Some(Token::new(grid.buffer, *start, *end)),
            Cell::Null => None,
        })
    }
}

/// Row/column extraction, aggregation, and join operations.
impl<'buf> TokenGrid<'buf> {
    /// Streams the cells of one column across a row range into a
    /// collection, converting each to `T`. Rows lacking the column (or
    /// holding a null there) are skipped. Returns the number of values
    /// extracted; a failed conversion reports the offending row index.
    pub fn extract_column<T, C>(
        &self,
        rows: std::ops::Range<usize>,
        column: usize,
        out: &mut C,
    ) -> Result<usize>
    where
        T: FromToken,
        C: Insert<T>,
    {
        self.check_range(rows.clone())?;
        let mut count = 0;
        for i in rows {
            let row = Row::new(self, i);
            let Some(tok) = row.cell_token(column) else {
                continue;
            };
            let value = T::from_token(&tok).map_err(|e| ParseError::Conversion {
                index: i,
                target: e.target,
                text: tok.to_string(),
            })?;
            out.insert_one(value);
            count += 1;
        }
        Ok(count)
    }

    /// Streams several columns at once over a row range, pairing
    /// `columns[i]` with `sinks[i]`, in a single pass. Rows missing any of
    /// the requested columns are skipped whole, so the paired sinks stay in
    /// step. Returns the number of rows that contributed.
    pub fn extract_columns(
        &self,
        rows: std::ops::Range<usize>,
        columns: &[usize],
        sinks: &mut [Sink<'_>],
    ) -> Result<usize> {
        self.check_range(rows.clone())?;
        if columns.len() != sinks.len() {
            return Err(ParseError::Arity {
                expected: sinks.len(),
                found: columns.len(),
            });
        }
        let mut count = 0;
        for i in rows {
            let row = Row::new(self, i);
            let tokens: Option<Vec<_>> = columns.iter().map(|c| row.cell_token(*c)).collect();
            let Some(tokens) = tokens else {
                continue;
            };
            for (tok, sink) in tokens.into_iter().zip(sinks.iter_mut()) {
                parse_tokens(std::iter::once(tok), std::slice::from_mut(sink))?;
            }
            count += 1;
        }
        Ok(count)
    }

    /// Sums the numeric values of every non-null cell in row `index`.
    pub fn accumulate_row(&self, index: usize) -> Result<f64> {
        if index >= self.row_count() {
            return Err(ParseError::IndexOutOfRange {
                index,
                len: self.row_count(),
            });
        }
        let row = Row::new(self, index);
        let mut sum = 0.0;
        for j in 0..row.len() {
            if row.is_null(j) {
                continue;
            }
            sum += row.get::<f64>(j)?;
        }
        Ok(sum)
    }

    /// Sums the numeric values of `column` across all rows. Rows lacking
    /// the column are skipped; a present cell that fails conversion fails
    /// the call.
    pub fn accumulate_column(&self, column: usize) -> Result<f64> {
        self.accumulate_column_if(column, |_| true).map(|(sum, _)| sum)
    }

    /// [`accumulate_column`](Self::accumulate_column) restricted to rows
    /// accepted by `predicate`. Returns the sum and the number of rows that
    /// matched.
    pub fn accumulate_column_if<P>(&self, column: usize, mut predicate: P) -> Result<(f64, usize)>
    where
        P: FnMut(Row<'_, 'buf>) -> bool,
    {
        let mut sum = 0.0;
        let mut matched = 0;
        for i in 0..self.row_count() {
            let row = Row::new(self, i);
            if !predicate(row) {
                continue;
            }
            matched += 1;
            let Some(tok) = row.cell_token(column) else {
                continue;
            };
            let value = f64::from_token(&tok).map_err(|e| ParseError::Conversion {
                index: i,
                target: e.target,
                text: tok.to_string(),
            })?;
            sum += value;
        }
        Ok((sum, matched))
    }

    /// Concatenates the non-null cells of row `index` with `delimiter`.
    pub fn join_row(&self, index: usize, delimiter: &str) -> Result<String> {
        self.join_row_if(index, |_| true, delimiter)
    }

    /// [`join_row`](Self::join_row) keeping only cells accepted by
    /// `predicate`.
    pub fn join_row_if<P>(&self, index: usize, predicate: P, delimiter: &str) -> Result<String>
    where
        P: FnMut(&str) -> bool,
    {
        if index >= self.row_count() {
            return Err(ParseError::IndexOutOfRange {
                index,
                len: self.row_count(),
            });
        }
        Ok(join_if(delimiter, predicate, Row::new(self, index).iter()))
    }

    /// Concatenates `column` down the grid with `delimiter`, skipping rows
    /// that lack the column.
    pub fn join_column(&self, column: usize, delimiter: &str) -> Result<String> {
        self.join_column_if(column, |_| true, delimiter)
    }

    /// [`join_column`](Self::join_column) keeping only rows accepted by
    /// `predicate`.
    pub fn join_column_if<P>(&self, column: usize, mut predicate: P, delimiter: &str) -> Result<String>
    where
        P: FnMut(Row<'_, 'buf>) -> bool,
    {
        if self.row_count() > 0 && column >= self.max_column_count() {
            return Err(ParseError::IndexOutOfRange {
                index: column,
                len: self.max_column_count(),
            });
        }
        let cells = (0..self.row_count()).filter_map(|i| {
            let row = Row::new(self, i);
            if predicate(row) {
                row.token(column)
            } else {
                None
            }
        });
        Ok(join(delimiter, cells))
    }
}
