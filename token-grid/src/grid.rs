use crate::options::GridOptions;
use crate::row::Row;
use split_framework::split;
use token_core::{Delimiter, ParseError, Result};

/// One cell of a row: a byte span into the grid's buffer, or Null for a
/// column position the row does not have (see
/// [`enforce_column_count`](TokenGrid::enforce_column_count)). Null is
/// distinguishable from an empty-string cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Cell {
    Span { start: usize, end: usize },
    Null,
}

#[derive(Debug, Clone)]
pub(crate) struct RowIndex {
    pub(crate) start: usize,
    pub(crate) end: usize,
    pub(crate) cells: Vec<Cell>,
}

/// A two-dimensional row/column view over delimited text.
///
/// The grid borrows the text: rows are its line boundaries, columns are
/// derived per row with the configured delimiter predicate and split
/// options, and every cell is a span into the original buffer. Structural
/// mutation (`remove_*`, `enforce_column_count`) edits only the cached
/// index, never the text.
#[derive(Debug, Clone)]
pub struct TokenGrid<'buf> {
    pub(crate) buffer: &'buf str,
    pub(crate) rows: Vec<RowIndex>,
    options: GridOptions,
}

/// Column predicate that suspends delimiter tests inside double-quoted
/// segments. Quote state lives in a `Cell` because the scanning core tests
/// each character exactly once, in order.
struct QuoteAware<'p> {
    inner: &'p dyn Delimiter,
    in_quotes: std::cell::Cell<bool>,
}

impl Delimiter for QuoteAware<'_> {
    fn is_delimiter(&self, ch: char) -> bool {
        if ch == '"' {
            self.in_quotes.set(!self.in_quotes.get());
            return false;
        }
        if self.in_quotes.get() {
            return false;
        }
        self.inner.is_delimiter(ch)
    }
}

impl<'buf> TokenGrid<'buf> {
    /// Builds a grid over `buffer` with the given options, eagerly indexing
    /// every row's cells.
    pub fn new(buffer: &'buf str, options: GridOptions) -> Self {
        let rows = line_spans(buffer)
            .into_iter()
            .map(|(start, end)| {
                let cells = split_cells(&buffer[start..end], start, &options);
                RowIndex { start, end, cells }
            })
            .collect();
        Self {
            buffer,
            rows,
            options,
        }
    }

    /// Returns the full source text the grid indexes.
    pub fn buffer(&self) -> &'buf str {
        self.buffer
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Smallest column count over all rows; 0 for an empty grid.
    pub fn min_column_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).min().unwrap_or(0)
    }

    /// Largest column count over all rows; 0 for an empty grid.
    pub fn max_column_count(&self) -> usize {
        self.rows.iter().map(|r| r.cells.len()).max().unwrap_or(0)
    }

    /// Returns the row view at `index`.
    ///
    /// Panics when `index >= row_count()`; this is the hot-path accessor,
    /// callers check `row_count` first. See [`try_row`](Self::try_row) for
    /// the checked form.
    pub fn row(&self, index: usize) -> Row<'_, 'buf> {
        assert!(index < self.rows.len(), "row index out of range");
        Row::new(self, index)
    }

    /// Checked row access.
    pub fn try_row(&self, index: usize) -> Option<Row<'_, 'buf>> {
        (index < self.rows.len()).then(|| Row::new(self, index))
    }

    /// Iterates the grid's rows in order.
    pub fn iter_rows(&self) -> impl Iterator<Item = Row<'_, 'buf>> {
        (0..self.rows.len()).map(move |i| Row::new(self, i))
    }

    pub(crate) fn check_range(&self, rows: std::ops::Range<usize>) -> Result<()> {
        if rows.end > self.rows.len() || rows.start > rows.end {
            return Err(ParseError::IndexOutOfRange {
                index: rows.end,
                len: self.rows.len(),
            });
        }
        Ok(())
    }

    /// Removes the row at `index` from the grid index.
    pub fn remove_row(&mut self, index: usize) -> Result<()> {
        if index >= self.rows.len() {
            return Err(ParseError::IndexOutOfRange {
                index,
                len: self.rows.len(),
            });
        }
        let _ = self.rows.remove(index);
        Ok(())
    }

    /// Removes every row in `rows` for which `predicate` returns `true`.
    /// Returns the number of rows removed.
    pub fn remove_row_if<P>(&mut self, rows: std::ops::Range<usize>, mut predicate: P) -> Result<usize>
    where
        P: FnMut(Row<'_, 'buf>) -> bool,
    {
        self.check_range(rows.clone())?;
        // Decide first, mutate after, so the predicate sees a stable grid.
        let doomed: Vec<bool> = (0..self.rows.len())
            .map(|i| rows.contains(&i) && predicate(Row::new(self, i)))
            .collect();
        let before = self.rows.len();
        let mut keep = doomed.iter().map(|d| !d);
        self.rows.retain(|_| keep.next().unwrap_or(true));
        Ok(before - self.rows.len())
    }

    /// Removes every empty (zero-length, non-null) cell in the grid.
    /// Returns the number of cells removed.
    pub fn remove_empty_tokens(&mut self) -> usize {
        let all = 0..self.rows.len();
        self.remove_empty_tokens_in(all).unwrap_or(0)
    }

    /// Removes empty cells from the rows in `rows` only.
    pub fn remove_empty_tokens_in(&mut self, rows: std::ops::Range<usize>) -> Result<usize> {
        self.check_range(rows.clone())?;
        let mut removed = 0;
        for row in &mut self.rows[rows] {
            let before = row.cells.len();
            row.cells
                .retain(|c| !matches!(c, Cell::Span { start, end } if start == end));
            removed += before - row.cells.len();
        }
        Ok(removed)
    }

    /// Removes every cell in `rows` whose text matches `predicate`. Null
    /// cells are never offered to the predicate. Returns the number of
    /// cells removed.
    pub fn remove_token_if<P>(&mut self, rows: std::ops::Range<usize>, mut predicate: P) -> Result<usize>
    where
        P: FnMut(&str) -> bool,
    {
        self.check_range(rows.clone())?;
        let buffer = self.buffer;
        let mut removed = 0;
        for row in &mut self.rows[rows] {
            let before = row.cells.len();
            row.cells.retain(|c| match c {
                Cell::Span { start, end } => !predicate(&buffer[*start..*end]),
                Cell::Null => true,
            });
            removed += before - row.cells.len();
        }
        Ok(removed)
    }

    /// Pads or truncates every row's logical column count to `count`
    /// without rewriting the text. Added trailing cells are null, which
    /// [`Row::is_null`] distinguishes from empty-string cells.
    pub fn enforce_column_count(&mut self, count: usize) {
        for row in &mut self.rows {
            if row.cells.len() > count {
                row.cells.truncate(count);
            } else {
                row.cells.resize(count, Cell::Null);
            }
        }
    }

    /// Walks rows in order, grouping contiguous runs into buckets. The
    /// predicate is consulted for every row and returns `true` when that
    /// row starts a new bucket; the first row always opens the first
    /// bucket. `bucket` is invoked once per completed run with the grid and
    /// the bucket's row range. Returns the number of buckets.
    pub fn sequential_partition<P, F>(&self, mut predicate: P, mut bucket: F) -> usize
    where
        P: FnMut(Row<'_, 'buf>) -> bool,
        F: FnMut(&TokenGrid<'buf>, std::ops::Range<usize>),
    {
        let mut buckets = 0;
        let mut start = 0;
        for i in 0..self.rows.len() {
            // The predicate sees every row so it can carry state; its answer
            // for the first row is moot, that row opens the first bucket.
            let starts = predicate(Row::new(self, i));
            if i > 0 && starts {
                bucket(self, start..i);
                buckets += 1;
                start = i;
            }
        }
        if start < self.rows.len() {
            bucket(self, start..self.rows.len());
            buckets += 1;
        }
        buckets
    }

    /// Computes, per column index, the maximum cell width in characters
    /// across all rows, for tabular rendering. Null cells count as width 0.
    pub fn column_widths(&self) -> Vec<usize> {
        let mut widths = vec![0usize; self.max_column_count()];
        for row in &self.rows {
            for (j, cell) in row.cells.iter().enumerate() {
                if let Cell::Span { start, end } = cell {
                    let w = self.buffer[*start..*end].chars().count();
                    widths[j] = widths[j].max(w);
                }
            }
        }
        widths
    }

    /// Returns the options the grid was built with.
    pub fn options(&self) -> &GridOptions {
        &self.options
    }
}

/// Line boundaries of `buffer`: `\n`-terminated, tolerating `\r\n`, with no
/// phantom empty row after a trailing newline.
fn line_spans(buffer: &str) -> Vec<(usize, usize)> {
    let bytes = buffer.as_bytes();
    let mut spans = Vec::new();
    let mut start = 0;
    for (i, b) in bytes.iter().enumerate() {
        if *b == b'\n' {
            let mut end = i;
            if end > start && bytes[end - 1] == b'\r' {
                end -= 1;
            }
            spans.push((start, end));
            start = i + 1;
        }
    }
    if start < buffer.len() {
        spans.push((start, buffer.len()));
    }
    spans
}

/// Splits one row's text into absolute-offset cells.
fn split_cells(line: &str, base: usize, options: &GridOptions) -> Vec<Cell> {
    let mut cells = Vec::new();
    let mut push = |tok: token_core::Token<'_>| {
        cells.push(Cell::Span {
            start: base + tok.start(),
            end: base + tok.end(),
        });
    };
    if options.support_dquotes {
        let predicate = QuoteAware {
            inner: &options.column_delimiters,
            in_quotes: std::cell::Cell::new(false),
        };
        split(&predicate, line, &mut push, options.split);
    } else {
        split(&options.column_delimiters, line, &mut push, options.split);
    }
    cells
}
