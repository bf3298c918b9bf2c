use token_core::{CharSet, SplitOptions};

/// Configuration for how a grid derives columns within each row.
///
/// Rows are always line boundaries of the source text; these options govern
/// only the column split.
#[derive(Debug, Clone)]
pub struct GridOptions {
    pub(crate) column_delimiters: CharSet,
    pub(crate) split: SplitOptions,
    pub(crate) support_dquotes: bool,
}

impl GridOptions {
    /// Comma-delimited columns, plain split, no quote handling.
    pub fn new() -> Self {
        Self {
            column_delimiters: CharSet::new(","),
            split: SplitOptions::default(),
            support_dquotes: false,
        }
    }

    /// Sets the column delimiter character set.
    pub fn column_delimiters(mut self, delimiters: &str) -> Self {
        self.column_delimiters = CharSet::new(delimiters);
        self
    }

    /// Sets the split options applied to each row.
    pub fn split_options(mut self, split: SplitOptions) -> Self {
        self.split = split;
        self
    }

    /// When set, delimiter characters inside a double-quoted segment do not
    /// split; the quote characters stay part of the cell text.
    pub fn support_dquotes(mut self, on: bool) -> Self {
        self.support_dquotes = on;
        self
    }
}

impl Default for GridOptions {
    fn default() -> Self {
        Self::new()
    }
}
