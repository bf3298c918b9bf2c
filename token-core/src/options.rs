/// Configuration for how a delimiter run is folded into the token stream.
///
/// The flags compose; inclusion of delimiters is applied to the run first,
/// after which compression decides whether a resulting empty follow-up token
/// is suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SplitOptions {
    /// Collapse consecutive delimiters into a single split point, suppressing
    /// the empty tokens that would otherwise appear between them.
    pub compress_delimiters: bool,
    /// Append the first delimiter character of a run to the preceding token
    /// instead of discarding it.
    pub include_first_delimiter: bool,
    /// Append the entire delimiter run to the preceding token.
    pub include_all_delimiters: bool,
}

impl SplitOptions {
    /// All flags off: every delimiter splits, delimiters are discarded.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets delimiter-run compression.
    pub fn compress_delimiters(mut self, on: bool) -> Self {
        self.compress_delimiters = on;
        self
    }

    /// Sets inclusion of the first delimiter of each run.
    pub fn include_first_delimiter(mut self, on: bool) -> Self {
        self.include_first_delimiter = on;
        self
    }

    /// Sets inclusion of the whole delimiter run.
    pub fn include_all_delimiters(mut self, on: bool) -> Self {
        self.include_all_delimiters = on;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_off() {
        let opts = SplitOptions::default();
        assert!(!opts.compress_delimiters);
        assert!(!opts.include_first_delimiter);
        assert!(!opts.include_all_delimiters);
    }

    #[test]
    fn test_setters_chain() {
        let opts = SplitOptions::new()
            .compress_delimiters(true)
            .include_first_delimiter(true);
        assert!(opts.compress_delimiters);
        assert!(opts.include_first_delimiter);
        assert!(!opts.include_all_delimiters);
    }
}
