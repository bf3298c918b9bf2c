use token_core::{Delimiter, SplitOptions, Token};

/// Cursor state for one scanning pass over a buffer.
///
/// `skip_next` marks that the character at `pos` was already offered to the
/// predicate (and found to be content) while measuring a delimiter run, so
/// the next scan must not offer it again. Keeping that promise means a
/// stateful predicate (the grid's quote tracking) observes each character
/// exactly once.
#[derive(Debug, Clone)]
pub(crate) struct ScanState {
    pos: usize,
    first_scan: bool,
    done: bool,
    skip_next: bool,
}

impl ScanState {
    pub(crate) fn new() -> Self {
        Self {
            pos: 0,
            first_scan: true,
            done: false,
            skip_next: false,
        }
    }
}

/// Scans for the next token starting at `state.pos`, honoring the split
/// options.
///
/// This one routine is the delimiter-scanning core shared by the lazy
/// [`Tokenizer`] and the eager split functions, so the two always agree on
/// token boundaries. Returns the `[start, end)` byte span of the next token,
/// or `None` once the buffer is exhausted. Every character of the buffer is
/// offered to the predicate at most once, in input order.
pub(crate) fn scan_next<D: Delimiter>(
    buffer: &str,
    delimiter: &D,
    options: SplitOptions,
    state: &mut ScanState,
) -> Option<(usize, usize)> {
    let mut skip_first_char = std::mem::take(&mut state.skip_next);
    loop {
        if state.done {
            return None;
        }
        // Empty input yields zero tokens, not one empty token.
        if state.first_scan && buffer.is_empty() {
            state.done = true;
            return None;
        }
        let token_start = state.pos;

        // Scan forward to the next delimiter.
        let mut delim_start = None;
        for (i, ch) in buffer[state.pos..].char_indices() {
            if i == 0 && skip_first_char {
                continue;
            }
            if delimiter.is_delimiter(ch) {
                delim_start = Some((state.pos + i, ch.len_utf8()));
                break;
            }
        }
        skip_first_char = false;

        let Some((ds, d_len)) = delim_start else {
            // No delimiter left: emit the trailing token (possibly empty)
            // and stop. The trailing token survives compression.
            state.done = true;
            state.first_scan = false;
            state.pos = buffer.len();
            return Some((token_start, buffer.len()));
        };

        let including = options.include_first_delimiter || options.include_all_delimiters;

        // Interior empty candidate swallowed by compression. With inclusion
        // active the candidate would contain the delimiter and is no longer
        // empty, so compression never fires. The very first candidate is
        // always emitted, which keeps a leading delimiter observable.
        if options.compress_delimiters && ds == token_start && !state.first_scan && !including {
            state.pos = ds + d_len;
            continue;
        }

        let token_end = if options.include_all_delimiters {
            let mut end = ds + d_len;
            while let Some(ch) = buffer[end..].chars().next() {
                if delimiter.is_delimiter(ch) {
                    end += ch.len_utf8();
                } else {
                    // The run's boundary character is content and has now
                    // been tested; the next scan must not test it again.
                    state.skip_next = true;
                    break;
                }
            }
            state.pos = end;
            end
        } else if options.include_first_delimiter {
            state.pos = ds + d_len;
            ds + d_len
        } else {
            state.pos = ds + d_len;
            ds
        };

        state.first_scan = false;
        return Some((token_start, token_end));
    }
}

/// A forward iterator lazily yielding successive [`Token`]s of a buffer.
///
/// The tokenizer holds only its cursor position; tokens are views into the
/// buffer it was bound to. Iteration is the sole traversal interface: drive
/// it with `for` / `next()` until it returns `None`. A consumed tokenizer
/// can be rebound to a new buffer with [`assign`](Tokenizer::assign) instead
/// of being reconstructed.
#[derive(Debug, Clone)]
pub struct Tokenizer<'buf, D> {
    buffer: &'buf str,
    delimiter: D,
    options: SplitOptions,
    state: ScanState,
}

impl<'buf, D: Delimiter> Tokenizer<'buf, D> {
    /// Creates a tokenizer over `buffer` with default options.
    pub fn new(buffer: &'buf str, delimiter: D) -> Self {
        Self::with_options(buffer, delimiter, SplitOptions::default())
    }

    /// Creates a tokenizer with explicit split options.
    pub fn with_options(buffer: &'buf str, delimiter: D, options: SplitOptions) -> Self {
        Self {
            buffer,
            delimiter,
            options,
            state: ScanState::new(),
        }
    }

    /// Returns the options this tokenizer scans with.
    pub fn options(&self) -> SplitOptions {
        self.options
    }

    /// Returns the unconsumed suffix of the buffer.
    ///
    /// Useful when the caller stops mid-stream and wants to inspect or
    /// re-tokenize the rest with different settings.
    pub fn remaining(&self) -> &'buf str {
        &self.buffer[self.state.pos..]
    }

    /// Rebinds the tokenizer to a new buffer, resetting the cursor.
    pub fn assign(&mut self, buffer: &'buf str) {
        self.buffer = buffer;
        self.reset();
    }

    /// Rewinds the cursor to the start of the current buffer.
    pub fn reset(&mut self) {
        self.state = ScanState::new();
    }
}

impl<'buf, D: Delimiter> Iterator for Tokenizer<'buf, D> {
    type Item = Token<'buf>;

    fn next(&mut self) -> Option<Self::Item> {
        scan_next(self.buffer, &self.delimiter, self.options, &mut self.state)
            .map(|(start, end)| Token::new(self.buffer, start, end))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.state.done {
            (0, Some(0))
        } else {
            // At most one token per remaining character, plus the trailing one.
            (0, Some(self.buffer.len() - self.state.pos + 1))
        }
    }
}
