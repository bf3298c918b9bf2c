use std::ops::Deref;

/// Non-owning view of a contiguous run of text bounded by delimiters.
///
/// A token records the byte range `[start, end)` it occupies in the source
/// buffer alongside the text itself, so callers can both treat it as a `&str`
/// (it implements `Deref<Target = str>`) and recover its position in the
/// original input. Tokens never copy; they are valid for as long as the
/// buffer they were produced from.
#[derive(Debug, Clone, Copy)]
pub struct Token<'buf> {
    text: &'buf str,
    start: usize,
    end: usize,
}

impl<'buf> Token<'buf> {
    /// Creates a token covering `buffer[start..end]`.
    ///
    /// Both offsets must lie on char boundaries of `buffer`.
    pub fn new(buffer: &'buf str, start: usize, end: usize) -> Self {
        debug_assert!(start <= end);
        debug_assert!(end <= buffer.len());
        Self {
            text: &buffer[start..end],
            start,
            end,
        }
    }

    /// Returns the token text.
    pub fn text(&self) -> &'buf str {
        self.text
    }

    /// Returns the byte offset of the token's first character in the buffer.
    pub fn start(&self) -> usize {
        self.start
    }

    /// Returns the byte offset one past the token's last character.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Returns the length in bytes.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Returns `true` for a zero-length token.
    ///
    /// An empty token is a real field (the gap between two adjacent
    /// delimiters), not the absence of one.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

impl Deref for Token<'_> {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.text
    }
}

impl AsRef<str> for Token<'_> {
    fn as_ref(&self) -> &str {
        self.text
    }
}

impl PartialEq for Token<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.start == other.start && self.end == other.end && self.text == other.text
    }
}

impl Eq for Token<'_> {}

impl PartialEq<&str> for Token<'_> {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}

impl PartialEq<Token<'_>> for &str {
    fn eq(&self, other: &Token<'_>) -> bool {
        *self == other.text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_spans_buffer() {
        let buf = "abc|def";
        let tok = Token::new(buf, 4, 7);
        assert_eq!(tok, "def");
        assert_eq!(tok.start(), 4);
        assert_eq!(tok.end(), 7);
        assert_eq!(tok.len(), 3);
        assert!(!tok.is_empty());
    }

    #[test]
    fn test_empty_token_is_a_field() {
        let buf = "a||b";
        let tok = Token::new(buf, 2, 2);
        assert!(tok.is_empty());
        assert_eq!(tok, "");
        assert_eq!(tok.len(), 0);
    }

    #[test]
    fn test_token_derefs_to_str() {
        let tok = Token::new("12345", 0, 3);
        assert_eq!(tok.parse::<i32>().unwrap(), 123);
        assert!(tok.starts_with("12"));
    }

    #[test]
    fn test_token_display() {
        let tok = Token::new("hello world", 6, 11);
        assert_eq!(tok.to_string(), "world");
    }
}
