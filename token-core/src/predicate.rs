/// A delimiter predicate: a pure test deciding whether a character separates
/// tokens. Predicates carry no scan state; the same predicate value is shared
/// across every token produced from a buffer.
pub trait Delimiter {
    /// Returns `true` if `ch` is a delimiter.
    fn is_delimiter(&self, ch: char) -> bool;
}

impl<D: Delimiter + ?Sized> Delimiter for &D {
    fn is_delimiter(&self, ch: char) -> bool {
        (**self).is_delimiter(ch)
    }
}

/// A bare `char` is the single-value predicate: an equality test.
impl Delimiter for char {
    fn is_delimiter(&self, ch: char) -> bool {
        ch == *self
    }
}

/// Adapter turning any plain closure over a character into a predicate.
#[derive(Debug, Clone, Copy)]
pub struct Predicate<F>(pub F);

impl<F> Delimiter for Predicate<F>
where
    F: Fn(char) -> bool,
{
    fn is_delimiter(&self, ch: char) -> bool {
        (self.0)(ch)
    }
}

/// Membership test against a fixed set of delimiter characters.
///
/// ASCII members are answered from a 128-entry presence table; anything
/// beyond ASCII falls back to a short overflow list. Delimiter sets are
/// typically a handful of punctuation characters, so the overflow scan is a
/// non-issue in practice.
#[derive(Debug, Clone)]
pub struct CharSet {
    ascii: [bool; 128],
    other: Vec<char>,
}

impl CharSet {
    /// Builds the set from the characters of `delimiters`.
    pub fn new(delimiters: &str) -> Self {
        let mut set = Self {
            ascii: [false; 128],
            other: Vec::new(),
        };
        for ch in delimiters.chars() {
            set.insert(ch);
        }
        set
    }

    /// Adds a character to the set.
    pub fn insert(&mut self, ch: char) {
        if ch.is_ascii() {
            self.ascii[ch as usize] = true;
        } else if !self.other.contains(&ch) {
            self.other.push(ch);
        }
    }
}

impl Delimiter for CharSet {
    fn is_delimiter(&self, ch: char) -> bool {
        if ch.is_ascii() {
            self.ascii[ch as usize]
        } else {
            self.other.contains(&ch)
        }
    }
}

impl From<&str> for CharSet {
    fn from(delimiters: &str) -> Self {
        CharSet::new(delimiters)
    }
}
