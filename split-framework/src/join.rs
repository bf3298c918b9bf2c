/// Joins a sequence of tokens back into a single delimited string.
///
/// The inverse of a plain (no-options) split: for a delimiter character that
/// does not occur inside any token, `join(d, split(d, s))` reproduces `s`.
pub fn join<I, S>(delimiter: &str, tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for (i, tok) in tokens.into_iter().enumerate() {
        if i > 0 {
            out.push_str(delimiter);
        }
        out.push_str(tok.as_ref());
    }
    out
}

/// Joins only the tokens accepted by `predicate`.
pub fn join_if<I, S, P>(delimiter: &str, mut predicate: P, tokens: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    P: FnMut(&str) -> bool,
{
    let mut out = String::new();
    let mut first = true;
    for tok in tokens {
        if !predicate(tok.as_ref()) {
            continue;
        }
        if !first {
            out.push_str(delimiter);
        }
        out.push_str(tok.as_ref());
        first = false;
    }
    out
}
