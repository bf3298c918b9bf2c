use std::fmt::{Display, Write};

/// Composes a delimited string from heterogeneous values, the mirror of
/// [`parse`](crate::parse).
///
/// ```
/// use parse_framework::construct;
///
/// let line = construct("|", &[&"abcd", &'x', &-1234, &4567.8901]);
/// assert_eq!(line, "abcd|x|-1234|4567.8901");
/// ```
pub fn construct(delimiter: &str, values: &[&dyn Display]) -> String {
    let mut out = String::new();
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            out.push_str(delimiter);
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "{value}");
    }
    out
}
