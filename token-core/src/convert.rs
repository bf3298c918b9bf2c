//! Text-to-value conversion for parse destinations.

use crate::error::ConvertError;

/// Conversion from a token's text into a typed value.
///
/// Conversions are strict: the whole text must match the type's grammar, so
/// trailing garbage fails rather than being silently dropped. Numeric types
/// follow the std `FromStr` grammar (optional sign; scientific notation for
/// the float types).
pub trait FromToken: Sized {
    /// Type name reported in conversion errors.
    const TARGET: &'static str;

    /// Converts `text` into a value, or fails without side effects.
    fn from_token(text: &str) -> Result<Self, ConvertError>;
}

macro_rules! impl_from_token_via_from_str {
    ($($ty:ty),* $(,)?) => {
        $(
            impl FromToken for $ty {
                const TARGET: &'static str = stringify!($ty);

                fn from_token(text: &str) -> Result<Self, ConvertError> {
                    text.parse().map_err(|_| ConvertError { target: Self::TARGET })
                }
            }
        )*
    };
}

impl_from_token_via_from_str!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl FromToken for String {
    const TARGET: &'static str = "String";

    fn from_token(text: &str) -> Result<Self, ConvertError> {
        Ok(text.to_owned())
    }
}

impl FromToken for char {
    const TARGET: &'static str = "char";

    fn from_token(text: &str) -> Result<Self, ConvertError> {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Ok(ch),
            _ => Err(ConvertError { target: Self::TARGET }),
        }
    }
}

impl FromToken for bool {
    const TARGET: &'static str = "bool";

    // Accepts the std grammar plus the conventional numeric forms.
    fn from_token(text: &str) -> Result<Self, ConvertError> {
        match text {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(ConvertError { target: Self::TARGET }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_int() {
        assert_eq!(i32::from_token("-1234"), Ok(-1234));
        assert_eq!(i32::from_token("+42"), Ok(42));
        assert!(i32::from_token("12x").is_err());
        assert!(i32::from_token("").is_err());
    }

    #[test]
    fn test_unsigned_rejects_sign() {
        assert_eq!(u32::from_token("78901"), Ok(78901));
        assert!(u32::from_token("-1").is_err());
    }

    #[test]
    fn test_float_scientific_notation() {
        assert_eq!(f64::from_token("4567.8901"), Ok(4567.8901));
        assert_eq!(f64::from_token("1.5e3"), Ok(1500.0));
        assert_eq!(f64::from_token("-2E-2"), Ok(-0.02));
        assert!(f64::from_token("1.2.3").is_err());
    }

    #[test]
    fn test_char_exactly_one() {
        assert_eq!(char::from_token("x"), Ok('x'));
        assert!(char::from_token("xy").is_err());
        assert!(char::from_token("").is_err());
    }

    #[test]
    fn test_bool_forms() {
        assert_eq!(bool::from_token("true"), Ok(true));
        assert_eq!(bool::from_token("0"), Ok(false));
        assert!(bool::from_token("yes").is_err());
    }

    #[test]
    fn test_string_never_fails() {
        assert_eq!(String::from_token("anything at all"), Ok("anything at all".to_owned()));
    }

    #[test]
    fn test_error_names_target() {
        let err = i64::from_token("abc").unwrap_err();
        assert_eq!(err.target, "i64");
    }
}
