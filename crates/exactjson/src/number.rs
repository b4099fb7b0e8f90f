//! Lossless JSON numbers.
//!
//! A [`Number`] keeps the exact text it was written with. `1.50` stays `1.50`
//! and `1e400` stays `1e400`; nothing is ever routed through a binary float.
//! Conversion happens only on request, and only into integer types, through
//! [`Number::to_int`].

use core::{fmt, num::ParseIntError, str::FromStr};

use crate::{
    LookupError,
    parser::{ParseError, Parser, ParserOptions},
};

/// A JSON number, stored as its decimal lexical text.
///
/// The text always matches the JSON number grammar
/// `-?(0|[1-9][0-9]*)(\.[0-9]+)?([eE][+-]?[0-9]+)?`.
///
/// # Examples
///
/// ```
/// use exactjson::Number;
///
/// let n: Number = "1.50".parse().unwrap();
/// assert_eq!(n.as_str(), "1.50");
///
/// assert!("01".parse::<Number>().is_err());
/// assert_eq!(Number::from(-7i32).as_str(), "-7");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Number(String);

impl Number {
    /// Wraps text the parser has already matched against the number grammar.
    pub(crate) fn from_lexeme(text: String) -> Self {
        Self(text)
    }

    /// The lexical text of the number.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the number, returning its lexical text.
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    /// Parses the number as the integer type `I`.
    ///
    /// # Errors
    ///
    /// [`LookupError::NotANumber`] if the text has a fraction or exponent, or
    /// the value is out of range for `I`. `-0` reads as zero for unsigned
    /// types too.
    pub fn to_int<I: Integer>(&self) -> Result<I, LookupError> {
        let digits = if self.0 == "-0" { "0" } else { self.0.as_str() };
        digits.parse().map_err(|source| LookupError::NotANumber {
            text: self.0.clone(),
            source,
        })
    }
}

impl FromStr for Number {
    type Err = ParseError;

    /// Validates `s` against the JSON number grammar. Surrounding whitespace
    /// is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser::new(s.as_bytes(), ParserOptions::default());
        let number = parser.parse_number()?;
        parser.expect_end_of_input()?;
        Ok(number)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Number {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for Number {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for Number {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

mod private {
    pub trait Sealed {}
}

/// Primitive integers that can be stored in and read back from a [`Number`].
///
/// Implemented for every signed and unsigned primitive integer type. This
/// trait is sealed.
pub trait Integer:
    Copy + fmt::Display + FromStr<Err = ParseIntError> + Into<Number> + private::Sealed
{
}

macro_rules! impl_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl private::Sealed for $ty {}
            impl Integer for $ty {}

            impl From<$ty> for Number {
                fn from(value: $ty) -> Self {
                    Self(value.to_string())
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
