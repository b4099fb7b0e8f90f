use core::num::ParseIntError;

use thiserror::Error;

/// Failure to read a typed value out of an [`Object`](crate::Object) or
/// [`Array`](crate::Array).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// The key or index is absent, or holds a value of another kind.
    #[error("no matching member")]
    NoMatchingMember,
    /// The number is not an integer, or does not fit the requested type.
    #[error("number {text} is not representable as the requested integer type: {source}")]
    NotANumber {
        /// Lexical text of the offending number.
        text: String,
        /// Why the integer conversion failed.
        source: ParseIntError,
    },
}
