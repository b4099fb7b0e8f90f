//! Order-preserving, lossless JSON.
//!
//! `exactjson` parses JSON objects and arrays into a mutable tree that keeps
//! what most JSON libraries throw away:
//!
//! - object members stay in the order they were first inserted, through
//!   parsing, editing and re-encoding;
//! - numbers keep their exact lexical text (`1.50`, `1e400`, 30-digit
//!   integers), so nothing is rounded through `f64`;
//! - duplicate member names are a parse error instead of last-one-wins.
//!
//! Output is produced by [`ObjectBuilder`] and [`ArrayBuilder`], which write
//! text incrementally, with string escaping decided by an [`EscapePolicy`].
//!
//! ```
//! use exactjson::{AsciiOnly, parse_object};
//!
//! let mut config = parse_object(r#"{"name":"café","ratio":0.10,"tags":[]}"#).unwrap();
//! config.get_array_mut("tags").unwrap().add_string("new");
//! config.set_int("ratio", 1);
//!
//! assert_eq!(config.to_string(), r#"{"name":"café","ratio":1,"tags":["new"]}"#);
//! assert_eq!(
//!     config.to_json_with(&AsciiOnly),
//!     r#"{"name":"caf\u00e9","ratio":1,"tags":["new"]}"#
//! );
//! ```

mod array;
mod builder;
mod error;
mod escape;
mod number;
mod object;
mod parser;
mod value;

#[cfg(test)]
mod tests;

pub use array::Array;
pub use builder::{ArrayBuilder, ObjectBuilder};
pub use error::LookupError;
pub use escape::{
    AsciiOnly, EscapeFn, EscapePolicy, Minimal, UnicodeEscapes, encode_string,
    write_escaped_string,
};
pub use number::{Integer, Number};
pub use object::{Members, Object};
pub use parser::{
    DEFAULT_MAX_NESTING_DEPTH, ParseContext, ParseError, Parser, ParserOptions, SyntaxError,
    parse_array, parse_array_bytes, parse_object, parse_object_bytes,
};
pub use value::Value;
