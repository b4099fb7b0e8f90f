//! Streaming construction of JSON text.
//!
//! A builder writes each member or element straight into its buffer as it is
//! added; no value tree is kept. The opening bracket is written lazily with
//! the first entry, and [`ObjectBuilder::done`] / [`ArrayBuilder::done`]
//! close the text. `done` takes the builder by value, so a finished builder
//! cannot be reused.
//!
//! Raw text passed to `add_json` is trusted and written verbatim. The typed
//! `add_*` methods encode their argument first, so they always produce valid
//! JSON.

use crate::{
    EscapePolicy, Integer, Minimal, Number, Value,
    escape::{encode_string, write_escaped_string},
};

/// Writes a JSON object member by member.
///
/// # Examples
///
/// ```
/// use exactjson::{AsciiOnly, ObjectBuilder};
///
/// let mut builder = ObjectBuilder::new(&AsciiOnly);
/// builder
///     .add_string("name", "Zoë")
///     .add_int("age", 7)
///     .add_json("tags", r#"["a","b"]"#);
/// assert_eq!(
///     builder.done(),
///     r#"{"name":"Zo\u00eb","age":7,"tags":["a","b"]}"#
/// );
/// ```
#[derive(Debug)]
pub struct ObjectBuilder<'p, P: EscapePolicy + ?Sized = Minimal> {
    policy: &'p P,
    buf: String,
    len: usize,
}

impl<'p, P: EscapePolicy + ?Sized> ObjectBuilder<'p, P> {
    /// Creates an empty builder that escapes names and strings under
    /// `policy`.
    #[must_use]
    pub fn new(policy: &'p P) -> Self {
        Self {
            policy,
            buf: String::new(),
            len: 0,
        }
    }

    /// Number of members added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no member has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds a member whose value is the pre-encoded JSON text `raw`.
    ///
    /// `raw` is not validated.
    pub fn add_json(&mut self, name: &str, raw: &str) -> &mut Self {
        self.buf.push(if self.len == 0 { '{' } else { ',' });
        // Writing into a `String` cannot fail.
        let _ = write_escaped_string(name, self.policy, &mut self.buf);
        self.buf.push(':');
        self.buf.push_str(raw);
        self.len += 1;
        self
    }

    /// Adds a string member.
    pub fn add_string(&mut self, name: &str, value: &str) -> &mut Self {
        let encoded = encode_string(value, self.policy);
        self.add_json(name, &encoded)
    }

    /// Adds a number member.
    pub fn add_number(&mut self, name: &str, value: &Number) -> &mut Self {
        self.add_json(name, value.as_str())
    }

    /// Adds an integer member.
    pub fn add_int<I: Integer>(&mut self, name: &str, value: I) -> &mut Self {
        self.add_json(name, &value.to_string())
    }

    /// Adds a boolean member.
    pub fn add_bool(&mut self, name: &str, value: bool) -> &mut Self {
        self.add_json(name, if value { "true" } else { "false" })
    }

    /// Adds a `null` member.
    pub fn add_null(&mut self, name: &str) -> &mut Self {
        self.add_json(name, "null")
    }

    /// Adds a member holding any value, serialized under this builder's
    /// policy.
    pub fn add_value(&mut self, name: &str, value: &Value) -> &mut Self {
        let encoded = value.to_json_with(self.policy);
        self.add_json(name, &encoded)
    }

    /// Finishes the object and returns its text; `{}` if nothing was added.
    #[must_use]
    pub fn done(mut self) -> String {
        if self.len == 0 {
            return "{}".to_owned();
        }
        self.buf.push('}');
        self.buf
    }
}

/// Writes a JSON array element by element.
///
/// # Examples
///
/// ```
/// use exactjson::{ArrayBuilder, Minimal};
///
/// let mut builder = ArrayBuilder::new(&Minimal);
/// builder.add_null().add_bool(true).add_string("\t");
/// assert_eq!(builder.done(), r#"[null,true,"\t"]"#);
///
/// assert_eq!(ArrayBuilder::new(&Minimal).done(), "[]");
/// ```
#[derive(Debug)]
pub struct ArrayBuilder<'p, P: EscapePolicy + ?Sized = Minimal> {
    policy: &'p P,
    buf: String,
    len: usize,
}

impl<'p, P: EscapePolicy + ?Sized> ArrayBuilder<'p, P> {
    /// Creates an empty builder that escapes strings under `policy`.
    #[must_use]
    pub fn new(policy: &'p P) -> Self {
        Self {
            policy,
            buf: String::new(),
            len: 0,
        }
    }

    /// Number of elements added so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no element has been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Adds the pre-encoded JSON text `raw` as an element.
    ///
    /// `raw` is not validated.
    pub fn add_json(&mut self, raw: &str) -> &mut Self {
        self.buf.push(if self.len == 0 { '[' } else { ',' });
        self.buf.push_str(raw);
        self.len += 1;
        self
    }

    /// Adds a string element.
    pub fn add_string(&mut self, value: &str) -> &mut Self {
        let encoded = encode_string(value, self.policy);
        self.add_json(&encoded)
    }

    /// Adds a number element.
    pub fn add_number(&mut self, value: &Number) -> &mut Self {
        self.add_json(value.as_str())
    }

    /// Adds an integer element.
    pub fn add_int<I: Integer>(&mut self, value: I) -> &mut Self {
        self.add_json(&value.to_string())
    }

    /// Adds a boolean element.
    pub fn add_bool(&mut self, value: bool) -> &mut Self {
        self.add_json(if value { "true" } else { "false" })
    }

    /// Adds a `null` element.
    pub fn add_null(&mut self) -> &mut Self {
        self.add_json("null")
    }

    /// Adds any value, serialized under this builder's policy.
    pub fn add_value(&mut self, value: &Value) -> &mut Self {
        let encoded = value.to_json_with(self.policy);
        self.add_json(&encoded)
    }

    /// Finishes the array and returns its text; `[]` if nothing was added.
    #[must_use]
    pub fn done(mut self) -> String {
        if self.len == 0 {
            return "[]".to_owned();
        }
        self.buf.push(']');
        self.buf
    }
}
