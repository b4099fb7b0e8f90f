//! JSON value types.
//!
//! This module defines the [`Value`] enum, which represents any valid JSON
//! value. Objects and arrays are the ordered containers [`Object`] and
//! [`Array`]; numbers keep their lexical text as a [`Number`].

use core::fmt;

use crate::{Array, EscapePolicy, Minimal, Number, Object, escape::encode_string};

/// A JSON value as defined by [RFC 8259].
///
/// # Examples
///
/// ```
/// use exactjson::{Object, Value};
///
/// let mut object = Object::new();
/// object.set("key", "value");
/// let v = Value::Object(object);
/// assert_eq!(v.to_string(), r#"{"key":"value"}"#);
/// ```
///
/// [RFC 8259]: https://datatracker.ietf.org/doc/html/rfc8259
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Value {
    /// A string.
    String(String),
    /// A number, as its lexical text.
    Number(Number),
    /// `true` or `false`.
    Bool(bool),
    /// `null`.
    #[default]
    Null,
    /// An object.
    Object(Object),
    /// An array.
    Array(Array),
}

impl Value {
    /// Returns `true` if the value is [`Null`].
    ///
    /// [`Null`]: Value::Null
    ///
    /// # Examples
    ///
    /// ```
    /// use exactjson::Value;
    ///
    /// assert!(Value::Null.is_null());
    /// assert!(!Value::Bool(false).is_null());
    /// ```
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Bool`].
    ///
    /// [`Bool`]: Value::Bool
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(..))
    }

    /// Returns `true` if the value is [`Number`](Value::Number).
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`](Value::String).
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`](Value::Array).
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`](Value::Object).
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// The string, if this is one.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The number, if this is one.
    #[must_use]
    pub fn as_number(&self) -> Option<&Number> {
        match self {
            Self::Number(n) => Some(n),
            _ => None,
        }
    }

    /// The boolean, if this is one.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The object, if this is one.
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// The object, mutably, if this is one.
    pub fn as_object_mut(&mut self) -> Option<&mut Object> {
        match self {
            Self::Object(o) => Some(o),
            _ => None,
        }
    }

    /// The array, if this is one.
    #[must_use]
    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// The array, mutably, if this is one.
    pub fn as_array_mut(&mut self) -> Option<&mut Array> {
        match self {
            Self::Array(a) => Some(a),
            _ => None,
        }
    }

    /// Serializes the value, escaping strings under `policy`.
    #[must_use]
    pub fn to_json_with<P: EscapePolicy + ?Sized>(&self, policy: &P) -> String {
        match self {
            Self::String(s) => encode_string(s, policy),
            Self::Number(n) => n.as_str().to_owned(),
            Self::Bool(true) => "true".to_owned(),
            Self::Bool(false) => "false".to_owned(),
            Self::Null => "null".to_owned(),
            Self::Object(o) => o.to_json_with(policy),
            Self::Array(a) => a.to_json_with(policy),
        }
    }

    /// Serializes the value with the [`Minimal`] policy.
    #[must_use]
    pub fn to_json(&self) -> String {
        self.to_json_with(&Minimal)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<Number> for Value {
    fn from(v: Number) -> Self {
        Self::Number(v)
    }
}

impl From<Object> for Value {
    fn from(v: Object) -> Self {
        Self::Object(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Self::Array(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

macro_rules! from_integer {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Self::Number(Number::from(v))
                }
            }
        )*
    };
}

from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AsciiOnly, parse_array};

    #[test]
    fn scalars_serialize() {
        assert_eq!(Value::Null.to_json(), "null");
        assert_eq!(Value::from(true).to_json(), "true");
        assert_eq!(Value::from(-3i8).to_json(), "-3");
        assert_eq!(Value::from("ü\n").to_json(), "\"ü\\n\"");
        assert_eq!(Value::from("ü").to_json_with(&AsciiOnly), r#""\u00fc""#);
    }

    #[test]
    fn option_maps_none_to_null() {
        assert_eq!(Value::from(None::<bool>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
    }

    #[test]
    fn accessors_match_kinds() {
        let array = parse_array(r#"["s", 1e3, false, null, {}, []]"#).unwrap();
        let kinds: Vec<_> = array
            .iter()
            .map(|v| {
                (
                    v.is_string(),
                    v.is_number(),
                    v.is_bool(),
                    v.is_null(),
                    v.is_object(),
                    v.is_array(),
                )
            })
            .collect();
        assert_eq!(
            kinds,
            [
                (true, false, false, false, false, false),
                (false, true, false, false, false, false),
                (false, false, true, false, false, false),
                (false, false, false, true, false, false),
                (false, false, false, false, true, false),
                (false, false, false, false, false, true),
            ]
        );
        assert_eq!(array.get(1).and_then(Value::as_number).unwrap(), "1e3");
        assert_eq!(array.get(2).and_then(Value::as_bool), Some(false));
        assert!(array.get(0).and_then(Value::as_object).is_none());
    }
}
