//! Insertion-ordered JSON objects.

use core::{fmt, str::FromStr};

use indexmap::{IndexMap, map};

use crate::{
    Array, EscapePolicy, Integer, LookupError, Minimal, Number, ObjectBuilder, ParseError, Value,
    parse_object,
};

/// A JSON object whose members keep their first-insertion order.
///
/// Member names are unique. Setting an existing name replaces its value, of
/// whatever kind, without moving the member; new names are appended.
///
/// Equality is structural and order-sensitive: `{"a":1,"b":2}` and
/// `{"b":2,"a":1}` are different objects.
///
/// # Examples
///
/// ```
/// use exactjson::Object;
///
/// let mut object = Object::new();
/// object.set_int("b", 1);
/// object.set_string("a", "x");
/// object.set_bool("b", true);
///
/// assert_eq!(object.to_string(), r#"{"b":true,"a":"x"}"#);
/// assert!(object.get_int::<u8>("b").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Object(IndexMap<String, Value>);

impl Object {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the object has no members.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns `true` if a member named `key` exists, whatever its value.
    #[must_use]
    pub fn has(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Member names, in order.
    pub fn keys(&self) -> impl DoubleEndedIterator<Item = &str> + ExactSizeIterator {
        self.0.keys().map(String::as_str)
    }

    /// Members, in order.
    pub fn iter(&self) -> Members<'_> {
        Members(self.0.iter())
    }

    /// The value of member `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    /// The value of member `key`, mutably.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        self.0.get_mut(key)
    }

    /// Sets member `key` to `value`, returning the value it replaced.
    ///
    /// An existing member keeps its position.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    /// Sets member `key` to a string.
    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set(key, Value::String(value.into()));
    }

    /// Sets member `key` to a number.
    pub fn set_number(&mut self, key: impl Into<String>, value: Number) {
        self.set(key, Value::Number(value));
    }

    /// Sets member `key` to an integer, stored as its decimal text.
    pub fn set_int<I: Integer>(&mut self, key: impl Into<String>, value: I) {
        self.set(key, Value::Number(value.into()));
    }

    /// Sets member `key` to a boolean.
    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.set(key, Value::Bool(value));
    }

    /// Sets member `key` to `null`.
    pub fn set_null(&mut self, key: impl Into<String>) {
        self.set(key, Value::Null);
    }

    /// Sets member `key` to a nested object.
    pub fn set_object(&mut self, key: impl Into<String>, value: Object) {
        self.set(key, Value::Object(value));
    }

    /// Sets member `key` to a nested array.
    pub fn set_array(&mut self, key: impl Into<String>, value: Array) {
        self.set(key, Value::Array(value));
    }

    fn lookup(&self, key: &str) -> Result<&Value, LookupError> {
        self.0.get(key).ok_or(LookupError::NoMatchingMember)
    }

    /// The string value of member `key`.
    ///
    /// # Errors
    ///
    /// [`LookupError::NoMatchingMember`] if the member is missing or not a
    /// string.
    pub fn get_string(&self, key: &str) -> Result<&str, LookupError> {
        self.lookup(key)?
            .as_str()
            .ok_or(LookupError::NoMatchingMember)
    }

    /// The number value of member `key`.
    ///
    /// # Errors
    ///
    /// [`LookupError::NoMatchingMember`] if the member is missing or not a
    /// number.
    pub fn get_number(&self, key: &str) -> Result<&Number, LookupError> {
        self.lookup(key)?
            .as_number()
            .ok_or(LookupError::NoMatchingMember)
    }

    /// The number value of member `key`, parsed as the integer type `I`.
    ///
    /// # Errors
    ///
    /// [`LookupError::NoMatchingMember`] if the member is missing or not a
    /// number, [`LookupError::NotANumber`] if the number is not an integer
    /// that fits `I`.
    ///
    /// # Examples
    ///
    /// ```
    /// let object = exactjson::parse_object(r#"{"small":7,"big":300,"frac":1.5}"#).unwrap();
    ///
    /// assert_eq!(object.get_int::<u8>("small"), Ok(7));
    /// assert!(object.get_int::<u8>("big").is_err());
    /// assert!(object.get_int::<i64>("frac").is_err());
    /// ```
    pub fn get_int<I: Integer>(&self, key: &str) -> Result<I, LookupError> {
        self.get_number(key)?.to_int()
    }

    /// The boolean value of member `key`.
    ///
    /// # Errors
    ///
    /// [`LookupError::NoMatchingMember`] if the member is missing or not a
    /// boolean.
    pub fn get_bool(&self, key: &str) -> Result<bool, LookupError> {
        self.lookup(key)?
            .as_bool()
            .ok_or(LookupError::NoMatchingMember)
    }

    /// The object value of member `key`.
    ///
    /// # Errors
    ///
    /// [`LookupError::NoMatchingMember`] if the member is missing or not an
    /// object.
    pub fn get_object(&self, key: &str) -> Result<&Object, LookupError> {
        self.lookup(key)?
            .as_object()
            .ok_or(LookupError::NoMatchingMember)
    }

    /// The object value of member `key`, mutably.
    ///
    /// # Errors
    ///
    /// As [`Object::get_object`].
    pub fn get_object_mut(&mut self, key: &str) -> Result<&mut Object, LookupError> {
        self.0
            .get_mut(key)
            .and_then(Value::as_object_mut)
            .ok_or(LookupError::NoMatchingMember)
    }

    /// The array value of member `key`.
    ///
    /// # Errors
    ///
    /// [`LookupError::NoMatchingMember`] if the member is missing or not an
    /// array.
    pub fn get_array(&self, key: &str) -> Result<&Array, LookupError> {
        self.lookup(key)?
            .as_array()
            .ok_or(LookupError::NoMatchingMember)
    }

    /// The array value of member `key`, mutably.
    ///
    /// # Errors
    ///
    /// As [`Object::get_array`].
    pub fn get_array_mut(&mut self, key: &str) -> Result<&mut Array, LookupError> {
        self.0
            .get_mut(key)
            .and_then(Value::as_array_mut)
            .ok_or(LookupError::NoMatchingMember)
    }

    /// Whether member `key` is `null`.
    ///
    /// # Errors
    ///
    /// [`LookupError::NoMatchingMember`] if there is no member `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use exactjson::{LookupError, parse_object};
    ///
    /// let object = parse_object(r#"{"a":null,"b":0}"#).unwrap();
    /// assert_eq!(object.is_null("a"), Ok(true));
    /// assert_eq!(object.is_null("b"), Ok(false));
    /// assert_eq!(object.is_null("c"), Err(LookupError::NoMatchingMember));
    /// ```
    pub fn is_null(&self, key: &str) -> Result<bool, LookupError> {
        self.lookup(key).map(Value::is_null)
    }

    /// Returns `true` only if member `key` exists and is `null`.
    #[must_use]
    pub fn exists_and_is_null(&self, key: &str) -> bool {
        self.0.get(key).is_some_and(Value::is_null)
    }

    /// Serializes the object, escaping member names and strings under
    /// `policy`.
    #[must_use]
    pub fn to_json_with<P: EscapePolicy + ?Sized>(&self, policy: &P) -> String {
        let mut builder = ObjectBuilder::new(policy);
        for (key, value) in self {
            builder.add_value(key, value);
        }
        builder.done()
    }

    /// Serializes the object with the [`Minimal`] policy.
    #[must_use]
    pub fn to_json(&self) -> String {
        self.to_json_with(&Minimal)
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        // `IndexMap`'s own equality ignores order.
        self.len() == other.len() && self.0.iter().eq(other.0.iter())
    }
}

impl Eq for Object {}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

impl FromStr for Object {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_object(s)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    /// Later duplicates of a name overwrite earlier ones in place.
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut object = Self::new();
        object.extend(iter);
        object
    }
}

impl<K: Into<String>, V: Into<Value>> Extend<(K, V)> for Object {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        for (key, value) in iter {
            self.set(key, value);
        }
    }
}

/// Borrowing iterator over the members of an [`Object`].
#[derive(Clone, Debug)]
pub struct Members<'a>(map::Iter<'a, String, Value>);

impl<'a> Iterator for Members<'a> {
    type Item = (&'a str, &'a Value);

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next().map(|(k, v)| (k.as_str(), v))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl DoubleEndedIterator for Members<'_> {
    fn next_back(&mut self) -> Option<Self::Item> {
        self.0.next_back().map(|(k, v)| (k.as_str(), v))
    }
}

impl ExactSizeIterator for Members<'_> {}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a str, &'a Value);
    type IntoIter = Members<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
