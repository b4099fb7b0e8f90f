//! Dense JSON arrays.

use core::{fmt, slice, str::FromStr};

use crate::{
    ArrayBuilder, EscapePolicy, Integer, LookupError, Minimal, Number, Object, ParseError, Value,
    parse_array,
};

/// An ordered, dense sequence of JSON values.
///
/// Arrays only grow through the `add*` methods. The `set*` methods overwrite
/// an existing element and panic on an index past the end; unlike
/// [`Object`], an array never silently creates a slot.
///
/// # Examples
///
/// ```
/// use exactjson::Array;
///
/// let mut array = Array::new();
/// array.add_string("x");
/// array.add_int(2);
/// array.set_bool(0, false);
///
/// assert_eq!(array.to_string(), "[false,2]");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Array(Vec<Value>);

impl Array {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the array has no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[Value] {
        &self.0
    }

    /// Elements, in order.
    pub fn iter(&self) -> slice::Iter<'_, Value> {
        self.0.iter()
    }

    /// The element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(index)
    }

    /// The element at `index`, mutably.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Value> {
        self.0.get_mut(index)
    }

    /// Appends `value`.
    pub fn add(&mut self, value: impl Into<Value>) {
        self.0.push(value.into());
    }

    /// Appends a string.
    pub fn add_string(&mut self, value: impl Into<String>) {
        self.add(Value::String(value.into()));
    }

    /// Appends a number.
    pub fn add_number(&mut self, value: Number) {
        self.add(Value::Number(value));
    }

    /// Appends an integer, stored as its decimal text.
    pub fn add_int<I: Integer>(&mut self, value: I) {
        self.add(Value::Number(value.into()));
    }

    /// Appends a boolean.
    pub fn add_bool(&mut self, value: bool) {
        self.add(Value::Bool(value));
    }

    /// Appends `null`.
    pub fn add_null(&mut self) {
        self.add(Value::Null);
    }

    /// Appends a nested object.
    pub fn add_object(&mut self, value: Object) {
        self.add(Value::Object(value));
    }

    /// Appends a nested array.
    pub fn add_array(&mut self, value: Array) {
        self.add(Value::Array(value));
    }

    /// Replaces the element at `index`, returning the old one.
    ///
    /// # Panics
    ///
    /// If `index >= self.len()`.
    #[track_caller]
    pub fn set(&mut self, index: usize, value: impl Into<Value>) -> Value {
        let len = self.0.len();
        match self.0.get_mut(index) {
            Some(slot) => core::mem::replace(slot, value.into()),
            None => panic!("index {index} out of bounds for array of length {len}"),
        }
    }

    /// Replaces the element at `index` with a string.
    ///
    /// # Panics
    ///
    /// If `index >= self.len()`.
    #[track_caller]
    pub fn set_string(&mut self, index: usize, value: impl Into<String>) {
        self.set(index, Value::String(value.into()));
    }

    /// Replaces the element at `index` with a number.
    ///
    /// # Panics
    ///
    /// If `index >= self.len()`.
    #[track_caller]
    pub fn set_number(&mut self, index: usize, value: Number) {
        self.set(index, Value::Number(value));
    }

    /// Replaces the element at `index` with an integer.
    ///
    /// # Panics
    ///
    /// If `index >= self.len()`.
    #[track_caller]
    pub fn set_int<I: Integer>(&mut self, index: usize, value: I) {
        self.set(index, Value::Number(value.into()));
    }

    /// Replaces the element at `index` with a boolean.
    ///
    /// # Panics
    ///
    /// If `index >= self.len()`.
    #[track_caller]
    pub fn set_bool(&mut self, index: usize, value: bool) {
        self.set(index, Value::Bool(value));
    }

    /// Replaces the element at `index` with `null`.
    ///
    /// # Panics
    ///
    /// If `index >= self.len()`.
    #[track_caller]
    pub fn set_null(&mut self, index: usize) {
        self.set(index, Value::Null);
    }

    /// Replaces the element at `index` with a nested object.
    ///
    /// # Panics
    ///
    /// If `index >= self.len()`.
    #[track_caller]
    pub fn set_object(&mut self, index: usize, value: Object) {
        self.set(index, Value::Object(value));
    }

    /// Replaces the element at `index` with a nested array.
    ///
    /// # Panics
    ///
    /// If `index >= self.len()`.
    #[track_caller]
    pub fn set_array(&mut self, index: usize, value: Array) {
        self.set(index, Value::Array(value));
    }

    fn lookup(&self, index: usize) -> Result<&Value, LookupError> {
        self.0.get(index).ok_or(LookupError::NoMatchingMember)
    }

    /// The string at `index`.
    ///
    /// # Errors
    ///
    /// [`LookupError::NoMatchingMember`] if out of bounds or not a string.
    pub fn get_string(&self, index: usize) -> Result<&str, LookupError> {
        self.lookup(index)?
            .as_str()
            .ok_or(LookupError::NoMatchingMember)
    }

    /// The number at `index`.
    ///
    /// # Errors
    ///
    /// [`LookupError::NoMatchingMember`] if out of bounds or not a number.
    pub fn get_number(&self, index: usize) -> Result<&Number, LookupError> {
        self.lookup(index)?
            .as_number()
            .ok_or(LookupError::NoMatchingMember)
    }

    /// The number at `index`, parsed as the integer type `I`.
    ///
    /// # Errors
    ///
    /// [`LookupError::NoMatchingMember`] if out of bounds or not a number,
    /// [`LookupError::NotANumber`] if the number is not an integer that fits
    /// `I`.
    pub fn get_int<I: Integer>(&self, index: usize) -> Result<I, LookupError> {
        self.get_number(index)?.to_int()
    }

    /// The boolean at `index`.
    ///
    /// # Errors
    ///
    /// [`LookupError::NoMatchingMember`] if out of bounds or not a boolean.
    pub fn get_bool(&self, index: usize) -> Result<bool, LookupError> {
        self.lookup(index)?
            .as_bool()
            .ok_or(LookupError::NoMatchingMember)
    }

    /// The object at `index`.
    ///
    /// # Errors
    ///
    /// [`LookupError::NoMatchingMember`] if out of bounds or not an object.
    pub fn get_object(&self, index: usize) -> Result<&Object, LookupError> {
        self.lookup(index)?
            .as_object()
            .ok_or(LookupError::NoMatchingMember)
    }

    /// The object at `index`, mutably.
    ///
    /// # Errors
    ///
    /// As [`Array::get_object`].
    pub fn get_object_mut(&mut self, index: usize) -> Result<&mut Object, LookupError> {
        self.0
            .get_mut(index)
            .and_then(Value::as_object_mut)
            .ok_or(LookupError::NoMatchingMember)
    }

    /// The array at `index`.
    ///
    /// # Errors
    ///
    /// [`LookupError::NoMatchingMember`] if out of bounds or not an array.
    pub fn get_array(&self, index: usize) -> Result<&Array, LookupError> {
        self.lookup(index)?
            .as_array()
            .ok_or(LookupError::NoMatchingMember)
    }

    /// The array at `index`, mutably.
    ///
    /// # Errors
    ///
    /// As [`Array::get_array`].
    pub fn get_array_mut(&mut self, index: usize) -> Result<&mut Array, LookupError> {
        self.0
            .get_mut(index)
            .and_then(Value::as_array_mut)
            .ok_or(LookupError::NoMatchingMember)
    }

    /// Whether the element at `index` is `null`.
    ///
    /// # Errors
    ///
    /// [`LookupError::NoMatchingMember`] if `index` is out of bounds.
    pub fn is_null(&self, index: usize) -> Result<bool, LookupError> {
        self.lookup(index).map(Value::is_null)
    }

    /// Returns `true` only if `index` is in bounds and holds `null`.
    #[must_use]
    pub fn exists_and_is_null(&self, index: usize) -> bool {
        self.0.get(index).is_some_and(Value::is_null)
    }

    /// Serializes the array, escaping strings under `policy`.
    #[must_use]
    pub fn to_json_with<P: EscapePolicy + ?Sized>(&self, policy: &P) -> String {
        let mut builder = ArrayBuilder::new(policy);
        for value in self {
            builder.add_value(value);
        }
        builder.done()
    }

    /// Serializes the array with the [`Minimal`] policy.
    #[must_use]
    pub fn to_json(&self) -> String {
        self.to_json_with(&Minimal)
    }
}

impl fmt::Display for Array {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_json())
    }
}

impl FromStr for Array {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_array(s)
    }
}

impl From<Vec<Value>> for Array {
    fn from(values: Vec<Value>) -> Self {
        Self(values)
    }
}

impl From<Array> for Vec<Value> {
    fn from(array: Array) -> Self {
        array.0
    }
}

impl<V: Into<Value>> FromIterator<V> for Array {
    fn from_iter<T: IntoIterator<Item = V>>(iter: T) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<V: Into<Value>> Extend<V> for Array {
    fn extend<T: IntoIterator<Item = V>>(&mut self, iter: T) {
        self.0.extend(iter.into_iter().map(Into::into));
    }
}

impl<'a> IntoIterator for &'a Array {
    type Item = &'a Value;
    type IntoIter = slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Array {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
