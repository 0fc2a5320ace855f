//! The generic document tree and its type-checked extractors.
//!
//! [`Value`] is a closed sum type mirroring what a parsed JSON or YAML document
//! can hold, minus floating point numbers: null, booleans, 64-bit signed
//! integers, strings, arrays and insertion-ordered objects. Composite variants
//! own their children, so a `Value` never aliases another tree and can be
//! shared freely between readers once built.
//!
//! Every extractor returns `Option`: a missing key, the wrong container kind and
//! the wrong leaf kind all collapse to `None`.
//!
//! # Example
//! ```
//! use dict_core::{object, Value};
//!
//! let doc = Value::from(object! {
//!     "name" => "view",
//!     "users" => vec![Value::from("667d0baedfb1ed18430d8ed3")],
//! });
//! assert_eq!(doc.get_str("name"), Some("view"));
//! assert_eq!(doc.get_array("users").map(|u| u.len()), Some(1));
//! assert_eq!(doc.get_integer("name"), None);
//! ```

use std::fmt;

/// A JSON/YAML-like document fragment.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    String(String),
    Array(Vec<Value>),
    Object(Object),
}

/// Key-value pairs in insertion order, with unique keys.
///
/// Equality is order-sensitive: two objects holding the same members in a
/// different order compare unequal.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Object {
    entries: Vec<(String, Value)>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an object from ordered `(key, value)` pairs.
    ///
    /// A key that appears twice keeps its first position and its last value.
    ///
    /// ```
    /// use dict_core::{Object, Value};
    ///
    /// let o = Object::from_pairs([("a", Value::from("x")), ("b", Value::from(10))]);
    /// assert_eq!(o.get_str("a"), Some("x"));
    /// assert_eq!(o.get_integer("b"), Some(10));
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        pairs.into_iter().collect()
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Append without the duplicate check; the caller guarantees `key` is new.
    pub(crate) fn push_unique(&mut self, key: String, value: Value) {
        self.entries.push((key, value));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Look up a member by key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Insert a member, returning the previous value for `key` if there was one.
    ///
    /// An existing key is updated where it stands; a new key is appended.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(entry_ref)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Look up `key` and require it to hold an object.
    pub fn get_object(&self, key: &str) -> Option<&Object> {
        self.get(key).and_then(Value::as_object)
    }

    /// Look up `key` and require it to hold an array.
    pub fn get_array(&self, key: &str) -> Option<&[Value]> {
        self.get(key).and_then(Value::as_array)
    }

    /// Look up `key` and require it to hold a string.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Look up `key` and require it to hold an integer.
    pub fn get_integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_integer)
    }

    /// Look up `key` and require it to hold a boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_bool)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Object::new();
        for (key, value) in iter {
            object.insert(key, value);
        }
        object
    }
}

impl IntoIterator for Object {
    type Item = (String, Value);
    type IntoIter = std::vec::IntoIter<(String, Value)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a str, &'a Value);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, Value)>,
        fn(&'a (String, Value)) -> (&'a str, &'a Value),
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.entries
            .iter()
            .map(entry_ref as fn(&'a (String, Value)) -> (&'a str, &'a Value))
    }
}

fn entry_ref(entry: &(String, Value)) -> (&str, &Value) {
    (entry.0.as_str(), &entry.1)
}

impl Value {
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Value::Object(o) => Some(o),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// The integer held by this value. Covers the full `i64` range.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_array(&self) -> bool {
        matches!(self, Value::Array(_))
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Short name of the variant, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Look up `key` if this value is an object.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.as_object().and_then(|o| o.get(key))
    }

    // The composites below save call sites an explicit `as_object` step.

    pub fn get_object(&self, key: &str) -> Option<&Object> {
        self.as_object().and_then(|o| o.get_object(key))
    }

    pub fn get_array(&self, key: &str) -> Option<&[Value]> {
        self.as_object().and_then(|o| o.get_array(key))
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.as_object().and_then(|o| o.get_str(key))
    }

    pub fn get_integer(&self, key: &str) -> Option<i64> {
        self.as_object().and_then(|o| o.get_integer(key))
    }

    pub fn get_bool(&self, key: &str) -> Option<bool> {
        self.as_object().and_then(|o| o.get_bool(key))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Integer(i64::from(n))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Value::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Object> for Value {
    fn from(o: Object) -> Self {
        Value::Object(o)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}

/// Renders the value as compact JSON.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

/// Build an [`Object`] from `key => value` pairs of mixed value types.
///
/// ```
/// use dict_core::{array, object};
///
/// let o = object! {
///     "name" => "joe",
///     "nums" => array![1, 2, 3],
///     "admin" => true,
/// };
/// assert_eq!(o.get_str("name"), Some("joe"));
/// assert_eq!(o.get_array("nums").map(|n| n.len()), Some(3));
/// ```
#[macro_export]
macro_rules! object {
    () => {
        $crate::Object::new()
    };
    ( $( $key:expr => $value:expr ),+ $(,)? ) => {{
        let mut object = $crate::Object::new();
        $( object.insert($key, $crate::Value::from($value)); )+
        object
    }};
}

/// Build a [`Value::Array`] from elements of mixed value types.
#[macro_export]
macro_rules! array {
    () => {
        $crate::Value::Array(::std::vec::Vec::new())
    };
    ( $( $elem:expr ),+ $(,)? ) => {
        $crate::Value::Array(::std::vec![ $( $crate::Value::from($elem) ),+ ])
    };
}
