//! JSON value representation.

use indexmap::IndexMap;
use std::fmt;

/// Ordered mapping used for JSON objects.
///
/// Keys borrow from the input buffer just like [`Value::String`].
pub type Object<'a> = IndexMap<&'a [u8], Value<'a>>;

/// A parsed JSON value.
///
/// Strings and object keys are zero-copy views into the buffer the value was
/// parsed from, so a `Value<'a>` cannot outlive its input. Bytes inside
/// strings are kept as they appear in the input: escapes are not decoded and
/// the contents are not required to be UTF-8.
#[derive(Clone, PartialEq)]
pub enum Value<'a> {
    /// Null value.
    Null,
    /// Boolean value.
    Boolean(bool),
    /// Raw string contents between the quotes.
    String(&'a [u8]),
    /// 64-bit floating-point number.
    Number(f64),
    /// Array of values.
    Array(Vec<Value<'a>>),
    /// Object with unique keys in insertion order.
    Object(Object<'a>),
}

impl<'a> Value<'a> {
    /// Returns `true` if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean value if this is a `Boolean`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the number if this is a `Number`.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the raw string bytes if this is a `String`.
    pub fn as_bytes(&self) -> Option<&'a [u8]> {
        match self {
            Value::String(s) => Some(*s),
            _ => None,
        }
    }

    /// Returns the string as `&str` if this is a `String` holding valid UTF-8.
    pub fn as_str(&self) -> Option<&'a str> {
        self.as_bytes().and_then(|s| std::str::from_utf8(s).ok())
    }

    /// Returns a reference to the elements if this is an `Array`.
    pub fn as_array(&self) -> Option<&Vec<Value<'a>>> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Returns a reference to the entries if this is an `Object`.
    pub fn as_object(&self) -> Option<&Object<'a>> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Looks up `key` if this is an `Object`.
    pub fn get(&self, key: impl AsRef<[u8]>) -> Option<&Value<'a>> {
        self.as_object().and_then(|obj| obj.get(key.as_ref()))
    }

    /// Name of the variant, as used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::String(_) => "string",
            Value::Number(_) => "number",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    /// Releases this value and every container it owns.
    ///
    /// Scalars own nothing, so releasing them does nothing. Containers are
    /// emptied into a work stack before their storage is freed, so the walk
    /// does not recurse however deep the tree is.
    pub fn release(self) {
        let mut pending = vec![self];
        while let Some(value) = pending.pop() {
            match value {
                Value::Array(elements) => pending.extend(elements),
                Value::Object(entries) => pending.extend(entries.into_values()),
                Value::Null | Value::Boolean(_) | Value::String(_) | Value::Number(_) => {}
            }
        }
    }
}

/// Debug helper rendering raw bytes as a quoted, lossily decoded string.
struct Lossy<'b>(&'b [u8]);

impl fmt::Debug for Lossy<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", String::from_utf8_lossy(self.0))
    }
}

impl fmt::Debug for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => fmt::Debug::fmt(&Lossy(*s), f),
            Value::Array(arr) => f.debug_list().entries(arr).finish(),
            Value::Object(obj) => f
                .debug_map()
                .entries(obj.iter().map(|(k, v)| (Lossy(*k), v)))
                .finish(),
        }
    }
}
