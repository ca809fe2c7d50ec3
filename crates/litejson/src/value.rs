//! The JSON value tree.
//!
//! [`Value`] is a closed sum over null, booleans, numbers, strings, arrays,
//! and objects. A value exclusively owns its payload: cloning is a deep
//! clone, and [`Value::take`] moves a value out leaving `Null` behind.
//! Objects are kept as key-value pairs in insertion order (no map
//! dependency) so that a parse → dump round trip preserves the document
//! layout; duplicate keys are resolved last-write-wins at parse time and
//! cannot occur afterwards.

use std::fmt;
use std::ops::Index;
use std::str::FromStr;

use crate::error::{JsonError, Result};
use crate::{parser, writer};

/// The tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "boolean",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        })
    }
}

/// A JSON number.
///
/// The parser produces `Int` for `-`-prefixed integer literals, `UInt`
/// otherwise, and `Float` whenever a fraction or exponent is present or the
/// integer literal overflows 64 bits. Equality is numeric across the three
/// sub-kinds, so `1`, `1u64`, and `1.0` compare equal.
#[derive(Debug, Clone, Copy)]
pub enum Number {
    Int(i64),
    UInt(u64),
    Float(f64),
}

impl Number {
    /// The value as an `i64`, if it fits without truncation.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Number::Int(i) => Some(i),
            Number::UInt(u) => i64::try_from(u).ok(),
            Number::Float(_) => None,
        }
    }

    /// The value as a `u64`, if it is a non-negative integer.
    pub fn as_u64(&self) -> Option<u64> {
        match *self {
            Number::Int(i) => u64::try_from(i).ok(),
            Number::UInt(u) => Some(u),
            Number::Float(_) => None,
        }
    }

    /// The value as an `f64`, converting integer sub-kinds (lossy above
    /// 2^53).
    pub fn as_f64(&self) -> f64 {
        match *self {
            Number::Int(i) => i as f64,
            Number::UInt(u) => u as f64,
            Number::Float(f) => f,
        }
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        use Number::{Float, Int, UInt};
        match (*self, *other) {
            (Int(a), Int(b)) => a == b,
            (UInt(a), UInt(b)) => a == b,
            (Int(a), UInt(b)) | (UInt(b), Int(a)) => a >= 0 && a as u64 == b,
            (Float(a), Float(b)) => a == b,
            (Int(a), Float(b)) | (Float(b), Int(a)) => a as f64 == b,
            (UInt(a), Float(b)) | (Float(b), UInt(a)) => a as f64 == b,
        }
    }
}

/// A JSON value: the recursive tagged-union tree representing any datum.
///
/// ```rust
/// use litejson::Value;
///
/// let mut doc = Value::Null;
/// *doc.entry("name").unwrap() = "Alice".into();
/// doc.entry("scores").unwrap().push(Value::from(95)).unwrap();
/// assert_eq!(doc.dump(0, true), r#"{"name":"Alice","scores":[95]}"#);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
}

impl Value {
    /// An empty array value.
    pub fn array() -> Value {
        Value::Array(Vec::new())
    }

    /// An empty object value.
    pub fn object() -> Value {
        Value::Object(Vec::new())
    }

    /// The active variant tag.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(_) => ValueKind::Number,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Value::Number(n) => n.as_u64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_array_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&Vec<(String, Value)>> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    pub fn as_object_mut(&mut self) -> Option<&mut Vec<(String, Value)>> {
        match self {
            Value::Object(entries) => Some(entries),
            _ => None,
        }
    }

    /// Look up an object entry by key. `None` on a missing key or a
    /// non-object receiver; never vivifies.
    pub fn get(&self, key: &str) -> Option<&Value> {
        match self {
            Value::Object(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Value> {
        match self {
            Value::Object(entries) => entries
                .iter_mut()
                .find(|(k, _)| k == key)
                .map(|(_, v)| v),
            _ => None,
        }
    }

    /// Look up an array element by position. `None` when out of range or on
    /// a non-array receiver.
    pub fn get_index(&self, index: usize) -> Option<&Value> {
        match self {
            Value::Array(items) => items.get(index),
            _ => None,
        }
    }

    pub fn get_index_mut(&mut self, index: usize) -> Option<&mut Value> {
        match self {
            Value::Array(items) => items.get_mut(index),
            _ => None,
        }
    }

    /// The object slot for `key`, inserting a `Null` entry if absent.
    ///
    /// A `Null` receiver becomes an empty object first. Any other non-object
    /// receiver is a [`JsonError::TypeMismatch`].
    pub fn entry(&mut self, key: &str) -> Result<&mut Value> {
        if self.is_null() {
            *self = Value::object();
        }
        match self {
            Value::Object(entries) => {
                let idx = match entries.iter().position(|(k, _)| k == key) {
                    Some(i) => i,
                    None => {
                        entries.push((key.to_owned(), Value::Null));
                        entries.len() - 1
                    }
                };
                Ok(&mut entries[idx].1)
            }
            other => Err(JsonError::TypeMismatch {
                expected: ValueKind::Object,
                found: other.kind(),
            }),
        }
    }

    /// The array slot at `index`.
    ///
    /// A `Null` receiver becomes an empty array first. Indexing past the
    /// current length is a [`JsonError::IndexOutOfBounds`]; the array is
    /// never extended implicitly. Grow with [`Value::push`] instead.
    pub fn element(&mut self, index: usize) -> Result<&mut Value> {
        if self.is_null() {
            *self = Value::array();
        }
        match self {
            Value::Array(items) => {
                let len = items.len();
                items
                    .get_mut(index)
                    .ok_or(JsonError::IndexOutOfBounds { index, len })
            }
            other => Err(JsonError::TypeMismatch {
                expected: ValueKind::Array,
                found: other.kind(),
            }),
        }
    }

    /// Append to an array, vivifying a `Null` receiver into an empty array.
    pub fn push(&mut self, value: Value) -> Result<()> {
        if self.is_null() {
            *self = Value::array();
        }
        match self {
            Value::Array(items) => {
                items.push(value);
                Ok(())
            }
            other => Err(JsonError::TypeMismatch {
                expected: ValueKind::Array,
                found: other.kind(),
            }),
        }
    }

    /// Remove an object entry. `true` only if the key existed; `false` on
    /// absent keys and non-object receivers.
    pub fn remove_key(&mut self, key: &str) -> bool {
        match self {
            Value::Object(entries) => match entries.iter().position(|(k, _)| k == key) {
                Some(i) => {
                    entries.remove(i);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    /// Remove an array element. `false` when out of range or on a non-array
    /// receiver.
    pub fn remove_index(&mut self, index: usize) -> bool {
        match self {
            Value::Array(items) if index < items.len() => {
                items.remove(index);
                true
            }
            _ => false,
        }
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Structural size: element count for containers, byte length for
    /// strings, 0 for `Null`, 1 for other scalars.
    pub fn len(&self) -> usize {
        match self {
            Value::Null => 0,
            Value::String(s) => s.len(),
            Value::Array(items) => items.len(),
            Value::Object(entries) => entries.len(),
            _ => 1,
        }
    }

    /// `true` for `Null` and for empty strings/containers; `false` for
    /// other scalars.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Null => true,
            Value::String(s) => s.is_empty(),
            Value::Array(items) => items.is_empty(),
            Value::Object(entries) => entries.is_empty(),
            _ => false,
        }
    }

    /// Reset to `Null`, releasing any payload. Deliberately resets the tag
    /// as well rather than emptying the container in place.
    pub fn clear(&mut self) {
        *self = Value::Null;
    }

    /// Move the value out, leaving `Null` behind.
    pub fn take(&mut self) -> Value {
        std::mem::take(self)
    }

    /// Render as JSON text. `indent == 0` selects the compact layout,
    /// `indent > 0` pretty-prints with that many spaces per nesting level.
    /// `raw_utf8` passes non-ASCII through as UTF-8 instead of `\u` escapes.
    pub fn dump(&self, indent: usize, raw_utf8: bool) -> String {
        writer::write(self, indent, raw_utf8)
    }
}

static NULL: Value = Value::Null;

/// Read-only lookup sugar: a missing key or a non-object receiver yields
/// `Null` instead of panicking. Use [`Value::entry`] for mutation.
impl Index<&str> for Value {
    type Output = Value;

    fn index(&self, key: &str) -> &Value {
        self.get(key).unwrap_or(&NULL)
    }
}

/// Read-only lookup sugar: out-of-range or non-array receivers yield `Null`.
impl Index<usize> for Value {
    type Output = Value;

    fn index(&self, index: usize) -> &Value {
        self.get_index(index).unwrap_or(&NULL)
    }
}

impl fmt::Display for Value {
    /// The compact, raw-UTF-8 rendering.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dump(0, true))
    }
}

impl FromStr for Value {
    type Err = JsonError;

    /// Strict parse: comments disallowed.
    fn from_str(s: &str) -> Result<Value> {
        parser::parse(s, false)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Value {
        Value::Number(Number::Int(i64::from(i)))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Number(Number::Int(i))
    }
}

impl From<u64> for Value {
    fn from(u: u64) -> Value {
        Value::Number(Number::UInt(u))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Value {
        Value::Number(Number::Float(f))
    }
}

impl From<Number> for Value {
    fn from(n: Number) -> Value {
        Value::Number(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::String(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::String(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Value {
        Value::Array(items)
    }
}
