//! Dot-path navigation and typed extraction over a decoded JSON object.

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};
use time::OffsetDateTime;

use crate::error::{Error, Result};
use crate::number::PrecisionNumber;
use crate::timestamp::{from_epoch_seconds, parse_timestamp};
use crate::types::{expected, JsonType};

/// Read-only view over a decoded JSON object, addressed by dot-paths such as
/// `"images.original.url"`.
///
/// Every typed accessor fails with [`Error::MissingField`] when the path
/// resolves to nothing and with [`Error::TypeMismatch`] when the value found
/// does not satisfy the requested coercion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathDocument<'a> {
    map: &'a Map<String, Value>,
}

impl<'a> PathDocument<'a> {
    pub fn new(map: &'a Map<String, Value>) -> Self {
        PathDocument { map }
    }

    /// The backing object.
    pub fn as_map(&self) -> &'a Map<String, Value> {
        self.map
    }

    /// Walks `path` segment by segment.
    ///
    /// Returns `None` when a key is missing, when a non-object value is hit
    /// before the path is exhausted, or when the final value is `null`.
    ///
    /// ```
    /// use json_dotpath::PathDocument;
    /// use serde_json::json;
    ///
    /// let doc = json!({"a": {"b": 5}});
    /// let doc = PathDocument::try_from(&doc).unwrap();
    /// assert_eq!(doc.resolve("a.b"), Some(&json!(5)));
    /// assert_eq!(doc.resolve("a.b.c"), None);
    /// ```
    pub fn resolve(&self, path: &str) -> Option<&'a Value> {
        let mut segments = path.split('.');
        let mut current = self.map.get(segments.next()?)?;
        for segment in segments {
            match current {
                Value::Object(map) => current = map.get(segment)?,
                Value::Null
                | Value::Bool(_)
                | Value::Number(_)
                | Value::String(_)
                | Value::Array(_) => return None,
            }
        }
        match current {
            Value::Null => None,
            found => Some(found),
        }
    }

    /// Whether `path` resolves to a non-null value.
    pub fn contains(&self, path: &str) -> bool {
        self.resolve(path).is_some()
    }

    fn lookup(&self, path: &str) -> Result<&'a Value> {
        self.resolve(path).ok_or_else(|| Error::missing(path))
    }

    /// Number or numeric string. Strings may use scientific notation.
    pub fn as_number(&self, path: &str) -> Result<PrecisionNumber> {
        let value = self.lookup(path)?;
        let mismatch = || Error::mismatch(path, expected::NUMBER, JsonType::of(value));
        match value {
            Value::Number(n) => n.as_f64().map(PrecisionNumber::new).ok_or_else(mismatch),
            Value::String(s) => s.parse::<PrecisionNumber>().map_err(|_| mismatch()),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => Err(mismatch()),
        }
    }

    /// Number only; unlike [`PathDocument::as_number`] strings are rejected.
    pub fn as_float(&self, path: &str) -> Result<f64> {
        let value = self.lookup(path)?;
        let mismatch = || Error::mismatch(path, expected::FLOAT, JsonType::of(value));
        match value {
            Value::Number(n) => n.as_f64().ok_or_else(mismatch),
            Value::Null
            | Value::Bool(_)
            | Value::String(_)
            | Value::Array(_)
            | Value::Object(_) => Err(mismatch()),
        }
    }

    /// [`PathDocument::as_float`] truncated toward zero.
    pub fn as_int(&self, path: &str) -> Result<i32> {
        self.as_float(path).map(|f| f as i32)
    }

    /// [`PathDocument::as_float`] truncated toward zero.
    pub fn as_int64(&self, path: &str) -> Result<i64> {
        self.as_float(path).map(|f| f as i64)
    }

    pub fn as_bool(&self, path: &str) -> Result<bool> {
        let value = self.lookup(path)?;
        match value {
            Value::Bool(b) => Ok(*b),
            Value::Null
            | Value::Number(_)
            | Value::String(_)
            | Value::Array(_)
            | Value::Object(_) => Err(Error::mismatch(path, expected::BOOLEAN, JsonType::of(value))),
        }
    }

    pub fn as_string(&self, path: &str) -> Result<&'a str> {
        let value = self.lookup(path)?;
        match value {
            Value::String(s) => Ok(s.as_str()),
            Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::Array(_)
            | Value::Object(_) => Err(Error::mismatch(path, expected::STRING, JsonType::of(value))),
        }
    }

    /// Strings are tried against the encodings of
    /// [`parse_timestamp`](crate::parse_timestamp) in order; numbers are
    /// Unix epoch seconds, and the epoch itself is rejected.
    pub fn as_timestamp(&self, path: &str) -> Result<OffsetDateTime> {
        let value = self.lookup(path)?;
        let mismatch = || Error::mismatch(path, expected::TIMESTAMP, JsonType::of(value));
        match value {
            Value::String(s) => parse_timestamp(s).ok_or_else(mismatch),
            Value::Number(n) => n.as_f64().and_then(from_epoch_seconds).ok_or_else(mismatch),
            Value::Null | Value::Bool(_) | Value::Array(_) | Value::Object(_) => Err(mismatch()),
        }
    }

    pub fn as_object(&self, path: &str) -> Result<PathDocument<'a>> {
        let value = self.lookup(path)?;
        match value {
            Value::Object(map) => Ok(PathDocument::new(map)),
            Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_)
            | Value::Array(_) => Err(Error::mismatch(path, expected::OBJECT, JsonType::of(value))),
        }
    }

    pub fn as_array(&self, path: &str) -> Result<&'a [Value]> {
        let value = self.lookup(path)?;
        match value {
            Value::Array(items) => Ok(items.as_slice()),
            Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_)
            | Value::Object(_) => Err(Error::mismatch(path, expected::ARRAY, JsonType::of(value))),
        }
    }

    /// Encodes the document as compact JSON text.
    pub fn to_json_text(&self) -> serde_json::Result<String> {
        serde_json::to_string(self.map)
    }
}

impl<'a> From<&'a Map<String, Value>> for PathDocument<'a> {
    fn from(map: &'a Map<String, Value>) -> Self {
        PathDocument::new(map)
    }
}

/// Only objects can be wrapped; any other root is a mismatch at the empty
/// path.
impl<'a> TryFrom<&'a Value> for PathDocument<'a> {
    type Error = Error;

    fn try_from(value: &'a Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(PathDocument::new(map)),
            Value::Null
            | Value::Bool(_)
            | Value::Number(_)
            | Value::String(_)
            | Value::Array(_) => Err(Error::mismatch("", expected::OBJECT, JsonType::of(value))),
        }
    }
}

impl Serialize for PathDocument<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.map.serialize(serializer)
    }
}
