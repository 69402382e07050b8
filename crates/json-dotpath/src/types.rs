//! Runtime type names for JSON values and raw literals.

use std::fmt;

use serde_json::Value;

/// The runtime type of a decoded JSON value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonType {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonType {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonType::Null,
            Value::Bool(_) => JsonType::Bool,
            Value::Number(_) => JsonType::Number,
            Value::String(_) => JsonType::String,
            Value::Array(_) => JsonType::Array,
            Value::Object(_) => JsonType::Object,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            JsonType::Null => "null",
            JsonType::Bool => "boolean",
            JsonType::Number => "number",
            JsonType::String => "string",
            JsonType::Array => "array",
            JsonType::Object => "object",
        }
    }
}

impl fmt::Display for JsonType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<&Value> for JsonType {
    fn from(value: &Value) -> Self {
        JsonType::of(value)
    }
}

/// Shape of a raw JSON token that failed to decode as a number, judged by
/// its lead byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    String,
    Array,
    Boolean,
    Object,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LiteralKind::String => "string",
            LiteralKind::Array => "array",
            LiteralKind::Boolean => "boolean",
            LiteralKind::Object => "object",
        })
    }
}

/// Type names reported as `expected` by the typed accessors.
pub mod expected {
    pub const NUMBER: &str = "number";
    pub const FLOAT: &str = "float";
    pub const BOOLEAN: &str = "boolean";
    pub const STRING: &str = "string";
    pub const OBJECT: &str = "object";
    pub const ARRAY: &str = "array";
    pub const TIMESTAMP: &str = "timestamp";
}
