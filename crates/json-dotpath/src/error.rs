//! Error kinds reported by the accessors and the number decoder.

use thiserror::Error;

use crate::types::{JsonType, LiteralKind};

/// Result alias for the typed accessors.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure of a typed accessor.
///
/// There are exactly two kinds: nothing was found at the path, or something
/// was found that does not satisfy the requested coercion rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("missing field '{path}'")]
    MissingField { path: String },
    #[error("expected field '{path}' to be of type {expected} but was {actual}")]
    TypeMismatch {
        path: String,
        expected: &'static str,
        actual: JsonType,
    },
}

impl Error {
    pub(crate) fn missing(path: &str) -> Self {
        Error::MissingField {
            path: path.to_string(),
        }
    }

    pub(crate) fn mismatch(path: &str, expected: &'static str, actual: JsonType) -> Self {
        Error::TypeMismatch {
            path: path.to_string(),
            expected,
            actual,
        }
    }

    /// Whether retrying against the same document could succeed. Never true.
    pub fn is_transient(&self) -> bool {
        false
    }

    pub fn is_missing_field(&self) -> bool {
        matches!(self, Error::MissingField { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, Error::TypeMismatch { .. })
    }

    /// The dot-path the failing accessor was called with.
    pub fn path(&self) -> &str {
        match self {
            Error::MissingField { path } | Error::TypeMismatch { path, .. } => path,
        }
    }
}

/// Failure to decode a raw JSON token as a [`crate::PrecisionNumber`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("cannot decode empty input as a number")]
    Empty,
    #[error("cannot decode {kind} {literal} as a number")]
    Mismatch { kind: LiteralKind, literal: String },
}

impl DecodeError {
    pub fn is_transient(&self) -> bool {
        false
    }
}
