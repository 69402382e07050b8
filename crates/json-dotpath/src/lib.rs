//! Typed dot-path access into decoded JSON objects.
//!
//! Wrap a decoded object in a [`PathDocument`], then ask for fields by
//! dot-path with a target type. Each accessor distinguishes a field that is
//! absent ([`Error::MissingField`]) from one that is present but of the wrong
//! type ([`Error::TypeMismatch`]).
//!
//! # Example
//!
//! ```
//! use json_dotpath::{Error, JsonType, PathDocument};
//! use serde_json::json;
//!
//! let value = json!({
//!     "images": {"original": {"url": "http://x", "width": "480"}},
//!     "featured": true
//! });
//! let doc = PathDocument::try_from(&value).unwrap();
//!
//! assert_eq!(doc.as_string("images.original.url").unwrap(), "http://x");
//! assert_eq!(doc.as_number("images.original.width").unwrap().as_i64(), 480);
//! assert!(doc.as_float("images.original.width").is_err());
//!
//! assert!(matches!(
//!     doc.as_string("images.original.url.host"),
//!     Err(Error::MissingField { .. })
//! ));
//! assert!(matches!(
//!     doc.as_string("featured"),
//!     Err(Error::TypeMismatch { actual: JsonType::Bool, .. })
//! ));
//! ```

pub mod document;
pub mod error;
pub mod number;
pub mod timestamp;
pub mod types;

pub use document::PathDocument;
pub use error::{DecodeError, Error, Result};
pub use number::PrecisionNumber;
pub use timestamp::{from_epoch_seconds, parse_timestamp};
pub use types::{JsonType, LiteralKind};
