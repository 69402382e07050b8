//! Precision-preserving numeric wrapper.
//!
//! Upstream senders sometimes ship large or precise numbers as JSON strings
//! or in scientific notation so lossy parsers do not truncate them.
//! [`PrecisionNumber`] accepts all of those spellings and always renders one
//! canonical fixed-decimal form.

use std::fmt;
use std::str::FromStr;

use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{self, Serialize, Serializer};
use serde_json::value::RawValue;

use crate::error::DecodeError;
use crate::types::LiteralKind;

/// A 64-bit float that encodes without exponent or zero padding.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct PrecisionNumber(f64);

impl PrecisionNumber {
    pub const fn new(value: f64) -> Self {
        PrecisionNumber(value)
    }

    pub const fn from_value(value: f64) -> Self {
        PrecisionNumber(value)
    }

    pub fn as_f64(self) -> f64 {
        self.0
    }

    /// Truncates toward zero, saturating at the `i64` bounds.
    pub fn as_i64(self) -> i64 {
        self.0 as i64
    }

    /// Truncates toward zero, saturating at the `i32` bounds.
    pub fn as_i32(self) -> i32 {
        self.0 as i32
    }

    /// Decimal text without exponent, trailing zeros or a dangling point.
    ///
    /// Zero renders as `"0"` regardless of sign. The text parses back to
    /// the same `f64`.
    ///
    /// ```
    /// use json_dotpath::PrecisionNumber;
    ///
    /// assert_eq!(PrecisionNumber::new(0.0).to_text(), "0");
    /// assert_eq!(PrecisionNumber::new(12.5).to_text(), "12.5");
    /// assert_eq!(PrecisionNumber::new(1e21).to_text(), "1000000000000000000000");
    /// ```
    pub fn to_text(&self) -> String {
        if self.0 == 0.0 {
            return "0".to_string();
        }
        // f64's Display is fixed notation with the shortest round-trip digits.
        trim_fraction(self.0.to_string())
    }

    /// Decodes one raw JSON token.
    ///
    /// Quoted strings are parsed as base-10 float literals and bare numbers
    /// go through `serde_json`. Anything else is rejected with the kind of
    /// literal judged from its lead byte.
    ///
    /// ```
    /// use json_dotpath::{DecodeError, LiteralKind, PrecisionNumber};
    ///
    /// assert_eq!(PrecisionNumber::from_decoded(b"\"1.5e3\"").unwrap().as_f64(), 1500.0);
    /// assert_eq!(PrecisionNumber::from_decoded(b"42").unwrap().as_f64(), 42.0);
    /// assert!(matches!(
    ///     PrecisionNumber::from_decoded(b"true"),
    ///     Err(DecodeError::Mismatch { kind: LiteralKind::Boolean, .. })
    /// ));
    /// ```
    pub fn from_decoded(data: &[u8]) -> Result<Self, DecodeError> {
        let Some(&lead) = data.first() else {
            return Err(DecodeError::Empty);
        };
        let kind = match lead {
            b'"' => match unquote(data).and_then(parse_float) {
                Some(value) => return Ok(PrecisionNumber(value)),
                None => LiteralKind::String,
            },
            b'[' => LiteralKind::Array,
            b't' | b'f' => LiteralKind::Boolean,
            _ => match serde_json::from_slice::<f64>(data) {
                Ok(value) => return Ok(PrecisionNumber(value)),
                Err(_) => LiteralKind::Object,
            },
        };
        Err(DecodeError::Mismatch {
            kind,
            literal: String::from_utf8_lossy(data).into_owned(),
        })
    }
}

/// Parses a base-10 float literal, scientific notation included. Non-finite
/// results are rejected.
pub(crate) fn parse_float(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn unquote(data: &[u8]) -> Option<&str> {
    if data.len() < 2 || data[data.len() - 1] != b'"' {
        return None;
    }
    std::str::from_utf8(&data[1..data.len() - 1]).ok()
}

fn trim_fraction(mut text: String) -> String {
    if text.contains('.') {
        let kept = text.trim_end_matches('0').trim_end_matches('.').len();
        text.truncate(kept);
    }
    text
}

impl From<f64> for PrecisionNumber {
    fn from(value: f64) -> Self {
        PrecisionNumber(value)
    }
}

impl From<PrecisionNumber> for f64 {
    fn from(value: PrecisionNumber) -> Self {
        value.0
    }
}

impl FromStr for PrecisionNumber {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_float(s)
            .map(PrecisionNumber)
            .ok_or_else(|| DecodeError::Mismatch {
                kind: LiteralKind::String,
                literal: s.to_string(),
            })
    }
}

impl fmt::Display for PrecisionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

impl Serialize for PrecisionNumber {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if !self.0.is_finite() {
            return Err(<S::Error as ser::Error>::custom(format!(
                "cannot encode {} as a JSON number",
                self.0
            )));
        }
        let raw =
            RawValue::from_string(self.to_text()).map_err(<S::Error as ser::Error>::custom)?;
        raw.serialize(serializer)
    }
}

struct PrecisionNumberVisitor;

impl<'de> Visitor<'de> for PrecisionNumberVisitor {
    type Value = PrecisionNumber;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a number or a string holding a number")
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Ok(PrecisionNumber(v))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(PrecisionNumber(v as f64))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        Ok(PrecisionNumber(v as f64))
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        parse_float(v)
            .map(PrecisionNumber)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for PrecisionNumber {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(PrecisionNumberVisitor)
    }
}
