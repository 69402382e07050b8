//! Core logic behind the `json-dotpath` binary.
//!
//! The binary reads a JSON document from stdin and prints the value found at
//! a dot-path, extracted with the accessor selected by `--as`.

use clap::ValueEnum;
use json_dotpath::{PathDocument, PrecisionNumber};
use serde_json::Value;
use thiserror::Error;
use time::format_description::well_known::Rfc3339;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("{0}")]
    Json(#[from] serde_json::Error),
    #[error("{0}")]
    Lookup(#[from] json_dotpath::Error),
    #[error("{0}")]
    Format(#[from] time::error::Format),
}

impl CliError {
    /// Whether the document itself was not valid JSON.
    pub fn is_input_error(&self) -> bool {
        matches!(self, CliError::Json(_))
    }
}

/// Accessor used to extract the value at the path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ValueKind {
    /// Whatever is there, as JSON.
    #[default]
    Raw,
    Number,
    Float,
    Int,
    Int64,
    Bool,
    String,
    Timestamp,
    Object,
    Array,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LookupOptions {
    pub kind: ValueKind,
    pub pretty: bool,
}

/// Looks up `path` in `doc_json` and renders the result as text.
///
/// Numbers are rendered without exponent, timestamps as RFC 3339, strings
/// unquoted; objects, arrays and raw values as JSON.
pub fn lookup(doc_json: &str, path: &str, options: &LookupOptions) -> Result<String, CliError> {
    let root: Value = serde_json::from_str(doc_json)?;
    let doc = PathDocument::try_from(&root)?;

    let out = match options.kind {
        ValueKind::Raw => {
            let value = doc.resolve(path).ok_or_else(|| json_dotpath::Error::MissingField {
                path: path.to_string(),
            })?;
            encode(value, options.pretty)?
        }
        ValueKind::Number => doc.as_number(path)?.to_text(),
        ValueKind::Float => PrecisionNumber::new(doc.as_float(path)?).to_text(),
        ValueKind::Int => doc.as_int(path)?.to_string(),
        ValueKind::Int64 => doc.as_int64(path)?.to_string(),
        ValueKind::Bool => doc.as_bool(path)?.to_string(),
        ValueKind::String => doc.as_string(path)?.to_string(),
        ValueKind::Timestamp => doc.as_timestamp(path)?.format(&Rfc3339)?,
        ValueKind::Object => {
            let object = doc.as_object(path)?;
            if options.pretty {
                serde_json::to_string_pretty(&object)?
            } else {
                object.to_json_text()?
            }
        }
        ValueKind::Array => {
            let items = doc.as_array(path)?;
            if options.pretty {
                serde_json::to_string_pretty(items)?
            } else {
                serde_json::to_string(items)?
            }
        }
    };
    Ok(out)
}

fn encode(value: &Value, pretty: bool) -> serde_json::Result<String> {
    if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    }
}
