//! Parameter values and normalization rules
//!
//! Parameters flow into three places: the URL path (placeholder
//! substitution), the query string / headers, and form bodies. All three
//! share the same normalization rules: nil values are dropped, file-like and
//! array values pass through untouched, everything else is stringified.

use std::collections::BTreeMap;
use std::path::PathBuf;

use chrono::{DateTime, SecondsFormat, Utc};

/// Map of named parameters as stored in the client configuration
pub type ParamMap = BTreeMap<String, ParamValue>;

/// A single parameter value
///
/// Mirrors the value space a JSON-oriented REST API accepts for path, query,
/// header and form parameters. `Null` entries are removed during
/// normalization; `Binary` and `File` values are routed to multipart file
/// parts rather than text fields.
#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    /// Explicit nil, dropped by [`normalize_params`]
    Null,
    /// Boolean scalar
    Bool(bool),
    /// Integer scalar
    Int(i64),
    /// Floating point scalar
    Float(f64),
    /// String scalar
    String(String),
    /// Timestamp, serialized in ISO-8601 with milliseconds
    DateTime(DateTime<Utc>),
    /// In-memory binary buffer, treated as file-like
    Binary(Vec<u8>),
    /// Named file content, treated as file-like
    File(FilePart),
    /// Array of values, passed through unchanged
    Array(Vec<ParamValue>),
}

/// File content attached to a multipart request
#[derive(Debug, Clone, PartialEq)]
pub struct FilePart {
    /// File name reported in the multipart part
    pub file_name: String,
    /// Where the bytes come from
    pub content: FileContent,
}

/// Source of a file part's bytes
#[derive(Debug, Clone, PartialEq)]
pub enum FileContent {
    /// Bytes already in memory
    Bytes(Vec<u8>),
    /// Path read from the local file system at send time
    Path(PathBuf),
}

impl FilePart {
    /// File part backed by an in-memory buffer
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content: FileContent::Bytes(bytes),
        }
    }

    /// File part read from disk when the request is sent
    pub fn from_path(file_name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            file_name: file_name.into(),
            content: FileContent::Path(path.into()),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::String(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::String(value)
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<f64> for ParamValue {
    fn from(value: f64) -> Self {
        ParamValue::Float(value)
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<DateTime<Utc>> for ParamValue {
    fn from(value: DateTime<Utc>) -> Self {
        ParamValue::DateTime(value)
    }
}

/// Returns the string representation of a parameter value.
///
/// Falsy scalars (`Null`, `false`, `0`, `0.0`, NaN, the empty string) become
/// the empty string. Timestamps serialize as ISO-8601 with millisecond
/// precision and a `Z` suffix. Everything else uses its default display form.
pub fn param_to_string(value: &ParamValue) -> String {
    match value {
        ParamValue::Null => String::new(),
        ParamValue::Bool(false) => String::new(),
        ParamValue::Bool(true) => "true".to_string(),
        ParamValue::Int(0) => String::new(),
        ParamValue::Int(n) => n.to_string(),
        ParamValue::Float(f) if *f == 0.0 || f.is_nan() => String::new(),
        ParamValue::Float(f) => f.to_string(),
        ParamValue::String(s) => s.clone(),
        ParamValue::DateTime(dt) => dt.to_rfc3339_opts(SecondsFormat::Millis, true),
        ParamValue::Binary(bytes) => String::from_utf8_lossy(bytes).into_owned(),
        ParamValue::File(file) => file.file_name.clone(),
        ParamValue::Array(items) => items
            .iter()
            .map(param_to_string)
            .collect::<Vec<_>>()
            .join(","),
    }
}

/// Checks whether a parameter value represents file-like content.
///
/// The probe is capability based: anything carrying a raw byte buffer or a
/// named file source counts, regardless of where the bytes will come from.
/// Plain scalars and arrays are never file-like.
pub fn is_file_param(value: &ParamValue) -> bool {
    matches!(value, ParamValue::Binary(_) | ParamValue::File(_))
}

/// Normalizes a parameter map for transmission.
///
/// Removes `Null` entries, keeps file-like and array values unchanged and
/// stringifies every other value with [`param_to_string`].
pub fn normalize_params(params: &ParamMap) -> ParamMap {
    let mut normalized = ParamMap::new();
    for (key, value) in params {
        match value {
            ParamValue::Null => {}
            v if is_file_param(v) => {
                normalized.insert(key.clone(), v.clone());
            }
            ParamValue::Array(_) => {
                normalized.insert(key.clone(), value.clone());
            }
            other => {
                normalized.insert(key.clone(), ParamValue::String(param_to_string(other)));
            }
        }
    }

    normalized
}
