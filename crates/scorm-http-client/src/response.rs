//! Response envelope and deserialization
//!
//! Deserialization is deliberately forgiving: malformed or missing bodies
//! degrade to the raw response text or to an empty envelope, never to an
//! error.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};

/// Raw transport response, before normalization
#[derive(Debug, Clone, Default)]
pub struct RawResponse {
    /// HTTP status code
    pub status: u16,
    /// Body as parsed by the transport, `None` when it could not be parsed
    pub body: Option<Value>,
    /// Unparsed response text
    pub text: String,
    /// Raw response bytes
    pub bytes: Vec<u8>,
    /// True when the body was kept in raw binary form (binary response types)
    pub binary: bool,
}

impl RawResponse {
    /// Check if the response status is a success (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// The uniform `{status, data}` shape every call resolves to.
///
/// Both fields stay unset for 204 responses and for calls made without an
/// expected response type.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResponseEnvelope {
    /// HTTP status code, unset for the empty envelope
    pub status: Option<u16>,
    /// Normalized response body, unset for the empty envelope
    pub data: Option<Value>,
}

impl ResponseEnvelope {
    /// Envelope with neither status nor data
    pub fn empty() -> Self {
        Self::default()
    }

    /// True when neither status nor data is set
    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.data.is_none()
    }

    /// Decode the envelope's data into a typed value.
    ///
    /// Returns `Ok(None)` for the empty envelope.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match &self.data {
            None => Ok(None),
            Some(value) => serde_json::from_value(value.clone())
                .map(Some)
                .map_err(Error::from),
        }
    }
}

/// Normalizes a raw transport response into a [`ResponseEnvelope`].
///
/// Absent response, absent return type or a 204 status produce the empty
/// envelope. A body the transport could not parse (or parsed to nothing)
/// falls back to the raw response text. When the caller expects JSON but the
/// body was left in raw binary form, the bytes are parsed as UTF-8 JSON; if
/// even that fails, the text fallback stands.
pub fn deserialize(response: Option<&RawResponse>, return_type: Option<&str>) -> ResponseEnvelope {
    let (response, return_type) = match (response, return_type) {
        (Some(response), Some(return_type)) => (response, return_type),
        _ => return ResponseEnvelope::empty(),
    };

    if response.status == 204 {
        return ResponseEnvelope::empty();
    }

    let parsed = response.body.clone();
    let unusable = match &parsed {
        None => true,
        Some(Value::Null) => true,
        // empty-object placeholder produced when a body could not be parsed
        Some(Value::Object(map)) => map.is_empty(),
        Some(_) => false,
    };

    let mut data = if unusable {
        Value::String(response.text.clone())
    } else {
        parsed.unwrap_or(Value::Null)
    };

    if return_type == "application/json" && response.binary {
        if let Ok(value) = serde_json::from_slice::<Value>(&response.bytes) {
            data = value;
        }
    }

    ResponseEnvelope {
        status: Some(response.status),
        data: Some(data),
    }
}
