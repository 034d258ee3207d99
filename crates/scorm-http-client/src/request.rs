//! Outgoing request representation
//!
//! One [`OutgoingRequest`] is built fresh per logical call and handed to the
//! transport exactly once; it is never reused or retried.

use std::time::Duration;

use serde_json::Value;

use crate::params::FilePart;

/// HTTP method of an outgoing request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// HTTP GET
    Get,
    /// HTTP POST
    Post,
    /// HTTP PUT
    Put,
    /// HTTP DELETE
    Delete,
}

impl Method {
    /// Method name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of an outgoing request, one variant per content type branch
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body
    None,
    /// Raw JSON body
    Json(Value),
    /// `application/x-www-form-urlencoded` body, already serialized
    UrlEncoded(String),
    /// `multipart/form-data` body as ordered field parts
    Multipart(Vec<(String, MultipartValue)>),
}

/// A single multipart field
#[derive(Debug, Clone, PartialEq)]
pub enum MultipartValue {
    /// Plain text field
    Text(String),
    /// Raw bytes attached without a file name
    Bytes(Vec<u8>),
    /// File part with a file name
    File(FilePart),
}

/// A fully assembled request, ready for the transport
#[derive(Debug, Clone)]
pub struct OutgoingRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute, percent-encoded URL (query string excluded)
    pub url: String,
    /// Request headers, applied in order
    pub headers: Vec<(String, String)>,
    /// Query string pairs, applied in order
    pub query: Vec<(String, String)>,
    /// Request body
    pub body: RequestBody,
    /// Timeout for this request
    pub timeout: Duration,
    /// Expected response parsing mode
    pub response_type: Option<String>,
}

impl OutgoingRequest {
    /// Bare request with no headers, query or body
    pub fn new(method: Method, url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: RequestBody::None,
            timeout,
            response_type: None,
        }
    }

    /// Append a header
    pub fn push_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.push((key.into(), value.into()));
    }

    /// Append a query string pair
    pub fn push_query(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.query.push((key.into(), value.into()));
    }

    /// Look up the first header with the given name (case-insensitive)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}
