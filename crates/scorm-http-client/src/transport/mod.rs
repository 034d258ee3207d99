//! Transport bindings
//!
//! The transport seam is a trait rather than a base class: a new HTTP
//! binding is a new [`HttpTransport`] implementation, with no shared mutable
//! state between bindings. One binding ships, backed by reqwest.

use async_trait::async_trait;

use crate::error::Result;
use crate::request::OutgoingRequest;
use crate::response::RawResponse;

mod reqwest_transport;

pub use reqwest_transport::ReqwestTransport;

/// A binding capable of dispatching one assembled request.
///
/// Implementations do not interpret the HTTP status; a non-success status
/// still resolves to a [`RawResponse`]. Errors are reserved for I/O
/// failures (connection, timeout, TLS).
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Dispatch the request and collect the raw response
    async fn execute(&self, request: OutgoingRequest) -> Result<RawResponse>;
}
