//! SDK error types

use thiserror::Error;

/// Errors surfaced by the domain wrappers
#[derive(Debug, Error)]
pub enum Error {
    /// Error from the underlying HTTP layer
    #[error(transparent)]
    Http(#[from] scorm_http_client::Error),
    /// Response resolved but its payload did not match the expected shape
    #[error("Unexpected response payload: {0}")]
    Payload(String),
}

/// Result alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_is_transparent() {
        let inner = scorm_http_client::Error::Timeout;
        let error: Error = inner.into();
        assert_eq!(format!("{}", error), "Request timeout");
    }

    #[test]
    fn test_payload_error_display() {
        let error = Error::Payload("missing launchLink".to_string());
        assert_eq!(
            format!("{}", error),
            "Unexpected response payload: missing launchLink"
        );
    }
}
