//! HTTP client error types

use thiserror::Error;

/// Errors that can occur while constructing or dispatching a request
#[derive(Debug, Error)]
pub enum Error {
    /// Authentication scheme name not recognized
    #[error("Unknown authentication type: {0}")]
    UnknownAuthScheme(String),
    /// Client kind passed to the factory not recognized
    #[error("Unknown client kind: {0}")]
    UnknownClientKind(String),
    /// Assembled URL could not be parsed
    #[error("Invalid URL: {0}")]
    Url(String),
    /// Request timeout
    #[error("Request timeout")]
    Timeout,
    /// Connection error
    #[error("Connection error: {0}")]
    Connection(String),
    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
    /// Other transport error
    #[error("{0}")]
    Transport(String),
}

/// Result alias for this crate
pub type Result<T> = std::result::Result<T, Error>;

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Error::Timeout
        } else if err.is_connect() {
            Error::Connection(err.to_string())
        } else {
            Error::Transport(err.to_string())
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<serde_urlencoded::ser::Error> for Error {
    fn from(err: serde_urlencoded::ser::Error) -> Self {
        Error::Serialization(err.to_string())
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Url(err.to_string())
    }
}
