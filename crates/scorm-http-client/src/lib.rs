//! HTTP request construction and dispatch for the SCORM Cloud SDK
//!
//! This crate turns a logical operation (method, relative path, parameters,
//! body) plus a stored [`ClientConfig`] into a fully formed, authenticated,
//! correctly encoded HTTP request, dispatches it through a transport binding
//! and normalizes the response into a uniform [`ResponseEnvelope`].
//!
//! # Example
//!
//! ```no_run
//! use scorm_http_client::{ClientConfig, Result, ScormClient};
//!
//! async fn example() -> Result<()> {
//!     let config = ClientConfig::builder()
//!         .base_path("https://cloud.scorm.com/api/v2")
//!         .username("appId")
//!         .password("secret")
//!         .auth_types(["basic"])
//!         .build();
//!
//!     let client = ScormClient::new(config);
//!     let envelope = client.get_request("/courses").await?;
//!     println!("status: {:?}", envelope.status);
//!     Ok(())
//! }
//! ```

mod auth;
mod client;
mod config;
mod error;
mod params;
mod request;
mod response;
mod transport;
mod url;

pub use auth::{apply_auth, AuthScheme, API_KEY_NAME};
pub use client::ScormClient;
pub use config::{
    ClientConfig, ClientConfigBuilder, DEFAULT_CONTENT_TYPE, DEFAULT_RESPONSE_TYPE,
    DEFAULT_TIMEOUT,
};
pub use error::{Error, Result};
pub use params::{
    is_file_param, normalize_params, param_to_string, FileContent, FilePart, ParamMap, ParamValue,
};
pub use request::{Method, MultipartValue, OutgoingRequest, RequestBody};
pub use response::{deserialize, RawResponse, ResponseEnvelope};
pub use transport::{HttpTransport, ReqwestTransport};
pub use crate::url::build_url;
