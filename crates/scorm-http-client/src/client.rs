//! Client verbs and request assembly

use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use crate::auth::apply_auth;
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::params::{normalize_params, param_to_string, ParamMap, ParamValue};
use crate::request::{Method, MultipartValue, OutgoingRequest, RequestBody};
use crate::response::{deserialize, ResponseEnvelope};
use crate::transport::{HttpTransport, ReqwestTransport};
use crate::url::build_url;

/// API client holding one configuration and one transport binding.
///
/// All four verbs snapshot the configuration at entry, assemble exactly one
/// [`OutgoingRequest`], dispatch it and normalize the response into a
/// [`ResponseEnvelope`]. No retries happen at this layer.
pub struct ScormClient {
    config: ClientConfig,
    transport: Arc<dyn HttpTransport>,
}

impl std::fmt::Debug for ScormClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScormClient")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl ScormClient {
    /// Client with the default reqwest binding
    pub fn new(config: ClientConfig) -> Self {
        Self::with_transport(config, Arc::new(ReqwestTransport::new()))
    }

    /// Client for a named transport binding.
    ///
    /// Fails synchronously when the kind is not recognized; `"reqwest"` is
    /// the one known binding.
    pub fn for_kind(kind: &str, config: ClientConfig) -> Result<Self> {
        match kind {
            "reqwest" => Ok(Self::new(config)),
            other => Err(Error::UnknownClientKind(other.to_string())),
        }
    }

    /// Client with a caller-provided transport binding
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self { config, transport }
    }

    /// The client's configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Mutable access to the configuration, for adjusting parameters between
    /// calls. In-flight calls keep the snapshot they started with.
    pub fn config_mut(&mut self) -> &mut ClientConfig {
        &mut self.config
    }

    /// POST `body` as JSON (or the configured form encoding) to `path`
    pub async fn post_request<B>(&self, path: &str, body: &B) -> Result<ResponseEnvelope>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.dispatch(Method::Post, path, Some(body)).await
    }

    /// GET `path`
    pub async fn get_request(&self, path: &str) -> Result<ResponseEnvelope> {
        self.dispatch(Method::Get, path, None).await
    }

    /// PUT `body` to `path`
    pub async fn put_request<B>(&self, path: &str, body: &B) -> Result<ResponseEnvelope>
    where
        B: Serialize + ?Sized,
    {
        let body = serde_json::to_value(body)?;
        self.dispatch(Method::Put, path, Some(body)).await
    }

    /// DELETE `path`
    pub async fn delete_request(&self, path: &str) -> Result<ResponseEnvelope> {
        self.dispatch(Method::Delete, path, None).await
    }

    async fn dispatch(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<ResponseEnvelope> {
        let config = self.config.clone();

        let request = create_request(&config, method, path, body).map_err(|e| {
            tracing::error!(%method, path, error = %e, "request assembly failed");
            e
        })?;

        let raw = self.transport.execute(request).await.map_err(|e| {
            tracing::error!(%method, path, error = %e, "request dispatch failed");
            e
        })?;

        Ok(deserialize(Some(&raw), config.response_type.as_deref()))
    }
}

/// Flattens a normalized parameter map into wire pairs; array values repeat
/// the key once per element.
fn to_pairs(params: &ParamMap) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in params {
        match value {
            ParamValue::Array(items) => {
                for item in items {
                    pairs.push((key.clone(), param_to_string(item)));
                }
            }
            other => pairs.push((key.clone(), param_to_string(other))),
        }
    }

    pairs
}

/// Assembles one outgoing request from a configuration snapshot.
///
/// Builds the URL from the stored path params, injects authentication,
/// attaches normalized query and header params, then branches the body
/// encoding on the configured content type.
pub(crate) fn create_request(
    config: &ClientConfig,
    method: Method,
    path: &str,
    body: Option<Value>,
) -> Result<OutgoingRequest> {
    let url = build_url(&config.base_path, path, &config.path_params, None);
    url::Url::parse(&url)?;
    tracing::debug!(%method, %url, "assembled request URL");

    let mut request = OutgoingRequest::new(method, url, config.timeout);
    apply_auth(&mut request, config)?;

    if !config.query_params.is_empty() {
        for (key, value) in to_pairs(&normalize_params(&config.query_params)) {
            request.push_query(key, value);
        }
    }

    if !config.header_params.is_empty() {
        for (key, value) in &normalize_params(&config.header_params) {
            request.push_header(key.clone(), param_to_string(value));
        }
    }

    match config.content_type.as_str() {
        "application/x-www-form-urlencoded" => {
            let pairs = to_pairs(&normalize_params(&config.form_params));
            request.body = RequestBody::UrlEncoded(serde_urlencoded::to_string(pairs)?);
        }
        "multipart/form-data" => {
            let mut parts = Vec::new();
            for (name, value) in normalize_params(&config.form_params) {
                let part = match value {
                    ParamValue::File(file) => MultipartValue::File(file),
                    ParamValue::Binary(bytes) => MultipartValue::Bytes(bytes),
                    other => MultipartValue::Text(param_to_string(&other)),
                };
                parts.push((name, part));
            }
            request.body = RequestBody::Multipart(parts);
        }
        _ => {
            if let Some(body) = body {
                request.body = RequestBody::Json(body);
            }
        }
    }

    request.response_type = config.response_type.clone();

    Ok(request)
}
