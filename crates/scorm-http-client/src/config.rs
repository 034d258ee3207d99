//! Per-client configuration

use std::time::Duration;

use crate::params::{ParamMap, ParamValue};

/// Default request timeout applied when the caller sets none
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(60_000);
/// Default request content type
pub const DEFAULT_CONTENT_TYPE: &str = "application/json";
/// Default expected response type
pub const DEFAULT_RESPONSE_TYPE: &str = "application/json";

/// Settings shared by every call made through one client.
///
/// Pure data, populated once at construction with defaults substituted for
/// missing fields. Each call snapshots the configuration at entry, so
/// mutating it through [`crate::ScormClient::config_mut`] between calls never
/// tears a request already in flight.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL against which every relative path is resolved
    pub base_path: String,
    /// Username for HTTP Basic authentication
    pub username: String,
    /// Password for HTTP Basic authentication
    pub password: String,
    /// Secret key for `apiKey` / `apiKeyQuery` authentication
    pub api_key: String,
    /// Bearer token for `bearer` authentication
    pub access_token: String,
    /// Authentication scheme names applied to every call, in order
    pub auth_types: Vec<String>,
    /// Headers included in every call
    pub header_params: ParamMap,
    /// Query parameters included in every call
    pub query_params: ParamMap,
    /// Path placeholder values substituted into every call's path
    pub path_params: ParamMap,
    /// Form fields for url-encoded and multipart content types
    pub form_params: ParamMap,
    /// Request timeout
    pub timeout: Duration,
    /// Content type selecting the body encoding branch
    pub content_type: String,
    /// Expected response parsing mode
    pub response_type: Option<String>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_path: String::new(),
            username: String::new(),
            password: String::new(),
            api_key: String::new(),
            access_token: String::new(),
            auth_types: Vec::new(),
            header_params: ParamMap::new(),
            query_params: ParamMap::new(),
            path_params: ParamMap::new(),
            form_params: ParamMap::new(),
            timeout: DEFAULT_TIMEOUT,
            content_type: DEFAULT_CONTENT_TYPE.to_string(),
            response_type: Some(DEFAULT_RESPONSE_TYPE.to_string()),
        }
    }
}

impl ClientConfig {
    /// Create a configuration builder
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }
}

/// Builder for [`ClientConfig`]
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Set the base URL
    pub fn base_path(mut self, base_path: impl Into<String>) -> Self {
        self.config.base_path = base_path.into();
        self
    }

    /// Set the Basic auth username
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.config.username = username.into();
        self
    }

    /// Set the Basic auth password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = password.into();
        self
    }

    /// Set the API key
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.config.api_key = api_key.into();
        self
    }

    /// Set the bearer access token
    pub fn access_token(mut self, access_token: impl Into<String>) -> Self {
        self.config.access_token = access_token.into();
        self
    }

    /// Set the ordered authentication scheme names
    pub fn auth_types<I, S>(mut self, auth_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.auth_types = auth_types.into_iter().map(Into::into).collect();
        self
    }

    /// Add a header included in every call
    pub fn header_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.config.header_params.insert(key.into(), value.into());
        self
    }

    /// Add a query parameter included in every call
    pub fn query_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.config.query_params.insert(key.into(), value.into());
        self
    }

    /// Add a path placeholder value
    pub fn path_param(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.config.path_params.insert(key.into(), value.into());
        self
    }

    /// Add a form field
    pub fn form_param(mut self, key: impl Into<String>, value: ParamValue) -> Self {
        self.config.form_params.insert(key.into(), value);
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the content type
    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.config.content_type = content_type.into();
        self
    }

    /// Set the expected response type
    pub fn response_type(mut self, response_type: impl Into<String>) -> Self {
        self.config.response_type = Some(response_type.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();

        assert_eq!(config.timeout, Duration::from_millis(60_000));
        assert_eq!(config.content_type, "application/json");
        assert_eq!(config.response_type.as_deref(), Some("application/json"));
        assert!(config.auth_types.is_empty());
        assert!(config.header_params.is_empty());
        assert!(config.query_params.is_empty());
        assert!(config.path_params.is_empty());
        assert!(config.form_params.is_empty());
    }

    #[test]
    fn test_builder_sets_fields() {
        let config = ClientConfig::builder()
            .base_path("https://cloud.scorm.com/api/v2")
            .username("appId")
            .password("secret")
            .auth_types(["basic"])
            .query_param("limit", 50i64)
            .path_param("courseId", "c-1")
            .timeout(Duration::from_secs(5))
            .build();

        assert_eq!(config.base_path, "https://cloud.scorm.com/api/v2");
        assert_eq!(config.username, "appId");
        assert_eq!(config.password, "secret");
        assert_eq!(config.auth_types, vec!["basic".to_string()]);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.query_params.contains_key("limit"));
        assert!(config.path_params.contains_key("courseId"));
    }
}
