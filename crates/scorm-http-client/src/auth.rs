//! Authentication scheme resolution and injection

use std::str::FromStr;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::request::OutgoingRequest;

/// Query/header name used by the API-key schemes
pub const API_KEY_NAME: &str = "x-api-key";

/// The closed set of supported authentication schemes.
///
/// Scheme names arrive as strings in the client configuration and are
/// resolved here before any network I/O; an unrecognized name is a hard
/// error naming the offending scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthScheme {
    /// HTTP Basic with username/password
    Basic,
    /// Bearer token in the `Authorization` header
    Bearer,
    /// API key in the `x-api-key` header
    ApiKey,
    /// API key in the `x-api-key` query parameter
    ApiKeyQuery,
}

impl FromStr for AuthScheme {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "basic" => Ok(AuthScheme::Basic),
            "bearer" => Ok(AuthScheme::Bearer),
            "apiKey" => Ok(AuthScheme::ApiKey),
            "apiKeyQuery" => Ok(AuthScheme::ApiKeyQuery),
            other => Err(Error::UnknownAuthScheme(other.to_string())),
        }
    }
}

/// Applies the configured authentication schemes to a request, in order.
///
/// A scheme whose credentials are absent is skipped silently; an unknown
/// scheme name fails the whole call before anything is sent. Headers and
/// query pairs accumulate, so several schemes can apply at once.
pub fn apply_auth(request: &mut OutgoingRequest, config: &ClientConfig) -> Result<()> {
    for name in &config.auth_types {
        match AuthScheme::from_str(name)? {
            AuthScheme::Basic => {
                if !config.username.is_empty() || !config.password.is_empty() {
                    let credentials =
                        STANDARD.encode(format!("{}:{}", config.username, config.password));
                    request.push_header("Authorization", format!("Basic {}", credentials));
                }
            }
            AuthScheme::Bearer => {
                if !config.access_token.is_empty() {
                    request.push_header(
                        "Authorization",
                        format!("Bearer {}", config.access_token),
                    );
                }
            }
            AuthScheme::ApiKey => {
                if !config.api_key.is_empty() {
                    request.push_header(API_KEY_NAME, config.api_key.clone());
                }
            }
            AuthScheme::ApiKeyQuery => {
                if !config.api_key.is_empty() {
                    request.push_query(API_KEY_NAME, config.api_key.clone());
                }
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use crate::request::Method;

    use super::*;

    fn request() -> OutgoingRequest {
        OutgoingRequest::new(
            Method::Get,
            "https://cloud.scorm.com/api/v2/courses",
            Duration::from_secs(60),
        )
    }

    #[test]
    fn test_basic_auth_sets_header() {
        let config = ClientConfig::builder()
            .username("appId")
            .password("secret")
            .auth_types(["basic"])
            .build();
        let mut req = request();

        apply_auth(&mut req, &config).expect("known scheme");

        // base64("appId:secret")
        assert_eq!(req.header("Authorization"), Some("Basic YXBwSWQ6c2VjcmV0"));
    }

    #[test]
    fn test_basic_auth_skipped_without_credentials() {
        let config = ClientConfig::builder().auth_types(["basic"]).build();
        let mut req = request();

        apply_auth(&mut req, &config).expect("known scheme");
        assert_eq!(req.header("Authorization"), None);
    }

    #[test]
    fn test_bearer_sets_exact_header() {
        let config = ClientConfig::builder()
            .access_token("tok-123")
            .auth_types(["bearer"])
            .build();
        let mut req = request();

        apply_auth(&mut req, &config).expect("known scheme");
        assert_eq!(req.header("Authorization"), Some("Bearer tok-123"));
    }

    #[test]
    fn test_api_key_header_and_query() {
        let config = ClientConfig::builder()
            .api_key("key-9")
            .auth_types(["apiKey", "apiKeyQuery"])
            .build();
        let mut req = request();

        apply_auth(&mut req, &config).expect("known schemes");

        assert_eq!(req.header("x-api-key"), Some("key-9"));
        assert_eq!(
            req.query,
            vec![("x-api-key".to_string(), "key-9".to_string())]
        );
    }

    #[test]
    fn test_unknown_scheme_fails_with_name() {
        let config = ClientConfig::builder().auth_types(["digest"]).build();
        let mut req = request();

        let err = apply_auth(&mut req, &config).expect_err("unknown scheme");
        assert!(err.to_string().contains("digest"));
    }

    #[test]
    fn test_schemes_accumulate_in_order() {
        let config = ClientConfig::builder()
            .username("u")
            .password("p")
            .access_token("tok")
            .auth_types(["basic", "bearer"])
            .build();
        let mut req = request();

        apply_auth(&mut req, &config).expect("known schemes");

        assert_eq!(req.headers.len(), 2);
        assert!(req.headers[0].1.starts_with("Basic "));
        assert!(req.headers[1].1.starts_with("Bearer "));
    }
}
