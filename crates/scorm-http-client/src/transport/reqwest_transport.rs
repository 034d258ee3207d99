//! reqwest-backed transport binding

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};

use crate::error::{Error, Result};
use crate::params::{FileContent, FilePart};
use crate::request::{Method, MultipartValue, OutgoingRequest, RequestBody};
use crate::response::RawResponse;
use crate::transport::HttpTransport;

/// Transport binding backed by a shared `reqwest::Client`
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    inner: reqwest::Client,
}

impl ReqwestTransport {
    /// Transport with default client settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Transport reusing an existing `reqwest::Client`
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { inner: client }
    }
}

/// Response types whose bodies are kept as raw bytes instead of being parsed
fn is_binary_response_type(response_type: Option<&str>) -> bool {
    matches!(
        response_type,
        Some("blob" | "arraybuffer" | "application/octet-stream")
    )
}

fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
        Method::Delete => reqwest::Method::DELETE,
    }
}

async fn file_part(name: String, file: FilePart, form: Form) -> Result<Form> {
    let FilePart { file_name, content } = file;
    let bytes = match content {
        FileContent::Bytes(bytes) => bytes,
        FileContent::Path(path) => tokio::fs::read(&path)
            .await
            .map_err(|e| Error::Transport(format!("failed to read {}: {}", path.display(), e)))?,
    };

    Ok(form.part(name, Part::bytes(bytes).file_name(file_name)))
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute(&self, request: OutgoingRequest) -> Result<RawResponse> {
        let binary = is_binary_response_type(request.response_type.as_deref());

        let mut builder = self
            .inner
            .request(to_reqwest_method(request.method), &request.url)
            .timeout(request.timeout);

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        for (key, value) in &request.headers {
            builder = builder.header(key, value);
        }

        match request.body {
            RequestBody::None => {}
            RequestBody::Json(value) => {
                builder = builder.json(&value);
            }
            RequestBody::UrlEncoded(encoded) => {
                builder = builder
                    .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
                    .body(encoded);
            }
            RequestBody::Multipart(parts) => {
                let mut form = Form::new();
                for (name, part) in parts {
                    form = match part {
                        MultipartValue::Text(text) => form.text(name, text),
                        MultipartValue::Bytes(bytes) => form.part(name, Part::bytes(bytes)),
                        MultipartValue::File(file) => file_part(name, file, form).await?,
                    };
                }
                builder = builder.multipart(form);
            }
        }

        let response = builder.send().await.map_err(Error::from)?;
        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(Error::from)?.to_vec();
        let text = String::from_utf8_lossy(&bytes).into_owned();
        let body = if binary {
            None
        } else {
            serde_json::from_slice(&bytes).ok()
        };

        Ok(RawResponse {
            status,
            body,
            text,
            bytes,
            binary,
        })
    }
}
