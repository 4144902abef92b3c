//! HTTP transport layer for the Slack client.
//!
//! Sends one HTTP request and hands back the status and body text. Nothing
//! here knows about the Web API envelope; that is interpreted by
//! [`ApiClient`](crate::client::ApiClient).

use crate::errors::{NetworkError, SlackError, SlackResult};
use crate::types::Params;
use async_trait::async_trait;
use bytes::Bytes;
use http::{HeaderMap, Method, StatusCode};
use reqwest::{Client, ClientBuilder};
use std::time::Duration;
use tracing::{debug, instrument};

/// HTTP transport trait for making API requests
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send exactly one request
    async fn send(&self, request: TransportRequest) -> SlackResult<TransportResponse>;
}

/// A single outgoing HTTP request
#[derive(Debug, Clone)]
pub struct TransportRequest {
    /// HTTP method
    pub method: Method,
    /// Full URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Query string for GET, form or multipart fields for POST
    pub params: Params,
    /// Raw body; replaces `params` as the body when set
    pub body: Option<Bytes>,
    /// File sent as a multipart part
    pub file: Option<FileUpload>,
    /// Request timeout
    pub timeout: Option<Duration>,
}

impl TransportRequest {
    /// Create a new request
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: HeaderMap::new(),
            params: Params::new(),
            body: None,
            file: None,
            timeout: None,
        }
    }

    /// Create a new GET request
    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    /// Create a new POST request
    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    /// Set the parameters
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = params;
        self
    }

    /// Set the headers
    pub fn with_headers(mut self, headers: HeaderMap) -> Self {
        self.headers = headers;
        self
    }

    /// Set a raw body
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Attach a file, turning a POST into a multipart request
    pub fn with_file(mut self, file: FileUpload) -> Self {
        self.file = Some(file);
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Status and body of a response, uninterpreted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Body text
    pub body: String,
}

impl TransportResponse {
    /// Create a new response
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// File upload data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUpload {
    /// Form field name
    pub field_name: String,
    /// File name
    pub file_name: String,
    /// File content
    pub content: Bytes,
    /// MIME type
    pub mime_type: String,
}

impl FileUpload {
    /// Create a new file upload
    pub fn new(
        field_name: impl Into<String>,
        file_name: impl Into<String>,
        content: impl Into<Bytes>,
    ) -> Self {
        let file_name_str = file_name.into();
        let mime_type = mime_guess::from_path(&file_name_str)
            .first_or_octet_stream()
            .to_string();

        Self {
            field_name: field_name.into(),
            file_name: file_name_str,
            content: content.into(),
            mime_type,
        }
    }
}

/// Default HTTP transport implementation using reqwest
pub struct ReqwestTransport {
    client: Client,
    default_timeout: Duration,
}

impl ReqwestTransport {
    /// Create a new transport with the given timeout
    pub fn new(timeout: Duration) -> SlackResult<Self> {
        let client = ClientBuilder::new()
            .timeout(timeout)
            .pool_max_idle_per_host(10)
            .build()
            .map_err(|e| SlackError::Network(NetworkError::Http(e.to_string())))?;

        Ok(Self {
            client,
            default_timeout: timeout,
        })
    }

    fn multipart_form(params: Params, file: FileUpload) -> SlackResult<reqwest::multipart::Form> {
        let mut form = reqwest::multipart::Form::new();

        for (name, value) in params.iter() {
            form = form.text(name.to_string(), value.to_string());
        }

        let part = reqwest::multipart::Part::bytes(file.content.to_vec())
            .file_name(file.file_name)
            .mime_str(&file.mime_type)
            .map_err(|e| SlackError::Network(NetworkError::Http(e.to_string())))?;

        Ok(form.part(file.field_name, part))
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    async fn send(&self, request: TransportRequest) -> SlackResult<TransportResponse> {
        let timeout = request.timeout.unwrap_or(self.default_timeout);
        let is_get = request.method == Method::GET;

        let mut req_builder = self
            .client
            .request(request.method, &request.url)
            .headers(request.headers)
            .timeout(timeout);

        req_builder = match (request.body, request.file) {
            (Some(body), _) => req_builder.body(body),
            _ if is_get => req_builder.query(&request.params),
            (None, Some(file)) => {
                req_builder.multipart(Self::multipart_form(request.params, file)?)
            }
            (None, None) => req_builder.form(&request.params),
        };

        let response = req_builder
            .send()
            .await
            .map_err(|e| SlackError::Network(NetworkError::from(e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| SlackError::Network(NetworkError::from(e)))?;

        debug!(status = %status, bytes = body.len(), "Received response");

        Ok(TransportResponse { status, body })
    }
}

impl std::fmt::Debug for ReqwestTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReqwestTransport")
            .field("default_timeout", &self.default_timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_request_builder() {
        let request = TransportRequest::get("https://slack.com/api/test")
            .with_params(Params::new().with("channel", "C123"))
            .with_timeout(Duration::from_secs(5));

        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url, "https://slack.com/api/test");
        assert_eq!(request.params.get("channel"), Some("C123"));
        assert_eq!(request.timeout, Some(Duration::from_secs(5)));
        assert!(request.body.is_none());
        assert!(request.file.is_none());
    }

    #[test]
    fn test_file_upload_mime_detection() {
        let upload = FileUpload::new("file", "test.png", vec![0u8; 10]);
        assert_eq!(upload.mime_type, "image/png");

        let upload = FileUpload::new("file", "document.pdf", vec![0u8; 10]);
        assert_eq!(upload.mime_type, "application/pdf");

        let upload = FileUpload::new("file", "blob", vec![0u8; 10]);
        assert_eq!(upload.mime_type, "application/octet-stream");
    }

    #[test]
    fn test_multipart_request_builder() {
        let upload = FileUpload::new("file", "test.txt", b"content".to_vec());

        let request = TransportRequest::post("https://slack.com/api/files.upload")
            .with_params(Params::new().with("channels", "C123"))
            .with_file(upload);

        assert_eq!(request.params.len(), 1);
        assert_eq!(request.file.unwrap().content, Bytes::from_static(b"content"));
    }
}
