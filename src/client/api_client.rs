//! The call path shared by every Web API method.

use crate::config::{SlackConfig, SlackToken};
use crate::errors::{ResponseError, SlackError, SlackResult};
use crate::observability::redact_params;
use crate::transport::{FileUpload, HttpTransport, TransportRequest};
use crate::types::{Envelope, Params};
use http::{HeaderMap, Method, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};

const TOKEN_PARAM: &str = "token";

/// Issues Web API calls and interprets their envelopes.
///
/// Holds its own copy of the token, base URL and timeout. Cloning is cheap
/// and clones share the transport.
#[derive(Clone)]
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    token: Option<SlackToken>,
    base_url: String,
    timeout: Duration,
    headers: HeaderMap,
}

impl ApiClient {
    /// Create a client from a configuration and transport
    pub fn new(config: &SlackConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            transport,
            token: config.token().cloned(),
            base_url: config.build_url(""),
            timeout: config.timeout,
            headers: config.default_headers.clone(),
        }
    }

    /// Whether calls carry a token
    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    /// Configured timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Build the full URL for an API method
    pub fn build_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), endpoint)
    }

    /// Call a read-only method with GET
    pub async fn get(&self, endpoint: &str, params: Params) -> SlackResult<Envelope> {
        self.execute(Method::GET, endpoint, params, None).await
    }

    /// Call a mutating method with POST
    pub async fn post(&self, endpoint: &str, params: Params) -> SlackResult<Envelope> {
        self.execute(Method::POST, endpoint, params, None).await
    }

    /// Call a method with POST, sending `file` as multipart form data
    pub async fn post_file(
        &self,
        endpoint: &str,
        params: Params,
        file: FileUpload,
    ) -> SlackResult<Envelope> {
        self.execute(Method::POST, endpoint, params, Some(file)).await
    }

    /// Send one request to `endpoint` and return its envelope.
    ///
    /// The configured token replaces any `token` the caller put in
    /// `params`. Transport failures are returned as they are. A status
    /// other than 200, a body that is not an envelope and an `ok:false`
    /// envelope are all errors.
    #[instrument(skip(self, params, file), fields(method = %method, endpoint = %endpoint))]
    pub async fn execute(
        &self,
        method: Method,
        endpoint: &str,
        mut params: Params,
        file: Option<FileUpload>,
    ) -> SlackResult<Envelope> {
        if let Some(token) = &self.token {
            params.insert(TOKEN_PARAM, token.expose());
        }

        debug!(params = %redact_params(&params), has_file = file.is_some(), "Dispatching request");

        let mut request = TransportRequest::new(method, self.build_url(endpoint))
            .with_headers(self.headers.clone())
            .with_params(params)
            .with_timeout(self.timeout);
        if let Some(file) = file {
            request = request.with_file(file);
        }

        let response = self.transport.send(request).await?;

        if response.status != StatusCode::OK {
            warn!(status = %response.status, "Unexpected HTTP status");
            return Err(ResponseError::UnexpectedStatus {
                status: response.status.as_u16(),
                body: response.body,
            }
            .into());
        }

        let envelope = Envelope::parse(response.body).map_err(SlackError::Response)?;

        if let Some(error) = envelope.error().filter(|_| !envelope.successful()) {
            warn!(error, "API call failed");
        }

        envelope.into_result()
    }
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("token", &self.token)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}
