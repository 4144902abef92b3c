//! API service for Slack API.
//!
//! `api.test` echoes its arguments back and needs no authentication.

use crate::client::ApiClient;
use crate::errors::SlackResult;
use crate::types::{Envelope, Params};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::instrument;

/// Request for `api.test`
#[derive(Debug, Clone, Default, Serialize)]
pub struct ApiTestRequest {
    /// Error code Slack should answer with
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Arguments echoed back under `args`
    #[serde(flatten)]
    pub args: BTreeMap<String, String>,
}

impl ApiTestRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask Slack to fail with this error code
    pub fn error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    /// Add an argument to echo
    pub fn arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.insert(name.into(), value.into());
        self
    }
}

/// API service implementation
#[derive(Debug, Clone)]
pub struct ApiService {
    client: ApiClient,
}

impl ApiService {
    /// Create a new API service
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Check API calling code
    #[instrument(skip(self))]
    pub async fn test(&self, request: ApiTestRequest) -> SlackResult<Envelope> {
        self.client
            .get("api.test", Params::from_serialize(&request)?)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_test_params() {
        let params =
            Params::from_serialize(&ApiTestRequest::new().error("my_error").arg("foo", "bar"))
                .unwrap();

        assert_eq!(params.get("error"), Some("my_error"));
        assert_eq!(params.get("foo"), Some("bar"));
        assert!(Params::from_serialize(&ApiTestRequest::new()).unwrap().is_empty());
    }
}
