//! Mock implementations for testing.
//!
//! [`MockHttpTransport`] replays queued responses and records every request
//! it is asked to send, so tests can assert on exactly what would have gone
//! over the wire (or that nothing did).

use crate::errors::{ResponseError, SlackError, SlackResult};
use crate::transport::{HttpTransport, TransportRequest, TransportResponse};
use async_trait::async_trait;
use http::StatusCode;
use parking_lot::Mutex;
use serde::Serialize;
use std::collections::VecDeque;
use std::sync::Arc;

/// Mock response configuration
#[derive(Debug)]
pub struct MockResponse {
    /// Response body
    pub body: String,
    /// HTTP status code
    pub status: u16,
    /// Error to return instead
    pub error: Option<SlackError>,
}

impl MockResponse {
    /// Create a successful JSON response
    pub fn json<T: Serialize>(data: &T) -> Self {
        Self::ok(serde_json::to_string(data).unwrap_or_default())
    }

    /// Create a 200 response with raw body
    pub fn ok(body: impl Into<String>) -> Self {
        Self::status(200, body)
    }

    /// Create a bare `{"ok":true}` envelope
    pub fn ok_envelope() -> Self {
        Self::ok(r#"{"ok":true}"#)
    }

    /// Create a response with any status
    pub fn status(status: u16, body: impl Into<String>) -> Self {
        Self {
            body: body.into(),
            status,
            error: None,
        }
    }

    /// Create a transport failure
    pub fn error(error: SlackError) -> Self {
        Self {
            body: String::new(),
            status: 0,
            error: Some(error),
        }
    }

    /// Create a Slack API error response
    pub fn slack_error(error_code: &str) -> Self {
        Self::ok(format!(r#"{{"ok":false,"error":"{}"}}"#, error_code))
    }

    fn replay(&self) -> Self {
        Self {
            body: self.body.clone(),
            status: self.status,
            error: None,
        }
    }
}

/// Mock HTTP transport for testing
pub struct MockHttpTransport {
    /// Queue of responses to return
    responses: Arc<Mutex<VecDeque<MockResponse>>>,
    /// Recorded requests
    requests: Arc<Mutex<Vec<TransportRequest>>>,
    /// Default response if queue is empty
    default_response: Option<MockResponse>,
}

impl MockHttpTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            default_response: None,
        }
    }

    /// Add a response to the queue
    pub fn add_response(self, response: MockResponse) -> Self {
        self.responses.lock().push_back(response);
        self
    }

    /// Add multiple responses
    pub fn add_responses(self, responses: impl IntoIterator<Item = MockResponse>) -> Self {
        self.responses.lock().extend(responses);
        self
    }

    /// Add a JSON response
    pub fn add_json_response<T: Serialize>(self, data: &T) -> Self {
        self.add_response(MockResponse::json(data))
    }

    /// Set default response when queue is empty.
    ///
    /// The default is replayed for every call; an `error` on it is ignored.
    pub fn with_default_response(mut self, response: MockResponse) -> Self {
        self.default_response = Some(response);
        self
    }

    /// Get recorded requests
    pub fn recorded_requests(&self) -> Vec<TransportRequest> {
        self.requests.lock().clone()
    }

    /// Get the last recorded request
    pub fn last_request(&self) -> Option<TransportRequest> {
        self.requests.lock().last().cloned()
    }

    /// Number of requests sent so far
    pub fn request_count(&self) -> usize {
        self.requests.lock().len()
    }

    /// Clear recorded requests
    pub fn clear_requests(&self) {
        self.requests.lock().clear();
    }

    /// Get remaining response count
    pub fn remaining_responses(&self) -> usize {
        self.responses.lock().len()
    }

    fn next_response(&self) -> Option<MockResponse> {
        let mut queue = self.responses.lock();
        queue
            .pop_front()
            .or_else(|| self.default_response.as_ref().map(MockResponse::replay))
    }
}

impl Default for MockHttpTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpTransport for MockHttpTransport {
    async fn send(&self, request: TransportRequest) -> SlackResult<TransportResponse> {
        self.requests.lock().push(request);

        let response = self.next_response().ok_or_else(|| {
            SlackError::Response(ResponseError::UnexpectedResponse {
                message: "No mock response configured".to_string(),
            })
        })?;

        if let Some(error) = response.error {
            return Err(error);
        }

        let status = StatusCode::from_u16(response.status).map_err(|e| {
            SlackError::Response(ResponseError::UnexpectedResponse {
                message: e.to_string(),
            })
        })?;

        Ok(TransportResponse::new(status, response.body))
    }
}

impl std::fmt::Debug for MockHttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockHttpTransport")
            .field("pending_responses", &self.responses.lock().len())
            .field("recorded_requests", &self.requests.lock().len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Params;

    #[tokio::test]
    async fn test_mock_transport_replays_in_order() {
        let transport = MockHttpTransport::new()
            .add_response(MockResponse::ok_envelope())
            .add_response(MockResponse::slack_error("invalid_auth"));

        let first = transport
            .send(TransportRequest::get("https://slack.com/api/a"))
            .await
            .unwrap();
        let second = transport
            .send(TransportRequest::get("https://slack.com/api/b"))
            .await
            .unwrap();

        assert_eq!(first.body, r#"{"ok":true}"#);
        assert!(second.body.contains("invalid_auth"));
        assert_eq!(transport.remaining_responses(), 0);
    }

    #[tokio::test]
    async fn test_mock_transport_records_requests() {
        let transport =
            MockHttpTransport::new().with_default_response(MockResponse::ok_envelope());

        let request = TransportRequest::post("https://slack.com/api/chat.delete")
            .with_params(Params::new().with("channel", "C1"));
        transport.send(request.clone()).await.unwrap();
        transport.send(request).await.unwrap();

        let requests = transport.recorded_requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].url, "https://slack.com/api/chat.delete");
        assert_eq!(requests[1].params.get("channel"), Some("C1"));

        transport.clear_requests();
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_mock_transport_without_responses() {
        let transport = MockHttpTransport::new();

        let result = transport
            .send(TransportRequest::get("https://slack.com/api/test"))
            .await;
        assert!(result.is_err());
        assert_eq!(transport.request_count(), 1);
    }
}
