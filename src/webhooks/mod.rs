//! Incoming webhook sender.
//!
//! Posts a JSON document to the configured incoming webhook URL. This is not
//! a Web API call: the body is not an envelope, so the response is handed
//! back unparsed.

use crate::config::SlackConfig;
use crate::errors::{ConfigurationError, RequestError, SlackResult};
use crate::transport::{HttpTransport, TransportRequest, TransportResponse};
use http::header::{HeaderValue, CONTENT_TYPE};
use http::HeaderMap;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Incoming webhook (for posting messages)
#[derive(Clone)]
pub struct IncomingWebhook {
    url: Option<Url>,
    timeout: Duration,
    transport: Arc<dyn HttpTransport>,
}

impl IncomingWebhook {
    /// Create a sender for `url`, which may be absent
    pub fn new(url: Option<Url>, timeout: Duration, transport: Arc<dyn HttpTransport>) -> Self {
        Self {
            url,
            timeout,
            transport,
        }
    }

    /// Create a sender from the webhook URL and timeout in `config`
    pub fn from_config(config: &SlackConfig, transport: Arc<dyn HttpTransport>) -> Self {
        Self::new(
            config.incoming_webhook_url().cloned(),
            config.timeout,
            transport,
        )
    }

    /// Get the webhook URL
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Build a simple message payload
    pub fn simple_message(text: impl Into<String>) -> IncomingWebhookPayload {
        IncomingWebhookPayload::new(text)
    }

    /// Post `payload` as JSON to the webhook URL.
    ///
    /// Fails with [`ConfigurationError::MissingWebhookUrl`] before any
    /// request is made when no URL is configured. The response status and
    /// body are returned as received.
    #[instrument(skip(self, payload))]
    pub async fn post<T: Serialize + ?Sized>(&self, payload: &T) -> SlackResult<TransportResponse> {
        let url = self
            .url
            .as_ref()
            .ok_or(ConfigurationError::MissingWebhookUrl)?;

        let body = serde_json::to_vec(payload).map_err(|e| RequestError::InvalidArguments {
            message: e.to_string(),
        })?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        debug!(bytes = body.len(), "Posting to incoming webhook");

        let request = TransportRequest::post(url.as_str())
            .with_headers(headers)
            .with_body(body)
            .with_timeout(self.timeout);

        let response = self.transport.send(request).await?;
        debug!(status = %response.status, "Incoming webhook responded");
        Ok(response)
    }
}

impl std::fmt::Debug for IncomingWebhook {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Webhook URLs embed a secret path.
        f.debug_struct("IncomingWebhook")
            .field("configured", &self.url.is_some())
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Payload for incoming webhook messages
#[derive(Debug, Clone, Default, Serialize)]
pub struct IncomingWebhookPayload {
    /// Message text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Channel override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
    /// Username override
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Emoji to use as the icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
    /// Image URL to use as the icon
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Legacy attachments
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<serde_json::Value>>,
    /// Enable mrkdwn
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mrkdwn: Option<bool>,
    /// Unfurl links
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unfurl_links: Option<bool>,
}

impl IncomingWebhookPayload {
    /// Create a new payload with text
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Default::default()
        }
    }

    /// Set channel
    pub fn channel(mut self, channel: impl Into<String>) -> Self {
        self.channel = Some(channel.into());
        self
    }

    /// Set username
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set icon emoji
    pub fn icon_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.icon_emoji = Some(emoji.into());
        self
    }

    /// Set icon URL
    pub fn icon_url(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }

    /// Set attachments
    pub fn attachments(mut self, attachments: Vec<serde_json::Value>) -> Self {
        self.attachments = Some(attachments);
        self
    }

    /// Set mrkdwn
    pub fn mrkdwn(mut self, enabled: bool) -> Self {
        self.mrkdwn = Some(enabled);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SlackError;
    use crate::mocks::{MockHttpTransport, MockResponse};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_incoming_webhook_payload() {
        let payload = IncomingWebhook::simple_message("Hello, World!")
            .username("bot")
            .icon_emoji(":ghost:");

        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            serde_json::json!({
                "text": "Hello, World!",
                "username": "bot",
                "icon_emoji": ":ghost:"
            })
        );
    }

    #[tokio::test]
    async fn test_missing_url_sends_nothing() {
        let transport = Arc::new(MockHttpTransport::new());
        let webhook = IncomingWebhook::new(None, Duration::from_secs(1), transport.clone());

        let err = webhook
            .post(&serde_json::json!({"text": "hi"}))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SlackError::Configuration(ConfigurationError::MissingWebhookUrl)
        ));
        assert_eq!(transport.request_count(), 0);
    }

    #[tokio::test]
    async fn test_post_sends_json_body() {
        let transport =
            Arc::new(MockHttpTransport::new().add_response(MockResponse::status(500, "nope")));
        let url = Url::parse("https://hooks.slack.com/services/T/B/X").unwrap();
        let webhook = IncomingWebhook::new(Some(url), Duration::from_secs(7), transport.clone());

        let response = webhook
            .post(&IncomingWebhookPayload::new("deployed"))
            .await
            .unwrap();
        assert_eq!(response.status.as_u16(), 500);
        assert_eq!(response.body, "nope");

        let request = transport.last_request().unwrap();
        assert_eq!(request.method, http::Method::POST);
        assert_eq!(request.url, "https://hooks.slack.com/services/T/B/X");
        assert_eq!(request.headers[CONTENT_TYPE], "application/json");
        assert_eq!(request.timeout, Some(Duration::from_secs(7)));
        assert_eq!(
            request.body.as_deref(),
            Some(br#"{"text":"deployed"}"#.as_slice())
        );
        assert!(request.params.is_empty());
    }

    #[test]
    fn test_debug_hides_url() {
        let url = Url::parse("https://hooks.slack.com/services/T/B/SECRET").unwrap();
        let webhook = IncomingWebhook::new(
            Some(url),
            Duration::from_secs(1),
            Arc::new(MockHttpTransport::new()),
        );
        assert!(!format!("{:?}", webhook).contains("SECRET"));
    }
}
