//! Incoming webhook tests.

use super::slacker_with;
use crate::client::Slacker;
use crate::config::SlackConfig;
use crate::errors::{ConfigurationError, SlackError};
use crate::mocks::{MockHttpTransport, MockResponse};
use crate::webhooks::IncomingWebhookPayload;
use http::Method;
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_webhook_without_url_fails_locally() {
    let transport = Arc::new(MockHttpTransport::new());
    let slack = slacker_with(&transport);

    let err = slack
        .incoming_webhook()
        .post(&json!({"text": "hello"}))
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        SlackError::Configuration(ConfigurationError::MissingWebhookUrl)
    ));
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_webhook_posts_payload_once() {
    let transport = Arc::new(MockHttpTransport::new().add_response(MockResponse::ok("ok")));
    let config = SlackConfig::builder()
        .token("xoxb-unused")
        .incoming_webhook_url("https://hooks.slack.com/services/T0/B0/abc")
        .unwrap()
        .timeout(Duration::from_secs(9))
        .build()
        .unwrap();
    let slack = Slacker::with_transport(config, transport.clone());

    let response = slack
        .incoming_webhook()
        .post(&json!({"text": "hello"}))
        .await
        .unwrap();
    assert_eq!(response.body, "ok");

    let requests = transport.recorded_requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.url, "https://hooks.slack.com/services/T0/B0/abc");
    assert_eq!(request.timeout, Some(Duration::from_secs(9)));
    assert!(request.params.is_empty());
    let body: serde_json::Value = serde_json::from_slice(request.body.as_deref().unwrap()).unwrap();
    assert_eq!(body, json!({"text": "hello"}));
}

#[tokio::test]
async fn test_webhook_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/services/T0/B0/abc"))
        .and(header("content-type", "application/json"))
        .and(body_json(json!({"text": "deployed", "username": "ci"})))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .expect(1)
        .mount(&server)
        .await;

    let config = SlackConfig::builder()
        .incoming_webhook_url(&format!("{}/services/T0/B0/abc", server.uri()))
        .unwrap()
        .build()
        .unwrap();
    let slack = Slacker::with_config(config).unwrap();

    let response = slack
        .incoming_webhook()
        .post(&IncomingWebhookPayload::new("deployed").username("ci"))
        .await
        .unwrap();

    assert_eq!(response.status.as_u16(), 200);
    assert_eq!(response.body, "ok");
}
