//! Chat service implementation.

use super::*;
use crate::client::ApiClient;
use crate::errors::SlackResult;
use crate::types::{Envelope, Params};
use tracing::instrument;

/// Chat service implementation
#[derive(Debug, Clone)]
pub struct ChatService {
    client: ApiClient,
}

impl ChatService {
    /// Create a new chat service
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Post a message to a channel
    #[instrument(skip(self, request), fields(channel = %request.channel))]
    pub async fn post_message(&self, request: PostMessageRequest) -> SlackResult<Envelope> {
        self.client
            .post("chat.postMessage", Params::from_serialize(&request)?)
            .await
    }

    /// Update a message
    #[instrument(skip(self, text))]
    pub async fn update(&self, channel: &str, ts: &str, text: &str) -> SlackResult<Envelope> {
        self.client
            .post(
                "chat.update",
                Params::new()
                    .with("channel", channel)
                    .with("ts", ts)
                    .with("text", text),
            )
            .await
    }

    /// Delete a message
    #[instrument(skip(self))]
    pub async fn delete(&self, channel: &str, ts: &str) -> SlackResult<Envelope> {
        self.client
            .post(
                "chat.delete",
                Params::new().with("channel", channel).with("ts", ts),
            )
            .await
    }
}
