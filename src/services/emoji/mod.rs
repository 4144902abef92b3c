//! Emoji service for Slack API.

use crate::client::ApiClient;
use crate::errors::SlackResult;
use crate::types::{Envelope, Params};
use tracing::instrument;

/// Emoji service implementation
#[derive(Debug, Clone)]
pub struct EmojiService {
    client: ApiClient,
}

impl EmojiService {
    /// Create a new emoji service
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List custom emoji for the team
    #[instrument(skip(self))]
    pub async fn list(&self) -> SlackResult<Envelope> {
        self.client.get("emoji.list", Params::new()).await
    }
}
