//! IM service for Slack API.
//!
//! Direct message channels (`im.*`).

use crate::client::ApiClient;
use crate::errors::SlackResult;
use crate::types::{Envelope, HistoryRequest, Params};
use tracing::instrument;

/// IM service implementation
#[derive(Debug, Clone)]
pub struct ImService {
    client: ApiClient,
}

impl ImService {
    /// Create a new IM service
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List direct message channels
    #[instrument(skip(self))]
    pub async fn list(&self) -> SlackResult<Envelope> {
        self.client.get("im.list", Params::new()).await
    }

    /// Fetch message history
    #[instrument(skip(self))]
    pub async fn history(&self, request: HistoryRequest) -> SlackResult<Envelope> {
        self.client
            .get("im.history", Params::from_serialize(&request)?)
            .await
    }

    /// Move the read cursor
    #[instrument(skip(self))]
    pub async fn mark(&self, channel: &str, ts: &str) -> SlackResult<Envelope> {
        self.client
            .post(
                "im.mark",
                Params::new().with("channel", channel).with("ts", ts),
            )
            .await
    }

    /// Open a direct message channel with a user
    #[instrument(skip(self))]
    pub async fn open(&self, user: &str) -> SlackResult<Envelope> {
        self.client
            .post("im.open", Params::new().with("user", user))
            .await
    }

    /// Close a direct message channel
    #[instrument(skip(self))]
    pub async fn close(&self, channel: &str) -> SlackResult<Envelope> {
        self.client
            .post("im.close", Params::new().with("channel", channel))
            .await
    }
}
