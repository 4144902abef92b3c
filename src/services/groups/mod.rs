//! Groups service for Slack API.
//!
//! Private channel methods (`groups.*`).

use crate::client::ApiClient;
use crate::errors::SlackResult;
use crate::types::{Envelope, HistoryRequest, Params};
use tracing::instrument;

/// Groups service implementation
#[derive(Debug, Clone)]
pub struct GroupsService {
    client: ApiClient,
}

impl GroupsService {
    /// Create a new groups service
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Create a private channel
    #[instrument(skip(self))]
    pub async fn create(&self, name: &str) -> SlackResult<Envelope> {
        self.client
            .post("groups.create", Params::new().with("name", name))
            .await
    }

    /// Clone and archive a private channel
    #[instrument(skip(self))]
    pub async fn create_child(&self, channel: &str) -> SlackResult<Envelope> {
        self.client
            .post("groups.createChild", channel_params(channel))
            .await
    }

    /// Get information about a private channel
    #[instrument(skip(self))]
    pub async fn info(&self, channel: &str) -> SlackResult<Envelope> {
        self.client.get("groups.info", channel_params(channel)).await
    }

    /// List private channels the caller belongs to
    #[instrument(skip(self))]
    pub async fn list(&self, exclude_archived: Option<bool>) -> SlackResult<Envelope> {
        self.client
            .get(
                "groups.list",
                Params::new().with_opt("exclude_archived", exclude_archived),
            )
            .await
    }

    /// Fetch message history
    #[instrument(skip(self))]
    pub async fn history(&self, request: HistoryRequest) -> SlackResult<Envelope> {
        self.client
            .get("groups.history", Params::from_serialize(&request)?)
            .await
    }

    /// Invite a user
    #[instrument(skip(self))]
    pub async fn invite(&self, channel: &str, user: &str) -> SlackResult<Envelope> {
        self.client
            .post("groups.invite", channel_params(channel).with("user", user))
            .await
    }

    /// Remove a user
    #[instrument(skip(self))]
    pub async fn kick(&self, channel: &str, user: &str) -> SlackResult<Envelope> {
        self.client
            .post("groups.kick", channel_params(channel).with("user", user))
            .await
    }

    /// Leave a private channel
    #[instrument(skip(self))]
    pub async fn leave(&self, channel: &str) -> SlackResult<Envelope> {
        self.client.post("groups.leave", channel_params(channel)).await
    }

    /// Move the read cursor
    #[instrument(skip(self))]
    pub async fn mark(&self, channel: &str, ts: &str) -> SlackResult<Envelope> {
        self.client
            .post("groups.mark", channel_params(channel).with("ts", ts))
            .await
    }

    /// Rename a private channel
    #[instrument(skip(self))]
    pub async fn rename(&self, channel: &str, name: &str) -> SlackResult<Envelope> {
        self.client
            .post("groups.rename", channel_params(channel).with("name", name))
            .await
    }

    /// Archive a private channel
    #[instrument(skip(self))]
    pub async fn archive(&self, channel: &str) -> SlackResult<Envelope> {
        self.client
            .post("groups.archive", channel_params(channel))
            .await
    }

    /// Unarchive a private channel
    #[instrument(skip(self))]
    pub async fn unarchive(&self, channel: &str) -> SlackResult<Envelope> {
        self.client
            .post("groups.unarchive", channel_params(channel))
            .await
    }

    /// Open a private channel
    #[instrument(skip(self))]
    pub async fn open(&self, channel: &str) -> SlackResult<Envelope> {
        self.client.post("groups.open", channel_params(channel)).await
    }

    /// Close a private channel
    #[instrument(skip(self))]
    pub async fn close(&self, channel: &str) -> SlackResult<Envelope> {
        self.client.post("groups.close", channel_params(channel)).await
    }

    /// Set the purpose
    #[instrument(skip(self))]
    pub async fn set_purpose(&self, channel: &str, purpose: &str) -> SlackResult<Envelope> {
        self.client
            .post(
                "groups.setPurpose",
                channel_params(channel).with("purpose", purpose),
            )
            .await
    }

    /// Set the topic
    #[instrument(skip(self))]
    pub async fn set_topic(&self, channel: &str, topic: &str) -> SlackResult<Envelope> {
        self.client
            .post("groups.setTopic", channel_params(channel).with("topic", topic))
            .await
    }
}

fn channel_params(channel: &str) -> Params {
    Params::new().with("channel", channel)
}
