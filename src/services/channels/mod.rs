//! Channels service for Slack API.
//!
//! Public channel methods (`channels.*`).

use crate::client::ApiClient;
use crate::errors::SlackResult;
use crate::types::{find_id_by_name, Envelope, HistoryRequest, Params};
use tracing::instrument;

/// Channels service implementation
#[derive(Debug, Clone)]
pub struct ChannelsService {
    client: ApiClient,
}

impl ChannelsService {
    /// Create a new channels service
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Create a channel
    #[instrument(skip(self))]
    pub async fn create(&self, name: &str) -> SlackResult<Envelope> {
        self.client
            .post("channels.create", Params::new().with("name", name))
            .await
    }

    /// Get information about a channel
    #[instrument(skip(self))]
    pub async fn info(&self, channel: &str) -> SlackResult<Envelope> {
        self.client
            .get("channels.info", channel_params(channel))
            .await
    }

    /// List channels in the team
    #[instrument(skip(self))]
    pub async fn list(&self, exclude_archived: Option<bool>) -> SlackResult<Envelope> {
        self.client
            .get(
                "channels.list",
                Params::new().with_opt("exclude_archived", exclude_archived),
            )
            .await
    }

    /// Fetch message history
    #[instrument(skip(self))]
    pub async fn history(&self, request: HistoryRequest) -> SlackResult<Envelope> {
        self.client
            .get("channels.history", Params::from_serialize(&request)?)
            .await
    }

    /// Move the read cursor
    #[instrument(skip(self))]
    pub async fn mark(&self, channel: &str, ts: &str) -> SlackResult<Envelope> {
        self.client
            .post("channels.mark", channel_params(channel).with("ts", ts))
            .await
    }

    /// Join a channel by name, creating it if needed
    #[instrument(skip(self))]
    pub async fn join(&self, name: &str) -> SlackResult<Envelope> {
        self.client
            .post("channels.join", Params::new().with("name", name))
            .await
    }

    /// Leave a channel
    #[instrument(skip(self))]
    pub async fn leave(&self, channel: &str) -> SlackResult<Envelope> {
        self.client
            .post("channels.leave", channel_params(channel))
            .await
    }

    /// Invite a user
    #[instrument(skip(self))]
    pub async fn invite(&self, channel: &str, user: &str) -> SlackResult<Envelope> {
        self.client
            .post("channels.invite", channel_params(channel).with("user", user))
            .await
    }

    /// Remove a user
    #[instrument(skip(self))]
    pub async fn kick(&self, channel: &str, user: &str) -> SlackResult<Envelope> {
        self.client
            .post("channels.kick", channel_params(channel).with("user", user))
            .await
    }

    /// Rename a channel
    #[instrument(skip(self))]
    pub async fn rename(&self, channel: &str, name: &str) -> SlackResult<Envelope> {
        self.client
            .post("channels.rename", channel_params(channel).with("name", name))
            .await
    }

    /// Archive a channel
    #[instrument(skip(self))]
    pub async fn archive(&self, channel: &str) -> SlackResult<Envelope> {
        self.client
            .post("channels.archive", channel_params(channel))
            .await
    }

    /// Unarchive a channel
    #[instrument(skip(self))]
    pub async fn unarchive(&self, channel: &str) -> SlackResult<Envelope> {
        self.client
            .post("channels.unarchive", channel_params(channel))
            .await
    }

    /// Set the channel purpose
    #[instrument(skip(self))]
    pub async fn set_purpose(&self, channel: &str, purpose: &str) -> SlackResult<Envelope> {
        self.client
            .post(
                "channels.setPurpose",
                channel_params(channel).with("purpose", purpose),
            )
            .await
    }

    /// Set the channel topic
    #[instrument(skip(self))]
    pub async fn set_topic(&self, channel: &str, topic: &str) -> SlackResult<Envelope> {
        self.client
            .post("channels.setTopic", channel_params(channel).with("topic", topic))
            .await
    }

    /// Resolve a channel name to its ID via `channels.list`.
    ///
    /// Returns `Ok(None)` if no channel has exactly that name. A listing
    /// without a `channels` array is an error, not a miss.
    #[instrument(skip(self))]
    pub async fn get_channel_id(&self, channel_name: &str) -> SlackResult<Option<String>> {
        let envelope = self.list(None).await?;
        let channels = envelope.array_field("channels")?;
        Ok(find_id_by_name(channels, channel_name))
    }
}

fn channel_params(channel: &str) -> Params {
    Params::new().with("channel", channel)
}
