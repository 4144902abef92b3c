//! Presence service for Slack API.

use crate::client::ApiClient;
use crate::errors::SlackResult;
use crate::types::{Envelope, Params, Presence};
use tracing::instrument;

/// Presence service implementation
#[derive(Debug, Clone)]
pub struct PresenceService {
    client: ApiClient,
}

impl PresenceService {
    /// Create a new presence service
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Manually set the caller's presence.
    ///
    /// Accepts a [`Presence`] or its wire name; any other string fails with
    /// [`RequestError::InvalidPresence`](crate::errors::RequestError) and
    /// nothing is sent.
    #[instrument(skip(self, presence), fields(presence = presence.as_ref()))]
    pub async fn set(&self, presence: impl AsRef<str>) -> SlackResult<Envelope> {
        let presence: Presence = presence.as_ref().parse()?;
        self.client
            .post("presence.set", Params::new().with("presence", presence))
            .await
    }
}
