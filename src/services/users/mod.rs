//! Users service for Slack API.
//!
//! Provides methods for looking up users and managing presence.

use crate::client::ApiClient;
use crate::errors::SlackResult;
use crate::types::{find_id_by_name, Envelope, Params, Presence};
use tracing::instrument;

/// Users service implementation
#[derive(Debug, Clone)]
pub struct UsersService {
    client: ApiClient,
}

impl UsersService {
    /// Create a new users service
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Get information about a user
    #[instrument(skip(self))]
    pub async fn info(&self, user: &str) -> SlackResult<Envelope> {
        self.client
            .get("users.info", Params::new().with("user", user))
            .await
    }

    /// List all users in the team
    #[instrument(skip(self))]
    pub async fn list(&self) -> SlackResult<Envelope> {
        self.client.get("users.list", Params::new()).await
    }

    /// Mark the calling user as active
    #[instrument(skip(self))]
    pub async fn set_active(&self) -> SlackResult<Envelope> {
        self.client.post("users.setActive", Params::new()).await
    }

    /// Get a user's presence
    #[instrument(skip(self))]
    pub async fn get_presence(&self, user: &str) -> SlackResult<Envelope> {
        self.client
            .get("users.getPresence", Params::new().with("user", user))
            .await
    }

    /// Set the calling user's presence.
    ///
    /// Anything other than `active` or `away` is rejected without a request.
    #[instrument(skip(self, presence), fields(presence = presence.as_ref()))]
    pub async fn set_presence(&self, presence: impl AsRef<str>) -> SlackResult<Envelope> {
        let presence: Presence = presence.as_ref().parse()?;
        self.client
            .post("users.setPresence", Params::new().with("presence", presence))
            .await
    }

    /// Resolve a user name to its ID via `users.list`.
    ///
    /// Returns `Ok(None)` if no member has exactly that name. A listing
    /// without a `members` array is an error, not a miss.
    #[instrument(skip(self))]
    pub async fn get_user_id(&self, user_name: &str) -> SlackResult<Option<String>> {
        let envelope = self.list().await?;
        let members = envelope.array_field("members")?;
        Ok(find_id_by_name(members, user_name))
    }
}
