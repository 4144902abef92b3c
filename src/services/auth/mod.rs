//! Auth service for Slack API.
//!
//! Provides `auth.test` for checking a token.

use crate::client::ApiClient;
use crate::errors::SlackResult;
use crate::types::{Envelope, Params};
use serde::Deserialize;
use tracing::instrument;

/// Typed view of an `auth.test` envelope
#[derive(Debug, Clone, Deserialize)]
pub struct AuthTestResponse {
    /// URL of the workspace
    pub url: String,
    /// Team name
    pub team: String,
    /// User name
    pub user: String,
    /// Team ID
    pub team_id: String,
    /// User ID
    pub user_id: String,
    /// Bot ID (if bot token)
    #[serde(default)]
    pub bot_id: Option<String>,
}

/// Auth service implementation
#[derive(Debug, Clone)]
pub struct AuthService {
    client: ApiClient,
}

impl AuthService {
    /// Create a new auth service
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Check authentication and identity
    #[instrument(skip(self))]
    pub async fn test(&self) -> SlackResult<Envelope> {
        self.client.get("auth.test", Params::new()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_test_view() {
        let envelope = Envelope::parse(
            r#"{"ok":true,"url":"https://acme.slack.com/","team":"Acme","user":"bot",
                "team_id":"T1","user_id":"U1"}"#,
        )
        .unwrap();

        let view: AuthTestResponse = envelope.deserialize().unwrap();
        assert_eq!(view.team_id, "T1");
        assert_eq!(view.user_id, "U1");
        assert!(view.bot_id.is_none());
    }
}
