//! Team service for Slack API.
//!
//! Provides team info and access logs.

use crate::client::ApiClient;
use crate::errors::SlackResult;
use crate::types::{Envelope, Params};
use tracing::instrument;

/// Team service implementation
#[derive(Debug, Clone)]
pub struct TeamService {
    client: ApiClient,
}

impl TeamService {
    /// Create a new team service
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Get information about the team
    #[instrument(skip(self))]
    pub async fn info(&self) -> SlackResult<Envelope> {
        self.client.get("team.info", Params::new()).await
    }

    /// Get access logs
    #[instrument(skip(self))]
    pub async fn access_logs(
        &self,
        count: Option<u32>,
        page: Option<u32>,
    ) -> SlackResult<Envelope> {
        self.client
            .get(
                "team.accessLogs",
                Params::new().with_opt("count", count).with_opt("page", page),
            )
            .await
    }
}
