//! Stars service for Slack API.

use crate::client::ApiClient;
use crate::errors::SlackResult;
use crate::types::{Envelope, Params};
use tracing::instrument;

/// Stars service implementation
#[derive(Debug, Clone)]
pub struct StarsService {
    client: ApiClient,
}

impl StarsService {
    /// Create a new stars service
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List starred items, for the caller or for `user`
    #[instrument(skip(self))]
    pub async fn list(
        &self,
        user: Option<&str>,
        count: Option<u32>,
        page: Option<u32>,
    ) -> SlackResult<Envelope> {
        self.client
            .get(
                "stars.list",
                Params::new()
                    .with_opt("user", user)
                    .with_opt("count", count)
                    .with_opt("page", page),
            )
            .await
    }
}
