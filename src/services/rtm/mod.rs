//! RTM service for Slack API.
//!
//! Only the bootstrap call is offered; the returned `url` is for a
//! websocket client this crate does not provide.

use crate::client::ApiClient;
use crate::errors::SlackResult;
use crate::types::{Envelope, Params};
use tracing::instrument;

/// RTM service implementation
#[derive(Debug, Clone)]
pub struct RtmService {
    client: ApiClient,
}

impl RtmService {
    /// Create a new RTM service
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Start a Real Time Messaging session
    #[instrument(skip(self))]
    pub async fn start(&self) -> SlackResult<Envelope> {
        self.client.get("rtm.start", Params::new()).await
    }
}
