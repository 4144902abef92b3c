//! Search service implementation.

use super::*;
use crate::client::ApiClient;
use crate::errors::SlackResult;
use crate::types::{Envelope, Params};
use tracing::instrument;

/// Search service implementation
#[derive(Debug, Clone)]
pub struct SearchService {
    client: ApiClient,
}

impl SearchService {
    /// Create a new search service
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Search messages and files
    #[instrument(skip(self))]
    pub async fn all(&self, request: SearchRequest) -> SlackResult<Envelope> {
        self.search("search.all", request).await
    }

    /// Search files
    #[instrument(skip(self))]
    pub async fn files(&self, request: SearchRequest) -> SlackResult<Envelope> {
        self.search("search.files", request).await
    }

    /// Search messages
    #[instrument(skip(self))]
    pub async fn messages(&self, request: SearchRequest) -> SlackResult<Envelope> {
        self.search("search.messages", request).await
    }

    async fn search(&self, endpoint: &str, request: SearchRequest) -> SlackResult<Envelope> {
        self.client
            .get(endpoint, Params::from_serialize(&request)?)
            .await
    }
}
