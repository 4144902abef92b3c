//! Request types for search service.

use serde::Serialize;

/// Request for `search.all`, `search.files` and `search.messages`
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    /// Search query
    pub query: String,
    /// Sort order (score or timestamp)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    /// Sort direction (asc or desc)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_dir: Option<String>,
    /// Whether to highlight matches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
    /// Number of results per page
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl SearchRequest {
    /// Create a new search request
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            sort: None,
            sort_dir: None,
            highlight: None,
            count: None,
            page: None,
        }
    }

    /// Sort by score
    pub fn sort_by_score(mut self) -> Self {
        self.sort = Some("score".to_string());
        self
    }

    /// Sort by timestamp
    pub fn sort_by_timestamp(mut self) -> Self {
        self.sort = Some("timestamp".to_string());
        self
    }

    /// Sort ascending
    pub fn sort_asc(mut self) -> Self {
        self.sort_dir = Some("asc".to_string());
        self
    }

    /// Sort descending
    pub fn sort_desc(mut self) -> Self {
        self.sort_dir = Some("desc".to_string());
        self
    }

    /// Enable or disable highlighting
    pub fn highlight(mut self, highlight: bool) -> Self {
        self.highlight = Some(highlight);
        self
    }

    /// Set the number of results per page
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Set the page number
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

impl From<&str> for SearchRequest {
    fn from(query: &str) -> Self {
        Self::new(query)
    }
}
