//! Files service for Slack API.
//!
//! Provides methods for uploading, listing, and deleting files.

use crate::client::ApiClient;
use crate::errors::{RequestError, SlackResult};
use crate::transport::FileUpload;
use crate::types::{ChannelList, Envelope, Params};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing::{debug, instrument};

/// Multipart field name Slack reads the file from
const FILE_FIELD: &str = "file";

/// Request to list files
#[derive(Debug, Clone, Serialize, Default)]
pub struct ListFilesRequest {
    /// Filter by user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Oldest timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts_from: Option<String>,
    /// Latest timestamp
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ts_to: Option<String>,
    /// Filter by file type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub types: Option<String>,
    /// Number of results
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Page number
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
}

impl ListFilesRequest {
    /// Create a new request
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by user
    pub fn user(mut self, user: impl Into<String>) -> Self {
        self.user = Some(user.into());
        self
    }

    /// Only files created after this timestamp
    pub fn ts_from(mut self, ts: impl Into<String>) -> Self {
        self.ts_from = Some(ts.into());
        self
    }

    /// Only files created before this timestamp
    pub fn ts_to(mut self, ts: impl Into<String>) -> Self {
        self.ts_to = Some(ts.into());
        self
    }

    /// Filter by type (e.g., "images", "gdocs", "pdfs")
    pub fn types(mut self, types: impl Into<String>) -> Self {
        self.types = Some(types.into());
        self
    }

    /// Set page size
    pub fn count(mut self, n: u32) -> Self {
        self.count = Some(n);
        self
    }

    /// Set page number
    pub fn page(mut self, page: u32) -> Self {
        self.page = Some(page);
        self
    }
}

/// Request to upload a local file
#[derive(Debug, Clone, Serialize)]
pub struct UploadFileRequest {
    /// Local path of the file to upload
    #[serde(skip)]
    pub path: PathBuf,
    /// Text content, when not uploading a file body
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    /// File type
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filetype: Option<String>,
    /// Filename shown in Slack
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Title for the file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Initial comment
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_comment: Option<String>,
    /// Channels to share the file in
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<ChannelList>,
}

impl UploadFileRequest {
    /// Create a new upload request for a local file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            content: None,
            filetype: None,
            filename: None,
            title: None,
            initial_comment: None,
            channels: None,
        }
    }

    /// Set text content
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// Set file type
    pub fn filetype(mut self, filetype: impl Into<String>) -> Self {
        self.filetype = Some(filetype.into());
        self
    }

    /// Set filename
    pub fn filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = Some(filename.into());
        self
    }

    /// Set title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set initial comment
    pub fn initial_comment(mut self, comment: impl Into<String>) -> Self {
        self.initial_comment = Some(comment.into());
        self
    }

    /// Set channels to share with, one ID or several
    pub fn channels(mut self, channels: impl Into<ChannelList>) -> Self {
        self.channels = Some(channels.into());
        self
    }
}

/// Files service implementation
#[derive(Debug, Clone)]
pub struct FilesService {
    client: ApiClient,
}

impl FilesService {
    /// Create a new files service
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// List files
    #[instrument(skip(self))]
    pub async fn list(&self, request: ListFilesRequest) -> SlackResult<Envelope> {
        self.client
            .get("files.list", Params::from_serialize(&request)?)
            .await
    }

    /// Get file info and its comments
    #[instrument(skip(self))]
    pub async fn info(
        &self,
        file: &str,
        count: Option<u32>,
        page: Option<u32>,
    ) -> SlackResult<Envelope> {
        self.client
            .get(
                "files.info",
                Params::new()
                    .with("file", file)
                    .with_opt("count", count)
                    .with_opt("page", page),
            )
            .await
    }

    /// Upload a local file as multipart form data
    #[instrument(skip(self, request), fields(path = %request.path.display()))]
    pub async fn upload(&self, request: UploadFileRequest) -> SlackResult<Envelope> {
        let content = tokio::fs::read(&request.path)
            .await
            .map_err(|e| RequestError::FileUnreadable {
                path: request.path.display().to_string(),
                message: e.to_string(),
            })?;
        debug!(bytes = content.len(), "Read file for upload");

        let upload = FileUpload::new(FILE_FIELD, upload_file_name(&request.path), content);
        let params = Params::from_serialize(&request)?;

        self.client.post_file("files.upload", params, upload).await
    }

    /// Delete a file
    #[instrument(skip(self))]
    pub async fn delete(&self, file: &str) -> SlackResult<Envelope> {
        self.client
            .post("files.delete", Params::new().with("file", file))
            .await
    }
}

fn upload_file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| FILE_FIELD.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upload_params_skip_path() {
        let request = UploadFileRequest::new("/tmp/report.pdf")
            .title("Report")
            .channels(vec!["C1", "C2"]);
        let params = Params::from_serialize(&request).unwrap();

        assert_eq!(params.get("title"), Some("Report"));
        assert_eq!(params.get("channels"), Some("C1,C2"));
        assert!(!params.contains_key("path"));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_upload_file_name() {
        assert_eq!(upload_file_name(Path::new("/tmp/report.pdf")), "report.pdf");
        assert_eq!(upload_file_name(Path::new("/")), "file");
    }
}
