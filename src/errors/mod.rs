//! Error types for the Slack client.
//!
//! Every failure reaches the caller through [`SlackError`]. The categories
//! separate transport failures, protocol violations, errors reported by
//! Slack itself and validation that happens before any request is sent.

use thiserror::Error;

/// Result type for Slack operations
pub type SlackResult<T> = Result<T, SlackError>;

/// Error code reported when an `ok:false` envelope carries no `error` field
pub const UNKNOWN_API_ERROR: &str = "unknown_error";

/// Root error type for the Slack client
#[derive(Error, Debug)]
pub enum SlackError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    /// Local validation error, raised before any request is sent
    #[error("Request error: {0}")]
    Request(#[from] RequestError),

    /// Transport failure (connection, DNS, timeout)
    #[error("Network error: {0}")]
    Network(#[from] NetworkError),

    /// Protocol violation in the HTTP response
    #[error("Response error: {0}")]
    Response(#[from] ResponseError),

    /// Error reported by Slack in an `ok:false` envelope.
    ///
    /// Displays as the raw error code, e.g. `invalid_auth`.
    #[error("{error}")]
    Api {
        /// Slack error code, verbatim
        error: String,
    },
}

impl SlackError {
    /// Create an API error from the `error` field of an envelope
    pub fn api(error: impl Into<String>) -> Self {
        Self::Api {
            error: error.into(),
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "SLACK_CONFIG",
            Self::Request(_) => "SLACK_REQUEST",
            Self::Network(_) => "SLACK_NETWORK",
            Self::Response(_) => "SLACK_RESPONSE",
            Self::Api { .. } => "SLACK_API",
        }
    }

    /// The Slack error code if this error came from an `ok:false` envelope
    pub fn api_error(&self) -> Option<&str> {
        match self {
            Self::Api { error } => Some(error),
            _ => None,
        }
    }

    /// HTTP status of a non-200 response, if that is what failed
    pub fn http_status(&self) -> Option<u16> {
        match self {
            Self::Response(ResponseError::UnexpectedStatus { status, .. }) => Some(*status),
            _ => None,
        }
    }

    /// Check if the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Network(NetworkError::Timeout))
    }
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigurationError {
    /// Incoming webhook posted without a URL
    #[error("URL for incoming webhook is undefined")]
    MissingWebhookUrl,

    /// Invalid configuration
    #[error("Invalid configuration: {message}")]
    InvalidConfiguration {
        /// Error message
        message: String,
    },

    /// Environment variable error
    #[error("Environment variable error: {0}")]
    EnvVar(String),
}

/// Request validation errors
#[derive(Error, Debug)]
pub enum RequestError {
    /// Presence value other than `active` or `away`
    #[error("Invalid presence type: {value}")]
    InvalidPresence {
        /// Rejected value
        value: String,
    },

    /// Arguments could not be turned into request parameters
    #[error("Invalid arguments: {message}")]
    InvalidArguments {
        /// Error message
        message: String,
    },

    /// Local file for upload could not be read
    #[error("Cannot read {path}: {message}")]
    FileUnreadable {
        /// Path given by the caller
        path: String,
        /// Error message
        message: String,
    },
}

/// Network errors
#[derive(Error, Debug)]
pub enum NetworkError {
    /// Connection failed
    #[error("Connection failed: {message}")]
    ConnectionFailed {
        /// Error message
        message: String,
    },

    /// Request timeout
    #[error("Request timed out")]
    Timeout,

    /// HTTP error
    #[error("HTTP error: {0}")]
    Http(String),
}

impl From<reqwest::Error> for NetworkError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            NetworkError::Timeout
        } else if err.is_connect() {
            NetworkError::ConnectionFailed {
                message: err.to_string(),
            }
        } else {
            NetworkError::Http(err.to_string())
        }
    }
}

/// Response errors
#[derive(Error, Debug)]
pub enum ResponseError {
    /// HTTP status other than 200
    #[error("Unexpected HTTP status {status}")]
    UnexpectedStatus {
        /// Status code
        status: u16,
        /// Response body
        body: String,
    },

    /// Body is not valid JSON
    #[error("Deserialization error: {message}")]
    DeserializationError {
        /// Error message
        message: String,
    },

    /// Missing "ok" field
    #[error("Missing 'ok' field in response")]
    MissingOkField,

    /// Successful envelope without an expected payload field
    #[error("Missing '{field}' field in response")]
    MissingField {
        /// Field name
        field: String,
    },

    /// Unexpected response format
    #[error("Unexpected response: {message}")]
    UnexpectedResponse {
        /// Error message
        message: String,
    },
}

impl From<serde_json::Error> for ResponseError {
    fn from(err: serde_json::Error) -> Self {
        ResponseError::DeserializationError {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_displays_code_verbatim() {
        let err = SlackError::api("invalid_auth");
        assert_eq!(err.to_string(), "invalid_auth");
        assert_eq!(err.api_error(), Some("invalid_auth"));
        assert_eq!(err.error_code(), "SLACK_API");
    }

    #[test]
    fn test_http_status() {
        let err = SlackError::from(ResponseError::UnexpectedStatus {
            status: 404,
            body: "not found".to_string(),
        });
        assert_eq!(err.http_status(), Some(404));
        assert!(err.api_error().is_none());

        assert_eq!(SlackError::api("channel_not_found").http_status(), None);
    }

    #[test]
    fn test_error_categories() {
        assert!(SlackError::Network(NetworkError::Timeout).is_timeout());
        assert_eq!(
            SlackError::from(ConfigurationError::MissingWebhookUrl).error_code(),
            "SLACK_CONFIG"
        );
        assert_eq!(
            SlackError::from(RequestError::InvalidPresence {
                value: "busy".to_string()
            })
            .to_string(),
            "Request error: Invalid presence type: busy"
        );
    }
}
