//! Configuration management for the Slack client.
//!
//! Supports configuration via:
//! - Explicit values
//! - Environment variables
//! - Builder pattern

use crate::errors::{ConfigurationError, SlackResult};
use crate::observability::redact_token;
use http::HeaderMap;
use secrecy::{ExposeSecret, SecretString};
use std::time::Duration;
use url::Url;

/// Token type enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    /// Bot token (xoxb-*)
    Bot,
    /// User token (xoxp-*)
    User,
    /// App-level token (xapp-*)
    App,
    /// Any other token format (legacy and workspace tokens)
    Other,
}

impl TokenType {
    /// Detect token type from prefix
    pub fn from_token(token: &str) -> Self {
        if token.starts_with("xoxb-") {
            TokenType::Bot
        } else if token.starts_with("xoxp-") {
            TokenType::User
        } else if token.starts_with("xapp-") {
            TokenType::App
        } else {
            TokenType::Other
        }
    }
}

/// Secure wrapper for Slack tokens
#[derive(Clone)]
pub struct SlackToken {
    token: SecretString,
    token_type: TokenType,
}

impl SlackToken {
    /// Create a new token
    pub fn new(token: impl Into<String>) -> Self {
        let token_str = token.into();
        let token_type = TokenType::from_token(&token_str);
        Self {
            token: SecretString::new(token_str),
            token_type,
        }
    }

    /// Get the token type
    pub fn token_type(&self) -> TokenType {
        self.token_type
    }

    /// Expose the token for use in requests
    pub(crate) fn expose(&self) -> &str {
        self.token.expose_secret()
    }
}

impl std::fmt::Debug for SlackToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SlackToken({:?}, {})",
            self.token_type,
            redact_token(self.expose())
        )
    }
}

/// Configuration for the Slack client
#[derive(Clone)]
pub struct SlackConfig {
    /// Token sent with every Web API call
    pub(crate) token: Option<SlackToken>,
    /// URL of the incoming webhook
    pub(crate) incoming_webhook_url: Option<Url>,
    /// Base URL for API requests
    pub base_url: Url,
    /// Request timeout
    pub timeout: Duration,
    /// Default headers
    pub default_headers: HeaderMap,
}

impl std::fmt::Debug for SlackConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SlackConfig")
            .field("token", &self.token)
            .field("incoming_webhook_url", &self.incoming_webhook_url.is_some())
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl Default for SlackConfig {
    fn default() -> Self {
        Self {
            token: None,
            incoming_webhook_url: None,
            base_url: default_base_url(),
            timeout: Duration::from_secs(crate::DEFAULT_TIMEOUT_SECS),
            default_headers: HeaderMap::new(),
        }
    }
}

fn default_base_url() -> Url {
    Url::parse(crate::DEFAULT_BASE_URL).expect("DEFAULT_BASE_URL is a valid URL")
}

impl SlackConfig {
    /// Create a new configuration builder
    pub fn builder() -> SlackConfigBuilder {
        SlackConfigBuilder::new()
    }

    /// Create configuration from environment variables
    pub fn from_env() -> SlackResult<Self> {
        let mut builder = SlackConfigBuilder::new();

        if let Ok(token) = std::env::var("SLACK_TOKEN") {
            builder = builder.token(token);
        }

        if let Ok(url) = std::env::var("SLACK_INCOMING_WEBHOOK_URL") {
            builder = builder.incoming_webhook_url(&url)?;
        }

        if let Ok(url) = std::env::var("SLACK_BASE_URL") {
            builder = builder.base_url(&url)?;
        }

        if let Ok(timeout) = std::env::var("SLACK_TIMEOUT") {
            let secs = timeout.parse::<u64>().map_err(|_| {
                ConfigurationError::EnvVar(format!("SLACK_TIMEOUT is not a number: {}", timeout))
            })?;
            builder = builder.timeout(Duration::from_secs(secs));
        }

        builder.build()
    }

    /// Get the token if available
    pub fn token(&self) -> Option<&SlackToken> {
        self.token.as_ref()
    }

    /// Get the incoming webhook URL if available
    pub fn incoming_webhook_url(&self) -> Option<&Url> {
        self.incoming_webhook_url.as_ref()
    }

    /// Build the full URL for an endpoint
    pub fn build_url(&self, endpoint: &str) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        let path = endpoint.trim_start_matches('/');
        format!("{}/{}", base, path)
    }

    /// Copy of this configuration without a token
    pub fn without_token(&self) -> Self {
        Self {
            token: None,
            ..self.clone()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> SlackResult<()> {
        if self.timeout.is_zero() {
            return Err(ConfigurationError::InvalidConfiguration {
                message: "Timeout must be greater than zero".to_string(),
            }
            .into());
        }

        if !matches!(self.base_url.scheme(), "http" | "https") {
            return Err(ConfigurationError::InvalidConfiguration {
                message: format!("Unsupported base URL scheme: {}", self.base_url.scheme()),
            }
            .into());
        }

        Ok(())
    }
}

/// Builder for SlackConfig
#[derive(Default)]
pub struct SlackConfigBuilder {
    config: SlackConfig,
}

impl SlackConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self {
            config: SlackConfig::default(),
        }
    }

    /// Set the token
    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.config.token = Some(SlackToken::new(token));
        self
    }

    /// Set the incoming webhook URL
    pub fn incoming_webhook_url(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.config.incoming_webhook_url = Some(parse_url(url)?);
        Ok(self)
    }

    /// Set the base URL
    pub fn base_url(mut self, url: &str) -> Result<Self, ConfigurationError> {
        self.config.base_url = parse_url(url)?;
        Ok(self)
    }

    /// Set the timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header
    pub fn default_header(mut self, name: &str, value: &str) -> Self {
        if let Ok(header_name) = name.parse::<http::header::HeaderName>() {
            if let Ok(header_value) = value.parse::<http::header::HeaderValue>() {
                self.config.default_headers.insert(header_name, header_value);
            }
        }
        self
    }

    /// Build the configuration
    pub fn build(self) -> SlackResult<SlackConfig> {
        self.config.validate()?;
        Ok(self.config)
    }

    /// Build the configuration without validation (for testing)
    pub fn build_unchecked(self) -> SlackConfig {
        self.config
    }
}

fn parse_url(url: &str) -> Result<Url, ConfigurationError> {
    Url::parse(url).map_err(|e| ConfigurationError::InvalidConfiguration {
        message: format!("Invalid URL: {}", e),
    })
}
