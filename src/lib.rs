//! Slack Web API client
//!
//! Async client mapping Slack Web API methods to typed calls:
//! - One service per method family (users, channels, groups, chat, files, ...)
//! - Token injected into every call, reads sent as GET and writes as POST
//! - Response envelopes checked for `ok` and turned into typed errors
//! - Incoming webhook posting
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use slacker::services::chat::PostMessageRequest;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let slack = slacker::create_client_from_env()?;
//!
//!     slack
//!         .chat()
//!         .post_message(PostMessageRequest::new("#general", "Hello, Slack!"))
//!         .await?;
//!
//!     if let Some(id) = slack.users().get_user_id("alice").await? {
//!         println!("alice is {}", id);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Features
//!
//! - `rustls` (default) - TLS via rustls
//! - `native-tls` - TLS via the platform library

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

// Core modules
pub mod client;
pub mod config;
pub mod errors;
pub mod transport;
pub mod types;

// Services
pub mod services;

// Webhooks
pub mod webhooks;

// Observability
pub mod observability;

// Testing utilities
pub mod fixtures;
pub mod mocks;

// Tests
#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use client::{ApiClient, Slacker};
pub use config::{SlackConfig, SlackConfigBuilder, SlackToken};
pub use errors::{SlackError, SlackResult};
pub use types::{Envelope, Params};
pub use webhooks::{IncomingWebhook, IncomingWebhookPayload};

/// Default base URL for Slack API
pub const DEFAULT_BASE_URL: &str = "https://slack.com/api";

/// Default timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Create a Slack client with the given configuration
pub fn create_client(config: SlackConfig) -> SlackResult<Slacker> {
    Slacker::with_config(config)
}

/// Create a Slack client from environment variables
///
/// Reads:
/// - `SLACK_TOKEN` - API token sent with every call
/// - `SLACK_INCOMING_WEBHOOK_URL` - URL for [`IncomingWebhook::post`]
/// - `SLACK_BASE_URL` - Web API base URL
/// - `SLACK_TIMEOUT` - Request timeout in seconds
pub fn create_client_from_env() -> SlackResult<Slacker> {
    let config = SlackConfig::from_env()?;
    create_client(config)
}
