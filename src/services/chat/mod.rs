//! Chat service for Slack API.
//!
//! Provides methods for posting, updating and deleting messages.

mod requests;
mod service;

pub use requests::*;
pub use service::*;
