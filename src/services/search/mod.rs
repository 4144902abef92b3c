//! Search service for Slack API.
//!
//! Provides methods for searching messages and files.

mod requests;
mod service;

pub use requests::*;
pub use service::*;
