//! Observability helpers for the Slack client.
//!
//! The crate logs through `tracing` and never installs a subscriber; these
//! helpers keep tokens and secrets out of log output.

pub mod logging;

pub use logging::*;
