//! Channel arguments.

use serde::{Serialize, Serializer};

/// One channel or several, as accepted by `files.upload`.
///
/// Sent as a single comma-separated parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelList {
    /// A single channel ID (or an already joined list)
    One(String),
    /// Several channel IDs
    Many(Vec<String>),
}

impl ChannelList {
    /// Wire form of the list
    pub fn to_param(&self) -> String {
        match self {
            ChannelList::One(channel) => channel.clone(),
            ChannelList::Many(channels) => channels.join(","),
        }
    }
}

impl From<&str> for ChannelList {
    fn from(channel: &str) -> Self {
        ChannelList::One(channel.to_string())
    }
}

impl From<String> for ChannelList {
    fn from(channel: String) -> Self {
        ChannelList::One(channel)
    }
}

impl From<Vec<String>> for ChannelList {
    fn from(channels: Vec<String>) -> Self {
        ChannelList::Many(channels)
    }
}

impl From<Vec<&str>> for ChannelList {
    fn from(channels: Vec<&str>) -> Self {
        ChannelList::Many(channels.into_iter().map(String::from).collect())
    }
}

impl From<&[&str]> for ChannelList {
    fn from(channels: &[&str]) -> Self {
        ChannelList::Many(channels.iter().map(|c| c.to_string()).collect())
    }
}

impl Serialize for ChannelList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_param())
    }
}
