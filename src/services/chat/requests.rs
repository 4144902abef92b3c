//! Request types for chat service.

use crate::types::Attachments;
use serde::Serialize;

/// Request to post a message
#[derive(Debug, Clone, Serialize)]
pub struct PostMessageRequest {
    /// Channel, private group, or IM channel to send to
    pub channel: String,
    /// Message text
    pub text: String,
    /// Bot username
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    /// Post as the authed user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub as_user: Option<bool>,
    /// Parse mode (full, none)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parse: Option<String>,
    /// Find and link channel names and usernames
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_names: Option<bool>,
    /// Legacy attachments, JSON-encoded on the wire
    #[serde(skip_serializing_if = "no_attachments")]
    pub attachments: Option<Attachments>,
    /// Enable link unfurling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unfurl_links: Option<bool>,
    /// Enable media unfurling
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unfurl_media: Option<bool>,
    /// Bot icon URL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_url: Option<String>,
    /// Bot icon emoji
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_emoji: Option<String>,
}

fn no_attachments(attachments: &Option<Attachments>) -> bool {
    attachments.as_ref().map_or(true, Attachments::is_empty)
}

impl PostMessageRequest {
    /// Create a new message request
    pub fn new(channel: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            text: text.into(),
            username: None,
            as_user: None,
            parse: None,
            link_names: None,
            attachments: None,
            unfurl_links: None,
            unfurl_media: None,
            icon_url: None,
            icon_emoji: None,
        }
    }

    /// Set the bot username
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Post as the authed user
    pub fn as_user(mut self, as_user: bool) -> Self {
        self.as_user = Some(as_user);
        self
    }

    /// Set the parse mode
    pub fn parse(mut self, parse: impl Into<String>) -> Self {
        self.parse = Some(parse.into());
        self
    }

    /// Link channel names and usernames
    pub fn link_names(mut self, link_names: bool) -> Self {
        self.link_names = Some(link_names);
        self
    }

    /// Set attachments, either pre-encoded or as a list
    pub fn attachments(mut self, attachments: impl Into<Attachments>) -> Self {
        self.attachments = Some(attachments.into());
        self
    }

    /// Enable or disable link unfurling
    pub fn unfurl_links(mut self, unfurl: bool) -> Self {
        self.unfurl_links = Some(unfurl);
        self
    }

    /// Enable or disable media unfurling
    pub fn unfurl_media(mut self, unfurl: bool) -> Self {
        self.unfurl_media = Some(unfurl);
        self
    }

    /// Set the icon URL
    pub fn icon_url(mut self, url: impl Into<String>) -> Self {
        self.icon_url = Some(url.into());
        self
    }

    /// Set the icon emoji
    pub fn icon_emoji(mut self, emoji: impl Into<String>) -> Self {
        self.icon_emoji = Some(emoji.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Params;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_minimal_message_params() {
        let params = Params::from_serialize(&PostMessageRequest::new("#general", "Hello")).unwrap();

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("channel"), Some("#general"));
        assert_eq!(params.get("text"), Some("Hello"));
    }

    #[test]
    fn test_attachments_list_is_encoded() {
        let request =
            PostMessageRequest::new("C1", "hi").attachments(vec![json!({"text": "hi"})]);
        let params = Params::from_serialize(&request).unwrap();

        assert_eq!(params.get("attachments"), Some(r#"[{"text":"hi"}]"#));
    }

    #[test]
    fn test_attachments_string_passes_through() {
        let request = PostMessageRequest::new("C1", "hi").attachments(r#"[{"text": "hi"}]"#);
        let params = Params::from_serialize(&request).unwrap();

        assert_eq!(params.get("attachments"), Some(r#"[{"text": "hi"}]"#));
    }

    #[test]
    fn test_empty_attachments_are_omitted() {
        let request = PostMessageRequest::new("C1", "hi").attachments(Vec::new());
        let params = Params::from_serialize(&request).unwrap();

        assert!(!params.contains_key("attachments"));
    }

    #[test]
    fn test_flags_are_rendered() {
        let request = PostMessageRequest::new("C1", "hi")
            .as_user(true)
            .unfurl_links(false)
            .icon_emoji(":robot_face:");
        let params = Params::from_serialize(&request).unwrap();

        assert_eq!(params.get("as_user"), Some("true"));
        assert_eq!(params.get("unfurl_links"), Some("false"));
        assert_eq!(params.get("icon_emoji"), Some(":robot_face:"));
    }
}
