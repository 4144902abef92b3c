//! Message arguments shared across services.

use serde::{ser::Error as _, Serialize, Serializer};
use serde_json::ser::Formatter;
use serde_json::Value;
use std::io;

/// Legacy message attachments.
///
/// Callers either hand over a JSON string they encoded themselves, or the
/// structured list which is encoded here before sending.
#[derive(Debug, Clone, PartialEq)]
pub enum Attachments {
    /// Already JSON-encoded; sent unchanged
    Encoded(String),
    /// Attachment objects; sent as JSON text with `", "` and `": "` separators
    Structured(Vec<Value>),
}

impl Attachments {
    /// Check if there is nothing to send
    pub fn is_empty(&self) -> bool {
        match self {
            Attachments::Encoded(s) => s.is_empty(),
            Attachments::Structured(items) => items.is_empty(),
        }
    }

    /// Wire form of the attachments
    pub fn to_param(&self) -> serde_json::Result<String> {
        match self {
            Attachments::Encoded(s) => Ok(s.clone()),
            Attachments::Structured(items) => {
                let mut out = Vec::new();
                let mut serializer =
                    serde_json::Serializer::with_formatter(&mut out, SpacedFormatter);
                items.serialize(&mut serializer)?;
                String::from_utf8(out).map_err(serde_json::Error::custom)
            }
        }
    }
}

/// Writes a space after every `,` and `:` separator.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W: ?Sized + io::Write>(
        &mut self,
        writer: &mut W,
        first: bool,
    ) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + io::Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

impl From<&str> for Attachments {
    fn from(encoded: &str) -> Self {
        Attachments::Encoded(encoded.to_string())
    }
}

impl From<String> for Attachments {
    fn from(encoded: String) -> Self {
        Attachments::Encoded(encoded)
    }
}

impl From<Vec<Value>> for Attachments {
    fn from(items: Vec<Value>) -> Self {
        Attachments::Structured(items)
    }
}

impl Serialize for Attachments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let text = self.to_param().map_err(S::Error::custom)?;
        serializer.serialize_str(&text)
    }
}

/// Arguments for `channels.history`, `groups.history` and `im.history`
#[derive(Debug, Clone, Serialize)]
pub struct HistoryRequest {
    /// Conversation ID
    pub channel: String,
    /// End of time range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latest: Option<String>,
    /// Start of time range
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oldest: Option<String>,
    /// Number of messages to return
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u32>,
    /// Include messages with `latest` or `oldest` timestamps
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inclusive: Option<bool>,
}

impl HistoryRequest {
    /// Create a new request
    pub fn new(channel: impl Into<String>) -> Self {
        Self {
            channel: channel.into(),
            latest: None,
            oldest: None,
            count: None,
            inclusive: None,
        }
    }

    /// Set the end of the time range
    pub fn latest(mut self, ts: impl Into<String>) -> Self {
        self.latest = Some(ts.into());
        self
    }

    /// Set the start of the time range
    pub fn oldest(mut self, ts: impl Into<String>) -> Self {
        self.oldest = Some(ts.into());
        self
    }

    /// Set the number of messages
    pub fn count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }

    /// Include boundary messages
    pub fn inclusive(mut self, inclusive: bool) -> Self {
        self.inclusive = Some(inclusive);
        self
    }
}

impl From<&str> for HistoryRequest {
    fn from(channel: &str) -> Self {
        Self::new(channel)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Params;
    use serde_json::json;

    #[test]
    fn test_structured_attachments_are_encoded() {
        let attachments = Attachments::from(vec![json!({"text": "hi"})]);
        assert_eq!(attachments.to_param().unwrap(), r#"[{"text": "hi"}]"#);
    }

    #[test]
    fn test_nested_attachments_use_spaced_separators() {
        let attachments = Attachments::from(vec![
            json!({"fields": [{"short": true, "title": "a"}], "text": "x"}),
            json!({"text": "y"}),
        ]);
        assert_eq!(
            attachments.to_param().unwrap(),
            r#"[{"fields": [{"short": true, "title": "a"}], "text": "x"}, {"text": "y"}]"#
        );
    }

    #[test]
    fn test_encoded_attachments_pass_through() {
        let attachments = Attachments::from(r#"[{"text": "hi"}]"#);
        assert_eq!(attachments.to_param().unwrap(), r#"[{"text": "hi"}]"#);
    }

    #[test]
    fn test_history_request_params() {
        let params =
            Params::from_serialize(&HistoryRequest::new("C1").oldest("100.0").count(50)).unwrap();

        assert_eq!(params.get("channel"), Some("C1"));
        assert_eq!(params.get("oldest"), Some("100.0"));
        assert_eq!(params.get("count"), Some("50"));
        assert_eq!(params.len(), 3);
    }
}
