//! Request parameters sent to Slack API methods.

use crate::errors::{RequestError, SlackResult};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Parameters for one API call.
///
/// Values are already in their wire form. Keys whose value was absent are
/// never inserted, so nothing is sent for them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// Create an empty parameter set
    pub fn new() -> Self {
        Self::default()
    }

    /// Build parameters from a request struct.
    ///
    /// The value must serialize to a JSON object. `null` fields are
    /// dropped, strings pass through, booleans and numbers are rendered as
    /// text and nested arrays or objects are JSON-encoded.
    pub fn from_serialize<T: Serialize + ?Sized>(value: &T) -> SlackResult<Self> {
        let value = serde_json::to_value(value).map_err(|e| RequestError::InvalidArguments {
            message: e.to_string(),
        })?;

        let object = match value {
            Value::Object(object) => object,
            Value::Null => return Ok(Self::new()),
            other => {
                return Err(RequestError::InvalidArguments {
                    message: format!("parameters must be an object, got {}", other),
                }
                .into())
            }
        };

        let mut params = Self::new();
        for (key, value) in object {
            if let Some(text) = wire_text(value) {
                params.0.insert(key, text);
            }
        }
        Ok(params)
    }

    /// Add a parameter
    pub fn with(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.0.insert(key.into(), value.to_string());
        self
    }

    /// Add a parameter only if a value is present
    pub fn with_opt<V: ToString>(self, key: impl Into<String>, value: Option<V>) -> Self {
        match value {
            Some(value) => self.with(key, value),
            None => self,
        }
    }

    /// Insert a parameter, replacing any previous value
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), value.into())
    }

    /// Get a parameter value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Check whether a parameter is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Number of parameters
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no parameters
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over parameters in key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn wire_text(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        nested => Some(nested.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Serialize)]
    struct Request {
        channel: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        latest: Option<String>,
        oldest: Option<String>,
        count: Option<i32>,
        inclusive: Option<bool>,
    }

    #[test]
    fn test_absent_values_are_elided() {
        let params = Params::from_serialize(&Request {
            channel: "C123".to_string(),
            latest: None,
            oldest: None,
            count: Some(10),
            inclusive: Some(true),
        })
        .unwrap();

        assert_eq!(params.len(), 3);
        assert_eq!(params.get("channel"), Some("C123"));
        assert_eq!(params.get("count"), Some("10"));
        assert_eq!(params.get("inclusive"), Some("true"));
        assert!(!params.contains_key("latest"));
        assert!(!params.contains_key("oldest"));
    }

    #[test]
    fn test_nested_values_are_json_encoded() {
        let params = Params::from_serialize(&serde_json::json!({
            "attachments": [{"text": "hi"}],
        }))
        .unwrap();

        assert_eq!(params.get("attachments"), Some(r#"[{"text":"hi"}]"#));
    }

    #[test]
    fn test_non_object_is_rejected() {
        assert!(Params::from_serialize(&"just a string").is_err());
        assert!(Params::from_serialize(&()).unwrap().is_empty());
    }

    #[test]
    fn test_builder_helpers() {
        let params = Params::new()
            .with("user", "U1")
            .with_opt("count", Some(5))
            .with_opt::<&str>("page", None);

        assert_eq!(params.get("user"), Some("U1"));
        assert_eq!(params.get("count"), Some("5"));
        assert!(!params.contains_key("page"));
    }
}
