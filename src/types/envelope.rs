//! The `{ok, error, ...}` envelope wrapping every Web API response.

use crate::errors::{ResponseError, SlackError, SlackResult, UNKNOWN_API_ERROR};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

/// Parsed response of a Web API method.
///
/// If `ok` is false then `error` is set and non-empty. Everything else in
/// the body is endpoint-specific payload, kept as received.
#[derive(Debug, Clone, PartialEq)]
pub struct Envelope {
    ok: bool,
    error: Option<String>,
    raw: String,
    body: Map<String, Value>,
}

impl Envelope {
    /// Parse a response body.
    ///
    /// Fails if the body is not a JSON object or lacks a boolean `ok` field.
    pub fn parse(raw: impl Into<String>) -> Result<Self, ResponseError> {
        let raw = raw.into();
        let body = match serde_json::from_str::<Value>(&raw)? {
            Value::Object(body) => body,
            other => {
                return Err(ResponseError::UnexpectedResponse {
                    message: format!("expected a JSON object, got {}", other),
                })
            }
        };

        let ok = body
            .get("ok")
            .and_then(Value::as_bool)
            .ok_or(ResponseError::MissingOkField)?;

        let error = if ok {
            None
        } else {
            let error = body
                .get("error")
                .and_then(Value::as_str)
                .filter(|e| !e.is_empty())
                .unwrap_or(UNKNOWN_API_ERROR);
            Some(error.to_string())
        };

        Ok(Self {
            ok,
            error,
            raw,
            body,
        })
    }

    /// Turn an `ok:false` envelope into [`SlackError::Api`]
    pub fn into_result(self) -> SlackResult<Self> {
        match self.error {
            Some(error) if !self.ok => Err(SlackError::Api { error }),
            _ => Ok(self),
        }
    }

    /// Whether Slack reported success
    pub fn successful(&self) -> bool {
        self.ok
    }

    /// Error code reported by Slack
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Response body exactly as received
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The whole JSON body, `ok` included
    pub fn body(&self) -> &Map<String, Value> {
        &self.body
    }

    /// Get a payload field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.body.get(key)
    }

    /// Get a payload field the caller relies on
    pub fn field(&self, key: &str) -> SlackResult<&Value> {
        self.body.get(key).ok_or_else(|| {
            ResponseError::MissingField {
                field: key.to_string(),
            }
            .into()
        })
    }

    /// Get a payload field that must be a JSON array
    pub fn array_field(&self, key: &str) -> SlackResult<&[Value]> {
        self.field(key)?
            .as_array()
            .map(Vec::as_slice)
            .ok_or_else(|| {
                ResponseError::UnexpectedResponse {
                    message: format!("`{}` is not an array", key),
                }
                .into()
            })
    }

    /// Deserialize the body into a typed view
    pub fn deserialize<T: DeserializeOwned>(&self) -> SlackResult<T> {
        serde_json::from_value(Value::Object(self.body.clone()))
            .map_err(|e| SlackError::Response(ResponseError::from(e)))
    }
}
