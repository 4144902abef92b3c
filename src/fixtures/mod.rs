//! Test fixtures for Slack API responses.
//!
//! Envelope bodies shaped like what the Web API returns. Pair them with
//! [`MockResponse::json`](crate::mocks::MockResponse::json).

use serde_json::{json, Value};

/// Create an OK response
pub fn ok() -> Value {
    json!({ "ok": true })
}

/// Create an error response
pub fn error(code: &str) -> Value {
    json!({
        "ok": false,
        "error": code
    })
}

/// Create a channels.list response
pub fn channels_list() -> Value {
    json!({
        "ok": true,
        "channels": [
            {
                "id": "C1234567890",
                "name": "general",
                "is_channel": true,
                "is_member": true,
                "created": 1234567890
            },
            {
                "id": "C0987654321",
                "name": "random",
                "is_channel": true,
                "is_member": false,
                "created": 1234567890
            }
        ]
    })
}

/// Create a users.list response
pub fn users_list() -> Value {
    json!({
        "ok": true,
        "members": [
            {
                "id": "U1234567890",
                "name": "jdoe",
                "real_name": "John Doe",
                "is_bot": false
            },
            {
                "id": "U0987654321",
                "name": "jsmith",
                "real_name": "Jane Smith",
                "is_bot": false
            }
        ]
    })
}

/// Create a users.list response where two members share a name
pub fn users_list_with_duplicate_name() -> Value {
    json!({
        "ok": true,
        "members": [
            { "id": "U1", "name": "alice" },
            { "id": "U2", "name": "alice" }
        ]
    })
}

/// Create a chat.postMessage response
pub fn post_message() -> Value {
    json!({
        "ok": true,
        "channel": "C1234567890",
        "ts": "1234567890.123456",
        "message": {
            "type": "message",
            "text": "Hello, World!",
            "user": "U1234567890",
            "ts": "1234567890.123456"
        }
    })
}

/// Create an auth.test response
pub fn auth_test() -> Value {
    json!({
        "ok": true,
        "url": "https://team.slack.com/",
        "team": "Test Team",
        "user": "testbot",
        "team_id": "T1234567890",
        "user_id": "U1234567890"
    })
}

/// Create a files.upload response
pub fn files_upload() -> Value {
    json!({
        "ok": true,
        "file": {
            "id": "F1234567890",
            "name": "report.txt",
            "mimetype": "text/plain",
            "size": 11
        }
    })
}
