//! Common types for the Slack API.
//!
//! Defines the response envelope, request parameters and the argument
//! types shared across services.

use serde_json::Value;

pub mod channel;
pub mod envelope;
pub mod message;
pub mod params;
pub mod user;

pub use channel::*;
pub use envelope::*;
pub use message::*;
pub use params::*;
pub use user::*;

/// Find the `id` of the first item whose `name` equals `name` exactly.
///
/// Works on the `members` of `users.list` and the `channels` of
/// `channels.list`. Returns `None` when nothing matches.
pub fn find_id_by_name(items: &[Value], name: &str) -> Option<String> {
    items
        .iter()
        .find(|item| item.get("name").and_then(Value::as_str) == Some(name))
        .and_then(|item| item.get("id"))
        .and_then(Value::as_str)
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_find_id_by_name() {
        let items = vec![
            json!({"id": "U1", "name": "alice"}),
            json!({"id": "U2", "name": "bob"}),
        ];

        assert_eq!(find_id_by_name(&items, "bob"), Some("U2".to_string()));
        assert_eq!(find_id_by_name(&items, "carol"), None);
        assert_eq!(find_id_by_name(&items, "Bob"), None);
    }

    #[test]
    fn test_find_id_takes_first_match() {
        let items = vec![
            json!({"id": "C1", "name": "general"}),
            json!({"id": "C2", "name": "general"}),
            json!({"name": "orphan"}),
        ];

        assert_eq!(find_id_by_name(&items, "general"), Some("C1".to_string()));
        assert_eq!(find_id_by_name(&items, "orphan"), None);
    }
}
