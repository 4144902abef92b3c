//! Logging utilities with sensitive data redaction.

use crate::types::Params;

/// Parameter keys whose values never reach logs
const SENSITIVE_PARAMS: &[&str] = &["token", "client_secret", "code", "secret", "password"];

/// Redact token from a string, preserving prefix for debugging
pub fn redact_token(token: &str) -> String {
    match token.get(..5) {
        Some(prefix) if token.len() > 8 => format!("{}...[REDACTED]", prefix),
        _ => "[REDACTED]".to_string(),
    }
}

/// Render request parameters for a log line with secrets masked
pub fn redact_params(params: &Params) -> String {
    let rendered: Vec<String> = params
        .iter()
        .map(|(key, value)| {
            if is_sensitive(key) {
                format!("{}=[REDACTED]", key)
            } else {
                format!("{}={}", key, value)
            }
        })
        .collect();
    rendered.join("&")
}

fn is_sensitive(key: &str) -> bool {
    SENSITIVE_PARAMS.iter().any(|s| key.eq_ignore_ascii_case(s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_token() {
        assert_eq!(redact_token("xoxb-123456789"), "xoxb-...[REDACTED]");
        assert_eq!(redact_token("short"), "[REDACTED]");
    }

    #[test]
    fn test_redact_params() {
        let params = Params::new()
            .with("channel", "C123")
            .with("token", "xoxb-secret")
            .with("client_secret", "shh");

        let line = redact_params(&params);
        assert_eq!(
            line,
            "channel=C123&client_secret=[REDACTED]&token=[REDACTED]"
        );
    }
}
