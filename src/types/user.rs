//! User presence.

use crate::errors::{RequestError, SlackError};
use std::fmt;
use std::str::FromStr;

/// Presence accepted by `users.setPresence` and `presence.set`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    /// `active`
    Active,
    /// `away`
    Away,
}

impl Presence {
    /// All recognized presence values
    pub const ALL: [Presence; 2] = [Presence::Away, Presence::Active];

    /// Wire value
    pub fn as_str(&self) -> &'static str {
        match self {
            Presence::Active => "active",
            Presence::Away => "away",
        }
    }
}

impl AsRef<str> for Presence {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Presence {
    type Err = SlackError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Presence::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| {
                RequestError::InvalidPresence {
                    value: s.to_string(),
                }
                .into()
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_presence() {
        assert_eq!("active".parse::<Presence>().unwrap(), Presence::Active);
        assert_eq!("away".parse::<Presence>().unwrap(), Presence::Away);
    }

    #[test]
    fn test_reject_unknown_presence() {
        for value in ["busy", "Away", ""] {
            let err = value.parse::<Presence>().unwrap_err();
            assert!(matches!(
                err,
                SlackError::Request(RequestError::InvalidPresence { .. })
            ));
        }
    }
}
