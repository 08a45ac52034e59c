use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;
use thiserror::Error;

static TICKET_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]+-[0-9]+$").expect("valid ticket-key regex"));

#[derive(Debug, Error, PartialEq, Eq)]
#[error("not a ticket key: {0}")]
pub struct TicketKeyError(pub String);

/// A ticket identifier such as `ABC-123`: uppercase project letters, a hyphen, digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TicketKey(String);

impl TicketKey {
    pub fn parse(raw: &str) -> Result<Self, TicketKeyError> {
        if Self::is_ticket_key(raw) {
            Ok(Self(raw.to_string()))
        } else {
            Err(TicketKeyError(raw.to_string()))
        }
    }

    pub fn is_ticket_key(raw: &str) -> bool {
        TICKET_KEY.is_match(raw)
    }

    /// First tag that is a ticket key, in tag order.
    pub fn first_in<'a, I>(tags: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a String>,
    {
        tags.into_iter().find_map(|tag| Self::parse(tag).ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TicketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TicketKey {
    type Error = TicketKeyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<TicketKey> for String {
    fn from(value: TicketKey) -> Self {
        value.0
    }
}

#[cfg(test)]
mod worklog_sync_ticket_key_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ABC-123", true)]
    #[case("A-1", true)]
    #[case("abc-123", false)]
    #[case("ABC123", false)]
    #[case("ABC-", false)]
    #[case("-123", false)]
    #[case("AB1-123", false)]
    #[case(" ABC-123", false)]
    #[case("ABC-123-4", false)]
    #[case("meeting", false)]
    fn it_should_recognise_ticket_keys(#[case] raw: &str, #[case] expected: bool) {
        assert_eq!(TicketKey::is_ticket_key(raw), expected);
    }

    #[rstest]
    fn it_should_pick_the_first_matching_tag() {
        let tags = vec![
            "standup".to_string(),
            "OPS-7".to_string(),
            "ABC-123".to_string(),
        ];
        assert_eq!(
            TicketKey::first_in(&tags).map(|k| k.to_string()),
            Some("OPS-7".to_string())
        );
    }

    #[rstest]
    fn it_should_find_nothing_without_a_ticket_tag() {
        let tags = vec!["lunch".to_string(), "review".to_string()];
        assert_eq!(TicketKey::first_in(&tags), None);
    }

    #[rstest]
    fn it_should_reject_invalid_keys_when_deserializing() {
        let parsed: Result<TicketKey, _> = serde_json::from_str("\"nope\"");
        assert!(parsed.is_err());
        let parsed: TicketKey = serde_json::from_str("\"ABC-9\"").unwrap();
        assert_eq!(parsed.as_str(), "ABC-9");
    }
}
