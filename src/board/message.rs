//! Message records exchanged with the remote collection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum number of characters accepted in a message title
pub const TITLE_MAX_CHARS: usize = 50;

/// Maximum number of characters accepted in a message body
pub const BODY_MAX_CHARS: usize = 280;

/// Server-assigned message identifier.
///
/// The backend may hand out either numeric or string ids. The JSON
/// representation is preserved so that ids round-trip unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageId {
    Number(i64),
    Text(String),
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MessageId::Number(n) => write!(f, "{}", n),
            MessageId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for MessageId {
    fn from(value: i64) -> Self {
        MessageId::Number(value)
    }
}

impl From<&str> for MessageId {
    fn from(value: &str) -> Self {
        MessageId::Text(value.to_string())
    }
}

impl From<String> for MessageId {
    fn from(value: String) -> Self {
        MessageId::Text(value)
    }
}

/// A single post on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: MessageId,
    pub title: String,
    pub body: String,
}

impl Message {
    pub fn new(id: impl Into<MessageId>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Title/body pair that is not yet part of the collection
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Draft {
    pub title: String,
    pub body: String,
}

impl Draft {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }

    /// Both fields are blank
    pub fn is_empty(&self) -> bool {
        self.title.is_empty() && self.body.is_empty()
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.body.clear();
    }
}

impl From<&Message> for Draft {
    fn from(message: &Message) -> Self {
        Self {
            title: message.title.clone(),
            body: message.body.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_and_string_ids_round_trip() {
        let numeric: Message =
            serde_json::from_str(r#"{"id":1,"title":"Primer mensaje","body":"hola"}"#).unwrap();
        assert_eq!(numeric.id, MessageId::Number(1));

        let text: Message =
            serde_json::from_str(r#"{"id":"a1b2","title":"t","body":"b"}"#).unwrap();
        assert_eq!(text.id, MessageId::Text("a1b2".to_string()));

        let encoded = serde_json::to_value(&numeric).unwrap();
        assert_eq!(encoded["id"], serde_json::json!(1));
        let encoded = serde_json::to_value(&text).unwrap();
        assert_eq!(encoded["id"], serde_json::json!("a1b2"));
    }

    #[test]
    fn test_draft_serializes_without_id() {
        let draft = Draft::new("X", "Y");
        let value = serde_json::to_value(&draft).unwrap();
        assert_eq!(value, serde_json::json!({ "title": "X", "body": "Y" }));
    }

    #[test]
    fn test_draft_from_message() {
        let message = Message::new(7, "title", "body");
        let draft = Draft::from(&message);
        assert_eq!(draft, Draft::new("title", "body"));
        assert!(!draft.is_empty());
    }

    #[test]
    fn test_id_display() {
        assert_eq!(MessageId::from(42).to_string(), "42");
        assert_eq!(MessageId::from("abc").to_string(), "abc");
    }
}
