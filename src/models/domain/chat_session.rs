use chrono::{DateTime, Utc};
use mongodb::bson;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Model,
}

/// One turn of a conversation, shaped like the model provider's history entries.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub parts: Vec<String>,
}

impl ChatMessage {
    pub fn user(text: &str) -> Self {
        ChatMessage {
            role: ChatRole::User,
            parts: vec![text.to_string()],
        }
    }

    pub fn model(text: &str) -> Self {
        ChatMessage {
            role: ChatRole::Model,
            parts: vec![text.to_string()],
        }
    }

    pub fn text(&self) -> String {
        self.parts.join("\n")
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct ChatSession {
    pub user_id: String,
    /// The conversation as the model saw it; the first user turn is the generated prompt.
    pub model_history: Vec<ChatMessage>,
    /// The conversation as the student typed it.
    pub raw_history: Vec<ChatMessage>,
    pub created_at: DateTime<Utc>,
    /// Stored as a BSON date so MongoDB's TTL monitor can expire the document.
    pub expires_at: bson::DateTime,
}

impl ChatSession {
    pub fn new(user_id: &str, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        ChatSession {
            user_id: user_id.to_string(),
            model_history: Vec::new(),
            raw_history: Vec::new(),
            created_at: now,
            expires_at: expiry_from(now, ttl_seconds),
        }
    }

    pub fn record_exchange(&mut self, sent_to_model: &str, typed_by_user: &str, reply: &str) {
        self.model_history.push(ChatMessage::user(sent_to_model));
        self.model_history.push(ChatMessage::model(reply));
        self.raw_history.push(ChatMessage::user(typed_by_user));
        self.raw_history.push(ChatMessage::model(reply));
    }

    pub fn refresh_expiry(&mut self, ttl_seconds: i64) {
        self.expires_at = expiry_from(Utc::now(), ttl_seconds);
    }

    pub fn is_expired(&self) -> bool {
        self.expires_at.timestamp_millis() <= Utc::now().timestamp_millis()
    }
}

fn expiry_from(now: DateTime<Utc>, ttl_seconds: i64) -> bson::DateTime {
    let expires = now + chrono::Duration::seconds(ttl_seconds);
    bson::DateTime::from_millis(expires.timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_exchange_keeps_both_histories() {
        let mut session = ChatSession::new("student-1", 60);
        session.record_exchange("<long prompt>", "I'm in MBA", "Take MBA210");

        assert_eq!(session.model_history.len(), 2);
        assert_eq!(session.model_history[0].text(), "<long prompt>");
        assert_eq!(session.raw_history[0].text(), "I'm in MBA");
        assert_eq!(session.raw_history[1].role, ChatRole::Model);
    }

    #[test]
    fn test_expiry() {
        let session = ChatSession::new("student-1", 60);
        assert!(!session.is_expired());

        let stale = ChatSession::new("student-2", -1);
        assert!(stale.is_expired());
    }

    #[test]
    fn test_role_serializes_lowercase() {
        let json = serde_json::to_string(&ChatMessage::model("hi")).unwrap();
        assert_eq!(json, r#"{"role":"model","parts":["hi"]}"#);
    }
}
