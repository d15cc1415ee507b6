use serde::{Deserialize, Serialize};

/// Author of a consultation message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// Message in a consultation session. Content may be Markdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    pub created_at: i64,
}

impl ChatMessage {
    pub const INTRO_ID: &'static str = "intro";

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }

    /// Greeting that opens every session
    pub fn intro(content: impl Into<String>) -> Self {
        Self {
            id: Self::INTRO_ID.to_string(),
            role: ChatRole::Assistant,
            content: content.into(),
            created_at: chrono::Utc::now().timestamp(),
        }
    }

    fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            role,
            content: content.into(),
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}
