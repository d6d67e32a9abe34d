use std::fmt;

use serde::{Deserialize, Serialize};

use crate::article::NewsArticle;

/// Who wrote a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChatRole::User => write!(f, "user"),
            ChatRole::Assistant => write!(f, "assistant"),
        }
    }
}

/// One message of a conversation about an article
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub content: String,
    /// milliseconds since the Unix epoch
    pub timestamp: u64,
}

impl ChatMessage {
    /// The part of the message that is sent back as history
    pub fn turn(&self) -> ChatTurn {
        ChatTurn {
            role: self.role,
            content: self.content.clone(),
        }
    }
}

/// Earlier message as carried in a [`ChatRequest`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTurn {
    pub role: ChatRole,
    pub content: String,
}

/// Question about an article, with the conversation so far
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    pub article_context: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_history: Option<Vec<ChatTurn>>,
}

impl ChatRequest {
    /// Ask `message` about `article`, replaying `history` in order
    pub fn about(article: &NewsArticle, message: impl Into<String>, history: &[ChatMessage]) -> Self {
        Self {
            article_context: chat_context(article),
            message: message.into(),
            conversation_history: Some(history.iter().map(ChatMessage::turn).collect()),
        }
    }

    /// Turns of the earlier conversation, empty when none was sent
    pub fn history(&self) -> &[ChatTurn] {
        self.conversation_history.as_deref().unwrap_or_default()
    }
}

/// Answer of the chat collaborator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,
}

/// Article text given to the chat collaborator: the title, then the
/// content, falling back to the description, then to nothing.
pub fn chat_context(article: &NewsArticle) -> String {
    let body = article
        .content
        .as_deref()
        .filter(|c| !c.is_empty())
        .or_else(|| article.description.as_deref().filter(|d| !d.is_empty()))
        .unwrap_or("");
    format!("Title: {}\n\nContent: {}", article.title, body)
}
