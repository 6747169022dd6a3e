//! Chat conversation types

use serde::{Deserialize, Serialize};
use std::fmt;

/// Author of a conversation turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Instructions that steer the assistant
    System,
    /// End-user input
    User,
    /// Earlier model output
    Assistant,
}

impl ChatRole {
    /// Get the role name as sent on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            ChatRole::System => "system",
            ChatRole::User => "user",
            ChatRole::Assistant => "assistant",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One conversation turn
///
/// The caller supplies the whole history on every call; nothing is kept
/// server-side between calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who wrote the turn
    pub role: ChatRole,
    /// Turn text
    pub content: String,
}

impl ChatMessage {
    /// Create a message with an explicit role
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a system message
    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ChatRole::System, content)
    }

    /// Create a user message
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Create an assistant message
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

/// The single reply returned by the chat adapter
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChatReply {
    /// Content of the first choice
    pub content: String,
}

/// Request handed to a [`crate::traits::ChatCompletionService`]
#[derive(Debug, Clone, PartialEq)]
pub struct ChatCompletionRequest {
    /// Deployment (model) identifier
    pub model: String,
    /// Full conversation history
    pub messages: Vec<ChatMessage>,
    /// Sampling temperature
    pub temperature: f64,
    /// Maximum output tokens
    pub max_tokens: u32,
}

/// One generated alternative
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatChoice {
    /// Message content; the service may send `null`
    pub content: Option<String>,
}

/// Decoded chat completion response
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChatCompletion {
    /// Choices in the order the service returned them
    pub choices: Vec<ChatChoice>,
}
