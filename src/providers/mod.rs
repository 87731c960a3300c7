/*!
 * Completion client implementations for AI enrichment.
 *
 * This module contains the client boundary the enrichment core talks to:
 * - Anthropic: messages API over HTTP
 * - ClaudeCli: shells out to the claude CLI
 */

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

use crate::errors::ProviderError;

/// One chat-style message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Role of the message sender (system, user, assistant)
    pub role: String,

    /// Content of the message
    pub content: String,
}

/// A completion request: an ordered message list with an optional leading
/// system message and a trailing user message, plus a model id and an
/// output-token cap
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    /// The model to use
    pub model: String,

    /// The messages for the conversation
    pub messages: Vec<ChatMessage>,

    /// Maximum number of tokens to generate
    pub max_tokens: u32,
}

impl CompletionRequest {
    /// Create a new completion request
    pub fn new(model: impl Into<String>, max_tokens: u32) -> Self {
        Self {
            model: model.into(),
            messages: Vec::new(),
            max_tokens,
        }
    }

    /// Add a message to the request
    pub fn add_message(mut self, role: impl Into<String>, content: impl Into<String>) -> Self {
        self.messages.push(ChatMessage {
            role: role.into(),
            content: content.into(),
        });
        self
    }

    /// Add a system message (skipped when the content is empty)
    pub fn system(self, content: impl Into<String>) -> Self {
        let content = content.into();
        if content.is_empty() {
            return self;
        }
        self.add_message("system", content)
    }

    /// Add a user message
    pub fn user(self, content: impl Into<String>) -> Self {
        self.add_message("user", content)
    }

    /// The content of the leading system message, if present
    pub fn system_prompt(&self) -> Option<&str> {
        self.messages
            .first()
            .filter(|m| m.role == "system")
            .map(|m| m.content.as_str())
    }

    /// Messages other than the leading system message
    pub fn chat_messages(&self) -> &[ChatMessage] {
        if self.system_prompt().is_some() {
            &self.messages[1..]
        } else {
            &self.messages
        }
    }
}

/// Common trait for all completion clients
///
/// This trait defines the interface the enrichment orchestrator uses,
/// allowing the HTTP API and CLI modes to be used interchangeably.
#[async_trait]
pub trait CompletionClient: Send + Sync + Debug {
    /// Complete a request and return the raw response text
    ///
    /// # Arguments
    /// * `request` - The request to complete
    ///
    /// # Returns
    /// * `Result<String, ProviderError>` - The free-form response text or an error
    async fn complete(&self, request: CompletionRequest) -> Result<String, ProviderError>;
}

pub mod anthropic;
pub mod claude_cli;
