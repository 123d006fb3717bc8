use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use solace_core::config::LlmConfig;
use solace_core::{ConversationTurn, Role};
use std::time::Duration;
use thiserror::Error;

/// Sampling parameters for one fallback call.
#[derive(Debug, Clone)]
pub struct CompletionParams {
    pub max_tokens: u32,
    /// Sampling temperature (0.0 - 2.0)
    pub temperature: f32,
}

impl Default for CompletionParams {
    fn default() -> Self {
        Self {
            max_tokens: 150,
            temperature: 0.7,
        }
    }
}

impl From<&LlmConfig> for CompletionParams {
    fn from(cfg: &LlmConfig) -> Self {
        Self {
            max_tokens: cfg.max_tokens,
            temperature: cfg.temperature,
        }
    }
}

/// Role-tagged message in the wire shape chat APIs expect.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl From<&ConversationTurn> for ChatMessage {
    fn from(turn: &ConversationTurn) -> Self {
        Self {
            role: turn.role.as_str().to_string(),
            content: turn.content.clone(),
        }
    }
}

impl ChatMessage {
    pub fn is_user(&self) -> bool {
        self.role == Role::User.as_str()
    }

    pub fn is_system(&self) -> bool {
        self.role == Role::System.as_str()
    }
}

/// Why the generic fallback produced no text. Every variant degrades to the
/// canned reply; none of them reach the user.
#[derive(Debug, Error)]
pub enum FallbackError {
    #[error("fallback call timed out after {0:?}")]
    Timeout(Duration),

    #[error("fallback returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("fallback quota exhausted")]
    Quota,

    #[error("malformed fallback payload: {0}")]
    Malformed(String),

    #[error("fallback transport error: {0}")]
    Transport(String),

    #[error("no fallback provider configured")]
    Disabled,
}

impl From<reqwest::Error> for FallbackError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            FallbackError::Malformed(e.to_string())
        } else {
            FallbackError::Transport(e.to_string())
        }
    }
}

/// External text-completion collaborator used when no rule answers.
#[async_trait]
pub trait FallbackClient: Send + Sync {
    /// `messages` starts with the system instruction, then the capped
    /// conversation, oldest first.
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &CompletionParams,
    ) -> Result<String, FallbackError>;

    fn name(&self) -> &str;
}
