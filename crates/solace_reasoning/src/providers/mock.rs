//! Mock fallback provider: deterministic replies for testing without API keys.

use crate::llm::{ChatMessage, CompletionParams, FallbackClient, FallbackError};

#[derive(Debug, Clone)]
pub struct MockProvider {
    model: String,
}

impl MockProvider {
    pub fn new(model: &str) -> Self {
        Self {
            model: model.to_string(),
        }
    }
}

#[async_trait::async_trait]
impl FallbackClient for MockProvider {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _params: &CompletionParams,
    ) -> Result<String, FallbackError> {
        let turns = messages.iter().filter(|m| !m.is_system()).count();
        Ok(format!(
            "(Mock {} Response) I received your message after {} turn(s).",
            self.model, turns
        ))
    }

    fn name(&self) -> &str {
        "mock"
    }
}
