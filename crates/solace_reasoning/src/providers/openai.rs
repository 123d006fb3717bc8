use super::{http_client, post_json};
use crate::llm::{ChatMessage, CompletionParams, FallbackClient, FallbackError};
use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::json;
use solace_core::config::LlmConfig;
use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// OpenAI-compatible `/chat/completions` client.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl OpenAiClient {
    pub fn new(base_url: &str, api_key: &str, model: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: http_client(timeout)?,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            timeout,
        })
    }

    /// Reads the key from `OPENAI_API_KEY`.
    pub fn from_config(cfg: &LlmConfig) -> Result<Self> {
        let api_key = env::var("OPENAI_API_KEY").context("OPENAI_API_KEY is not set")?;
        let base_url = cfg.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        Self::new(
            base_url,
            &api_key,
            &cfg.model,
            Duration::from_secs(cfg.timeout_secs),
        )
    }
}

#[async_trait::async_trait]
impl FallbackClient for OpenAiClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &CompletionParams,
    ) -> Result<String, FallbackError> {
        let payload = json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": params.max_tokens,
            "temperature": params.temperature,
        });
        let url = format!("{}/chat/completions", self.base_url);
        let request = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload);

        let resp = post_json(request, self.timeout).await?;
        let text = resp["choices"][0]["message"]["content"]
            .as_str()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| FallbackError::Malformed("missing choices[0].message.content".into()))?;
        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "openai"
    }
}
