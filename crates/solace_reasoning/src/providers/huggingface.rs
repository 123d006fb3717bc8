use super::{http_client, post_json};
use crate::llm::{ChatMessage, CompletionParams, FallbackClient, FallbackError};
use crate::prompts::{llama2_prompt, strip_llama2_prompt};
use anyhow::{Context, Result};
use reqwest::Client;
use serde_json::{json, Value};
use solace_core::config::LlmConfig;
use std::env;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";

/// Hugging Face text-generation inference for Llama-2 chat models.
///
/// Only the system instruction and the newest user message are sent; the
/// template has no slot for earlier turns.
#[derive(Debug, Clone)]
pub struct HuggingFaceClient {
    client: Client,
    api_key: String,
    base_url: String,
    model: String,
    timeout: Duration,
}

impl HuggingFaceClient {
    pub fn new(base_url: &str, api_key: &str, model: &str, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: http_client(timeout)?,
            api_key: api_key.to_string(),
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            timeout,
        })
    }

    /// Reads the key from `HUGGINGFACE_API_KEY`.
    pub fn from_config(cfg: &LlmConfig) -> Result<Self> {
        let api_key =
            env::var("HUGGINGFACE_API_KEY").context("HUGGINGFACE_API_KEY is not set")?;
        let base_url = cfg.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL);
        Self::new(
            base_url,
            &api_key,
            &cfg.model,
            Duration::from_secs(cfg.timeout_secs),
        )
    }
}

fn generated_text(resp: &Value) -> Option<&str> {
    // Inference API answers with a list; TGI endpoints with a bare object.
    resp.get(0)
        .and_then(|first| first["generated_text"].as_str())
        .or_else(|| resp["generated_text"].as_str())
}

#[async_trait::async_trait]
impl FallbackClient for HuggingFaceClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        params: &CompletionParams,
    ) -> Result<String, FallbackError> {
        let payload = json!({
            "inputs": llama2_prompt(messages),
            "parameters": {
                "max_new_tokens": params.max_tokens,
                "temperature": params.temperature,
                "top_p": 0.95,
                "do_sample": true,
            },
        });
        let url = format!("{}/{}", self.base_url, self.model);
        let request = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&payload);

        let resp = post_json(request, self.timeout).await?;
        let raw = generated_text(&resp)
            .ok_or_else(|| FallbackError::Malformed("missing generated_text".into()))?;
        let text = strip_llama2_prompt(raw);
        if text.is_empty() {
            return Err(FallbackError::Malformed("empty generated_text".into()));
        }
        Ok(text.to_string())
    }

    fn name(&self) -> &str {
        "huggingface"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_text_shapes() {
        let list = json!([{ "generated_text": "a" }]);
        let object = json!({ "generated_text": "b" });
        assert_eq!(generated_text(&list), Some("a"));
        assert_eq!(generated_text(&object), Some("b"));
        assert_eq!(generated_text(&json!({ "error": "x" })), None);
    }
}
