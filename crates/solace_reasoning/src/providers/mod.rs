//! Generic-fallback providers.

pub mod huggingface;
pub mod mock;
pub mod openai;

pub use huggingface::HuggingFaceClient;
pub use mock::MockProvider;
pub use openai::OpenAiClient;

use crate::llm::{FallbackClient, FallbackError};
use anyhow::Result;
use reqwest::StatusCode;
use serde_json::Value;
use solace_core::config::{LlmConfig, LlmProvider};
use std::sync::Arc;
use std::time::Duration;

/// Provider for `cfg`, or `None` when the canned generator should answer
/// on its own.
pub fn build_client(cfg: &LlmConfig) -> Result<Option<Arc<dyn FallbackClient>>> {
    let client: Arc<dyn FallbackClient> = match cfg.provider {
        LlmProvider::None => return Ok(None),
        LlmProvider::OpenAi => Arc::new(OpenAiClient::from_config(cfg)?),
        LlmProvider::HuggingFace => Arc::new(HuggingFaceClient::from_config(cfg)?),
        LlmProvider::Mock => Arc::new(MockProvider::new(&cfg.model)),
    };
    tracing::info!(provider = client.name(), model = %cfg.model, "Fallback provider ready");
    Ok(Some(client))
}

const MAX_ERROR_BODY: usize = 512;

/// Send `request` and parse a JSON body, bounded by `timeout`. Quota
/// exhaustion, non-success statuses, and unparseable bodies each map to
/// their own error.
pub(crate) async fn post_json(
    request: reqwest::RequestBuilder,
    timeout: Duration,
) -> Result<Value, FallbackError> {
    let call = async {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            if status == StatusCode::TOO_MANY_REQUESTS || body.contains("insufficient_quota") {
                return Err(FallbackError::Quota);
            }
            let mut body = body;
            if body.len() > MAX_ERROR_BODY {
                let cut = (0..=MAX_ERROR_BODY)
                    .rev()
                    .find(|i| body.is_char_boundary(*i))
                    .unwrap_or(0);
                body.truncate(cut);
            }
            return Err(FallbackError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str::<Value>(&body).map_err(|e| FallbackError::Malformed(e.to_string()))
    };

    tokio::time::timeout(timeout, call)
        .await
        .map_err(|_| FallbackError::Timeout(timeout))?
}

pub(crate) fn http_client(timeout: Duration) -> Result<reqwest::Client> {
    // Callers observe the tokio timeout in `post_json`, not this one.
    Ok(reqwest::Client::builder()
        .timeout(timeout + Duration::from_secs(1))
        .build()?)
}
