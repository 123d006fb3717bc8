use anyhow::{Context, Result};
use chrono::Duration;
use serde::Deserialize;
use std::path::Path;

// ============================================================================
// Top-level config
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SolaceConfig {
    pub llm: LlmConfig,
    pub session: SessionConfig,
    pub responses: ResponseConfig,
    pub server: ServerConfig,
}

impl SolaceConfig {
    /// Load config from a TOML file, falling back to defaults for missing fields.
    /// After loading, env var overrides are applied.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;
        let mut config: SolaceConfig =
            toml::from_str(&content).with_context(|| "Failed to parse TOML config")?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Try to load from path; if file doesn't exist, return defaults with env overrides.
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        match Self::load(path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::info!("Config file not found or invalid ({}), using defaults", e);
                let mut cfg = Self::default();
                cfg.apply_env_overrides();
                cfg
            }
        }
    }

    /// Apply environment variable overrides on top of file-based config.
    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("LLM_PROVIDER") {
            if let Some(p) = LlmProvider::parse(&v) {
                self.llm.provider = p;
            } else {
                tracing::warn!("Unknown LLM_PROVIDER '{}', keeping {:?}", v, self.llm.provider);
            }
        }
        if let Ok(v) = std::env::var("LLM_MODEL") {
            self.llm.model = v;
        }
        if let Ok(v) = std::env::var("LLM_BASE_URL") {
            self.llm.base_url = Some(v);
        }
        if let Ok(v) = std::env::var("LLM_MAX_TOKENS") {
            if let Ok(n) = v.parse() {
                self.llm.max_tokens = n;
            }
        }
        if let Ok(v) = std::env::var("LLM_TEMPERATURE") {
            if let Ok(n) = v.parse() {
                self.llm.temperature = n;
            }
        }
        if let Ok(v) = std::env::var("LLM_TIMEOUT_SECS") {
            if let Ok(n) = v.parse() {
                self.llm.timeout_secs = n;
            }
        }
        if let Ok(v) = std::env::var("PORT") {
            if let Ok(n) = v.parse() {
                self.server.port = n;
            }
        }
    }
}

// ============================================================================
// Sub-configs
// ============================================================================

/// Which generic-fallback collaborator to talk to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LlmProvider {
    /// No external call; the canned generator answers.
    #[default]
    None,
    #[serde(alias = "openai")]
    OpenAi,
    #[serde(alias = "huggingface")]
    HuggingFace,
    Mock,
}

impl LlmProvider {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "" => Some(Self::None),
            "openai" | "open_ai" => Some(Self::OpenAi),
            "huggingface" | "hugging_face" | "hf" => Some(Self::HuggingFace),
            "mock" => Some(Self::Mock),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    pub provider: LlmProvider,
    pub model: String,
    pub base_url: Option<String>,
    pub max_tokens: u32,
    pub temperature: f32,
    /// Upper bound on a single fallback call; the call counts as failed after it.
    pub timeout_secs: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            provider: LlmProvider::None,
            model: "gpt-3.5-turbo".to_string(),
            base_url: None,
            max_tokens: 150,
            temperature: 0.7,
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Raw messages kept for trend windowing.
    pub history_cap: usize,
    pub mood_event_cap: usize,
    /// Role-tagged turns kept for the fallback prompt, system instruction included.
    pub conversation_cap: usize,
    /// Minimum gap between two interventions of the same category.
    pub cooldown_secs: i64,
    pub idle_ttl_secs: i64,
    pub cleanup_interval_secs: u64,
    pub trend_min_messages: usize,
    pub trend_window: usize,
}

impl SessionConfig {
    pub fn cooldown(&self) -> Duration {
        Duration::seconds(self.cooldown_secs)
    }

    pub fn idle_ttl(&self) -> Duration {
        Duration::seconds(self.idle_ttl_secs)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            history_cap: 20,
            mood_event_cap: 20,
            conversation_cap: 10,
            cooldown_secs: 3600,
            idle_ttl_secs: 86_400,
            cleanup_interval_secs: 600,
            trend_min_messages: 5,
            trend_window: 3,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResponseConfig {
    pub referral_count: usize,
    pub song_count: usize,
    pub fallback_song_count: usize,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            referral_count: 3,
            song_count: 3,
            fallback_song_count: 2,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
