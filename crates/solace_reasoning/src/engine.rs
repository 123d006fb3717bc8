use crate::decision::{Branch, DecisionRouter, Turn};
use crate::llm::{CompletionParams, FallbackClient, FallbackError};
use crate::prompts::{chat_messages, EMPTY_INPUT_REPLY, SYSTEM_INSTRUCTION};
use crate::providers::build_client;
use serde::Serialize;
use solace_content::StaticContent;
use solace_core::config::ResponseConfig;
use solace_core::{
    normalize_message, Clock, ConcernKind, ContentSource, RngSampler, Sampler, SolaceConfig,
    SystemClock,
};
use solace_expression::Composer;
use solace_limbic::{PatternTable, Signals};
use solace_memory::{Session, SessionLimits, SessionStore, TrendAnalyzer};
use std::sync::Arc;
use uuid::Uuid;

/// Outcome of one turn.
#[derive(Debug, Clone, Serialize)]
pub struct Classification {
    /// Key the turn was recorded under; generated when the caller had none.
    pub session_id: String,
    pub reply: String,
    pub branch: Branch,
    /// Whether crisis resources are part of `reply`.
    pub crisis: bool,
    /// State after the turn. `None` when the input was empty and nothing
    /// was recorded.
    pub session: Option<Session>,
}

/// Root of the pipeline: detectors, session bookkeeping, rule list, composer
/// and the generic fallback.
pub struct ArbitrationEngine {
    table: &'static PatternTable,
    store: Arc<SessionStore>,
    analyzer: TrendAnalyzer,
    router: DecisionRouter,
    content: Arc<dyn ContentSource>,
    sampler: Arc<dyn Sampler>,
    responses: ResponseConfig,
    composer: Composer,
    fallback: Option<Arc<dyn FallbackClient>>,
    params: CompletionParams,
    clock: Arc<dyn Clock>,
}

impl ArbitrationEngine {
    /// Built-in content, entropy-seeded sampler, wall clock. A fallback
    /// provider that cannot be constructed is logged and left out; the
    /// canned generator answers instead.
    pub fn from_config(cfg: &SolaceConfig) -> Self {
        let fallback = build_client(&cfg.llm).unwrap_or_else(|e| {
            tracing::warn!("Fallback provider unavailable ({:#}), using canned replies", e);
            None
        });
        let content: Arc<dyn ContentSource> = Arc::new(StaticContent::new());
        let sampler: Arc<dyn Sampler> = Arc::new(RngSampler::from_entropy());
        let responses = cfg.responses.clone();
        Self {
            table: PatternTable::standard(),
            store: Arc::new(SessionStore::new(SessionLimits::from(&cfg.session))),
            analyzer: TrendAnalyzer::from_config(&cfg.session),
            router: DecisionRouter::with_defaults(),
            composer: Composer::new(content.clone(), sampler.clone(), responses.clone()),
            content,
            sampler,
            responses,
            fallback,
            params: CompletionParams::from(&cfg.llm),
            clock: Arc::new(SystemClock),
        }
    }

    fn rebuild_composer(&mut self) {
        self.composer = Composer::new(
            self.content.clone(),
            self.sampler.clone(),
            self.responses.clone(),
        );
    }

    pub fn with_sampler(mut self, sampler: Arc<dyn Sampler>) -> Self {
        self.sampler = sampler;
        self.rebuild_composer();
        self
    }

    pub fn with_content(mut self, content: Arc<dyn ContentSource>) -> Self {
        self.content = content;
        self.rebuild_composer();
        self
    }

    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    pub fn with_fallback(mut self, fallback: Option<Arc<dyn FallbackClient>>) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn with_store(mut self, store: Arc<SessionStore>) -> Self {
        self.store = store;
        self
    }

    pub fn store(&self) -> Arc<SessionStore> {
        self.store.clone()
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        self.clock.clone()
    }

    /// Classify one message and produce exactly one reply.
    ///
    /// A missing or blank `session_id` starts a fresh session under a new
    /// UUID. Empty input returns a fixed prompt without touching any state.
    pub async fn classify(&self, session_id: Option<&str>, message: &str) -> Classification {
        let session_id = session_id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .map(str::to_string)
            .unwrap_or_else(|| Uuid::new_v4().to_string());

        let normalized = normalize_message(message);
        if normalized.is_empty() {
            return Classification {
                session_id,
                reply: EMPTY_INPUT_REPLY.to_string(),
                branch: Branch::EmptyInput,
                crisis: false,
                session: None,
            };
        }

        let now = self.clock.now();
        let signals = Signals::detect_with(self.table, &normalized);

        let handle = self.store.handle(&session_id, now).await;
        let mut session = handle.lock().await;
        session.record_user_message(&normalized, message.trim(), now);
        session.record_concerns(&signals.concerns, now);
        if let Some(hit) = &signals.negative {
            session.record_moods(&hit.moods, now);
        }
        let trend = self.analyzer.analyze(&session);

        let (decision, mut crisis) = {
            let mut turn = Turn {
                signals: &signals,
                session: &mut *session,
                trend: &trend,
                composer: &self.composer,
                now,
                crisis: false,
            };
            let decision = self.router.route(&mut turn);
            (decision, turn.crisis)
        };

        let mut reply = match decision.reply {
            Some(text) => text,
            None => {
                let base = self.fallback_text(&session, &normalized).await;
                match decision.augment {
                    Some(block) => format!("{base}\n\n{block}"),
                    None => base,
                }
            }
        };

        if decision.branch.outranks_concern() && signals.concern(ConcernKind::SelfHarm).is_some() {
            reply.push_str("\n\n");
            reply.push_str(&self.composer.crisis_block(true));
            crisis = true;
        }

        session.record_reply(&reply, now);
        tracing::info!(
            session = %session_id,
            branch = decision.branch.as_str(),
            crisis,
            "Turn classified"
        );

        Classification {
            session_id,
            reply,
            branch: decision.branch,
            crisis,
            session: Some(session.clone()),
        }
    }

    /// External completion over the capped conversation, or the canned
    /// generator when the call is disabled or fails.
    async fn fallback_text(&self, session: &Session, normalized: &str) -> String {
        let result = match &self.fallback {
            Some(client) => {
                let messages = chat_messages(&session.prompt_turns(SYSTEM_INSTRUCTION));
                client.complete(&messages, &self.params).await
            }
            None => Err(FallbackError::Disabled),
        };
        match result {
            Ok(text) => text,
            Err(FallbackError::Disabled) => self.composer.canned_reply(normalized),
            Err(e) => {
                tracing::warn!(error = %e, "Fallback failed, using canned reply");
                self.composer.canned_reply(normalized)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solace_core::ManualClock;

    fn engine() -> ArbitrationEngine {
        ArbitrationEngine::from_config(&SolaceConfig::default())
            .with_sampler(Arc::new(RngSampler::seeded(1)))
            .with_clock(Arc::new(ManualClock::default()))
    }

    #[tokio::test]
    async fn test_empty_input_touches_nothing() {
        let engine = engine();
        let out = engine.classify(Some("abc"), "   ").await;
        assert_eq!(out.reply, EMPTY_INPUT_REPLY);
        assert_eq!(out.branch, Branch::EmptyInput);
        assert!(out.session.is_none());
        assert!(engine.store().is_empty().await);
    }

    #[tokio::test]
    async fn test_anonymous_session_gets_uuid() {
        let out = engine().classify(None, "hello").await;
        assert!(Uuid::parse_str(&out.session_id).is_ok());
        assert_eq!(out.branch, Branch::Fallback);
    }

    #[tokio::test]
    async fn test_reply_is_logged() {
        let out = engine().classify(Some("s"), "I feel amazing today").await;
        let session = out.session.unwrap();
        assert_eq!(session.conversation.len(), 2);
        assert_eq!(session.conversation[1].content, out.reply);
        assert_eq!(session.conversation[0].content, "I feel amazing today");
    }
}
