//! Integration tests for the ArbitrationEngine.
//!
//! Every engine here runs on a seeded sampler and a manual clock so whole
//! conversations replay exactly. HTTP providers are exercised against
//! wiremock servers.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use solace_core::{ManualClock, RngSampler, SolaceConfig};
use solace_reasoning::llm::{ChatMessage, CompletionParams, FallbackClient, FallbackError};
use solace_reasoning::providers::{HuggingFaceClient, OpenAiClient};
use solace_reasoning::{ArbitrationEngine, Branch};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CONCERN_HEADER: &str = "I notice you might be experiencing some challenges.";
const DEFAULT_CANNED: &str = "Thanks for sharing.";

// ============================================================================
// Helpers
// ============================================================================

fn clock() -> ManualClock {
    ManualClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap())
}

fn engine_with(seed: u64, clock: &ManualClock) -> ArbitrationEngine {
    ArbitrationEngine::from_config(&SolaceConfig::default())
        .with_sampler(Arc::new(RngSampler::seeded(seed)))
        .with_clock(Arc::new(clock.clone()))
}

fn engine() -> ArbitrationEngine {
    engine_with(7, &clock())
}

/// Records every prompt it is handed and answers with a fixed string.
struct RecordingClient {
    reply: String,
    prompts: Mutex<Vec<Vec<ChatMessage>>>,
}

impl RecordingClient {
    fn new(reply: &str) -> Self {
        Self {
            reply: reply.to_string(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn last_prompt(&self) -> Vec<ChatMessage> {
        self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
    }
}

#[async_trait]
impl FallbackClient for RecordingClient {
    async fn complete(
        &self,
        messages: &[ChatMessage],
        _params: &CompletionParams,
    ) -> Result<String, FallbackError> {
        self.prompts.lock().unwrap().push(messages.to_vec());
        Ok(self.reply.clone())
    }

    fn name(&self) -> &str {
        "recording"
    }
}

async fn openai_engine(server: &MockServer, timeout: Duration) -> ArbitrationEngine {
    let client = OpenAiClient::new(&server.uri(), "test-key", "gpt-test", timeout).unwrap();
    engine().with_fallback(Some(Arc::new(client)))
}

fn chat_completion(text: &str) -> serde_json::Value {
    serde_json::json!({
        "choices": [{ "message": { "role": "assistant", "content": text } }]
    })
}

// ============================================================================
// Branch priority
// ============================================================================

#[tokio::test]
async fn test_music_beats_negative_mood() {
    let out = engine()
        .classify(Some("s"), "play me a happy song, i feel sad")
        .await;
    assert_eq!(out.branch, Branch::Music);
    assert!(out.reply.starts_with("Here are some songs"));
    assert!(!out.reply.contains("I notice you might be feeling down"));
}

#[tokio::test]
async fn test_unknown_music_mood_offers_alternatives() {
    let out = engine()
        .classify(Some("s"), "can you recommend songs for when I'm feeling stressed")
        .await;
    assert_eq!(out.branch, Branch::Music);
    assert!(out
        .reply
        .starts_with("I don't have specific song recommendations for a stressed mood"));
    assert!(out.reply.contains("happy, sad, calm, energetic, focused, or relaxed"));
}

#[tokio::test]
async fn test_feeling_phrase_music_request_gets_catalog_songs() {
    let out = engine()
        .classify(Some("s"), "songs for when i'm feeling happy")
        .await;
    assert_eq!(out.branch, Branch::Music);
    assert!(out
        .reply
        .starts_with("Here are some songs that might amplify your happy mood:"));
}

#[tokio::test]
async fn test_inflected_panic_brings_crisis_resources() {
    let out = engine()
        .classify(Some("s"), "i've been panicking all day")
        .await;
    assert_eq!(out.branch, Branch::Concern);
    assert!(out.crisis);
    assert!(out
        .reply
        .contains("If you're in crisis or feel unsafe, please reach out to one of these resources:"));
}

#[tokio::test]
async fn test_referral_lists_three_distinct_therapists() {
    let engine = engine();
    for i in 0..10 {
        let out = engine
            .classify(Some(&format!("r{i}")), "can you recommend a therapist")
            .await;
        assert_eq!(out.branch, Branch::Referral);
        let entries: Vec<&str> = out
            .reply
            .lines()
            .filter(|l| l.starts_with("## ") && l.chars().nth(3).is_some_and(|c| c.is_ascii_digit()))
            .collect();
        assert_eq!(entries.len(), 3);
        let unique: HashSet<_> = entries.iter().map(|l| &l[6..]).collect();
        assert_eq!(unique.len(), 3);
    }
}

#[tokio::test]
async fn test_routine_request() {
    let out = engine()
        .classify(Some("s"), "Can you suggest a morning routine?")
        .await;
    assert_eq!(out.branch, Branch::Routine);
    assert!(out.reply.contains("## Daily Steps:"));
}

#[tokio::test]
async fn test_positive_mood_has_no_cooldown() {
    let engine = engine();
    for _ in 0..3 {
        let out = engine.classify(Some("s"), "I feel amazing today").await;
        assert_eq!(out.branch, Branch::PositiveMood);
        assert!(!out.reply.trim().is_empty());
    }
}

#[tokio::test]
async fn test_reflection_reply_has_follow_up() {
    let out = engine()
        .classify(Some("s"), "i regret how i treated my brother")
        .await;
    assert_eq!(out.branch, Branch::Reflection);
    assert!(out.reply.contains("\n\n"));
}

// ============================================================================
// Cooldowns and crisis resources
// ============================================================================

#[tokio::test]
async fn test_strategy_cooldown() {
    let clock = clock();
    let engine = engine_with(3, &clock);

    let first = engine.classify(Some("s"), "life is pointless").await;
    assert_eq!(first.branch, Branch::Concern);
    assert!(first.reply.contains(CONCERN_HEADER));
    assert!(first.crisis);

    clock.advance_minutes(10);
    let second = engine.classify(Some("s"), "life is pointless").await;
    assert!(!second.reply.contains(CONCERN_HEADER));
    // high severity keeps the crisis block even while the strategy rests
    assert!(second.crisis);

    clock.advance_minutes(51);
    let third = engine.classify(Some("s"), "life is pointless").await;
    assert!(third.reply.contains(CONCERN_HEADER));
}

#[tokio::test]
async fn test_encouragement_cooldown_falls_through() {
    let clock = clock();
    let engine = engine_with(3, &clock);

    let first = engine.classify(Some("s"), "i feel so down").await;
    assert_eq!(first.branch, Branch::NegativeMood);

    clock.advance_minutes(5);
    let second = engine.classify(Some("s"), "i feel so down").await;
    assert_ne!(second.branch, Branch::NegativeMood);
    assert!(!second.reply.is_empty());

    let session = second.session.unwrap();
    assert_eq!(session.mood_events.len(), 2);
}

#[tokio::test]
async fn test_self_harm_always_gets_crisis_block() {
    let clock = clock();
    let engine = engine_with(5, &clock);

    // depression strategy delivered and now resting
    engine.classify(Some("s"), "life is pointless").await;
    clock.advance_minutes(1);

    for _ in 0..2 {
        let out = engine.classify(Some("s"), "I want to end my life").await;
        assert!(out.crisis);
        assert!(out.reply.contains("National Suicide Prevention Lifeline"));
        assert!(out
            .reply
            .contains("If you're having thoughts of harming yourself"));
        clock.advance_minutes(1);
    }
}

#[tokio::test]
async fn test_crisis_block_rides_along_with_higher_branch() {
    let out = engine()
        .classify(Some("s"), "play me a song, i want to end my life")
        .await;
    assert_eq!(out.branch, Branch::Music);
    assert!(out.crisis);
    assert!(out.reply.contains("National Suicide Prevention Lifeline"));
}

#[tokio::test]
async fn test_trend_remark_when_concern_fades() {
    let clock = clock();
    let engine = engine_with(2, &clock);
    let turns = [
        "i'm so anxious",
        "the bus was late",
        "lunch was fine",
        "the train was on time",
        "i'm so angry",
    ];
    let mut last = None;
    for text in turns {
        last = Some(engine.classify(Some("s"), text).await);
        clock.advance_minutes(2);
    }
    let last = last.unwrap();
    assert_eq!(last.branch, Branch::Concern);
    assert!(last
        .reply
        .contains("I've noticed you seem to be doing better with anxiety. That's great progress!"));
}

// ============================================================================
// Session bookkeeping
// ============================================================================

#[tokio::test]
async fn test_empty_input_returns_prompt() {
    let engine = engine();
    let out = engine.classify(Some("s"), "").await;
    assert_eq!(out.branch, Branch::EmptyInput);
    assert_eq!(out.reply, "Please provide a message.");
    assert!(engine.store().get("s").await.is_none());
}

#[tokio::test]
async fn test_history_caps_hold() {
    let engine = engine();
    let mut last = None;
    for i in 0..35 {
        let text = if i % 2 == 0 { "i feel so sad" } else { "i feel so lonely" };
        last = Some(engine.classify(Some("s"), text).await);
    }
    let session = last.unwrap().session.unwrap();
    assert_eq!(session.messages.len(), 20);
    assert_eq!(session.mood_events.len(), 20);
    assert!(session.prompt_turns("sys").len() <= 10);
}

#[tokio::test]
async fn test_fallback_prompt_is_capped() {
    let client = Arc::new(RecordingClient::new("I'm listening."));
    let engine = engine().with_fallback(Some(client.clone()));
    for i in 0..12 {
        let out = engine
            .classify(Some("s"), &format!("the weather changed {i} times"))
            .await;
        assert_eq!(out.reply, "I'm listening.");
    }
    let prompt = client.last_prompt();
    assert_eq!(prompt.len(), 10);
    assert_eq!(prompt[0].role, "system");
    assert_eq!(prompt[9].role, "user");
    assert_eq!(prompt[9].content, "the weather changed 11 times");
}

#[tokio::test]
async fn test_concern_block_appended_to_fallback() {
    let client = Arc::new(RecordingClient::new("That sounds hard."));
    let engine = engine().with_fallback(Some(client));
    let out = engine.classify(Some("s"), "i'm so anxious").await;
    assert_eq!(out.branch, Branch::Concern);
    assert!(out.reply.starts_with("That sounds hard.\n\n"));
    assert!(out.reply.contains(CONCERN_HEADER));
}

#[tokio::test]
async fn test_concurrent_turns_on_one_key() {
    let engine = Arc::new(engine());
    let mut tasks = Vec::new();
    for i in 0..50 {
        let engine = engine.clone();
        tasks.push(tokio::spawn(async move {
            let text = if i % 2 == 0 { "i feel so sad" } else { "hello" };
            engine.classify(Some("shared"), text).await
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }
    let session = engine.store().snapshot("shared").await.unwrap();
    assert_eq!(session.messages.len(), 20);
    assert_eq!(session.conversation.len(), 9);
    assert!(session.mood_events.len() <= 20);
    assert_eq!(engine.store().len().await, 1);
}

// ============================================================================
// Determinism
// ============================================================================

#[tokio::test]
async fn test_same_seed_same_conversation() {
    let script = [
        "hello",
        "I feel amazing today",
        "can you recommend a therapist",
        "play me a calm song",
        "i feel so down",
        "life is pointless",
    ];
    let a = engine_with(42, &clock());
    let b = engine_with(42, &clock());
    for text in script {
        let x = a.classify(Some("s"), text).await;
        let y = b.classify(Some("s"), text).await;
        assert_eq!(x.branch, y.branch);
        assert_eq!(x.reply, y.reply);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn branch_does_not_depend_on_seed(
        seed_a in any::<u64>(),
        seed_b in any::<u64>(),
        text in prop::sample::select(vec![
            "play me a happy song, i feel sad",
            "can you recommend a therapist",
            "i need a daily routine for exercise",
            "I feel amazing today",
            "i feel so down",
            "i regret leaving",
            "i'm so anxious",
            "the bus was late",
        ]),
    ) {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let (a, b) = rt.block_on(async {
            let a = engine_with(seed_a, &clock()).classify(Some("s"), text).await;
            let b = engine_with(seed_b, &clock()).classify(Some("s"), text).await;
            (a, b)
        });
        prop_assert_eq!(a.branch, b.branch);
        prop_assert_eq!(a.crisis, b.crisis);
    }
}

// ============================================================================
// Fallback failures degrade to canned replies
// ============================================================================

#[tokio::test]
async fn test_openai_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(chat_completion("  I'm here for you. ")))
        .mount(&server)
        .await;

    let engine = openai_engine(&server, Duration::from_secs(5)).await;
    let out = engine.classify(Some("s"), "the weather is odd").await;
    assert_eq!(out.branch, Branch::Fallback);
    assert_eq!(out.reply, "I'm here for you.");
}

#[tokio::test]
async fn test_openai_server_error_uses_canned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let engine = openai_engine(&server, Duration::from_secs(5)).await;
    let out = engine.classify(Some("s"), "the weather is odd").await;
    assert!(out.reply.starts_with(DEFAULT_CANNED));
    assert!(!out.reply.contains("boom"));
}

#[tokio::test]
async fn test_openai_quota_uses_canned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "error": { "type": "insufficient_quota", "message": "You exceeded your current quota" }
        })))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(&server.uri(), "k", "m", Duration::from_secs(5)).unwrap();
    let err = client
        .complete(&[], &CompletionParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, FallbackError::Quota));

    let engine = openai_engine(&server, Duration::from_secs(5)).await;
    let out = engine.classify(Some("s"), "the weather is odd").await;
    assert!(out.reply.starts_with(DEFAULT_CANNED));
}

#[tokio::test]
async fn test_openai_malformed_payload_uses_canned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json at all"))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(&server.uri(), "k", "m", Duration::from_secs(5)).unwrap();
    let err = client
        .complete(&[], &CompletionParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, FallbackError::Malformed(_)));

    let engine = openai_engine(&server, Duration::from_secs(5)).await;
    let out = engine.classify(Some("s"), "the weather is odd").await;
    assert!(out.reply.starts_with(DEFAULT_CANNED));
}

#[tokio::test]
async fn test_openai_missing_content_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = OpenAiClient::new(&server.uri(), "k", "m", Duration::from_secs(5)).unwrap();
    let err = client
        .complete(&[], &CompletionParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, FallbackError::Malformed(_)));
}

#[tokio::test]
async fn test_openai_timeout_uses_canned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(chat_completion("too late"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let client =
        OpenAiClient::new(&server.uri(), "k", "m", Duration::from_millis(200)).unwrap();
    let err = client
        .complete(&[], &CompletionParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, FallbackError::Timeout(_)));

    let engine = openai_engine(&server, Duration::from_millis(200)).await;
    let out = engine.classify(Some("s"), "the weather is odd").await;
    assert!(out.reply.starts_with(DEFAULT_CANNED));
}

#[tokio::test]
async fn test_huggingface_strips_prompt_echo() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/llama-test"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "generated_text": "<s>[INST] <<SYS>>\nsys\n<</SYS>>\n\nhi [/INST] Hello from llama." }
        ])))
        .mount(&server)
        .await;

    let client =
        HuggingFaceClient::new(&server.uri(), "k", "llama-test", Duration::from_secs(5)).unwrap();
    let engine = engine().with_fallback(Some(Arc::new(client)));
    let out = engine.classify(Some("s"), "the weather is odd").await;
    assert_eq!(out.reply, "Hello from llama.");
}

#[tokio::test]
async fn test_huggingface_loading_model_uses_canned() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503).set_body_json(serde_json::json!({
            "error": "Model is currently loading"
        })))
        .mount(&server)
        .await;

    let client =
        HuggingFaceClient::new(&server.uri(), "k", "llama-test", Duration::from_secs(5)).unwrap();
    let err = client
        .complete(&[], &CompletionParams::default())
        .await
        .unwrap_err();
    assert!(matches!(err, FallbackError::Status { status: 503, .. }));
}
