use chrono::{Duration, TimeZone, Utc};
use proptest::prelude::*;
use solace_core::{ConcernKind, NegativeMood};
use solace_limbic::Signals;
use solace_memory::{Session, SessionLimits, SessionStore, TrendAnalyzer, TrendReport};

fn mood_strategy() -> impl Strategy<Value = NegativeMood> {
    prop::sample::select(NegativeMood::ALL.to_vec())
}

proptest! {
    /// Message and mood logs never exceed their caps, whatever the traffic.
    #[test]
    fn logs_stay_capped(
        turns in prop::collection::vec(("[a-z ]{0,30}", prop::collection::vec(mood_strategy(), 0..4)), 0..80)
    ) {
        let limits = SessionLimits::default();
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut session = Session::new("p", limits, start);
        for (i, (text, moods)) in turns.iter().enumerate() {
            let now = start + Duration::seconds(i as i64);
            session.record_user_message(text, text, now);
            session.record_moods(moods, now);
            session.record_reply("ok", now);
            prop_assert!(session.messages.len() <= 20);
            prop_assert!(session.mood_events.len() <= 20);
            prop_assert!(session.prompt_turns("sys").len() <= 10);
        }
    }

    /// Eviction is FIFO: the retained tail equals the tail of the input.
    #[test]
    fn message_eviction_is_fifo(texts in prop::collection::vec("[a-z]{1,8}", 0..50)) {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut session = Session::new("p", SessionLimits::default(), start);
        for t in &texts {
            session.record_user_message(t, t, start);
        }
        let kept: Vec<&str> = session.messages.iter().map(|m| m.text.as_str()).collect();
        let skip = texts.len().saturating_sub(20);
        let expected: Vec<&str> = texts.iter().skip(skip).map(String::as_str).collect();
        prop_assert_eq!(kept, expected);
    }

    /// Concern counts only grow.
    #[test]
    fn concern_counts_are_monotonic(texts in prop::collection::vec(
        prop::sample::select(vec!["i'm stressed", "i feel sad", "so angry", "hello", "what if it fails"]), 1..30)
    ) {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let mut session = Session::new("p", SessionLimits::default(), start);
        let mut previous = [0u32; 4];
        for t in texts {
            session.record_concerns(&Signals::detect(t).concerns, start);
            for (i, kind) in ConcernKind::ALL.iter().enumerate() {
                let count = session.concerns[kind].count;
                prop_assert!(count >= previous[i]);
                previous[i] = count;
            }
        }
    }
}

#[tokio::test]
async fn concurrent_turns_on_one_key_are_serialized() {
    let store = std::sync::Arc::new(SessionStore::default());
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let mut tasks = Vec::new();
    for i in 0..50 {
        let store = store.clone();
        tasks.push(tokio::spawn(async move {
            let handle = store.handle("shared", now).await;
            let mut session = handle.lock().await;
            let text = format!("msg {i}");
            session.record_user_message(&text, &text, now);
            session.record_moods(&[NegativeMood::Sadness], now);
        }));
    }
    for t in tasks {
        t.await.unwrap();
    }
    let snapshot = store.snapshot("shared").await.unwrap();
    assert_eq!(snapshot.messages.len(), 20);
    assert_eq!(snapshot.mood_events.len(), 20);
    assert_eq!(store.len().await, 1);
}

#[test]
fn trend_needs_five_messages() {
    let now = Utc::now();
    let mut session = Session::new("p", SessionLimits::default(), now);
    for t in ["a", "b", "c", "d"] {
        session.record_user_message(t, t, now);
    }
    assert_eq!(TrendAnalyzer::default().analyze(&session), TrendReport::InsufficientData);
}
