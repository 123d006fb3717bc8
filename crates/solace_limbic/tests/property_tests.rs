use proptest::prelude::*;
use solace_core::normalize_message;
use solace_limbic::{PatternTable, Signals};

proptest! {
    /// Detection is a pure function of the text.
    #[test]
    fn detection_is_deterministic(text in "[a-z' ]{0,80}") {
        let a = Signals::detect(&text);
        let b = Signals::detect(&text);
        prop_assert_eq!(a, b);
    }

    /// Arbitrary input never panics, and every concern hit carries the
    /// keywords that produced it.
    #[test]
    fn concern_hits_carry_keywords(raw in ".{0,120}") {
        let text = normalize_message(&raw);
        let signals = Signals::detect(&text);
        for hit in &signals.concerns {
            prop_assert!(!hit.keywords.is_empty());
        }
    }

    /// Padding a known phrase with unrelated words keeps the detection.
    #[test]
    fn self_harm_survives_padding(prefix in "[a-z]{0,12}", suffix in "[a-z]{0,12}") {
        let text = format!("{prefix} i want to end my life {suffix}");
        let signals = Signals::detect(&text);
        prop_assert!(signals.needs_crisis_resources());
    }

    /// Music detection always yields a normalized mood that is either a
    /// catalog key or the raw token lowercased.
    #[test]
    fn music_mood_is_normalized(word in "(joy|excited|down|serene|pumped|studying|comfortable)") {
        let text = format!("play some music, i feel {word}");
        let signals = Signals::detect(&text);
        let music = signals.music.expect("music word present");
        let mood = music.mood.expect("mood extracted");
        prop_assert!(["happy", "sad", "calm", "energetic", "focused", "relaxed"].contains(&mood.as_str()));
    }
}

#[test]
fn standard_table_is_shared() {
    let a = PatternTable::standard() as *const PatternTable;
    let b = PatternTable::standard() as *const PatternTable;
    assert_eq!(a, b);
}
