//! Rule-based reply used when no external fallback is configured or the
//! external call fails.

use crate::composer::Composer;
use solace_core::choose;
use solace_limbic::{normalize_mood, PatternTable};

const GREETINGS: &[&str] = &["hello", "hi", "hey", "good morning", "good afternoon", "good evening"];
const GREETING_REPLIES: &[&str] = &[
    "Hello! How are you feeling today?",
    "Hi there! How can I support you today?",
    "Hey! What's on your mind?",
];

const FEELINGS: &[&str] = &[
    "sad", "depressed", "unhappy", "stress", "stressed", "anxiety", "anxious", "lonely", "tired",
    "angry", "worried", "overwhelmed", "happy", "joy", "excited", "cheerful", "good", "great",
    "calm", "peaceful", "relaxed",
];

const MUSIC_LEADS: &[&str] = &[
    "Music can help with your mood.",
    "Sometimes music can be therapeutic.",
    "The right song might help you process these feelings.",
];

const EMPATHY_REPLIES: &[&str] = &[
    "I hear that you're going through something difficult. Would it help to talk more about it, or would you like me to suggest some songs to lift your spirits?",
    "It sounds like you're dealing with a lot right now. I'm here to listen, and I can also recommend some music if you think it might help.",
    "Thank you for telling me how you feel. Sometimes putting feelings into words is the first step. Would you like some song suggestions to go with your mood?",
];

const JOKES: &[&str] = &[
    "Why don't scientists trust atoms? Because they make up everything!",
    "What do you call a fake noodle? An impasta!",
    "Why did the scarecrow win an award? Because he was outstanding in his field!",
    "How does a penguin build its house? Igloos it together!",
];

const THANKS_REPLY: &str = "You're welcome! I'm here whenever you need to talk.";
const DEFAULT_REPLY: &str = "Thanks for sharing. Remember, talking about your feelings can help. I can also suggest songs to match your mood if you'd like - just ask for music recommendations.";

fn words(text: &str) -> Vec<&str> {
    text.split(|c: char| !c.is_alphanumeric() && c != '\'')
        .filter(|w| !w.is_empty())
        .collect()
}

/// Whole-word (or whole-phrase) containment.
fn mentions(tokens: &[&str], phrase: &str) -> bool {
    let needle: Vec<&str> = phrase.split(' ').collect();
    tokens.windows(needle.len()).any(|w| w == needle.as_slice())
}

impl Composer {
    fn one_of(&self, options: &[&str]) -> String {
        choose(self.sampler.as_ref(), options)
            .copied()
            .unwrap_or(DEFAULT_REPLY)
            .to_string()
    }

    /// Answer from a small set of keyword rules. Expects normalized text.
    pub fn canned_reply(&self, text: &str) -> String {
        let tokens = words(text);

        if GREETINGS.iter().any(|g| mentions(&tokens, g)) {
            return self.one_of(GREETING_REPLIES);
        }

        if let Some(feeling) = FEELINGS.iter().find(|f| mentions(&tokens, f)) {
            let mood = normalize_mood(PatternTable::standard(), feeling);
            let songs = self.sample_songs(&mood, self.responses.fallback_song_count);
            if songs.is_empty() {
                return self.one_of(EMPATHY_REPLIES);
            }
            let lead = self.one_of(MUSIC_LEADS);
            return format!(
                "I notice you're feeling {feeling}. {lead} {}",
                Composer::render_songs(&songs, feeling)
            );
        }

        if mentions(&tokens, "joke") || mentions(&tokens, "funny") {
            return self.one_of(JOKES);
        }

        if mentions(&tokens, "thanks") || mentions(&tokens, "thank you") {
            return THANKS_REPLY.to_string();
        }

        DEFAULT_REPLY.to_string()
    }
}
