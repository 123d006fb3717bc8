use crate::concern::{detect_concerns, ConcernHit};
use crate::mood::{detect_negative_mood, detect_positive_mood, NegativeMoodHit, PositiveMoodHit};
use crate::patterns::PatternTable;
use crate::reflection::{detect_reflection, ReflectionHit};
use crate::requests::{
    detect_music_request, detect_referral_request, detect_routine_request, MusicRequest,
    ReferralRequest, RoutineRequest,
};
use serde::Serialize;
use solace_core::{ConcernKind, Severity};

/// Output of every detector for one normalized message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Signals {
    pub concerns: Vec<ConcernHit>,
    pub negative: Option<NegativeMoodHit>,
    pub positive: Option<PositiveMoodHit>,
    pub reflection: Option<ReflectionHit>,
    pub routine: Option<RoutineRequest>,
    pub referral: Option<ReferralRequest>,
    pub music: Option<MusicRequest>,
}

impl Signals {
    /// Run all detectors against the built-in table.
    pub fn detect(text: &str) -> Self {
        Self::detect_with(PatternTable::standard(), text)
    }

    pub fn detect_with(table: &PatternTable, text: &str) -> Self {
        let signals = Self {
            concerns: detect_concerns(table, text),
            negative: detect_negative_mood(table, text),
            positive: detect_positive_mood(table, text),
            reflection: detect_reflection(table, text),
            routine: detect_routine_request(table, text),
            referral: detect_referral_request(table, text),
            music: detect_music_request(table, text),
        };
        tracing::debug!(categories = ?signals.categories(), "Signals detected");
        signals
    }

    pub fn concern(&self, kind: ConcernKind) -> Option<&ConcernHit> {
        self.concerns.iter().find(|c| c.kind == kind)
    }

    /// Crisis resources apply when self-harm fired or any concern is high.
    pub fn needs_crisis_resources(&self) -> bool {
        self.concerns
            .iter()
            .any(|c| c.kind == ConcernKind::SelfHarm || c.severity == Severity::High)
    }

    pub fn is_empty(&self) -> bool {
        self.categories().is_empty()
    }

    /// Short tags of every detector that fired, for logs.
    pub fn categories(&self) -> Vec<&'static str> {
        let mut tags: Vec<&'static str> = self.concerns.iter().map(|c| c.kind.as_str()).collect();
        let flags = [
            (self.negative.is_some(), "negative_mood"),
            (self.positive.is_some(), "positive_mood"),
            (self.reflection.is_some(), "reflection"),
            (self.routine.is_some(), "routine"),
            (self.referral.is_some(), "referral"),
            (self.music.is_some(), "music"),
        ];
        tags.extend(flags.iter().filter(|(hit, _)| *hit).map(|(_, tag)| *tag));
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_message_has_no_signals() {
        assert!(Signals::detect("").is_empty());
    }

    #[test]
    fn test_music_and_sad_both_fire() {
        let signals = Signals::detect("play me a happy song, i feel sad");
        assert!(signals.music.is_some());
        assert!(signals.negative.is_some());
        assert!(signals.concern(ConcernKind::Depression).is_some());
    }

    #[test]
    fn test_crisis_for_self_harm() {
        let signals = Signals::detect("i want to end my life");
        assert!(signals.needs_crisis_resources());
    }

    #[test]
    fn test_crisis_for_any_high() {
        assert!(Signals::detect("life is pointless").needs_crisis_resources());
        assert!(!Signals::detect("i'm a bit stressed").needs_crisis_resources());
    }
}
