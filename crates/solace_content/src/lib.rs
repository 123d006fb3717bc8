//! Static content banks behind the [`ContentSource`] lookup contract.
//!
//! The tables are plain data. Nothing here samples or formats; the composer
//! decides what to show and how.

mod encouragement;
mod positive;
mod reflection;
mod routines;
mod songs;
mod strategies;
mod therapists;

use solace_core::{
    ContentKey, ContentSource, CrisisLine, ResourceSection, Routine, RoutineKind, Song, Therapist,
};

/// Built-in English content.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticContent;

impl StaticContent {
    pub fn new() -> Self {
        Self
    }
}

fn owned(lines: &[&str]) -> Vec<String> {
    lines.iter().map(|s| s.to_string()).collect()
}

impl ContentSource for StaticContent {
    fn lines(&self, key: ContentKey) -> Vec<String> {
        let bank: &[&str] = match key {
            ContentKey::CopingStrategy(kind, severity) => {
                strategies::coping_strategies(kind, severity)
            }
            ContentKey::EncouragingQuote(mood) => encouragement::encouraging_quotes(mood),
            ContentKey::LovableLine(mood) => encouragement::lovable_lines(mood),
            ContentKey::PositiveResponse => positive::POSITIVE_RESPONSES,
            ContentKey::Affirmation => positive::AFFIRMATIONS,
            ContentKey::ReflectionResponse(theme) => reflection::responses(theme),
            ContentKey::FollowUpQuestion(theme) => reflection::follow_ups(theme),
        };
        owned(bank)
    }

    fn crisis_lines(&self) -> Vec<CrisisLine> {
        strategies::crisis_lines()
    }

    fn routines(&self, kind: RoutineKind) -> Vec<Routine> {
        routines::routines(kind)
    }

    fn therapists(&self) -> Vec<Therapist> {
        therapists::therapists()
    }

    fn referral_resources(&self) -> Vec<ResourceSection> {
        therapists::referral_resources()
    }

    fn songs(&self, mood: &str) -> Vec<Song> {
        songs::songs(mood)
    }

    fn song_moods(&self) -> Vec<String> {
        owned(&songs::MOODS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solace_core::{ConcernKind, NegativeMood, ReflectionTheme, Severity};
    use std::collections::HashSet;

    #[test]
    fn test_self_harm_has_no_low_tier() {
        let content = StaticContent::new();
        assert!(content
            .lines(ContentKey::CopingStrategy(ConcernKind::SelfHarm, Severity::Low))
            .is_empty());
        assert!(!content
            .lines(ContentKey::CopingStrategy(ConcernKind::SelfHarm, Severity::High))
            .is_empty());
    }

    #[test]
    fn test_every_other_tier_is_populated() {
        let content = StaticContent::new();
        for kind in [ConcernKind::Depression, ConcernKind::Anxiety, ConcernKind::Anger] {
            for severity in Severity::DESCENDING {
                let lines = content.lines(ContentKey::CopingStrategy(kind, severity));
                assert!(!lines.is_empty(), "{kind}/{severity} empty");
            }
        }
    }

    #[test]
    fn test_primary_moods_have_quotes_and_lines() {
        let content = StaticContent::new();
        for mood in NegativeMood::PRIMARY_PRECEDENCE {
            assert!(!content.lines(ContentKey::EncouragingQuote(mood)).is_empty());
            assert!(!content.lines(ContentKey::LovableLine(mood)).is_empty());
        }
        assert!(content
            .lines(ContentKey::EncouragingQuote(NegativeMood::Anxiety))
            .is_empty());
    }

    #[test]
    fn test_reflection_banks_cover_general() {
        let content = StaticContent::new();
        assert!(!content
            .lines(ContentKey::ReflectionResponse(ReflectionTheme::General))
            .is_empty());
        assert!(!content
            .lines(ContentKey::FollowUpQuestion(ReflectionTheme::SelfDoubt))
            .is_empty());
    }

    #[test]
    fn test_directory_ids_are_unique() {
        let therapists = StaticContent::new().therapists();
        assert!(therapists.len() >= 3);
        let ids: HashSet<_> = therapists.iter().map(|t| t.id.clone()).collect();
        assert_eq!(ids.len(), therapists.len());
    }

    #[test]
    fn test_song_catalog() {
        let content = StaticContent::new();
        for mood in content.song_moods() {
            assert_eq!(content.songs(&mood).len(), 5, "mood {mood}");
        }
        assert!(content.songs("stressed").is_empty());
    }

    #[test]
    fn test_routines_and_resources() {
        let content = StaticContent::new();
        for kind in RoutineKind::ALL {
            let routines = content.routines(kind);
            assert!(!routines.is_empty());
            assert!(routines.iter().all(|r| !r.steps.is_empty()));
        }
        let sections = content.referral_resources();
        assert_eq!(sections.len(), 4);
        assert!(sections[0].heading.starts_with("Crisis Support"));
        assert!(!content.crisis_lines().is_empty());
    }
}
