//! Negative- and positive-mood detectors.
//!
//! Both are coarse booleans per category with no severity. Only the negative
//! side resolves a primary mood.

use crate::patterns::PatternTable;
use serde::Serialize;
use solace_core::NegativeMood;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NegativeMoodHit {
    /// Matched categories in table order.
    pub moods: Vec<NegativeMood>,
    pub rules: Vec<String>,
}

impl NegativeMoodHit {
    /// Depression, then sadness, then bad mood. Anxiety and loneliness alone
    /// leave no primary.
    pub fn primary(&self) -> Option<NegativeMood> {
        NegativeMood::PRIMARY_PRECEDENCE
            .into_iter()
            .find(|m| self.moods.contains(m))
    }
}

pub fn detect_negative_mood(table: &PatternTable, text: &str) -> Option<NegativeMoodHit> {
    let mut moods = Vec::new();
    let mut rules = Vec::new();
    for (mood, set) in &table.negative_moods {
        let hits = set.hits(text);
        if !hits.is_empty() {
            moods.push(*mood);
            rules.extend(hits.into_iter().map(str::to_string));
        }
    }
    if moods.is_empty() {
        None
    } else {
        Some(NegativeMoodHit { moods, rules })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PositiveMoodHit {
    pub rules: Vec<String>,
}

pub fn detect_positive_mood(table: &PatternTable, text: &str) -> Option<PositiveMoodHit> {
    let rules: Vec<String> = table
        .positive
        .hits(text)
        .into_iter()
        .map(str::to_string)
        .collect();
    if rules.is_empty() {
        None
    } else {
        Some(PositiveMoodHit { rules })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn negative(text: &str) -> Option<NegativeMoodHit> {
        detect_negative_mood(PatternTable::standard(), text)
    }

    #[test]
    fn test_sadness_is_primary() {
        let hit = negative("i feel so sad today").unwrap();
        assert_eq!(hit.moods, vec![NegativeMood::Sadness]);
        assert_eq!(hit.primary(), Some(NegativeMood::Sadness));
    }

    #[test]
    fn test_depression_beats_sadness() {
        let hit = negative("i'm sad and i feel hopeless").unwrap();
        assert!(hit.moods.contains(&NegativeMood::Sadness));
        assert!(hit.moods.contains(&NegativeMood::Depression));
        assert_eq!(hit.primary(), Some(NegativeMood::Depression));
    }

    #[test]
    fn test_anxiety_alone_has_no_primary() {
        let hit = negative("i'm feeling anxious").unwrap();
        assert_eq!(hit.moods, vec![NegativeMood::Anxiety]);
        assert_eq!(hit.primary(), None);
    }

    #[test]
    fn test_bad_day() {
        let hit = negative("i'm having a terrible day").unwrap();
        assert_eq!(hit.primary(), Some(NegativeMood::BadMood));
    }

    #[test]
    fn test_positive() {
        let table = PatternTable::standard();
        assert!(detect_positive_mood(table, "i feel amazing today").is_some());
        assert!(detect_positive_mood(table, "today is a great day").is_some());
        assert!(detect_positive_mood(table, "i'm in a good mood").is_some());
        assert!(detect_positive_mood(table, "the weather is nice").is_none());
    }

    #[test]
    fn test_positive_requires_word_end() {
        let table = PatternTable::standard();
        // "goodbye" is not "good"
        assert!(detect_positive_mood(table, "i'm goodbye").is_none());
    }
}
