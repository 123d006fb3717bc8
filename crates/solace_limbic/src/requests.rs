//! Service-request detectors: wellness routine, professional referral, music.

use crate::patterns::PatternTable;
use serde::Serialize;
use solace_core::RoutineKind;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoutineRequest {
    pub kind: RoutineKind,
    pub rules: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReferralRequest {
    pub rules: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MusicRequest {
    /// Mood token as found in the message, if any.
    pub raw_mood: Option<String>,
    /// Catalog key after synonym folding.
    pub mood: Option<String>,
}

fn owned(hits: Vec<&str>) -> Vec<String> {
    hits.into_iter().map(str::to_string).collect()
}

pub fn detect_routine_request(table: &PatternTable, text: &str) -> Option<RoutineRequest> {
    let rules = owned(table.routine.hits(text));
    if rules.is_empty() {
        return None;
    }
    Some(RoutineRequest {
        kind: routine_kind(table, text),
        rules,
    })
}

/// Sub-type with the most keyword hits. Earlier kinds win ties; no hits at
/// all means general.
pub fn routine_kind(table: &PatternTable, text: &str) -> RoutineKind {
    let mut best = (RoutineKind::General, 0usize);
    for (kind, keywords) in &table.routine_kinds {
        let score = keywords.count(text);
        if score > best.1 {
            best = (*kind, score);
        }
    }
    best.0
}

pub fn detect_referral_request(table: &PatternTable, text: &str) -> Option<ReferralRequest> {
    let rules = owned(table.referral.hits(text));
    if rules.is_empty() {
        None
    } else {
        Some(ReferralRequest { rules })
    }
}

pub fn detect_music_request(table: &PatternTable, text: &str) -> Option<MusicRequest> {
    if !table.music.is_match(text) {
        return None;
    }
    let raw_mood = extract_mood(table, text);
    let mood = raw_mood.as_deref().map(|m| normalize_mood(table, m));
    Some(MusicRequest { raw_mood, mood })
}

/// Ordered extraction patterns first, then a scan of the mood vocabulary.
pub fn extract_mood(table: &PatternTable, text: &str) -> Option<String> {
    for re in &table.mood_extractors {
        if let Some(m) = re.captures(text).and_then(|c| c.get(1)) {
            return Some(m.as_str().to_string());
        }
    }
    let words: Vec<&str> = text
        .split(|c: char| !c.is_alphanumeric() && c != '-')
        .filter(|w| !w.is_empty())
        .collect();
    table
        .mood_vocabulary
        .iter()
        .find(|v| words.contains(v))
        .map(|v| v.to_string())
}

/// Fold a mood word onto its catalog key. Unknown words pass through.
pub fn normalize_mood(table: &PatternTable, mood: &str) -> String {
    let mood = mood.trim().to_lowercase();
    table
        .mood_synonyms
        .iter()
        .find(|(from, _)| *from == mood)
        .map(|(_, to)| to.to_string())
        .unwrap_or(mood)
}
