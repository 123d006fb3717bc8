//! Signal taxonomies.
//!
//! Two independent models coexist: the concern taxonomy carries a severity
//! tier per match, while the mood taxonomies are coarse booleans.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Concerns
// ============================================================================

/// Mental-health concern category tracked with severity tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcernKind {
    Depression,
    Anxiety,
    Anger,
    SelfHarm,
}

impl ConcernKind {
    /// Evaluation order of the concern detector.
    pub const ALL: [ConcernKind; 4] = [
        ConcernKind::Depression,
        ConcernKind::Anxiety,
        ConcernKind::Anger,
        ConcernKind::SelfHarm,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ConcernKind::Depression => "depression",
            ConcernKind::Anxiety => "anxiety",
            ConcernKind::Anger => "anger",
            ConcernKind::SelfHarm => "self_harm",
        }
    }

    /// Human-readable label used in rendered text.
    pub fn label(&self) -> &'static str {
        match self {
            ConcernKind::SelfHarm => "self harm",
            other => other.as_str(),
        }
    }
}

impl fmt::Display for ConcernKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered severity tier of a matched concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Order in which tier rule sets are checked. First tier with a hit wins.
    pub const DESCENDING: [Severity; 3] = [Severity::High, Severity::Medium, Severity::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Low => "low",
            Severity::Medium => "medium",
            Severity::High => "high",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Moods
// ============================================================================

/// Coarse negative affect class recognised by the negative-mood detector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NegativeMood {
    Sadness,
    Depression,
    Anxiety,
    Loneliness,
    BadMood,
}

impl NegativeMood {
    pub const ALL: [NegativeMood; 5] = [
        NegativeMood::Sadness,
        NegativeMood::Depression,
        NegativeMood::Anxiety,
        NegativeMood::Loneliness,
        NegativeMood::BadMood,
    ];

    /// Moods eligible to become the primary reply, highest precedence first.
    /// Anxiety and loneliness are recorded but never selected.
    pub const PRIMARY_PRECEDENCE: [NegativeMood; 3] = [
        NegativeMood::Depression,
        NegativeMood::Sadness,
        NegativeMood::BadMood,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NegativeMood::Sadness => "sadness",
            NegativeMood::Depression => "depression",
            NegativeMood::Anxiety => "anxiety",
            NegativeMood::Loneliness => "loneliness",
            NegativeMood::BadMood => "bad_mood",
        }
    }
}

impl fmt::Display for NegativeMood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Reflection themes
// ============================================================================

/// Thematic bucket of a personal-narrative message.
///
/// Declaration order is the iteration order of the theme table, which decides
/// the primary theme when several match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReflectionTheme {
    PastExperiences,
    SelfReflection,
    Aspirations,
    Regrets,
    Fears,
    Gratitude,
    Trauma,
    Loneliness,
    SelfDoubt,
    General,
}

impl ReflectionTheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReflectionTheme::PastExperiences => "past_experiences",
            ReflectionTheme::SelfReflection => "self_reflection",
            ReflectionTheme::Aspirations => "aspirations",
            ReflectionTheme::Regrets => "regrets",
            ReflectionTheme::Fears => "fears",
            ReflectionTheme::Gratitude => "gratitude",
            ReflectionTheme::Trauma => "trauma",
            ReflectionTheme::Loneliness => "loneliness",
            ReflectionTheme::SelfDoubt => "self_doubt",
            ReflectionTheme::General => "general",
        }
    }
}

// ============================================================================
// Routines
// ============================================================================

/// Wellness routine sub-type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoutineKind {
    Morning,
    Evening,
    Mental,
    Physical,
    General,
}

impl RoutineKind {
    /// Fixed enumeration order; the earlier kind wins a scoring tie.
    pub const ALL: [RoutineKind; 5] = [
        RoutineKind::Morning,
        RoutineKind::Evening,
        RoutineKind::Mental,
        RoutineKind::Physical,
        RoutineKind::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RoutineKind::Morning => "morning",
            RoutineKind::Evening => "evening",
            RoutineKind::Mental => "mental",
            RoutineKind::Physical => "physical",
            RoutineKind::General => "general",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::High > Severity::Medium);
        assert!(Severity::Medium > Severity::Low);
        assert_eq!(Severity::DESCENDING[0], Severity::High);
    }

    #[test]
    fn test_concern_labels() {
        assert_eq!(ConcernKind::SelfHarm.as_str(), "self_harm");
        assert_eq!(ConcernKind::SelfHarm.label(), "self harm");
        assert_eq!(ConcernKind::Anger.label(), "anger");
    }

    #[test]
    fn test_serde_snake_case() {
        let json = serde_json::to_string(&NegativeMood::BadMood).unwrap();
        assert_eq!(json, "\"bad_mood\"");
        let kind: ConcernKind = serde_json::from_str("\"self_harm\"").unwrap();
        assert_eq!(kind, ConcernKind::SelfHarm);
    }

    #[test]
    fn test_primary_precedence_excludes_anxiety_and_loneliness() {
        assert!(!NegativeMood::PRIMARY_PRECEDENCE.contains(&NegativeMood::Anxiety));
        assert!(!NegativeMood::PRIMARY_PRECEDENCE.contains(&NegativeMood::Loneliness));
    }
}
