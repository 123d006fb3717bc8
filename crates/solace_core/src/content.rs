//! Content lookup contract.
//!
//! Content banks are opaque data to the core. Every lookup may come back
//! empty; callers degrade to a generic sentence instead of failing.

use crate::taxonomy::{ConcernKind, NegativeMood, ReflectionTheme, RoutineKind, Severity};
use serde::{Deserialize, Serialize};

/// Key into the plain-text reply banks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContentKey {
    CopingStrategy(ConcernKind, Severity),
    EncouragingQuote(NegativeMood),
    LovableLine(NegativeMood),
    PositiveResponse,
    Affirmation,
    ReflectionResponse(ReflectionTheme),
    FollowUpQuestion(ReflectionTheme),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrisisLine {
    pub name: String,
    pub contact: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Routine {
    pub title: String,
    pub description: String,
    pub steps: Vec<String>,
    pub benefits: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Therapist {
    /// Stable directory identifier; referral replies never repeat one.
    pub id: String,
    pub name: String,
    pub title: String,
    pub specialties: Vec<String>,
    pub approach: String,
    pub education: String,
    pub practice: String,
    pub address: String,
    pub online: bool,
    pub phone: String,
    pub email: String,
    pub website: String,
    pub insurance: String,
    pub languages: Vec<String>,
    pub years_experience: u32,
    pub session_format: String,
    pub session_cost: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub name: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceSection {
    pub heading: String,
    pub links: Vec<ResourceLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub link: String,
}

/// Pure lookups over the static content collaborators.
pub trait ContentSource: Send + Sync {
    /// Candidate reply lines for a plain-text bank.
    fn lines(&self, key: ContentKey) -> Vec<String>;

    fn crisis_lines(&self) -> Vec<CrisisLine>;

    fn routines(&self, kind: RoutineKind) -> Vec<Routine>;

    fn therapists(&self) -> Vec<Therapist>;

    /// Static sections appended after referral entries.
    fn referral_resources(&self) -> Vec<ResourceSection>;

    /// Songs for an already-normalized catalog mood (`happy`, `sad`, ...).
    fn songs(&self, mood: &str) -> Vec<Song>;

    /// Catalog moods offered as alternatives when a mood is unknown.
    fn song_moods(&self) -> Vec<String>;
}
