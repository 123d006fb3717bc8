//! Shared vocabulary for the Solace companion.
//!
//! Everything the detectors, the session store, the composer and the
//! arbitration engine agree on lives here: the signal taxonomies, the
//! content lookup contract, and the injectable clock and sampler.

pub mod clock;
pub mod config;
pub mod content;
pub mod sampler;
pub mod taxonomy;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::SolaceConfig;
pub use content::{
    ContentKey, ContentSource, CrisisLine, ResourceLink, ResourceSection, Routine, Song, Therapist,
};
pub use sampler::{choose, RngSampler, Sampler};
pub use taxonomy::{ConcernKind, NegativeMood, ReflectionTheme, RoutineKind, Severity};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One role-tagged entry of a session's conversation log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationTurn {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

/// Normalize raw user text before detection: trim, lowercase, and fold
/// typographic apostrophes so `I’m` and `I'm` hit the same patterns.
pub fn normalize_message(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(&['\u{2019}', '\u{2018}'][..], "'")
}
