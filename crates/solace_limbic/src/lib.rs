//! # Solace Limbic
//!
//! Fast, stateless classification of one user message. Every detector reads
//! the same [`PatternTable`] and reports what matched; none of them touch
//! session state. Bookkeeping and cooldowns live in `solace_memory`.
//!
//! Detectors:
//! - concern (depression, anxiety, anger, self-harm) with severity tiers
//! - negative mood and positive mood
//! - deep reflection with thematic buckets
//! - routine, referral and music requests

pub mod concern;
pub mod mood;
pub mod patterns;
pub mod reflection;
pub mod requests;
mod signals;

pub use concern::{detect_concerns, ConcernHit};
pub use mood::{detect_negative_mood, detect_positive_mood, NegativeMoodHit, PositiveMoodHit};
pub use patterns::{ConcernRules, PatternTable, RuleSet};
pub use reflection::{detect_reflection, ReflectionHit};
pub use requests::{
    detect_music_request, detect_referral_request, detect_routine_request, extract_mood,
    normalize_mood, routine_kind, MusicRequest, ReferralRequest, RoutineRequest,
};
pub use signals::Signals;
