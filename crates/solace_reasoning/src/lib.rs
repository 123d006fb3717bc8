//! # Solace Reasoning
//!
//! Picks exactly one reply per turn. The [`ArbitrationEngine`] runs every
//! detector, records the turn in the session, walks the ordered rule list in
//! [`decision`], and asks the composer (or the generic fallback) for text.

pub mod decision;
pub mod engine;
pub mod llm;
pub mod prompts;
pub mod providers;

pub use decision::Branch;
pub use engine::{ArbitrationEngine, Classification};
pub use llm::{ChatMessage, CompletionParams, FallbackClient, FallbackError};
