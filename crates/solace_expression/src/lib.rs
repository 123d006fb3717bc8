//! Text rendering for every reply branch.
//!
//! The [`Composer`] turns a winning signal into user-facing text by sampling
//! the content banks through an injected [`Sampler`](solace_core::Sampler).
//! Empty banks degrade to a fixed sentence; rendering never fails.

mod canned;
mod composer;

pub use composer::{Composer, ReferralReply};
