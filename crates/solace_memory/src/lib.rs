//! Per-session interaction state.
//!
//! A [`Session`] tracks concern history, mood events, cooldown timestamps and
//! a capped conversation log. The [`SessionStore`] owns one lock per session
//! key so a whole turn's read-check-write runs serialized. The
//! [`TrendAnalyzer`] reads a session and reports how each concern is moving.

mod session;
mod store;
mod trend;

pub use session::{ConcernRecord, LoggedMessage, MoodEvent, Session, SessionLimits};
pub use store::{SessionHandle, SessionStore};
pub use trend::{ConcernTrend, TrendAnalyzer, TrendReport};
