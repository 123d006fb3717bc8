use crate::session::{Session, SessionLimits};
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock};

/// Exclusive access to one session. Hold the guard for the whole turn.
pub type SessionHandle = Arc<Mutex<Session>>;

/// Process-wide map from session key to its state.
///
/// The outer `RwLock` only guards membership; each session has its own
/// `Mutex`, so turns for different keys never wait on each other while two
/// turns for the same key run one after the other.
pub struct SessionStore {
    sessions: RwLock<HashMap<String, SessionHandle>>,
    limits: SessionLimits,
}

impl SessionStore {
    pub fn new(limits: SessionLimits) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            limits,
        }
    }

    pub fn limits(&self) -> &SessionLimits {
        &self.limits
    }

    /// Handle for `id`, creating an empty session on first use.
    pub async fn handle(&self, id: &str, now: DateTime<Utc>) -> SessionHandle {
        if let Some(existing) = self.sessions.read().await.get(id) {
            return existing.clone();
        }
        let mut sessions = self.sessions.write().await;
        sessions
            .entry(id.to_string())
            .or_insert_with(|| {
                tracing::info!(session = %id, "Session created");
                Arc::new(Mutex::new(Session::new(id, self.limits, now)))
            })
            .clone()
    }

    pub async fn get(&self, id: &str) -> Option<SessionHandle> {
        self.sessions.read().await.get(id).cloned()
    }

    /// Owned copy of the current state.
    pub async fn snapshot(&self, id: &str) -> Option<Session> {
        let handle = self.get(id).await?;
        let session = handle.lock().await;
        Some(session.clone())
    }

    pub async fn last_activity(&self, id: &str) -> Option<DateTime<Utc>> {
        let handle = self.get(id).await?;
        let session = handle.lock().await;
        Some(session.last_activity)
    }

    /// Remove a session. Returns whether it existed.
    pub async fn evict(&self, id: &str) -> bool {
        let removed = self.sessions.write().await.remove(id).is_some();
        if removed {
            tracing::info!(session = %id, "Session evicted");
        }
        removed
    }

    /// Drop every session idle for longer than `ttl`. Sessions in the middle
    /// of a turn are active by definition and are kept.
    pub async fn evict_idle(&self, ttl: Duration, now: DateTime<Utc>) -> usize {
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, handle| match handle.try_lock() {
            Ok(session) => now - session.last_activity <= ttl,
            Err(_) => true,
        });
        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::info!(evicted, remaining = sessions.len(), "Idle sessions evicted");
        }
        evicted
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(SessionLimits::default())
    }
}
