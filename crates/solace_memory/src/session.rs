use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use solace_core::config::SessionConfig;
use solace_core::{ConcernKind, ConversationTurn, NegativeMood, Role, Severity};
use solace_limbic::ConcernHit;
use std::collections::{BTreeMap, VecDeque};

/// Caps and windows applied to every session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    pub history_cap: usize,
    pub mood_event_cap: usize,
    /// Conversation entries handed to the fallback, system instruction included.
    pub conversation_cap: usize,
    pub cooldown: Duration,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self::from(&SessionConfig::default())
    }
}

impl From<&SessionConfig> for SessionLimits {
    fn from(cfg: &SessionConfig) -> Self {
        Self {
            history_cap: cfg.history_cap,
            mood_event_cap: cfg.mood_event_cap,
            conversation_cap: cfg.conversation_cap.max(1),
            cooldown: cfg.cooldown(),
        }
    }
}

/// Running record of one concern category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConcernRecord {
    /// Turns in which the concern was detected.
    pub count: u32,

    /// Tier of the most recent detection; overwritten, never merged.
    pub severity: Option<Severity>,

    pub first_seen: Option<DateTime<Utc>>,
    pub last_seen: Option<DateTime<Utc>>,

    /// When a coping strategy was last delivered for this concern.
    pub last_intervention: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MoodEvent {
    pub mood: NegativeMood,
    pub timestamp: DateTime<Utc>,
}

/// Normalized user text kept for trend windowing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoggedMessage {
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// State of one conversation partner.
#[derive(Debug, Clone, Serialize)]
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,

    /// Timestamp of the most recent user message.
    pub last_activity: DateTime<Utc>,

    pub concerns: BTreeMap<ConcernKind, ConcernRecord>,

    /// FIFO, at most `mood_event_cap` entries.
    pub mood_events: VecDeque<MoodEvent>,

    pub last_encouragement: BTreeMap<NegativeMood, DateTime<Utc>>,

    /// FIFO, at most `history_cap` entries.
    pub messages: VecDeque<LoggedMessage>,

    /// Role-tagged turns without the system instruction.
    pub conversation: VecDeque<ConversationTurn>,

    #[serde(skip)]
    limits: SessionLimits,
}

/// Append and evict from the front in one step so the cap never lapses.
fn push_capped<T>(buf: &mut VecDeque<T>, item: T, cap: usize) {
    buf.push_back(item);
    while buf.len() > cap {
        buf.pop_front();
    }
}

impl Session {
    pub fn new(id: impl Into<String>, limits: SessionLimits, now: DateTime<Utc>) -> Self {
        let concerns = ConcernKind::ALL
            .into_iter()
            .map(|kind| (kind, ConcernRecord::default()))
            .collect();
        Self {
            id: id.into(),
            created_at: now,
            last_activity: now,
            concerns,
            mood_events: VecDeque::new(),
            last_encouragement: BTreeMap::new(),
            messages: VecDeque::new(),
            conversation: VecDeque::new(),
            limits,
        }
    }

    pub fn limits(&self) -> &SessionLimits {
        &self.limits
    }

    /// Log the normalized text for trend windowing and the raw text as a
    /// user turn.
    pub fn record_user_message(&mut self, normalized: &str, raw: &str, now: DateTime<Utc>) {
        push_capped(
            &mut self.messages,
            LoggedMessage {
                text: normalized.to_string(),
                timestamp: now,
            },
            self.limits.history_cap,
        );
        self.push_turn(Role::User, raw, now);
        self.last_activity = now;
    }

    pub fn record_reply(&mut self, reply: &str, now: DateTime<Utc>) {
        self.push_turn(Role::Assistant, reply, now);
    }

    fn push_turn(&mut self, role: Role, content: &str, now: DateTime<Utc>) {
        push_capped(
            &mut self.conversation,
            ConversationTurn {
                role,
                content: content.to_string(),
                timestamp: now,
            },
            self.limits.conversation_cap.saturating_sub(1),
        );
    }

    /// Bump counters, timestamps and current tier for every detected concern.
    pub fn record_concerns(&mut self, hits: &[ConcernHit], now: DateTime<Utc>) {
        for hit in hits {
            let record = self.concerns.entry(hit.kind).or_default();
            record.count += 1;
            record.severity = Some(hit.severity);
            record.last_seen = Some(now);
            record.first_seen.get_or_insert(now);
        }
    }

    pub fn record_moods(&mut self, moods: &[NegativeMood], now: DateTime<Utc>) {
        for mood in moods {
            push_capped(
                &mut self.mood_events,
                MoodEvent {
                    mood: *mood,
                    timestamp: now,
                },
                self.limits.mood_event_cap,
            );
        }
    }

    fn within_cooldown(&self, last: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
        last.is_some_and(|t| now - t < self.limits.cooldown)
    }

    pub fn strategy_on_cooldown(&self, kind: ConcernKind, now: DateTime<Utc>) -> bool {
        let last = self.concerns.get(&kind).and_then(|r| r.last_intervention);
        self.within_cooldown(last, now)
    }

    pub fn mark_strategy(&mut self, kind: ConcernKind, now: DateTime<Utc>) {
        self.concerns.entry(kind).or_default().last_intervention = Some(now);
    }

    pub fn encouragement_on_cooldown(&self, mood: NegativeMood, now: DateTime<Utc>) -> bool {
        self.within_cooldown(self.last_encouragement.get(&mood).copied(), now)
    }

    pub fn mark_encouragement(&mut self, mood: NegativeMood, now: DateTime<Utc>) {
        self.last_encouragement.insert(mood, now);
    }

    /// Concatenation of the last `n` logged messages, oldest first.
    pub fn recent_text(&self, n: usize) -> String {
        let skip = self.messages.len().saturating_sub(n);
        self.messages
            .iter()
            .skip(skip)
            .map(|m| m.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// The conversation as the fallback sees it: the system instruction first,
    /// then the newest turns, never more than `conversation_cap` in total.
    pub fn prompt_turns(&self, system_instruction: &str) -> Vec<ConversationTurn> {
        let mut turns = Vec::with_capacity(self.conversation.len() + 1);
        turns.push(ConversationTurn {
            role: Role::System,
            content: system_instruction.to_string(),
            timestamp: self.created_at,
        });
        turns.extend(self.conversation.iter().cloned());
        turns
    }
}
