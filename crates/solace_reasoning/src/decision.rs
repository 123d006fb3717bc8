use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use solace_core::ConcernKind;
use solace_expression::Composer;
use solace_limbic::Signals;
use solace_memory::{Session, TrendReport};

// ============================================================================
// Branches
// ============================================================================

/// Which rule produced the reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Branch {
    EmptyInput,
    Music,
    Referral,
    Routine,
    PositiveMood,
    NegativeMood,
    Reflection,
    /// Fallback text augmented with the concern block.
    Concern,
    Fallback,
}

impl Branch {
    pub fn as_str(&self) -> &'static str {
        match self {
            Branch::EmptyInput => "empty_input",
            Branch::Music => "music",
            Branch::Referral => "referral",
            Branch::Routine => "routine",
            Branch::PositiveMood => "positive_mood",
            Branch::NegativeMood => "negative_mood",
            Branch::Reflection => "reflection",
            Branch::Concern => "concern",
            Branch::Fallback => "fallback",
        }
    }

    /// Branches that win before the concern rule is consulted.
    pub fn outranks_concern(&self) -> bool {
        matches!(
            self,
            Branch::Music
                | Branch::Referral
                | Branch::Routine
                | Branch::PositiveMood
                | Branch::NegativeMood
                | Branch::Reflection
        )
    }
}

// ============================================================================
// Turn context
// ============================================================================

/// Everything a rule may read, plus the session it may stamp.
pub struct Turn<'a> {
    pub signals: &'a Signals,
    pub session: &'a mut Session,
    pub trend: &'a TrendReport,
    pub composer: &'a Composer,
    pub now: DateTime<Utc>,
    /// Set by a rule that rendered the crisis block.
    pub crisis: bool,
}

// ============================================================================
// ReplyRule trait
// ============================================================================

pub trait ReplyRule: Send + Sync {
    /// Text for this turn, or `None` to pass to the next rule.
    fn evaluate(&self, turn: &mut Turn<'_>) -> Option<String>;

    fn branch(&self) -> Branch;

    /// A combinable rule's text is held back and appended to the generic
    /// fallback instead of short-circuiting.
    fn combinable(&self) -> bool {
        false
    }
}

/// Result of walking the rule list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decision {
    pub branch: Branch,
    /// Final text when a short-circuit rule won; `None` defers to the fallback.
    pub reply: Option<String>,
    /// Block to append after the fallback text.
    pub augment: Option<String>,
}

// ============================================================================
// DecisionRouter
// ============================================================================

pub struct DecisionRouter {
    rules: Vec<Box<dyn ReplyRule>>,
}

impl Default for DecisionRouter {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl DecisionRouter {
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Music > referral > routine > positive > negative > reflection > concern.
    pub fn with_defaults() -> Self {
        let mut router = Self::new();
        router.add_rule(Box::new(MusicRule));
        router.add_rule(Box::new(ReferralRule));
        router.add_rule(Box::new(RoutineRule));
        router.add_rule(Box::new(PositiveMoodRule));
        router.add_rule(Box::new(NegativeMoodRule));
        router.add_rule(Box::new(ReflectionRule));
        router.add_rule(Box::new(ConcernRule));
        router
    }

    pub fn add_rule(&mut self, rule: Box<dyn ReplyRule>) {
        self.rules.push(rule);
    }

    /// First non-combinable rule with content wins. Falls back to the generic
    /// fallback, carrying any combinable rule's text.
    pub fn route(&self, turn: &mut Turn<'_>) -> Decision {
        let mut augment: Option<(Branch, String)> = None;
        for rule in &self.rules {
            let Some(text) = rule.evaluate(turn) else {
                continue;
            };
            if rule.combinable() {
                tracing::debug!(rule = rule.branch().as_str(), "Combinable rule produced content");
                augment = Some((rule.branch(), text));
                continue;
            }
            tracing::debug!(rule = rule.branch().as_str(), "Rule matched");
            return Decision {
                branch: rule.branch(),
                reply: Some(text),
                augment: None,
            };
        }
        match augment {
            Some((branch, text)) => Decision {
                branch,
                reply: None,
                augment: Some(text),
            },
            None => Decision {
                branch: Branch::Fallback,
                reply: None,
                augment: None,
            },
        }
    }
}

// ============================================================================
// Built-in rules
// ============================================================================

pub struct MusicRule;

impl ReplyRule for MusicRule {
    fn evaluate(&self, turn: &mut Turn<'_>) -> Option<String> {
        let request = turn.signals.music.as_ref()?;
        Some(turn.composer.music(request))
    }

    fn branch(&self) -> Branch {
        Branch::Music
    }
}

pub struct ReferralRule;

impl ReplyRule for ReferralRule {
    fn evaluate(&self, turn: &mut Turn<'_>) -> Option<String> {
        turn.signals.referral.as_ref()?;
        let reply = turn.composer.referral();
        tracing::debug!(therapists = ?reply.therapist_ids, "Referral composed");
        Some(reply.text)
    }

    fn branch(&self) -> Branch {
        Branch::Referral
    }
}

pub struct RoutineRule;

impl ReplyRule for RoutineRule {
    fn evaluate(&self, turn: &mut Turn<'_>) -> Option<String> {
        let request = turn.signals.routine.as_ref()?;
        Some(turn.composer.routine(request.kind))
    }

    fn branch(&self) -> Branch {
        Branch::Routine
    }
}

/// No cooldown: fires every time it matches.
pub struct PositiveMoodRule;

impl ReplyRule for PositiveMoodRule {
    fn evaluate(&self, turn: &mut Turn<'_>) -> Option<String> {
        turn.signals.positive.as_ref()?;
        Some(turn.composer.positive())
    }

    fn branch(&self) -> Branch {
        Branch::PositiveMood
    }
}

/// Encouragement for the primary mood. A mood still in its cooldown, or a
/// hit with no primary mood, yields nothing and the next rule is tried.
pub struct NegativeMoodRule;

impl ReplyRule for NegativeMoodRule {
    fn evaluate(&self, turn: &mut Turn<'_>) -> Option<String> {
        let mood = turn.signals.negative.as_ref()?.primary()?;
        if turn.session.encouragement_on_cooldown(mood, turn.now) {
            tracing::debug!(mood = mood.as_str(), "Encouragement suppressed");
            return None;
        }
        let text = turn.composer.encouragement(mood);
        turn.session.mark_encouragement(mood, turn.now);
        Some(text)
    }

    fn branch(&self) -> Branch {
        Branch::NegativeMood
    }
}

pub struct ReflectionRule;

impl ReplyRule for ReflectionRule {
    fn evaluate(&self, turn: &mut Turn<'_>) -> Option<String> {
        let hit = turn.signals.reflection.as_ref()?;
        Some(turn.composer.reflection(hit.primary()))
    }

    fn branch(&self) -> Branch {
        Branch::Reflection
    }
}

/// Coping strategies outside their cooldown plus the crisis block.
/// Combinable: the block rides along with the fallback text.
pub struct ConcernRule;

impl ReplyRule for ConcernRule {
    fn evaluate(&self, turn: &mut Turn<'_>) -> Option<String> {
        if turn.signals.concerns.is_empty() {
            return None;
        }

        let mut strategies = Vec::new();
        for hit in &turn.signals.concerns {
            if turn.session.strategy_on_cooldown(hit.kind, turn.now) {
                tracing::debug!(concern = hit.kind.as_str(), "Strategy suppressed");
                continue;
            }
            if let Some(strategy) = turn.composer.coping_strategy(hit.kind, hit.severity) {
                strategies.push(strategy);
                turn.session.mark_strategy(hit.kind, turn.now);
            }
        }

        let crisis = turn
            .signals
            .needs_crisis_resources()
            .then(|| turn.signals.concern(ConcernKind::SelfHarm).is_some());
        let improving = turn.trend.improving();
        let block = turn.composer.concern_block(&strategies, crisis, &improving)?;
        turn.crisis |= crisis.is_some();
        Some(block)
    }

    fn branch(&self) -> Branch {
        Branch::Concern
    }

    fn combinable(&self) -> bool {
        true
    }
}

// ============================================================================
// Tests
// ============================================================================
