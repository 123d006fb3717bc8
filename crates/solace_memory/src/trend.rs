//! Trend analyzer: is each concern still active, or fading?

use crate::session::Session;
use serde::Serialize;
use solace_core::config::SessionConfig;
use solace_core::{ConcernKind, Severity};
use solace_limbic::PatternTable;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ConcernTrend {
    NotDetected,
    ActiveLow,
    ActiveMedium,
    ActiveHigh,
    /// Seen before, absent from the recent window.
    Improving,
}

impl ConcernTrend {
    fn active(severity: Option<Severity>) -> Self {
        match severity {
            Some(Severity::High) => ConcernTrend::ActiveHigh,
            Some(Severity::Medium) => ConcernTrend::ActiveMedium,
            _ => ConcernTrend::ActiveLow,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendReport {
    InsufficientData,
    Trends(BTreeMap<ConcernKind, ConcernTrend>),
}

impl TrendReport {
    /// Concerns marked improving, in taxonomy order.
    pub fn improving(&self) -> Vec<ConcernKind> {
        match self {
            TrendReport::InsufficientData => Vec::new(),
            TrendReport::Trends(trends) => trends
                .iter()
                .filter(|(_, t)| **t == ConcernTrend::Improving)
                .map(|(k, _)| *k)
                .collect(),
        }
    }

    pub fn get(&self, kind: ConcernKind) -> Option<ConcernTrend> {
        match self {
            TrendReport::InsufficientData => None,
            TrendReport::Trends(trends) => trends.get(&kind).copied(),
        }
    }
}

/// Read-only view over a session's message log.
#[derive(Debug, Clone)]
pub struct TrendAnalyzer {
    table: &'static PatternTable,
    min_messages: usize,
    window: usize,
}

impl TrendAnalyzer {
    pub fn new(min_messages: usize, window: usize) -> Self {
        Self {
            table: PatternTable::standard(),
            min_messages,
            window,
        }
    }

    pub fn from_config(cfg: &SessionConfig) -> Self {
        Self::new(cfg.trend_min_messages, cfg.trend_window)
    }

    pub fn analyze(&self, session: &Session) -> TrendReport {
        if session.messages.len() < self.min_messages {
            return TrendReport::InsufficientData;
        }
        let recent = session.recent_text(self.window);
        let trends = ConcernKind::ALL
            .into_iter()
            .map(|kind| {
                let record = session.concerns.get(&kind);
                let trend = match record {
                    None => ConcernTrend::NotDetected,
                    Some(r) if r.count == 0 => ConcernTrend::NotDetected,
                    Some(r) => {
                        let mentioned = self
                            .table
                            .concern(kind)
                            .is_some_and(|rules| rules.mentions(&recent));
                        if mentioned {
                            ConcernTrend::active(r.severity)
                        } else {
                            ConcernTrend::Improving
                        }
                    }
                };
                (kind, trend)
            })
            .collect();
        TrendReport::Trends(trends)
    }
}

impl Default for TrendAnalyzer {
    fn default() -> Self {
        Self::from_config(&SessionConfig::default())
    }
}
