//! Concern detector: category, severity tier, and the keywords that fired.

use crate::patterns::PatternTable;
use serde::Serialize;
use solace_core::{ConcernKind, Severity};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConcernHit {
    pub kind: ConcernKind,
    pub severity: Severity,
    pub keywords: Vec<String>,
}

/// Every concern with at least one keyword present, in table order.
pub fn detect_concerns(table: &PatternTable, text: &str) -> Vec<ConcernHit> {
    table
        .concerns
        .iter()
        .filter_map(|rules| {
            let found = rules.matched_keywords(text);
            if found.is_empty() {
                return None;
            }
            let severity = rules.tier_for(&found);
            Some(ConcernHit {
                kind: rules.kind,
                severity,
                keywords: found.into_iter().map(str::to_string).collect(),
            })
        })
        .collect()
}
