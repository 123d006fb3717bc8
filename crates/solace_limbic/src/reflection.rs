//! Deep-reflection detector for personal narrative and self-reflective talk.

use crate::patterns::PatternTable;
use serde::Serialize;
use solace_core::ReflectionTheme;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReflectionHit {
    /// Themes in table order; never empty.
    pub themes: Vec<ReflectionTheme>,
    pub rules: Vec<String>,
}

impl ReflectionHit {
    /// First theme by table order.
    pub fn primary(&self) -> ReflectionTheme {
        self.themes
            .first()
            .copied()
            .unwrap_or(ReflectionTheme::General)
    }
}

pub fn detect_reflection(table: &PatternTable, text: &str) -> Option<ReflectionHit> {
    let rules: Vec<String> = table
        .reflection
        .hits(text)
        .into_iter()
        .map(str::to_string)
        .collect();
    if rules.is_empty() {
        return None;
    }
    let mut themes: Vec<ReflectionTheme> = table
        .reflection_themes
        .iter()
        .filter(|(_, keywords)| keywords.is_match(text))
        .map(|(theme, _)| *theme)
        .collect();
    if themes.is_empty() {
        themes.push(ReflectionTheme::General);
    }
    Some(ReflectionHit { themes, rules })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detect(text: &str) -> Option<ReflectionHit> {
        detect_reflection(PatternTable::standard(), text)
    }

    #[test]
    fn test_not_reflective() {
        assert!(detect("what time is it").is_none());
    }

    #[test]
    fn test_primary_follows_table_order() {
        // both past experiences ("growing up") and regrets ("miss")
        let hit = detect("growing up i miss my grandmother").unwrap();
        assert_eq!(
            hit.themes,
            vec![ReflectionTheme::PastExperiences, ReflectionTheme::Regrets]
        );
        assert_eq!(hit.primary(), ReflectionTheme::PastExperiences);
    }

    #[test]
    fn test_defaults_to_general() {
        let hit = detect("i feel like the sky is big").unwrap();
        assert_eq!(hit.themes, vec![ReflectionTheme::General]);
    }

    #[test]
    fn test_self_doubt() {
        let hit = detect("i'm not smart enough for this").unwrap();
        assert_eq!(hit.primary(), ReflectionTheme::SelfDoubt);
    }
}
