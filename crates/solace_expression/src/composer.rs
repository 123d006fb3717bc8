use solace_core::config::ResponseConfig;
use solace_core::{
    choose, ConcernKind, ContentKey, ContentSource, NegativeMood, ReflectionTheme, Routine,
    RoutineKind, Sampler, Severity, Song,
};
use solace_limbic::MusicRequest;
use std::fmt::Write as _;
use std::sync::Arc;

const MUSIC_CLARIFICATION: &str = "I'd be happy to suggest some songs! What kind of mood are you in or what mood would you like to enhance? For example, happy, sad, calm, energetic, focused, or relaxed?";
const NO_ROUTINE: &str = "I don't have a specific wellness routine to suggest at the moment.";
const ROUTINE_CLOSING: &str = "Remember, the best routine is one you can stick with consistently. Start small by incorporating just 1-2 of these steps, then gradually add more as they become habits. Would you like me to suggest which steps to start with?";
const CONCERN_HEADER: &str =
    "I notice you might be experiencing some challenges. Here's a suggestion that might help:";
const SELF_HARM_CRISIS_HEADER: &str =
    "If you're having thoughts of harming yourself, please consider reaching out to one of these resources:";
const CRISIS_HEADER: &str =
    "If you're in crisis or feel unsafe, please reach out to one of these resources:";
const ENCOURAGEMENT_HEADER: &str =
    "I notice you might be feeling down. Here's something that might help:";
const ENCOURAGEMENT_CLOSING: &str = "Remember, it's okay to not be okay sometimes. Your feelings are valid, and you're not alone in them.";
const REFERRAL_NOTE: &str = "*Contact these professionals directly to confirm their current availability, fees, and whether they're accepting new clients.*";

/// Referral text plus the directory ids it lists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferralReply {
    pub text: String,
    pub therapist_ids: Vec<String>,
}

/// Renders replies from content banks.
#[derive(Clone)]
pub struct Composer {
    pub(crate) content: Arc<dyn ContentSource>,
    pub(crate) sampler: Arc<dyn Sampler>,
    pub(crate) responses: ResponseConfig,
}

impl Composer {
    pub fn new(
        content: Arc<dyn ContentSource>,
        sampler: Arc<dyn Sampler>,
        responses: ResponseConfig,
    ) -> Self {
        Self {
            content,
            sampler,
            responses,
        }
    }

    pub(crate) fn pick(&self, key: ContentKey) -> Option<String> {
        let lines = self.content.lines(key);
        choose(self.sampler.as_ref(), &lines).cloned()
    }

    /// Up to `count` songs for a catalog mood, sampled without replacement.
    pub fn sample_songs(&self, mood: &str, count: usize) -> Vec<Song> {
        let songs = self.content.songs(mood);
        self.sampler
            .distinct(songs.len(), count)
            .into_iter()
            .filter_map(|i| songs.get(i).cloned())
            .collect()
    }

    pub(crate) fn render_songs(songs: &[Song], mood: &str) -> String {
        let mut out = format!("Here are some songs that might amplify your {mood} mood:\n\n");
        for (i, song) in songs.iter().enumerate() {
            let _ = write!(
                out,
                "{}. \"{}\" by {}\n   Listen: {}\n\n",
                i + 1,
                song.title,
                song.artist,
                song.link
            );
        }
        out.push_str(
            "I hope these songs help enhance your mood! Let me know if you'd like more recommendations.",
        );
        out
    }

    fn alternative_moods(&self) -> String {
        let moods = self.content.song_moods();
        match moods.as_slice() {
            [] => String::new(),
            [only] => only.clone(),
            [init @ .., last] => format!("{}, or {}", init.join(", "), last),
        }
    }

    pub fn music(&self, request: &MusicRequest) -> String {
        let (Some(raw), Some(mood)) = (request.raw_mood.as_deref(), request.mood.as_deref()) else {
            return MUSIC_CLARIFICATION.to_string();
        };
        let songs = self.sample_songs(mood, self.responses.song_count);
        if songs.is_empty() {
            let alternatives = self.alternative_moods();
            if alternatives.is_empty() {
                return format!("I don't have specific song recommendations for a {raw} mood right now.");
            }
            return format!(
                "I don't have specific song recommendations for a {raw} mood, but I can suggest songs for {alternatives} moods. Let me know which you'd prefer!"
            );
        }
        Self::render_songs(&songs, raw)
    }

    pub fn referral(&self) -> ReferralReply {
        let directory = self.content.therapists();
        let picked: Vec<_> = self
            .sampler
            .distinct(directory.len(), self.responses.referral_count)
            .into_iter()
            .filter_map(|i| directory.get(i))
            .collect();

        let mut out = String::from("# Mental Health Professional Recommendations\n\n");
        if picked.is_empty() {
            out.push_str("I couldn't pull up individual therapist listings right now, but these resources can help you find support:\n\n");
        } else {
            out.push_str("Here are some therapists who might be able to help you:\n\n");
        }
        for (i, t) in picked.iter().enumerate() {
            let _ = write!(out, "## {}. {}, {}\n\n", i + 1, t.name, t.title);
            let _ = write!(out, "**Specialties**: {}\n\n", t.specialties.join(", "));
            let _ = write!(out, "**Approach**: {}\n\n", t.approach);
            let _ = write!(out, "**Education**: {}\n\n", t.education);
            let _ = write!(out, "**Years of Experience**: {}\n\n", t.years_experience);
            let _ = write!(out, "**Practice**: {}, {}\n\n", t.practice, t.address);
            if t.online {
                out.push_str("**Offers virtual/online sessions**: Yes\n\n");
            }
            let _ = write!(out, "**Session Format**: {}\n\n", t.session_format);
            let _ = write!(out, "**Session Cost**: {}\n\n", t.session_cost);
            let _ = write!(
                out,
                "**Contact**:\n- Phone: {}\n- Email: {}\n- Website: {}\n\n",
                t.phone, t.email, t.website
            );
            let _ = write!(out, "**Insurance**: {}\n\n", t.insurance);
            let _ = write!(out, "**Languages**: {}\n\n", t.languages.join(", "));
        }

        let sections = self.content.referral_resources();
        if !sections.is_empty() {
            out.push_str("## Additional Resources\n\n");
            for section in &sections {
                let _ = write!(out, "### {}\n\n", section.heading);
                for link in &section.links {
                    let _ = writeln!(out, "- **{}**: {}", link.name, link.detail);
                }
                out.push('\n');
            }
        }
        out.push_str(REFERRAL_NOTE);

        ReferralReply {
            text: out,
            therapist_ids: picked.iter().map(|t| t.id.clone()).collect(),
        }
    }

    pub fn routine(&self, kind: RoutineKind) -> String {
        let mut routines = self.content.routines(kind);
        if routines.is_empty() && kind != RoutineKind::General {
            routines = self.content.routines(RoutineKind::General);
        }
        match choose(self.sampler.as_ref(), &routines) {
            Some(routine) => render_routine(routine),
            None => NO_ROUTINE.to_string(),
        }
    }

    pub fn positive(&self) -> String {
        let response = self
            .pick(ContentKey::PositiveResponse)
            .unwrap_or_else(|| "That's wonderful to hear!".to_string());
        match self.pick(ContentKey::Affirmation) {
            Some(affirmation) => format!("{response}\n\n{affirmation}"),
            None => response,
        }
    }

    /// Quote, lovable line and a closing validation for a primary mood.
    pub fn encouragement(&self, mood: NegativeMood) -> String {
        let mut out = format!("{ENCOURAGEMENT_HEADER}\n\n");
        if let Some(quote) = self.pick(ContentKey::EncouragingQuote(mood)) {
            let _ = write!(out, "\"{quote}\"\n\n");
        }
        if let Some(line) = self.pick(ContentKey::LovableLine(mood)) {
            let _ = write!(out, "{line}\n\n");
        }
        out.push_str(ENCOURAGEMENT_CLOSING);
        out
    }

    pub fn reflection(&self, theme: ReflectionTheme) -> String {
        let response = self
            .pick(ContentKey::ReflectionResponse(theme))
            .or_else(|| self.pick(ContentKey::ReflectionResponse(ReflectionTheme::General)))
            .unwrap_or_else(|| "Thank you for sharing that with me.".to_string());
        let follow_up = self
            .pick(ContentKey::FollowUpQuestion(theme))
            .or_else(|| self.pick(ContentKey::FollowUpQuestion(ReflectionTheme::General)));
        match follow_up {
            Some(q) => format!("{response}\n\n{q}"),
            None => response,
        }
    }

    pub fn coping_strategy(&self, kind: ConcernKind, severity: Severity) -> Option<String> {
        self.pick(ContentKey::CopingStrategy(kind, severity))
    }

    pub fn crisis_block(&self, self_harm: bool) -> String {
        let header = if self_harm {
            SELF_HARM_CRISIS_HEADER
        } else {
            CRISIS_HEADER
        };
        let mut out = format!("{header}\n\n");
        for line in self.content.crisis_lines() {
            let _ = writeln!(out, "• {}: {}", line.name, line.contact);
        }
        out.trim_end().to_string()
    }

    /// Strategies, optional crisis block, and a progress remark for
    /// improving concerns. `None` when there is nothing to say.
    pub fn concern_block(
        &self,
        strategies: &[String],
        crisis: Option<bool>,
        improving: &[ConcernKind],
    ) -> Option<String> {
        let mut parts = Vec::new();
        if !strategies.is_empty() {
            let mut block = format!("{CONCERN_HEADER}\n\n");
            for s in strategies {
                let _ = write!(block, "• {s}\n\n");
            }
            parts.push(block.trim_end().to_string());
        }
        if let Some(self_harm) = crisis {
            parts.push(self.crisis_block(self_harm));
        }
        if parts.is_empty() {
            return None;
        }
        if let Some(remark) = progress_remark(improving) {
            parts.push(remark);
        }
        Some(parts.join("\n\n"))
    }
}

pub(crate) fn progress_remark(improving: &[ConcernKind]) -> Option<String> {
    if improving.is_empty() {
        return None;
    }
    let labels: Vec<&str> = improving.iter().map(|k| k.label()).collect();
    Some(format!(
        "I've noticed you seem to be doing better with {}. That's great progress!",
        labels.join(", ")
    ))
}

fn render_routine(routine: &Routine) -> String {
    let mut out = format!("# {}\n\n{}\n\n## Daily Steps:\n", routine.title, routine.description);
    for (i, step) in routine.steps.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", i + 1, step);
    }
    out.push_str("\n## Benefits:\n");
    for benefit in &routine.benefits {
        let _ = writeln!(out, "• {benefit}");
    }
    out.push('\n');
    out.push_str(ROUTINE_CLOSING);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use solace_content::StaticContent;
    use solace_core::{CrisisLine, ResourceSection, RngSampler, Therapist};
    use std::collections::HashSet;

    fn composer(seed: u64) -> Composer {
        Composer::new(
            Arc::new(StaticContent::new()),
            Arc::new(RngSampler::seeded(seed)),
            ResponseConfig::default(),
        )
    }

    /// Content source with nothing in it.
    struct Empty;

    impl ContentSource for Empty {
        fn lines(&self, _: ContentKey) -> Vec<String> {
            Vec::new()
        }
        fn crisis_lines(&self) -> Vec<CrisisLine> {
            Vec::new()
        }
        fn routines(&self, _: RoutineKind) -> Vec<Routine> {
            Vec::new()
        }
        fn therapists(&self) -> Vec<Therapist> {
            Vec::new()
        }
        fn referral_resources(&self) -> Vec<ResourceSection> {
            StaticContent::new().referral_resources()
        }
        fn songs(&self, _: &str) -> Vec<Song> {
            Vec::new()
        }
        fn song_moods(&self) -> Vec<String> {
            Vec::new()
        }
    }

    fn empty() -> Composer {
        Composer::new(
            Arc::new(Empty),
            Arc::new(RngSampler::seeded(0)),
            ResponseConfig::default(),
        )
    }

    fn music_request(raw: Option<&str>, mood: Option<&str>) -> MusicRequest {
        MusicRequest {
            raw_mood: raw.map(str::to_string),
            mood: mood.map(str::to_string),
        }
    }

    #[test]
    fn test_music_lists_three_distinct_songs() {
        let text = composer(7).music(&music_request(Some("joy"), Some("happy")));
        assert!(text.starts_with("Here are some songs that might amplify your joy mood:"));
        assert!(text.contains("1. \""));
        assert!(text.contains("3. \""));
        assert!(!text.contains("4. \""));
        let titles: HashSet<_> = text.lines().filter(|l| l.contains(" by ")).collect();
        assert_eq!(titles.len(), 3);
    }

    #[test]
    fn test_music_unknown_mood_offers_alternatives() {
        let text = composer(1).music(&music_request(Some("stressed"), Some("stressed")));
        assert_eq!(
            text,
            "I don't have specific song recommendations for a stressed mood, but I can suggest songs for happy, sad, calm, energetic, focused, or relaxed moods. Let me know which you'd prefer!"
        );
    }

    #[test]
    fn test_music_without_mood_asks() {
        let text = composer(1).music(&music_request(None, None));
        assert_eq!(text, MUSIC_CLARIFICATION);
    }

    #[test]
    fn test_referral_has_three_distinct_entries() {
        for seed in 0..20 {
            let reply = composer(seed).referral();
            assert_eq!(reply.therapist_ids.len(), 3);
            let unique: HashSet<_> = reply.therapist_ids.iter().collect();
            assert_eq!(unique.len(), 3);
            assert!(reply.text.contains("## Additional Resources"));
            assert!(reply.text.ends_with(REFERRAL_NOTE));
        }
    }

    #[test]
    fn test_referral_with_empty_directory_keeps_resources() {
        let reply = empty().referral();
        assert!(reply.therapist_ids.is_empty());
        assert!(reply.text.contains("### Crisis Support (Available 24/7)"));
    }

    #[test]
    fn test_routine_render() {
        let text = composer(3).routine(RoutineKind::Evening);
        assert!(text.starts_with("# "));
        assert!(text.contains("## Daily Steps:\n1. "));
        assert!(text.contains("## Benefits:\n• "));
        assert!(text.ends_with(ROUTINE_CLOSING));
        assert_eq!(empty().routine(RoutineKind::Morning), NO_ROUTINE);
    }

    #[test]
    fn test_positive_and_encouragement() {
        let c = composer(5);
        let positive = c.positive();
        assert!(positive.contains("\n\n"));

        let text = c.encouragement(NegativeMood::Sadness);
        assert!(text.starts_with(ENCOURAGEMENT_HEADER));
        assert!(text.contains("\n\n\""));
        assert!(text.ends_with(ENCOURAGEMENT_CLOSING));
    }

    #[test]
    fn test_empty_banks_still_render() {
        let c = empty();
        assert_eq!(c.positive(), "That's wonderful to hear!");
        assert_eq!(
            c.reflection(ReflectionTheme::Fears),
            "Thank you for sharing that with me."
        );
        assert!(c.coping_strategy(ConcernKind::Anger, Severity::Low).is_none());
    }

    #[test]
    fn test_concern_block() {
        let c = composer(2);
        assert!(c.concern_block(&[], None, &[ConcernKind::Anger]).is_none());

        let block = c
            .concern_block(
                &["Breathe slowly.".to_string()],
                Some(true),
                &[ConcernKind::Anger, ConcernKind::SelfHarm],
            )
            .unwrap();
        assert!(block.starts_with(CONCERN_HEADER));
        assert!(block.contains("• Breathe slowly."));
        assert!(block.contains(SELF_HARM_CRISIS_HEADER));
        assert!(block.contains("National Suicide Prevention Lifeline"));
        assert!(block.ends_with(
            "I've noticed you seem to be doing better with anger, self harm. That's great progress!"
        ));
    }

    #[test]
    fn test_same_seed_same_text() {
        assert_eq!(composer(11).positive(), composer(11).positive());
        assert_eq!(
            composer(11).referral().therapist_ids,
            composer(11).referral().therapist_ids
        );
    }
}
