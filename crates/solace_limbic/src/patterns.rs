//! The pattern table: every rule the detectors match against.
//!
//! Rules are compiled once into [`RuleSet`]s. A rule's source string doubles
//! as its identifier in detection results.

use regex::{Regex, RegexSet};
use solace_core::{ConcernKind, NegativeMood, ReflectionTheme, RoutineKind, Severity};
use std::sync::LazyLock;

/// An ordered list of regex rules matched together.
#[derive(Debug, Clone)]
pub struct RuleSet {
    set: RegexSet,
    rules: Vec<String>,
}

impl RuleSet {
    pub fn new<I, S>(rules: I) -> Result<Self, regex::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let rules: Vec<String> = rules.into_iter().map(Into::into).collect();
        let set = RegexSet::new(&rules)?;
        Ok(Self { set, rules })
    }

    /// Literal keywords matched as whole words.
    pub fn keywords(words: &[&str]) -> Result<Self, regex::Error> {
        Self::new(words.iter().map(|w| format!(r"\b{}\b", regex::escape(w))))
    }

    /// Literal keywords anchored at a word start, so inflections count
    /// (`panic` hits "panicking"). Entries in `whole` must match the whole word.
    pub fn stems(words: &[&str], whole: &[&str]) -> Result<Self, regex::Error> {
        Self::new(words.iter().map(|w| {
            if whole.contains(w) {
                format!(r"\b{}\b", regex::escape(w))
            } else {
                format!(r"\b{}", regex::escape(w))
            }
        }))
    }

    pub fn is_match(&self, text: &str) -> bool {
        self.set.is_match(text)
    }

    /// Source strings of every rule that matches, in table order.
    pub fn hits(&self, text: &str) -> Vec<&str> {
        self.set
            .matches(text)
            .into_iter()
            .map(|i| self.rules[i].as_str())
            .collect()
    }

    /// Number of distinct rules that match.
    pub fn count(&self, text: &str) -> usize {
        self.set.matches(text).iter().count()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

/// Keywords of one concern plus the tier each keyword belongs to.
#[derive(Debug, Clone)]
pub struct ConcernRules {
    pub kind: ConcernKind,
    pub keywords: Vec<&'static str>,
    matcher: RuleSet,
    /// Checked in [`Severity::DESCENDING`] order.
    tiers: Vec<(Severity, Vec<&'static str>)>,
}

impl ConcernRules {
    pub fn new(
        kind: ConcernKind,
        keywords: &[&'static str],
        tiers: &[(Severity, &[&'static str])],
    ) -> Result<Self, regex::Error> {
        let mut tiers: Vec<(Severity, Vec<&'static str>)> =
            tiers.iter().map(|(s, words)| (*s, words.to_vec())).collect();
        tiers.sort_by(|a, b| b.0.cmp(&a.0));
        Ok(Self {
            kind,
            keywords: keywords.to_vec(),
            matcher: RuleSet::stems(keywords, WHOLE_WORD_KEYWORDS)?,
            tiers,
        })
    }

    /// Keywords present in the text, in table order.
    pub fn matched_keywords(&self, text: &str) -> Vec<&'static str> {
        self.matcher
            .set
            .matches(text)
            .into_iter()
            .map(|i| self.keywords[i])
            .collect()
    }

    pub fn mentions(&self, text: &str) -> bool {
        self.matcher.is_match(text)
    }

    /// First tier, highest first, holding any of the found keywords.
    /// A keyword outside every tier counts as low.
    pub fn tier_for(&self, found: &[&str]) -> Severity {
        self.tiers
            .iter()
            .find(|(_, words)| words.iter().any(|w| found.contains(w)))
            .map(|(severity, _)| *severity)
            .unwrap_or(Severity::Low)
    }
}

/// Every rule the detectors consult.
#[derive(Debug, Clone)]
pub struct PatternTable {
    pub concerns: Vec<ConcernRules>,
    pub negative_moods: Vec<(NegativeMood, RuleSet)>,
    pub positive: RuleSet,
    pub reflection: RuleSet,
    pub reflection_themes: Vec<(ReflectionTheme, RuleSet)>,
    pub routine: RuleSet,
    pub routine_kinds: Vec<(RoutineKind, RuleSet)>,
    pub referral: RuleSet,
    pub music: RuleSet,
    /// Tried in order; the first hit's capture group is the mood.
    pub mood_extractors: Vec<Regex>,
    pub mood_vocabulary: Vec<&'static str>,
    pub mood_synonyms: Vec<(&'static str, &'static str)>,
}

static STANDARD: LazyLock<PatternTable> =
    LazyLock::new(|| PatternTable::build().expect("built-in pattern table compiles"));

impl PatternTable {
    /// Shared, lazily compiled built-in table.
    pub fn standard() -> &'static PatternTable {
        &STANDARD
    }

    pub fn build() -> Result<Self, regex::Error> {
        let concerns = vec![
            ConcernRules::new(
                ConcernKind::Depression,
                DEPRESSION_KEYWORDS,
                &[
                    (Severity::Low, &["sad", "tired", "no energy", "can't sleep", "sleeping too much"]),
                    (
                        Severity::Medium,
                        &["depressed", "depression", "hopeless", "no interest", "no motivation", "don't enjoy"],
                    ),
                    (
                        Severity::High,
                        &["worthless", "empty", "life is pointless", "no point", "giving up", "end it all"],
                    ),
                ],
            )?,
            ConcernRules::new(
                ConcernKind::Anxiety,
                ANXIETY_KEYWORDS,
                &[
                    (Severity::Low, &["worried", "nervous", "stress", "stressed", "overthinking"]),
                    (
                        Severity::Medium,
                        &["anxious", "anxiety", "can't relax", "racing thoughts", "constant worry", "what if"],
                    ),
                    (
                        Severity::High,
                        &[
                            "panic", "fear", "scared", "heart racing", "breathing fast", "sweating",
                            "trembling", "shaking", "something bad",
                        ],
                    ),
                ],
            )?,
            ConcernRules::new(
                ConcernKind::Anger,
                ANGER_KEYWORDS,
                &[
                    (Severity::Low, &["annoyed", "irritated", "frustrated"]),
                    (Severity::Medium, &["angry", "anger", "mad", "hate", "resent", "resentment"]),
                    (
                        Severity::High,
                        &["rage", "furious", "explode", "lash out", "break things", "hurt someone", "violent thoughts"],
                    ),
                ],
            )?,
            ConcernRules::new(
                ConcernKind::SelfHarm,
                SELF_HARM_KEYWORDS,
                &[
                    (Severity::Medium, &["hurt myself", "harm myself", "self-harm", "self harm"]),
                    (
                        Severity::High,
                        &[
                            "cut myself", "cutting", "suicide", "suicidal", "kill myself", "end my life",
                            "better off dead", "no reason to live", "can't go on", "want to die",
                            "don't want to be here",
                        ],
                    ),
                ],
            )?,
        ];

        let negative_moods = vec![
            (NegativeMood::Sadness, RuleSet::new(sadness_rules())?),
            (NegativeMood::Depression, RuleSet::new(depression_rules())?),
            (NegativeMood::Anxiety, RuleSet::new(anxiety_rules())?),
            (NegativeMood::Loneliness, RuleSet::new(loneliness_rules())?),
            (NegativeMood::BadMood, RuleSet::new(bad_mood_rules())?),
        ];

        let reflection_themes = vec![
            (
                ReflectionTheme::PastExperiences,
                RuleSet::keywords(&[
                    "used to", "would", "when i was", "in my past", "growing up", "childhood",
                    "remember when", "experienced", "went through", "survived", "been through",
                ])?,
            ),
            (
                ReflectionTheme::SelfReflection,
                RuleSet::keywords(&[
                    "realized", "thinking about", "understand now", "learned", "discovered", "changed",
                    "grown", "improved", "overcome",
                ])?,
            ),
            (
                ReflectionTheme::Aspirations,
                RuleSet::keywords(&["want to become", "goal is", "dream is", "wish i could", "trying to"])?,
            ),
            (
                ReflectionTheme::Regrets,
                RuleSet::keywords(&["regret", "miss", "lost", "made a mistake", "hurt someone", "failed"])?,
            ),
            (
                ReflectionTheme::Fears,
                RuleSet::keywords(&["afraid", "worried", "scared", "concerned"])?,
            ),
            (
                ReflectionTheme::Gratitude,
                RuleSet::keywords(&["proud", "grateful", "thankful", "appreciate", "accomplished", "achieved"])?,
            ),
            (
                ReflectionTheme::Trauma,
                RuleSet::keywords(&["hurt", "abused", "bullied", "rejected", "abandoned"])?,
            ),
            (
                ReflectionTheme::Loneliness,
                RuleSet::keywords(&["alone", "lonely", "isolated", "different", "don't fit in", "don't belong"])?,
            ),
            (
                ReflectionTheme::SelfDoubt,
                RuleSet::keywords(&[
                    "not good enough", "not worthy", "not deserving", "not lovable", "not capable",
                    "not strong enough", "not smart enough", "not talented enough",
                ])?,
            ),
        ];

        let routine_kinds = vec![
            (
                RoutineKind::Morning,
                RuleSet::keywords(&["morning", "wake up", "start the day", "early", "sunrise", "breakfast", "am"])?,
            ),
            (
                RoutineKind::Evening,
                RuleSet::keywords(&["evening", "night", "before bed", "bedtime", "sleep", "pm", "sunset"])?,
            ),
            (
                RoutineKind::Mental,
                RuleSet::keywords(&[
                    "mental", "mind", "brain", "cognitive", "emotional", "mood", "stress", "anxiety",
                    "depression", "psychological",
                ])?,
            ),
            (
                RoutineKind::Physical,
                RuleSet::keywords(&[
                    "physical", "body", "exercise", "workout", "fitness", "strength", "health", "energy",
                    "active",
                ])?,
            ),
            (
                RoutineKind::General,
                RuleSet::keywords(&[
                    "wellness", "wellbeing", "well-being", "health", "routine", "daily", "habits",
                    "lifestyle", "practices", "activities",
                ])?,
            ),
        ];

        let mood_extractors = MOOD_EXTRACTORS
            .iter()
            .map(|p| Regex::new(p))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            concerns,
            negative_moods,
            positive: RuleSet::new(positive_rules().into_iter().map(|r| format!(r"\b{r}\b")))?,
            reflection: RuleSet::new(REFLECTION_RULES.iter().map(|r| format!(r"\b{r}\b")))?,
            reflection_themes,
            routine: RuleSet::new(ROUTINE_RULES.iter().copied())?,
            routine_kinds,
            referral: RuleSet::new(REFERRAL_RULES.iter().copied())?,
            music: RuleSet::new(MUSIC_RULES.iter().copied())?,
            mood_extractors,
            mood_vocabulary: MOOD_VOCABULARY.to_vec(),
            mood_synonyms: MOOD_SYNONYMS.to_vec(),
        })
    }

    pub fn concern(&self, kind: ConcernKind) -> Option<&ConcernRules> {
        self.concerns.iter().find(|c| c.kind == kind)
    }
}

// ============================================================================
// Concern keywords
// ============================================================================

/// Concern keywords whose stem is the start of unrelated words ("made").
const WHOLE_WORD_KEYWORDS: &[&str] = &["mad"];

const DEPRESSION_KEYWORDS: &[&str] = &[
    "depressed", "depression", "sad", "hopeless", "worthless", "empty", "no energy",
    "tired all the time", "can't sleep", "sleeping too much", "no interest", "no motivation",
    "don't enjoy", "don't care anymore", "life is pointless", "no point", "giving up", "end it all",
];

const ANXIETY_KEYWORDS: &[&str] = &[
    "anxious", "anxiety", "worried", "panic", "fear", "scared", "nervous", "stress", "stressed",
    "overthinking", "can't relax", "racing thoughts", "heart racing", "breathing fast", "sweating",
    "trembling", "shaking", "constant worry", "what if", "something bad",
];

const ANGER_KEYWORDS: &[&str] = &[
    "angry", "anger", "mad", "frustrated", "irritated", "annoyed", "rage", "furious", "hate",
    "resent", "resentment", "explode", "lash out", "break things", "hurt someone", "violent thoughts",
];

const SELF_HARM_KEYWORDS: &[&str] = &[
    "hurt myself", "harm myself", "cut myself", "cutting", "self-harm", "self harm", "suicide",
    "suicidal", "kill myself", "end my life", "better off dead", "no reason to live", "can't go on",
    "want to die", "don't want to be here",
];

// ============================================================================
// Mood phrases
// ============================================================================

/// `i'm X` / `i am feeling X` / `i feel really X` for every state.
fn feeling_rules(states: &[&str]) -> Vec<String> {
    states
        .iter()
        .flat_map(|state| {
            [
                format!(r"i(?:'m| am) (?:feeling )?{state}"),
                format!(r"i feel (?:so |really |very |extremely )?{state}"),
            ]
        })
        .collect()
}

fn with_extra(mut rules: Vec<String>, extra: &[&str]) -> Vec<String> {
    rules.extend(extra.iter().map(|s| s.to_string()));
    rules
}

fn sadness_rules() -> Vec<String> {
    with_extra(
        feeling_rules(&[
            "sad", "down", "blue", "unhappy", "miserable", "heartbroken", "low", "gloomy",
            "melancholy", "sorrowful", "grief", "distressed", "disheartened", "despondent",
            "dejected", "downcast", "downhearted", "dismal", "dreary", "weepy", "upset",
        ]),
        &[
            r"i want to cry",
            r"i(?:'ve| have) been crying",
            r"i feel like crying",
            r"i(?:'m| am) tearful",
            r"everything is (?:so |really |very |extremely )?sad",
            r"life is (?:so |really |very |extremely )?sad",
            r"nothing makes me happy",
            r"i can't feel happy",
            r"i don't feel joy",
        ],
    )
}

fn depression_rules() -> Vec<String> {
    let mut rules = feeling_rules(&[
        "depressed", "hopeless", "worthless", "empty", "numb", "nothing", "suicidal",
        "like ending it all", "like giving up", "like i can't go on", "like i can't take it anymore",
        "like i'm a burden", "like i'm worthless", "like i'm a failure", "like i'm not good enough",
        "like i'm not worthy", "like i'm not deserving", "like i'm not lovable",
    ]);
    rules.extend(
        [
            r"i don't care anymore",
            r"i don't see the point",
            r"what's the point",
            r"life is (?:so |really |very |extremely )?meaningless",
            r"i can't see a future",
            r"i have no energy",
            r"i can't get out of bed",
            r"everything feels like a struggle",
            r"i(?:'m| am) struggling to function",
            r"i(?:'m| am) in a dark place",
            r"i(?:'m| am) in a black hole",
            r"i(?:'m| am) at rock bottom",
        ]
        .iter()
        .map(|s| s.to_string()),
    );
    rules
}

fn anxiety_rules() -> Vec<String> {
    feeling_rules(&[
        "anxious", "worried", "scared", "fearful", "nervous", "tense", "uneasy", "apprehensive",
        "restless", "jittery", "panicky", "on edge", "stressed", "overwhelmed", "freaking out",
        "having a panic attack", "having anxiety", "having an anxiety attack",
        "having a nervous breakdown",
    ])
}

fn loneliness_rules() -> Vec<String> {
    feeling_rules(&[
        "lonely", "alone", "isolated", "abandoned", "rejected", "unwanted", "unloved",
        "disconnected", "left out", "excluded", "forgotten", "invisible", "like no one cares",
        "like no one understands", "like i have no friends", "like i have no one to talk to",
        "like i'm all alone",
    ])
}

fn bad_mood_rules() -> Vec<String> {
    let mut rules = feeling_rules(&[
        "angry", "frustrated", "irritated", "annoyed", "upset", "tired", "exhausted", "drained",
        "like a failure", "useless", "inadequate", "not good enough", "a disappointment", "a burden",
    ]);
    rules.extend(
        [
            r"i(?:'m| am) (?:having|experiencing) (?:a bad|a terrible|a horrible|the worst) day",
            r"today is (?:so |really |very |extremely )?(?:bad|terrible|horrible)",
            r"today is the worst",
            r"everything is going wrong",
            r"nothing is going right",
            r"i hate everything",
            r"i hate my life",
        ]
        .iter()
        .map(|s| s.to_string()),
    );
    rules
}

fn positive_rules() -> Vec<String> {
    let mut rules = feeling_rules(&[
        "happy", "good", "great", "positive", "wonderful", "fantastic", "excellent", "amazing",
        "joyful", "cheerful", "delighted", "excited", "thrilled", "ecstatic", "content",
        "satisfied", "pleased", "grateful", "thankful", "blessed", "optimistic", "hopeful",
        "confident", "proud", "accomplished", "successful", "fulfilled", "peaceful", "calm",
        "relaxed", "serene", "tranquil", "at peace", "at ease", "balanced", "centered", "grounded",
        "energized", "motivated", "inspired", "creative", "productive", "focused", "determined",
        "resolute", "strong", "powerful", "capable", "competent", "skilled", "talented", "gifted",
        "special", "unique", "valued", "appreciated", "loved", "cherished", "adored", "cared for",
        "supported", "encouraged", "uplifted", "elevated", "high", "on top of the world",
        "on cloud nine", "over the moon", "in seventh heaven", "in high spirits",
        r"in (?:a|an) (?:good|great|positive|wonderful|fantastic|excellent|amazing|joyful|cheerful|delighted) mood",
    ]);
    rules.push(
        r"today is (?:a|an) (?:good|great|wonderful|fantastic|beautiful|perfect|blessed|happy|joyful|cheerful|delightful|amazing|excellent|positive|productive|successful|fulfilling|peaceful|calm|relaxing|serene|tranquil|balanced|centered|grounded|energizing|motivating|inspiring|creative|focused) day"
            .to_string(),
    );
    rules
}

// ============================================================================
// Reflection phrases
// ============================================================================

const REFLECTION_RULES: &[&str] = &[
    r"i (?:used to|would) (\w+)",
    r"when i was (\w+)",
    r"in my past",
    r"growing up",
    r"my childhood",
    r"i remember when",
    r"i've been thinking about",
    r"i've realized",
    r"i feel like",
    r"i've been feeling",
    r"i've been struggling with",
    r"i'm trying to",
    r"i want to become",
    r"my goal is",
    r"my dream is",
    r"i wish i could",
    r"i regret",
    r"i miss",
    r"i lost",
    r"i'm (?:afraid|worried|scared|concerned|proud|grateful|thankful)",
    r"i appreciate",
    r"i (?:learned|discovered|realized)",
    r"i understand now",
    r"i've (?:changed|grown|improved|overcome|been through)",
    r"i (?:experienced|went through|survived|accomplished|achieved|failed)",
    r"i made a mistake",
    r"i hurt someone",
    r"someone hurt me",
    r"i was (?:hurt|abused|bullied|rejected|abandoned|alone)",
    r"i (?:felt|feel) alone",
    r"i'm (?:lonely|isolated|different)",
    r"i don't (?:fit in|belong)",
    r"i'm not (?:good|worthy|deserving|lovable|capable)",
    r"i'm not (?:strong|smart|talented|experienced|qualified|confident|brave|resilient|patient|disciplined|motivated|inspired|creative|innovative|original|unique|special|important|significant|valuable|useful|helpful|kind|compassionate|empathetic|understanding|forgiving|accepting|tolerant|calm|peaceful|happy|joyful|content|satisfied|fulfilled|complete|whole|healed|recovered|restored|renewed|transformed|changed|improved|better|good|perfect) enough",
];

// ============================================================================
// Service requests
// ============================================================================

const ROUTINE_RULES: &[&str] = &[
    r"(?:suggest|recommend|give me|share|tell me about) (?:a|some) (?:daily|morning|evening|night|wellness|mental health|physical|healthy) routine",
    r"(?:what|how) (?:should|can|do) i (?:do|practice|incorporate|include) (?:for|to improve|to boost|to enhance) (?:my )?(?:mental health|physical health|wellness|wellbeing|well-being|health)",
    r"(?:help|tips|advice) (?:for|with|on) (?:daily|morning|evening|night|wellness|mental health|physical|healthy) routine",
    r"(?:how|what) (?:to|can i|should i) (?:start|begin|create|establish|develop) (?:a|my) (?:daily|morning|evening|night|wellness|mental health|physical|healthy) routine",
    r"(?:need|want) (?:a|some) (?:daily|morning|evening|night|wellness|mental health|physical|healthy) routine",
    r"(?:improve|boost|enhance|better) (?:my )?(?:mental health|physical health|wellness|wellbeing|well-being|health)",
    r"(?:feeling|been feeling) (?:stressed|anxious|depressed|down|low|sad|tired|exhausted|burnt out|overwhelmed) (?:routine|habits|practices|activities)",
    r"(?:daily|morning|evening|night|wellness|mental health|physical|healthy) (?:routine|habits|practices|activities) (?:for|to) (?:improve|boost|enhance|better) (?:mental health|physical health|wellness|wellbeing|well-being|health)",
    r"(?:what|how) (?:are|about) (?:good|healthy|effective|helpful) (?:daily|morning|evening|night|wellness|mental health|physical|healthy) (?:routine|habits|practices|activities)",
];

const REFERRAL_RULES: &[&str] = &[
    r"(?:find|get|suggest|recommend|give|show|need|want|looking for) (?:(?:a|some) )?(?:therapist|psychologist|psychiatrist|counselor|counsellor|mental health professional|mental health provider|mental health specialist)",
    r"(?:find|get|suggest|recommend|give|show|need|want|looking for) (?:therapy|counseling|counselling|psychiatric|psychological|mental health) (?:services|help|support|resources|options|consultation|consultancy|treatment)",
    r"(?:where|how) (?:can|do) (?:i|one|you|we) (?:find|get|seek|access) (?:(?:a|some) )?(?:therapist|psychologist|psychiatrist|counselor|counsellor|mental health professional|mental health provider|mental health specialist)",
    r"(?:where|how) (?:can|do) (?:i|one|you|we) (?:find|get|seek|access) (?:therapy|counseling|counselling|psychiatric|psychological|mental health) (?:services|help|support|resources|options|consultation|consultancy|treatment)",
    r"(?:need|want|looking for) (?:professional|medical|clinical) (?:help|support|advice|guidance|assistance|consultation|consultancy) (?:for|with) (?:my )?(?:mental health|depression|anxiety|stress|trauma|grief|addiction|eating disorder|ocd|bipolar|schizophrenia|ptsd|mental illness)",
    r"(?:recommend|suggest) (?:(?:a|some) )?(?:good|great|excellent|best|top|reliable|trusted|experienced|qualified|licensed|certified|professional) (?:therapist|psychologist|psychiatrist|counselor|counsellor|mental health professional|mental health provider|mental health specialist)",
    r"(?:wellness|therapy|counseling|counselling|mental health) (?:center|centre|clinic|practice|office|facility|provider|service)",
    r"(?:in-person|online|virtual|remote|telehealth|video) (?:therapy|counseling|counselling|psychiatric|psychological|mental health) (?:services|help|support|resources|options|consultation|consultancy|treatment)",
    r"(?:therapist|psychologist|psychiatrist|counselor|counsellor|mental health professional|mental health provider|mental health specialist) (?:near|around|in|close to) (?:me|my area|my location)",
    r"(?:how|where) (?:to|can i|do i|should i) (?:find|get|seek|access) (?:help|support|treatment) (?:for|with) (?:my )?(?:mental health|depression|anxiety|stress|trauma|grief|addiction|eating disorder|ocd|bipolar|schizophrenia|ptsd|mental illness)",
    r"(?:can you|could you|would you) (?:recommend|suggest|provide|give me|share|tell me about) (?:(?:some|any|a few) )?(?:therapist|psychologist|psychiatrist|counselor|counsellor|mental health professional|mental health provider|mental health specialist)s?",
    r"(?:can you|could you|would you) (?:recommend|suggest|provide|give me|share|tell me about) (?:(?:some|any|a few) )?(?:wellness center|therapy center|counseling center|mental health center|mental health clinic|psychological service)s?",
];

const MUSIC_RULES: &[&str] = &[
    r"\bsongs?\b",
    r"\bmusic\b",
    r"\bplaylists?\b",
    r"\bsomething to listen to\b",
    r"\blisten(?:ing)? to\b",
];

const MOOD_EXTRACTORS: &[&str] = &[
    r"(?:i(?:'m| am) feeling|i feel|make me feel|when i(?:'m| am)(?: feeling)?) (\w+)",
    r"(?:recommend|suggest) (?:(?:some|a few) )?(?:songs|music) (?:for|when) (?:i(?:'m| am) feeling |i feel |feeling )?(\w+)",
    r"(?:songs|music) (?:for|when) (?:i(?:'m| am)|one is) (\w+)",
    r"(?:i want to|i need to|help me) (?:feel|be) (\w+)",
    r"(?:i(?:'m| am)|i want to be) in a (\w+) mood",
];

const MOOD_VOCABULARY: &[&str] = &[
    "happy", "sad", "calm", "energetic", "focused", "relaxed", "joy", "excited", "cheerful",
    "depressed", "unhappy", "peaceful", "active", "motivated", "concentrated", "chill", "mellow",
];

const MOOD_SYNONYMS: &[(&str, &str)] = &[
    ("joy", "happy"),
    ("excited", "happy"),
    ("cheerful", "happy"),
    ("joyful", "happy"),
    ("upbeat", "happy"),
    ("good", "happy"),
    ("great", "happy"),
    ("depressed", "sad"),
    ("unhappy", "sad"),
    ("down", "sad"),
    ("blue", "sad"),
    ("gloomy", "sad"),
    ("melancholy", "sad"),
    ("upset", "sad"),
    ("peaceful", "calm"),
    ("serene", "calm"),
    ("tranquil", "calm"),
    ("quiet", "calm"),
    ("gentle", "calm"),
    ("active", "energetic"),
    ("lively", "energetic"),
    ("dynamic", "energetic"),
    ("vigorous", "energetic"),
    ("pumped", "energetic"),
    ("motivated", "energetic"),
    ("concentrated", "focused"),
    ("attentive", "focused"),
    ("productive", "focused"),
    ("studying", "focused"),
    ("work", "focused"),
    ("chill", "relaxed"),
    ("mellow", "relaxed"),
    ("easy", "relaxed"),
    ("laid-back", "relaxed"),
    ("comfortable", "relaxed"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_table_compiles() {
        let table = PatternTable::standard();
        assert_eq!(table.concerns.len(), 4);
        assert_eq!(table.negative_moods.len(), 5);
        assert!(!table.positive.is_empty());
        assert_eq!(table.mood_extractors.len(), 5);
    }

    #[test]
    fn test_keywords_match_whole_words() {
        let rules = RuleSet::keywords(&["mad", "stress"]).unwrap();
        assert!(rules.is_match("i am so mad"));
        assert!(!rules.is_match("i made dinner"));
        assert_eq!(rules.hits("stress and more"), vec![r"\bstress\b"]);
    }

    #[test]
    fn test_tier_lookup_is_highest_first() {
        let table = PatternTable::standard();
        let depression = table.concern(ConcernKind::Depression).unwrap();
        assert_eq!(depression.tier_for(&["sad", "worthless"]), Severity::High);
        assert_eq!(depression.tier_for(&["sad", "hopeless"]), Severity::Medium);
        assert_eq!(depression.tier_for(&["sad"]), Severity::Low);
        // tier-less keyword
        assert_eq!(depression.tier_for(&["don't care anymore"]), Severity::Low);
    }

    #[test]
    fn test_self_harm_has_no_low_tier() {
        let table = PatternTable::standard();
        let self_harm = table.concern(ConcernKind::SelfHarm).unwrap();
        assert!(self_harm.tiers.iter().all(|(s, _)| *s != Severity::Low));
        assert_eq!(self_harm.tier_for(&["end my life"]), Severity::High);
    }
}
