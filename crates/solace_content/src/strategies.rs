//! Coping strategies per concern and tier, plus the crisis lines shown
//! alongside high-severity or self-harm replies.

use solace_core::{ConcernKind, CrisisLine, Severity};

pub(crate) fn coping_strategies(kind: ConcernKind, severity: Severity) -> &'static [&'static str] {
    match (kind, severity) {
        (ConcernKind::Depression, Severity::Low) => &[
            "Try to get some sunlight and fresh air today, even just for 10 minutes.",
            "Consider reaching out to a friend or family member for a brief chat.",
            "Try to do one small activity that you used to enjoy, even if you don't feel like it.",
            "Practice basic self-care: take a shower, eat a nutritious meal, or get some rest.",
            "Set a very small, achievable goal for today to create a sense of accomplishment.",
        ],
        (ConcernKind::Depression, Severity::Medium) => &[
            "Consider establishing a daily routine to provide structure to your day.",
            "Physical activity, even just a short walk, can help boost your mood through endorphin release.",
            "Mindfulness meditation can help you stay present rather than dwelling on negative thoughts.",
            "Try journaling about your feelings to externalize them and gain perspective.",
            "Limit exposure to negative news and social media that might worsen your mood.",
        ],
        (ConcernKind::Depression, Severity::High) => &[
            "Please consider speaking with a mental health professional who can provide proper support.",
            "If you have a therapist or counselor, now would be a good time to schedule a session.",
            "Remember that depression often lies to us about our worth and future prospects.",
            "Try to be as gentle with yourself as you would be with a good friend going through this.",
            "Focus just on getting through today - sometimes taking things one day at a time helps.",
        ],
        (ConcernKind::Anxiety, Severity::Low) => &[
            "Try a brief breathing exercise: breathe in for 4 counts, hold for 2, exhale for 6.",
            "Ground yourself by naming 5 things you can see, 4 you can touch, 3 you can hear, 2 you can smell, and 1 you can taste.",
            "Take a short break from what you're doing to stretch or move around.",
            "Consider limiting caffeine which can sometimes worsen anxiety symptoms.",
            "Write down your worries to get them out of your head and onto paper.",
        ],
        (ConcernKind::Anxiety, Severity::Medium) => &[
            "Progressive muscle relaxation can help reduce physical tension - try tensing and releasing each muscle group.",
            "Challenge anxious thoughts by asking: What's the evidence? Is there another way to look at this? What would I tell a friend?",
            "Distract yourself with an engaging activity that requires focus, like a puzzle or craft.",
            "Try the 5-4-3-2-1 grounding technique to bring yourself back to the present moment.",
            "Limit exposure to triggers that you know increase your anxiety when possible.",
        ],
        (ConcernKind::Anxiety, Severity::High) => &[
            "If you're experiencing a panic attack, remember it will pass. Focus on your breathing and remind yourself you're safe.",
            "Consider speaking with a mental health professional who can provide strategies specific to your situation.",
            "Try to accept the anxiety rather than fighting it - sometimes resistance makes it stronger.",
            "Engage your body to release tension: try running in place, doing jumping jacks, or even screaming into a pillow.",
            "Remember that your anxious thoughts are not facts, even though they feel very real.",
        ],
        (ConcernKind::Anger, Severity::Low) => &[
            "Take a brief time-out from the situation to collect your thoughts.",
            "Try counting to 10 slowly before responding to give your initial reaction time to pass.",
            "Take a few deep breaths to help calm your physiological response.",
            "Ask yourself if this will matter in a day, a week, or a month from now.",
            "Try changing your environment briefly - step outside or into another room.",
        ],
        (ConcernKind::Anger, Severity::Medium) => &[
            "Physical activity can help release tension - try going for a brisk walk or run.",
            "Express your feelings calmly using 'I' statements rather than accusatory language.",
            "Look for the underlying emotion beneath the anger - often it's hurt, fear, or frustration.",
            "Try journaling about what's making you angry to gain clarity and perspective.",
            "Practice relaxation techniques like deep breathing or progressive muscle relaxation.",
        ],
        (ConcernKind::Anger, Severity::High) => &[
            "Remove yourself from the situation until you feel calmer to prevent saying or doing something you'll regret.",
            "Channel the energy into a physical but safe activity like exercising or punching a pillow.",
            "Consider speaking with a mental health professional about healthy anger management strategies.",
            "Remember that while your feelings are valid, you are in control of your actions.",
            "Try to identify your anger triggers so you can prepare better for them in the future.",
        ],
        (ConcernKind::SelfHarm, Severity::Medium) => &[
            "Try holding ice cubes in your hands or placing them on your skin where you feel the urge to harm.",
            "Draw on yourself with a red marker where you feel like hurting yourself.",
            "Engage in intense exercise to release endorphins and physical tension.",
            "Call or text a friend or family member you trust.",
            "Distract yourself with an absorbing activity that requires focus and both hands.",
        ],
        (ConcernKind::SelfHarm, Severity::High) => &[
            "Please reach out to a crisis helpline where trained professionals can provide immediate support.",
            "If you have a safety plan, now is the time to use it.",
            "Remove any items you might use to harm yourself if you can do so safely.",
            "If you have a therapist or counselor, contact them right away.",
            "Remember that these intense feelings will pass, even though it doesn't feel like it right now.",
        ],
        _ => &[],
    }
}

const CRISIS: &[(&str, &str)] = &[
    ("National Suicide Prevention Lifeline", "1-800-273-8255"),
    ("Crisis Text Line", "Text HOME to 741741"),
    ("SAMHSA's National Helpline", "1-800-662-HELP (4357)"),
    (
        "International Association for Suicide Prevention",
        "https://www.iasp.info/resources/Crisis_Centres/",
    ),
    ("Befrienders Worldwide", "https://www.befrienders.org/"),
];

pub(crate) fn crisis_lines() -> Vec<CrisisLine> {
    CRISIS
        .iter()
        .map(|(name, contact)| CrisisLine {
            name: name.to_string(),
            contact: contact.to_string(),
        })
        .collect()
}
