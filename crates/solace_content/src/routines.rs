//! Wellness routines, three per sub-type.

use solace_core::{Routine, RoutineKind};

struct RoutineEntry {
    title: &'static str,
    description: &'static str,
    steps: &'static [&'static str],
    benefits: &'static [&'static str],
}

impl RoutineEntry {
    fn to_routine(&self) -> Routine {
        Routine {
            title: self.title.to_string(),
            description: self.description.to_string(),
            steps: self.steps.iter().map(|s| s.to_string()).collect(),
            benefits: self.benefits.iter().map(|s| s.to_string()).collect(),
        }
    }
}

pub(crate) fn routines(kind: RoutineKind) -> Vec<Routine> {
    let entries = match kind {
        RoutineKind::Morning => MORNING,
        RoutineKind::Evening => EVENING,
        RoutineKind::Mental => MENTAL,
        RoutineKind::Physical => PHYSICAL,
        RoutineKind::General => GENERAL,
    };
    entries.iter().map(RoutineEntry::to_routine).collect()
}

const MORNING: &[RoutineEntry] = &[
    RoutineEntry {
        title: "Mindful Morning Routine",
        description: "A gentle routine to start your day with awareness and positivity.",
        steps: &[
            "Wake up at the same time each day (ideally between 6-7 AM) to regulate your body's internal clock.",
            "Before reaching for your phone, take 3 deep breaths and set a positive intention for the day.",
            "Drink a glass of water with lemon to hydrate and kickstart your metabolism.",
            "Spend 5-10 minutes meditating or practicing mindfulness to center yourself.",
            "Do 5-10 minutes of gentle stretching or yoga to wake up your body.",
            "Take a refreshing shower, alternating between warm and cool water to boost circulation.",
            "Eat a nutritious breakfast with protein, healthy fats, and complex carbohydrates.",
            "Review your priorities for the day and identify your top 3 most important tasks.",
        ],
        benefits: &[
            "Reduces morning stress and anxiety",
            "Improves mental clarity and focus",
            "Boosts physical energy levels",
            "Creates a sense of control and purpose",
            "Establishes a positive tone for the day",
        ],
    },
    RoutineEntry {
        title: "Energizing Morning Routine",
        description: "A dynamic routine to boost your energy and productivity for the day ahead.",
        steps: &[
            "Wake up early (5:30-6:30 AM) and immediately get out of bed without hitting snooze.",
            "Drink 16oz of water to rehydrate after sleep.",
            "Do 15-20 minutes of moderate to high-intensity exercise (jogging, HIIT, or strength training).",
            "Take a cold shower to increase alertness and improve circulation.",
            "Practice 5 minutes of box breathing or another breathing exercise.",
            "Eat a protein-rich breakfast with fruits or vegetables.",
            "Spend 10 minutes journaling or planning your day with specific goals.",
            "Listen to uplifting music or an educational podcast while getting ready.",
        ],
        benefits: &[
            "Significantly increases physical energy and mental alertness",
            "Boosts metabolism and supports weight management",
            "Improves mood through endorphin release",
            "Enhances productivity and focus throughout the day",
            "Builds discipline and willpower",
        ],
    },
    RoutineEntry {
        title: "Grounding Morning Routine",
        description: "A nurturing routine to help you feel centered and connected to yourself.",
        steps: &[
            "Wake up naturally with the sunrise if possible, or use a sunrise alarm clock.",
            "Begin with 5 minutes of gratitude practice, noting 3 things you're thankful for.",
            "Drink warm water with lemon, honey, and a pinch of turmeric or ginger.",
            "Spend 10-15 minutes in meditation, focusing on your breath and body sensations.",
            "Do gentle yoga or tai chi movements for 10-15 minutes.",
            "Take time to prepare and mindfully eat a nourishing breakfast.",
            "Spend a few minutes in nature, even if just sitting by a window or on a balcony.",
            "Set intentions for how you want to feel throughout the day.",
        ],
        benefits: &[
            "Reduces anxiety and promotes emotional stability",
            "Creates a sense of connection to yourself and the present moment",
            "Supports digestive health and immune function",
            "Cultivates a positive mindset and resilience",
            "Helps maintain calm energy throughout the day",
        ],
    },
];

const EVENING: &[RoutineEntry] = &[
    RoutineEntry {
        title: "Relaxing Wind-Down Routine",
        description: "A calming routine to help you transition from day to night and prepare for restful sleep.",
        steps: &[
            "Set a consistent bedtime and begin your wind-down routine 1-2 hours before.",
            "Turn off electronic devices or use blue light filters to support melatonin production.",
            "Take a warm bath or shower to relax muscles and lower your core temperature.",
            "Practice gentle stretching or restorative yoga poses for 10-15 minutes.",
            "Spend 10 minutes journaling about your day or writing a gratitude list.",
            "Drink calming herbal tea like chamomile, lavender, or valerian root.",
            "Read a physical book (not on a screen) for 15-30 minutes.",
            "Practice 5-10 minutes of meditation or deep breathing exercises in bed.",
        ],
        benefits: &[
            "Improves sleep quality and reduces insomnia",
            "Lowers stress hormones like cortisol",
            "Helps process the day's events and emotions",
            "Creates a clear boundary between work/activity and rest",
            "Supports overall mental health and emotional regulation",
        ],
    },
    RoutineEntry {
        title: "Reflective Evening Routine",
        description: "A thoughtful routine focused on processing your day and preparing for tomorrow.",
        steps: &[
            "Set aside 30-60 minutes before bed for your evening routine.",
            "Review your day's accomplishments and challenges in a journal.",
            "Practice a 'brain dump' by writing down any lingering thoughts or to-dos for tomorrow.",
            "Prepare your environment for tomorrow (lay out clothes, prepare lunch, etc.).",
            "Do a quick 10-minute tidy-up of your living space.",
            "Engage in a calming activity like coloring, knitting, or listening to soft music.",
            "Practice a body scan meditation, relaxing each part of your body systematically.",
            "Use aromatherapy with lavender or chamomile essential oils to signal sleep time.",
        ],
        benefits: &[
            "Reduces anxiety about the next day",
            "Provides closure to the current day",
            "Improves sleep quality by clearing mental clutter",
            "Builds self-awareness and emotional intelligence",
            "Creates a sense of control and preparedness",
        ],
    },
    RoutineEntry {
        title: "Digital Detox Evening Routine",
        description: "A technology-free routine to help reset your nervous system and improve sleep quality.",
        steps: &[
            "Turn off all screens at least 1 hour before bedtime.",
            "Place your phone in another room or in a drawer to avoid temptation.",
            "Dim the lights in your home to signal to your body that it's time to wind down.",
            "Engage in a screen-free activity like reading, drawing, or playing a musical instrument.",
            "Practice a facial massage or skincare routine as a form of self-care.",
            "Write down 3 things that went well today and why they matter to you.",
            "Do gentle stretching focusing on areas that hold tension (neck, shoulders, lower back).",
            "Practice 4-7-8 breathing (inhale for 4, hold for 7, exhale for 8) as you lie in bed.",
        ],
        benefits: &[
            "Significantly improves sleep quality and reduces time to fall asleep",
            "Decreases exposure to stimulating content before bed",
            "Reduces eye strain and mental overstimulation",
            "Promotes mindfulness and presence",
            "Helps reset unhealthy technology habits",
        ],
    },
];

const MENTAL: &[RoutineEntry] = &[
    RoutineEntry {
        title: "Daily Mental Wellness Routine",
        description: "A comprehensive routine to support your mental health throughout the day.",
        steps: &[
            "Start your day with 10 minutes of meditation to set a calm tone.",
            "Practice positive affirmations or mantras that counter negative thought patterns.",
            "Take short 5-minute mindfulness breaks every 2-3 hours during your day.",
            "Spend at least 20 minutes outdoors, preferably in a natural setting.",
            "Engage in a creative activity for 15-30 minutes (drawing, writing, music, etc.).",
            "Connect meaningfully with at least one person each day, even if briefly.",
            "Practice gratitude by noting 3 positive experiences at the end of your day.",
            "Set aside 10 minutes for reflection and journaling before bed.",
        ],
        benefits: &[
            "Reduces symptoms of anxiety and depression",
            "Improves emotional regulation and resilience",
            "Enhances self-awareness and personal growth",
            "Strengthens social connections and support systems",
            "Builds a positive mindset and cognitive flexibility",
        ],
    },
    RoutineEntry {
        title: "Stress Management Routine",
        description: "A targeted routine to help manage and reduce stress levels.",
        steps: &[
            "Begin your day with 5 minutes of deep breathing exercises.",
            "Practice progressive muscle relaxation for 10 minutes when feeling tense.",
            "Take regular breaks from work using the 50/10 rule (50 minutes of work, 10 minutes of rest).",
            "Go for a 15-20 minute walk after lunch to clear your mind.",
            "Use stress-tracking in a journal to identify patterns and triggers.",
            "Practice setting boundaries by saying no to at least one non-essential request each day.",
            "Engage in a hobby or activity that brings you joy for at least 30 minutes.",
            "End your day with a 'worry dump' where you write down concerns to address tomorrow.",
        ],
        benefits: &[
            "Reduces cortisol levels and physical symptoms of stress",
            "Prevents burnout and chronic stress conditions",
            "Improves work productivity and focus",
            "Enhances ability to respond rather than react to stressors",
            "Builds long-term stress resilience",
        ],
    },
    RoutineEntry {
        title: "Mood-Boosting Routine",
        description: "A routine designed to elevate your mood and combat feelings of sadness or low energy.",
        steps: &[
            "Start your day with 10-15 minutes of light exposure (natural sunlight if possible).",
            "Do 20-30 minutes of aerobic exercise to release endorphins.",
            "Listen to uplifting music or a positive podcast during your commute or morning activities.",
            "Practice random acts of kindness - do something nice for someone else.",
            "Take a 'pleasure inventory' by spending 5 minutes on something you genuinely enjoy.",
            "Connect with a supportive friend or family member, even just via text or a quick call.",
            "Limit news and social media consumption to specific times and durations.",
            "End your day by noting 3 positive moments, no matter how small.",
        ],
        benefits: &[
            "Naturally increases serotonin and dopamine levels",
            "Reduces symptoms of mild to moderate depression",
            "Creates positive momentum through small wins",
            "Strengthens social connections that buffer against low mood",
            "Builds awareness of mood patterns and effective interventions",
        ],
    },
];

const PHYSICAL: &[RoutineEntry] = &[
    RoutineEntry {
        title: "Daily Movement Routine",
        description: "A balanced approach to incorporating physical activity throughout your day.",
        steps: &[
            "Start with 5-10 minutes of morning stretching to wake up your body.",
            "Take movement breaks every hour - stand up, stretch, or walk around for 2-3 minutes.",
            "Go for a 20-30 minute walk during lunch or another break in your day.",
            "Do 15-20 minutes of strength training focusing on major muscle groups (can be bodyweight exercises).",
            "Practice good posture throughout the day, especially if you work at a desk.",
            "Take the stairs instead of elevators when possible.",
            "Do 10 minutes of mobility work in the evening to address tight areas.",
            "End your day with gentle stretching to release tension before sleep.",
        ],
        benefits: &[
            "Improves cardiovascular health and circulation",
            "Maintains muscle mass and bone density",
            "Reduces risk of chronic diseases like diabetes and heart disease",
            "Boosts energy levels and reduces fatigue",
            "Supports better sleep quality and stress management",
        ],
    },
    RoutineEntry {
        title: "Energy-Optimizing Routine",
        description: "A routine focused on maximizing your physical energy and vitality throughout the day.",
        steps: &[
            "Drink 16oz of water immediately upon waking to rehydrate.",
            "Eat a balanced breakfast with protein, healthy fats, and complex carbs within an hour of waking.",
            "Take a 10-minute brisk walk outdoors to increase alertness and vitamin D.",
            "Practice time-restricted eating (e.g., eating within an 8-10 hour window) to optimize metabolism.",
            "Stay hydrated by drinking water regularly throughout the day (aim for 2-3 liters total).",
            "Take a 5-minute breathing break when energy dips instead of reaching for caffeine.",
            "Do a 4-minute Tabata workout (20 seconds intense exercise, 10 seconds rest, repeated 8 times) for an afternoon boost.",
            "Avoid heavy meals within 3 hours of bedtime to improve sleep quality.",
        ],
        benefits: &[
            "Stabilizes energy levels throughout the day",
            "Reduces reliance on caffeine and sugar for energy",
            "Improves metabolic health and insulin sensitivity",
            "Enhances cellular energy production",
            "Supports healthy circadian rhythms",
        ],
    },
    RoutineEntry {
        title: "Recovery-Focused Routine",
        description: "A routine designed to support physical recovery and prevent burnout or injury.",
        steps: &[
            "Start with gentle joint mobility exercises for 5-10 minutes in the morning.",
            "Practice deep breathing for 5 minutes to activate your parasympathetic nervous system.",
            "Use a foam roller or massage ball for 10 minutes on tight muscles.",
            "Take a contrast shower (alternating between warm and cold water) to improve circulation.",
            "Schedule at least 2 full rest days per week from intense exercise.",
            "Practice active recovery like walking, swimming, or gentle yoga on rest days.",
            "Use a sleep tracking app or journal to ensure you're getting 7-9 quality hours.",
            "Try a magnesium-rich evening snack (like a small handful of nuts) to support muscle relaxation.",
        ],
        benefits: &[
            "Prevents overtraining syndrome and exercise burnout",
            "Reduces risk of repetitive stress injuries",
            "Improves muscle recovery and growth",
            "Enhances immune function and overall resilience",
            "Supports long-term consistency with physical activity",
        ],
    },
];

const GENERAL: &[RoutineEntry] = &[
    RoutineEntry {
        title: "Balanced Daily Wellness Routine",
        description: "A holistic routine that addresses multiple dimensions of wellbeing.",
        steps: &[
            "Begin your day with 5 minutes of mindfulness meditation.",
            "Drink a glass of water and eat a nutritious breakfast with protein and fiber.",
            "Spend 20-30 minutes on physical movement that you enjoy.",
            "Take short breaks throughout your workday to stretch and reset your focus.",
            "Eat meals mindfully without screens or distractions when possible.",
            "Spend time outdoors, even just 15 minutes, to connect with nature.",
            "Connect meaningfully with someone you care about.",
            "End your day with a gratitude practice and screen-free wind-down time.",
        ],
        benefits: &[
            "Creates balance across physical, mental, and emotional wellbeing",
            "Builds sustainable healthy habits that reinforce each other",
            "Reduces stress while increasing energy and resilience",
            "Supports both immediate wellbeing and long-term health",
            "Adaptable to different lifestyles and needs",
        ],
    },
    RoutineEntry {
        title: "Beginner's Wellness Routine",
        description: "A simple, approachable routine for those new to wellness practices.",
        steps: &[
            "Start with just one new healthy habit each week rather than changing everything at once.",
            "Drink an extra glass of water at three specific times: morning, midday, and evening.",
            "Take a 10-minute walk daily, ideally outdoors.",
            "Practice 3 minutes of deep breathing when you feel stressed.",
            "Add one extra serving of vegetables or fruits to your daily intake.",
            "Set a consistent bedtime and wake-up time, even on weekends.",
            "Spend 5 minutes each evening reflecting on what went well during your day.",
            "Limit screen time to specific hours and take regular digital breaks.",
        ],
        benefits: &[
            "Creates sustainable change through gradual implementation",
            "Builds confidence through achievable goals",
            "Establishes foundational habits that support more advanced practices",
            "Reduces overwhelm while still improving wellbeing",
            "Teaches the process of habit formation",
        ],
    },
    RoutineEntry {
        title: "Work-Life Balance Routine",
        description: "A routine designed to create healthy boundaries between work and personal life.",
        steps: &[
            "Create a consistent morning routine that's just for you, not for work.",
            "Set clear start and end times for your workday and honor them.",
            "Take a proper lunch break away from your workspace.",
            "Schedule short 5-minute breaks every 90 minutes during work hours.",
            "Create an 'end of workday' ritual (like changing clothes or a short walk).",
            "Have tech-free zones or times in your home where work devices aren't allowed.",
            "Plan at least one enjoyable activity each day that's unrelated to productivity.",
            "Practice saying no to non-essential commitments that drain your energy.",
        ],
        benefits: &[
            "Reduces burnout and work-related stress",
            "Improves productivity during work hours",
            "Enhances quality of personal and family time",
            "Creates psychological separation between work and rest",
            "Supports overall life satisfaction and mental health",
        ],
    },
];
