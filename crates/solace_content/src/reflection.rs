use solace_core::ReflectionTheme;

pub(crate) fn responses(theme: ReflectionTheme) -> &'static [&'static str] {
    match theme {
        ReflectionTheme::PastExperiences => &[
            "Thank you for sharing that experience with me. Our past shapes us, but it doesn't define our future.",
            "I appreciate you opening up about your past. Those experiences have contributed to the person you are today.",
            "It takes courage to reflect on our past experiences. Thank you for trusting me with yours.",
            "Our history is a powerful teacher. The experiences you've shared show how much you've been through.",
            "Life's journey is filled with many chapters. Thank you for sharing a glimpse of yours with me.",
        ],
        ReflectionTheme::SelfReflection => &[
            "That's a powerful realization. Self-reflection is a sign of emotional intelligence and growth.",
            "I admire your ability to look inward and gain these insights about yourself.",
            "These moments of clarity can be transformative. I'm glad you're having this realization.",
            "Self-awareness is the first step toward positive change. You're on a good path.",
            "That's a thoughtful observation about yourself. This kind of reflection leads to personal growth.",
        ],
        ReflectionTheme::Aspirations => &[
            "That's a beautiful goal. I believe you have what it takes to achieve it.",
            "Dreams give us direction and purpose. Yours sounds meaningful and worth pursuing.",
            "I admire your ambition. Taking steps toward your dreams, no matter how small, is progress.",
            "That's an inspiring vision for your future. Keep nurturing that dream.",
            "Goals give our lives meaning. I'm glad you're thinking about what you want for your future.",
        ],
        ReflectionTheme::Regrets => &[
            "It takes strength to acknowledge regrets. Remember that everyone makes mistakes—they're how we learn and grow.",
            "I hear the regret in your words. Please be gentle with yourself; we all have things we wish we'd done differently.",
            "That sounds difficult to carry. Remember that regret can be a teacher, not just a burden.",
            "Missing someone or something shows the depth of your capacity to care and connect.",
            "I'm sorry for your loss. The pain of losing something or someone important is a reflection of how much it mattered to you.",
        ],
        ReflectionTheme::Fears => &[
            "It's completely natural to feel afraid. Fear often shows us what matters most to us.",
            "Thank you for sharing your concerns. Acknowledging our fears is often the first step in addressing them.",
            "Your worries are valid. Sometimes naming our fears helps us see them more clearly.",
            "I hear your concerns. Remember that courage isn't the absence of fear, but moving forward despite it.",
            "It's okay to be scared. Many of life's most worthwhile experiences come with a degree of fear.",
        ],
        ReflectionTheme::Gratitude => &[
            "That's wonderful! Recognizing and appreciating the positive aspects of life is so important.",
            "I'm happy to hear about your accomplishment. You deserve to feel proud of what you've achieved.",
            "Gratitude is a powerful practice. It's great that you're acknowledging these positive elements in your life.",
            "That's definitely something to be proud of. Celebrating our achievements helps us build confidence.",
            "I appreciate you sharing this positive reflection. It's important to recognize our successes along the way.",
        ],
        ReflectionTheme::Trauma => &[
            "I'm truly sorry you went through that. Your resilience in sharing this shows incredible strength.",
            "That must have been incredibly difficult. Please know that what happened wasn't your fault.",
            "Thank you for trusting me with something so painful. Your willingness to speak about it shows courage.",
            "I can only imagine how challenging that experience was. Your strength in surviving it is remarkable.",
            "That kind of experience can leave deep marks. Your ability to talk about it is a sign of your inner strength.",
        ],
        ReflectionTheme::Loneliness => &[
            "Feeling disconnected from others can be really painful. Your feelings are completely valid.",
            "I'm sorry you're feeling isolated. Remember that many people feel this way at times, even when it seems like they don't.",
            "Feeling like you don't belong is a difficult experience. Please know that you have inherent worth and value.",
            "Loneliness can be so challenging. Your openness about these feelings shows self-awareness and courage.",
            "I hear how isolated you feel. Connection is a fundamental human need, and it's okay to acknowledge when it's missing.",
        ],
        ReflectionTheme::SelfDoubt => &[
            "I want you to know that you are enough, exactly as you are right now.",
            "Self-doubt is something we all experience, but it doesn't reflect your true worth or potential.",
            "Those negative thoughts aren't facts. You have unique strengths and qualities that matter.",
            "It's easy to be our own harshest critics. Try to speak to yourself with the kindness you'd offer a good friend.",
            "Your worth isn't determined by your achievements or abilities. You have inherent value as a person.",
        ],
        ReflectionTheme::General => &[
            "Thank you for sharing that with me. It takes courage to express our deeper thoughts and feelings.",
            "I appreciate you opening up. Your reflections show thoughtfulness and self-awareness.",
            "That's a meaningful insight. These kinds of reflections help us understand ourselves better.",
            "I value you sharing something so personal. These thoughts and experiences shape who we are.",
            "Thank you for trusting me with that. Your willingness to explore these thoughts shows inner strength.",
        ],
    }
}

pub(crate) fn follow_ups(theme: ReflectionTheme) -> &'static [&'static str] {
    match theme {
        ReflectionTheme::PastExperiences => &[
            "How do you think that experience has shaped who you are today?",
            "What's one lesson you've carried forward from that time in your life?",
            "If you could talk to your younger self during that time, what would you say?",
        ],
        ReflectionTheme::SelfReflection => &[
            "What led you to this realization?",
            "How might this insight change things for you moving forward?",
            "What's one small step you could take based on this understanding?",
        ],
        ReflectionTheme::Aspirations => &[
            "What first inspired this goal or dream?",
            "What would achieving this mean to you personally?",
            "What's one small step you could take toward this vision?",
        ],
        ReflectionTheme::Regrets => &[
            "What would self-forgiveness look like in this situation?",
            "Is there anything positive that came from this difficult experience?",
            "How might this experience help you make different choices in the future?",
        ],
        ReflectionTheme::Fears => &[
            "What helps you cope when you're feeling this way?",
            "What would it look like to take one small step despite this fear?",
            "What's the worst that could happen, and how might you handle it if it did?",
        ],
        ReflectionTheme::Gratitude => &[
            "How does focusing on this positive aspect affect your overall outlook?",
            "What other small things in your life bring you similar feelings?",
            "How might you build on this positive experience or feeling?",
        ],
        ReflectionTheme::Trauma => &[
            "What has helped you cope with this difficult experience?",
            "Have you found any practices that help when memories of this arise?",
            "What would support and healing look like for you moving forward?",
        ],
        ReflectionTheme::Loneliness => &[
            "Are there any small connections in your day that bring you comfort?",
            "What kind of connection would feel most meaningful to you right now?",
            "Is there a community or group centered around your interests that might feel welcoming?",
        ],
        ReflectionTheme::SelfDoubt => &[
            "What would you say to a friend who expressed these same doubts about themselves?",
            "Can you recall a time when you felt more confident? What was different then?",
            "What's one small thing you could do today to be kind to yourself?",
        ],
        ReflectionTheme::General => &[
            "Would you like to share more about that?",
            "How have these thoughts been affecting you lately?",
            "What do you think would be a helpful next step for you?",
        ],
    }
}
