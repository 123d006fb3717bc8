//! Enthusiastic replies and affirmations for the positive-mood branch.

pub(crate) const POSITIVE_RESPONSES: &[&str] = &[
    "That's fantastic! 🎉 I'm so happy to hear you're feeling good. Your positive energy is contagious!",
    "Wonderful! 🌟 It's so great to hear you're in a positive mood. Those good feelings deserve to be celebrated!",
    "That makes me so happy to hear! 😊 Positive emotions are worth savoring - take a moment to really enjoy this feeling.",
    "Awesome! 🙌 Your happiness matters, and I'm genuinely glad you're feeling good today.",
    "That's terrific news! 💫 Happiness looks good on you - I hope this positive feeling stays with you!",
    "I'm thrilled to hear that! 🌈 Positive moments like this are precious - they're like little gifts we give ourselves.",
    "How wonderful! 🌻 Your happiness brightens the day. Thanks for sharing your positive feelings!",
    "That's music to my ears! 🎵 Feeling good is something to celebrate and share. I'm glad you did!",
    "Brilliant! ✨ Positive emotions help us build resilience for challenging times. Enjoy this moment fully!",
    "I'm so glad to hear you're feeling positive! 🌞 These moments of joy are what make life beautiful.",
    "That's excellent! 🎊 Happiness is a wonderful state to be in. May this feeling stay with you!",
    "Fantastic! 🌠 Your positive mood is something to cherish. I hope it continues throughout your day!",
    "That's really great to hear! 😄 Positive emotions are worth acknowledging and celebrating.",
    "Marvelous! 🎈 I'm genuinely happy that you're feeling good. Your positive energy is a gift!",
    "How delightful! 🌷 Happiness is contagious, and I find myself smiling knowing you're in good spirits!",
    "That's wonderful news! 🌈 Positive feelings are treasures - I hope you can savor this moment.",
    "I'm so pleased to hear that! 🌟 Your happiness matters, and I'm glad you're experiencing these positive emotions.",
    "Excellent! 🎉 Feeling good is something to celebrate. I hope this positive energy stays with you!",
    "That's just awesome! 😊 Your positive mood brightens not just your day, but those around you too.",
    "Brilliant! ✨ I'm genuinely happy to hear you're feeling good. These positive moments are precious!",
];

pub(crate) const AFFIRMATIONS: &[&str] = &[
    "You deserve every bit of happiness that comes your way.",
    "Your positive attitude creates positive circumstances.",
    "The joy you feel today is a reflection of the light within you.",
    "When you're happy, you're at your most powerful and authentic.",
    "Your positive energy has a ripple effect that touches others around you.",
    "Happiness is your natural state - you're simply returning home.",
    "The good feelings you experience today help build resilience for tomorrow.",
    "Your capacity for joy is unlimited - there's always more happiness available to you.",
    "By acknowledging your positive feelings, you're inviting more of them into your life.",
    "Your happiness is important and worthy of celebration.",
    "The positive energy you cultivate today creates momentum for tomorrow.",
    "When you honor your joy, you give others permission to do the same.",
    "Your happiness is not just a feeling - it's a powerful force for good in your life.",
    "The positive thoughts you think today are creating your reality tomorrow.",
    "Your joy is a gift not just to yourself, but to everyone around you.",
    "By celebrating your happiness, you're training your mind to notice more things to be happy about.",
    "The positive feelings you experience are evidence of your inner strength and resilience.",
    "Your capacity for happiness is a superpower - it can transform any situation.",
    "The joy you feel is a reminder of how wonderful life can be when we're present for it.",
    "Your positive mood is not just luck - it's something you've created through your choices and perspective.",
];
