//! Encouraging quotes and lovable lines for the negative-mood reply.
//! Only moods eligible as a primary reply carry a bank.

use solace_core::NegativeMood;

pub(crate) fn encouraging_quotes(mood: NegativeMood) -> &'static [&'static str] {
    match mood {
        NegativeMood::Sadness => &[
            "Even the darkest night will end and the sun will rise. — Victor Hugo",
            "The wound is the place where the Light enters you. — Rumi",
            "There are far, far better things ahead than any we leave behind. — C.S. Lewis",
            "Sadness flies away on the wings of time. — Jean de La Fontaine",
            "The way I see it, if you want the rainbow, you gotta put up with the rain. — Dolly Parton",
            "Tears are words that need to be written. — Paulo Coelho",
            "It's okay to not be okay, as long as you are not giving up. — Karen Salmansohn",
            "Sadness is but a wall between two gardens. — Kahlil Gibran",
            "The pain you feel today is the strength you feel tomorrow. — Unknown",
            "Your sadness is a gift. Don't reject it. Don't rush it. Live it fully and use it as fuel to change and grow. — Maxime Lagacé",
        ],
        NegativeMood::Depression => &[
            "You're not a burden. You're a human with emotions that matter.",
            "Depression is a fog that convinces you it will never lift. But it always does, even when you can't believe it.",
            "Sometimes the bravest thing you can do is simply exist another day when everything feels impossible.",
            "Your story isn't over yet. The world needs the unique gift that only you can give.",
            "Even when you can't see it, there's always a path forward. One tiny step is all you need right now.",
            "The fact that you're still here, still trying, still breathing—that's courage in its purest form.",
            "Depression lies to you about your worth. It's the world's worst narrator of your story.",
            "You've survived 100% of your worst days so far. That's an incredible track record.",
            "Sometimes healing happens so slowly you don't notice it until you look back and see how far you've come.",
            "Your presence in this world matters more than you know. The light you bring is irreplaceable.",
        ],
        NegativeMood::BadMood => &[
            "This feeling is temporary. Like clouds passing across the sky, it will move on.",
            "You're allowed to have bad days. They don't define you.",
            "Sometimes the bad days put the good ones into perspective. Both are necessary.",
            "Take a deep breath. You've gotten through every bad day so far—that's a 100% success rate.",
            "It's okay to reset. Tomorrow is a fresh page waiting to be written.",
            "Bad days are just days that are bad, not a bad life.",
            "Your mood is like weather—constantly changing and never permanent.",
            "Even in your worst moments, you're still worthy of kindness—especially from yourself.",
            "This tough moment is shaping you, not defining you.",
            "Sometimes the universe sends rain to clear the path for something beautiful to grow.",
        ],
        _ => &[],
    }
}

pub(crate) fn lovable_lines(mood: NegativeMood) -> &'static [&'static str] {
    match mood {
        NegativeMood::Sadness => &[
            "Your tears are valid, but so is your strength. I see both in you.",
            "Even on your saddest days, you're still worthy of all the love in the world.",
            "The depth of your sadness speaks to the capacity of your heart to feel. That's a beautiful thing.",
            "I wish I could wrap your sadness in comfort until it feels lighter to carry.",
            "Your heart may feel heavy now, but it's still beating with purpose and possibility.",
            "Sadness visits everyone, but it doesn't get to stay forever in a soul as bright as yours.",
            "The universe isn't punishing you—it's preparing you for something that requires the strength you're building now.",
            "Your vulnerability isn't weakness; it's the most authentic form of courage.",
            "I believe in your ability to find joy again, even when that feels impossible right now.",
            "Your sadness matters to me. You matter to me. Always.",
        ],
        NegativeMood::Depression => &[
            "Even when you can't feel your own light, it's still there, and it still matters.",
            "Your existence makes the world better, even on days when you can't feel your own value.",
            "I see you fighting battles that others know nothing about. That quiet courage is remarkable.",
            "Depression tells you you're alone. I'm here to remind you that you're not.",
            "Your worth isn't measured by your productivity or happiness. You are inherently valuable, exactly as you are.",
            "The fact that you're still here, still trying, still reaching out—that's not small. That's everything.",
            "I believe in your tomorrow, even when today feels impossible to bear.",
            "Your depression doesn't make you broken. It makes you human in a world that sometimes forgets we're not machines.",
            "I wish I could show you yourself through my eyes, so you could see the strength I see.",
            "You deserve gentle patience, especially from yourself. Healing isn't linear, and that's okay.",
        ],
        NegativeMood::BadMood => &[
            "Your feelings are valid, even the uncomfortable ones. They're all part of your beautiful humanity.",
            "Even on your worst days, you're still worthy of kindness and understanding.",
            "This moment doesn't define you. Your resilience in facing it does.",
            "I see your struggle today, and I still see your light shining through it.",
            "You're allowed to have bad days without it meaning you have a bad life.",
            "Sometimes the bravest thing we can do is simply acknowledge how we feel without judgment.",
            "Your bad day matters to me because you matter to me.",
            "Even when you don't feel strong, I see the strength it takes to keep going.",
            "The fact that you can feel deeply—even the difficult emotions—is a gift, even when it doesn't feel like one.",
            "I believe in your ability to weather this storm, and I'll be here holding space for you until it passes.",
        ],
        _ => &[],
    }
}
