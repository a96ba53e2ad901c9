//! The vibe-check question catalog
//!
//! Option order is display order and is significant: each list runs from
//! one end of the preference scale to the other (e.g. "Silence is
//! Golden" through "Blast the Tunes"), so it must be preserved verbatim.

/// One survey question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Column the answer is stored under in the survey row.
    pub id: &'static str,
    /// Prompt shown as the step heading.
    pub text: &'static str,
    /// Secondary line under the prompt.
    pub subtext: &'static str,
    /// Selectable answers, in display order.
    pub options: &'static [&'static str],
}

/// The five vibe-check questions, in the order they are asked.
pub const QUESTIONS: &[Question] = &[
    Question {
        id: "vibe_music",
        text: "How's the volume?",
        subtext: "Do you like tunes on the course?",
        options: &["Silence is Golden", "Quiet Background", "Blast the Tunes"],
    },
    Question {
        id: "vibe_transport",
        text: "How do you get around?",
        subtext: "Walking, riding, or surfing?",
        options: &["Walking / Push Cart", "Power Cart Only", "Whatever the group does"],
    },
    Question {
        id: "vibe_skill",
        text: "What's your skill level?",
        subtext: "Be honest, we don't judge.",
        options: &["Newbie (100+)", "Intermediate (85-95)", "Stick (70s-80s)"],
    },
    Question {
        id: "vibe_drinks",
        text: "Thirsty out there?",
        subtext: "How do you handle the 19th hole?",
        options: &["Sober Round", "A Couple Cold Ones", "Party Time"],
    },
    Question {
        id: "vibe_pace",
        text: "Pace of Play?",
        subtext: "Are we rushing or relaxing?",
        options: &["Speed Golf (Sub 3.5h)", "Standard (4h)", "Relaxed / No Rush"],
    },
];

/// Favorite-course choices offered on the contact-details step.
pub const COURSES: &[&str] = &[
    "Apple Creek Golf Course",
    "Blue Devil Golf Club",
    "Brewster’s Kananaskis Ranch Golf Course",
    "Canmore Golf & Curling Club",
    "Fairmont Banff Springs Golf Course",
    "Fox Hollow Golf Course",
    "Kananaskis Country Golf Course",
    "McCall Lake Golf Course",
    "Silvertip Resort",
    "Stewart Creek Golf & Country Club",
    "The Winston Golf Club (Calgary)",
];

/// Look up a question by its identifier.
pub fn question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}
