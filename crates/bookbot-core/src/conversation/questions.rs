//! The fixed preference question catalog.
//!
//! Four questions, four options each. Option texts keep their leading
//! letter code (A-D); the recorded answer's letter drives the offline
//! recommendation lookup.

use bookbot_types::session::QUESTION_COUNT;

/// One multiple-choice preference question.
#[derive(Debug, Clone, Copy)]
pub struct Question {
    pub text: &'static str,
    pub options: [&'static str; 4],
}

pub const QUESTIONS: [Question; QUESTION_COUNT as usize] = [
    Question {
        text: "What type of stories do you usually enjoy?",
        options: [
            "A. Mysteries and Thrillers",
            "B. Romance and Emotions",
            "C. Science Fiction or Fantasy",
            "D. Non-fiction and Real Events",
        ],
    },
    Question {
        text: "What kind of pacing do you prefer in a book?",
        options: [
            "A. Fast and action-packed",
            "B. Slow and reflective",
            "C. Balanced with surprises",
            "D. Depends on the topic",
        ],
    },
    Question {
        text: "Which setting appeals to you the most?",
        options: [
            "A. Modern cities or urban life",
            "B. Historical or classical worlds",
            "C. Futuristic or magical realms",
            "D. Real-life memoirs or biographies",
        ],
    },
    Question {
        text: "Why do you read books?",
        options: [
            "A. To escape reality and be thrilled",
            "B. To feel, reflect, and relate",
            "C. To explore new worlds and possibilities",
            "D. To learn and grow from real-life experiences",
        ],
    },
];

/// The question with the given 1-based index, if in range.
pub fn question(index: u8) -> Option<&'static Question> {
    if (1..=QUESTION_COUNT).contains(&index) {
        Some(&QUESTIONS[(index - 1) as usize])
    } else {
        None
    }
}
