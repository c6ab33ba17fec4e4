//! Session state vocabulary: stage, mode, preference profile, user actions.
//!
//! [`SessionStage`] is the single source of truth for which host affordances
//! are enabled (answer options vs free-text input) and what the response
//! generator is asked to do next.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Number of preference questions asked before recommending.
pub const QUESTION_COUNT: u8 = 4;

/// The conversation's current phase.
///
/// Advances only forward (Greeting -> Q1..Q4 -> Recommending -> Discussing)
/// except on an explicit full reset, which returns to Greeting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionStage {
    Greeting,
    AwaitingAnswer(u8),
    Recommending,
    Discussing,
}

impl SessionStage {
    /// Question index awaiting an answer, if any (1-based).
    pub fn awaiting_question(&self) -> Option<u8> {
        match self {
            SessionStage::AwaitingAnswer(k) => Some(*k),
            _ => None,
        }
    }

    /// Whether the free-text input affordance is enabled.
    pub fn accepts_free_text(&self) -> bool {
        matches!(self, SessionStage::Discussing)
    }
}

impl fmt::Display for SessionStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionStage::Greeting => write!(f, "greeting"),
            SessionStage::AwaitingAnswer(k) => write!(f, "awaiting_answer_{k}"),
            SessionStage::Recommending => write!(f, "recommending"),
            SessionStage::Discussing => write!(f, "discussing"),
        }
    }
}

/// Response strategy selector: remote model vs static fallback table.
///
/// Session-scoped, not global. Once flipped to Offline by a failed remote
/// call it is sticky until explicitly toggled; a conversation reset does
/// not clear it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Online,
    Offline,
}

impl Mode {
    pub fn toggled(self) -> Mode {
        match self {
            Mode::Online => Mode::Offline,
            Mode::Offline => Mode::Online,
        }
    }

    pub fn is_offline(self) -> bool {
        self == Mode::Offline
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Online => write!(f, "online"),
            Mode::Offline => write!(f, "offline"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "online" => Ok(Mode::Online),
            "offline" => Ok(Mode::Offline),
            other => Err(format!("invalid mode: '{other}'")),
        }
    }
}

/// The four recorded question answers used to drive recommendations.
///
/// Answers keep the full option text, including the leading letter code
/// (e.g. "A. Mysteries and Thrillers"). Populated incrementally; consumed
/// once all four are present to build the recommendation request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreferenceProfile {
    answers: [Option<String>; QUESTION_COUNT as usize],
}

impl PreferenceProfile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the answer for a question (1-based index).
    ///
    /// Out-of-range indices are ignored; the state machine never produces
    /// them.
    pub fn record(&mut self, question: u8, answer: impl Into<String>) {
        if (1..=QUESTION_COUNT).contains(&question) {
            self.answers[(question - 1) as usize] = Some(answer.into());
        }
    }

    /// The recorded answer for a question (1-based index), if any.
    pub fn answer(&self, question: u8) -> Option<&str> {
        if (1..=QUESTION_COUNT).contains(&question) {
            self.answers[(question - 1) as usize].as_deref()
        } else {
            None
        }
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.iter().all(|a| a.is_none())
    }

    /// Whether all four questions have been answered.
    pub fn is_complete(&self) -> bool {
        self.answers.iter().all(|a| a.is_some())
    }

    /// Leading letter code of the first answer (A-D), if recorded.
    pub fn category_letter(&self) -> Option<char> {
        self.answer(1).and_then(|a| a.chars().next())
    }

    /// Forget all answers. Only valid as part of a full session reset.
    pub fn clear(&mut self) {
        self.answers = Default::default();
    }
}

/// A user action arriving from the host UI.
///
/// This is the only mutation path into the conversation core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// The user picked one of the current question's options.
    SelectOption(String),
    /// The user sent a free-text message (discussion stage).
    FreeText(String),
    /// Start the conversation over. Mode is untouched.
    Reset,
    /// Flip between online and offline mode, then reset.
    ToggleMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_awaiting_question() {
        assert_eq!(SessionStage::AwaitingAnswer(2).awaiting_question(), Some(2));
        assert_eq!(SessionStage::Greeting.awaiting_question(), None);
        assert_eq!(SessionStage::Discussing.awaiting_question(), None);
    }

    #[test]
    fn test_stage_accepts_free_text() {
        assert!(SessionStage::Discussing.accepts_free_text());
        assert!(!SessionStage::AwaitingAnswer(1).accepts_free_text());
        assert!(!SessionStage::Greeting.accepts_free_text());
    }

    #[test]
    fn test_mode_toggle() {
        assert_eq!(Mode::Online.toggled(), Mode::Offline);
        assert_eq!(Mode::Offline.toggled(), Mode::Online);
        assert_eq!(Mode::default(), Mode::Online);
    }

    #[test]
    fn test_mode_roundtrip() {
        for mode in [Mode::Online, Mode::Offline] {
            let parsed: Mode = mode.to_string().parse().unwrap();
            assert_eq!(mode, parsed);
        }
    }

    #[test]
    fn test_profile_record_and_complete() {
        let mut profile = PreferenceProfile::new();
        assert!(profile.is_empty());
        assert!(!profile.is_complete());

        profile.record(1, "A. Mysteries and Thrillers");
        profile.record(2, "B. Slow and reflective");
        profile.record(3, "C. Futuristic or magical realms");
        assert_eq!(profile.len(), 3);
        assert!(!profile.is_complete());

        profile.record(4, "D. To learn and grow from real-life experiences");
        assert!(profile.is_complete());
        assert_eq!(profile.answer(1), Some("A. Mysteries and Thrillers"));
        assert_eq!(profile.answer(4), Some("D. To learn and grow from real-life experiences"));
    }

    #[test]
    fn test_profile_out_of_range_ignored() {
        let mut profile = PreferenceProfile::new();
        profile.record(0, "nope");
        profile.record(5, "nope");
        assert!(profile.is_empty());
        assert_eq!(profile.answer(0), None);
        assert_eq!(profile.answer(5), None);
    }

    #[test]
    fn test_profile_category_letter() {
        let mut profile = PreferenceProfile::new();
        assert_eq!(profile.category_letter(), None);
        profile.record(1, "B. Romance and Emotions");
        assert_eq!(profile.category_letter(), Some('B'));
    }

    #[test]
    fn test_profile_clear() {
        let mut profile = PreferenceProfile::new();
        profile.record(1, "A. x");
        profile.clear();
        assert!(profile.is_empty());
    }
}
