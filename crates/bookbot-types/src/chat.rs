//! Conversation turn and transcript types for BookBot.
//!
//! A [`Transcript`] is the ordered history of [`Turn`]s for one session.
//! Turns are immutable once appended; the transcript only grows, except
//! for a full reset which clears it wholesale.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Author of a conversation turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Role::User => write!(f, "user"),
            Role::Assistant => write!(f, "assistant"),
        }
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "assistant" => Ok(Role::Assistant),
            other => Err(format!("invalid role: '{other}'")),
        }
    }
}

/// One message in a conversation.
///
/// Question turns (`is_question`) carry the four answer options and exist
/// for the host UI's multiple-choice rendering; they are stripped from the
/// dialogue passed to the response generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Turn {
    pub role: Role,
    pub content: String,
    #[serde(default)]
    pub is_question: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<String>,
    pub created_at: DateTime<Utc>,
}

impl Turn {
    /// A plain user turn.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            is_question: false,
            options: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// A plain assistant turn.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            is_question: false,
            options: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// An assistant question turn carrying its multiple-choice options.
    pub fn question(content: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            is_question: true,
            options,
            created_at: Utc::now(),
        }
    }
}

/// The ordered history of turns for one session.
///
/// Insertion order is conversation order. Never mutated in place: turns are
/// appended, or the whole transcript is cleared on an explicit reset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a turn to the end of the transcript.
    pub fn push(&mut self, turn: Turn) {
        self.turns.push(turn);
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Copy of this transcript with question turns stripped.
    ///
    /// Question turns are UI artifacts, not model-relevant dialogue.
    pub fn dialogue(&self) -> Transcript {
        Transcript {
            turns: self
                .turns
                .iter()
                .filter(|t| !t.is_question)
                .cloned()
                .collect(),
        }
    }

    /// Remove all turns. Only valid as part of a full session reset.
    pub fn clear(&mut self) {
        self.turns.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_roundtrip() {
        for role in [Role::User, Role::Assistant] {
            let s = role.to_string();
            let parsed: Role = s.parse().unwrap();
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn test_role_serde() {
        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: Role = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Role::Assistant);
    }

    #[test]
    fn test_turn_constructors() {
        let user = Turn::user("hello");
        assert_eq!(user.role, Role::User);
        assert!(!user.is_question);
        assert!(user.options.is_empty());

        let question = Turn::question("Pick one", vec!["A. x".into(), "B. y".into()]);
        assert_eq!(question.role, Role::Assistant);
        assert!(question.is_question);
        assert_eq!(question.options.len(), 2);
    }

    #[test]
    fn test_transcript_push_preserves_order() {
        let mut transcript = Transcript::new();
        transcript.push(Turn::assistant("hi"));
        transcript.push(Turn::user("hello"));
        transcript.push(Turn::assistant("how can I help?"));

        let contents: Vec<&str> = transcript.turns().iter().map(|t| t.content.as_str()).collect();
        assert_eq!(contents, vec!["hi", "hello", "how can I help?"]);
        assert_eq!(transcript.last().unwrap().content, "how can I help?");
    }

    #[test]
    fn test_dialogue_strips_question_turns() {
        let mut transcript = Transcript::new();
        transcript.push(Turn::assistant("greeting"));
        transcript.push(Turn::question("Q1", vec!["A".into()]));
        transcript.push(Turn::user("A"));

        let dialogue = transcript.dialogue();
        assert_eq!(dialogue.len(), 2);
        assert!(dialogue.turns().iter().all(|t| !t.is_question));
        // Original is untouched
        assert_eq!(transcript.len(), 3);
    }

    #[test]
    fn test_clear() {
        let mut transcript = Transcript::new();
        transcript.push(Turn::user("x"));
        transcript.clear();
        assert!(transcript.is_empty());
    }
}
