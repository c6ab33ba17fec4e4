//! Conversation state machine.
//!
//! Tracks which stage the session is in and which side effects each user
//! action triggers: storing an answer, emitting the next question,
//! requesting a recommendation. Single-owner and sequential; the host
//! must not submit a new action until the previous one resolves.

pub mod questions;

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};
use uuid::Uuid;

use bookbot_types::chat::{Transcript, Turn};
use bookbot_types::error::RemoteError;
use bookbot_types::request::GenerateRequest;
use bookbot_types::session::{Mode, PreferenceProfile, SessionStage, UserAction, QUESTION_COUNT};

use crate::generator::ResponseGenerator;

/// Read-only view of the conversation for host rendering.
#[derive(Debug)]
pub struct Snapshot<'a> {
    pub transcript: &'a Transcript,
    pub stage: SessionStage,
    pub mode: Mode,
    pub last_error: Option<&'a RemoteError>,
}

/// One conversation session: transcript, profile, stage, and the response
/// generator that answers on its behalf.
pub struct Conversation {
    id: Uuid,
    started_at: DateTime<Utc>,
    transcript: Transcript,
    profile: PreferenceProfile,
    stage: SessionStage,
    generator: ResponseGenerator,
    /// Bumped on every reset; replies tagged with a superseded generation
    /// are discarded instead of appended.
    generation: u64,
}

impl Conversation {
    /// Create a conversation in the Greeting stage. Call [`Self::start`]
    /// to run the entry action before handling user actions.
    pub fn new(generator: ResponseGenerator) -> Self {
        Self {
            id: Uuid::now_v7(),
            started_at: Utc::now(),
            transcript: Transcript::new(),
            profile: PreferenceProfile::new(),
            stage: SessionStage::Greeting,
            generator,
            generation: 0,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn stage(&self) -> SessionStage {
        self.stage
    }

    pub fn mode(&self) -> Mode {
        self.generator.mode()
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn profile(&self) -> &PreferenceProfile {
        &self.profile
    }

    /// Read-only snapshot of {transcript, stage, mode, last error}.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            transcript: &self.transcript,
            stage: self.stage,
            mode: self.generator.mode(),
            last_error: self.generator.last_error(),
        }
    }

    /// Entry action: generate the greeting, append it as the first
    /// assistant turn, then emit question 1.
    pub async fn start(&mut self) {
        let generation = self.generation;
        let reply = self
            .generator
            .generate(&self.transcript, &GenerateRequest::Greeting)
            .await;
        if self.generation != generation {
            debug!("discarding greeting from superseded session generation");
            return;
        }
        self.transcript.push(Turn::assistant(reply));
        self.ask(1);
        info!(session = %self.id, mode = %self.generator.mode(), "conversation started");
    }

    /// The only inbound mutation path from the host.
    pub async fn handle_action(&mut self, action: UserAction) {
        match action {
            UserAction::SelectOption(option) => self.select_option(option).await,
            UserAction::FreeText(text) => self.free_text(text).await,
            UserAction::Reset => self.reset().await,
            UserAction::ToggleMode => {
                self.generator.toggle_mode();
                self.reset().await;
            }
        }
    }

    /// Emit question `k` as an assistant question turn and await its answer.
    fn ask(&mut self, k: u8) {
        let Some(question) = questions::question(k) else {
            warn!(question = k, "no such question in catalog");
            return;
        };
        self.transcript.push(Turn::question(
            question.text,
            question.options.iter().map(|o| o.to_string()).collect(),
        ));
        self.stage = SessionStage::AwaitingAnswer(k);
    }

    async fn select_option(&mut self, option: String) {
        let Some(k) = self.stage.awaiting_question() else {
            warn!(stage = %self.stage, "option selected outside a question stage, ignoring");
            return;
        };

        self.transcript.push(Turn::user(option.clone()));
        self.profile.record(k, option);

        if k < QUESTION_COUNT {
            self.ask(k + 1);
        } else {
            self.recommend().await;
        }
    }

    /// All four answers are in: request 3-5 recommendations, then open the
    /// free-form discussion.
    async fn recommend(&mut self) {
        self.stage = SessionStage::Recommending;
        let request = GenerateRequest::Recommendations(self.profile.clone());

        let generation = self.generation;
        let history = self.transcript.dialogue();
        let reply = self.generator.generate(&history, &request).await;
        if self.generation != generation {
            debug!("discarding recommendations from superseded session generation");
            return;
        }

        self.transcript.push(Turn::assistant(reply));
        self.stage = SessionStage::Discussing;
        info!(session = %self.id, "recommendations delivered, discussion open");
    }

    async fn free_text(&mut self, text: String) {
        if !self.stage.accepts_free_text() {
            warn!(stage = %self.stage, "free text outside the discussion stage, ignoring");
            return;
        }

        self.transcript.push(Turn::user(text));

        let generation = self.generation;
        let history = self.transcript.dialogue();
        let reply = self
            .generator
            .generate(&history, &GenerateRequest::Discussion)
            .await;
        if self.generation != generation {
            debug!("discarding discussion reply from superseded session generation");
            return;
        }

        self.transcript.push(Turn::assistant(reply));
    }

    /// Full reset: clear transcript and profile, return to Greeting, and
    /// re-run the entry action. Mode is untouched.
    async fn reset(&mut self) {
        self.generation += 1;
        self.transcript.clear();
        self.profile.clear();
        self.stage = SessionStage::Greeting;
        info!(session = %self.id, "conversation reset");
        self.start().await;
    }
}
