//! Conversation state and every transition it can go through.
//!
//! All mutation happens in [`ChatState::apply`]. Timers and the network call
//! live in the widget; they only ever feed actions back in. Each timer event
//! carries the id of the submission or reveal that armed it, so an event that
//! outlives its owner is dropped here instead of corrupting another turn.

use crate::client::error::ChatError;
use crate::config::ChatConfig;
use crate::reveal::WordReveal;
use crate::types::{ChatReply, Confidence, Transcript, Turn};
use std::rc::Rc;
use tracing::{debug, warn};
use yew::Reducible;

/// Identifies one submission from start to reply
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubmissionId(u64);

/// Identifies one run of the reveal animation
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RevealId(u64);

/// The submission currently waiting on the chat service
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingSubmission {
    pub id: SubmissionId,
    pub text: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct ActiveReveal {
    id: RevealId,
    turn: usize,
    cursor: WordReveal,
    followups: Vec<String>,
}

pub enum ChatAction {
    DraftChanged(String),
    Submit(String),
    /// Same as `Submit`, triggered from a follow-up chip
    SelectFollowup(String),
    LoadingDelayElapsed(SubmissionId),
    Replied {
        id: SubmissionId,
        result: Result<ChatReply, ChatError>,
    },
    RevealTick(RevealId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatState {
    config: Rc<ChatConfig>,
    transcript: Transcript,
    draft: String,
    loading: bool,
    pending: Option<PendingSubmission>,
    reveal: Option<ActiveReveal>,
    next_id: u64,
}

impl ChatState {
    pub fn new(config: Rc<ChatConfig>) -> Self {
        let greeting = Turn::greeting(config.greeting.clone(), config.starter_followups.clone());
        Self {
            config,
            transcript: Transcript::new(greeting),
            draft: String::new(),
            loading: false,
            pending: None,
            reveal: None,
            next_id: 0,
        }
    }

    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// True from submit until the reply (or failure) lands
    pub fn is_submitting(&self) -> bool {
        self.pending.is_some()
    }

    pub fn pending(&self) -> Option<&PendingSubmission> {
        self.pending.as_ref()
    }

    /// Id of the reveal animation that still needs ticks, if any
    pub fn active_reveal(&self) -> Option<RevealId> {
        self.reveal.as_ref().map(|r| r.id)
    }

    pub fn apply(&mut self, action: ChatAction) {
        match action {
            ChatAction::DraftChanged(text) => self.draft = text,
            ChatAction::Submit(text) | ChatAction::SelectFollowup(text) => self.submit(&text),
            ChatAction::LoadingDelayElapsed(id) => {
                if self.is_pending(id) {
                    self.loading = true;
                }
            }
            ChatAction::Replied { id, result } => self.finish_submission(id, result),
            ChatAction::RevealTick(id) => self.reveal_tick(id),
        }
    }

    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn is_pending(&self, id: SubmissionId) -> bool {
        self.pending.as_ref().is_some_and(|p| p.id == id)
    }

    fn submit(&mut self, text: &str) {
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        if let Some(pending) = &self.pending {
            debug!(submission = ?pending.id, "Ignoring submit while a request is in flight");
            return;
        }

        self.cancel_reveal();

        let id = SubmissionId(self.next_id());
        debug!(submission = ?id, chars = text.len(), "Submitting message");
        self.pending = Some(PendingSubmission {
            id,
            text: text.to_string(),
        });
    }

    fn finish_submission(&mut self, id: SubmissionId, result: Result<ChatReply, ChatError>) {
        if !self.is_pending(id) {
            debug!(submission = ?id, "Dropping reply for a stale submission");
            return;
        }
        let Some(PendingSubmission { text, .. }) = self.pending.take() else {
            return;
        };

        self.loading = false;
        self.draft.clear();

        match result {
            Ok(reply) => self.start_reply(text, reply),
            Err(e) => {
                warn!(submission = ?id, error = %e, "Chat request failed");
                let message = self.config.error_message.clone();
                self.transcript.push(Turn::failed(text, message));
            }
        }
    }

    fn start_reply(&mut self, user: String, reply: ChatReply) {
        let ChatReply {
            response,
            followups,
            confidence,
            explanations,
        } = reply;

        let turn = self.transcript.push(Turn::pending_reply(
            user,
            confidence.map(Confidence::from),
            explanations,
        ));

        let cursor = WordReveal::new(&response);
        if cursor.is_complete() {
            self.transcript.attach_followups(turn, followups);
            return;
        }

        let id = RevealId(self.next_id());
        debug!(reveal = ?id, words = cursor.total_words(), "Starting reveal");
        self.reveal = Some(ActiveReveal {
            id,
            turn,
            cursor,
            followups,
        });
    }

    fn reveal_tick(&mut self, id: RevealId) {
        let Some(reveal) = self.reveal.as_mut().filter(|r| r.id == id) else {
            return;
        };

        if let Some(text) = reveal.cursor.advance() {
            self.transcript.set_bot(reveal.turn, text);
        }

        if reveal.cursor.is_complete()
            && let Some(done) = self.reveal.take()
        {
            debug!(reveal = ?done.id, "Reveal finished");
            self.transcript.attach_followups(done.turn, done.followups);
        }
    }

    /// Stop a running reveal, leaving its turn with the full reply text
    fn cancel_reveal(&mut self) {
        if let Some(reveal) = self.reveal.take() {
            debug!(reveal = ?reveal.id, "Cancelling reveal for a new submission");
            self.transcript.set_bot(reveal.turn, reveal.cursor.full_text());
        }
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new(Rc::new(ChatConfig::default()))
    }
}

impl Reducible for ChatState {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut state = Rc::unwrap_or_clone(self);
        state.apply(action);
        Rc::new(state)
    }
}
