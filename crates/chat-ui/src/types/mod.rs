mod transcript;

pub use transcript::{Confidence, Transcript, Turn};

use serde::{Deserialize, Serialize};

/// Body of `POST /chat`
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Reply returned by the chat service.
///
/// Only `response` is required; everything else defaults to empty so a bare
/// `{"response": "..."}` body is a valid reply.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,

    #[serde(default)]
    pub followups: Vec<String>,

    #[serde(default)]
    pub confidence: Option<String>,

    #[serde(default)]
    pub explanations: Vec<String>,
}

impl ChatReply {
    /// Create a reply carrying only the response text
    pub fn text(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
            ..Self::default()
        }
    }

    pub fn with_followups<I, S>(mut self, followups: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.followups = followups.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_confidence(mut self, confidence: impl Into<String>) -> Self {
        self.confidence = Some(confidence.into());
        self
    }

    pub fn with_explanations<I, S>(mut self, explanations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.explanations = explanations.into_iter().map(Into::into).collect();
        self
    }
}
