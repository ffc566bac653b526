/// Confidence label reported by the chat service, e.g. "High" or "Low"
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Confidence(String);

impl Confidence {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    /// The label exactly as the service sent it
    pub fn label(&self) -> &str {
        &self.0
    }

    /// Visual category used by the badge: the lowercased label
    pub fn category(&self) -> String {
        self.0.to_lowercase()
    }
}

impl From<String> for Confidence {
    fn from(label: String) -> Self {
        Self(label)
    }
}

/// One exchange in the conversation.
///
/// The greeting, regular replies and error replies all share this shape: the
/// greeting has no `user` text and error replies carry no metadata.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Turn {
    pub user: Option<String>,
    pub bot: String,
    pub followups: Vec<String>,
    pub confidence: Option<Confidence>,
    pub explanations: Vec<String>,
}

impl Turn {
    /// The synthetic opening turn shown before the user has typed anything
    pub fn greeting(bot: impl Into<String>, followups: Vec<String>) -> Self {
        Self {
            user: None,
            bot: bot.into(),
            followups,
            confidence: None,
            explanations: Vec::new(),
        }
    }

    /// A reply whose bot text will be filled in by the reveal animation
    pub fn pending_reply(
        user: impl Into<String>,
        confidence: Option<Confidence>,
        explanations: Vec<String>,
    ) -> Self {
        Self {
            user: Some(user.into()),
            bot: String::new(),
            followups: Vec::new(),
            confidence,
            explanations,
        }
    }

    /// A turn reporting that the submission failed
    pub fn failed(user: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            user: Some(user.into()),
            bot: message.into(),
            ..Self::default()
        }
    }
}

/// Ordered history of turns.
///
/// Only the newest turn may carry follow-up suggestions: appending a turn
/// clears them from every earlier one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new(first: Turn) -> Self {
        Self { turns: vec![first] }
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn last(&self) -> Option<&Turn> {
        self.turns.last()
    }

    /// Append a turn and return its index
    pub fn push(&mut self, turn: Turn) -> usize {
        for earlier in &mut self.turns {
            earlier.followups.clear();
        }
        self.turns.push(turn);
        self.turns.len() - 1
    }

    /// Replace the displayed bot text of a turn
    pub fn set_bot(&mut self, index: usize, text: String) {
        if let Some(turn) = self.turns.get_mut(index) {
            turn.bot = text;
        }
    }

    /// Attach follow-ups to a turn, but only while it is still the newest one
    pub fn attach_followups(&mut self, index: usize, followups: Vec<String>) {
        if index + 1 != self.turns.len() {
            return;
        }
        if let Some(turn) = self.turns.get_mut(index) {
            turn.followups = followups;
        }
    }

    /// Number of turns carrying follow-ups; never more than one
    pub fn turns_with_followups(&self) -> usize {
        self.turns.iter().filter(|t| !t.followups.is_empty()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn starters() -> Vec<String> {
        vec!["a".to_string(), "b".to_string()]
    }

    #[test]
    fn test_confidence_category_is_lowercased_label() {
        let confidence = Confidence::new("High");
        assert_eq!(confidence.label(), "High");
        assert_eq!(confidence.category(), "high");
        assert_eq!(Confidence::new("MEDIUM").category(), "medium");
    }

    #[test]
    fn test_push_clears_earlier_followups() {
        let mut transcript = Transcript::new(Turn::greeting("hi", starters()));
        let index = transcript.push(Turn::failed("help", "nope"));

        assert_eq!(index, 1);
        assert!(transcript.turns()[0].followups.is_empty());
        assert_eq!(transcript.turns_with_followups(), 0);
    }

    #[test]
    fn test_attach_followups_only_on_newest_turn() {
        let mut transcript = Transcript::new(Turn::greeting("hi", Vec::new()));
        transcript.push(Turn::pending_reply("q1", None, Vec::new()));
        transcript.push(Turn::pending_reply("q2", None, Vec::new()));

        transcript.attach_followups(1, starters());
        assert!(transcript.turns()[1].followups.is_empty());

        transcript.attach_followups(2, starters());
        assert_eq!(transcript.turns()[2].followups, starters());
        assert_eq!(transcript.turns_with_followups(), 1);
    }

    #[test]
    fn test_set_bot_out_of_range_is_ignored() {
        let mut transcript = Transcript::new(Turn::greeting("hi", Vec::new()));
        transcript.set_bot(5, "ghost".to_string());
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.turns()[0].bot, "hi");
    }
}
