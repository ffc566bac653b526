//! Word-by-word reveal of a bot reply.
//!
//! The cursor itself knows nothing about timers: the widget drives it with an
//! `Interval` and feeds each tick into the reducer, which calls [`WordReveal::advance`].

/// Cursor over the whitespace-delimited words of a reply
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordReveal {
    words: Vec<String>,
    shown: usize,
}

impl WordReveal {
    pub fn new(text: &str) -> Self {
        Self {
            words: text.split_whitespace().map(str::to_string).collect(),
            shown: 0,
        }
    }

    /// Reveal one more word and return the text visible afterwards.
    /// Returns `None` once every word is already visible.
    pub fn advance(&mut self) -> Option<String> {
        if self.is_complete() {
            return None;
        }
        self.shown += 1;
        Some(self.revealed())
    }

    /// Space-joined prefix of the words revealed so far
    pub fn revealed(&self) -> String {
        self.words[..self.shown].join(" ")
    }

    /// The text as it reads once the reveal has finished
    pub fn full_text(&self) -> String {
        self.words.join(" ")
    }

    pub fn is_complete(&self) -> bool {
        self.shown >= self.words.len()
    }

    pub fn total_words(&self) -> usize {
        self.words.len()
    }
}
