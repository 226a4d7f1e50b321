//! Greeting and farewell phrase detection over the raw utterance.

use crate::config::MatchMode;
use aho_corasick::AhoCorasick;
use std::sync::LazyLock;

/// Phrases that select the greeting reply.
pub const GREETING_PHRASES: &[&str] = &[
    "hi",
    "hello",
    "hey",
    "hola",
    "greetings",
    "what's up",
    "sup",
    "yo",
];

/// Phrases that select the farewell reply.
pub const FAREWELL_PHRASES: &[&str] = &[
    "bye",
    "goodbye",
    "see you",
    "take care",
    "later",
    "farewell",
];

pub static GREETINGS: LazyLock<PhraseSet> = LazyLock::new(|| PhraseSet::new(GREETING_PHRASES));
pub static FAREWELLS: LazyLock<PhraseSet> = LazyLock::new(|| PhraseSet::new(FAREWELL_PHRASES));

/// A fixed phrase set, case-insensitive over ASCII letters.
pub struct PhraseSet {
    automaton: AhoCorasick,
}

impl PhraseSet {
    fn new(phrases: &[&str]) -> Self {
        // Folds ASCII case only. A full Unicode lowercase would turn "Hİ" into "hi̇".
        let automaton = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(phrases)
            .expect("phrase set builds");
        Self { automaton }
    }

    /// Whether any phrase occurs in `text` under `mode`.
    pub fn matches(&self, text: &str, mode: MatchMode) -> bool {
        match mode {
            MatchMode::Substring => self.automaton.is_match(text),
            // Overlapping search so "hi" inside "this" cannot hide a later "hi".
            MatchMode::WordBoundary => self
                .automaton
                .find_overlapping_iter(text)
                .any(|m| is_word_boundary(text, m.start(), m.end())),
        }
    }
}

fn is_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}
