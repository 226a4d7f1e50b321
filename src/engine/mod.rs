//! Intent resolution.
//!
//! Maps one raw utterance to exactly one reply through a fixed-priority
//! rule cascade:
//!
//! 1. greeting phrase in the raw text
//! 2. farewell phrase in the raw text
//! 3. age in the raw text (and a salary model is loaded)
//! 4. at least one noun after normalization
//! 5. at least one verb or pronoun after normalization
//! 6. fallback
//!
//! The first rule that applies produces the reply; nothing is scored.
//!
//! ## Design
//! - Rules are data ([`resolver`]), so the priority order is one table
//! - The salary predictor is injected; tests pass a stub model
//! - Normalization only runs when a rule past the phrase checks needs it

pub mod phrases;
pub mod resolver;

pub use resolver::IntentResolver;

use serde::{Deserialize, Serialize};
use std::fmt;

pub const GREETING_REPLY: &str = "Hello! How can I assist you today?";
pub const FAREWELL_REPLY: &str = "Goodbye! Take care.";
pub const FALLBACK_REPLY: &str = "I'm not sure how to respond to that. Could you rephrase?";
pub const NO_AGE_REPLY: &str = "No age detected in input.";

/// The category of request the resolver selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Intent {
    Greeting,
    Farewell,
    AgeSalary,
    NounTopic,
    VerbTopic,
    Unknown,
}

impl Intent {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Greeting => "greeting",
            Self::Farewell => "farewell",
            Self::AgeSalary => "age_salary",
            Self::NounTopic => "noun_topic",
            Self::VerbTopic => "verb_topic",
            Self::Unknown => "unknown",
        }
    }

    /// Parse a stored intent name; unrecognized names become `Unknown`.
    pub fn from_str_lossy(s: &str) -> Self {
        match s {
            "greeting" => Self::Greeting,
            "farewell" => Self::Farewell,
            "age_salary" => Self::AgeSalary,
            "noun_topic" => Self::NounTopic,
            "verb_topic" => Self::VerbTopic,
            _ => Self::Unknown,
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of one turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    pub intent: Intent,
    pub reply: String,
}

/// `I don't know much about {noun}. Can you help me understand it?`
pub fn noun_topic_reply(noun: &str) -> String {
    format!("I don't know much about {noun}. Can you help me understand it?")
}

/// `I would like to know about {topic}.`
pub fn verb_topic_reply(topic: &str) -> String {
    format!("I would like to know about {topic}.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intent_names_round_trip() {
        for intent in [
            Intent::Greeting,
            Intent::Farewell,
            Intent::AgeSalary,
            Intent::NounTopic,
            Intent::VerbTopic,
            Intent::Unknown,
        ] {
            assert_eq!(Intent::from_str_lossy(intent.as_str()), intent);
        }
        assert_eq!(Intent::from_str_lossy("small_talk"), Intent::Unknown);
    }

    #[test]
    fn resolution_serializes_snake_case() {
        let resolution = Resolution {
            intent: Intent::AgeSalary,
            reply: "x".into(),
        };
        let json = serde_json::to_string(&resolution).unwrap();
        assert_eq!(json, r#"{"intent":"age_salary","reply":"x"}"#);
    }

    #[test]
    fn topic_templates() {
        assert_eq!(
            noun_topic_reply("dog"),
            "I don't know much about dog. Can you help me understand it?"
        );
        assert_eq!(verb_topic_reply("run jump"), "I would like to know about run jump.");
    }
}
