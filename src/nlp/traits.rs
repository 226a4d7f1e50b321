//! Capability interfaces for the linguistic resources.
//!
//! The normalizer and categorizer only talk to these traits, so a host can
//! swap in a different tokenizer or tagger (or a stub in tests) without
//! touching the pipeline.

use super::tagger::PosTag;

/// Splits raw text into word-level tokens. Punctuation is never returned.
pub trait Tokenizer: Send + Sync {
    fn tokenize(&self, text: &str) -> Vec<String>;
}

/// Rule-based suffix stripping.
pub trait Stemmer: Send + Sync {
    fn stem(&self, word: &str) -> String;
}

/// Dictionary-based reduction to a base form.
pub trait Lemmatizer: Send + Sync {
    fn lemmatize(&self, word: &str) -> String;
}

/// Assigns one part-of-speech tag per token.
///
/// Implementations see the whole sequence, so a tag may depend on the
/// neighbouring tokens and not only on the token itself.
pub trait PosTagger: Send + Sync {
    fn tag(&self, tokens: &[String]) -> Vec<(String, PosTag)>;
}
