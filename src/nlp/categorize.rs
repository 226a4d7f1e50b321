//! Noun / pronoun / verb partition of a tagged token sequence.

use super::tagger::PosTag;
use serde::{Deserialize, Serialize};

/// Tags that put a token in the pronoun bucket: personal, possessive,
/// interrogative-personal and interrogative-possessive.
pub const PRONOUN_TAGS: &[&str] = &["PRP", "PRP$", "WP", "WP$"];

/// Noun-class tag prefix.
pub const NOUN_PREFIX: &str = "NN";

/// Verb-class tag prefix.
pub const VERB_PREFIX: &str = "VB";

/// Normalized tokens grouped by word class, each in first-occurrence order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenSet {
    pub nouns: Vec<String>,
    pub pronouns: Vec<String>,
    pub verbs: Vec<String>,
}

impl TokenSet {
    /// Build the three buckets from a tagged sequence.
    ///
    /// Each bucket is an independent membership test over the same sequence,
    /// not a mutually-exclusive partition. Tokens that match none of the
    /// predicates (adjectives, numbers, ...) are dropped.
    pub fn from_tagged(tagged: &[(String, PosTag)]) -> Self {
        Self {
            nouns: select(tagged, |tag| tag.starts_with(NOUN_PREFIX)),
            pronouns: select(tagged, |tag| PRONOUN_TAGS.contains(&tag)),
            verbs: select(tagged, |tag| tag.starts_with(VERB_PREFIX)),
        }
    }

    /// True when all three buckets are empty.
    pub fn is_empty(&self) -> bool {
        self.nouns.is_empty() && self.pronouns.is_empty() && self.verbs.is_empty()
    }
}

fn select(tagged: &[(String, PosTag)], pred: impl Fn(&str) -> bool) -> Vec<String> {
    tagged
        .iter()
        .filter(|(_, tag)| pred(tag.as_str()))
        .map(|(word, _)| word.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagged(pairs: &[(&str, PosTag)]) -> Vec<(String, PosTag)> {
        pairs.iter().map(|(w, t)| ((*w).to_string(), *t)).collect()
    }

    #[test]
    fn buckets_follow_tag_classes() {
        let set = TokenSet::from_tagged(&tagged(&[
            ("love", PosTag::Vb),
            ("dog", PosTag::Nn),
            ("us", PosTag::Prp),
            ("cat", PosTag::Nns),
            ("ran", PosTag::Vbd),
            ("whose", PosTag::WpPossessive),
        ]));
        assert_eq!(set.nouns, vec!["dog", "cat"]);
        assert_eq!(set.pronouns, vec!["us", "whose"]);
        assert_eq!(set.verbs, vec!["love", "ran"]);
    }

    #[test]
    fn unmatched_tags_are_dropped() {
        let set = TokenSet::from_tagged(&tagged(&[
            ("happi", PosTag::Jj),
            ("34", PosTag::Cd),
            ("quickli", PosTag::Rb),
            ("whatever", PosTag::Wdt),
        ]));
        assert!(set.is_empty());
    }

    #[test]
    fn duplicates_keep_occurrence_order() {
        let set = TokenSet::from_tagged(&tagged(&[
            ("dog", PosTag::Nn),
            ("cat", PosTag::Nn),
            ("dog", PosTag::Nn),
        ]));
        assert_eq!(set.nouns, vec!["dog", "cat", "dog"]);
    }

    #[test]
    fn empty_input_gives_empty_set() {
        assert_eq!(TokenSet::from_tagged(&[]), TokenSet::default());
    }
}
