//! Dictionary lemmatizer (noun mode).
//!
//! Tries an irregular-plural exception table, then the regular noun
//! detachment rules. A candidate is only accepted when the [`Lexicon`]
//! knows it as a noun; among accepted candidates the shortest wins.
//! Anything else comes back unchanged, which is why stems such as `happi`
//! pass through untouched.

use super::lexicon::Lexicon;
use super::traits::Lemmatizer;
use std::sync::Arc;

/// Regular noun suffix rewrites.
const DETACHMENT_RULES: &[(&str, &str)] = &[
    ("s", ""),
    ("ses", "s"),
    ("ves", "f"),
    ("xes", "x"),
    ("zes", "z"),
    ("ches", "ch"),
    ("shes", "sh"),
    ("men", "man"),
    ("ies", "y"),
];

/// Irregular plurals the rules cannot reach.
const EXCEPTIONS: &[(&str, &str)] = &[
    ("children", "child"),
    ("men", "man"),
    ("women", "woman"),
    ("mice", "mouse"),
    ("geese", "goose"),
    ("teeth", "tooth"),
    ("feet", "foot"),
    ("oxen", "ox"),
    ("lice", "louse"),
    ("data", "datum"),
    ("criteria", "criterion"),
    ("phenomena", "phenomenon"),
    ("alumni", "alumnus"),
    ("cacti", "cactus"),
    ("fungi", "fungus"),
];

/// WordNet-style noun lemmatizer backed by the shared lexicon.
pub struct MorphyLemmatizer {
    lexicon: Arc<Lexicon>,
}

impl MorphyLemmatizer {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    fn candidates(&self, word: &str) -> Vec<String> {
        let mut found = Vec::new();
        if self.lexicon.is_noun(word) {
            found.push(word.to_string());
        }

        if let Some((_, base)) = EXCEPTIONS.iter().find(|(form, _)| *form == word) {
            found.push((*base).to_string());
            return found;
        }

        for (suffix, replacement) in DETACHMENT_RULES {
            if let Some(stem) = word.strip_suffix(suffix) {
                let base = format!("{stem}{replacement}");
                if !base.is_empty() && self.lexicon.is_noun(&base) {
                    found.push(base);
                }
            }
        }
        found
    }
}

impl Lemmatizer for MorphyLemmatizer {
    fn lemmatize(&self, word: &str) -> String {
        self.candidates(word)
            .into_iter()
            .min_by_key(String::len)
            .unwrap_or_else(|| word.to_string())
    }
}
