//! Fixed English stopword set.

use std::collections::HashSet;
use std::sync::LazyLock;

/// The standard English stopword list (179 entries).
const ENGLISH: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan",
    "shan't", "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't",
    "wouldn", "wouldn't",
];

static ENGLISH_SET: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH.iter().copied().collect());

/// A stopword set: the English base list plus optional extra words.
#[derive(Debug, Clone, Default)]
pub struct Stopwords {
    extra: HashSet<String>,
}

impl Stopwords {
    /// The built-in English list only.
    pub fn english() -> Self {
        Self::default()
    }

    /// The English list extended with `extra` (matched case-insensitively).
    pub fn with_extra<I, S>(extra: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            extra: extra
                .into_iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Whether `word` is a stopword. Comparison uses the lowercase form.
    pub fn contains(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        ENGLISH_SET.contains(lower.as_str()) || self.extra.contains(&lower)
    }

    pub fn len(&self) -> usize {
        ENGLISH_SET.len() + self.extra.iter().filter(|w| !ENGLISH_SET.contains(w.as_str())).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn english_list_has_expected_size() {
        assert_eq!(Stopwords::english().len(), 179);
    }

    #[test]
    fn matching_is_case_insensitive() {
        let sw = Stopwords::english();
        assert!(sw.contains("The"));
        assert!(sw.contains("I"));
        assert!(sw.contains("don't"));
        assert!(!sw.contains("dog"));
    }

    #[test]
    fn pronouns_outside_the_list_survive() {
        let sw = Stopwords::english();
        assert!(!sw.contains("us"));
        assert!(!sw.contains("whose"));
    }

    #[test]
    fn extra_words_extend_the_set() {
        let sw = Stopwords::with_extra(["Please", "  ", "the"]);
        assert!(sw.contains("please"));
        assert_eq!(sw.len(), 180);
    }
}
