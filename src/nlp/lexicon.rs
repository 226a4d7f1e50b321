//! Word → candidate tag table shared by the tagger and the lemmatizer.
//!
//! Entries are written in dictionary form. Because the tagger runs on
//! stemmed tokens, every entry is also indexed under its Porter stem
//! (`salary` is reachable as `salari`), unless that stem is already a word
//! of its own. Only dictionary forms count as lemmas.
//!
//! A host can extend the built-in table from a plain-text file:
//!
//! ```text
//! # word<TAB>TAG [TAG...]
//! rustacean	NN
//! refactor	VB NN
//! ```

use super::stemmer::PorterStemmer;
use super::tagger::PosTag;
use super::traits::Stemmer;
use crate::error::EngineError;
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Built-in English entries: (word, space-separated candidate tags, most likely first).
const ENGLISH: &[(&str, &str)] = &[
    // Pronouns that survive stopword removal.
    ("us", "PRP"),
    ("thee", "PRP"),
    ("thou", "PRP"),
    ("ye", "PRP"),
    ("ya", "PRP"),
    ("u", "PRP"),
    ("oneself", "PRP"),
    ("y'all", "PRP"),
    ("mine", "PRP NN"),
    ("thy", "PRP$"),
    ("thine", "PRP$"),
    ("ur", "PRP$"),
    ("whose", "WP$"),
    ("whoever", "WP"),
    ("whomever", "WP"),
    ("whatever", "WDT"),
    ("whichever", "WDT"),
    ("whenever", "WRB"),
    ("wherever", "WRB"),
    ("however", "WRB RB"),
    // Modals and clitics.
    ("could", "MD"),
    ("would", "MD"),
    ("might", "MD NN"),
    ("must", "MD"),
    ("shall", "MD"),
    ("may", "MD"),
    ("ought", "MD"),
    ("'ll", "MD"),
    ("'d", "MD"),
    ("'s", "POS VBZ"),
    ("'re", "VBP"),
    ("'ve", "VBP"),
    ("'m", "VBP"),
    ("n't", "RB"),
    // Determiners, prepositions, conjunctions.
    ("every", "DT"),
    ("another", "DT"),
    ("either", "DT CC"),
    ("neither", "DT CC"),
    ("whether", "IN"),
    ("like", "IN VB"),
    ("near", "IN JJ"),
    ("toward", "IN"),
    ("towards", "IN"),
    ("upon", "IN"),
    ("within", "IN"),
    ("without", "IN"),
    ("among", "IN"),
    ("across", "IN"),
    ("behind", "IN"),
    ("beyond", "IN"),
    ("since", "IN"),
    ("per", "IN"),
    ("via", "IN"),
    ("onto", "IN"),
    ("along", "IN"),
    ("around", "IN"),
    ("despite", "IN"),
    ("unlike", "IN"),
    ("yet", "CC RB"),
    ("plus", "CC"),
    // Interjections.
    ("oh", "UH"),
    ("yes", "UH"),
    ("yeah", "UH"),
    ("ok", "UH"),
    ("okay", "UH"),
    ("wow", "UH"),
    ("please", "UH VB"),
    ("hello", "UH"),
    ("hi", "UH"),
    ("hey", "UH"),
    // Adverbs.
    ("also", "RB"),
    ("well", "RB"),
    ("even", "RB"),
    ("back", "RB"),
    ("still", "RB"),
    ("never", "RB"),
    ("really", "RB"),
    ("always", "RB"),
    ("often", "RB"),
    ("ever", "RB"),
    ("already", "RB"),
    ("quite", "RB"),
    ("maybe", "RB"),
    ("perhaps", "RB"),
    ("almost", "RB"),
    ("soon", "RB"),
    ("later", "RB"),
    ("together", "RB"),
    ("quickly", "RB"),
    ("slowly", "RB"),
    ("usually", "RB"),
    ("away", "RB"),
    ("enough", "RB"),
    ("not", "RB"),
    // Numbers.
    ("one", "CD"),
    ("two", "CD"),
    ("three", "CD"),
    ("four", "CD"),
    ("five", "CD"),
    ("six", "CD"),
    ("seven", "CD"),
    ("eight", "CD"),
    ("nine", "CD"),
    ("ten", "CD"),
    ("twenty", "CD"),
    ("thirty", "CD"),
    ("forty", "CD"),
    ("fifty", "CD"),
    ("hundred", "CD"),
    ("thousand", "CD"),
    ("million", "CD"),
    // Adjectives.
    ("good", "JJ"),
    ("new", "JJ"),
    ("first", "JJ"),
    ("last", "JJ"),
    ("long", "JJ"),
    ("great", "JJ"),
    ("little", "JJ"),
    ("old", "JJ"),
    ("big", "JJ"),
    ("high", "JJ"),
    ("different", "JJ"),
    ("small", "JJ"),
    ("large", "JJ"),
    ("next", "JJ"),
    ("early", "JJ"),
    ("young", "JJ"),
    ("important", "JJ"),
    ("public", "JJ"),
    ("bad", "JJ"),
    ("able", "JJ"),
    ("happy", "JJ"),
    ("sad", "JJ"),
    ("nice", "JJ"),
    ("beautiful", "JJ"),
    ("hot", "JJ"),
    ("cold", "JJ"),
    ("best", "JJS"),
    ("better", "JJR"),
    ("fast", "JJ RB"),
    ("slow", "JJ"),
    ("easy", "JJ"),
    ("hard", "JJ RB"),
    ("real", "JJ"),
    ("free", "JJ"),
    ("sure", "JJ"),
    ("many", "JJ"),
    ("much", "JJ"),
    ("several", "JJ"),
    ("funny", "JJ"),
    ("interesting", "JJ"),
    ("tired", "JJ"),
    ("hungry", "JJ"),
    ("angry", "JJ"),
    ("busy", "JJ"),
    ("rich", "JJ"),
    ("poor", "JJ"),
    ("average", "JJ NN"),
    ("annual", "JJ"),
    ("monthly", "JJ"),
    // Verbs, mostly-verb readings first.
    ("go", "VB"),
    ("went", "VBD"),
    ("gone", "VBN"),
    ("get", "VB"),
    ("got", "VBD"),
    ("make", "VB"),
    ("made", "VBD"),
    ("know", "VB"),
    ("knew", "VBD"),
    ("think", "VB"),
    ("thought", "VBD NN"),
    ("take", "VB"),
    ("took", "VBD"),
    ("see", "VB"),
    ("saw", "VBD"),
    ("seen", "VBN"),
    ("come", "VB"),
    ("came", "VBD"),
    ("want", "VB"),
    ("use", "VB NN"),
    ("find", "VB"),
    ("found", "VBD"),
    ("give", "VB"),
    ("gave", "VBD"),
    ("tell", "VB"),
    ("told", "VBD"),
    ("ask", "VB"),
    ("need", "VB NN"),
    ("feel", "VB"),
    ("felt", "VBD"),
    ("become", "VB"),
    ("became", "VBD"),
    ("leave", "VB"),
    ("left", "VBD JJ"),
    ("put", "VB"),
    ("mean", "VB"),
    ("meant", "VBD"),
    ("keep", "VB"),
    ("kept", "VBD"),
    ("let", "VB"),
    ("begin", "VB"),
    ("began", "VBD"),
    ("seem", "VB"),
    ("help", "VB NN"),
    ("talk", "VB NN"),
    ("turn", "VB NN"),
    ("start", "VB NN"),
    ("show", "VB NN"),
    ("hear", "VB"),
    ("heard", "VBD"),
    ("play", "VB NN"),
    ("run", "VB NN"),
    ("ran", "VBD"),
    ("move", "VB NN"),
    ("live", "VB JJ"),
    ("believe", "VB"),
    ("hold", "VB"),
    ("bring", "VB"),
    ("brought", "VBD"),
    ("happen", "VB"),
    ("write", "VB"),
    ("wrote", "VBD"),
    ("sit", "VB"),
    ("sat", "VBD"),
    ("stand", "VB"),
    ("stood", "VBD"),
    ("lose", "VB"),
    ("lost", "VBD"),
    ("pay", "VB NN"),
    ("paid", "VBD"),
    ("meet", "VB"),
    ("met", "VBD"),
    ("include", "VB"),
    ("continue", "VB"),
    ("learn", "VB"),
    ("change", "VB NN"),
    ("lead", "VB"),
    ("led", "VBD"),
    ("understand", "VB"),
    ("watch", "VB NN"),
    ("follow", "VB"),
    ("stop", "VB NN"),
    ("create", "VB"),
    ("speak", "VB"),
    ("spoke", "VBD"),
    ("read", "VB"),
    ("allow", "VB"),
    ("add", "VB"),
    ("spend", "VB"),
    ("grow", "VB"),
    ("grew", "VBD"),
    ("open", "VB JJ"),
    ("walk", "VB NN"),
    ("win", "VB"),
    ("won", "VBD"),
    ("offer", "VB NN"),
    ("remember", "VB"),
    ("love", "VB NN"),
    ("consider", "VB"),
    ("appear", "VB"),
    ("buy", "VB"),
    ("bought", "VBD"),
    ("wait", "VB"),
    ("serve", "VB"),
    ("die", "VB"),
    ("send", "VB"),
    ("expect", "VB"),
    ("build", "VB"),
    ("stay", "VB"),
    ("fall", "VB NN"),
    ("fell", "VBD"),
    ("cut", "VB NN"),
    ("reach", "VB"),
    ("kill", "VB"),
    ("remain", "VB"),
    ("suggest", "VB"),
    ("raise", "VB NN"),
    ("pass", "VB"),
    ("sell", "VB"),
    ("require", "VB"),
    ("report", "NN VB"),
    ("decide", "VB"),
    ("pull", "VB"),
    ("eat", "VB"),
    ("ate", "VBD"),
    ("drink", "VB NN"),
    ("drank", "VBD"),
    ("sleep", "VB NN"),
    ("slept", "VBD"),
    ("jump", "VB NN"),
    ("swim", "VB"),
    ("swam", "VBD"),
    ("sing", "VB"),
    ("sang", "VBD"),
    ("dance", "VB NN"),
    ("cook", "VB NN"),
    ("drive", "VB NN"),
    ("drove", "VBD"),
    ("fly", "VB NN"),
    ("flew", "VBD"),
    ("teach", "VB"),
    ("taught", "VBD"),
    ("study", "VB NN"),
    ("explain", "VB"),
    ("predict", "VB"),
    ("earn", "VB"),
    ("hate", "VB"),
    ("enjoy", "VB"),
    ("travel", "VB NN"),
    ("visit", "VB NN"),
    ("say", "VB"),
    ("said", "VBD"),
    ("try", "VB"),
    ("call", "VB NN"),
    ("look", "VB NN"),
    ("work", "NN VB"),
    ("code", "NN VB"),
    ("hope", "VB NN"),
    ("wish", "VB NN"),
    ("answer", "NN VB"),
    // Nouns.
    ("dog", "NN"),
    ("cat", "NN"),
    ("car", "NN"),
    ("house", "NN"),
    ("music", "NN"),
    ("weather", "NN"),
    ("time", "NN"),
    ("person", "NN"),
    ("people", "NNS"),
    ("year", "NN"),
    ("way", "NN"),
    ("day", "NN"),
    ("thing", "NN"),
    ("man", "NN"),
    ("woman", "NN"),
    ("child", "NN"),
    ("world", "NN"),
    ("life", "NN"),
    ("hand", "NN"),
    ("part", "NN"),
    ("place", "NN"),
    ("case", "NN"),
    ("week", "NN"),
    ("company", "NN"),
    ("system", "NN"),
    ("program", "NN"),
    ("question", "NN"),
    ("government", "NN"),
    ("number", "NN"),
    ("night", "NN"),
    ("point", "NN"),
    ("home", "NN"),
    ("water", "NN"),
    ("room", "NN"),
    ("mother", "NN"),
    ("father", "NN"),
    ("area", "NN"),
    ("money", "NN"),
    ("story", "NN"),
    ("fact", "NN"),
    ("month", "NN"),
    ("lot", "NN"),
    ("book", "NN"),
    ("eye", "NN"),
    ("job", "NN"),
    ("word", "NN"),
    ("business", "NN"),
    ("issue", "NN"),
    ("side", "NN"),
    ("kind", "NN"),
    ("head", "NN"),
    ("friend", "NN"),
    ("family", "NN"),
    ("city", "NN"),
    ("country", "NN"),
    ("computer", "NN"),
    ("phone", "NN"),
    ("food", "NN"),
    ("game", "NN"),
    ("movie", "NN"),
    ("film", "NN"),
    ("school", "NN"),
    ("teacher", "NN"),
    ("student", "NN"),
    ("salary", "NN"),
    ("age", "NN"),
    ("career", "NN"),
    ("data", "NNS"),
    ("datum", "NN"),
    ("science", "NN"),
    ("language", "NN"),
    ("python", "NN"),
    ("rust", "NN"),
    ("software", "NN"),
    ("internet", "NN"),
    ("chatbot", "NN"),
    ("bot", "NN"),
    ("text", "NN"),
    ("mining", "NN"),
    ("model", "NN"),
    ("pizza", "NN"),
    ("coffee", "NN"),
    ("tea", "NN"),
    ("sport", "NN"),
    ("football", "NN"),
    ("soccer", "NN"),
    ("art", "NN"),
    ("history", "NN"),
    ("math", "NN"),
    ("physics", "NN"),
    ("space", "NN"),
    ("planet", "NN"),
    ("star", "NN"),
    ("sun", "NN"),
    ("moon", "NN"),
    ("sky", "NN"),
    ("tree", "NN"),
    ("flower", "NN"),
    ("bird", "NN"),
    ("fish", "NN"),
    ("horse", "NN"),
    ("animal", "NN"),
    ("ocean", "NN"),
    ("mountain", "NN"),
    ("river", "NN"),
    ("road", "NN"),
    ("office", "NN"),
    ("market", "NN"),
    ("price", "NN"),
    ("income", "NN"),
    ("economy", "NN"),
    ("health", "NN"),
    ("doctor", "NN"),
    ("hospital", "NN"),
    ("idea", "NN"),
    ("problem", "NN"),
    ("information", "NN"),
    ("name", "NN"),
    ("birthday", "NN"),
    ("today", "NN"),
    ("tomorrow", "NN"),
    ("yesterday", "NN"),
    ("morning", "NN"),
    ("evening", "NN"),
    ("everyone", "NN"),
    ("someone", "NN"),
    ("anyone", "NN"),
    ("everything", "NN"),
    ("something", "NN"),
    ("anything", "NN"),
    ("nothing", "NN"),
    ("mouse", "NN"),
    ("goose", "NN"),
    ("tooth", "NN"),
    ("foot", "NN"),
    ("ox", "NN"),
    ("louse", "NN"),
    ("criterion", "NN"),
    ("phenomenon", "NN"),
    ("alumnus", "NN"),
    ("cactus", "NN"),
    ("fungus", "NN"),
    ("news", "NN"),
    ("bus", "NN"),
    ("box", "NN"),
    ("church", "NN"),
    ("leaf", "NN"),
    ("wolf", "NN"),
    ("knife", "NN"),
];

/// The tag table plus the sets of dictionary forms and dictionary nouns.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    entries: HashMap<String, Vec<PosTag>>,
    forms: HashSet<String>,
    nouns: HashSet<String>,
}

impl Lexicon {
    /// The built-in English table.
    pub fn english() -> Self {
        let mut lexicon = Self::default();
        for (word, tags) in ENGLISH {
            let tags: Vec<PosTag> = tags.split_whitespace().filter_map(PosTag::from_penn).collect();
            lexicon.index(word.to_lowercase(), tags, false);
        }
        lexicon
    }

    /// Add or replace an entry. The word's stem is indexed too, unless
    /// the stem is a dictionary word of its own.
    pub fn insert(&mut self, word: &str, tags: Vec<PosTag>) {
        self.index(word.to_lowercase(), tags, true);
    }

    /// With `replace == false` the first entry for a word wins.
    fn index(&mut self, word: String, tags: Vec<PosTag>, replace: bool) {
        if replace || !self.forms.contains(&word) {
            if tags.iter().any(|t| t.is_noun()) {
                self.nouns.insert(word.clone());
            } else {
                self.nouns.remove(&word);
            }
            self.forms.insert(word.clone());
            self.entries.insert(word.clone(), tags.clone());
        }

        let stem = PorterStemmer.stem(&word);
        if stem != word
            && !self.forms.contains(&stem)
            && (replace || !self.entries.contains_key(&stem))
        {
            self.entries.insert(stem, tags);
        }
    }

    /// Candidate tags for `word`, most likely first.
    pub fn tags(&self, word: &str) -> Option<&[PosTag]> {
        self.entries.get(word).map(Vec::as_slice)
    }

    /// Whether `word` is a dictionary noun (an acceptable lemma).
    pub fn is_noun(&self, word: &str) -> bool {
        self.nouns.contains(word)
    }

    /// Every dictionary form, stems excluded.
    pub fn forms(&self) -> impl Iterator<Item = &str> {
        self.forms.iter().map(String::as_str)
    }

    /// Number of indexed forms (dictionary forms plus stems).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Parse `word<TAB>TAG [TAG...]` lines. Blank lines and `#` comments are skipped.
    pub fn parse_entries(text: &str) -> Result<Vec<(String, Vec<PosTag>)>, String> {
        let mut parsed = Vec::new();
        for (idx, raw) in text.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let line_no = idx + 1;
            let (word, tags) = line
                .split_once('\t')
                .ok_or_else(|| format!("line {line_no}: expected 'word<TAB>TAGS'"))?;
            let word = word.trim();
            if word.is_empty() {
                return Err(format!("line {line_no}: empty word"));
            }
            let tags = tags
                .split_whitespace()
                .map(|t| {
                    PosTag::from_penn(t).ok_or_else(|| format!("line {line_no}: unknown tag '{t}'"))
                })
                .collect::<Result<Vec<_>, _>>()?;
            if tags.is_empty() {
                return Err(format!("line {line_no}: no tags for '{word}'"));
            }
            parsed.push((word.to_string(), tags));
        }
        Ok(parsed)
    }

    /// Load extra entries from a lexicon file. Returns the number of entries added.
    pub fn extend_from_file(&mut self, path: &Path) -> Result<usize, EngineError> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            EngineError::resource("lexicon", format!("cannot read {}: {e}", path.display()))
        })?;
        let entries = Self::parse_entries(&text)
            .map_err(|e| EngineError::resource("lexicon", format!("{}: {e}", path.display())))?;
        let count = entries.len();
        for (word, tags) in entries {
            self.insert(&word, tags);
        }
        tracing::debug!(path = %path.display(), count, "Extended lexicon from file");
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn builtin_tags_parse() {
        let lexicon = Lexicon::english();
        for (word, tags) in ENGLISH {
            let expected = tags.split_whitespace().count();
            let parsed = tags.split_whitespace().filter_map(PosTag::from_penn).count();
            assert_eq!(parsed, expected, "bad tag in entry '{word}'");
        }
        assert!(!lexicon.is_empty());
    }

    #[test]
    fn entries_are_indexed_by_stem() {
        let lexicon = Lexicon::english();
        assert_eq!(lexicon.tags("salary"), Some(&[PosTag::Nn][..]));
        assert_eq!(lexicon.tags("salari"), Some(&[PosTag::Nn][..]));
        assert_eq!(lexicon.tags("happi"), Some(&[PosTag::Jj][..]));
    }

    #[test]
    fn stem_never_shadows_a_dictionary_word() {
        let lexicon = Lexicon::english();
        // "evening" stems to "even", which is an adverb in its own right.
        assert_eq!(lexicon.tags("even"), Some(&[PosTag::Rb][..]));
        assert_eq!(lexicon.tags("evening"), Some(&[PosTag::Nn][..]));
        assert!(!lexicon.is_noun("even"));
    }

    #[test]
    fn forms_exclude_stems() {
        let lexicon = Lexicon::english();
        let forms: HashSet<&str> = lexicon.forms().collect();
        assert!(forms.contains("salary"));
        assert!(!forms.contains("salari"));
        assert_eq!(forms.len(), ENGLISH.len());
    }

    #[test]
    fn only_dictionary_nouns_are_lemmas() {
        let lexicon = Lexicon::english();
        assert!(lexicon.is_noun("child"));
        assert!(lexicon.is_noun("salary"));
        assert!(!lexicon.is_noun("salari"));
        assert!(!lexicon.is_noun("went"));
        assert!(lexicon.is_noun("jump"));
    }

    #[test]
    fn parse_entries_skips_comments_and_blank_lines() {
        let parsed = Lexicon::parse_entries("# header\n\nrustacean\tNN\nrefactor\tVB NN\n").unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].0, "refactor");
        assert_eq!(parsed[1].1, vec![PosTag::Vb, PosTag::Nn]);
    }

    #[test]
    fn parse_entries_rejects_unknown_tags() {
        let err = Lexicon::parse_entries("word\tXX\n").unwrap_err();
        assert!(err.contains("line 1"));
        assert!(err.contains("XX"));
    }

    #[test]
    fn parse_entries_rejects_missing_tab() {
        let err = Lexicon::parse_entries("word NN\n").unwrap_err();
        assert!(err.contains("expected"));
    }

    #[test]
    fn extend_from_file_overrides_entries() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "dog\tVB").unwrap();
        writeln!(file, "rustacean\tNN").unwrap();

        let mut lexicon = Lexicon::english();
        let added = lexicon.extend_from_file(file.path()).unwrap();
        assert_eq!(added, 2);
        assert_eq!(lexicon.tags("dog"), Some(&[PosTag::Vb][..]));
        assert!(!lexicon.is_noun("dog"));
        assert!(lexicon.is_noun("rustacean"));
    }

    #[test]
    fn extend_from_missing_file_is_resource_error() {
        let mut lexicon = Lexicon::english();
        let err = lexicon
            .extend_from_file(Path::new("/nonexistent/lexicon.tsv"))
            .unwrap_err();
        assert!(matches!(err, EngineError::ResourceUnavailable { .. }));
    }
}
