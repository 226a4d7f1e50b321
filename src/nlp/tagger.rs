//! Part-of-speech tagging over normalized tokens.
//!
//! ## Design
//! - Penn Treebank tag set ([`PosTag`])
//! - Initial tag: first candidate from the [`Lexicon`], else a guess from
//!   the token's shape (digits, Porter-style suffixes)
//! - Contextual pass over the whole sequence, so a token's tag can change
//!   depending on its neighbours (`good work` vs `work hard`)

use super::lexicon::Lexicon;
use super::traits::PosTagger;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ── Tag set ──────────────────────────────────────────────────────

/// Penn Treebank part-of-speech tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PosTag {
    Cc,
    Cd,
    Dt,
    Ex,
    Fw,
    In,
    Jj,
    Jjr,
    Jjs,
    Ls,
    Md,
    Nn,
    Nns,
    Nnp,
    Nnps,
    Pdt,
    Pos,
    Prp,
    PrpPossessive,
    Rb,
    Rbr,
    Rbs,
    Rp,
    Sym,
    To,
    Uh,
    Vb,
    Vbd,
    Vbg,
    Vbn,
    Vbp,
    Vbz,
    Wdt,
    Wp,
    WpPossessive,
    Wrb,
}

impl PosTag {
    pub const ALL: &'static [PosTag] = &[
        PosTag::Cc,
        PosTag::Cd,
        PosTag::Dt,
        PosTag::Ex,
        PosTag::Fw,
        PosTag::In,
        PosTag::Jj,
        PosTag::Jjr,
        PosTag::Jjs,
        PosTag::Ls,
        PosTag::Md,
        PosTag::Nn,
        PosTag::Nns,
        PosTag::Nnp,
        PosTag::Nnps,
        PosTag::Pdt,
        PosTag::Pos,
        PosTag::Prp,
        PosTag::PrpPossessive,
        PosTag::Rb,
        PosTag::Rbr,
        PosTag::Rbs,
        PosTag::Rp,
        PosTag::Sym,
        PosTag::To,
        PosTag::Uh,
        PosTag::Vb,
        PosTag::Vbd,
        PosTag::Vbg,
        PosTag::Vbn,
        PosTag::Vbp,
        PosTag::Vbz,
        PosTag::Wdt,
        PosTag::Wp,
        PosTag::WpPossessive,
        PosTag::Wrb,
    ];

    /// The Penn Treebank spelling (`NN`, `PRP$`, ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Cc => "CC",
            Self::Cd => "CD",
            Self::Dt => "DT",
            Self::Ex => "EX",
            Self::Fw => "FW",
            Self::In => "IN",
            Self::Jj => "JJ",
            Self::Jjr => "JJR",
            Self::Jjs => "JJS",
            Self::Ls => "LS",
            Self::Md => "MD",
            Self::Nn => "NN",
            Self::Nns => "NNS",
            Self::Nnp => "NNP",
            Self::Nnps => "NNPS",
            Self::Pdt => "PDT",
            Self::Pos => "POS",
            Self::Prp => "PRP",
            Self::PrpPossessive => "PRP$",
            Self::Rb => "RB",
            Self::Rbr => "RBR",
            Self::Rbs => "RBS",
            Self::Rp => "RP",
            Self::Sym => "SYM",
            Self::To => "TO",
            Self::Uh => "UH",
            Self::Vb => "VB",
            Self::Vbd => "VBD",
            Self::Vbg => "VBG",
            Self::Vbn => "VBN",
            Self::Vbp => "VBP",
            Self::Vbz => "VBZ",
            Self::Wdt => "WDT",
            Self::Wp => "WP",
            Self::WpPossessive => "WP$",
            Self::Wrb => "WRB",
        }
    }

    /// Parse a Penn Treebank tag (case-insensitive).
    pub fn from_penn(tag: &str) -> Option<Self> {
        let upper = tag.trim().to_ascii_uppercase();
        Self::ALL.iter().copied().find(|t| t.as_str() == upper)
    }

    pub fn is_noun(self) -> bool {
        self.as_str().starts_with("NN")
    }

    pub fn is_verb(self) -> bool {
        self.as_str().starts_with("VB")
    }
}

impl std::fmt::Display for PosTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Shape heuristics ─────────────────────────────────────────────

/// Endings (after Porter stemming) that mark an unknown word as an adjective.
const ADJECTIVE_ENDINGS: &[&str] = &["al", "ic", "iv", "ful", "less", "ous", "abl", "ibl", "ish"];

/// Endings that mark an unknown word as a verb.
const VERB_ENDINGS: &[&str] = &["iz", "ifi", "ify"];

/// Guess a tag for a word the lexicon does not know.
fn guess_from_shape(word: &str) -> PosTag {
    if word.chars().any(|c| c.is_ascii_digit())
        && word.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
    {
        return PosTag::Cd;
    }
    if word.len() > 4 && word.ends_with("li") {
        return PosTag::Rb;
    }
    if word.len() > 4 && word.ends_with("ing") {
        return PosTag::Vbg;
    }
    if word.len() > 3 && word.ends_with("ed") {
        return PosTag::Vbd;
    }
    if word.len() > 4 && ADJECTIVE_ENDINGS.iter().any(|e| word.ends_with(e)) {
        return PosTag::Jj;
    }
    if word.len() > 4 && VERB_ENDINGS.iter().any(|e| word.ends_with(e)) {
        return PosTag::Vb;
    }
    PosTag::Nn
}

// ── Tagger ───────────────────────────────────────────────────────

/// Lexicon-driven tagger with a left-to-right contextual correction pass.
pub struct LexiconTagger {
    lexicon: Arc<Lexicon>,
}

impl LexiconTagger {
    pub fn new(lexicon: Arc<Lexicon>) -> Self {
        Self { lexicon }
    }

    /// Candidate tags for one token, most likely first. Never empty.
    fn candidates(&self, token: &str) -> Vec<PosTag> {
        let lower = token.to_lowercase();
        match self.lexicon.tags(&lower) {
            Some(tags) if !tags.is_empty() => tags.to_vec(),
            _ => vec![guess_from_shape(&lower)],
        }
    }
}

fn first_verb(candidates: &[PosTag]) -> Option<PosTag> {
    candidates.iter().copied().find(|t| t.is_verb())
}

fn first_noun(candidates: &[PosTag]) -> Option<PosTag> {
    candidates.iter().copied().find(|t| t.is_noun())
}

impl PosTagger for LexiconTagger {
    fn tag(&self, tokens: &[String]) -> Vec<(String, PosTag)> {
        let candidates: Vec<Vec<PosTag>> = tokens.iter().map(|t| self.candidates(t)).collect();
        let initial: Vec<PosTag> = candidates.iter().map(|c| c[0]).collect();
        let mut tags = initial.clone();

        for i in 0..tokens.len() {
            let current = &candidates[i];
            let prev = i.checked_sub(1).map(|p| tags[p]);
            let next = initial.get(i + 1).copied();

            // Modal or infinitival "to" → base verb.
            if matches!(prev, Some(PosTag::Md | PosTag::To)) && first_verb(current).is_some() {
                tags[i] = PosTag::Vb;
                continue;
            }

            // Determiner, adjective, possessive or number → noun.
            if matches!(
                prev,
                Some(
                    PosTag::Dt
                        | PosTag::Jj
                        | PosTag::Jjr
                        | PosTag::Jjs
                        | PosTag::PrpPossessive
                        | PosTag::Cd
                        | PosTag::Pos
                )
            ) {
                if let Some(noun) = first_noun(current) {
                    tags[i] = noun;
                    continue;
                }
            }

            // Followed by an object pronoun → verb.
            if next == Some(PosTag::Prp) && tags[i].is_noun() {
                if let Some(verb) = first_verb(current) {
                    tags[i] = verb;
                    continue;
                }
            }

            // Subject pronoun followed by a base verb → present tense.
            if prev == Some(PosTag::Prp) && tags[i] == PosTag::Vb {
                tags[i] = PosTag::Vbp;
            }
        }

        tokens.iter().cloned().zip(tags).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tagger() -> LexiconTagger {
        LexiconTagger::new(Arc::new(Lexicon::english()))
    }

    fn tags_of(words: &[&str]) -> Vec<PosTag> {
        let tokens: Vec<String> = words.iter().map(|w| (*w).to_string()).collect();
        tagger().tag(&tokens).into_iter().map(|(_, t)| t).collect()
    }

    #[test]
    fn penn_spelling_round_trips() {
        for tag in PosTag::ALL {
            assert_eq!(PosTag::from_penn(tag.as_str()), Some(*tag));
        }
        assert_eq!(PosTag::from_penn("prp$"), Some(PosTag::PrpPossessive));
        assert_eq!(PosTag::from_penn("XYZ"), None);
    }

    #[test]
    fn class_prefixes() {
        assert!(PosTag::Nns.is_noun());
        assert!(PosTag::Nnp.is_noun());
        assert!(PosTag::Vbz.is_verb());
        assert!(!PosTag::Prp.is_noun());
        assert!(!PosTag::Wp.is_verb());
    }

    #[test]
    fn lexicon_words_take_their_first_reading() {
        assert_eq!(tags_of(&["love", "dog"]), vec![PosTag::Vb, PosTag::Nn]);
        assert_eq!(tags_of(&["run", "jump"]), vec![PosTag::Vb, PosTag::Vb]);
    }

    #[test]
    fn stemmed_forms_are_found() {
        assert_eq!(tags_of(&["happi"]), vec![PosTag::Jj]);
        assert_eq!(tags_of(&["salari"]), vec![PosTag::Nn]);
    }

    #[test]
    fn adjective_forces_noun_reading() {
        assert_eq!(tags_of(&["good", "run"]), vec![PosTag::Jj, PosTag::Nn]);
    }

    #[test]
    fn modal_forces_verb_reading() {
        assert_eq!(tags_of(&["could", "work"]), vec![PosTag::Md, PosTag::Vb]);
    }

    #[test]
    fn object_pronoun_forces_verb_reading() {
        assert_eq!(tags_of(&["work", "us"]), vec![PosTag::Vb, PosTag::Prp]);
    }

    #[test]
    fn unknown_words_are_guessed_from_shape() {
        assert_eq!(tags_of(&["34"]), vec![PosTag::Cd]);
        assert_eq!(tags_of(&["quickli"]), vec![PosTag::Rb]);
        assert_eq!(tags_of(&["zorblax"]), vec![PosTag::Nn]);
        assert_eq!(tags_of(&["frobnicating"]), vec![PosTag::Vbg]);
    }

    #[test]
    fn empty_sequence() {
        assert!(tagger().tag(&[]).is_empty());
    }
}
