//! Porter suffix-stripping stemmer.
//!
//! M.F. Porter, "An algorithm for suffix stripping" (1980), steps 1a
//! through 5b, with the widely used extensions to it:
//!
//! - a small table of irregular forms (`dying` → `die`, `skies` → `sky`)
//! - four-letter `-ies`/`-ied` words keep their `e` (`dies` → `die`)
//! - `y` → `i` only after a consonant that is not the whole stem
//!   (`happy` → `happi`, but `enjoy`, `play` and `money` are kept)
//! - step 2 rewrites `bli`, `fulli` and `logi`, and runs `alli` → `al` first
//! - a two-letter vowel-consonant stem counts as `*o`
//!
//! Words are lowercased first; words of two characters or fewer are
//! returned lowercased but otherwise untouched.
//!
//! Stems are not dictionary words (`happiness` → `happi`), and stemming a
//! stem can shorten it again (`agreed` → `agre` → `agr`).

use super::traits::Stemmer;

/// Irregular forms and the stem they map to. Matched against the word as
/// given, before lowercasing.
const IRREGULAR: &[(&str, &str)] = &[
    ("sky", "sky"),
    ("skies", "sky"),
    ("dying", "die"),
    ("lying", "lie"),
    ("tying", "tie"),
    ("news", "news"),
    ("innings", "inning"),
    ("inning", "inning"),
    ("outings", "outing"),
    ("outing", "outing"),
    ("cannings", "canning"),
    ("canning", "canning"),
    ("howe", "howe"),
    ("proceed", "proceed"),
    ("exceed", "exceed"),
    ("succeed", "succeed"),
];

/// Step 2 rewrites, applied when the remaining stem has measure > 0.
/// The first suffix that matches decides, whether or not its condition holds.
const STEP2: &[(&str, &str)] = &[
    ("ational", "ate"),
    ("tional", "tion"),
    ("enci", "ence"),
    ("anci", "ance"),
    ("izer", "ize"),
    ("bli", "ble"),
    ("alli", "al"),
    ("entli", "ent"),
    ("eli", "e"),
    ("ousli", "ous"),
    ("ization", "ize"),
    ("ation", "ate"),
    ("ator", "ate"),
    ("alism", "al"),
    ("iveness", "ive"),
    ("fulness", "ful"),
    ("ousness", "ous"),
    ("aliti", "al"),
    ("iviti", "ive"),
    ("biliti", "ble"),
    ("fulli", "ful"),
];

/// Step 3 rewrites, measure > 0.
const STEP3: &[(&str, &str)] = &[
    ("icate", "ic"),
    ("ative", ""),
    ("alize", "al"),
    ("iciti", "ic"),
    ("ical", "ic"),
    ("ful", ""),
    ("ness", ""),
];

/// Step 4 deletions, measure > 1. `ion` additionally needs a preceding `s` or `t`.
const STEP4: &[&str] = &[
    "al", "ance", "ence", "er", "ic", "able", "ible", "ant", "ement", "ment", "ent", "ion", "ou",
    "ism", "ate", "iti", "ous", "ive", "ize",
];

/// English Porter stemmer.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorterStemmer;

impl Stemmer for PorterStemmer {
    fn stem(&self, word: &str) -> String {
        if let Some((_, stem)) = IRREGULAR.iter().find(|(form, _)| *form == word) {
            return (*stem).to_string();
        }

        let lower = word.to_lowercase();
        if word.chars().count() <= 2 {
            return lower;
        }

        let mut w = Word {
            b: lower.chars().collect(),
        };
        w.step1a();
        w.step1b();
        w.step1c();
        w.step2();
        w.step3();
        w.step4();
        w.step5a();
        w.step5b();

        w.b.into_iter().collect()
    }
}

/// Working buffer. Helpers taking `k` look at the prefix `b[..k]`.
struct Word {
    b: Vec<char>,
}

impl Word {
    fn is_consonant(&self, i: usize) -> bool {
        match self.b[i] {
            'a' | 'e' | 'i' | 'o' | 'u' => false,
            'y' => i == 0 || !self.is_consonant(i - 1),
            _ => true,
        }
    }

    /// Number of VC sequences in `b[..k]`.
    fn measure(&self, k: usize) -> usize {
        (1..k)
            .filter(|&i| self.is_consonant(i) && !self.is_consonant(i - 1))
            .count()
    }

    fn has_vowel(&self, k: usize) -> bool {
        (0..k).any(|i| !self.is_consonant(i))
    }

    /// `b[..k]` ends with a double consonant.
    fn ends_double_consonant(&self, k: usize) -> bool {
        k >= 2 && self.b[k - 1] == self.b[k - 2] && self.is_consonant(k - 1)
    }

    /// `b[..k]` ends consonant-vowel-consonant, the last not w, x or y, or
    /// is exactly vowel-consonant.
    fn ends_cvc(&self, k: usize) -> bool {
        if k == 2 {
            return !self.is_consonant(0) && self.is_consonant(1);
        }
        k >= 3
            && self.is_consonant(k - 3)
            && !self.is_consonant(k - 2)
            && self.is_consonant(k - 1)
            && !matches!(self.b[k - 1], 'w' | 'x' | 'y')
    }

    fn ends_with(&self, suffix: &str) -> bool {
        let n = suffix.len();
        n <= self.b.len() && self.b[self.b.len() - n..].iter().copied().eq(suffix.chars())
    }

    /// Length of the stem left after removing `suffix`.
    fn stem_len(&self, suffix: &str) -> usize {
        self.b.len() - suffix.len()
    }

    fn replace_suffix(&mut self, suffix: &str, replacement: &str) {
        let k = self.stem_len(suffix);
        self.b.truncate(k);
        self.b.extend(replacement.chars());
    }

    fn step1a(&mut self) {
        if self.b.len() == 4 && self.ends_with("ies") {
            self.replace_suffix("ies", "ie");
        } else if self.ends_with("sses") {
            self.replace_suffix("sses", "ss");
        } else if self.ends_with("ies") {
            self.replace_suffix("ies", "i");
        } else if self.ends_with("s") && !self.ends_with("ss") {
            self.replace_suffix("s", "");
        }
    }

    fn step1b(&mut self) {
        if self.ends_with("ied") {
            let replacement = if self.b.len() == 4 { "ie" } else { "i" };
            self.replace_suffix("ied", replacement);
            return;
        }

        if self.ends_with("eed") {
            if self.measure(self.stem_len("eed")) > 0 {
                self.replace_suffix("eed", "ee");
            }
            return;
        }

        let stripped = ["ed", "ing"]
            .into_iter()
            .find(|suffix| self.ends_with(suffix) && self.has_vowel(self.stem_len(suffix)));
        let Some(suffix) = stripped else {
            return;
        };
        self.replace_suffix(suffix, "");

        let k = self.b.len();
        if self.ends_with("at") || self.ends_with("bl") || self.ends_with("iz") {
            self.b.push('e');
        } else if self.ends_double_consonant(k) {
            if !matches!(self.b[k - 1], 'l' | 's' | 'z') {
                self.b.pop();
            }
        } else if self.measure(k) == 1 && self.ends_cvc(k) {
            self.b.push('e');
        }
    }

    fn step1c(&mut self) {
        let k = self.b.len();
        if self.ends_with("y") && k > 2 && self.is_consonant(k - 2) {
            self.b[k - 1] = 'i';
        }
    }

    fn rewrite(&mut self, rules: &[(&str, &str)]) {
        if let Some((suffix, replacement)) = rules.iter().find(|(s, _)| self.ends_with(s)) {
            if self.measure(self.stem_len(suffix)) > 0 {
                self.replace_suffix(suffix, replacement);
            }
        }
    }

    fn step2(&mut self) {
        if self.ends_with("alli") && self.measure(self.stem_len("alli")) > 0 {
            self.replace_suffix("alli", "al");
            self.step2();
        } else if self.ends_with("logi") {
            // The `l` stays with the stem for the measure, so `geologi` qualifies.
            if self.measure(self.stem_len("ogi")) > 0 {
                self.replace_suffix("logi", "log");
            }
        } else {
            self.rewrite(STEP2);
        }
    }

    fn step3(&mut self) {
        self.rewrite(STEP3);
    }

    fn step4(&mut self) {
        let Some(suffix) = STEP4.iter().find(|s| self.ends_with(s)) else {
            return;
        };
        let k = self.stem_len(suffix);
        if self.measure(k) <= 1 {
            return;
        }
        if *suffix == "ion" && !(k > 0 && matches!(self.b[k - 1], 's' | 't')) {
            return;
        }
        self.b.truncate(k);
    }

    fn step5a(&mut self) {
        if !self.ends_with("e") {
            return;
        }
        let k = self.stem_len("e");
        let m = self.measure(k);
        if m > 1 || (m == 1 && !self.ends_cvc(k)) {
            self.b.truncate(k);
        }
    }

    fn step5b(&mut self) {
        let k = self.b.len();
        if self.ends_with("ll") && self.measure(k - 1) > 1 {
            self.b.pop();
        }
    }
}
