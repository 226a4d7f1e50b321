//! Treebank-style word tokenizer.
//!
//! Splits on whitespace, then carves each chunk into alphanumeric runs.
//! Internal hyphens and apostrophes survive (`well-known`, `o'clock`),
//! decimal separators survive between digits (`3.5`, `1,000`), and English
//! contractions are split the way the Penn Treebank does it:
//! `don't` → `do` `n't`, `what's` → `what` `'s`.
//! Punctuation is never emitted as a token.

use super::traits::Tokenizer;

/// Clitic suffixes split off after an apostrophe.
const CLITICS: &[&str] = &["'s", "'re", "'ve", "'ll", "'d", "'m"];

/// Default English word tokenizer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TreebankTokenizer;

impl Tokenizer for TreebankTokenizer {
    fn tokenize(&self, text: &str) -> Vec<String> {
        text.split_whitespace()
            .flat_map(split_chunk)
            .flat_map(|token| split_contraction(&token))
            .filter(|token| token.chars().any(char::is_alphanumeric))
            .collect()
    }
}

/// Split one whitespace-delimited chunk into word runs.
fn split_chunk(chunk: &str) -> Vec<String> {
    let chars: Vec<char> = chunk
        .chars()
        .map(|c| if c == '\u{2019}' { '\'' } else { c })
        .collect();
    let mut tokens = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        let next = chars.get(i + 1).copied();
        let prev = current.chars().last();

        let keep = if c.is_alphanumeric() {
            true
        } else if c == '-' || c == '\'' {
            prev.is_some() && next.is_some_and(char::is_alphanumeric)
        } else if c == '.' || c == ',' {
            prev.is_some_and(|p| p.is_ascii_digit()) && next.is_some_and(|n| n.is_ascii_digit())
        } else {
            false
        };

        if keep {
            current.push(c);
        } else if !current.is_empty() {
            tokens.push(std::mem::take(&mut current));
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

/// Split a trailing `n't` or clitic (`'s`, `'re`, ...) into its own token.
fn split_contraction(token: &str) -> Vec<String> {
    let suffix = std::iter::once("n't")
        .chain(CLITICS.iter().copied())
        .find(|suffix| ends_with_ignore_case(token, suffix));

    match suffix {
        Some(suffix) => {
            let cut = token.len() - suffix.len();
            vec![token[..cut].to_string(), token[cut..].to_string()]
        }
        None => vec![token.to_string()],
    }
}

/// True when `token` is strictly longer than `suffix` and ends with it (ASCII case-insensitive).
fn ends_with_ignore_case(token: &str, suffix: &str) -> bool {
    if token.len() <= suffix.len() {
        return false;
    }
    let cut = token.len() - suffix.len();
    token.is_char_boundary(cut) && token[cut..].eq_ignore_ascii_case(suffix)
}
