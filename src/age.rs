//! Age extraction from raw utterances.
//!
//! Runs on the raw text, never on normalized tokens: unit words such as
//! "years" are stopword- or stem-mangled by the time normalization is done.
//!
//! The unit phrase is optional, so *any* run of one to three digits counts
//! as an age. "I live at 221 Baker Street" yields 221. That permissiveness
//! is the documented behaviour and is not filtered here.
//!
//! Only ASCII digits `0-9` count. Other Unicode decimal digits (`٣٤`, `３４`)
//! are not ages.

use regex::Regex;
use std::sync::LazyLock;

/// One to three ASCII digits, optionally followed by an age unit.
static AGE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)([0-9]{1,3})\s*(?:years? old|years|yo|age|aged|yr|yrs|y/o)?")
        .expect("age pattern is a valid regex")
});

/// Return the first 1–3 digit group in `text`, if any.
pub fn extract_age(text: &str) -> Option<u32> {
    AGE_PATTERN
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_number() {
        assert_eq!(extract_age("42"), Some(42));
    }

    #[test]
    fn number_with_units() {
        assert_eq!(extract_age("42 years old"), Some(42));
        assert_eq!(extract_age("I am 34 years old"), Some(34));
        assert_eq!(extract_age("she is 7yo"), Some(7));
        assert_eq!(extract_age("29 Y/O engineer"), Some(29));
        assert_eq!(extract_age("aged 61"), Some(61));
    }

    #[test]
    fn no_digits() {
        assert_eq!(extract_age("no numbers here"), None);
        assert_eq!(extract_age(""), None);
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(extract_age("I am 30, my sister is 25"), Some(30));
    }

    #[test]
    fn long_digit_runs_are_cut_to_three() {
        assert_eq!(extract_age("born in 1990"), Some(199));
    }

    #[test]
    fn non_ascii_digits_are_ignored() {
        assert_eq!(extract_age("I am ٣٤ years old"), None);
        assert_eq!(extract_age("３４歳"), None);
        assert_eq!(extract_age("٣٤ or 34"), Some(34));
    }

    #[test]
    fn any_small_number_counts() {
        assert_eq!(extract_age("I live at 221 Baker Street"), Some(221));
        assert_eq!(extract_age("I have 0 cats"), Some(0));
    }
}
