//! Suspicion classification: the first matching rule wins, checked in the
//! order given below.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuspicionCode {
    /// Unpronounceable consonant cluster.
    Garbage,
    /// Same character repeated 3+ times consecutively.
    Repeated,
    /// Mid-word case switch beyond the first letter.
    MixedCase,
    /// Digit-letter mix, or an `rn`/`m` confusable cluster.
    Confusable,
    /// Short and matches a known orphan fragment affix.
    Fragment,
    /// Matches a small anachronism vocabulary.
    Modern,
}

impl SuspicionCode {
    pub fn as_char(&self) -> char {
        match self {
            SuspicionCode::Garbage => 'G',
            SuspicionCode::Repeated => 'R',
            SuspicionCode::MixedCase => 'M',
            SuspicionCode::Confusable => 'C',
            SuspicionCode::Fragment => 'F',
            SuspicionCode::Modern => 'X',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'G' => Some(SuspicionCode::Garbage),
            'R' => Some(SuspicionCode::Repeated),
            'M' => Some(SuspicionCode::MixedCase),
            'C' => Some(SuspicionCode::Confusable),
            'F' => Some(SuspicionCode::Fragment),
            'X' => Some(SuspicionCode::Modern),
            _ => None,
        }
    }
}

const VOWELS: &str = "aeiouAEIOU";

fn has_unpronounceable_cluster(word: &str) -> bool {
    let mut run = 0;
    for c in word.chars() {
        if c.is_alphabetic() && !VOWELS.contains(c) {
            run += 1;
            if run >= 4 {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}

fn has_repeated_char(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}

fn has_mixed_case(word: &str) -> bool {
    let chars: Vec<char> = word.chars().collect();
    if chars.len() < 2 {
        return false;
    }
    chars[1..].iter().any(|c| c.is_uppercase())
        && chars.iter().any(|c| c.is_lowercase())
}

fn has_digit_letter_mix(word: &str) -> bool {
    let has_digit = word.chars().any(|c| c.is_ascii_digit());
    let has_alpha = word.chars().any(|c| c.is_alphabetic());
    has_digit && has_alpha
}

const ORPHAN_FRAGMENTS: &[&str] = &["tion", "ing", "ed", "ly", "un", "re", "er", "es"];

fn is_fragment(word: &str) -> bool {
    word.chars().count() <= 3
        && ORPHAN_FRAGMENTS
            .iter()
            .any(|frag| word.eq_ignore_ascii_case(frag))
}

const MODERN_VOCAB: &[&str] = &[
    "email", "internet", "website", "online", "smartphone", "app", "blog", "wifi", "laptop",
];

fn is_modern(word: &str) -> bool {
    MODERN_VOCAB.iter().any(|m| word.eq_ignore_ascii_case(m))
}

/// Returns the first matching suspicion code for `word`, or `None` if it
/// matches no rule.
pub(super) fn classify(word: &str) -> Option<SuspicionCode> {
    if has_unpronounceable_cluster(word) {
        Some(SuspicionCode::Garbage)
    } else if has_repeated_char(word) {
        Some(SuspicionCode::Repeated)
    } else if has_mixed_case(word) {
        Some(SuspicionCode::MixedCase)
    } else if has_digit_letter_mix(word) || word.to_lowercase().contains("rn") {
        Some(SuspicionCode::Confusable)
    } else if is_fragment(word) {
        Some(SuspicionCode::Fragment)
    } else if is_modern(word) {
        Some(SuspicionCode::Modern)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_unpronounceable_cluster() {
        assert_eq!(classify("xqzpt"), Some(SuspicionCode::Garbage));
    }

    #[test]
    fn flags_repeated_characters() {
        assert_eq!(classify("aaand"), Some(SuspicionCode::Repeated));
    }

    #[test]
    fn flags_mid_word_capitalization() {
        assert_eq!(classify("theHouse"), Some(SuspicionCode::MixedCase));
    }

    #[test]
    fn flags_modern_vocabulary() {
        assert_eq!(classify("smartphone"), Some(SuspicionCode::Modern));
    }

    #[test]
    fn ordinary_word_is_not_suspicious() {
        assert_eq!(classify("house"), None);
    }

    #[test]
    fn round_trips_char_codes() {
        for code in [
            SuspicionCode::Garbage,
            SuspicionCode::Repeated,
            SuspicionCode::MixedCase,
            SuspicionCode::Confusable,
            SuspicionCode::Fragment,
            SuspicionCode::Modern,
        ] {
            assert_eq!(SuspicionCode::from_char(code.as_char()), Some(code));
        }
    }
}
