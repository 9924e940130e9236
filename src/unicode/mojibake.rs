//! Mojibake remediation: UTF-8 bytes that were decoded as if they were
//! Latin-1 (or Windows-1252), producing the familiar `Ã©`-style garbage.
//!
//! Entries are ordered longest-match-first so that, e.g., the three-byte
//! smart-quote sequences are fixed before any shorter two-byte sequence
//! that happens to be a prefix of them.

/// `(mojibake, correct)` pairs. ~30 entries covering the Latin-1
/// supplement letters and the Windows-1252 punctuation range most common
/// in digitized 19th-century text (smart quotes, dashes, ellipsis).
const MOJIBAKE_PAIRS: &[(&str, &str)] = &[
    ("â€™", "\u{2019}"), // right single quote
    ("â€˜", "\u{2018}"), // left single quote
    ("â€œ", "\u{201C}"), // left double quote
    ("â€\u{9d}", "\u{201D}"), // right double quote
    ("â€“", "\u{2013}"), // en dash
    ("â€”", "\u{2014}"), // em dash
    ("â€¦", "\u{2026}"), // horizontal ellipsis
    ("â€¢", "\u{2022}"), // bullet
    ("Â«", "\u{00AB}"),
    ("Â»", "\u{00BB}"),
    ("Â\u{00A0}", "\u{00A0}"),
    ("Â©", "\u{00A9}"),
    ("Â®", "\u{00AE}"),
    ("Ã©", "é"),
    ("Ã¨", "è"),
    ("Ãª", "ê"),
    ("Ã«", "ë"),
    ("Ã¢", "â"),
    ("Ã\u{00A0}", "à"),
    ("Ã´", "ô"),
    ("Ã¯", "ï"),
    ("Ã®", "î"),
    ("Ã¼", "ü"),
    ("Ã¶", "ö"),
    ("Ã¤", "ä"),
    ("Ã±", "ñ"),
    ("Ã§", "ç"),
    ("Ã‰", "É"),
    ("Ã€", "À"),
    ("Ã‡", "Ç"),
    ("Ãœ", "Ü"),
];

/// Applies every pair in order; returns the remediated text and whether
/// anything changed.
pub(super) fn remediate(input: &str) -> (String, bool) {
    let mut text = input.to_string();
    let mut changed = false;

    for (wrong, right) in MOJIBAKE_PAIRS {
        if text.contains(wrong) {
            text = text.replace(wrong, right);
            changed = true;
        }
    }

    (text, changed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixes_accented_letters() {
        let (out, changed) = remediate("Caf\u{00c3}\u{00a9}");
        assert!(changed);
        assert_eq!(out, "Café");
    }

    #[test]
    fn fixes_smart_quotes() {
        let (out, changed) = remediate("itâ€™s fine");
        assert!(changed);
        assert_eq!(out, "it\u{2019}s fine");
    }

    #[test]
    fn leaves_clean_text_untouched() {
        let (out, changed) = remediate("plain ascii text");
        assert!(!changed);
        assert_eq!(out, "plain ascii text");
    }
}
