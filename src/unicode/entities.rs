//! HTML entity decoding, including double-encoded forms
//! (`&amp;amp;` → `&amp;` → `&`).
//!
//! Digitized text that passed through an HTML-aware pipeline at some point
//! often carries entities instead of the literal characters, and
//! occasionally carries them encoded twice over. Decoding runs to a fixed
//! point rather than once, so `&amp;amp;amp;` also resolves correctly.

const NAMED: &[(&str, &str)] = &[
    ("&amp;", "&"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&nbsp;", "\u{00A0}"),
    ("&mdash;", "\u{2014}"),
    ("&ndash;", "\u{2013}"),
    ("&hellip;", "\u{2026}"),
    ("&copy;", "\u{00A9}"),
    ("&reg;", "\u{00AE}"),
    ("&trade;", "\u{2122}"),
    ("&eacute;", "é"),
    ("&egrave;", "è"),
    ("&ecirc;", "ê"),
    ("&euml;", "ë"),
    ("&agrave;", "à"),
    ("&acirc;", "â"),
    ("&ccedil;", "ç"),
    ("&ocirc;", "ô"),
    ("&ouml;", "ö"),
    ("&uuml;", "ü"),
    ("&auml;", "ä"),
    ("&ntilde;", "ñ"),
    ("&Eacute;", "É"),
    ("&Agrave;", "À"),
    ("&Ccedil;", "Ç"),
    ("&szlig;", "ß"),
];

fn decode_once(input: &str) -> (String, bool) {
    let mut out = String::with_capacity(input.len());
    let mut changed = false;
    let bytes = input.as_bytes();
    let mut i = 0;

    'outer: while i < input.len() {
        if bytes[i] == b'&' {
            for (entity, replacement) in NAMED {
                if input[i..].starts_with(entity) {
                    out.push_str(replacement);
                    i += entity.len();
                    changed = true;
                    continue 'outer;
                }
            }
            if let Some(rest) = input[i..].strip_prefix("&#x").or_else(|| input[i..].strip_prefix("&#X")) {
                if let Some((code, consumed)) = parse_numeric(rest, 16) {
                    if let Some(ch) = char::from_u32(code) {
                        out.push(ch);
                        i += 3 + consumed;
                        changed = true;
                        continue;
                    }
                }
            } else if let Some(rest) = input[i..].strip_prefix("&#") {
                if let Some((code, consumed)) = parse_numeric(rest, 10) {
                    if let Some(ch) = char::from_u32(code) {
                        out.push(ch);
                        i += 2 + consumed;
                        changed = true;
                        continue;
                    }
                }
            }
        }
        let ch = input[i..].chars().next().unwrap();
        out.push(ch);
        i += ch.len_utf8();
    }

    (out, changed)
}

/// Parses a run of digits in the given radix followed by `;`, returning the
/// parsed value and the number of input bytes consumed (digits plus `;`).
fn parse_numeric(rest: &str, radix: u32) -> Option<(u32, usize)> {
    let digits_len = rest
        .bytes()
        .take_while(|b| (*b as char).is_digit(radix))
        .count();
    if digits_len == 0 {
        return None;
    }
    if rest.as_bytes().get(digits_len) != Some(&b';') {
        return None;
    }
    let code = u32::from_str_radix(&rest[..digits_len], radix).ok()?;
    Some((code, digits_len + 1))
}

/// Decodes entities to a fixed point, so doubly (or triply) encoded input
/// resolves completely.
pub(super) fn decode(input: &str) -> (String, bool) {
    let mut text = input.to_string();
    let mut changed_overall = false;

    loop {
        let (next, changed) = decode_once(&text);
        if !changed {
            break;
        }
        changed_overall = true;
        if next == text {
            break;
        }
        text = next;
    }

    (text, changed_overall)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_basic_entities() {
        let (out, changed) = decode("Tom &amp; Jerry");
        assert!(changed);
        assert_eq!(out, "Tom & Jerry");
    }

    #[test]
    fn decodes_double_encoded() {
        let (out, changed) = decode("Tom &amp;amp; Jerry");
        assert!(changed);
        assert_eq!(out, "Tom & Jerry");
    }

    #[test]
    fn decodes_numeric_entities() {
        let (out, changed) = decode("caf&#233; &#x65;specially");
        assert!(changed);
        assert_eq!(out, "café especially");
    }

    #[test]
    fn leaves_plain_text_untouched() {
        let (out, changed) = decode("nothing to decode here");
        assert!(!changed);
        assert_eq!(out, "nothing to decode here");
    }

    #[test]
    fn leaves_bare_ampersand_untouched() {
        let (out, changed) = decode("Smith & Sons");
        assert!(!changed);
        assert_eq!(out, "Smith & Sons");
    }
}
