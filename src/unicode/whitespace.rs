//! Collapses Unicode whitespace variants into a regular space, or deletes
//! them outright when they carry no visible width (zero-width spaces, byte
//! order marks, joiners).

/// Characters that render as some width of blank space and should become a
/// single regular space (U+0020).
fn is_space_like(c: char) -> bool {
    matches!(
        c,
        '\u{00A0}' // no-break space
            | '\u{1680}' // ogham space mark
            | '\u{2000}'..='\u{200A}' // en quad .. hair space
            | '\u{202F}' // narrow no-break space
            | '\u{205F}' // medium mathematical space
            | '\u{3000}' // ideographic space
            | '\u{2028}' // line separator
            | '\u{2029}' // paragraph separator
    )
}

/// Characters with no visible width that should be deleted entirely.
fn is_invisible(c: char) -> bool {
    matches!(
        c,
        '\u{200B}' // zero width space
            | '\u{200C}' // zero width non-joiner
            | '\u{200D}' // zero width joiner
            | '\u{FEFF}' // byte order mark / zero width no-break space
            | '\u{2060}' // word joiner
    )
}

pub(super) fn collapse(input: &str) -> (String, bool) {
    let mut out = String::with_capacity(input.len());
    let mut changed = false;

    for c in input.chars() {
        if is_invisible(c) {
            changed = true;
        } else if is_space_like(c) {
            out.push(' ');
            changed = true;
        } else {
            out.push(c);
        }
    }

    (out, changed)
}
