//! Context patterns: counted, never substituted.
//!
//! Each of these forms is ambiguous between a genuine historical spelling
//! and an OCR misreading, and the engine deliberately never resolves the
//! ambiguity. They exist purely so an auditor can see how often a
//! document contains them.

use super::RawContextPattern;

pub(crate) fn raw_context_patterns() -> Vec<RawContextPattern> {
    vec![
        RawContextPattern {
            name: "publick",
            find: r"(?i)\bpublick\b",
            note: "archaic spelling of 'public'; also a plausible long-s/ck OCR artifact",
        },
        RawContextPattern {
            name: "shew",
            find: r"(?i)\bshew(n|s|ed|ing)?\b",
            note: "archaic spelling of 'show'; not an OCR error",
        },
        RawContextPattern {
            name: "compleat",
            find: r"(?i)\bcompleat\b",
            note: "archaic spelling of 'complete'",
        },
        RawContextPattern {
            name: "antient",
            find: r"(?i)\bantient\b",
            note: "archaic spelling of 'ancient'",
        },
        RawContextPattern {
            name: "connexion",
            find: r"(?i)\bconnexion\b",
            note: "archaic British spelling of 'connection'",
        },
        RawContextPattern {
            name: "musick",
            find: r"(?i)\bmusick\b",
            note: "archaic spelling of 'music'",
        },
        RawContextPattern {
            name: "chymist",
            find: r"(?i)\bchymist\b",
            note: "archaic spelling of 'chemist'",
        },
        RawContextPattern {
            name: "HaUe_ambiguous",
            find: r"\bHaUe\b",
            note: "ambiguous between an ll→U OCR artifact of 'Have' and a historical u/v \
                   interchange ('Haue' for 'Have'); never auto-corrected",
        },
        RawContextPattern {
            name: "lie_for_he",
            find: r"\blie\b",
            note: "standalone 'lie' may be the genuine verb/noun or a rare OCR split of 'he'; \
                   too context-dependent to resolve automatically",
        },
    ]
}
