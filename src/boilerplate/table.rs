//! Static boilerplate pattern data, grouped by hosting service.

pub(super) enum RawKind {
    Block {
        start: &'static str,
        end: &'static str,
    },
    Footprint {
        marker: &'static str,
        before: usize,
        after: usize,
    },
    /// Everything from the start of the document through the first line
    /// matching `marker`, inclusive (a license preamble ending in a marker
    /// line).
    HeaderUpTo { marker: &'static str },
    /// Everything from the first line matching `marker` through the end of
    /// the document, inclusive (a trailing license block).
    FooterFrom { marker: &'static str },
}

pub(super) struct RawPattern {
    pub category: &'static str,
    pub name: &'static str,
    pub kind: RawKind,
}

pub(super) fn raw_patterns() -> Vec<RawPattern> {
    vec![
        // --- Google Books ---
        RawPattern {
            category: "google_books",
            name: "google_books_disclaimer",
            kind: RawKind::Footprint {
                marker: r"(?i)digitized by google|OOglC|byGoogle",
                before: 0,
                after: 2,
            },
        },
        RawPattern {
            category: "google_books",
            name: "google_books_usage_guidelines",
            kind: RawKind::Block {
                start: r"(?i)^\s*Usage guidelines\s*$",
                end: r"(?i)google\.com/books",
            },
        },
        // --- Internet Archive ---
        RawPattern {
            category: "internet_archive",
            name: "internet_archive_footer",
            kind: RawKind::Footprint {
                marker: r"(?i)generated by\s+(the\s+)?internet archive|archive\.org/details/",
                before: 0,
                after: 1,
            },
        },
        // --- HathiTrust ---
        RawPattern {
            category: "hathitrust",
            name: "hathitrust_public_domain_notice",
            kind: RawKind::Footprint {
                marker: r"(?i)public domain.{0,40}hathitrust|hathitrust.{0,40}public domain",
                before: 0,
                after: 2,
            },
        },
        RawPattern {
            category: "hathitrust",
            name: "hathitrust_attribution",
            kind: RawKind::Footprint {
                marker: r"(?i)original from.{0,60}digitized by",
                before: 0,
                after: 0,
            },
        },
        // --- JSTOR ---
        RawPattern {
            category: "jstor",
            name: "jstor_early_journal_content",
            kind: RawKind::Block {
                start: r"(?i)^\s*Early Journal Content",
                end: r"(?i)jstor\.org",
            },
        },
        RawPattern {
            category: "jstor",
            name: "jstor_terms_footer",
            kind: RawKind::Footprint {
                marker: r"(?i)JSTOR is a not-for-profit service",
                before: 0,
                after: 3,
            },
        },
        // --- Project Gutenberg ---
        RawPattern {
            category: "gutenberg",
            name: "gutenberg_start_marker",
            kind: RawKind::HeaderUpTo {
                marker: r"(?i)^\*\*\*\s*START OF (THE|THIS) PROJECT GUTENBERG",
            },
        },
        RawPattern {
            category: "gutenberg",
            name: "gutenberg_end_marker",
            kind: RawKind::FooterFrom {
                marker: r"(?i)^\*\*\*\s*END OF (THE|THIS) PROJECT GUTENBERG",
            },
        },
        // --- Scanner/library stamps, generic ---
        RawPattern {
            category: "library_stamp",
            name: "library_of_congress_stamp",
            kind: RawKind::Footprint {
                marker: r"(?i)library of congress(\s+catalog(ue)? card number)?",
                before: 0,
                after: 0,
            },
        },
    ]
}
