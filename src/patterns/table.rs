//! OCR correction pattern data.
//!
//! Patterns are authored as `(wrong, right)` word pairs grouped by
//! confusion type, then expanded into case-sensitive whole-word regexes by
//! [expand_word_pairs]. A pattern is only admitted here if it is *closed on
//! context*: the wrong form must not itself be a legitimate historical
//! word (see [crate::patterns::context] for forms that are ambiguous and
//! therefore only counted, never corrected).
//!
//! Long-s is authored twice from the same word list: once as the `f`-for-ſ
//! OCR misreading ([expand_word_pairs]), and once keyed on the literal ſ
//! glyph itself ([expand_long_s_glyph_pairs]), since source text can carry
//! either depending on whether the scanning pipeline preserved the glyph or
//! flattened it to ASCII.

use super::{Category, RawPattern};

/// Expands `(wrong, right)` pairs into lowercase and Title-case whole-word
/// patterns. OCR misreadings fire identically whether or not the source
/// word was capitalized (e.g. both "firft" and "Firft" occur), so every
/// pair is authored once and doubled here rather than by hand.
fn expand_word_pairs(
    category: Category,
    name_prefix: &'static str,
    pairs: &'static [(&'static str, &'static str)],
) -> Vec<RawPattern> {
    let mut out = Vec::with_capacity(pairs.len() * 2);
    for (wrong, right) in pairs {
        out.push(RawPattern {
            category,
            name: leak_name(name_prefix, wrong, false),
            find: leak_boundary(wrong, false),
            replace: right,
            note: None,
        });
        out.push(RawPattern {
            category,
            name: leak_name(name_prefix, wrong, true),
            find: leak_boundary(wrong, true),
            replace: leak_title(right),
            note: None,
        });
    }
    out
}

/// Builds a stable `'static` pattern name from a prefix and a word. Uses
/// `Box::leak` because these names are computed once, at table-compile
/// time, and live for the remainder of the process — the same lifetime as
/// the hand-written literals they sit alongside in [super::RawPattern].
fn leak_name(prefix: &str, word: &str, capitalized: bool) -> &'static str {
    let suffix = if capitalized { "_cap" } else { "" };
    Box::leak(format!("{prefix}_{word}{suffix}").into_boxed_str())
}

fn leak_boundary(word: &str, capitalized: bool) -> &'static str {
    let w = if capitalized { title_case(word) } else { word.to_string() };
    Box::leak(format!(r"\b{w}\b").into_boxed_str())
}

fn leak_title(word: &str) -> &'static str {
    Box::leak(title_case(word).into_boxed_str())
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Renders `word` the way pre-1800 typesetting would: every lowercase `s`
/// becomes the long-s glyph (ſ, U+017F) except a word-final one, which stays
/// a round `s`. This is the historical rule long-s followed, not an OCR
/// error — source text that was never OCR'd as `f` can still carry the
/// literal glyph.
fn to_long_s_form(word: &str) -> String {
    let chars: Vec<char> = word.chars().collect();
    let last = chars.len().saturating_sub(1);
    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| if c == 's' && i != last { '\u{017f}' } else { c })
        .collect()
}

/// Builds long-s patterns keyed on the literal ſ glyph rather than the
/// `f`-for-ſ OCR misreading [expand_word_pairs] handles above. The glyph
/// never appears capitalized, so unlike [expand_word_pairs] this produces
/// only one pattern per pair.
fn expand_long_s_glyph_pairs(
    name_prefix: &'static str,
    pairs: &'static [(&'static str, &'static str)],
) -> Vec<RawPattern> {
    let mut out = Vec::with_capacity(pairs.len());
    for (wrong, right) in pairs {
        let glyph_form = to_long_s_form(right);
        out.push(RawPattern {
            category: Category::LongS,
            name: leak_name(name_prefix, wrong, false),
            find: leak_boundary(&glyph_form, false),
            replace: right,
            note: None,
        });
    }
    out
}

/// ~50 long-s patterns: OCR rendered the historical long-s (ſ) as `f`.
/// Only words where the `f`-for-`s` reading is unambiguous are admitted —
/// actual `f` words (e.g. "first" never collides since we match the wrong
/// spelling "firft", not "first").
const LONG_S_PAIRS: &[(&str, &str)] = &[
    ("firft", "first"),
    ("houfe", "house"),
    ("himfelf", "himself"),
    ("herfelf", "herself"),
    ("itfelf", "itself"),
    ("fmall", "small"),
    ("fome", "some"),
    ("fay", "say"),
    ("fays", "says"),
    ("faid", "said"),
    ("fee", "see"),
    ("feen", "seen"),
    ("fince", "since"),
    ("fuch", "such"),
    ("fpirit", "spirit"),
    ("perfon", "person"),
    ("perfons", "persons"),
    ("mafter", "master"),
    ("miftrefs", "mistress"),
    ("mifs", "miss"),
    ("paft", "past"),
    ("laft", "last"),
    ("juft", "just"),
    ("muft", "must"),
    ("moft", "most"),
    ("hufband", "husband"),
    ("fervant", "servant"),
    ("fervice", "service"),
    ("fubject", "subject"),
    ("fuppofe", "suppose"),
    ("fentence", "sentence"),
    ("feafon", "season"),
    ("feparate", "separate"),
    ("fociety", "society"),
    ("fufficient", "sufficient"),
    ("fuffer", "suffer"),
    ("fatisfy", "satisfy"),
    ("ftrength", "strength"),
    ("ftrange", "strange"),
    ("ftate", "state"),
    ("ftill", "still"),
    ("ftory", "story"),
    ("ftand", "stand"),
    ("ftood", "stood"),
    ("ftreet", "street"),
    ("ftrike", "strike"),
    ("fyftem", "system"),
    ("fhould", "should"),
    ("fhall", "shall"),
    ("fhip", "ship"),
];

/// ~20 li/h confusion patterns: OCR split a single `h` glyph into `li`.
const LI_H_PAIRS: &[(&str, &str)] = &[
    ("tlie", "the"),
    ("tliat", "that"),
    ("tliis", "this"),
    ("tliese", "these"),
    ("tliose", "those"),
    ("wliich", "which"),
    ("wlien", "when"),
    ("wliere", "where"),
    ("wliile", "while"),
    ("wlio", "who"),
    ("wliom", "whom"),
    ("wliofe", "whose"),
    ("wliy", "why"),
    ("wliat", "what"),
    ("sliall", "shall"),
    ("sliould", "should"),
    ("sucli", "such"),
    ("mucli", "much"),
    ("ricli", "rich"),
    ("cliild", "child"),
];

/// ~38 ll→U confusion patterns: OCR rendered a double-l as a capital U.
const LL_U_PAIRS: &[(&str, &str)] = &[
    ("waU", "wall"),
    ("caU", "call"),
    ("faU", "fall"),
    ("haU", "hall"),
    ("baU", "ball"),
    ("taU", "tall"),
    ("weU", "well"),
    ("teU", "tell"),
    ("seU", "sell"),
    ("beU", "bell"),
    ("yeU", "yell"),
    ("wiU", "will"),
    ("stiU", "still"),
    ("skiU", "skill"),
    ("biU", "bill"),
    ("hiU", "hill"),
    ("miU", "mill"),
    ("kiU", "kill"),
    ("fuU", "full"),
    ("duU", "dull"),
    ("smeU", "smell"),
    ("speU", "spell"),
    ("sweU", "swell"),
    ("dweU", "dwell"),
    ("sheU", "shell"),
    ("aUow", "allow"),
    ("foUow", "follow"),
    ("feUow", "fellow"),
    ("meUow", "mellow"),
    ("yeUow", "yellow"),
    ("coUect", "collect"),
    ("coUege", "college"),
    ("viUage", "village"),
    ("miUion", "million"),
    ("exceUent", "excellent"),
    ("inteUigent", "intelligent"),
    ("paraUel", "parallel"),
    ("gaUery", "gallery"),
];

/// 5 rn/m confusion patterns: OCR fused "rn" into "m" (or the reverse).
const RN_M_PAIRS: &[(&str, &str)] = &[
    ("moming", "morning"),
    ("buming", "burning"),
    ("tuming", "turning"),
    ("leaming", "learning"),
    ("retum", "return"),
];

/// 6 Unicode ligatures rendered by pre-1914 typesetting and left intact by
/// OCR (they are not confusions — the glyph is genuinely a ligature — but
/// downstream NLP tooling expects decomposed Latin letters).
const LIGATURE_PAIRS: &[(&str, &str)] = &[
    ("\u{FB01}", "fi"),
    ("\u{FB02}", "fl"),
    ("\u{FB00}", "ff"),
    ("\u{FB03}", "ffi"),
    ("\u{FB04}", "ffl"),
    ("\u{0153}", "oe"),
];

/// 7 inline hyphen-compound forms common in pre-1914 printing, joined into
/// their single-word modern spelling. Distinct from [crate::unwrap]'s
/// line-break dehyphenation: these hyphens sit within a single line.
const WORD_JOIN_PAIRS: &[(&str, &str)] = &[
    ("to-day", "today"),
    ("to-morrow", "tomorrow"),
    ("to-night", "tonight"),
    ("to-gether", "together"),
    ("any-thing", "anything"),
    ("some-thing", "something"),
    ("with-out", "without"),
];

/// 10 inline watermark residue fragments — leftovers of digitization
/// boilerplate that survive within running text even after [crate::boilerplate]
/// has removed the block/footprint regions that contained them.
const WATERMARK_PATTERNS: &[(&str, &str, &str)] = &[
    (
        "watermark_digitized_by_google_inline",
        r"(?i)digiti[sz]ed\s+by\s+google",
        "",
    ),
    (
        "watermark_google_books_url",
        r"https?://books\.google\.com/\S*",
        "",
    ),
    (
        "watermark_archive_org_url",
        r"https?://(www\.)?archive\.org/\S*",
        "",
    ),
    (
        "watermark_this_is_a_digital_copy",
        r"(?i)this is a digital copy of a book that was preserved[^.]*\.",
        "",
    ),
    ("watermark_google_books_mention", r"(?i)google[\s-]?books", ""),
    ("watermark_hathitrust_mention", r"(?i)hathi\s*trust", ""),
    (
        "watermark_generated_timestamp",
        r"Generated\s+on\s+\d{4}-\d{2}-\d{2}\s+\d{2}:\d{2}\s+GMT",
        "",
    ),
    ("watermark_public_domain_inline", r"(?i)public domain,\s*", ""),
    (
        "watermark_ocr_damaged_google",
        r"OO\s*gl[CcIi]",
        "Digitized by Google",
    ),
    (
        "watermark_bygoogle_run_together",
        r"(?i)byGoogle",
        "by Google",
    ),
];

/// 5 anachronism patterns: modern artifacts (emails, ISBNs, copyright
/// boilerplate) that have no business inside pre-1914 prose and are safe
/// to strip outright, applied last in the pipeline.
const ANACHRONISM_PATTERNS: &[(&str, &str, &str)] = &[
    (
        "anachronism_email",
        r"[\w.+-]+@[\w-]+\.[\w.-]+",
        "",
    ),
    (
        "anachronism_bare_url",
        r"(?i)\bwww\.[\w./-]+",
        "",
    ),
    ("anachronism_isbn", r"(?i)ISBN[:\s-]*[\d-]{10,17}", ""),
    (
        "anachronism_copyright_notice",
        r"(?i)copyright\s*(\(c\)|©)?\s*\d{4}[^.\n]*",
        "",
    ),
    (
        "anachronism_all_rights_reserved",
        r"(?i)all rights reserved\.?",
        "",
    ),
]
;

pub(crate) fn raw_patterns() -> Vec<RawPattern> {
    let mut out = Vec::new();
    out.extend(expand_word_pairs(Category::LongS, "long_s", LONG_S_PAIRS));
    out.extend(expand_long_s_glyph_pairs("long_s_glyph", LONG_S_PAIRS));
    out.extend(expand_word_pairs(
        Category::LiHConfusion,
        "li_h",
        LI_H_PAIRS,
    ));
    out.extend(expand_word_pairs(
        Category::LlUConfusion,
        "ll_u",
        LL_U_PAIRS,
    ));
    out.extend(expand_word_pairs(Category::RnMConfusion, "rn_m", RN_M_PAIRS));

    for (glyph, replacement) in LIGATURE_PAIRS {
        out.push(RawPattern {
            category: Category::Ligature,
            name: leak_name("ligature", glyph, false),
            find: Box::leak(regex::escape(glyph).into_boxed_str()),
            replace: replacement,
            note: None,
        });
    }

    out.extend(expand_word_pairs(
        Category::WordJoin,
        "word_join",
        WORD_JOIN_PAIRS,
    ));

    for (name, find, replace) in WATERMARK_PATTERNS {
        out.push(RawPattern {
            category: Category::Watermark,
            name,
            find,
            replace,
            note: Some("inline digitization residue, not a full boilerplate region"),
        });
    }

    for (name, find, replace) in ANACHRONISM_PATTERNS {
        out.push(RawPattern {
            category: Category::Anachronism,
            name,
            find,
            replace,
            note: Some("modern artifact with no plausible pre-1914 reading"),
        });
    }

    out
}
