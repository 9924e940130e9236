/*! Pattern Tables

Compile-time-known, ordered regex→replacement lists with categories, used by
[crate::ocr] to correct recurring OCR errors.

Patterns are declared as plain data (see [table] and [context]) and
compiled into an immutable [Regex] exactly once per process, mirroring how
`ungoliant` keeps its filters and transformers declarative and its heavier
resources (dictionaries, blocklists) lazily initialized once.

Order within [PatternTable::patterns] is significant: long-s patterns run
first because later patterns (li/h, ll→U) rely on words already being
recognizable words. See the module docs on [crate::ocr] for the full
rationale.
!*/
mod context;
mod table;

use once_cell::sync::OnceCell;
use regex::Regex;
use std::collections::HashMap;

use crate::error::Error;

/// Category label attached to every OCR pattern, used for per-category
/// accounting and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    LongS,
    LiHConfusion,
    LlUConfusion,
    RnMConfusion,
    Ligature,
    WordJoin,
    Watermark,
    Anachronism,
    Other,
}

impl Category {
    /// Stable string used in reports and audits.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::LongS => "long_s",
            Category::LiHConfusion => "li_h_confusion",
            Category::LlUConfusion => "ll_U_confusion",
            Category::RnMConfusion => "rn_m_confusion",
            Category::Ligature => "ligature",
            Category::WordJoin => "word_join",
            Category::Watermark => "watermark",
            Category::Anachronism => "anachronism",
            Category::Other => "other",
        }
    }

    /// All categories, in the order they are applied by [crate::ocr].
    pub fn all() -> &'static [Category] {
        &[
            Category::LongS,
            Category::LiHConfusion,
            Category::LlUConfusion,
            Category::RnMConfusion,
            Category::Ligature,
            Category::WordJoin,
            Category::Watermark,
            Category::Anachronism,
            Category::Other,
        ]
    }
}

/// A compiled OCR correction pattern: `⟨category, name, regex, replacement, note⟩`.
pub struct Pattern {
    pub category: Category,
    pub name: &'static str,
    pub regex: Regex,
    pub replacement: &'static str,
    pub note: Option<&'static str>,
}

/// A regex that is counted for audit purposes but never substituted,
/// because its resolution depends on context the engine deliberately does
/// not try to infer (ambiguous `rn`/`m` confusions without a dictionary
/// to disambiguate against, for example).
pub struct ContextPattern {
    pub name: &'static str,
    pub regex: Regex,
    pub note: &'static str,
}

/// Raw, uncompiled form of a [Pattern]. Declared as static data; compiled
/// exactly once by [PatternTable::compile].
pub(crate) struct RawPattern {
    pub category: Category,
    pub name: &'static str,
    pub find: &'static str,
    pub replace: &'static str,
    pub note: Option<&'static str>,
}

pub(crate) struct RawContextPattern {
    pub name: &'static str,
    pub find: &'static str,
    pub note: &'static str,
}

/// The immutable, process-wide pattern table.
pub struct PatternTable {
    patterns: Vec<Pattern>,
    context_patterns: Vec<ContextPattern>,
    categories_by_name: HashMap<&'static str, Category>,
}

impl PatternTable {
    fn compile(raw: Vec<RawPattern>, raw_context: Vec<RawContextPattern>) -> Result<Self, Error> {
        let mut categories_by_name = HashMap::with_capacity(raw.len());
        let mut patterns = Vec::with_capacity(raw.len());

        for r in raw {
            let regex = Regex::new(r.find).map_err(|e| {
                Error::PatternCompile(format!("pattern {:?} failed to compile: {e}", r.name))
            })?;
            categories_by_name.insert(r.name, r.category);
            patterns.push(Pattern {
                category: r.category,
                name: r.name,
                regex,
                replacement: r.replace,
                note: r.note,
            });
        }

        let mut context_patterns = Vec::with_capacity(raw_context.len());
        for r in raw_context {
            let regex = Regex::new(r.find).map_err(|e| {
                Error::PatternCompile(format!(
                    "context pattern {:?} failed to compile: {e}",
                    r.name
                ))
            })?;
            context_patterns.push(ContextPattern {
                name: r.name,
                regex,
                note: r.note,
            });
        }

        Ok(PatternTable {
            patterns,
            context_patterns,
            categories_by_name,
        })
    }

    /// Patterns in authored order. Order is load-bearing — see module docs.
    pub fn patterns(&self) -> &[Pattern] {
        &self.patterns
    }

    pub fn context_patterns(&self) -> &[ContextPattern] {
        &self.context_patterns
    }

    /// Constant-time category lookup for reporting.
    pub fn categorize(&self, pattern_name: &str) -> Option<Category> {
        self.categories_by_name.get(pattern_name).copied()
    }
}

static TABLE: OnceCell<PatternTable> = OnceCell::new();

/// Returns the process-wide pattern table, compiling it on first access.
///
/// Compilation happens at most once per process: subsequent calls reuse the
/// already-compiled table. A malformed pattern is a fatal, process-start
/// error (it poisons the `OnceCell` with an error message, which the
/// caller surfaces rather than panicking on future calls).
pub fn table() -> Result<&'static PatternTable, Error> {
    if let Some(t) = TABLE.get() {
        return Ok(t);
    }
    let compiled = PatternTable::compile(table::raw_patterns(), context::raw_context_patterns())?;
    // Another thread may have won the race; that's fine, both compiled the
    // same immutable data, we just keep whichever was inserted first.
    let _ = TABLE.set(compiled);
    Ok(TABLE.get().expect("just set"))
}
