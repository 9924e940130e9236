/*! OCR Pattern Engine

Applies the compiled pattern table ([crate::patterns]) in authored order,
accumulating per-category substitution counts. No semantic context is
consulted here — that separation of concerns is why Context Patterns exist:
they count but never substitute.
!*/
use std::collections::HashMap;

use crate::error::Error;
use crate::patterns::Category;

#[derive(Debug, Clone, Default)]
pub struct CleanupCounts {
    pub total_substitutions: u64,
    pub substitutions_by_category: HashMap<Category, u64>,
    pub context_matches: HashMap<&'static str, u64>,
}

/// Applies every pattern in table order, then counts (without applying)
/// every context pattern.
pub fn apply(text: &str) -> Result<(String, CleanupCounts), Error> {
    let table = crate::patterns::table()?;
    let mut counts = CleanupCounts::default();
    let mut current = text.to_string();

    for pattern in table.patterns() {
        let fired = pattern.regex.find_iter(&current).count() as u64;
        if fired > 0 {
            current = pattern
                .regex
                .replace_all(&current, pattern.replacement)
                .into_owned();
            counts.total_substitutions += fired;
            *counts
                .substitutions_by_category
                .entry(pattern.category)
                .or_insert(0) += fired;
        }
    }

    for ctx in table.context_patterns() {
        let hits = ctx.regex.find_iter(&current).count() as u64;
        if hits > 0 {
            counts.context_matches.insert(ctx.name, hits);
        }
    }

    Ok((current, counts))
}
