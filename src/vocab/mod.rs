/*! Vocabulary Extractor

A second-pass analysis over already-cleaned text: tokenizes, classifies
suspicious tokens by the first matching heuristic, and folds duplicates by
lowercase form. Runs independently of the write-path cleaning pipeline —
extraction is embarrassingly parallel at file granularity, same as the rest
of the batch.
!*/
mod classify;

use std::collections::HashMap;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::dictionary::DictionaryHandle;

pub use classify::SuspicionCode;

lazy_static::lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"[A-Za-z]+(?:'[A-Za-z]+)*").expect("static word regex");
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordInfo {
    pub word: String,
    pub word_lower: String,
    pub frequency: u64,
    pub is_capitalized: bool,
    pub is_suspicious: bool,
    pub suspicious_reason: Option<SuspicionCode>,
    pub context: String,
}

/// Extracts word candidates from `text`, retaining at most `context_chars`
/// characters of surrounding text from each token's first occurrence.
/// `whitelist` tokens are dropped outright; tokens recognized by `dictionary`
/// are cleared of suspicion (and excluded from the returned candidates).
pub fn extract_vocab(
    text: &str,
    context_chars: usize,
    dictionary: Option<&DictionaryHandle>,
) -> Vec<WordInfo> {
    let mut seen: HashMap<String, WordInfo> = HashMap::new();

    for m in WORD_RE.find_iter(text) {
        let word = m.as_str();
        let lower = word.to_lowercase();

        if let Some(dict) = dictionary {
            if dict.is_whitelisted(&lower) {
                continue;
            }
        }

        let is_capitalized_now = word
            .chars()
            .next()
            .map(|c| c.is_uppercase())
            .unwrap_or(false);

        if let Some(entry) = seen.get_mut(&lower) {
            entry.frequency += 1;
            entry.is_capitalized |= is_capitalized_now;
        } else {
            let start = m.start().saturating_sub(context_chars / 2);
            let end = (m.end() + context_chars / 2).min(text.len());
            let context = safe_slice(text, start, end);

            let reason = classify::classify(word);
            let cleared = dictionary
                .map(|d| d.is_known_word(word))
                .unwrap_or(false);

            seen.insert(
                lower.clone(),
                WordInfo {
                    word: word.to_string(),
                    word_lower: lower,
                    frequency: 1,
                    is_capitalized: is_capitalized_now,
                    is_suspicious: reason.is_some() && !cleared,
                    suspicious_reason: if cleared { None } else { reason },
                    context,
                },
            );
        }
    }

    seen.into_values().filter(|w| w.is_suspicious).collect()
}

fn safe_slice(text: &str, start: usize, end: usize) -> String {
    let start = (0..=start).rev().find(|&i| text.is_char_boundary(i)).unwrap_or(0);
    let end = (end..=text.len()).find(|&i| text.is_char_boundary(i)).unwrap_or(text.len());
    text[start..end].to_string()
}

/// Formats a [WordInfo] as a `FREQ | FLAGS | CATEGORY | WORD | CONTEXT` line,
/// the same pipe-separated shape [crate::noise::parse_line] reads back.
pub fn format_line(info: &WordInfo) -> String {
    let flags = if info.is_capitalized { "T" } else { "" };
    let category = info.suspicious_reason.map(|c| c.as_char()).unwrap_or('?');
    let context = info.context.replace('\n', " ");
    format!(
        "{} | {} | {} | {} | {}",
        info.frequency, flags, category, info.word_lower, context
    )
}

/// Merges [WordInfo] candidates found across many files into a single
/// frequency-ranked list, the way the driver's per-file passes feed the
/// shared vocabulary-candidates output.
#[derive(Default)]
pub struct VocabAccumulator {
    words: std::sync::Mutex<HashMap<String, WordInfo>>,
}

impl VocabAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn merge(&self, found: Vec<WordInfo>) {
        let mut guard = self.words.lock().expect("vocab accumulator mutex poisoned");
        for w in found {
            guard
                .entry(w.word_lower.clone())
                .and_modify(|existing| {
                    existing.frequency += w.frequency;
                    existing.is_capitalized |= w.is_capitalized;
                })
                .or_insert(w);
        }
    }

    /// Consumes the accumulator, returning candidates sorted by descending
    /// frequency (ties broken alphabetically for deterministic output).
    pub fn finish(self) -> Vec<WordInfo> {
        let mut words: Vec<WordInfo> = self
            .words
            .into_inner()
            .expect("vocab accumulator mutex poisoned")
            .into_values()
            .collect();
        words.sort_by(|a, b| b.frequency.cmp(&a.frequency).then_with(|| a.word_lower.cmp(&b.word_lower)));
        words
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_garbage_consonant_cluster() {
        let candidates = extract_vocab("the xqzpt was here", 40, None);
        assert!(candidates.iter().any(|w| w.word_lower == "xqzpt"));
    }

    #[test]
    fn does_not_flag_ordinary_prose() {
        let candidates = extract_vocab("the house was built by himself", 40, None);
        assert!(candidates.is_empty());
    }

    #[test]
    fn deduplicates_by_lowercase() {
        let candidates = extract_vocab("Xqzpt and xqzpt and XQZPT", 40, None);
        let matches: Vec<_> = candidates.iter().filter(|w| w.word_lower == "xqzpt").collect();
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].frequency, 3);
    }

    #[test]
    fn format_line_round_trips_through_noise_parse_line() {
        let candidates = extract_vocab("the xqzpt was here", 40, None);
        let info = candidates.iter().find(|w| w.word_lower == "xqzpt").unwrap();
        let line = format_line(info);
        let (code, word) = crate::noise::parse_line(&line).unwrap();
        assert_eq!(word, "xqzpt");
        assert_eq!(Some(code), info.suspicious_reason);
    }

    #[test]
    fn accumulator_merges_frequencies_across_files() {
        let acc = VocabAccumulator::new();
        acc.merge(extract_vocab("xqzpt and xqzpt again", 40, None));
        acc.merge(extract_vocab("another xqzpt over here", 40, None));
        let finished = acc.finish();
        let entry = finished.iter().find(|w| w.word_lower == "xqzpt").unwrap();
        assert_eq!(entry.frequency, 3);
    }
}
