/*! Language Detector

Samples the first `lang_sample_chars` characters of a normalized document
and decides whether it is English, using stopword-frequency scoring rather
than a statistical classifier — the pack has no fasttext model file for
this corpus' language set, and a half-dozen short stopword lists are enough
to separate English from the French, German and Latin prose that shows up
in misfiled pre-1914 scans.

Never fails: a sample with too little signal is assumed English, the
conservative default for a corpus that is overwhelmingly English.
!*/
mod stopwords;

use serde::{Deserialize, Serialize};

/// Outcome of a single detection call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Detection {
    pub is_english: bool,
    pub detected_lang: &'static str,
    pub confidence: f32,
}

/// Scores a text sample against each candidate language's stopword list and
/// returns the best match with a confidence derived from its margin over
/// the runner-up.
pub struct LanguageDetector {
    sample_chars: usize,
    confidence_threshold: f32,
}

impl LanguageDetector {
    pub fn new(sample_chars: usize, confidence_threshold: f32) -> Self {
        Self {
            sample_chars,
            confidence_threshold,
        }
    }

    /// Detects the primary language of `text`, sampling at most
    /// `sample_chars` leading characters.
    pub fn detect(&self, text: &str) -> Detection {
        let sample: String = text.chars().take(self.sample_chars).collect();
        let tokens: Vec<String> = sample
            .split_whitespace()
            .map(|w| w.trim_matches(|c: char| !c.is_alphanumeric()).to_lowercase())
            .filter(|w| !w.is_empty())
            .collect();

        if tokens.len() < 20 {
            // Too little signal to say anything with confidence; the
            // corpus is pre-filtered to English sources so we default to
            // accepting it.
            return Detection {
                is_english: true,
                detected_lang: "eng",
                confidence: self.confidence_threshold,
            };
        }

        let mut scores: Vec<(&'static str, f32)> = stopwords::LANGUAGES
            .iter()
            .map(|(code, words)| {
                let hits = tokens.iter().filter(|t| words.contains(&t.as_str())).count();
                (*code, hits as f32 / tokens.len() as f32)
            })
            .collect();

        scores.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
        let (top_lang, top_score) = scores[0];
        let runner_up = scores.get(1).map(|(_, s)| *s).unwrap_or(0.0);

        if top_score == 0.0 {
            return Detection {
                is_english: true,
                detected_lang: "eng",
                confidence: self.confidence_threshold,
            };
        }

        let confidence = ((top_score - runner_up) / top_score).clamp(0.0, 1.0).max(top_score.min(1.0));
        let is_english = top_lang == "eng" && confidence >= self.confidence_threshold;

        Detection {
            is_english,
            detected_lang: top_lang,
            confidence,
        }
    }
}

impl Default for LanguageDetector {
    fn default() -> Self {
        Self::new(10_000, 0.5)
    }
}
