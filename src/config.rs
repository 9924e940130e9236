//! Pipeline configuration.
//!
//! The core never reads a config file — that is the CLI collaborator's job.
//! [PipelineConfig] is a plain struct with sensible defaults, meant to be
//! built programmatically by whatever embeds this crate.

use std::collections::HashSet;
use std::path::PathBuf;

/// Structural triage thresholds (see [crate::triage]).
///
/// Defaults reflect the thresholds this engine ships with; all are
/// independently overridable.
#[derive(Debug, Clone, PartialEq)]
pub struct TriageThresholds {
    pub min_alpha_ratio: f64,
    pub min_char_count: usize,
    pub max_list_pattern_ratio: f64,
    pub max_line_length_cv: f64,
    pub max_fragment_ratio: f64,
}

impl Default for TriageThresholds {
    fn default() -> Self {
        Self {
            min_alpha_ratio: 0.6,
            min_char_count: 500,
            max_list_pattern_ratio: 0.3,
            max_line_length_cv: 1.5,
            max_fragment_ratio: 0.4,
        }
    }
}

/// A noise-word category flag, as found in the `FLAGS` column of a
/// vocabulary-candidates file (see [crate::vocab]).
pub type NoiseCategory = char;

/// Top-level configuration consumed by [crate::driver::ParallelFileDriver]
/// and by [crate::pipeline::CleaningPipeline].
#[derive(Debug, Clone)]
pub struct PipelineConfig {
    pub triage: TriageThresholds,
    /// Number of worker threads in the bounded pool. Default 24.
    pub workers: usize,
    /// Noise categories to strip by default, see [crate::noise].
    pub noise_categories: HashSet<NoiseCategory>,
    /// Directory holding Hunspell-format dictionaries, one pair per
    /// language code (`en.aff`/`en.dic`, ...).
    pub dictionary_dir: Option<PathBuf>,
    /// Path to a whitelist file, one lowercase token per line.
    pub whitelist_path: Option<PathBuf>,
    /// Minimum confidence for the language detector to accept a document
    /// as English, see [crate::lang].
    pub lang_confidence_threshold: f32,
    /// Number of leading characters sampled by the language detector.
    pub lang_sample_chars: usize,
    /// Maximum number of context characters retained per [crate::vocab::WordInfo].
    pub vocab_context_chars: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            triage: TriageThresholds::default(),
            workers: 24,
            noise_categories: ['G', 'R'].into_iter().collect(),
            dictionary_dir: None,
            whitelist_path: None,
            lang_confidence_threshold: 0.5,
            lang_sample_chars: 10_000,
            vocab_context_chars: 80,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_spec() {
        let cfg = PipelineConfig::default();
        assert_eq!(cfg.workers, 24);
        assert_eq!(cfg.noise_categories.len(), 2);
        assert!(cfg.noise_categories.contains(&'G'));
        assert!(cfg.noise_categories.contains(&'R'));
        assert_eq!(cfg.triage.min_alpha_ratio, 0.6);
        assert_eq!(cfg.triage.min_char_count, 500);
        assert_eq!(cfg.lang_confidence_threshold, 0.5);
        assert_eq!(cfg.lang_sample_chars, 10_000);
    }
}
