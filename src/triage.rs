/*! Document Triage

Computes structural metrics over a document in a single pass and emits a
judgment — process, review or reject — consumed by the driver. Triage never
modifies the text; it only decides what happens to it next.
!*/
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::lang::Detection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Process,
    Review,
    Reject,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Process => "process",
            Action::Review => "review",
            Action::Reject => "reject",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TriageMetrics {
    pub line_count: usize,
    pub char_count: usize,
    pub alpha_ratio: f64,
    pub mean_words_per_line: f64,
    pub line_length_cv: f64,
    pub fragment_ratio: f64,
    pub list_pattern_ratio: f64,
}

pub struct TriageResult {
    pub action: Action,
    pub problems: Vec<&'static str>,
    pub metrics: TriageMetrics,
    pub detected_lang: &'static str,
    pub lang_confidence: f32,
    pub is_english: bool,
}

lazy_static::lazy_static! {
    static ref LIST_PATTERN: Regex =
        Regex::new(r"(?i)^\s*(\d+\s*$|[A-Z][a-zA-Z'-]+,\s*[A-Z][a-zA-Z'-]+,\s*\d{3,4}(,\s*\d+)?\s*$)")
            .expect("static list-pattern regex");
}

/// Computes [TriageMetrics] for `text` in a single pass.
pub fn compute_metrics(text: &str) -> TriageMetrics {
    let lines: Vec<&str> = text.lines().collect();
    let line_count = lines.len();
    let char_count = text.chars().count();

    let alpha_count = text.chars().filter(|c| c.is_alphabetic()).count();
    let non_ws_count = text.chars().filter(|c| !c.is_whitespace()).count();
    let alpha_ratio = if non_ws_count > 0 {
        alpha_count as f64 / non_ws_count as f64
    } else {
        0.0
    };

    let non_empty_lines: Vec<&&str> = lines.iter().filter(|l| !l.trim().is_empty()).collect();
    let word_counts: Vec<usize> = non_empty_lines
        .iter()
        .map(|l| l.split_whitespace().count())
        .collect();
    let mean_words_per_line = if !word_counts.is_empty() {
        word_counts.iter().sum::<usize>() as f64 / word_counts.len() as f64
    } else {
        0.0
    };

    let lengths: Vec<f64> = non_empty_lines.iter().map(|l| l.chars().count() as f64).collect();
    let line_length_cv = if lengths.len() > 1 {
        let mean = lengths.iter().sum::<f64>() / lengths.len() as f64;
        if mean > 0.0 {
            let variance =
                lengths.iter().map(|l| (l - mean).powi(2)).sum::<f64>() / lengths.len() as f64;
            variance.sqrt() / mean
        } else {
            0.0
        }
    } else {
        0.0
    };

    let fragment_count = word_counts.iter().filter(|&&w| w <= 3).count();
    let fragment_ratio = if !non_empty_lines.is_empty() {
        fragment_count as f64 / non_empty_lines.len() as f64
    } else {
        0.0
    };

    let list_count = lines.iter().filter(|l| LIST_PATTERN.is_match(l)).count();
    let list_pattern_ratio = if line_count > 0 {
        list_count as f64 / line_count as f64
    } else {
        0.0
    };

    TriageMetrics {
        line_count,
        char_count,
        alpha_ratio,
        mean_words_per_line,
        line_length_cv,
        fragment_ratio,
        list_pattern_ratio,
    }
}

/// Classifies a document given its precomputed metrics and the language
/// detector's verdict, most severe problem first.
pub fn triage(
    metrics: TriageMetrics,
    detection: &Detection,
    thresholds: &crate::config::TriageThresholds,
) -> TriageResult {
    let mut problems = Vec::new();

    if metrics.alpha_ratio < thresholds.min_alpha_ratio {
        problems.push("low_alpha_ratio");
    }
    if !detection.is_english {
        problems.push("non_english");
    }
    if metrics.char_count < thresholds.min_char_count {
        problems.push("too_short");
    }
    if metrics.list_pattern_ratio > thresholds.max_list_pattern_ratio {
        problems.push("catalog_index");
    }

    let reject = !problems.is_empty();

    if !reject {
        if metrics.line_length_cv > thresholds.max_line_length_cv {
            problems.push("multi_column_suspected");
        }
        if metrics.fragment_ratio > thresholds.max_fragment_ratio {
            problems.push("high_fragment_ratio");
        }
    }

    let action = if reject {
        Action::Reject
    } else if !problems.is_empty() {
        Action::Review
    } else {
        Action::Process
    };

    TriageResult {
        action,
        problems,
        metrics,
        detected_lang: detection.detected_lang,
        lang_confidence: detection.confidence,
        is_english: detection.is_english,
    }
}
