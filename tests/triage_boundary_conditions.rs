//! Boundary-condition scenarios for document triage and the cleaning
//! pipeline: inputs that are empty, all whitespace, BOM-only, built from
//! one very long line, or entirely boilerplate.

use corpus_cleanup::config::PipelineConfig;
use corpus_cleanup::pipeline::{CleaningPipeline, Outcome};
use corpus_cleanup::triage::Action;

fn run(text: &str) -> Outcome {
    let config = PipelineConfig::default();
    let pipeline = CleaningPipeline::new(&config);
    pipeline.run(text, &config, None, None).unwrap()
}

#[test]
fn empty_document_is_rejected_as_too_short() {
    match run("") {
        Outcome::Rejected { triage } => {
            assert_eq!(triage.action, Action::Reject);
            assert!(triage.problems.contains(&"too_short"));
            assert_eq!(triage.metrics.char_count, 0);
        }
        Outcome::Cleaned { .. } => panic!("empty document must be rejected"),
    }
}

#[test]
fn pure_whitespace_document_is_rejected() {
    let text = "   \n\t\n   \n".repeat(50);
    match run(&text) {
        Outcome::Rejected { triage } => {
            assert_eq!(triage.action, Action::Reject);
            // No alphabetic characters at all, so alpha_ratio is 0.
            assert!(triage.problems.contains(&"low_alpha_ratio"));
        }
        Outcome::Cleaned { .. } => panic!("whitespace-only document must be rejected"),
    }
}

#[test]
fn bom_only_document_is_rejected() {
    let text = "\u{feff}";
    match run(text) {
        Outcome::Rejected { triage } => {
            assert_eq!(triage.action, Action::Reject);
            assert!(triage.problems.contains(&"too_short"));
        }
        Outcome::Cleaned { .. } => panic!("BOM-only document must be rejected"),
    }
}

#[test]
fn one_very_long_line_is_still_processed() {
    // A single line with no newlines at all, well past the minimum
    // character threshold, made of ordinary alphabetic prose.
    let text = "historical prose about a quiet village and its river ".repeat(20_000);
    assert!(text.len() > 1_000_000);
    assert_eq!(text.lines().count(), 1);

    match run(&text) {
        Outcome::Cleaned { triage, .. } => {
            assert_eq!(triage.metrics.line_count, 1);
        }
        Outcome::Rejected { triage } => panic!("unexpected rejection: {:?}", triage.problems),
    }
}

#[test]
fn document_that_is_entirely_boilerplate_is_rejected_after_stripping() {
    // Every line matches the Google Books footprint. Triage runs on the
    // normalized text before boilerplate stripping, so a document this
    // short is rejected on length alone, before stripping ever happens.
    let text = "Digitized by Google\nThis book is provided for personal use.\nhttps://books.google.com/books?id=xyz\n";

    match run(text) {
        Outcome::Rejected { triage } => {
            assert_eq!(triage.action, Action::Reject);
            assert!(triage.problems.contains(&"too_short"));
        }
        Outcome::Cleaned { .. } => panic!("boilerplate-only document must be rejected"),
    }
}
