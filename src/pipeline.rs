/*! Per-document cleaning pipeline: ties the normalizer, language detector,
triage, boilerplate stripper, line unwrapper and OCR pattern engine
together in the order the cleaning pass requires.

raw bytes → normalize → detect language → triage → strip boilerplate →
unwrap lines → apply OCR patterns → [optional noise strip] → output.
!*/
use crate::boilerplate::{BoilerplateStripper, StrippedRegion};
use crate::config::PipelineConfig;
use crate::dictionary::DictionaryHandle;
use crate::error::Error;
use crate::lang::LanguageDetector;
use crate::noise::NoiseSet;
use crate::triage::{self, Action, TriageResult};
use crate::{noise, ocr, unwrap};

pub enum Outcome {
    Rejected {
        triage: TriageResult,
    },
    Cleaned {
        text: String,
        triage: TriageResult,
        stripped_regions: Vec<StrippedRegion>,
        boilerplate_chars: usize,
        total_substitutions: u64,
        substitutions_by_category: std::collections::HashMap<crate::patterns::Category, u64>,
        lines_joined: usize,
        words_dehyphenated: usize,
    },
}

pub struct CleaningPipeline {
    detector: LanguageDetector,
    stripper: BoilerplateStripper,
}

impl CleaningPipeline {
    pub fn new(config: &PipelineConfig) -> Self {
        Self {
            detector: LanguageDetector::new(config.lang_sample_chars, config.lang_confidence_threshold),
            stripper: BoilerplateStripper::new(),
        }
    }

    /// Runs the full cleaning pipeline over `raw` (already lossily decoded
    /// to UTF-8 by the caller). `dictionary` suppresses dehyphenation of
    /// known compounds when present.
    pub fn run(
        &self,
        raw: &str,
        config: &PipelineConfig,
        dictionary: Option<&DictionaryHandle>,
        noise_set: Option<&NoiseSet>,
    ) -> Result<Outcome, Error> {
        let normalized = crate::unicode::normalize(raw);

        let detection = self.detector.detect(&normalized.text);
        let metrics = triage::compute_metrics(&normalized.text);
        let triage_result = triage::triage(metrics, &detection, &config.triage);

        if triage_result.action == Action::Reject {
            return Ok(Outcome::Rejected {
                triage: triage_result,
            });
        }

        let stripped = self.stripper.strip(&normalized.text);
        let (unwrapped, unwrap_report) = unwrap::unwrap_lines(&stripped.text, dictionary);
        let (mut cleaned, counts) = ocr::apply(&unwrapped)?;

        if let Some(set) = noise_set {
            cleaned = noise::strip(&cleaned, set);
        }

        Ok(Outcome::Cleaned {
            text: cleaned,
            triage: triage_result,
            stripped_regions: stripped.stripped_regions,
            boilerplate_chars: stripped.total_chars_stripped,
            total_substitutions: counts.total_substitutions,
            substitutions_by_category: counts.substitutions_by_category,
            lines_joined: unwrap_report.lines_joined,
            words_dehyphenated: unwrap_report.words_dehyphenated,
        })
    }
}
