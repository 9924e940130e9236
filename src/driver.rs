/*! Parallel File Driver

Maps the cleaning pipeline over a list of input paths using a bounded
`rayon` worker pool. Workers share nothing but read-only resources (pattern
table, dictionary service, noise set) and the atomic counters in
[crate::report::ReportAccumulator] — there is no worker-to-worker
coordination and output file ordering is unspecified.
!*/
use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;
use walkdir::WalkDir;

use crate::audit::AuditLog;
use crate::config::PipelineConfig;
use crate::dictionary::DictionaryHandle;
use crate::error::Error;
use crate::io::decode_lossy;
use crate::noise::NoiseSet;
use crate::pipeline::{CleaningPipeline, Outcome};
use crate::report::{CleanupReport, ReportAccumulator};
use crate::vocab::{self, VocabAccumulator};

#[derive(Debug, Serialize)]
struct RejectedRecord<'a> {
    path: String,
    reason: &'a str,
    lang: &'a str,
    confidence: f32,
    alpha_ratio: f64,
    list_pattern_ratio: f64,
}

#[derive(Debug, Serialize)]
struct BoilerplateRecord<'a> {
    path: String,
    regions: &'a [crate::boilerplate::StrippedRegion],
}

#[derive(Debug, Serialize)]
struct TriageRecord<'a> {
    path: String,
    action: &'a str,
    problems: &'a [&'static str],
    detected_lang: &'a str,
    lang_confidence: f32,
}

/// Discovers every `.txt` file under `dir`, at any depth.
pub fn discover_inputs(dir: &Path) -> Vec<PathBuf> {
    WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.path().extension().map(|ext| ext == "txt").unwrap_or(false))
        .map(|e| e.into_path())
        .collect()
}

pub struct ParallelFileDriver {
    config: PipelineConfig,
    pipeline: CleaningPipeline,
}

impl ParallelFileDriver {
    pub fn new(config: PipelineConfig) -> Self {
        let pipeline = CleaningPipeline::new(&config);
        Self { config, pipeline }
    }

    /// Runs the pipeline over every `(input, output)` pair in `jobs`,
    /// distributing work across a pool of `self.config.workers` threads.
    /// Audit logs and the aggregate report are written into `output_root`.
    pub fn run(
        &self,
        jobs: &[(PathBuf, PathBuf)],
        output_root: &Path,
        dictionary: Option<&DictionaryHandle>,
        noise_set: Option<&NoiseSet>,
    ) -> Result<CleanupReport, Error> {
        fs::create_dir_all(output_root)?;

        let rejected_log = AuditLog::create(&output_root.join("rejected_files.jsonl"))?;
        let boilerplate_log = AuditLog::create(&output_root.join("_boilerplate_stripped.jsonl"))?;
        let triage_log = AuditLog::create(&output_root.join("_triage_results.jsonl"))?;
        let accumulator = ReportAccumulator::new();
        let vocab_accumulator = VocabAccumulator::new();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.workers)
            .build()
            .map_err(|e| Error::Custom(format!("failed to build worker pool: {e}")))?;

        pool.install(|| {
            jobs.par_iter().for_each(|(input, output)| {
                if let Err(e) = self.process_one(
                    input,
                    output,
                    dictionary,
                    noise_set,
                    &rejected_log,
                    &boilerplate_log,
                    &triage_log,
                    &accumulator,
                    &vocab_accumulator,
                ) {
                    warn!("failed to process {}: {e}", input.display());
                    accumulator.record_failed();
                }
            });
        });

        write_vocab_candidates(&output_root.join("_vocab_candidates.txt"), vocab_accumulator)?;

        info!("processed {} files", jobs.len());
        Ok(accumulator.finish())
    }

    #[allow(clippy::too_many_arguments)]
    fn process_one(
        &self,
        input: &Path,
        output: &Path,
        dictionary: Option<&DictionaryHandle>,
        noise_set: Option<&NoiseSet>,
        rejected_log: &AuditLog,
        boilerplate_log: &AuditLog,
        triage_log: &AuditLog,
        accumulator: &ReportAccumulator,
        vocab_accumulator: &VocabAccumulator,
    ) -> Result<(), Error> {
        let bytes = fs::read(input)?;
        let raw = decode_lossy(&bytes);
        let path_str = input.display().to_string();

        let outcome = self.pipeline.run(&raw, &self.config, dictionary, noise_set)?;

        match outcome {
            Outcome::Rejected { triage } => {
                let reason = triage.problems.first().copied().unwrap_or("unknown");
                rejected_log.append(&RejectedRecord {
                    path: path_str.clone(),
                    reason,
                    lang: triage.detected_lang,
                    confidence: triage.lang_confidence,
                    alpha_ratio: triage.metrics.alpha_ratio,
                    list_pattern_ratio: triage.metrics.list_pattern_ratio,
                })?;
                triage_log.append(&TriageRecord {
                    path: path_str,
                    action: triage.action.as_str(),
                    problems: &triage.problems,
                    detected_lang: triage.detected_lang,
                    lang_confidence: triage.lang_confidence,
                })?;
                Ok(())
            }
            Outcome::Cleaned {
                text,
                triage,
                stripped_regions,
                boilerplate_chars,
                total_substitutions,
                substitutions_by_category,
                ..
            } => {
                write_atomically(output, &text)?;

                if !stripped_regions.is_empty() {
                    boilerplate_log.append(&BoilerplateRecord {
                        path: path_str.clone(),
                        regions: &stripped_regions,
                    })?;
                }
                triage_log.append(&TriageRecord {
                    path: path_str,
                    action: triage.action.as_str(),
                    problems: &triage.problems,
                    detected_lang: triage.detected_lang,
                    lang_confidence: triage.lang_confidence,
                })?;

                accumulator.record_processed(bytes.len() as u64);
                accumulator.record_substitutions(total_substitutions, &substitutions_by_category);
                accumulator.record_boilerplate(boilerplate_chars as u64);

                let candidates = vocab::extract_vocab(&text, self.config.vocab_context_chars, dictionary);
                vocab_accumulator.merge(candidates);
                Ok(())
            }
        }
    }
}

/// Writes `contents` to a temporary file beside `path`, then renames it
/// into place, so a reader never observes a partially written file.
fn write_atomically(path: &Path, contents: &str) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let tmp_path = path.with_extension("tmp-write");
    fs::write(&tmp_path, contents)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

/// Writes the merged, frequency-ranked candidate list in the pipe-separated
/// shape [crate::noise::load] reads back for a later noise-stripping pass.
fn write_vocab_candidates(path: &Path, accumulator: VocabAccumulator) -> Result<(), Error> {
    let lines: Vec<String> = accumulator.finish().iter().map(vocab::format_line).collect();
    fs::write(path, lines.join("\n"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn discovers_nested_txt_files() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "hello").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub").join("b.txt"), "world").unwrap();
        fs::write(dir.path().join("ignore.md"), "nope").unwrap();

        let found = discover_inputs(dir.path());
        assert_eq!(found.len(), 2);
    }

    #[test]
    fn write_atomically_leaves_no_temp_file_behind() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_atomically(&path, "hello world").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello world");
        assert!(!dir.path().join("out.tmp-write").exists());
    }

    #[test_log::test]
    fn driver_processes_a_small_batch_end_to_end() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::create_dir_all(&src).unwrap();

        let long_text = "This is an ordinary paragraph of plain historical prose. ".repeat(30);
        fs::write(src.join("good.txt"), &long_text).unwrap();
        fs::write(src.join("bad.txt"), "too short").unwrap();

        let mut config = PipelineConfig::default();
        config.workers = 2;
        let driver = ParallelFileDriver::new(config);

        let jobs = vec![
            (src.join("good.txt"), dst.join("good.txt")),
            (src.join("bad.txt"), dst.join("bad.txt")),
        ];

        let report = driver.run(&jobs, &dst, None, None).unwrap();
        assert_eq!(report.files_processed, 1);
        assert!(dst.join("good.txt").exists());
        assert!(!dst.join("bad.txt").exists());
        assert!(dst.join("rejected_files.jsonl").exists());
        assert!(dst.join("_vocab_candidates.txt").exists());
    }

    #[test]
    fn vocab_candidates_are_written_and_merged_across_files() {
        let dir = tempdir().unwrap();
        let src = dir.path().join("src");
        let dst = dir.path().join("dst");
        fs::create_dir_all(&src).unwrap();

        let body = "This is an ordinary paragraph about the peculiar word xqzpt found twice, \
                     xqzpt being unusually persistent in this particular historical document. "
            .repeat(10);
        fs::write(src.join("one.txt"), &body).unwrap();
        fs::write(src.join("two.txt"), &body).unwrap();

        let mut config = PipelineConfig::default();
        config.workers = 2;
        let driver = ParallelFileDriver::new(config);

        let jobs = vec![
            (src.join("one.txt"), dst.join("one.txt")),
            (src.join("two.txt"), dst.join("two.txt")),
        ];
        driver.run(&jobs, &dst, None, None).unwrap();

        let contents = fs::read_to_string(dst.join("_vocab_candidates.txt")).unwrap();
        let xqzpt_line = contents.lines().find(|l| l.contains("xqzpt")).unwrap();
        let (_, word) = crate::noise::parse_line(xqzpt_line).unwrap();
        assert_eq!(word, "xqzpt");
        assert!(xqzpt_line.starts_with("40 "));
    }
}
