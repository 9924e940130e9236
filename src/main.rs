#![doc = include_str!("../README.md")]
use std::collections::HashSet;
use std::path::PathBuf;

use corpus_cleanup::config::PipelineConfig;
use corpus_cleanup::dictionary;
use corpus_cleanup::driver::{discover_inputs, ParallelFileDriver};
use corpus_cleanup::error::Error;
use corpus_cleanup::noise;
use log::LevelFilter;
use structopt::StructOpt;

#[macro_use]
extern crate log;

mod cli;

fn main() -> Result<(), Error> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(LevelFilter::Info);
    builder.parse_env("RUST_LOG");
    builder.init();

    let opt = cli::Args::from_args();
    debug!("cli args\n{:#?}", opt);

    let mut config = PipelineConfig::default();
    if let Some(workers) = opt.workers {
        config.workers = workers;
    }
    if let Some(noise_categories) = &opt.noise_categories {
        config.noise_categories = noise_categories.chars().collect::<HashSet<_>>();
    }

    if let Some(dir) = &opt.dictionary_dir {
        match dictionary::init_dictionaries(dir, opt.whitelist.as_deref()) {
            Ok(()) => info!("loaded dictionaries from {}", dir.display()),
            Err(e) => warn!("continuing without dictionaries: {e}"),
        }
    }

    if let Some(path) = &opt.noise_words {
        noise::init_noise_set(path, &config.noise_categories)?;
    }

    let inputs = discover_inputs(&opt.src);
    info!("discovered {} input files under {}", inputs.len(), opt.src.display());

    let jobs: Vec<(PathBuf, PathBuf)> = inputs
        .iter()
        .map(|input| {
            let relative = input.strip_prefix(&opt.src).unwrap_or(input);
            (input.clone(), opt.dst.join(relative))
        })
        .collect();

    let driver = ParallelFileDriver::new(config);
    let report = driver.run(
        &jobs,
        &opt.dst,
        dictionary::dictionaries(),
        noise::noise_set(),
    )?;

    info!(
        "processed {} files, {} modified, {} failed, {} substitutions",
        report.files_processed, report.files_modified, report.files_failed, report.total_substitutions
    );

    let report_path = opt.dst.join("_cleanup_report.json");
    std::fs::write(&report_path, serde_json::to_string_pretty(&report)?)?;
    info!("wrote aggregate report to {}", report_path.display());

    Ok(())
}
