//! Command line arguments and parameters management/parsing.
use std::path::PathBuf;

use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(name = "corpus-cleanup", about = "OCR text-cleanup and triage engine")]
pub struct Args {
    #[structopt(parse(from_os_str), help = "source directory of .txt files")]
    pub src: PathBuf,
    #[structopt(parse(from_os_str), help = "destination directory for cleaned output")]
    pub dst: PathBuf,
    #[structopt(short = "w", long = "workers", help = "worker pool size. Default is 24.")]
    pub workers: Option<usize>,
    #[structopt(
        long = "dictionary-dir",
        parse(from_os_str),
        help = "directory of Hunspell-format .dic files, one per language"
    )]
    pub dictionary_dir: Option<PathBuf>,
    #[structopt(long = "whitelist", parse(from_os_str), help = "whitelist file, one token per line")]
    pub whitelist: Option<PathBuf>,
    #[structopt(
        long = "noise-words",
        parse(from_os_str),
        help = "vocabulary-candidates file to strip as noise"
    )]
    pub noise_words: Option<PathBuf>,
    #[structopt(
        long = "noise-categories",
        help = "suspicion categories to strip, e.g. GR. Default is GR."
    )]
    pub noise_categories: Option<String>,
}
