/*! Noise-Word Stripper

Loads a user-supplied set of lowercase tokens from a vocabulary-candidates
file (the same pipe-separated format [crate::vocab] can emit) and strips
whole-word matches from already-cleaned text, collapsing the resulting
runs of spaces.
!*/
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use once_cell::sync::OnceCell;
use regex::Regex;

use crate::config::NoiseCategory;
use crate::error::Error;
use crate::vocab::SuspicionCode;

lazy_static::lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"[A-Za-z]+(?:'[A-Za-z]+)*").expect("static word regex");
    static ref MULTISPACE_RE: Regex = Regex::new(r" {2,}").expect("static multispace regex");
}

pub struct NoiseSet {
    words: HashSet<String>,
}

/// Parses a single `FREQ | FLAGS | CATEGORY | WORD | CONTEXT` line. Lines
/// starting with `#` are comments and return `None`.
pub(crate) fn parse_line(line: &str) -> Option<(SuspicionCode, String)> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let fields: Vec<&str> = line.split('|').map(|f| f.trim()).collect();
    if fields.len() < 4 {
        return None;
    }
    let category = fields[2].chars().next().and_then(SuspicionCode::from_char)?;
    let word = fields[3].to_lowercase();
    if word.is_empty() {
        return None;
    }
    Some((category, word))
}

/// Loads the noise set from `path`, keeping only words whose category is in
/// `categories` (matched against the suspicion code's char form).
pub fn load(path: &Path, categories: &std::collections::HashSet<NoiseCategory>) -> Result<NoiseSet, Error> {
    let contents = fs::read_to_string(path)?;
    let mut words = HashSet::new();
    for line in contents.lines() {
        if let Some((code, word)) = parse_line(line) {
            if categories.contains(&code.as_char()) {
                words.insert(word);
            }
        }
    }
    Ok(NoiseSet { words })
}

static NOISE_SET: OnceCell<NoiseSet> = OnceCell::new();

pub fn init_noise_set(
    path: &Path,
    categories: &std::collections::HashSet<NoiseCategory>,
) -> Result<(), Error> {
    if NOISE_SET.get().is_some() {
        return Err(Error::AlreadyInitialized("noise set"));
    }
    let set = load(path, categories)?;
    NOISE_SET
        .set(set)
        .map_err(|_| Error::AlreadyInitialized("noise set"))
}

pub fn noise_set() -> Option<&'static NoiseSet> {
    NOISE_SET.get()
}

/// Strips every whole-word match of a noise token, replacing it with a
/// single space, then collapses the resulting runs of spaces.
pub fn strip(text: &str, noise: &NoiseSet) -> String {
    let replaced = WORD_RE.replace_all(text, |caps: &regex::Captures| {
        let word = &caps[0];
        if noise.words.contains(&word.to_lowercase()) {
            " ".to_string()
        } else {
            word.to_string()
        }
    });
    MULTISPACE_RE.replace_all(&replaced, " ").into_owned()
}
