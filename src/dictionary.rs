/*! Dictionary Service

Process-wide, read-only-after-init word-membership oracle for up to four
languages. A simplified reading of Hunspell's format: only the flat word
list (`.dic`) is consulted, not the affix rules (`.aff`) — no crate in this
stack implements Hunspell affix expansion, and edit-distance or neural
repair is out of scope here regardless. The matching `.aff` file is still
required to be present — a dictionary shipped without one is treated as
missing, the same as an absent `.dic` — but its contents are never parsed.
A `.dic` file's first line, the traditional approximate word count, is
skipped if present.
!*/
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use log::warn;
use once_cell::sync::OnceCell;

use crate::error::Error;

/// A single loaded dictionary's lowercase word set, keyed by language code.
pub struct DictionaryHandle {
    words: HashMap<&'static str, HashSet<String>>,
    whitelist: HashSet<String>,
}

impl DictionaryHandle {
    /// True if any loaded dictionary (case-insensitively) recognizes `word`.
    pub fn is_known_word(&self, word: &str) -> bool {
        let lower = word.to_lowercase();
        self.words.values().any(|set| set.contains(&lower))
    }

    /// Languages that recognize `word`.
    pub fn word_languages(&self, word: &str) -> Vec<&'static str> {
        let lower = word.to_lowercase();
        self.words
            .iter()
            .filter(|(_, set)| set.contains(&lower))
            .map(|(lang, _)| *lang)
            .collect()
    }

    pub fn is_whitelisted(&self, word: &str) -> bool {
        self.whitelist.contains(&word.to_lowercase())
    }

    pub fn loaded_languages(&self) -> Vec<&'static str> {
        self.words.keys().copied().collect()
    }
}

const LANGUAGE_CODES: &[&str] = &["en", "de", "fr", "la"];

fn load_dic_file(path: &Path) -> Result<HashSet<String>, Error> {
    let contents = fs::read_to_string(path)?;
    let mut words = HashSet::new();
    for (i, line) in contents.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        // The first line of a Hunspell .dic file is conventionally an
        // approximate word count, not a word.
        if i == 0 && line.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        // Strip Hunspell affix flags (word/FLAGS).
        let word = line.split('/').next().unwrap_or(line);
        words.insert(word.to_lowercase());
    }
    Ok(words)
}

fn load_whitelist(path: &Path) -> Result<HashSet<String>, Error> {
    let contents = fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .collect())
}

/// Loads every `<lang>.dic` file found directly under `dir`. Returns `Ok`
/// with the handle if at least one language loaded; a missing directory is
/// fatal, a missing single-language file is logged and skipped.
pub fn load(dir: &Path, whitelist_path: Option<&Path>) -> Result<DictionaryHandle, Error> {
    if !dir.is_dir() {
        return Err(Error::DictionaryInit(format!(
            "dictionary directory {} does not exist",
            dir.display()
        )));
    }

    let mut words = HashMap::new();
    for code in LANGUAGE_CODES {
        let path = dir.join(format!("{code}.dic"));
        let aff_path = dir.join(format!("{code}.aff"));
        if !path.is_file() {
            warn!("no dictionary for language {code} at {}", path.display());
            continue;
        }
        // The affix file is only checked for presence, never interpreted —
        // compounding rules are out of scope, but a dictionary shipped
        // without its affix file is as incomplete as a missing .dic.
        if !aff_path.is_file() {
            warn!("no affix file for language {code} at {}", aff_path.display());
            continue;
        }
        match load_dic_file(&path) {
            Ok(set) => {
                words.insert(*code, set);
            }
            Err(e) => warn!("failed to load dictionary {}: {e}", path.display()),
        }
    }

    if words.is_empty() {
        return Err(Error::DictionaryInit(format!(
            "no dictionaries could be loaded from {}",
            dir.display()
        )));
    }

    let whitelist = match whitelist_path {
        Some(p) => load_whitelist(p)?,
        None => HashSet::new(),
    };

    Ok(DictionaryHandle { words, whitelist })
}

static DICTIONARIES: OnceCell<DictionaryHandle> = OnceCell::new();

/// Initializes the process-wide dictionary service exactly once. A second
/// call is refused with [Error::AlreadyInitialized]; the original handle is
/// retained.
pub fn init_dictionaries(dir: &Path, whitelist_path: Option<&Path>) -> Result<(), Error> {
    if DICTIONARIES.get().is_some() {
        return Err(Error::AlreadyInitialized("dictionary service"));
    }
    let handle = load(dir, whitelist_path)?;
    DICTIONARIES
        .set(handle)
        .map_err(|_| Error::AlreadyInitialized("dictionary service"))
}

/// Returns the process-wide dictionary handle, if initialized.
pub fn dictionaries() -> Option<&'static DictionaryHandle> {
    DICTIONARIES.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::io::Write;
    use tempfile::tempdir;

    /// Writes a `<lang>.dic` plus an empty matching `.aff`, the minimum a
    /// dictionary directory needs for a language to load.
    fn write_dic(dir: &Path, lang_name: &str, words: &[&str]) {
        let code = lang_name.trim_end_matches(".dic");
        let mut f = File::create(dir.join(lang_name)).unwrap();
        writeln!(f, "{}", words.len()).unwrap();
        for w in words {
            writeln!(f, "{w}").unwrap();
        }
        File::create(dir.join(format!("{code}.aff"))).unwrap();
    }

    #[test]
    fn loads_available_languages_and_skips_missing() {
        let dir = tempdir().unwrap();
        write_dic(dir.path(), "en.dic", &["house", "first", "himself"]);

        let handle = load(dir.path(), None).unwrap();
        assert_eq!(handle.loaded_languages(), vec!["en"]);
        assert!(handle.is_known_word("HOUSE"));
        assert!(!handle.is_known_word("xyzzy"));
    }

    #[test]
    fn missing_directory_is_fatal() {
        let result = load(Path::new("/nonexistent/path/xyz"), None);
        assert!(result.is_err());
    }

    #[test]
    fn dic_without_matching_aff_is_skipped() {
        let dir = tempdir().unwrap();
        // .dic with no .aff alongside it: treated as absent.
        let mut f = File::create(dir.path().join("en.dic")).unwrap();
        writeln!(f, "1").unwrap();
        writeln!(f, "house").unwrap();

        let result = load(dir.path(), None);
        assert!(result.is_err());
    }

    #[test]
    fn strips_hunspell_affix_flags() {
        let dir = tempdir().unwrap();
        write_dic(dir.path(), "en.dic", &["run/GDS"]);
        let handle = load(dir.path(), None).unwrap();
        assert!(handle.is_known_word("run"));
    }

    #[test]
    fn whitelist_is_case_insensitive() {
        let dir = tempdir().unwrap();
        write_dic(dir.path(), "en.dic", &["house"]);
        let whitelist_path = dir.path().join("whitelist.txt");
        let mut f = File::create(&whitelist_path).unwrap();
        writeln!(f, "Thorn").unwrap();
        let handle = load(dir.path(), Some(&whitelist_path)).unwrap();
        assert!(handle.is_whitelisted("THORN"));
    }

    #[test]
    #[serial_test::serial(dictionary_global)]
    fn init_dictionaries_is_one_shot() {
        let dir = tempdir().unwrap();
        write_dic(dir.path(), "en.dic", &["house"]);

        // This test shares the process-wide `DICTIONARIES` cell with every
        // other test in this module, hence `#[serial]`: a prior successful
        // init in another run leaves the cell set for the rest of the
        // process, so we only assert the second-call behavior here.
        let _ = init_dictionaries(dir.path(), None);
        assert!(dictionaries().is_some());
        assert!(matches!(
            init_dictionaries(dir.path(), None),
            Err(Error::AlreadyInitialized(_))
        ));
    }
}
