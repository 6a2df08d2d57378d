use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::entry::EntryRecord;

const EXTENSION: &str = ".json";
const WORD_LENGTH: usize = 5;

/// One pretty-printed JSON file per headword under `dir`.
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, word: &str) -> PathBuf {
        self.dir.join(file_name(word))
    }

    pub fn save(&self, word: &str, entries: &[EntryRecord]) -> Result<PathBuf> {
        fs::create_dir_all(&self.dir)
            .with_context(|| format!("Failed to create {}", self.dir.display()))?;
        let path = self.path_for(word);
        let json = serde_json::to_string_pretty(entries)?;
        fs::write(&path, json).with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Stored headwords (file stems), sorted by file name.
    pub fn headwords(&self) -> Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(&self.dir)
            .with_context(|| format!("Failed to read {}", self.dir.display()))?
        {
            let entry = entry?;
            if let Ok(name) = entry.file_name().into_string() {
                names.push(name);
            }
        }
        names.sort();
        Ok(names
            .iter()
            .filter_map(|name| name.strip_suffix(EXTENSION))
            .map(String::from)
            .collect())
    }
}

/// `"Air Mata"` → `"air_mata.json"`. Path separators also become `_` so every
/// record lands directly in the data directory.
pub fn file_name(word: &str) -> String {
    let stem: String = word
        .to_lowercase()
        .chars()
        .map(|c| match c {
            ' ' | '/' | '\\' => '_',
            c => c,
        })
        .collect();
    format!("{}{}", stem, EXTENSION)
}

/// Keep words of exactly five characters, in the given order.
pub fn five_letter_words<I>(words: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    words
        .into_iter()
        .filter(|w| w.chars().count() == WORD_LENGTH)
        .collect()
}

/// Write the stored five-letter headwords to `out` as a JSON array.
pub fn write_word_list(store: &Store, out: &Path) -> Result<usize> {
    let words = five_letter_words(store.headwords()?);
    let json = serde_json::to_string(&words)?;
    fs::write(out, json).with_context(|| format!("Failed to write {}", out.display()))?;
    Ok(words.len())
}
