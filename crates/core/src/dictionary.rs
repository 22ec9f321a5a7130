//! Dictionary module - candidate words for spawning
//!
//! Parses a word list (one word per line), keeps the entries that can actually
//! be typed, and samples them uniformly. Parsing is generic over [`BufRead`] so
//! the same code path serves files and in-memory fixtures.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::rng::GameRng;
use crate::types::MAX_WORD_LEN;
use crate::word::WordText;

/// Errors raised while building a dictionary.
#[derive(Error, Debug)]
pub enum DictionaryError {
    /// The dictionary file could not be opened.
    #[error("cannot open dictionary {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Reading lines failed part-way.
    #[error("cannot read dictionary: {0}")]
    Read(#[from] io::Error),

    /// No line survived the filters.
    #[error("dictionary is empty (no words of 1..={max_len} letters)")]
    Empty { max_len: usize },
}

/// Non-empty, ordered list of lowercase candidate words.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<WordText>,
}

impl Dictionary {
    /// Load and filter a dictionary file.
    pub fn load(path: impl AsRef<Path>, max_len: usize) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| DictionaryError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let dict = Self::from_reader(BufReader::new(file), max_len)?;
        log::info!(
            "loaded {} words (max length {}) from {}",
            dict.len(),
            max_len,
            path.display()
        );
        Ok(dict)
    }

    /// Parse a word list from any buffered reader.
    ///
    /// Lines are trimmed and lowercased; blank lines, lines longer than
    /// `max_len` and lines with anything but ASCII letters are skipped.
    /// Order and duplicates are preserved. Invalid UTF-8 is decoded lossily
    /// and then rejected by the letter filter.
    pub fn from_reader<R: BufRead>(mut reader: R, max_len: usize) -> Result<Self, DictionaryError> {
        let max_len = max_len.min(MAX_WORD_LEN);
        let mut words = Vec::new();
        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            let text = String::from_utf8_lossy(&line);
            if let Some(word) = accept(&text, max_len) {
                words.push(word);
            }
        }
        Self::from_candidates(words, max_len)
    }

    /// Build a dictionary from in-memory words, applying the same filters.
    pub fn from_words<I, S>(words: I, max_len: usize) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let max_len = max_len.min(MAX_WORD_LEN);
        let words = words
            .into_iter()
            .filter_map(|w| accept(w.as_ref(), max_len))
            .collect();
        Self::from_candidates(words, max_len)
    }

    fn from_candidates(words: Vec<WordText>, max_len: usize) -> Result<Self, DictionaryError> {
        if words.is_empty() {
            return Err(DictionaryError::Empty { max_len });
        }
        Ok(Self { words })
    }

    /// Pick a word uniformly at random.
    pub fn sample(&self, rng: &mut GameRng) -> &WordText {
        &self.words[rng.below(self.words.len())]
    }

    pub fn words(&self) -> &[WordText] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn accept(line: &str, max_len: usize) -> Option<WordText> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.len() > max_len {
        return None;
    }
    if !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    let mut word = WordText::new();
    for ch in trimmed.chars() {
        word.push(ch.to_ascii_lowercase());
    }
    Some(word)
}
