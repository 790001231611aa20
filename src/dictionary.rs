//! The word dictionary: secret pool and guess-validity check.

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use rand::prelude::IndexedRandom;

use crate::engine::WORD_LENGTH;

pub const EMBEDDED_WORDLIST: &str = include_str!("resources/wordlist.txt");

#[derive(Debug)]
pub enum DictionaryError {
    /// No usable words after filtering. Startup configuration error.
    Empty,
    Io(io::Error),
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "word list contains no {WORD_LENGTH}-letter words"),
            Self::Io(e) => write!(f, "failed to read word list: {e}"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Empty => None,
            Self::Io(e) => Some(e),
        }
    }
}

impl From<io::Error> for DictionaryError {
    fn from(e: io::Error) -> Self {
        Self::Io(e)
    }
}

/// A fixed set of valid uppercase words of uniform length, immutable for the
/// lifetime of a session. Construction fails fast on an empty result, so
/// every live `Dictionary` holds at least one word.
pub struct Dictionary {
    words: Vec<String>,
    index: HashSet<String>,
}

impl Dictionary {
    /// Parse a newline-delimited list. Entries are trimmed and uppercased;
    /// anything that is not exactly [`WORD_LENGTH`] ASCII letters is dropped.
    pub fn from_str_list(data: &str) -> Result<Self, DictionaryError> {
        Self::from_lines(data.lines().map(str::to_owned))
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);
        let mut lines = Vec::new();
        for line in reader.lines() {
            lines.push(line?);
        }
        Self::from_lines(lines.into_iter())
    }

    /// The compiled-in default list.
    pub fn embedded() -> Self {
        Self::from_str_list(EMBEDDED_WORDLIST).expect("embedded word list is non-empty")
    }

    fn from_lines<I: Iterator<Item = String>>(lines: I) -> Result<Self, DictionaryError> {
        let mut words = Vec::new();
        let mut index = HashSet::new();
        for line in lines {
            let word = line.trim().to_uppercase();
            if word.len() == WORD_LENGTH
                && word.chars().all(|c| c.is_ascii_alphabetic())
                && index.insert(word.clone())
            {
                words.push(word);
            }
        }
        if words.is_empty() {
            return Err(DictionaryError::Empty);
        }
        Ok(Self { words, index })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Membership check for a case-normalized word.
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains(&word.trim().to_uppercase())
    }

    /// One word drawn uniformly at random, for use as a secret.
    pub fn sample(&self) -> &str {
        self.words
            .choose(&mut rand::rng())
            .expect("dictionary is non-empty by construction")
    }
}
