//! Passphrase vocabulary management
//!
//! Ships a compiled-in list of common five-letter English words and allows
//! replacing it at startup from an external file.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::{LazyLock, PoisonError, RwLock};
use thiserror::Error;

/// Minimum number of distinct words a vocabulary must hold.
pub const MIN_WORDS: usize = 150;

static BUILTIN_SOURCE: &str = include_str!("../assets/wordlist.txt");

static BUILTIN_WORDS: LazyLock<Vec<String>> = LazyLock::new(|| {
    BUILTIN_SOURCE
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(str::to_string)
        .collect()
});

static CUSTOM_WORDS: RwLock<Option<Vec<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read wordlist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Wordlist file is empty")]
    EmptyFile,
    #[error("Wordlist entry is not an alphabetic word: {0:?}")]
    InvalidWord(String),
    #[error("Wordlist has {found} distinct words, at least {required} required")]
    TooFewWords { found: usize, required: usize },
}

/// Returns the wordlist file path.
///
/// Priority:
/// 1. Environment variable `SECUREGEN_WORDLIST_PATH`
/// 2. Default path `./assets/wordlist.txt`
pub fn get_wordlist_path() -> PathBuf {
    std::env::var("SECUREGEN_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/wordlist.txt"))
}

/// Replaces the built-in vocabulary with the file named by
/// `SECUREGEN_WORDLIST_PATH` (or the default path).
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty, holds a non-alphabetic entry or too few distinct words
pub fn init_wordlist() -> Result<usize, WordlistError> {
    let path = get_wordlist_path();
    init_wordlist_from_path(&path)
}

/// Replaces the built-in vocabulary with the words in `path`, one per line.
///
/// Idempotent: once a custom list is active, later calls return its size
/// without touching the file.
pub fn init_wordlist_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, WordlistError> {
    {
        let guard = CUSTOM_WORDS.read().unwrap_or_else(PoisonError::into_inner);
        if let Some(words) = guard.as_ref() {
            return Ok(words.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist initialization FAILED: FileNotFound {:?}", path);
        return Err(WordlistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let words = parse_words(&content).inspect_err(|_e| {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist initialization FAILED: {} ({:?})", _e, path);
    })?;

    let count = words.len();
    {
        let mut guard = CUSTOM_WORDS.write().unwrap_or_else(PoisonError::into_inner);
        *guard = Some(words);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Wordlist initialized: {} words from {:?}", count, path);

    Ok(count)
}

fn parse_words(content: &str) -> Result<Vec<String>, WordlistError> {
    if content.trim().is_empty() {
        return Err(WordlistError::EmptyFile);
    }

    let mut seen = HashSet::new();
    let mut words = Vec::new();
    for line in content.lines() {
        let word = line.trim().to_lowercase();
        if word.is_empty() {
            continue;
        }
        if !word.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(WordlistError::InvalidWord(word));
        }
        if seen.insert(word.clone()) {
            words.push(word);
        }
    }

    if words.len() < MIN_WORDS {
        return Err(WordlistError::TooFewWords {
            found: words.len(),
            required: MIN_WORDS,
        });
    }
    Ok(words)
}

/// The compiled-in vocabulary.
pub fn builtin_words() -> &'static [String] {
    &BUILTIN_WORDS
}

/// Returns a copy of the vocabulary currently used for passphrases.
pub fn active_wordlist() -> Vec<String> {
    with_words(<[String]>::to_vec)
}

/// Runs `f` against the active vocabulary without copying it.
pub(crate) fn with_words<T>(f: impl FnOnce(&[String]) -> T) -> T {
    let guard = CUSTOM_WORDS.read().unwrap_or_else(PoisonError::into_inner);
    match guard.as_deref() {
        Some(words) => f(words),
        None => f(builtin_words()),
    }
}

/// Drops any custom vocabulary for testing purposes.
#[cfg(test)]
pub fn reset_wordlist_for_testing() {
    let mut guard = CUSTOM_WORDS.write().unwrap_or_else(PoisonError::into_inner);
    *guard = None;
}

/// Writes `count` distinct three-letter words for testing purposes.
#[cfg(test)]
pub fn sample_words(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            [i / 676, (i / 26) % 26, i % 26]
                .iter()
                .map(|&n| (b'a' + n as u8) as char)
                .collect()
        })
        .collect()
}
