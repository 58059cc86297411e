//! Common-word list management
//!
//! Holds the words scanned by the common-word penalty and loads extra lists
//! from disk.

use std::borrow::Cow;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an alternative word-list file.
pub const COMMON_WORDS_PATH_ENV: &str = "PWD_ANALYZER_COMMON_WORDS_PATH";

const BUILTIN_WORDS: [&str; 6] = ["password", "qwerty", "admin", "letmein", "welcome", "123456"];

#[derive(Error, Debug)]
pub enum CommonWordsError {
    #[error("Common words file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common words file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Common words file is empty")]
    EmptyFile,
}

/// Lowercased words that must not appear anywhere inside a password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonWords {
    words: Vec<Cow<'static, str>>,
}

impl Default for CommonWords {
    fn default() -> Self {
        Self::builtin()
    }
}

impl CommonWords {
    /// The fixed built-in list.
    pub fn builtin() -> Self {
        Self {
            words: BUILTIN_WORDS.iter().map(|w| Cow::Borrowed(*w)).collect(),
        }
    }

    /// Loads one word per line from `path`.
    ///
    /// Lines are trimmed and lowercased; blank lines and duplicates are dropped,
    /// first occurrence wins.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File holds no words
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CommonWordsError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common words loading FAILED: FileNotFound {:?}", path);
            return Err(CommonWordsError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        let mut words: Vec<Cow<'static, str>> = Vec::new();
        for line in content.lines() {
            let word = line.trim().to_lowercase();
            if !word.is_empty() && !words.iter().any(|w| *w == word) {
                words.push(Cow::Owned(word));
            }
        }

        if words.is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common words loading FAILED: Empty file {:?}", path);
            return Err(CommonWordsError::EmptyFile);
        }

        #[cfg(feature = "tracing")]
        tracing::info!("Common words loaded: {} entries from {:?}", words.len(), path);

        Ok(Self { words })
    }

    /// Resolves the list from the environment.
    ///
    /// Uses the file named by `PWD_ANALYZER_COMMON_WORDS_PATH` when set,
    /// otherwise the built-in list.
    pub fn from_env() -> Result<Self, CommonWordsError> {
        match std::env::var_os(COMMON_WORDS_PATH_ENV) {
            Some(path) => Self::from_path(PathBuf::from(path)),
            None => Ok(Self::builtin()),
        }
    }

    /// Adds the built-in words to this list, skipping ones already present.
    pub fn with_builtin(mut self) -> Self {
        for word in BUILTIN_WORDS {
            if !self.words.iter().any(|w| w == word) {
                self.words.push(Cow::Borrowed(word));
            }
        }
        self
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(|w| w.as_ref())
    }

    /// True when any word occurs as a substring of the already-lowercased input.
    pub fn found_in(&self, lowered: &str) -> bool {
        self.iter().any(|w| lowered.contains(w))
    }
}
