//! Word membership set
//!
//! The dictionary is loaded completely before any search and is read-only afterwards.

use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Error type for an unusable word list
#[derive(Debug)]
pub enum DictionaryError {
    Io { path: PathBuf, source: io::Error },
    Empty,
}

impl fmt::Display for DictionaryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Cannot read word list {}: {source}", path.display())
            }
            Self::Empty => write!(f, "Word list contains no usable words"),
        }
    }
}

impl std::error::Error for DictionaryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Empty => None,
        }
    }
}

/// Exact-match word set, lowercase
///
/// Never empty and never contains the empty string.
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: FxHashSet<String>,
    longest: usize,
}

impl Dictionary {
    /// Build a dictionary from a list of words
    ///
    /// Blank entries and entries containing anything other than ASCII letters are skipped.
    ///
    /// # Errors
    /// Returns `DictionaryError::Empty` if no usable word remains.
    ///
    /// # Examples
    /// ```
    /// use hexword_solver::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["cat", "", "Dog"]).unwrap();
    /// assert!(dictionary.contains("dog"));
    /// assert!(dictionary.contains("CAT"));
    /// assert!(!dictionary.contains(""));
    /// assert_eq!(dictionary.len(), 2);
    ///
    /// assert!(Dictionary::from_words(["", "  "]).is_err());
    /// ```
    pub fn from_words<I, S>(words: I) -> Result<Self, DictionaryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = FxHashSet::default();
        let mut skipped = 0usize;

        for entry in words {
            match normalize(entry.as_ref()) {
                Some(word) => {
                    set.insert(word);
                }
                None if entry.as_ref().trim().is_empty() => {}
                None => skipped += 1,
            }
        }

        if skipped > 0 {
            warn!(skipped, "ignored malformed word list entries");
        }

        if set.is_empty() {
            return Err(DictionaryError::Empty);
        }

        let longest = set.iter().map(String::len).max().unwrap_or(0);
        debug!(words = set.len(), longest, "dictionary ready");

        Ok(Self {
            words: set,
            longest,
        })
    }

    /// Load a newline-delimited word list from a file
    ///
    /// # Errors
    ///
    /// Returns `DictionaryError::Io` if the file cannot be read, or
    /// `DictionaryError::Empty` if it holds no usable words.
    ///
    /// # Examples
    /// ```no_run
    /// use hexword_solver::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::load_from_file("data/words.txt").unwrap();
    /// println!("Loaded {} words", dictionary.len());
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DictionaryError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "loading word list");
        Self::from_words(content.lines())
    }

    /// Exact membership test, case-insensitive
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        if word.bytes().any(|b| b.is_ascii_uppercase()) {
            self.words.contains(&word.to_ascii_lowercase())
        } else {
            self.words.contains(word)
        }
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Always false for a constructed dictionary
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Length of the longest word
    #[inline]
    #[must_use]
    pub const fn longest(&self) -> usize {
        self.longest
    }
}

/// Trim and lowercase an entry, rejecting blanks and non-letters
fn normalize(entry: &str) -> Option<String> {
    let trimmed = entry.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    Some(trimmed.to_ascii_lowercase())
}
