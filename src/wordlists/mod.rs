//! Word lists for board solving
//!
//! Provides the dictionary type and a default word list compiled into the binary.

mod dictionary;
mod embedded;

pub use dictionary::{Dictionary, DictionaryError};
pub use embedded::{WORDS, WORDS_COUNT};

/// Build the dictionary from the embedded word list
///
/// # Errors
///
/// Returns `DictionaryError::Empty` only if the bundled list was built empty.
///
/// # Examples
/// ```
/// use hexword_solver::wordlists::embedded_dictionary;
///
/// let dictionary = embedded_dictionary().unwrap();
/// assert!(dictionary.contains("fish"));
/// ```
pub fn embedded_dictionary() -> Result<Dictionary, DictionaryError> {
    Dictionary::from_words(WORDS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_count_matches_const() {
        assert_eq!(WORDS.len(), WORDS_COUNT);
    }

    #[test]
    fn words_are_lowercase_letters() {
        for &word in WORDS {
            assert!(!word.is_empty(), "Embedded list contains a blank entry");
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn embedded_dictionary_keeps_every_word() {
        let dictionary = embedded_dictionary().unwrap();
        assert_eq!(dictionary.len(), WORDS_COUNT);
    }

    #[test]
    fn embedded_dictionary_has_sample_words() {
        let dictionary = embedded_dictionary().unwrap();
        for word in ["cat", "dog", "dogs", "fish", "owl"] {
            assert!(dictionary.contains(word), "missing '{word}'");
        }
    }
}
