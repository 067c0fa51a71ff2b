//! The word oracle the engine consults.

use std::collections::HashSet;
use tracing::instrument;

/// Decides whether a string is a playable word.
pub trait Dictionary {
    /// Returns true when `word` may be played.
    fn is_valid_word(&self, word: &str) -> bool;

    /// Optional definition of `word`.
    fn definition(&self, _word: &str) -> Option<String> {
        None
    }
}

/// Case-insensitive in-memory word list.
#[derive(Debug, Clone, Default)]
pub struct WordList {
    words: HashSet<String>,
}

impl WordList {
    /// Builds a list from any words; case is ignored.
    #[instrument(skip(words))]
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_uppercase())
                .collect(),
        }
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Dictionary for WordList {
    fn is_valid_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }
}
