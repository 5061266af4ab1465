//! The ordered phrase list cycled by the hero heading.

use std::{fmt, slice};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhrasesError {
    #[error("phrase list must not be empty")]
    Empty,
    #[error("phrase {index} is blank")]
    Blank { index: usize },
}

/// A single display phrase.
///
/// Length is measured in extended grapheme clusters so that the scramble
/// replaces what a reader perceives as one character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phrase {
    text: String,
    len: usize,
}

impl Phrase {
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.graphemes(true).count();
        Self { text, len }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Grapheme count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn graphemes(&self) -> impl Iterator<Item = &str> {
        self.text.graphemes(true)
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

/// A non-empty, ordered list of phrases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Phrases(Vec<Phrase>);

impl Phrases {
    pub fn new<I, T>(phrases: I) -> Result<Self, PhrasesError>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut list = Vec::new();
        for (index, text) in phrases.into_iter().enumerate() {
            let text = text.into();
            if text.trim().is_empty() {
                return Err(PhrasesError::Blank { index });
            }
            list.push(Phrase::new(text));
        }
        if list.is_empty() {
            return Err(PhrasesError::Empty);
        }
        Ok(Self(list))
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Phrase> {
        self.0.get(index)
    }

    #[must_use]
    pub fn first(&self) -> &Phrase {
        &self.0[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for clippy's `len_without_is_empty`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Index that follows `index`, wrapping to the first phrase.
    #[must_use]
    pub fn next_index(&self, index: usize) -> usize {
        (index + 1) % self.0.len()
    }

    pub fn iter(&self) -> slice::Iter<'_, Phrase> {
        self.0.iter()
    }
}

impl TryFrom<Vec<String>> for Phrases {
    type Error = PhrasesError;

    fn try_from(value: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Phrases> for Vec<String> {
    fn from(value: Phrases) -> Self {
        value.0.into_iter().map(|phrase| phrase.text).collect()
    }
}

impl<'a> IntoIterator for &'a Phrases {
    type Item = &'a Phrase;
    type IntoIter = slice::Iter<'a, Phrase>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
