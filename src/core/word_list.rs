//! In-memory word list
//!
//! An ordered, growable sequence of tokens with the search and delete
//! operations the menu exposes. Tokens are raw bytes: nothing assumes an
//! encoding, so a word saved back to disk keeps the bytes it was loaded with.

use super::search::{binary_search, linear_find};
use bstr::{BStr, BString};
use std::collections::TryReserveError;
use std::fmt;

/// Whether `byte` separates tokens (ASCII whitespace, vertical tab included)
#[inline]
#[must_use]
pub const fn is_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == 0x0b
}

/// Split `bytes` into tokens on runs of ASCII whitespace
///
/// Empty tokens are never produced. Non-ASCII bytes, including UTF-8
/// encoded Unicode spaces, are part of a token.
pub fn tokenize(bytes: &[u8]) -> impl Iterator<Item = &BStr> {
    bytes
        .split(|&b| is_separator(b))
        .filter(|token| !token.is_empty())
        .map(BStr::new)
}

/// Ordered list of words, in file load order
///
/// Duplicates are allowed and nothing is normalized. Binary search expects
/// ascending byte order, which the list never enforces.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordList {
    words: Vec<BString>,
}

/// Result of a search over a [`WordList`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome<'a> {
    /// Word found at `position`; `next` is the following word, if any
    Found {
        position: usize,
        next: Option<&'a BStr>,
    },
    NotFound,
}

impl SearchOutcome<'_> {
    #[inline]
    #[must_use]
    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    #[inline]
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Found { position, .. } => Some(*position),
            Self::NotFound => None,
        }
    }
}

/// Result of deleting a word from a [`WordList`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The first occurrence was removed from `position`
    Deleted { position: usize, word: BString },
    NotFound,
}

impl DeleteOutcome {
    #[inline]
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted { .. })
    }
}

impl WordList {
    #[must_use]
    pub const fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Reserve room for at least `additional` more words
    ///
    /// # Errors
    ///
    /// Returns the allocator error instead of aborting when the request
    /// cannot be satisfied.
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.words.try_reserve(additional)
    }

    #[inline]
    pub fn push(&mut self, word: impl Into<BString>) {
        self.words.push(word.into());
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Allocated capacity of the backing storage
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.words.capacity()
    }

    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<&BStr> {
        self.words.get(position).map(BStr::new)
    }

    pub fn iter(&self) -> impl Iterator<Item = &BStr> {
        self.words.iter().map(BStr::new)
    }

    /// Find the first exact match by scanning front to back
    #[must_use]
    pub fn find_linear(&self, target: impl AsRef<[u8]>) -> SearchOutcome<'_> {
        self.outcome(linear_find(&self.words, BStr::new(target.as_ref())))
    }

    /// Find a match by binary search
    ///
    /// Only meaningful when the list is sorted ascending.
    #[must_use]
    pub fn find_binary(&self, target: impl AsRef<[u8]>) -> SearchOutcome<'_> {
        self.outcome(binary_search(&self.words, BStr::new(target.as_ref())))
    }

    /// Remove the first occurrence of `target`
    ///
    /// Leaves the list untouched when the word is absent.
    pub fn delete_first(&mut self, target: impl AsRef<[u8]>) -> DeleteOutcome {
        match linear_find(&self.words, BStr::new(target.as_ref())) {
            Some(position) => DeleteOutcome::Deleted {
                position,
                word: self.words.remove(position),
            },
            None => DeleteOutcome::NotFound,
        }
    }

    fn outcome(&self, position: Option<usize>) -> SearchOutcome<'_> {
        position.map_or(SearchOutcome::NotFound, |position| SearchOutcome::Found {
            position,
            next: self.get(position + 1),
        })
    }
}

impl<S: Into<BString>> FromIterator<S> for WordList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<S: Into<BString>> Extend<S> for WordList {
    fn extend<I: IntoIterator<Item = S>>(&mut self, iter: I) {
        self.words.extend(iter.into_iter().map(Into::into));
    }
}

impl fmt::Display for WordList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for word in &self.words {
            writeln!(f, "{word}")?;
        }
        Ok(())
    }
}
