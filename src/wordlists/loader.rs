//! Word list loading utilities
//!
//! Reads whitespace-delimited tokens from a text file, pre-sizing the list
//! from the file size.

use crate::core::{WordList, tokenize};
use crate::error::{DictError, Result};
use log::{debug, warn};
use std::fs;
use std::path::Path;

/// Assumed average word length in bytes, separator included
pub const AVERAGE_WORD_LENGTH: f64 = 7.0;

/// How far past the projected word count to reserve
pub const CUSHION_FACTOR: f64 = 1.25;

/// Reservation used when the file size cannot be determined
pub const DEFAULT_CAPACITY: usize = 1000;

/// Pre-allocation hint derived from a file's size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapacityEstimate {
    /// Size of the file in bytes, `None` if it could not be stat'ed
    pub file_size: Option<u64>,
    /// Number of words to reserve room for
    pub capacity: usize,
}

impl CapacityEstimate {
    /// Estimate for a file of `bytes` bytes
    #[must_use]
    pub fn from_size(bytes: u64) -> Self {
        let estimated_words = bytes as f64 / AVERAGE_WORD_LENGTH;
        Self {
            file_size: Some(bytes),
            capacity: (estimated_words * CUSHION_FACTOR).ceil() as usize,
        }
    }

    /// Fallback estimate when the size is unknown
    #[must_use]
    pub const fn fallback() -> Self {
        Self {
            file_size: None,
            capacity: DEFAULT_CAPACITY,
        }
    }
}

/// Diagnostics collected while loading a word list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadStats {
    pub estimate: CapacityEstimate,
    /// Capacity right after reserving, before any word was read
    pub reserved_capacity: usize,
    /// Capacity once every word was pushed
    pub final_capacity: usize,
    pub word_count: usize,
}

/// Size of a file in bytes, or `None` if it does not exist
pub fn file_size<P: AsRef<Path>>(path: P) -> Option<u64> {
    fs::metadata(path).ok().map(|meta| meta.len())
}

/// Estimate how many words a file holds, with some headroom
///
/// Falls back to [`DEFAULT_CAPACITY`] when the file is missing.
///
/// # Examples
/// ```no_run
/// use dictionary_manager::wordlists::loader::estimate_capacity;
///
/// let estimate = estimate_capacity("dictionary1.txt");
/// println!("Reserving room for {} words", estimate.capacity);
/// ```
pub fn estimate_capacity<P: AsRef<Path>>(path: P) -> CapacityEstimate {
    let path = path.as_ref();
    match file_size(path) {
        Some(bytes) => CapacityEstimate::from_size(bytes),
        None => {
            warn!(
                "file not found: {}, reserving default capacity {DEFAULT_CAPACITY}",
                path.display()
            );
            CapacityEstimate::fallback()
        }
    }
}

/// Load words from a file
///
/// Any run of ASCII whitespace separates words; empty tokens are never
/// produced. Words are kept as raw bytes, so files in any ASCII-compatible
/// encoding load unchanged.
///
/// # Errors
///
/// Returns [`DictError::FileNotFound`] if the file does not exist, or
/// [`DictError::Read`] if it cannot be read.
///
/// # Examples
/// ```no_run
/// use dictionary_manager::wordlists::loader::load_from_file;
///
/// let words = load_from_file("dictionary1.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<WordList> {
    load_with_stats(path).map(|(words, _)| words)
}

/// Load words from a file and report how storage was sized
///
/// # Errors
///
/// Same as [`load_from_file`].
pub fn load_with_stats<P: AsRef<Path>>(path: P) -> Result<(WordList, LoadStats)> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| DictError::read(path, e))?;

    let estimate = estimate_capacity(path);
    let mut words = reserved_list(estimate.capacity);
    let reserved_capacity = words.capacity();

    words.extend(tokenize(&bytes));

    let stats = LoadStats {
        estimate,
        reserved_capacity,
        final_capacity: words.capacity(),
        word_count: words.len(),
    };

    debug!("loaded {} words from {}: {stats:?}", words.len(), path.display());

    Ok((words, stats))
}

/// Empty list with room for `capacity` words, if the allocator agrees
///
/// The estimate is only a hint, so a refused reservation falls back to an
/// unreserved list.
fn reserved_list(capacity: usize) -> WordList {
    let mut words = WordList::new();
    if let Err(e) = words.try_reserve(capacity) {
        warn!("could not reserve room for {capacity} words ({e}), growing on demand");
    }
    words
}
