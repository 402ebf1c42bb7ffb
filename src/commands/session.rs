//! Dictionary session state
//!
//! Owns the active word list and which numbered dictionary it came from.

use crate::core::{DeleteOutcome, SearchOutcome, WordList};
use crate::error::{DictError, Result};
use crate::wordlists::{DEFAULT_OUTPUT_FILE, LoadStats, load_with_stats, resolve_output_path, write_to_file};
use log::{info, warn};
use std::fmt;
use std::path::PathBuf;

/// Identifier of a numbered dictionary file (`dictionary<N>.txt`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DictionaryId(u8);

impl DictionaryId {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 10;

    /// Dictionary opened at startup
    pub const DEFAULT: Self = Self(1);

    /// Validate a dictionary number
    ///
    /// # Errors
    ///
    /// Returns [`DictError::DictionaryOutOfRange`] outside `1..=10`.
    pub fn new(number: i64) -> Result<Self> {
        u8::try_from(number)
            .ok()
            .filter(|n| (Self::MIN..=Self::MAX).contains(n))
            .map(Self)
            .ok_or(DictError::DictionaryOutOfRange {
                number,
                min: Self::MIN,
                max: Self::MAX,
            })
    }

    #[inline]
    #[must_use]
    pub const fn number(self) -> u8 {
        self.0
    }

    #[must_use]
    pub fn file_name(self) -> String {
        format!("dictionary{}.txt", self.0)
    }
}

impl Default for DictionaryId {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for DictionaryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Settings for a dictionary session
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Directory holding the numbered dictionary files and output files
    pub dict_dir: PathBuf,
    /// Dictionary loaded at startup
    pub initial: DictionaryId,
    /// File name used when the user asks for the default output
    pub default_output: String,
    /// Print load diagnostics
    pub verbose: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            dict_dir: PathBuf::from("."),
            initial: DictionaryId::DEFAULT,
            default_output: DEFAULT_OUTPUT_FILE.to_string(),
            verbose: false,
        }
    }
}

impl SessionConfig {
    #[must_use]
    pub fn new(dict_dir: impl Into<PathBuf>) -> Self {
        Self {
            dict_dir: dict_dir.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn dictionary_path(&self, id: DictionaryId) -> PathBuf {
        self.dict_dir.join(id.file_name())
    }
}

/// The active dictionary and its word list
#[derive(Debug)]
pub struct Session {
    config: SessionConfig,
    words: WordList,
    current: DictionaryId,
    last_stats: Option<LoadStats>,
}

impl Session {
    /// Start a session with an already populated list
    #[must_use]
    pub fn with_words(config: SessionConfig, words: WordList) -> Self {
        let current = config.initial;
        Self {
            config,
            words,
            current,
            last_stats: None,
        }
    }

    /// Start a session by loading the configured initial dictionary
    ///
    /// A failed load is not fatal: the session starts with an empty list and
    /// the error is handed back for reporting.
    #[must_use]
    pub fn open(config: SessionConfig) -> (Self, Option<DictError>) {
        let mut session = Self::with_words(config, WordList::new());
        let path = session.config.dictionary_path(session.current);

        match load_with_stats(&path) {
            Ok((words, stats)) => {
                info!("opened dictionary {} ({} words)", session.current, words.len());
                session.words = words;
                session.last_stats = Some(stats);
                (session, None)
            }
            Err(err) => {
                warn!("starting with an empty list: {err}");
                (session, Some(err))
            }
        }
    }

    #[inline]
    #[must_use]
    pub const fn config(&self) -> &SessionConfig {
        &self.config
    }

    #[inline]
    #[must_use]
    pub const fn words(&self) -> &WordList {
        &self.words
    }

    #[inline]
    #[must_use]
    pub const fn current(&self) -> DictionaryId {
        self.current
    }

    /// Diagnostics from the most recent successful load
    #[inline]
    #[must_use]
    pub const fn last_stats(&self) -> Option<&LoadStats> {
        self.last_stats.as_ref()
    }

    #[inline]
    #[must_use]
    pub fn count(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn find_linear(&self, target: impl AsRef<[u8]>) -> SearchOutcome<'_> {
        self.words.find_linear(target)
    }

    #[must_use]
    pub fn find_binary(&self, target: impl AsRef<[u8]>) -> SearchOutcome<'_> {
        self.words.find_binary(target)
    }

    pub fn delete(&mut self, target: impl AsRef<[u8]>) -> DeleteOutcome {
        let outcome = self.words.delete_first(target);
        if let DeleteOutcome::Deleted { position, word } = &outcome {
            info!("deleted '{word}' at position {position}");
        }
        outcome
    }

    /// Replace the active list with another numbered dictionary
    ///
    /// On failure the previous dictionary stays active.
    ///
    /// # Errors
    ///
    /// Returns [`DictError::AlreadyOpen`] if `id` is already active, or the
    /// load error if the file cannot be read.
    pub fn switch_dictionary(&mut self, id: DictionaryId) -> Result<&LoadStats> {
        if id == self.current {
            return Err(DictError::AlreadyOpen { number: id.number() });
        }

        let path = self.config.dictionary_path(id);
        let (words, stats) = load_with_stats(&path).inspect_err(|err| {
            warn!("keeping dictionary {}: {err}", self.current);
        })?;

        info!("switched from dictionary {} to {id}", self.current);
        self.words = words;
        self.current = id;
        Ok(&*self.last_stats.insert(stats))
    }

    /// Write the active list to a new file named after `answer`
    ///
    /// # Errors
    ///
    /// See [`write_to_file`].
    pub fn write(&self, answer: &str) -> Result<PathBuf> {
        let path = self.output_path(answer);
        write_to_file(&self.words, &path)?;
        Ok(path)
    }

    #[must_use]
    pub fn output_path(&self, answer: &str) -> PathBuf {
        resolve_output_path(&self.config.dict_dir, answer, &self.config.default_output)
    }
}
