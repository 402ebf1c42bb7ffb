//! Error types for dictionary operations
//!
//! Every fallible library operation returns [`Result`]. Negative search and
//! delete outcomes are ordinary values, not errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading, saving or switching dictionaries
#[derive(Error, Debug)]
pub enum DictError {
    /// The dictionary file does not exist
    #[error("Could not open file {}", path.display())]
    FileNotFound { path: PathBuf },

    /// The dictionary file exists but could not be read
    #[error("Could not read file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Refusing to overwrite an existing output file
    #[error("The file {} already exists", path.display())]
    AlreadyExists { path: PathBuf },

    /// Creating or writing the output file failed
    #[error("Error writing to file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Dictionary number {number} is not in the available range ({min}-{max})")]
    DictionaryOutOfRange { number: i64, min: u8, max: u8 },

    #[error("Dictionary {number} is already open")]
    AlreadyOpen { number: u8 },

    /// Menu input that is not a number in the menu range
    #[error("Input must be a number between 1 and 12, or 0 to exit (got '{input}')")]
    InvalidChoice { input: String },

    /// Menu operation that exists but has no implementation
    #[error("{operation} is not available yet. Coming soon!")]
    Unsupported { operation: &'static str },

    /// Console I/O failure
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Standard result type for dictionary operations
pub type Result<T> = std::result::Result<T, DictError>;

impl DictError {
    /// Classify an I/O error raised while opening a dictionary for reading
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound { path }
        } else {
            Self::Read { path, source }
        }
    }

    /// Classify an I/O error raised while creating an output file
    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::AlreadyExists {
            Self::AlreadyExists { path }
        } else {
            Self::Write { path, source }
        }
    }

    /// Whether the user can simply pick again
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::DictionaryOutOfRange { .. } | Self::AlreadyOpen { .. } | Self::InvalidChoice { .. }
        )
    }
}
