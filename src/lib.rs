//! Dictionary Manager
//!
//! Load a word list from a text file, then count, print, search, delete and
//! save it from an interactive console menu.
//!
//! # Quick Start
//!
//! ```rust
//! use dictionary_manager::core::{SearchOutcome, WordList};
//!
//! let words: WordList = ["ant", "bee", "cat", "dog", "elk"].into_iter().collect();
//!
//! assert_eq!(words.find_binary("cat").position(), Some(2));
//! assert_eq!(words.find_linear("fox"), SearchOutcome::NotFound);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Dictionary files
pub mod wordlists;

// Menu and session
pub mod commands;

// Terminal output formatting
pub mod output;

pub use error::{DictError, Result};
