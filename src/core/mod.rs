//! Core domain types for word lists
//!
//! The word list and the search algorithms over it. Nothing here touches the
//! filesystem or the console.

pub mod search;
mod word_list;

pub use word_list::{DeleteOutcome, SearchOutcome, WordList, is_separator, tokenize};
