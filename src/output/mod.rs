//! Terminal output formatting
//!
//! Display utilities for menu results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_error, print_load_stats, print_words};
pub use formatters::menu_text;
