//! Dictionary files
//!
//! Loading word lists from text files and writing them back out.

pub mod loader;
pub mod writer;

pub use loader::{CapacityEstimate, LoadStats, estimate_capacity, load_from_file, load_with_stats};
pub use writer::{DEFAULT_OUTPUT_FILE, resolve_output_path, write_to_file};
