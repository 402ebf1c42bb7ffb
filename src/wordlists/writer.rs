//! Saving word lists to disk
//!
//! Output files are never overwritten.

use crate::core::WordList;
use crate::error::{DictError, Result};
use log::{info, warn};
use std::fs::{self, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// File name used when the user asks for the default
pub const DEFAULT_OUTPUT_FILE: &str = "dict-updated.txt";

/// Answer that selects [`DEFAULT_OUTPUT_FILE`]
pub const DEFAULT_OUTPUT_ANSWER: &str = "d";

/// Turn the user's answer into an output path inside `dir`
///
/// `"d"` picks `default_name`; anything else gets `.txt` appended.
#[must_use]
pub fn resolve_output_path(dir: &Path, answer: &str, default_name: &str) -> PathBuf {
    if answer == DEFAULT_OUTPUT_ANSWER {
        dir.join(default_name)
    } else {
        dir.join(format!("{answer}.txt"))
    }
}

/// Write one word per line to a new file at `path`
///
/// Words are written as the raw bytes they were loaded with. Returns the
/// number of words written.
///
/// # Errors
///
/// Returns [`DictError::AlreadyExists`] if anything is already at `path`
/// (the existing file is left untouched), or [`DictError::Write`] if the file
/// cannot be created or written. A file that fails mid-write is removed.
pub fn write_to_file<P: AsRef<Path>>(words: &WordList, path: P) -> Result<usize> {
    let path = path.as_ref();
    write_new_file(path, |out| write_words(words, out))?;

    info!("wrote {} words to {}", words.len(), path.display());
    Ok(words.len())
}

/// Write each word followed by a newline
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_words<W: Write + ?Sized>(words: &WordList, out: &mut W) -> io::Result<()> {
    for word in words.iter() {
        out.write_all(word)?;
        out.write_all(b"\n")?;
    }
    Ok(())
}

/// Create `path` exclusively and fill it, removing it again if filling fails
fn write_new_file<F>(path: &Path, fill: F) -> Result<()>
where
    F: FnOnce(&mut dyn Write) -> io::Result<()>,
{
    let file = OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .map_err(|e| DictError::write(path, e))?;

    let mut writer = BufWriter::new(file);
    let result = fill(&mut writer).and_then(|()| writer.flush());
    drop(writer);

    result.map_err(|e| {
        // create_new guarantees nothing was at `path` before this call
        if let Err(remove_err) = fs::remove_file(path) {
            warn!("could not remove partial file {}: {remove_err}", path.display());
        }
        DictError::write(path, e)
    })
}
