//! Display functions for command results
//!
//! Every function writes to the given sink so the menu can be tested against
//! an in-memory buffer.

use super::formatters::ordinal_position;
use crate::commands::DictionaryId;
use crate::core::{DeleteOutcome, SearchOutcome, WordList};
use crate::error::DictError;
use crate::wordlists::LoadStats;
use bstr::{BStr, ByteSlice};
use colored::Colorize;
use std::io::{self, Write};
use std::path::Path;

pub fn print_count<W: Write>(out: &mut W, count: usize, current: DictionaryId) -> io::Result<()> {
    writeln!(
        out,
        "There are {} words in dictionary #{current}.",
        count.to_string().bright_cyan().bold()
    )
}

/// Print every word on its own line
pub fn print_words<W: Write>(out: &mut W, words: &WordList) -> io::Result<()> {
    for word in words.iter() {
        writeln!(out, "{word}")?;
    }
    Ok(())
}

/// Report a linear search, naming the word that follows a match
pub fn print_linear_result<W: Write>(
    out: &mut W,
    word: &BStr,
    outcome: &SearchOutcome<'_>,
) -> io::Result<()> {
    write!(out, "Your word was '{word}'. ")?;
    match outcome {
        SearchOutcome::Found {
            next: Some(next), ..
        } => writeln!(
            out,
            "The next word would be '{}'.",
            next.to_str_lossy().bright_white().bold()
        ),
        SearchOutcome::Found { next: None, .. } => writeln!(out, "It is the last word."),
        SearchOutcome::NotFound => writeln!(out, "{}", "We did not find your word.".yellow()),
    }
}

/// Report a binary search with the match position
pub fn print_binary_result<W: Write>(
    out: &mut W,
    word: &BStr,
    outcome: &SearchOutcome<'_>,
    total: usize,
) -> io::Result<()> {
    write!(out, "Your word was '{word}'. ")?;
    match outcome.position() {
        Some(position) => writeln!(out, "It is {}.", ordinal_position(position, total).green()),
        None => writeln!(out, "{}", "We did not find your word.".yellow()),
    }
}

pub fn print_delete_result<W: Write>(
    out: &mut W,
    word: &BStr,
    outcome: &DeleteOutcome,
) -> io::Result<()> {
    write!(out, "Your word was '{word}'. ")?;
    match outcome {
        DeleteOutcome::Deleted { word, .. } => writeln!(
            out,
            "{}",
            format!("The word '{word}' has been deleted.").green()
        ),
        DeleteOutcome::NotFound => writeln!(out, "{}", "We did not find your word.".yellow()),
    }
}

pub fn print_written<W: Write>(out: &mut W, path: &Path) -> io::Result<()> {
    writeln!(out, "Writing to file {} ...", path.display())?;
    writeln!(out, "{}", "                   ...Done!".green())
}

pub fn print_opened<W: Write>(out: &mut W, id: DictionaryId) -> io::Result<()> {
    writeln!(out, "{}", format!("Dictionary {id} is open.").green())
}

/// Print how the word list storage was sized during the last load
pub fn print_load_stats<W: Write>(out: &mut W, stats: &LoadStats) -> io::Result<()> {
    let size = stats
        .estimate
        .file_size
        .map_or_else(|| "unknown".to_string(), |bytes| format!("{bytes} bytes"));

    writeln!(out, "{}", "## Load diagnostics".bright_black())?;
    writeln!(out, "##   file size:            {size}")?;
    writeln!(out, "##   reserve requested:    {}", stats.estimate.capacity)?;
    writeln!(out, "##   capacity after reserve: {}", stats.reserved_capacity)?;
    writeln!(out, "##   capacity when filled: {}", stats.final_capacity)?;
    writeln!(out, "##   words loaded:         {}", stats.word_count)
}

pub fn print_unsupported<W: Write>(out: &mut W, operation: &str) -> io::Result<()> {
    writeln!(
        out,
        "{}",
        format!("{operation} is not available yet. Coming soon!").yellow()
    )
}

/// A problem the user can fix by answering again
pub fn print_retry<W: Write>(out: &mut W, message: &str) -> io::Result<()> {
    writeln!(out, "{}", message.yellow())
}

pub fn print_error<W: Write>(out: &mut W, err: &DictError) -> io::Result<()> {
    writeln!(out, "{} {err}", "ERROR!".red().bold())
}

pub fn print_goodbye<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "Thank you! Bye!".bright_cyan())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::CapacityEstimate;
    use bstr::BString;

    fn render(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn count_line() {
        let text = render(|out| print_count(out, 3, DictionaryId::DEFAULT));
        assert_eq!(text, "There are 3 words in dictionary #1.\n");
    }

    #[test]
    fn linear_found_with_next() {
        let outcome = SearchOutcome::Found {
            position: 1,
            next: Some(BStr::new("cherry")),
        };
        let text = render(|out| print_linear_result(out, BStr::new("banana"), &outcome));
        assert_eq!(text, "Your word was 'banana'. The next word would be 'cherry'.\n");
    }

    #[test]
    fn linear_found_last() {
        let outcome = SearchOutcome::Found {
            position: 2,
            next: None,
        };
        let text = render(|out| print_linear_result(out, BStr::new("cherry"), &outcome));
        assert_eq!(text, "Your word was 'cherry'. It is the last word.\n");
    }

    #[test]
    fn binary_not_found() {
        let text = render(|out| print_binary_result(out, BStr::new("fox"), &SearchOutcome::NotFound, 5));
        assert_eq!(text, "Your word was 'fox'. We did not find your word.\n");
    }

    #[test]
    fn delete_messages() {
        let deleted = DeleteOutcome::Deleted {
            position: 0,
            word: BString::from("apple"),
        };
        let text = render(|out| print_delete_result(out, BStr::new("apple"), &deleted));
        assert_eq!(text, "Your word was 'apple'. The word 'apple' has been deleted.\n");
    }

    #[test]
    fn non_utf8_word_is_shown_lossily() {
        let text = render(|out| print_binary_result(out, BStr::new(b"caf\xe9"), &SearchOutcome::NotFound, 0));
        assert_eq!(text, "Your word was 'caf\u{fffd}'. We did not find your word.\n");
    }

    #[test]
    fn words_one_per_line() {
        let words: WordList = ["a", "b"].into_iter().collect();
        assert_eq!(render(|out| print_words(out, &words)), "a\nb\n");
    }

    #[test]
    fn error_has_prefix() {
        let err = DictError::AlreadyExists {
            path: "dict-updated.txt".into(),
        };
        let text = render(|out| print_error(out, &err));
        assert_eq!(text, "ERROR! The file dict-updated.txt already exists\n");
    }

    #[test]
    fn load_stats_lists_unknown_size() {
        let stats = LoadStats {
            estimate: CapacityEstimate::fallback(),
            reserved_capacity: 1000,
            final_capacity: 1000,
            word_count: 2,
        };
        let text = render(|out| print_load_stats(out, &stats));
        assert!(text.contains("file size:            unknown"));
        assert!(text.contains("words loaded:         2"));
    }
}
