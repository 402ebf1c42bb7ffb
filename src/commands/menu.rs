//! Interactive menu loop
//!
//! Reads numbered choices from any `BufRead` and reports to any `Write`, so
//! the whole console protocol can be driven from tests.

use super::session::{DictionaryId, Session};
use crate::core::tokenize;
use crate::error::{DictError, Result};
use crate::output::display;
use crate::output::formatters::menu_text;
use bstr::{BStr, BString, ByteSlice};
use std::io::{BufRead, Write};

const ALREADY_OPEN: &str = "That dictionary is already open! Pick another.";
const OUT_OF_RANGE: &str = "That number is not in the available range! Pick another.";

/// A numbered menu entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuCommand {
    Quit = 0,
    Count = 1,
    Print = 2,
    LinearSearch = 3,
    Delete = 4,
    Swap = 5,
    BubbleSort = 6,
    SelectionSort = 7,
    BinarySearch = 8,
    InsertInOrder = 9,
    Merge = 10,
    LoadDictionary = 11,
    WriteToFile = 12,
}

impl MenuCommand {
    /// Every entry, in code order
    pub const ALL: [Self; 13] = [
        Self::Quit,
        Self::Count,
        Self::Print,
        Self::LinearSearch,
        Self::Delete,
        Self::Swap,
        Self::BubbleSort,
        Self::SelectionSort,
        Self::BinarySearch,
        Self::InsertInOrder,
        Self::Merge,
        Self::LoadDictionary,
        Self::WriteToFile,
    ];

    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn from_code(code: i64) -> Option<Self> {
        usize::try_from(code)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    /// Parse a line of user input into a command
    ///
    /// # Errors
    ///
    /// Returns [`DictError::InvalidChoice`] for anything that is not an
    /// integer between 0 and 12.
    pub fn parse(input: &str) -> Result<Self> {
        let trimmed = input.trim();
        trimmed
            .parse::<i64>()
            .ok()
            .and_then(Self::from_code)
            .ok_or_else(|| DictError::InvalidChoice {
                input: trimmed.to_string(),
            })
    }

    /// Text shown in the options menu
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quit => "Exit",
            Self::Count => "Count - get number of words in dictionary",
            Self::Print => "Print words to screen",
            Self::LinearSearch => "Find a word (Linear Search)",
            Self::Delete => "Find word, delete if found",
            Self::Swap => "Swap two words",
            Self::BubbleSort => "Sort words (Bubble Sort)",
            Self::SelectionSort => "Sort words (Selection Sort)",
            Self::BinarySearch => {
                "Find a word - Binary Search (assumes words are sorted alphabetically)"
            }
            Self::InsertInOrder => {
                "Find word, insert if not found (assumes words are sorted alphabetically)"
            }
            Self::Merge => "Merge two dictionaries (will sort first)",
            Self::LoadDictionary => "Load a dictionary (closes current dictionary)",
            Self::WriteToFile => "Write current dictionary to file",
        }
    }

    /// Short name used in messages
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Quit => "Quit",
            Self::Count => "Count",
            Self::Print => "Print",
            Self::LinearSearch => "Linear search",
            Self::Delete => "Delete",
            Self::Swap => "Swap",
            Self::BubbleSort => "Bubble sort",
            Self::SelectionSort => "Selection sort",
            Self::BinarySearch => "Binary search",
            Self::InsertInOrder => "Insert in order",
            Self::Merge => "Merge",
            Self::LoadDictionary => "Load dictionary",
            Self::WriteToFile => "Write to file",
        }
    }

    /// Whether the entry does anything beyond reporting "coming soon"
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(
            self,
            Self::Swap | Self::BubbleSort | Self::SelectionSort | Self::InsertInOrder | Self::Merge
        )
    }
}

/// What the menu loop does after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive menu over a [`Session`]
pub struct Menu<R, W> {
    session: Session,
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(session: Session, input: R, out: W) -> Self {
        Self {
            session,
            input,
            out,
        }
    }

    #[must_use]
    pub const fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn into_session(self) -> Session {
        self.session
    }

    /// Run until the user quits or input runs out
    ///
    /// # Errors
    ///
    /// Returns an error only if reading input or writing output fails.
    pub fn run(&mut self) -> Result<()> {
        loop {
            let Some(command) = self.read_choice()? else {
                display::print_goodbye(&mut self.out)?;
                return Ok(());
            };

            match self.dispatch(command) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => return Ok(()),
                Err(DictError::Io(e)) => return Err(DictError::Io(e)),
                Err(DictError::Unsupported { operation }) => {
                    display::print_unsupported(&mut self.out, operation)?;
                }
                Err(err) => display::print_error(&mut self.out, &err)?,
            }
        }
    }

    /// Show the menu and read choices until a valid one arrives
    ///
    /// Returns `None` at end of input.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn read_choice(&mut self) -> Result<Option<MenuCommand>> {
        loop {
            write!(self.out, "{}", menu_text())?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };

            match MenuCommand::parse(&String::from_utf8_lossy(&line)) {
                Ok(command) => return Ok(Some(command)),
                Err(err) => display::print_error(&mut self.out, &err)?,
            }
        }
    }

    /// Carry out one command
    ///
    /// # Errors
    ///
    /// Returns [`DictError::Unsupported`] for "coming soon" entries, the
    /// operation's error when loading or writing fails, or an I/O error.
    pub fn dispatch(&mut self, command: MenuCommand) -> Result<Flow> {
        match command {
            MenuCommand::Quit => {
                display::print_goodbye(&mut self.out)?;
                return Ok(Flow::Quit);
            }
            MenuCommand::Count => {
                display::print_count(&mut self.out, self.session.count(), self.session.current())?;
            }
            MenuCommand::Print => display::print_words(&mut self.out, self.session.words())?,
            MenuCommand::LinearSearch => {
                let Some(word) = self.read_token("Enter a word to find: ")? else {
                    return Ok(Flow::Quit);
                };
                let outcome = self.session.find_linear(&word);
                display::print_linear_result(&mut self.out, BStr::new(&word), &outcome)?;
            }
            MenuCommand::BinarySearch => {
                let Some(word) = self.read_token("Enter a word to find: ")? else {
                    return Ok(Flow::Quit);
                };
                let outcome = self.session.find_binary(&word);
                let total = self.session.count();
                display::print_binary_result(&mut self.out, BStr::new(&word), &outcome, total)?;
            }
            MenuCommand::Delete => {
                let Some(word) =
                    self.read_token("Enter a word to delete from the chosen Dictionary: ")?
                else {
                    return Ok(Flow::Quit);
                };
                let outcome = self.session.delete(&word);
                display::print_delete_result(&mut self.out, BStr::new(&word), &outcome)?;
            }
            MenuCommand::LoadDictionary => return self.load_dictionary(),
            MenuCommand::WriteToFile => {
                let Some(answer) = self.read_token(
                    "Enter name of file (.txt will be appended automatically), or enter 'd' to use default filename: ",
                )?
                else {
                    return Ok(Flow::Quit);
                };
                let path = self.session.write(&answer.to_str_lossy())?;
                display::print_written(&mut self.out, &path)?;
            }
            _ => {
                debug_assert!(!command.is_supported());
                return Err(DictError::Unsupported {
                    operation: command.name(),
                });
            }
        }
        Ok(Flow::Continue)
    }

    fn load_dictionary(&mut self) -> Result<Flow> {
        let prompt = format!(
            "Which Dictionary should be opened? Enter a number between \"{}\" and \"{}\": ",
            DictionaryId::MIN,
            DictionaryId::MAX
        );

        loop {
            let Some(answer) = self.read_token(&prompt)? else {
                return Ok(Flow::Quit);
            };
            let Ok(number) = answer.to_str_lossy().parse::<i64>() else {
                display::print_retry(&mut self.out, OUT_OF_RANGE)?;
                continue;
            };

            match self.open_dictionary(number) {
                Ok(()) => return Ok(Flow::Continue),
                Err(err) if err.is_retryable() => {
                    let message = match err {
                        DictError::AlreadyOpen { .. } => ALREADY_OPEN,
                        _ => OUT_OF_RANGE,
                    };
                    display::print_retry(&mut self.out, message)?;
                }
                Err(err) => return Err(err),
            }
        }
    }

    fn open_dictionary(&mut self, number: i64) -> Result<()> {
        let id = DictionaryId::new(number)?;
        let stats = *self.session.switch_dictionary(id)?;
        display::print_opened(&mut self.out, id)?;
        if self.session.config().verbose {
            display::print_load_stats(&mut self.out, &stats)?;
        }
        Ok(())
    }

    /// Prompt once, then read lines until one holds a token
    ///
    /// Only the first whitespace-delimited token of the line is used. The
    /// token keeps its raw bytes so it compares equal to words loaded from
    /// a file in the same encoding.
    fn read_token(&mut self, prompt: &str) -> Result<Option<BString>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;

        while let Some(line) = self.read_line()? {
            if let Some(token) = tokenize(&line).next() {
                return Ok(Some(token.to_owned()));
            }
        }
        Ok(None)
    }

    /// Next raw input line, `None` at end of input
    ///
    /// Lines are not required to be valid UTF-8.
    fn read_line(&mut self) -> Result<Option<Vec<u8>>> {
        self.out.flush()?;
        let mut line = Vec::new();
        if self.input.read_until(b'\n', &mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::session::SessionConfig;
    use crate::core::WordList;
    use std::io::Cursor;

    fn run_script(words: &[&str], script: &str) -> (Session, String) {
        run_bytes(words, script.as_bytes())
    }

    fn run_bytes(words: &[&str], script: &[u8]) -> (Session, String) {
        colored::control::set_override(false);
        let session = Session::with_words(SessionConfig::default(), words.iter().copied().collect::<WordList>());
        let mut out = Vec::new();
        let mut menu = Menu::new(session, Cursor::new(script.to_vec()), &mut out);
        menu.run().unwrap();
        let session = menu.into_session();
        (session, String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn command_codes_round_trip() {
        for command in MenuCommand::ALL {
            assert_eq!(MenuCommand::from_code(i64::from(command.code())), Some(command));
        }
        assert_eq!(MenuCommand::from_code(13), None);
        assert_eq!(MenuCommand::from_code(-1), None);
    }

    #[test]
    fn parse_accepts_padded_numbers() {
        assert_eq!(MenuCommand::parse(" 8 \n").unwrap(), MenuCommand::BinarySearch);
        assert_eq!(MenuCommand::parse("0").unwrap(), MenuCommand::Quit);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(matches!(
            MenuCommand::parse("banana"),
            Err(DictError::InvalidChoice { .. })
        ));
        assert!(MenuCommand::parse("13").is_err());
        assert!(MenuCommand::parse("-1").is_err());
        assert!(MenuCommand::parse("").is_err());
    }

    #[test]
    fn unsupported_entries() {
        let unsupported: Vec<_> = MenuCommand::ALL
            .into_iter()
            .filter(|c| !c.is_supported())
            .collect();
        assert_eq!(
            unsupported,
            vec![
                MenuCommand::Swap,
                MenuCommand::BubbleSort,
                MenuCommand::SelectionSort,
                MenuCommand::InsertInOrder,
                MenuCommand::Merge
            ]
        );
    }

    #[test]
    fn dispatch_unsupported_returns_error() {
        let session = Session::with_words(SessionConfig::default(), WordList::new());
        let mut menu = Menu::new(session, Cursor::new(Vec::new()), Vec::new());
        let result = menu.dispatch(MenuCommand::BubbleSort);
        assert!(matches!(
            result,
            Err(DictError::Unsupported {
                operation: "Bubble sort"
            })
        ));
    }

    #[test]
    fn dispatch_supported_never_reports_coming_soon() {
        let dir = tempfile::tempdir().unwrap();
        for command in MenuCommand::ALL.into_iter().filter(|c| c.is_supported()) {
            let session = Session::with_words(SessionConfig::new(dir.path()), WordList::new());
            let mut menu = Menu::new(session, Cursor::new(Vec::new()), Vec::new());
            let result = menu.dispatch(command);
            assert!(
                !matches!(result, Err(DictError::Unsupported { .. })),
                "{command:?} reported as unsupported"
            );
        }
    }

    #[test]
    fn dispatch_every_unsupported_entry() {
        for command in MenuCommand::ALL.into_iter().filter(|c| !c.is_supported()) {
            let session = Session::with_words(SessionConfig::default(), WordList::new());
            let mut menu = Menu::new(session, Cursor::new(Vec::new()), Vec::new());
            let result = menu.dispatch(command);
            assert!(matches!(
                result,
                Err(DictError::Unsupported { operation }) if operation == command.name()
            ));
        }
    }

    #[test]
    fn non_utf8_menu_input_is_reprompted() {
        let (_, output) = run_bytes(&["apple"], b"\xff\xfe\n1\n0\n");
        assert_eq!(output.matches("Options menu:").count(), 3);
        assert!(output.contains("ERROR! Input must be a number"));
        assert!(output.contains("There are 1 words"));
        assert!(output.contains("Thank you! Bye!"));
    }

    #[test]
    fn search_matches_latin1_token() {
        colored::control::set_override(false);
        let words: WordList = [&b"caf\xe9"[..], &b"tea"[..]].into_iter().collect();
        let session = Session::with_words(SessionConfig::default(), words);
        let mut out = Vec::new();
        let mut menu = Menu::new(session, Cursor::new(b"3\ncaf\xe9\n4\ncaf\xe9\n0\n".to_vec()), &mut out);
        menu.run().unwrap();
        let session = menu.into_session();
        let output = String::from_utf8_lossy(&out);

        assert!(output.contains("The next word would be 'tea'."));
        assert!(output.contains("has been deleted."));
        assert_eq!(session.count(), 1);
    }

    #[test]
    fn count_and_quit() {
        let (_, output) = run_script(&["apple", "banana", "cherry"], "1\n0\n");
        assert!(output.contains("There are 3 words in dictionary #1."));
        assert!(output.contains("Thank you! Bye!"));
    }

    #[test]
    fn invalid_input_reprompts() {
        let (_, output) = run_script(&["apple"], "hello\n42\n1\n0\n");
        assert_eq!(output.matches("Options menu:").count(), 4);
        assert!(output.contains("got 'hello'"));
        assert!(output.contains("got '42'"));
        assert!(output.contains("There are 1 words"));
    }

    #[test]
    fn linear_search_reports_next_word() {
        let (_, output) = run_script(&["apple", "banana", "cherry"], "3\nbanana\n3\ncherry\n3\ndate\n0\n");
        assert!(output.contains("The next word would be 'cherry'."));
        assert!(output.contains("It is the last word."));
        assert!(output.contains("Your word was 'date'. We did not find your word."));
    }

    #[test]
    fn binary_search_reports_position() {
        let (_, output) = run_script(&["ant", "bee", "cat", "dog", "elk"], "8\ncat\n8\nfox\n0\n");
        assert!(output.contains("Your word was 'cat'. It is word 3 of 5."));
        assert!(output.contains("Your word was 'fox'. We did not find your word."));
    }

    #[test]
    fn delete_removes_word() {
        let (session, output) = run_script(&["apple", "banana"], "4\napple\n4\napple\n0\n");
        assert!(output.contains("The word 'apple' has been deleted."));
        assert!(output.contains("Your word was 'apple'. We did not find your word."));
        assert_eq!(session.count(), 1);
    }

    #[test]
    fn coming_soon_entries_say_so() {
        let (_, output) = run_script(&["apple"], "5\n6\n7\n9\n10\n0\n");
        assert_eq!(output.matches("Coming soon!").count(), 5);
    }

    #[test]
    fn end_of_input_quits() {
        let (_, output) = run_script(&["apple"], "1\n");
        assert!(output.contains("Thank you! Bye!"));
    }

    #[test]
    fn end_of_input_during_word_prompt_quits() {
        let (session, _) = run_script(&["apple"], "4\n");
        assert_eq!(session.count(), 1);
    }

    #[test]
    fn load_rejects_out_of_range_and_current() {
        // dictionary2.txt does not exist, so the switch fails
        let dir = tempfile::tempdir().unwrap();
        colored::control::set_override(false);
        let mut config = SessionConfig::new(dir.path());
        config.initial = DictionaryId::DEFAULT;
        let session = Session::with_words(config, ["apple"].into_iter().collect());
        let mut out = Vec::new();
        let mut menu = Menu::new(session, Cursor::new(b"11\n99\nabc\n1\n2\n1\n0\n".to_vec()), &mut out);
        menu.run().unwrap();
        let session = menu.into_session();
        let output = String::from_utf8(out).unwrap();

        assert_eq!(output.matches("not in the available range").count(), 2);
        assert!(output.contains("That dictionary is already open! Pick another."));
        assert!(output.contains("Could not open file"));
        assert_eq!(session.current().number(), 1);
        assert!(output.contains("There are 1 words in dictionary #1."));
    }
}
