//! Dictionary Manager - CLI
//!
//! Interactive console menu for a word list loaded from `dictionary<N>.txt`,
//! plus a few one-shot subcommands.

use anyhow::{Context, Result, bail};
use bstr::BStr;
use clap::{Parser, Subcommand};
use dictionary_manager::{
    commands::{DictionaryId, Menu, Session, SessionConfig},
    output::{display, print_error, print_load_stats, print_words},
    wordlists::DEFAULT_OUTPUT_FILE,
};
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "dictionary_manager",
    about = "Count, print, search, edit and save word lists from a console menu",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding dictionary1.txt .. dictionary10.txt
    #[arg(short, long, global = true, default_value = ".")]
    dir: PathBuf,

    /// Dictionary opened at startup (1-10)
    #[arg(short = 'n', long, global = true, default_value_t = 1)]
    dictionary: i64,

    /// File name used when saving with the default name
    #[arg(long, global = true, default_value = DEFAULT_OUTPUT_FILE)]
    default_output: String,

    /// Show how word list storage was sized when loading
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive menu (default)
    Menu,

    /// Print the number of words in the dictionary
    Count,

    /// Print every word, one per line
    Print,

    /// Look up a single word
    Find {
        /// The word to look for (exact, case-sensitive)
        word: String,

        /// Use binary search (the dictionary must be sorted)
        #[arg(short, long)]
        binary: bool,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let initial = DictionaryId::new(cli.dictionary).context("invalid --dictionary")?;
    let config = SessionConfig {
        dict_dir: cli.dir,
        initial,
        default_output: cli.default_output,
        verbose: cli.verbose,
    };

    // Default to the interactive menu if no command given
    let command = cli.command.unwrap_or(Commands::Menu);

    match command {
        Commands::Menu => run_menu_command(config),
        Commands::Count => {
            let session = open_or_fail(config)?;
            let mut out = io::stdout().lock();
            display::print_count(&mut out, session.count(), session.current())?;
            Ok(())
        }
        Commands::Print => {
            let session = open_or_fail(config)?;
            let mut out = io::stdout().lock();
            print_words(&mut out, session.words())?;
            out.flush()?;
            Ok(())
        }
        Commands::Find { word, binary } => run_find_command(config, &word, binary),
    }
}

fn run_menu_command(config: SessionConfig) -> Result<()> {
    let (session, startup_error) = Session::open(config);

    let mut out = io::stdout().lock();
    if let Some(err) = startup_error {
        print_error(&mut out, &err)?;
    } else if session.config().verbose {
        if let Some(stats) = session.last_stats() {
            print_load_stats(&mut out, stats)?;
        }
    }

    let mut menu = Menu::new(session, io::stdin().lock(), out);
    menu.run().context("console I/O failed")?;
    Ok(())
}

fn run_find_command(config: SessionConfig, word: &str, binary: bool) -> Result<()> {
    let session = open_or_fail(config)?;
    let mut out = io::stdout().lock();

    if binary {
        let outcome = session.find_binary(word);
        display::print_binary_result(&mut out, BStr::new(word), &outcome, session.count())?;
    } else {
        let outcome = session.find_linear(word);
        display::print_linear_result(&mut out, BStr::new(word), &outcome)?;
    }
    Ok(())
}

/// Open the startup dictionary, treating a failed load as fatal
fn open_or_fail(config: SessionConfig) -> Result<Session> {
    let path = config.dictionary_path(config.initial);
    let (session, startup_error) = Session::open(config);

    if let Some(err) = startup_error {
        bail!("cannot load {}: {err}", path.display());
    }

    if session.config().verbose {
        if let Some(stats) = session.last_stats() {
            print_load_stats(&mut io::stderr().lock(), stats)?;
        }
    }
    Ok(session)
}
