//! Formatting utilities for terminal output

use crate::commands::MenuCommand;

/// Width of the divider line above the menu
pub const DIVIDER_WIDTH: usize = 44;

/// Render the options menu, ending with the choice prompt
#[must_use]
pub fn menu_text() -> String {
    let mut text = String::with_capacity(640);
    text.push_str(&"-".repeat(DIVIDER_WIDTH));
    text.push_str("\nOptions menu:\n");

    for command in MenuCommand::ALL.iter().skip(1) {
        text.push_str(&format!(" ({}) {}\n", command.code(), command.label()));
    }

    let last = MenuCommand::ALL.len() - 1;
    text.push_str(&format!("Enter a number from 1 to {last}, or 0 to exit: \n"));
    text
}

/// One-based position for display ("word 3 of 5")
#[must_use]
pub fn ordinal_position(position: usize, total: usize) -> String {
    format!("word {} of {total}", position + 1)
}
