//! Picking one card out of the current stack.
//!
//! The user always sees a freshly numbered table, but the number they type is
//! resolved against the session's cached cards. What comes back is the cached
//! card's own `number` (its row id), never the position that was typed.

use super::console::Console;
use super::{show_cards, SessionOptions};
use crate::commands::CmdMessage;
use crate::error::Result;
use crate::model::{Card, StackId};
use crate::store::DataStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    Chosen(i64),
    Cancelled,
}

/// Classification of one line typed at the card prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceInput {
    Blank,
    Cancel,
    Invalid,
    /// Zero-based index into the cached cards
    Valid(usize),
}

pub fn parse_card_choice(input: &str, cancel_keyword: &str, len: usize) -> ChoiceInput {
    let entry = input.trim();
    if entry.is_empty() {
        return ChoiceInput::Blank;
    }
    if entry.to_lowercase() == cancel_keyword.to_lowercase() {
        return ChoiceInput::Cancel;
    }
    match entry.parse::<usize>() {
        Ok(n) if (1..=len).contains(&n) => ChoiceInput::Valid(n - 1),
        _ => ChoiceInput::Invalid,
    }
}

pub fn choose_card<S: DataStore, C: Console>(
    store: &S,
    console: &mut C,
    stack: StackId,
    cached: &[Card],
    options: &SessionOptions,
) -> Result<Selection> {
    let prompt = format!(
        "Enter a card number (Or enter '{}' to exit)",
        options.cancel_keyword
    );
    loop {
        if options.clear_screen {
            console.clear()?;
        }
        show_cards(store, console, stack, options.max_cell_width)?;

        let input = console.read_line(&prompt)?;
        match parse_card_choice(&input, &options.cancel_keyword, cached.len()) {
            ChoiceInput::Blank => {
                console.show_message(&CmdMessage::error("Error- Invalid input"));
            }
            ChoiceInput::Cancel => return Ok(Selection::Cancelled),
            ChoiceInput::Invalid => {
                console.show_message(&CmdMessage::error(
                    "Error- Invalid input, please choose a valid card number.",
                ));
            }
            ChoiceInput::Valid(index) => {
                let chosen = &cached[index];
                console.show_message(&CmdMessage::success(format!(
                    "You selected card: {}!",
                    index + 1
                )));
                return Ok(Selection::Chosen(chosen.number));
            }
        }
    }
}
