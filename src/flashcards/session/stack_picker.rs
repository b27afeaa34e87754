use super::console::Console;
use crate::commands::CmdMessage;
use crate::error::Result;
use crate::model::Stack;
use crate::store::DataStore;
use tracing::debug;

const BACK_LABEL: &str = "Back";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StackSelection {
    Chosen(Stack),
    /// No stacks exist, or the user backed out of the menu
    NoneSelected,
}

/// Asks the user which stack to work on.
pub fn choose_stack<S: DataStore, C: Console>(store: &S, console: &mut C) -> Result<StackSelection> {
    let mut stacks = store.read_all_stacks()?;
    if stacks.is_empty() {
        console.show_message(&CmdMessage::warning(
            "No stacks found. Create one with `flashcards stack create <name>`.",
        ));
        return Ok(StackSelection::NoneSelected);
    }

    let mut items: Vec<String> = stacks.iter().map(|s| s.name.clone()).collect();
    items.push(BACK_LABEL.to_string());

    let choice = console.select("Choose a stack:", &items)?;
    if choice >= stacks.len() {
        debug!("stack selection abandoned");
        return Ok(StackSelection::NoneSelected);
    }
    Ok(StackSelection::Chosen(stacks.swap_remove(choice)))
}
