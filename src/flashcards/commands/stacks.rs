use crate::commands::{CmdMessage, CmdResult};
use crate::error::{FlashcardsError, Result};
use crate::model::{Stack, StackId};
use crate::store::DataStore;

fn same_name(a: &str, b: &str) -> bool {
    a.to_lowercase() == b.to_lowercase()
}

fn validate_name<S: DataStore>(store: &S, name: &str, except: Option<StackId>) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(FlashcardsError::Api("Stack name cannot be empty".into()));
    }
    if store
        .read_all_stacks()?
        .iter()
        .any(|s| Some(s.id) != except && same_name(&s.name, name))
    {
        return Err(FlashcardsError::Api(format!(
            "A stack named '{}' already exists",
            name
        )));
    }
    Ok(name.to_string())
}

pub fn create<S: DataStore>(store: &mut S, name: &str) -> Result<CmdResult> {
    let name = validate_name(store, name, None)?;
    store.insert_stack(&name)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Stack created: {}", name)));
    Ok(result)
}

pub fn list<S: DataStore>(store: &S) -> Result<CmdResult> {
    let stacks = store.read_all_stacks()?;
    let mut result = CmdResult::default();
    if stacks.is_empty() {
        result.add_message(CmdMessage::info("No stacks found."));
    }
    Ok(result.with_listed_stacks(stacks))
}

/// Finds a stack by name, ignoring case.
pub fn resolve<S: DataStore>(store: &S, name: &str) -> Result<Stack> {
    let wanted = name.trim();
    store
        .read_all_stacks()?
        .into_iter()
        .find(|s| same_name(&s.name, wanted))
        .ok_or_else(|| FlashcardsError::StackNotFound(wanted.to_string()))
}

pub fn delete<S: DataStore>(store: &mut S, id: StackId) -> Result<CmdResult> {
    let removed_cards = store.count_cards(id)?;
    if !store.delete_stack(id)? {
        return Err(FlashcardsError::StackNotFound(id.to_string()));
    }
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Stack deleted along with {} card(s)",
        removed_cards
    )));
    Ok(result)
}

pub fn rename<S: DataStore>(store: &mut S, id: StackId, new_name: &str) -> Result<CmdResult> {
    let name = validate_name(store, new_name, Some(id))?;
    if !store.rename_stack(id, &name)? {
        return Err(FlashcardsError::StackNotFound(id.to_string()));
    }
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Stack renamed to {}", name)));
    Ok(result)
}
