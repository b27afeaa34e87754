use crate::commands::{CmdMessage, CmdResult, FlashcardsPaths};
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(store: &mut S, paths: &FlashcardsPaths) -> Result<CmdResult> {
    store.init()?;
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Initialized flashcards database at {}",
        paths.database.display()
    )));
    Ok(result)
}
