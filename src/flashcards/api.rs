//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. Clients address
//! stacks by name; the facade resolves names to ids and dispatches to
//! `commands/*.rs`. It returns structured [`CmdResult`]s and never prints.
//!
//! `FlashcardsApi<S: DataStore>` is generic over the storage backend:
//! - Production: `FlashcardsApi<SqliteStore>`
//! - Testing: `FlashcardsApi<InMemoryStore>`
//!
//! The interactive session borrows the store directly through
//! [`FlashcardsApi::store_mut`], since it drives the commands itself.

use crate::commands::{self, cards, stacks};
use crate::error::Result;
use crate::model::Stack;
use crate::store::DataStore;

pub struct FlashcardsApi<S: DataStore> {
    store: S,
    paths: commands::FlashcardsPaths,
}

impl<S: DataStore> FlashcardsApi<S> {
    pub fn new(store: S, paths: commands::FlashcardsPaths) -> Self {
        Self { store, paths }
    }

    pub fn add_card(&mut self, stack: &str, front: String, back: String) -> Result<CmdResult> {
        let stack = stacks::resolve(&self.store, stack)?;
        cards::add(&mut self.store, stack.id, front, back)
    }

    pub fn list_cards(&self, stack: &str) -> Result<CmdResult> {
        let stack = stacks::resolve(&self.store, stack)?;
        cards::list(&self.store, stack.id)
    }

    pub fn count_cards(&self, stack: &str) -> Result<CmdResult> {
        let stack = stacks::resolve(&self.store, stack)?;
        cards::count(&self.store, stack.id)
    }

    pub fn delete_card(&mut self, stack: &str, position: usize) -> Result<CmdResult> {
        let stack = stacks::resolve(&self.store, stack)?;
        cards::delete_at(&mut self.store, stack.id, position)
    }

    pub fn create_stack(&mut self, name: &str) -> Result<CmdResult> {
        stacks::create(&mut self.store, name)
    }

    pub fn list_stacks(&self) -> Result<CmdResult> {
        stacks::list(&self.store)
    }

    pub fn find_stack(&self, name: &str) -> Result<Stack> {
        stacks::resolve(&self.store, name)
    }

    pub fn delete_stack(&mut self, name: &str) -> Result<CmdResult> {
        let stack = stacks::resolve(&self.store, name)?;
        stacks::delete(&mut self.store, stack.id)
    }

    pub fn rename_stack(&mut self, name: &str, new_name: &str) -> Result<CmdResult> {
        let stack = stacks::resolve(&self.store, name)?;
        stacks::rename(&mut self.store, stack.id, new_name)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.paths, action)
    }

    pub fn init(&mut self) -> Result<CmdResult> {
        commands::init::run(&mut self.store, &self.paths)
    }

    pub fn paths(&self) -> &commands::FlashcardsPaths {
        &self.paths
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, FlashcardsPaths, MessageLevel};
