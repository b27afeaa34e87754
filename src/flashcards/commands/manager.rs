//! Per-entity create/delete/update capabilities.
//!
//! Each entity kind gets its own manager borrowing the store. Interactive code
//! holds a manager and never needs to know which command module backs it.

use crate::commands::{cards, stacks, CmdResult};
use crate::error::Result;
use crate::model::{Card, StackId};
use crate::store::DataStore;

pub trait ModelManager {
    type Model;
    type NewModel;
    type Id;

    fn add_model(&mut self, new: Self::NewModel) -> Result<CmdResult>;

    fn delete_model(&mut self, id: Self::Id) -> Result<CmdResult>;

    fn update_model(&mut self, id: Self::Id, model: Self::Model) -> Result<CmdResult>;
}

/// Card operations scoped to one stack.
pub struct CardsManager<'a, S: DataStore> {
    store: &'a mut S,
    stack: StackId,
}

impl<'a, S: DataStore> CardsManager<'a, S> {
    pub fn new(store: &'a mut S, stack: StackId) -> Self {
        Self { store, stack }
    }
}

impl<S: DataStore> ModelManager for CardsManager<'_, S> {
    type Model = Card;
    /// (front, back)
    type NewModel = (String, String);
    type Id = i64;

    fn add_model(&mut self, (front, back): Self::NewModel) -> Result<CmdResult> {
        cards::add(self.store, self.stack, front, back)
    }

    fn delete_model(&mut self, number: i64) -> Result<CmdResult> {
        cards::delete(self.store, number)
    }

    fn update_model(&mut self, _number: i64, _card: Card) -> Result<CmdResult> {
        unimplemented!("cards cannot be edited; delete the card and add it again")
    }
}

pub struct StacksManager<'a, S: DataStore> {
    store: &'a mut S,
}

impl<'a, S: DataStore> StacksManager<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }
}

impl<S: DataStore> ModelManager for StacksManager<'_, S> {
    /// The new stack name
    type Model = String;
    type NewModel = String;
    type Id = StackId;

    fn add_model(&mut self, name: String) -> Result<CmdResult> {
        stacks::create(self.store, &name)
    }

    fn delete_model(&mut self, id: StackId) -> Result<CmdResult> {
        stacks::delete(self.store, id)
    }

    fn update_model(&mut self, id: StackId, name: String) -> Result<CmdResult> {
        stacks::rename(self.store, id, &name)
    }
}
