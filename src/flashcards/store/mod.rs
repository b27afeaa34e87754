//! # Storage Layer
//!
//! The [`DataStore`] trait is the row store every other layer talks to. It is a
//! synchronous CRUD facade over stacks and the cards that belong to them.
//!
//! ## Implementations
//!
//! - [`sqlite::SqliteStore`]: Production storage in a single SQLite file.
//!   Every call opens its own connection and drops it before returning, so a
//!   session never holds the database open between prompts.
//!
//! - [`memory::InMemoryStore`]: In-memory storage for testing.
//!   Same numbering, cascade and uniqueness rules, no persistence.
//!
//! ## Card numbering
//!
//! Cards are read back with a [`Numbering`]:
//! - `RowId` yields the persistent identifier, which is what `delete_card` takes.
//! - `Sequence` yields 1-based positions within the stack, for display.
//!
//! Callers must not assume the two agree; after a deletion they stop agreeing.
//!
//! ## Schema
//!
//! ```text
//! stacks(id INTEGER PRIMARY KEY, name TEXT UNIQUE, created_at TEXT)
//! cards(cardnumber INTEGER PRIMARY KEY, front TEXT, back TEXT,
//!       FK_stack_id INTEGER REFERENCES stacks(id) ON DELETE CASCADE)
//! ```

use crate::error::Result;
use crate::model::{Card, NewCard, Numbering, Stack, StackId};

pub mod memory;
pub mod sqlite;

/// Abstract interface for card and stack storage.
pub trait DataStore {
    /// Create the schema if it does not exist yet
    fn init(&mut self) -> Result<()>;

    /// All cards of a stack, ordered by row id
    fn read_all_cards(&self, stack: StackId, numbering: Numbering) -> Result<Vec<Card>>;

    /// Number of cards in a stack
    fn count_cards(&self, stack: StackId) -> Result<usize>;

    /// Insert a card, returning its new row id
    fn insert_card(&mut self, card: &NewCard) -> Result<i64>;

    /// Delete a card by row id. Returns `false` when no card matched.
    fn delete_card(&mut self, number: i64) -> Result<bool>;

    /// All stacks, ordered by name
    fn read_all_stacks(&self) -> Result<Vec<Stack>>;

    /// Insert a stack, returning its id
    fn insert_stack(&mut self, name: &str) -> Result<StackId>;

    /// Delete a stack and all of its cards. Returns `false` when no stack matched.
    fn delete_stack(&mut self, id: StackId) -> Result<bool>;

    /// Rename a stack. Returns `false` when no stack matched.
    fn rename_stack(&mut self, id: StackId, name: &str) -> Result<bool>;
}
