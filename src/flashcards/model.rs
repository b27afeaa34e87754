use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StackId(pub i64);

impl std::fmt::Display for StackId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A named group of cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stack {
    pub id: StackId,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// How a store fills in [`Card::number`] when reading cards back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Numbering {
    /// The persistent row identifier. Deletion is keyed by this value.
    RowId,
    /// The 1-based position of the card inside its stack, ordered by row id.
    Sequence,
}

/// A persisted card.
///
/// `number` is opaque to callers: depending on the [`Numbering`] it was read
/// with, it is either the row id or a display sequence number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub number: i64,
    pub stack_id: StackId,
    pub front: String,
    pub back: String,
}

/// A card that has not been stored yet. The store assigns its identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCard {
    pub stack_id: StackId,
    pub front: String,
    pub back: String,
}

impl NewCard {
    pub fn new(stack_id: StackId, front: impl Into<String>, back: impl Into<String>) -> Self {
        Self {
            stack_id,
            front: front.into(),
            back: back.into(),
        }
    }
}
