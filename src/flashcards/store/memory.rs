use super::DataStore;
use crate::error::{FlashcardsError, Result};
use crate::model::{Card, NewCard, Numbering, Stack, StackId};
use chrono::Utc;
use std::collections::BTreeMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct InMemoryStore {
    stacks: BTreeMap<StackId, Stack>,
    cards: BTreeMap<i64, Card>,
    next_stack_id: i64,
    next_card_id: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DataStore for InMemoryStore {
    fn init(&mut self) -> Result<()> {
        Ok(())
    }

    fn read_all_cards(&self, stack: StackId, numbering: Numbering) -> Result<Vec<Card>> {
        Ok(self
            .cards
            .values()
            .filter(|c| c.stack_id == stack)
            .enumerate()
            .map(|(i, c)| {
                let mut card = c.clone();
                if numbering == Numbering::Sequence {
                    card.number = i as i64 + 1;
                }
                card
            })
            .collect())
    }

    fn count_cards(&self, stack: StackId) -> Result<usize> {
        Ok(self.cards.values().filter(|c| c.stack_id == stack).count())
    }

    fn insert_card(&mut self, card: &NewCard) -> Result<i64> {
        if !self.stacks.contains_key(&card.stack_id) {
            return Err(FlashcardsError::Store(format!(
                "Stack {} does not exist",
                card.stack_id
            )));
        }
        self.next_card_id += 1;
        let number = self.next_card_id;
        self.cards.insert(
            number,
            Card {
                number,
                stack_id: card.stack_id,
                front: card.front.clone(),
                back: card.back.clone(),
            },
        );
        Ok(number)
    }

    fn delete_card(&mut self, number: i64) -> Result<bool> {
        Ok(self.cards.remove(&number).is_some())
    }

    fn read_all_stacks(&self) -> Result<Vec<Stack>> {
        let mut stacks: Vec<Stack> = self.stacks.values().cloned().collect();
        stacks.sort_by_key(|s| s.name.to_lowercase());
        Ok(stacks)
    }

    fn insert_stack(&mut self, name: &str) -> Result<StackId> {
        if self.stacks.values().any(|s| s.name == name) {
            return Err(FlashcardsError::Store(format!(
                "Stack name already in use: {}",
                name
            )));
        }
        self.next_stack_id += 1;
        let id = StackId(self.next_stack_id);
        self.stacks.insert(
            id,
            Stack {
                id,
                name: name.to_string(),
                created_at: Utc::now(),
            },
        );
        Ok(id)
    }

    fn delete_stack(&mut self, id: StackId) -> Result<bool> {
        if self.stacks.remove(&id).is_none() {
            return Ok(false);
        }
        self.cards.retain(|_, c| c.stack_id != id);
        Ok(true)
    }

    fn rename_stack(&mut self, id: StackId, name: &str) -> Result<bool> {
        match self.stacks.get_mut(&id) {
            Some(stack) => {
                stack.name = name.to_string();
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_stack(mut self, name: &str) -> Self {
            self.store.insert_stack(name).unwrap();
            self
        }

        /// Adds `count` cards ("Front N" / "Back N") to the named stack, creating it if needed.
        pub fn with_cards(mut self, stack: &str, count: usize) -> Self {
            let id = self.stack_id(stack);
            for i in 0..count {
                let card = NewCard::new(id, format!("Front {}", i + 1), format!("Back {}", i + 1));
                self.store.insert_card(&card).unwrap();
            }
            self
        }

        pub fn stack_id(&mut self, name: &str) -> StackId {
            let existing = self
                .store
                .read_all_stacks()
                .unwrap()
                .into_iter()
                .find(|s| s.name == name);
            match existing {
                Some(stack) => stack.id,
                None => self.store.insert_stack(name).unwrap(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;

    #[test]
    fn sequence_numbers_restart_per_stack() {
        let mut fixture = StoreFixture::new().with_cards("A", 2).with_cards("B", 2);
        let b = fixture.stack_id("B");

        let by_id = fixture.store.read_all_cards(b, Numbering::RowId).unwrap();
        assert_eq!(by_id.iter().map(|c| c.number).collect::<Vec<_>>(), vec![3, 4]);

        let seq = fixture.store.read_all_cards(b, Numbering::Sequence).unwrap();
        assert_eq!(seq.iter().map(|c| c.number).collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn delete_stack_removes_its_cards() {
        let mut fixture = StoreFixture::new().with_cards("A", 3).with_cards("B", 1);
        let a = fixture.stack_id("A");
        let b = fixture.stack_id("B");

        assert!(fixture.store.delete_stack(a).unwrap());
        assert_eq!(fixture.store.count_cards(a).unwrap(), 0);
        assert_eq!(fixture.store.count_cards(b).unwrap(), 1);
        assert!(!fixture.store.delete_stack(a).unwrap());
    }

    #[test]
    fn insert_card_requires_existing_stack() {
        let mut store = InMemoryStore::new();
        let err = store.insert_card(&NewCard::new(StackId(5), "f", "b"));
        assert!(err.is_err());
    }

    #[test]
    fn stack_names_are_unique() {
        let mut store = InMemoryStore::new();
        store.insert_stack("Same").unwrap();
        assert!(store.insert_stack("Same").is_err());
    }

    #[test]
    fn stacks_sorted_by_name() {
        let fixture = StoreFixture::new().with_stack("zeta").with_stack("Alpha");
        let names: Vec<String> = fixture
            .store
            .read_all_stacks()
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Alpha", "zeta"]);
    }
}
