use crate::commands::{CmdMessage, CmdResult};
use crate::display::to_displays;
use crate::error::{FlashcardsError, Result};
use crate::model::{Card, NewCard, Numbering, StackId};
use crate::store::DataStore;

pub fn add<S: DataStore>(
    store: &mut S,
    stack: StackId,
    front: String,
    back: String,
) -> Result<CmdResult> {
    let new_card = NewCard::new(stack, front, back);
    let number = store.insert_card(&new_card)?;

    let mut result = CmdResult::default();
    result.affected_cards.push(Card {
        number,
        stack_id: new_card.stack_id,
        front: new_card.front,
        back: new_card.back,
    });
    result.add_message(CmdMessage::success("Card added successfully!"));
    Ok(result)
}

/// Lists a stack's cards numbered by their position, as shown to users.
pub fn list<S: DataStore>(store: &S, stack: StackId) -> Result<CmdResult> {
    let cards = store.read_all_cards(stack, Numbering::Sequence)?;
    let mut result = CmdResult::default().with_listed_cards(to_displays(&cards));
    if cards.is_empty() {
        result.add_message(CmdMessage::info("No cards in this stack yet."));
    }
    Ok(result)
}

pub fn count<S: DataStore>(store: &S, stack: StackId) -> Result<CmdResult> {
    let count = store.count_cards(stack)?;
    let noun = if count == 1 { "card" } else { "cards" };
    let mut result = CmdResult::default().with_count(count);
    result.add_message(CmdMessage::info(format!(
        "This stack has {} {} in it",
        count, noun
    )));
    Ok(result)
}

/// Deletes a card by its row id.
pub fn delete<S: DataStore>(store: &mut S, number: i64) -> Result<CmdResult> {
    if !store.delete_card(number)? {
        return Err(FlashcardsError::CardNotFound(number));
    }
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Card deleted successfully!"));
    Ok(result)
}

/// Deletes the card shown at `position` (1-based) in the stack's listing.
pub fn delete_at<S: DataStore>(store: &mut S, stack: StackId, position: usize) -> Result<CmdResult> {
    let cards = store.read_all_cards(stack, Numbering::RowId)?;
    let card = position
        .checked_sub(1)
        .and_then(|i| cards.get(i))
        .ok_or_else(|| {
            FlashcardsError::Api(format!(
                "Card number {} is out of range (stack has {} cards)",
                position,
                cards.len()
            ))
        })?;
    delete(store, card.number)
}
