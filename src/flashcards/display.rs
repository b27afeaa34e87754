//! Display projections of stored models.
//!
//! A [`CardDisplay`] is what the table renderer sees: the foreign key is gone
//! and the text is flattened so every card fits on a single table row.

use crate::model::Card;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const CARD_COLUMNS: [&str; 3] = ["Card Number", "Front", "Back"];

pub const DEFAULT_CELL_WIDTH: usize = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardDisplay {
    pub card_number: i64,
    pub front: String,
    pub back: String,
}

impl From<&Card> for CardDisplay {
    fn from(card: &Card) -> Self {
        Self {
            card_number: card.number,
            front: card.front.clone(),
            back: card.back.clone(),
        }
    }
}

impl CardDisplay {
    /// Row cells in [`CARD_COLUMNS`] order.
    pub fn cells(&self, max_width: usize) -> Vec<String> {
        vec![
            self.card_number.to_string(),
            fit_cell(&self.front, max_width),
            fit_cell(&self.back, max_width),
        ]
    }
}

pub fn to_displays(cards: &[Card]) -> Vec<CardDisplay> {
    cards.iter().map(CardDisplay::from).collect()
}

pub fn display_rows(displays: &[CardDisplay], max_width: usize) -> Vec<Vec<String>> {
    displays.iter().map(|d| d.cells(max_width)).collect()
}

fn fit_cell(text: &str, max_width: usize) -> String {
    let flat: String = text
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.width() <= max_width {
        return flat;
    }
    truncate_to_width(&flat, max_width)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StackId;

    fn card(number: i64, front: &str, back: &str) -> Card {
        Card {
            number,
            stack_id: StackId(7),
            front: front.into(),
            back: back.into(),
        }
    }

    #[test]
    fn maps_number_and_text() {
        let display = CardDisplay::from(&card(3, "Hola", "Hello"));
        assert_eq!(display.card_number, 3);
        assert_eq!(display.front, "Hola");
        assert_eq!(display.back, "Hello");
    }

    #[test]
    fn cells_follow_column_order() {
        let display = CardDisplay::from(&card(12, "front", "back"));
        assert_eq!(display.cells(DEFAULT_CELL_WIDTH), vec!["12", "front", "back"]);
        assert_eq!(CARD_COLUMNS, ["Card Number", "Front", "Back"]);
    }

    #[test]
    fn flattens_newlines() {
        let display = CardDisplay::from(&card(1, "line one\nline two", "b"));
        assert_eq!(display.cells(DEFAULT_CELL_WIDTH)[1], "line one line two");
    }

    #[test]
    fn truncates_long_text_by_width() {
        let display = CardDisplay::from(&card(1, "abcdefghij", "日本語日本語"));
        let cells = display.cells(6);
        assert_eq!(cells[1], "abcde…");
        assert!(cells[2].ends_with('…'));
        assert!(cells[2].width() <= 6);
    }
}
