use super::table::print_table;
use chrono::{DateTime, Utc};
use colored::Colorize;
use flashcards::api::{CmdMessage, MessageLevel};
use flashcards::config::{FlashcardsConfig, CONFIG_KEYS};
use flashcards::display::{display_rows, CardDisplay, CARD_COLUMNS};
use flashcards::model::Stack;
use timeago::Formatter;

pub fn print_message(message: &CmdMessage) {
    match message.level {
        MessageLevel::Info => println!("{}", message.content.yellow()),
        MessageLevel::Success => println!("{}", message.content.green()),
        MessageLevel::Warning => println!("{}", message.content.yellow().bold()),
        MessageLevel::Error => println!("{}", message.content.red()),
    }
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        print_message(message);
    }
}

pub fn print_cards(cards: &[CardDisplay], max_cell_width: usize) {
    print_table(&CARD_COLUMNS, &display_rows(cards, max_cell_width));
}

pub fn print_stacks(stacks: &[Stack]) {
    if stacks.is_empty() {
        return;
    }
    let rows: Vec<Vec<String>> = stacks
        .iter()
        .map(|s| vec![s.name.clone(), format_time_ago(s.created_at)])
        .collect();
    print_table(&["Stack", "Created"], &rows);
}

pub fn print_config(config: &FlashcardsConfig) {
    for key in CONFIG_KEYS {
        if let Some(value) = config.get(key) {
            println!("{} = {}", key, value);
        }
    }
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}
