use crate::config::FlashcardsConfig;
use crate::display::CardDisplay;
use crate::model::{Card, Stack};
use std::path::PathBuf;

pub mod cards;
pub mod config;
pub mod init;
pub mod manager;
pub mod stacks;

/// Where flashcards keeps its files.
#[derive(Debug, Clone)]
pub struct FlashcardsPaths {
    pub data_dir: PathBuf,
    pub database: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected_cards: Vec<Card>,
    pub listed_cards: Vec<CardDisplay>,
    pub listed_stacks: Vec<Stack>,
    pub count: Option<usize>,
    pub config: Option<FlashcardsConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_listed_cards(mut self, cards: Vec<CardDisplay>) -> Self {
        self.listed_cards = cards;
        self
    }

    pub fn with_listed_stacks(mut self, stacks: Vec<Stack>) -> Self {
        self.listed_stacks = stacks;
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn with_config(mut self, config: FlashcardsConfig) -> Self {
        self.config = Some(config);
        self
    }
}
