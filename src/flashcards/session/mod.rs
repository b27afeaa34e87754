//! # Interactive Card Session
//!
//! A [`CardSession`] drives one menu-based session scoped to a single stack:
//! the user picks a stack, then repeatedly picks an operation from
//! [`CardOperation`] until they choose to go back.
//!
//! ## Lifecycle
//!
//! ```text
//! start ──► stack picker ──► NoneSelected ──► disabled (menu is a no-op)
//!                       └──► Chosen(stack) ──► load cache ──► menu loop
//! ```
//!
//! The session caches the stack's cards as read by row id. The cache backs
//! card selection and is reloaded after every successful add or delete. The
//! table shown to the user is always fetched fresh with sequence numbering.
//!
//! ## Errors
//!
//! Bad input (blank lines, out-of-range numbers) is handled where it is typed
//! and the prompt is shown again. Store failures bubble out of
//! [`CardSession::run_menu_once`]; [`CardSession::run`] reports them and keeps
//! the session alive. Console failures end the session.
//!
//! All terminal I/O goes through the [`Console`] trait, so the whole flow runs
//! against a scripted console in tests.

use crate::commands::manager::{CardsManager, ModelManager};
use crate::commands::{cards, CmdMessage};
use crate::config::{cancel_keyword_or_default, FlashcardsConfig};
use crate::display::{display_rows, to_displays, CardDisplay, CARD_COLUMNS};
use crate::error::Result;
use crate::model::{Card, Numbering, Stack, StackId};
use crate::store::DataStore;
use tracing::{debug, warn};

pub mod console;
pub mod select;
pub mod stack_picker;

pub use console::Console;
use select::{choose_card, Selection};
use stack_picker::{choose_stack, StackSelection};

/// Operations offered by the card menu, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOperation {
    ShowCardsInStack,
    AddCardToStack,
    SeeAmountOfCardsInStack,
    DeleteCard,
    BackToMenu,
}

impl CardOperation {
    pub const ALL: [CardOperation; 5] = [
        CardOperation::ShowCardsInStack,
        CardOperation::AddCardToStack,
        CardOperation::SeeAmountOfCardsInStack,
        CardOperation::DeleteCard,
        CardOperation::BackToMenu,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            CardOperation::ShowCardsInStack => "Show cards in stack",
            CardOperation::AddCardToStack => "Add card to stack",
            CardOperation::SeeAmountOfCardsInStack => "See amount of cards in stack",
            CardOperation::DeleteCard => "Delete card",
            CardOperation::BackToMenu => "Back to menu",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOutcome {
    Continue,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOptions {
    pub clear_screen: bool,
    pub cancel_keyword: String,
    pub max_cell_width: usize,
}

impl Default for SessionOptions {
    fn default() -> Self {
        Self::from(&FlashcardsConfig::default())
    }
}

impl From<&FlashcardsConfig> for SessionOptions {
    fn from(config: &FlashcardsConfig) -> Self {
        Self {
            clear_screen: config.clear_screen,
            cancel_keyword: cancel_keyword_or_default(&config.cancel_keyword),
            max_cell_width: config.max_cell_width,
        }
    }
}

/// Fetches a stack's cards with sequence numbers and renders them as a table.
pub(crate) fn show_cards<S: DataStore, C: Console>(
    store: &S,
    console: &mut C,
    stack: StackId,
    max_cell_width: usize,
) -> Result<Vec<CardDisplay>> {
    let result = cards::list(store, stack)?;
    console.show_table(&CARD_COLUMNS, &display_rows(&result.listed_cards, max_cell_width));
    console.show_messages(&result.messages);
    Ok(result.listed_cards)
}

pub struct CardSession<'a, S: DataStore, C: Console> {
    store: &'a mut S,
    console: &'a mut C,
    options: SessionOptions,
    stack: Option<Stack>,
    cards: Vec<Card>,
    displays: Vec<CardDisplay>,
}

impl<'a, S: DataStore, C: Console> CardSession<'a, S, C> {
    /// Asks the user for a stack and loads its cards.
    ///
    /// If no stack is chosen the session is disabled: every menu call returns
    /// [`MenuOutcome::Exit`] without touching the store or the console.
    pub fn start(store: &'a mut S, console: &'a mut C, options: SessionOptions) -> Result<Self> {
        let stack = match choose_stack(&*store, console)? {
            StackSelection::Chosen(stack) => Some(stack),
            StackSelection::NoneSelected => None,
        };
        Self::open(store, console, options, stack)
    }

    /// Starts a session on a known stack, skipping the stack picker.
    pub fn for_stack(
        store: &'a mut S,
        console: &'a mut C,
        options: SessionOptions,
        stack: Stack,
    ) -> Result<Self> {
        Self::open(store, console, options, Some(stack))
    }

    fn open(
        store: &'a mut S,
        console: &'a mut C,
        options: SessionOptions,
        stack: Option<Stack>,
    ) -> Result<Self> {
        let mut session = Self {
            store,
            console,
            options,
            stack,
            cards: Vec::new(),
            displays: Vec::new(),
        };
        if let Some(id) = session.stack_id() {
            session.reload_cache(id)?;
        }
        debug!(stack = ?session.stack.as_ref().map(|s| &s.name), "session started");
        Ok(session)
    }

    pub fn is_disabled(&self) -> bool {
        self.stack.is_none()
    }

    pub fn stack(&self) -> Option<&Stack> {
        self.stack.as_ref()
    }

    pub fn cached_cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn cached_displays(&self) -> &[CardDisplay] {
        &self.displays
    }

    fn stack_id(&self) -> Option<StackId> {
        self.stack.as_ref().map(|s| s.id)
    }

    fn reload_cache(&mut self, stack: StackId) -> Result<()> {
        self.cards = self.store.read_all_cards(stack, Numbering::RowId)?;
        self.displays = to_displays(&self.cards);
        Ok(())
    }

    /// Runs the menu until the user goes back, reporting store errors in between.
    pub fn run(&mut self) -> Result<()> {
        loop {
            match self.run_menu_once() {
                Ok(MenuOutcome::Exit) => return Ok(()),
                Ok(MenuOutcome::Continue) => {}
                Err(e) if e.is_recoverable() => {
                    warn!(error = %e, "card operation failed");
                    self.console.show_message(&CmdMessage::error(e.to_string()));
                    self.console.pause()?;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Shows the menu once and performs the chosen operation.
    pub fn run_menu_once(&mut self) -> Result<MenuOutcome> {
        let Some(stack) = self.stack_id() else {
            return Ok(MenuOutcome::Exit);
        };

        let labels: Vec<String> = CardOperation::ALL
            .iter()
            .map(|op| op.label().to_string())
            .collect();
        let title = match &self.stack {
            Some(s) => format!("Choose an operation ({}):", s.name),
            None => "Choose an operation:".to_string(),
        };
        let choice = self.console.select(&title, &labels)?;
        let Some(&operation) = CardOperation::ALL.get(choice) else {
            self.console
                .show_message(&CmdMessage::error("Error- Unknown menu choice"));
            return Ok(MenuOutcome::Continue);
        };
        debug!(?operation, %stack, "menu choice");

        match operation {
            CardOperation::ShowCardsInStack => {
                show_cards(&*self.store, self.console, stack, self.options.max_cell_width)?;
                self.console.pause()?;
            }
            CardOperation::AddCardToStack => {
                self.add_card(stack)?;
                self.console.pause()?;
            }
            CardOperation::SeeAmountOfCardsInStack => {
                let result = cards::count(&*self.store, stack)?;
                self.console.show_messages(&result.messages);
                self.console.pause()?;
            }
            CardOperation::DeleteCard => {
                let selection = choose_card(
                    &*self.store,
                    self.console,
                    stack,
                    &self.cards,
                    &self.options,
                )?;
                match selection {
                    Selection::Cancelled => {}
                    Selection::Chosen(number) => {
                        self.delete_card(stack, number)?;
                        self.console.pause()?;
                    }
                }
            }
            CardOperation::BackToMenu => return Ok(MenuOutcome::Exit),
        }
        Ok(MenuOutcome::Continue)
    }

    fn add_card(&mut self, stack: StackId) -> Result<()> {
        let front = self
            .console
            .ask("Enter what you want to be on front of the card")?;
        let back = self
            .console
            .ask("Enter what you want to be on back of the card")?;

        let result = CardsManager::new(&mut *self.store, stack).add_model((front, back))?;
        self.console.show_messages(&result.messages);
        self.reload_cache(stack)
    }

    fn delete_card(&mut self, stack: StackId, number: i64) -> Result<()> {
        let confirmed = self.console.confirm_key(
            "Are you sure you want to delete this card? (To confirm deletion press Enter)",
        )?;
        if !confirmed {
            self.console
                .show_message(&CmdMessage::warning("Card deletion cancelled!"));
            return Ok(());
        }

        let result = CardsManager::new(&mut *self.store, stack).delete_model(number)?;
        self.console.show_messages(&result.messages);
        self.reload_cache(stack)
    }
}
