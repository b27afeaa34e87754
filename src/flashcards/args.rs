use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "flashcards", version)]
#[command(about = "Study flashcards from the terminal", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Use this database file instead of the configured one
    #[arg(long, global = true, value_name = "PATH")]
    pub db: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Interactive session: pick a stack, then manage its cards (default)
    #[command(alias = "s")]
    Study {
        /// Skip the stack menu and open this stack
        stack: Option<String>,
    },

    /// Add a card to a stack
    #[command(alias = "a")]
    Add {
        /// Name of the stack
        stack: String,
        /// Text on the front of the card
        front: String,
        /// Text on the back of the card
        back: String,
    },

    /// List the cards in a stack
    #[command(alias = "ls")]
    List {
        /// Name of the stack
        stack: String,
    },

    /// Print how many cards a stack holds
    Count {
        /// Name of the stack
        stack: String,
    },

    /// Delete a card by the number shown in `list`
    #[command(alias = "rm")]
    Delete {
        /// Name of the stack
        stack: String,
        /// Card number as shown by `flashcards list`
        number: usize,
    },

    /// Manage stacks
    Stack {
        #[command(subcommand)]
        action: StackCommands,
    },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., clear-screen)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Create the database if it does not exist
    Init,
}

#[derive(Subcommand, Debug)]
pub enum StackCommands {
    /// List all stacks
    #[command(alias = "ls")]
    List,

    /// Create a new stack
    #[command(alias = "new")]
    Create { name: String },

    /// Delete a stack and every card in it
    #[command(alias = "rm")]
    Delete { name: String },

    /// Rename a stack
    Rename { name: String, new_name: String },
}
