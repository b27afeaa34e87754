//! # Flashcards Architecture
//!
//! Flashcards is a library for managing stacks of study cards, with a terminal
//! client on top. The client is one consumer of the library, not the other way
//! around.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders tables, reads keys and lines   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                │                               │
//!                ▼                               ▼
//! ┌──────────────────────────────┐ ┌────────────────────────────┐
//! │  API Layer (api.rs)          │ │  Session Layer (session/)  │
//! │  - Stack names → ids         │ │  - Interactive card menu   │
//! │  - Returns CmdResult         │ │  - I/O via Console trait   │
//! └──────────────────────────────┘ └────────────────────────────┘
//!                │                               │
//!                ▼                               ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic over a DataStore, no I/O                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - SqliteStore (production), InMemoryStore (testing)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Card numbers
//!
//! Users see cards numbered 1..n within a stack. Those numbers are positions
//! and change after a deletion; the store's row ids do not. Anything that
//! deletes resolves the position against a loaded list first and deletes by
//! row id. See [`model::Numbering`].
//!
//! ## Testing Strategy
//!
//! - **Commands** and **stores**: unit tests against `InMemoryStore` and a
//!   temporary SQLite file.
//! - **Session**: scripted runs through `ScriptedConsole`, which replays menu
//!   choices, lines and keypresses.
//! - **CLI**: `tests/cli.rs` drives the binary with `assert_cmd`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade for non-interactive operations
//! - [`session`]: The interactive card session and its console abstraction
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Stack`, `Card`, `NewCard`)
//! - [`display`]: Display projections used for tables
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod model;
pub mod session;
pub mod store;
