//! Terminal side of the binary: the real [`Console`](flashcards::session::Console),
//! table rendering and message printing. Not part of the library API.

pub mod print;
pub mod table;
pub mod terminal;
