use thiserror::Error;

#[derive(Error, Debug)]
pub enum FlashcardsError {
    #[error("Card not found: {0}")]
    CardNotFound(i64),

    #[error("Stack not found: {0}")]
    StackNotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),

    #[error("Console error: {0}")]
    Console(String),
}

impl FlashcardsError {
    /// Errors coming from the data layer. An interactive session reports these
    /// and keeps running; anything else ends the session.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            FlashcardsError::CardNotFound(_)
                | FlashcardsError::StackNotFound(_)
                | FlashcardsError::Database(_)
                | FlashcardsError::Store(_)
                | FlashcardsError::Api(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, FlashcardsError>;
