use thiserror::Error;

#[derive(Error, Debug)]
pub enum NotizError {
    /// A note id or shelf position that does not resolve to a note.
    #[error("Note not found: {0}")]
    NotFound(String),

    /// Coarse failure from the access layer. One fixed message per
    /// operation, regardless of the underlying cause.
    #[error("{0}")]
    RequestFailed(String),

    /// Rejected user input, e.g. an empty title.
    #[error("{0}")]
    Validation(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    App(String),
}

pub type Result<T> = std::result::Result<T, NotizError>;
