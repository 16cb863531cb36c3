//! Error types for the review store and scheduler.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Item not found: {0}")]
    NotFound(i64),

    #[error("No item is currently up for review")]
    NoCurrentItem,

    #[error("Review date out of range after {0}")]
    DateOutOfRange(chrono::NaiveDate),

    #[error("Record {0} is missing a question or an answer")]
    InvalidRecord(usize),

    #[error("Invalid rating '{0}', expected 'right' or 'wrong'")]
    InvalidRating(String),
}
