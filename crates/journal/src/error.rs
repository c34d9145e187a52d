// In crates/journal/src/error.rs

use core_types::TradeId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Trade entry rejected: {0}")]
    Rejected(#[from] core_types::Error),

    #[error("No trade matches id '{0}'")]
    NotFound(String),

    #[error("Id prefix '{prefix}' matches {matches} trades")]
    AmbiguousId { prefix: String, matches: usize },

    #[error("Duplicate trade id '{0}'")]
    DuplicateId(TradeId),

    #[error("Failed to access journal file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Journal document is malformed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to write CSV export: {0}")]
    Csv(#[from] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
