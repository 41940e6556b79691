use thiserror::Error;

use crate::models::EventStatus;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition { from: EventStatus, to: EventStatus },
}

pub type Result<T, E = BoardError> = std::result::Result<T, E>;
