use thiserror::Error;

use crate::core::models::ids::AlgorithmId;
use crate::core::models::record::Side;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please enter an algorithm name")]
    EmptyName,
    #[error("Please enter a formula")]
    EmptyFormula,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    #[error("Algorithm {0} not found")]
    NotFound(AlgorithmId),

    #[error("Record limit of {limit} reached")]
    CapacityExceeded { limit: usize },

    #[error("No unused algorithm id is left")]
    IdsExhausted,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Top-layer sticker index {0} is out of range (0-8)")]
    TopIndex(usize),

    #[error("Sticker index {index} on the {side} side is out of range (0-2)")]
    SideIndex { side: Side, index: usize },

    #[error("No form is open")]
    NoSession,
}
