//! Error Types
//!
//! Every failure here degrades to a safe default at the UI boundary; none is fatal.

use thiserror::Error;

/// Quantity input that cannot become a [`crate::models::Quantity`]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QuantityError {
    #[error("quantity `{0}` is not a number")]
    NotANumber(String),

    #[error("quantity {value} is outside {min}..={max}")]
    OutOfRange { value: u8, min: u8, max: u8 },
}

/// Unknown category name
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown category `{0}`")]
pub struct CategoryError(pub String);

/// Reasons a form submission does not produce an item
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Discarded silently by the form.
    #[error("description is empty")]
    EmptyDescription,

    #[error(transparent)]
    InvalidQuantity(#[from] QuantityError),
}

/// Key-value slot access failures
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,

    #[error("storage call failed: {0}")]
    Js(String),

    #[error("failed to encode items: {0}")]
    Encode(String),
}

/// Reasons a persisted slot is treated as absent
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error("stored items are malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("stored items repeat id {0}")]
    DuplicateId(u64),

    #[error("stored id {0} is not a safe JSON number")]
    UnsafeId(u64),
}
