//! Error types for the cart and its backing store.

use thiserror::Error;

/// Errors returned by cart mutations.
///
/// An absent lesson id is not an error: `remove` and `update_quantity`
/// report it as `false`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CartError {
    /// The lesson has no usable identifier.
    #[error("Invalid lesson data")]
    InvalidLesson,

    /// The requested quantity is outside the configured bounds.
    #[error("Quantity must be between {min} and {max}")]
    QuantityOutOfRange { min: u32, max: u32 },

    /// Merging with an existing entry would exceed the per-lesson maximum.
    #[error("Maximum quantity per lesson is {max}")]
    MaxQuantityExceeded { max: u32 },

    /// An order was requested from an empty cart.
    #[error("Cannot place order with empty cart")]
    EmptyCart,
}

/// Errors raised by a [`KeyValueStore`](super::KeyValueStore).
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),
}
