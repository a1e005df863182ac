use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CartError {
    #[error("Item not found: {0}")]
    NotFound(i64),

    /// Validation failure; the message is part of the caller contract and
    /// must keep this exact shape
    #[error("{field}: must be no less than {minimum}.")]
    BelowMinimum {
        field: &'static str,
        minimum: Decimal,
    },

    #[error("Database error: {0}")]
    Database(String),
}

pub type CartResult<T> = Result<T, CartError>;
