//! Core error types for the simulator.
//!
//! Every accounting error is a local, recoverable condition: the rejected
//! operation performs no mutation and appends no ledger entry, and the
//! caller reports the condition and re-prompts.

use rust_decimal::Decimal;
use thiserror::Error;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the accounting core.
#[derive(Error, Debug)]
pub enum Error {
    /// Non-positive amount or quantity.
    #[error("Amount or quantity must be positive, got {0}")]
    InvalidAmount(Decimal),

    #[error("Insufficient funds: requested {requested}, available {available}")]
    InsufficientFunds {
        requested: Decimal,
        available: Decimal,
    },

    #[error("Insufficient position in {ticker}: requested {requested}, held {held}")]
    InsufficientPosition {
        ticker: String,
        requested: u32,
        held: u32,
    },

    #[error("Asset '{0}' not found in catalog")]
    AssetNotFound(String),

    #[error("No holding for '{0}' in portfolio")]
    HoldingNotFound(String),

    #[error("Portfolio position limit of {limit} reached")]
    CapacityExceeded { limit: usize },

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),
}

/// Validation errors for registration and other user-provided data.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
