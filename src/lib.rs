//! Corretora core - accounting logic for a single-session brokerage
//! simulator.
//!
//! The crate models one user's bank and investment cash accounts, a
//! portfolio with weighted-average cost basis, an append-only ledger per
//! account, and a simulated dividend payout routine. All state lives in
//! process memory for one run; the interactive driver in `main.rs` is a
//! thin menu layer over these modules.

pub mod accounts;
pub mod assets;
pub mod constants;
pub mod errors;
pub mod ledger;
pub mod portfolio;
pub mod users;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
