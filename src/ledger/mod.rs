//! Ledger module - append-only transaction records per account.

mod ledger_model;

// Re-export the public interface
pub use ledger_model::{EntryCategory, Ledger, LedgerEntry};
