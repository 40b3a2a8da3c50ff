//! Accounts module - cash sub-accounts and transfer operations.

mod accounts_model;


// Re-export the public interface
pub use accounts_model::{transfer, Account, DepositChannel};
