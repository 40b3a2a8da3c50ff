//! Ledger domain models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Category tag for a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryCategory {
    /// Instant deposit, no fee.
    DepositPix,
    /// Delayed deposit, 1% fee.
    DepositTed,
    TransferIn,
    TransferOut,
    /// Debit towards an account outside the simulation.
    ExternalTransfer,
    Buy,
    Sell,
    Payout,
}

impl EntryCategory {
    /// Stable string form for display.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryCategory::DepositPix => "DEPOSIT_PIX",
            EntryCategory::DepositTed => "DEPOSIT_TED",
            EntryCategory::TransferIn => "TRANSFER_IN",
            EntryCategory::TransferOut => "TRANSFER_OUT",
            EntryCategory::ExternalTransfer => "EXTERNAL_TRANSFER",
            EntryCategory::Buy => "BUY",
            EntryCategory::Sell => "SELL",
            EntryCategory::Payout => "PAYOUT",
        }
    }
}

/// One immutable record of a balance-affecting operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerEntry {
    pub timestamp: DateTime<Utc>,
    pub category: EntryCategory,
    pub description: String,
    /// Signed amount applied to the balance; negative for debits.
    pub amount: Decimal,
    pub fee: Decimal,
    /// Balance snapshot taken immediately after the operation.
    pub balance_after: Decimal,
}

/// Append-only, insertion-ordered record of one account's operations.
///
/// Entries are never mutated or removed after creation; only the core can
/// append. Growth is unbounded.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    entries: Vec<LedgerEntry>,
}

impl Ledger {
    pub fn new() -> Self {
        Ledger::default()
    }

    pub(crate) fn append(&mut self, entry: LedgerEntry) {
        self.entries.push(entry);
    }

    /// Entries in insertion order, for the reporting collaborator.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
