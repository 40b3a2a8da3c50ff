//! Account domain model and cash operations.
//!
//! Every operation is atomic check-then-act: validation happens before any
//! mutation, so a rejected operation leaves the balance and the ledger
//! untouched.

use chrono::Utc;
use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::TED_FEE_RATE;
use crate::errors::{Error, Result};
use crate::ledger::{EntryCategory, Ledger, LedgerEntry};

/// Channel used for a bank deposit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DepositChannel {
    /// Instant transfer, no fee.
    Pix,
    /// Delayed transfer, 1% fee.
    Ted,
}

impl DepositChannel {
    /// Fee charged when depositing `amount` through this channel.
    pub fn fee_for(&self, amount: Decimal) -> Decimal {
        match self {
            DepositChannel::Pix => Decimal::ZERO,
            DepositChannel::Ted => amount * TED_FEE_RATE,
        }
    }

    fn category(&self) -> EntryCategory {
        match self {
            DepositChannel::Pix => EntryCategory::DepositPix,
            DepositChannel::Ted => EntryCategory::DepositTed,
        }
    }

    fn description(&self) -> &'static str {
        match self {
            DepositChannel::Pix => "PIX deposit",
            DepositChannel::Ted => "TED deposit",
        }
    }
}

/// A cash sub-account with its own append-only ledger.
///
/// Invariant: the balance never goes negative. Any operation that would
/// violate this is rejected before mutation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub name: String,
    balance: Decimal,
    ledger: Ledger,
}

impl Account {
    /// Creates an account with a zero balance and an empty ledger.
    pub fn new(name: impl Into<String>) -> Self {
        Account {
            name: name.into(),
            balance: Decimal::ZERO,
            ledger: Ledger::new(),
        }
    }

    pub fn balance(&self) -> Decimal {
        self.balance
    }

    /// The account's ledger, for the reporting collaborator.
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    /// Deposits `amount` through `channel`, crediting `amount - fee`.
    ///
    /// Returns the credited amount.
    pub fn deposit(&mut self, amount: Decimal, channel: DepositChannel) -> Result<Decimal> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount(amount));
        }
        let fee = channel.fee_for(amount);
        let credited = amount - fee;
        self.balance += credited;
        self.record(
            channel.category(),
            channel.description().to_string(),
            credited,
            fee,
        );
        debug!(
            "Deposited {} into '{}' via {:?} (fee {}), balance now {}",
            credited, self.name, channel, fee, self.balance
        );
        Ok(credited)
    }

    /// Debits `amount` towards an account outside the simulation.
    ///
    /// There is no destination account; only the debit and its ledger
    /// entry exist on this side.
    pub fn transfer_external(&mut self, amount: Decimal, destination: &str) -> Result<()> {
        if amount <= Decimal::ZERO {
            return Err(Error::InvalidAmount(amount));
        }
        self.debit(
            amount,
            EntryCategory::ExternalTransfer,
            format!("External transfer to {destination}"),
        )
    }

    /// Unconditionally credits `amount` with a ledger entry.
    pub(crate) fn credit(&mut self, amount: Decimal, category: EntryCategory, description: String) {
        self.balance += amount;
        self.record(category, description, amount, Decimal::ZERO);
    }

    /// Debits `amount` with a ledger entry, rejecting overdrafts.
    pub(crate) fn debit(
        &mut self,
        amount: Decimal,
        category: EntryCategory,
        description: String,
    ) -> Result<()> {
        if amount > self.balance {
            return Err(Error::InsufficientFunds {
                requested: amount,
                available: self.balance,
            });
        }
        self.balance -= amount;
        self.record(category, description, -amount, Decimal::ZERO);
        Ok(())
    }

    fn record(
        &mut self,
        category: EntryCategory,
        description: String,
        amount: Decimal,
        fee: Decimal,
    ) {
        self.ledger.append(LedgerEntry {
            timestamp: Utc::now(),
            category,
            description,
            amount,
            fee,
            balance_after: self.balance,
        });
    }
}

/// Moves `amount` from `source` to `destination`, conserving total cash.
///
/// One negative entry lands on the source ledger and one positive entry on
/// the destination ledger, sharing the same description.
pub fn transfer(source: &mut Account, destination: &mut Account, amount: Decimal) -> Result<()> {
    if amount <= Decimal::ZERO {
        return Err(Error::InvalidAmount(amount));
    }
    if amount > source.balance {
        return Err(Error::InsufficientFunds {
            requested: amount,
            available: source.balance,
        });
    }
    let description = format!("Transfer {} -> {}", source.name, destination.name);
    source.balance -= amount;
    source.record(
        EntryCategory::TransferOut,
        description.clone(),
        -amount,
        Decimal::ZERO,
    );
    destination.balance += amount;
    destination.record(EntryCategory::TransferIn, description, amount, Decimal::ZERO);
    debug!(
        "Transferred {} from '{}' to '{}'",
        amount, source.name, destination.name
    );
    Ok(())
}
