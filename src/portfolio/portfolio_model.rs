//! Portfolio state and trade accounting.

use log::debug;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::holdings_model::Holding;
use crate::accounts::Account;
use crate::assets::AssetCatalog;
use crate::errors::{Error, Result};
use crate::ledger::EntryCategory;

/// Holdings of one investment account, keyed by instrument ticker and
/// kept in first-buy order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    holdings: Vec<Holding>,
    /// Optional cap on the number of distinct positions. `None` means
    /// unbounded growth.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    position_limit: Option<usize>,
}

impl Portfolio {
    /// Creates an empty, unbounded portfolio.
    pub fn new() -> Self {
        Portfolio::default()
    }

    /// Creates an empty portfolio capped at `limit` distinct positions.
    pub fn with_position_limit(limit: usize) -> Self {
        Portfolio {
            holdings: Vec::new(),
            position_limit: Some(limit),
        }
    }

    /// Holdings in first-buy order.
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    pub fn holding(&self, ticker: &str) -> Option<&Holding> {
        self.holdings.iter().find(|h| h.ticker == ticker)
    }

    pub fn is_empty(&self) -> bool {
        self.holdings.is_empty()
    }

    /// Buys `quantity` units of `ticker`, paying `price * quantity` from
    /// `cash`.
    ///
    /// The position-limit check runs before the cash debit, so a rejected
    /// buy never touches the balance and no refund path exists. On success
    /// the holding's average cost becomes the quantity-weighted mean of all
    /// buys to date.
    pub fn buy(
        &mut self,
        catalog: &AssetCatalog,
        cash: &mut Account,
        ticker: &str,
        quantity: u32,
    ) -> Result<()> {
        if quantity == 0 {
            return Err(Error::InvalidAmount(Decimal::ZERO));
        }
        let instrument = catalog.lookup(ticker)?;
        let index = self
            .holdings
            .iter()
            .position(|h| h.ticker == instrument.ticker);
        if index.is_none() {
            if let Some(limit) = self.position_limit {
                if self.holdings.len() >= limit {
                    return Err(Error::CapacityExceeded { limit });
                }
            }
        }

        let cost = instrument.price * Decimal::from(quantity);
        cash.debit(
            cost,
            EntryCategory::Buy,
            format!("Buy {} {}", quantity, instrument.ticker),
        )?;

        match index {
            Some(i) => self.holdings[i].apply_buy(quantity, instrument.price),
            None => self.holdings.push(Holding {
                ticker: instrument.ticker.clone(),
                quantity,
                average_cost: instrument.price,
            }),
        }
        debug!(
            "Bought {} {} at {} (cost {})",
            quantity, instrument.ticker, instrument.price, cost
        );
        Ok(())
    }

    /// Sells `quantity` units of `ticker` at the current catalog price,
    /// crediting the proceeds to `cash`.
    ///
    /// Average cost is untouched on partial sells; selling the full held
    /// quantity removes the holding. Returns the proceeds.
    pub fn sell(
        &mut self,
        catalog: &AssetCatalog,
        cash: &mut Account,
        ticker: &str,
        quantity: u32,
    ) -> Result<Decimal> {
        if quantity == 0 {
            return Err(Error::InvalidAmount(Decimal::ZERO));
        }
        let instrument = catalog.lookup(ticker)?;
        let index = self
            .holdings
            .iter()
            .position(|h| h.ticker == instrument.ticker)
            .ok_or_else(|| Error::HoldingNotFound(instrument.ticker.clone()))?;

        let held = self.holdings[index].quantity;
        if quantity > held {
            return Err(Error::InsufficientPosition {
                ticker: instrument.ticker.clone(),
                requested: quantity,
                held,
            });
        }

        let proceeds = instrument.price * Decimal::from(quantity);
        cash.credit(
            proceeds,
            EntryCategory::Sell,
            format!("Sell {} {}", quantity, instrument.ticker),
        );

        if quantity == held {
            // No zero-quantity holdings persist.
            self.holdings.remove(index);
        } else {
            self.holdings[index].quantity -= quantity;
        }
        debug!(
            "Sold {} {} at {} (proceeds {})",
            quantity, instrument.ticker, instrument.price, proceeds
        );
        Ok(proceeds)
    }
}
