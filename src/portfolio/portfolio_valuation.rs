//! Read-only valuation views over a portfolio.

use num_traits::Zero;
use rust_decimal::Decimal;
use serde::Serialize;

use super::portfolio_model::Portfolio;
use crate::assets::AssetCatalog;
use crate::errors::Result;

/// Market view of one holding.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HoldingValuation {
    pub ticker: String,
    pub quantity: u32,
    pub average_cost: Decimal,
    pub market_value: Decimal,
    /// Share of total portfolio value, in `[0, 1]`. Zero when the total
    /// value is zero.
    pub allocation: Decimal,
}

/// Snapshot of the whole portfolio at current catalog prices.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioValuation {
    /// Investment cash balance.
    pub cash: Decimal,
    /// Market value of all holdings.
    pub market_value: Decimal,
    /// `cash + market_value`.
    pub total_value: Decimal,
    pub positions: Vec<HoldingValuation>,
}

impl Portfolio {
    /// Values the portfolio at current catalog prices, given the
    /// investment account's cash balance.
    pub fn valuation(&self, catalog: &AssetCatalog, cash: Decimal) -> Result<PortfolioValuation> {
        let mut positions = Vec::with_capacity(self.holdings().len());
        let mut market_value = Decimal::zero();

        for holding in self.holdings() {
            let instrument = catalog.lookup(&holding.ticker)?;
            let value = instrument.price * Decimal::from(holding.quantity);
            market_value += value;
            positions.push(HoldingValuation {
                ticker: holding.ticker.clone(),
                quantity: holding.quantity,
                average_cost: holding.average_cost,
                market_value: value,
                allocation: Decimal::zero(),
            });
        }

        let total_value = cash + market_value;
        if total_value > Decimal::zero() {
            for position in positions.iter_mut() {
                position.allocation = position.market_value / total_value;
            }
        }

        Ok(PortfolioValuation {
            cash,
            market_value,
            total_value,
            positions,
        })
    }
}
