//! Holding domain model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One position in a portfolio.
///
/// A holding only exists while its quantity is positive; selling a position
/// down to zero removes it from the portfolio entirely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    pub ticker: String,
    pub quantity: u32,
    /// Weighted-average purchase price per unit (WAC). Recomputed on every
    /// buy, unchanged on sells.
    pub average_cost: Decimal,
}

impl Holding {
    /// Folds a purchase into the weighted-average cost basis.
    pub(crate) fn apply_buy(&mut self, quantity: u32, price: Decimal) {
        let old_qty = Decimal::from(self.quantity);
        let added = Decimal::from(quantity);
        let new_qty = old_qty + added;
        self.average_cost = (self.average_cost * old_qty + price * added) / new_qty;
        self.quantity += quantity;
    }
}
