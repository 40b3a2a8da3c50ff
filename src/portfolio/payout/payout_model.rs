//! Payout simulation result models.

use rust_decimal::Decimal;
use serde::Serialize;

/// One simulated payout credit.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutEvent {
    /// Simulated month, counted from 1.
    pub month: u32,
    pub ticker: String,
    pub amount: Decimal,
}

/// Totals produced by one simulation run, for the driver to render.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutReport {
    pub months: u32,
    pub total_credited: Decimal,
    pub events: Vec<PayoutEvent>,
}

impl PayoutReport {
    /// Number of individual payout credits in the run.
    pub fn payout_count(&self) -> usize {
        self.events.len()
    }
}
