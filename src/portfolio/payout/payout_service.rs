//! Payout simulation over a month horizon.

use log::debug;
use rust_decimal::Decimal;

use super::payout_model::{PayoutEvent, PayoutReport};
use crate::accounts::Account;
use crate::assets::AssetCatalog;
use crate::errors::{Error, Result};
use crate::ledger::EntryCategory;
use crate::portfolio::Portfolio;

/// Simulates `months` of payouts for every holding, crediting the bank
/// account on each instrument's payment schedule.
///
/// Month `m` pays an instrument when `m % (12 / frequency) == 0`, crediting
/// `payout_per_period * quantity` and appending a Payout ledger entry.
/// Every invocation credits again: the routine simulates the passage of
/// time, it does not reconcile against previous runs.
pub fn simulate(
    portfolio: &Portfolio,
    bank: &mut Account,
    catalog: &AssetCatalog,
    months: u32,
) -> Result<PayoutReport> {
    if months == 0 {
        return Err(Error::InvalidAmount(Decimal::ZERO));
    }

    // Resolve every held instrument up front so an unknown ticker rejects
    // the whole run before any credit lands.
    let mut schedule = Vec::with_capacity(portfolio.holdings().len());
    for holding in portfolio.holdings() {
        schedule.push((holding, catalog.lookup(&holding.ticker)?));
    }

    let mut report = PayoutReport {
        months,
        ..Default::default()
    };

    for month in 1..=months {
        for (holding, instrument) in &schedule {
            let interval = instrument.payout_frequency.interval_months();
            if month % interval != 0 {
                continue;
            }
            let amount = instrument.payout_per_period * Decimal::from(holding.quantity);
            bank.credit(
                amount,
                EntryCategory::Payout,
                format!("Dividend {} - month {}", instrument.ticker, month),
            );
            report.total_credited += amount;
            report.events.push(PayoutEvent {
                month,
                ticker: instrument.ticker.clone(),
                amount,
            });
        }
    }

    debug!(
        "Simulated {} months: {} payouts totalling {}",
        months,
        report.payout_count(),
        report.total_credited
    );
    Ok(report)
}
