//! Instrument reference models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::MONTHS_PER_YEAR;

/// How many times per year an instrument pays out.
///
/// The closed set keeps the payout interval an exact divisor of twelve
/// months (12, 6, 3 or 1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoutFrequency {
    Annual,
    Semiannual,
    Quarterly,
    Monthly,
}

impl PayoutFrequency {
    /// Payments per year.
    pub fn per_year(&self) -> u32 {
        match self {
            PayoutFrequency::Annual => 1,
            PayoutFrequency::Semiannual => 2,
            PayoutFrequency::Quarterly => 4,
            PayoutFrequency::Monthly => 12,
        }
    }

    /// Months between consecutive payments.
    pub fn interval_months(&self) -> u32 {
        MONTHS_PER_YEAR / self.per_year()
    }
}

/// Immutable reference data for one tradable instrument.
///
/// The unit price is fixed for the whole simulation run; there is no
/// market-price feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Instrument {
    /// Unique identifier, e.g. "BBAS3".
    pub ticker: String,
    pub name: String,
    pub price: Decimal,
    /// Amount credited per held unit on each payout date.
    pub payout_per_period: Decimal,
    pub payout_frequency: PayoutFrequency,
    /// FII distributions are exempt from income tax.
    pub tax_exempt: bool,
}
