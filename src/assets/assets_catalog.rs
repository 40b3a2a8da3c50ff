//! Static catalog of tradable instruments.

use rust_decimal_macros::dec;

use super::assets_model::{Instrument, PayoutFrequency};
use crate::errors::{Error, Result};

/// Read-only table of the instruments available for trading.
///
/// Display order is definition order. The catalog is an explicit value
/// threaded through calls; nothing in the crate holds it as a global.
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    instruments: Vec<Instrument>,
}

impl AssetCatalog {
    /// Builds a catalog from an explicit instrument list.
    pub fn new(instruments: Vec<Instrument>) -> Self {
        AssetCatalog { instruments }
    }

    /// Looks up an instrument by exact ticker.
    pub fn lookup(&self, ticker: &str) -> Result<&Instrument> {
        self.instruments
            .iter()
            .find(|instrument| instrument.ticker == ticker)
            .ok_or_else(|| Error::AssetNotFound(ticker.to_string()))
    }

    /// All instruments, in definition order.
    pub fn all(&self) -> &[Instrument] {
        &self.instruments
    }
}

impl Default for AssetCatalog {
    /// The demo table of simulated Brazilian equities and funds.
    fn default() -> Self {
        AssetCatalog::new(vec![
            Instrument {
                ticker: "SAPR4".to_string(),
                name: "Sanepar".to_string(),
                price: dec!(20.00),
                payout_per_period: dec!(1.50),
                payout_frequency: PayoutFrequency::Annual,
                tax_exempt: false,
            },
            Instrument {
                ticker: "CMIG4".to_string(),
                name: "Cemig".to_string(),
                price: dec!(10.00),
                payout_per_period: dec!(0.60),
                payout_frequency: PayoutFrequency::Semiannual,
                tax_exempt: false,
            },
            Instrument {
                ticker: "BBAS3".to_string(),
                name: "Banco do Brasil".to_string(),
                price: dec!(30.00),
                payout_per_period: dec!(0.35),
                payout_frequency: PayoutFrequency::Quarterly,
                tax_exempt: false,
            },
            Instrument {
                ticker: "ITUB4".to_string(),
                name: "Itaú Unibanco".to_string(),
                price: dec!(25.00),
                payout_per_period: dec!(0.05),
                payout_frequency: PayoutFrequency::Monthly,
                tax_exempt: false,
            },
            Instrument {
                ticker: "HGLG11".to_string(),
                name: "FII CSHG Logística".to_string(),
                price: dec!(80.00),
                payout_per_period: dec!(0.60),
                payout_frequency: PayoutFrequency::Monthly,
                tax_exempt: true,
            },
        ])
    }
}
