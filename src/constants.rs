use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Fee rate charged on TED deposits (1%)
pub const TED_FEE_RATE: Decimal = dec!(0.01);

/// Months in one simulated year
pub const MONTHS_PER_YEAR: u32 = 12;
