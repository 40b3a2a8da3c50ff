//! Portfolio module - holdings, trade accounting, valuation and payouts.

mod holdings_model;
pub mod payout;
mod portfolio_model;
mod portfolio_valuation;


// Re-export the public interface
pub use holdings_model::Holding;
pub use portfolio_model::Portfolio;
pub use portfolio_valuation::{HoldingValuation, PortfolioValuation};
