//! Payout simulation - dividend/coupon credits over a month horizon.

mod payout_model;
mod payout_service;


// Re-export the public interface
pub use payout_model::{PayoutEvent, PayoutReport};
pub use payout_service::simulate;
