//! Assets module - instrument reference data and the static catalog.

mod assets_catalog;
mod assets_model;


// Re-export the public interface
pub use assets_catalog::AssetCatalog;
pub use assets_model::{Instrument, PayoutFrequency};
