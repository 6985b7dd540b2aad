//! The concrete NEAR read connectors.

pub mod access_key_changes;
pub mod gas_price;

pub use access_key_changes::AccessKeyChangesConnector;
pub use gas_price::GasPriceConnector;
