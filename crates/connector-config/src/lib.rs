//! Configuration for the connector runtime.

pub mod loader;
pub mod types;

pub use loader::ConfigLoader;
pub use types::{ConnectorsConfig, NetworkEntry, RpcSettings};
