//! Common aliases used throughout the connector system.

/// NEAR account identifier, e.g. `example-acct.testnet`.
pub type AccountId = String;

/// Block height on the NEAR chain.
pub type BlockHeight = u64;

/// Base58-encoded hash (block hash, transaction hash, public key payload).
pub type CryptoHash = String;
