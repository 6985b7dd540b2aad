//! The RPC capability boundary.
//!
//! Connectors never talk to the wire directly; they receive an
//! [`RpcProvider`] and ask it for a [`NearRpc`] handle bound to a resolved
//! endpoint. Production code plugs in the reqwest-backed client from
//! `connector-rpc`; tests substitute hand-rolled mocks.

use crate::block::{BlockId, BlockReference};
use crate::common::AccountId;
use crate::errors::Result;
use crate::views::{GasPriceView, StateChangesView};
use async_trait::async_trait;
use std::sync::Arc;

/// Read operations this repo consumes from a NEAR node.
#[async_trait]
pub trait NearRpc: Send + Sync {
	/// Gas price at a block, or at the latest block when `block_id` is
	/// absent.
	async fn gas_price(&self, block_id: Option<BlockId>) -> Result<GasPriceView>;

	/// Changes to all access keys of the given accounts at a block.
	async fn access_key_changes(
		&self,
		account_ids: &[AccountId],
		block: BlockReference,
	) -> Result<StateChangesView>;
}

/// Factory producing an RPC handle for a concrete endpoint URL.
pub trait RpcProvider: Send + Sync {
	fn connect(&self, endpoint: &str) -> Result<Arc<dyn NearRpc>>;
}
