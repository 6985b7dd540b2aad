//! Hand-rolled RPC mocks for connector tests.

use async_trait::async_trait;
use connector_types::{
	AccountId, BlockId, BlockReference, ConnectorError, Context, GasPriceView, NearRpc,
	NetworkSettings, Result, RpcProvider, StateChangesView,
};
use std::sync::{Arc, Mutex};

/// What the mock observed a connector asking for.
#[derive(Debug, Clone, PartialEq)]
pub enum RecordedCall {
	GasPrice {
		block_id: Option<BlockId>,
	},
	AccessKeyChanges {
		account_ids: Vec<AccountId>,
		block: BlockReference,
	},
}

/// Scripted RPC capability: returns canned views or a canned node error,
/// recording every call.
#[derive(Default)]
pub struct MockRpc {
	pub gas_price_view: Option<GasPriceView>,
	pub changes_view: Option<StateChangesView>,
	/// When set, every call fails with this RPC error.
	pub fail_with: Option<(i64, String)>,
	pub calls: Mutex<Vec<RecordedCall>>,
}

impl MockRpc {
	fn check_failure(&self) -> Result<()> {
		if let Some((code, message)) = &self.fail_with {
			return Err(ConnectorError::Rpc {
				code: *code,
				message: message.clone(),
			});
		}
		Ok(())
	}
}

#[async_trait]
impl NearRpc for MockRpc {
	async fn gas_price(&self, block_id: Option<BlockId>) -> Result<GasPriceView> {
		self.calls
			.lock()
			.unwrap()
			.push(RecordedCall::GasPrice { block_id });
		self.check_failure()?;
		self.gas_price_view
			.clone()
			.ok_or_else(|| ConnectorError::Network("mock has no gas price view".to_string()))
	}

	async fn access_key_changes(
		&self,
		account_ids: &[AccountId],
		block: BlockReference,
	) -> Result<StateChangesView> {
		self.calls.lock().unwrap().push(RecordedCall::AccessKeyChanges {
			account_ids: account_ids.to_vec(),
			block,
		});
		self.check_failure()?;
		self.changes_view
			.clone()
			.ok_or_else(|| ConnectorError::Network("mock has no changes view".to_string()))
	}
}

/// Provider returning one shared [`MockRpc`], recording resolved endpoints.
pub struct MockProvider {
	pub rpc: Arc<MockRpc>,
	pub endpoints: Mutex<Vec<String>>,
}

impl MockProvider {
	pub fn new(rpc: Arc<MockRpc>) -> Self {
		Self {
			rpc,
			endpoints: Mutex::new(Vec::new()),
		}
	}
}

impl RpcProvider for MockProvider {
	fn connect(&self, endpoint: &str) -> Result<Arc<dyn NearRpc>> {
		self.endpoints.lock().unwrap().push(endpoint.to_string());
		Ok(self.rpc.clone())
	}
}

/// Context over a scripted mock, plus handles for assertions.
pub fn mock_context(rpc: MockRpc) -> (Context, Arc<MockRpc>, Arc<MockProvider>) {
	let rpc = Arc::new(rpc);
	let provider = Arc::new(MockProvider::new(rpc.clone()));
	let ctx = Context::new(provider.clone(), NetworkSettings::default());
	(ctx, rpc, provider)
}
