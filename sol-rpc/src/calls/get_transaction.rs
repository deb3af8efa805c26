use serde_json::json;
use sol_prim::{Address, Amount, Signature, SlotNumber};

use super::GetTransaction;
use crate::{traits::Call, types::JsValue};

impl Call for GetTransaction {
	/// `null` when the node does not know the transaction, e.g. when its
	/// history has been pruned.
	type Response = Option<TransactionInfo>;
	const CALL_METHOD_NAME: &'static str = "getTransaction";

	fn call_params(&self) -> JsValue {
		json!([
			self.signature,
			{
				"commitment": self.commitment,
				"encoding": "json",
				// Also accept v0 transactions, not just legacy ones.
				"maxSupportedTransactionVersion": 0,
			},
		])
	}
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInfo {
	pub slot: SlotNumber,
	#[serde(default)]
	pub block_time: Option<i64>,
	pub transaction: TransactionPayload,
	pub meta: Option<TransactionMeta>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionPayload {
	pub signatures: Vec<Signature>,
	pub message: TransactionMessage,
}

/// The part of the transaction message we consume. Instructions, the header
/// and the blockhash are ignored by serde.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMessage {
	pub account_keys: Vec<Address>,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionMeta {
	pub fee: Amount,
	pub pre_balances: Vec<Amount>,
	pub post_balances: Vec<Amount>,
	#[serde(default)]
	pub err: Option<JsValue>,
}

impl TransactionInfo {
	/// All accounts referenced by the transaction's message, in message
	/// order (fee payer first).
	pub fn addresses(&self) -> impl Iterator<Item = &Address> {
		self.transaction.message.account_keys.iter()
	}

	/// The (pre, post) lamport balances of `address` within this
	/// transaction.
	///
	/// The balance arrays are aligned with the account-key list, so the
	/// address is first located there. `None` when the address does not
	/// take part in the transaction or the meta is missing.
	pub fn balances(&self, address: &Address) -> Option<(Amount, Amount)> {
		let index = self.addresses().position(|key| key == address)?;
		let meta = self.meta.as_ref()?;
		Some((*meta.pre_balances.get(index)?, *meta.post_balances.get(index)?))
	}
}
