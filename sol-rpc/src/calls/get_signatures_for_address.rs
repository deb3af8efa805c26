use serde_json::json;
use sol_prim::{Signature, SlotNumber};

use super::GetSignaturesForAddress;
use crate::{
	traits::Call,
	types::{Commitment, JsValue},
};

/// One entry of the `getSignaturesForAddress` response. The node returns
/// these newest first.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignatureRecord {
	pub signature: Signature,
	pub slot: SlotNumber,
	#[serde(default)]
	pub err: Option<JsValue>,
	#[serde(default)]
	pub memo: Option<String>,
	#[serde(default)]
	pub block_time: Option<i64>,
	#[serde(default)]
	pub confirmation_status: Option<Commitment>,
}

impl Call for GetSignaturesForAddress {
	type Response = Vec<SignatureRecord>;
	const CALL_METHOD_NAME: &'static str = "getSignaturesForAddress";

	fn call_params(&self) -> JsValue {
		let mut config = json!({
			"commitment": self.commitment,
		});
		if let Some(limit) = self.limit {
			config["limit"] = json!(limit);
		}
		json!([self.address, config])
	}
}
