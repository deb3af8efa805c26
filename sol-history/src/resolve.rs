use std::time::Duration;

use futures::future::join_all;
use sol_prim::{Address, Amount, Signature};
use sol_rpc::{
	calls::{get_signatures_for_address::SignatureRecord, GetTransaction},
	traits::CallApi,
	types::Commitment,
};
use tracing::warn;

/// What the detail lookup of one signature produced.
///
/// In the degraded case (the lookup failed, timed out, or the node no
/// longer knows the transaction) both optional fields are absent and the
/// entry renders downstream as an unknown time with a zero amount.
#[derive(Debug, Clone, Copy)]
pub struct TransactionDetail {
	pub signature: Signature,
	pub block_time: Option<i64>,
	pub balances: Option<(Amount, Amount)>,
}

/// Fans out one `getTransaction` lookup per record and waits for all of
/// them to settle.
///
/// The lookups run concurrently, each bounded by its own `timeout`; one
/// failing only degrades its own entry, never its siblings. The output is
/// aligned index-for-index with `records` regardless of completion order.
pub async fn resolve_details<A>(
	api: &A,
	address: &Address,
	records: &[SignatureRecord],
	commitment: Commitment,
	timeout: Duration,
) -> Vec<TransactionDetail>
where
	A: CallApi,
{
	join_all(records.iter().map(|record| async move {
		let signature = record.signature;
		let lookup = api.call(GetTransaction::for_signature(signature).commitment(commitment));
		let info = match tokio::time::timeout(timeout, lookup).await {
			Ok(Ok(info)) => info,
			Ok(Err(reason)) => {
				warn!("detail lookup for {} failed: {}", signature, reason);
				None
			},
			Err(_) => {
				warn!("detail lookup for {} timed out after {:?}", signature, timeout);
				None
			},
		};

		match info {
			Some(info) => TransactionDetail {
				signature,
				block_time: info.block_time,
				balances: info.balances(address),
			},
			None => TransactionDetail { signature, block_time: None, balances: None },
		}
	}))
	.await
}
