//! Recent transaction history of a single wallet address.
//!
//! Given an address string, one [`HistoryFetch`] validates it, asks the node
//! for the most recent signatures, resolves every transaction's detail
//! concurrently and folds the results into an ordered list of
//! [`TransactionSummary`] values (newest first). Individual detail lookups
//! are allowed to fail: their entries degrade to an unknown time and a zero
//! amount instead of failing the whole query.

pub mod error;
pub mod fetch;
pub mod resolve;
pub mod summary;
pub mod validate;

pub use error::HistoryError;
pub use fetch::{HistoryFetch, HistoryOutcome};
pub use summary::TransactionSummary;

use sol_rpc::traits::CallApi;

/// Fetches the recent transaction history of `address` with the default
/// settings: up to 10 transactions at confirmed commitment.
pub async fn fetch_history<A>(api: &A, address: &str) -> Result<HistoryOutcome, HistoryError>
where
	A: CallApi,
	HistoryError: From<A::Error>,
{
	HistoryFetch::new(api, address).run().await
}

#[cfg(test)]
mod tests;
