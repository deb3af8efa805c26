use crate::validate::InvalidAddressError;

/// Why a history fetch failed as a whole.
///
/// Failed lookups of individual transaction details are not represented
/// here: those degrade their own entry and leave the fetch successful.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
	/// The supplied string is not a wallet address. User-correctable.
	#[error("invalid wallet address: {0}")]
	InvalidAddress(#[from] InvalidAddressError),

	/// The endpoint asked us to back off. Deliberately not retried here;
	/// whether and when to come back is the caller's decision.
	#[error("rate limited by the rpc endpoint; try again in a moment")]
	RateLimited,

	/// Network trouble or an error reply while fetching the signature list.
	/// Re-invoking the fetch may succeed.
	#[error("failed to fetch transaction history: {0}")]
	TransientFetch(#[source] sol_rpc::Error),

	/// The kill switch was flipped while the fetch was in flight.
	#[error("history fetch aborted")]
	Aborted,
}

impl From<sol_rpc::Error> for HistoryError {
	fn from(reason: sol_rpc::Error) -> Self {
		match reason {
			sol_rpc::Error::RateLimited => Self::RateLimited,
			reason => Self::TransientFetch(reason),
		}
	}
}
