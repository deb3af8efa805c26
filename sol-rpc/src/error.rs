use crate::types::RpcErrorReply;

/// Failure modes of a single RPC call, classified from the structured
/// transport status rather than from error-message text.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("transport error: {0}")]
	Transport(reqwest::Error),

	#[error("request timed out")]
	Timeout,

	/// The endpoint replied with HTTP 429.
	#[error("rate limited by the rpc endpoint")]
	RateLimited,

	#[error("rpc error: {0}")]
	Rpc(RpcErrorReply),

	#[error("unexpected response: {0}")]
	Json(#[from] serde_json::Error),
}

impl Error {
	/// Whether a retry of the same request could plausibly succeed on its
	/// own. Rate limits are excluded: backing off is a policy decision that
	/// belongs to the caller.
	pub fn is_transient(&self) -> bool {
		matches!(self, Self::Transport(_) | Self::Timeout)
	}
}

impl From<reqwest::Error> for Error {
	fn from(reason: reqwest::Error) -> Self {
		if reason.is_timeout() {
			Self::Timeout
		} else {
			Self::Transport(reason)
		}
	}
}
