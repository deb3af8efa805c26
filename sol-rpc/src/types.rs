use core::{fmt, str::FromStr};

pub type JsValue = serde_json::Value;

/// How finalized the data returned by the node must be.
#[derive(
	Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Commitment {
	Processed = 1,
	Confirmed = 2,
	Finalized = 3,
}

impl Default for Commitment {
	fn default() -> Self {
		Self::Confirmed
	}
}

impl fmt::Display for Commitment {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Processed => "processed",
			Self::Confirmed => "confirmed",
			Self::Finalized => "finalized",
		})
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("expected one of: processed, confirmed, finalized")]
pub struct ParseCommitmentError;

impl FromStr for Commitment {
	type Err = ParseCommitmentError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		match s {
			"processed" => Ok(Self::Processed),
			"confirmed" => Ok(Self::Confirmed),
			"finalized" => Ok(Self::Finalized),
			_ => Err(ParseCommitmentError),
		}
	}
}

/// The `error` object of a JSON-RPC 2.0 response.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct RpcErrorReply {
	pub code: i64,
	pub message: String,
}

impl fmt::Display for RpcErrorReply {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{} (code {})", self.message, self.code)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn commitment_serializes_lowercase() {
		assert_eq!(serde_json::json!(Commitment::Confirmed), serde_json::json!("confirmed"));
		assert_eq!(
			serde_json::from_value::<Commitment>(serde_json::json!("finalized")).unwrap(),
			Commitment::Finalized
		);
	}

	#[test]
	fn commitment_parses_from_str() {
		assert_eq!("processed".parse(), Ok(Commitment::Processed));
		assert_eq!("confirmed".parse(), Ok(Commitment::Confirmed));
		assert!("final".parse::<Commitment>().is_err());
	}
}
