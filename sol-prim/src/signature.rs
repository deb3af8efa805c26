use core::{fmt, str::FromStr};

use crate::consts::{MAX_BASE58_SIGNATURE_LEN, SOLANA_SIGNATURE_LEN};

/// A transaction signature: the unique identifier of one on-chain transaction.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Signature(pub [u8; SOLANA_SIGNATURE_LEN]);

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseSignatureError {
	#[error("string decoded to wrong size for a signature")]
	WrongSize,
	#[error("failed to decode string as base-58")]
	Invalid,
}

impl From<[u8; SOLANA_SIGNATURE_LEN]> for Signature {
	fn from(bytes: [u8; SOLANA_SIGNATURE_LEN]) -> Self {
		Self(bytes)
	}
}

impl AsRef<[u8]> for Signature {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl FromStr for Signature {
	type Err = ParseSignatureError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.len() > MAX_BASE58_SIGNATURE_LEN {
			return Err(ParseSignatureError::WrongSize)
		}
		let bytes = bs58::decode(s).into_vec().map_err(|_| ParseSignatureError::Invalid)?;
		<[u8; SOLANA_SIGNATURE_LEN]>::try_from(bytes.as_slice())
			.map(Self)
			.map_err(|_| ParseSignatureError::WrongSize)
	}
}

impl fmt::Display for Signature {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", bs58::encode(&self.0).into_string())
	}
}

impl fmt::Debug for Signature {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Signature({self})")
	}
}

impl serde::Serialize for Signature {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> serde::Deserialize<'de> for Signature {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = <String as serde::Deserialize>::deserialize(deserializer)?;
		s.parse().map_err(serde::de::Error::custom)
	}
}
