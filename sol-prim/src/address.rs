use core::{fmt, str::FromStr};

use crate::consts::{MAX_BASE58_ADDRESS_LEN, SOLANA_ADDRESS_LEN};

/// A Solana account address: the 32 bytes of an ed25519 public key.
#[derive(Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Address(pub [u8; SOLANA_ADDRESS_LEN]);

#[derive(Copy, Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseAddressError {
	#[error("string decoded to wrong size for an address")]
	WrongSize,
	#[error("failed to decode string as base-58")]
	Invalid,
}

impl Address {
	/// Whether this address is a point on the ed25519 curve.
	///
	/// Program derived addresses are off-curve by construction, so this is
	/// what separates user wallet keys from PDAs.
	pub fn is_on_curve(&self) -> bool {
		curve25519_dalek::edwards::CompressedEdwardsY::from_slice(&self.0)
			.map_or(false, |point| point.decompress().is_some())
	}
}

impl From<[u8; SOLANA_ADDRESS_LEN]> for Address {
	fn from(bytes: [u8; SOLANA_ADDRESS_LEN]) -> Self {
		Self(bytes)
	}
}

impl AsRef<[u8]> for Address {
	fn as_ref(&self) -> &[u8] {
		&self.0
	}
}

impl FromStr for Address {
	type Err = ParseAddressError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.len() > MAX_BASE58_ADDRESS_LEN {
			return Err(ParseAddressError::WrongSize)
		}
		let bytes = bs58::decode(s).into_vec().map_err(|_| ParseAddressError::Invalid)?;
		<[u8; SOLANA_ADDRESS_LEN]>::try_from(bytes.as_slice())
			.map(Self)
			.map_err(|_| ParseAddressError::WrongSize)
	}
}

impl fmt::Display for Address {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", bs58::encode(&self.0).into_string())
	}
}

impl fmt::Debug for Address {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Address({self})")
	}
}

impl serde::Serialize for Address {
	fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.collect_str(self)
	}
}

impl<'de> serde::Deserialize<'de> for Address {
	fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let s = <String as serde::Deserialize>::deserialize(deserializer)?;
		s.parse().map_err(serde::de::Error::custom)
	}
}
