use sol_prim::{address::ParseAddressError, Address};

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAddressError {
	#[error(transparent)]
	Unparseable(#[from] ParseAddressError),

	/// Decodes fine but is not an ed25519 point, so it cannot be a wallet
	/// key (program derived addresses land here).
	#[error("address is not a point on the ed25519 curve")]
	OffCurve,
}

/// Checks that a user-supplied string denotes a wallet: base-58, 32 bytes,
/// on the curve.
pub fn validate_address(raw: &str) -> Result<Address, InvalidAddressError> {
	let address: Address = raw.trim().parse()?;
	if !address.is_on_curve() {
		return Err(InvalidAddressError::OffCurve)
	}
	Ok(address)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn accepts_a_wallet_key() {
		let address = validate_address("HfasueN6RNPjSM6rKGH5dga6kS2oUF8siGH3m4MXPURp").unwrap();
		assert_eq!(address.to_string(), "HfasueN6RNPjSM6rKGH5dga6kS2oUF8siGH3m4MXPURp");
	}

	#[test]
	fn tolerates_surrounding_whitespace() {
		assert!(validate_address(" vines1vzrYbzLMRdu58ou5XTby4qAqVRLmqo36NKPTg\n").is_ok());
	}

	#[test]
	fn rejects_garbage() {
		assert!(matches!(
			validate_address("not an address"),
			Err(InvalidAddressError::Unparseable(_))
		));
	}

	#[test]
	fn rejects_program_derived_addresses() {
		assert_eq!(
			validate_address("9j17hjg8wR2uFxJAJDAFahwsgTCNx35sc5qXSxDmuuF6"),
			Err(InvalidAddressError::OffCurve)
		);
	}
}
