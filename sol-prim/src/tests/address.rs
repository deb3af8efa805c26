use core::str::FromStr;

use crate::{address::ParseAddressError, Address};

#[test]
fn parse_and_render_round_trip() {
	let s = "vines1vzrYbzLMRdu58ou5XTby4qAqVRLmqo36NKPTg";
	let address = Address::from_str(s).unwrap();
	assert_eq!(address.to_string(), s);
}

#[test]
fn rejects_wrong_size() {
	assert_eq!(Address::from_str("abc"), Err(ParseAddressError::WrongSize));
	// 45 characters cannot decode to 32 bytes
	let too_long = "1".repeat(45);
	assert_eq!(Address::from_str(&too_long), Err(ParseAddressError::WrongSize));
}

#[test]
fn rejects_non_base58() {
	// '0', 'O', 'I' and 'l' are not part of the base-58 alphabet
	assert_eq!(
		Address::from_str("0OIl0OIl0OIl0OIl0OIl0OIl0OIl0OIl"),
		Err(ParseAddressError::Invalid)
	);
}

#[test]
fn wallet_key_is_on_curve() {
	let wallet = Address::from_str("HfasueN6RNPjSM6rKGH5dga6kS2oUF8siGH3m4MXPURp").unwrap();
	assert!(wallet.is_on_curve());
}

#[test]
fn derived_account_is_off_curve() {
	let pda = Address::from_str("9j17hjg8wR2uFxJAJDAFahwsgTCNx35sc5qXSxDmuuF6").unwrap();
	assert!(!pda.is_on_curve());
}

#[test]
fn serde_as_base58_string() {
	let s = "vines1vzrYbzLMRdu58ou5XTby4qAqVRLmqo36NKPTg";
	let address: Address = serde_json::from_value(serde_json::json!(s)).unwrap();
	assert_eq!(address, Address::from_str(s).unwrap());
	assert_eq!(serde_json::to_value(address).unwrap(), serde_json::json!(s));
}
