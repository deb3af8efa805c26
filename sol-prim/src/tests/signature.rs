use core::str::FromStr;

use crate::{signature::ParseSignatureError, Signature};

const SIGNATURE: &str =
	"2Nb7bSQWoUYrEN6PYGN7Jhgs29HjSXEeM2mFKzkqwTiARM8EwXPQ6DMvQbvqLqxogXtvYtpxE44AsDeSS3e3fsDY";

#[test]
fn parse_and_render_round_trip() {
	let signature = Signature::from_str(SIGNATURE).unwrap();
	assert_eq!(signature.to_string(), SIGNATURE);
}

#[test]
fn rejects_wrong_size() {
	// a valid base-58 string that is far too short
	assert_eq!(
		Signature::from_str("vines1vzrYbzLMRdu58ou5XTby4qAqVRLmqo36NKPTg"),
		Err(ParseSignatureError::WrongSize)
	);
}

#[test]
fn rejects_non_base58() {
	assert_eq!(Signature::from_str("not-base-58!"), Err(ParseSignatureError::Invalid));
}

#[test]
fn serde_as_base58_string() {
	let signature: Signature = serde_json::from_value(serde_json::json!(SIGNATURE)).unwrap();
	assert_eq!(signature, Signature::from_str(SIGNATURE).unwrap());
	assert_eq!(serde_json::to_value(signature).unwrap(), serde_json::json!(SIGNATURE));
}
