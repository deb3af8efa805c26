use sol_prim::{Address, Signature};

use crate::types::Commitment;

pub mod get_signatures_for_address;
pub mod get_transaction;

#[derive(Debug, Clone)]
pub struct GetSignaturesForAddress {
	pub address: Address,
	pub limit: Option<usize>,
	pub commitment: Commitment,
}

impl GetSignaturesForAddress {
	pub fn for_address(address: Address) -> Self {
		Self { address, limit: None, commitment: Commitment::default() }
	}

	pub fn limit(mut self, limit: usize) -> Self {
		self.limit = Some(limit);
		self
	}

	pub fn commitment(mut self, commitment: Commitment) -> Self {
		self.commitment = commitment;
		self
	}
}

#[derive(Debug, Clone)]
pub struct GetTransaction {
	pub signature: Signature,
	pub commitment: Commitment,
}

impl GetTransaction {
	pub fn for_signature(signature: Signature) -> Self {
		Self { signature, commitment: Commitment::default() }
	}

	pub fn commitment(mut self, commitment: Commitment) -> Self {
		self.commitment = commitment;
		self
	}
}
