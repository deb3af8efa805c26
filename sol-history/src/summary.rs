use core::fmt;

use chrono::{DateTime, Local};
use sol_prim::{consts::LAMPORTS_PER_SOL, Amount, Signature};

use crate::resolve::TransactionDetail;

/// Rendered in place of a timestamp when the block time is unavailable.
pub const UNKNOWN_TIME: &str = "Unknown";

/// Net lamport change of the tracked account within one transaction.
/// Positive means the account received funds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct SolAmount(i128);

impl SolAmount {
	/// Zero when the balances are unknown, matching the degraded entries
	/// produced by failed detail lookups.
	pub fn from_balances(balances: Option<(Amount, Amount)>) -> Self {
		balances
			.map(|(before, after)| Self(i128::from(after) - i128::from(before)))
			.unwrap_or_default()
	}

	pub fn lamports(&self) -> i128 {
		self.0
	}
}

impl fmt::Display for SolAmount {
	/// Renders in SOL at full lamport precision, e.g. "-0.000005000".
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let scale = u128::from(LAMPORTS_PER_SOL);
		let magnitude = self.0.unsigned_abs();
		let sign = if self.0 < 0 { "-" } else { "" };
		f.pad(&format!("{}{}.{:09}", sign, magnitude / scale, magnitude % scale))
	}
}

/// One line of the caller-facing history listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionSummary {
	pub signature: Signature,
	pub display_time: String,
	pub amount: SolAmount,
}

/// Folds resolved details into display summaries, preserving fetch order.
/// No reordering, filtering or deduplication happens here.
pub fn assemble(details: Vec<TransactionDetail>) -> Vec<TransactionSummary> {
	details
		.into_iter()
		.map(|detail| TransactionSummary {
			signature: detail.signature,
			display_time: display_time(detail.block_time),
			amount: SolAmount::from_balances(detail.balances),
		})
		.collect()
}

fn display_time(block_time: Option<i64>) -> String {
	block_time
		.and_then(|secs| DateTime::from_timestamp(secs, 0))
		.map(|utc| utc.with_timezone(&Local).format("%Y-%m-%d %H:%M:%S").to_string())
		.unwrap_or_else(|| UNKNOWN_TIME.to_string())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn amount_is_the_net_change_of_the_tracked_account() {
		assert_eq!(
			SolAmount::from_balances(Some((1_000_000_000, 1_500_000_000))).lamports(),
			500_000_000
		);
		assert_eq!(
			SolAmount::from_balances(Some((1_500_000_000, 1_000_000_000))).lamports(),
			-500_000_000
		);
		assert_eq!(SolAmount::from_balances(None).lamports(), 0);
	}

	#[test]
	fn amount_renders_with_nine_fractional_digits() {
		assert_eq!(
			SolAmount::from_balances(Some((1_000_000_000, 1_500_000_000))).to_string(),
			"0.500000000"
		);
		assert_eq!(SolAmount::from_balances(Some((1_000_005_000, 1_000_000_000))).to_string(), "-0.000005000");
		assert_eq!(SolAmount::from_balances(Some((7, 7))).to_string(), "0.000000000");
		assert_eq!(
			SolAmount::from_balances(Some((0, 12_345_678_901))).to_string(),
			"12.345678901"
		);
	}

	#[test]
	fn missing_block_time_renders_unknown() {
		assert_eq!(display_time(None), UNKNOWN_TIME);
		// pre-1970 garbage from a node is not representable either
		assert_eq!(display_time(Some(i64::MIN)), UNKNOWN_TIME);
	}

	#[test]
	fn known_block_time_renders_a_timestamp() {
		let rendered = display_time(Some(1_672_051_891));
		assert_ne!(rendered, UNKNOWN_TIME);
		// local-timezone rendering, so only the shape is asserted
		assert_eq!(rendered.len(), "2022-12-26 10:51:31".len());
	}
}
