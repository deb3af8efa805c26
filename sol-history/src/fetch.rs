use std::{
	sync::atomic::{AtomicBool, Ordering},
	time::Duration,
};

use sol_rpc::{calls::GetSignaturesForAddress, traits::CallApi, types::Commitment};
use tracing::debug;

use crate::{
	error::HistoryError,
	resolve::resolve_details,
	summary::{assemble, TransactionSummary},
	validate::validate_address,
};

pub const DEFAULT_LIMIT: usize = 10;
pub const DEFAULT_DETAIL_TIMEOUT: Duration = Duration::from_secs(5);

/// Result of one history fetch.
///
/// An address without any transactions is its own outcome rather than an
/// empty success, so callers can surface guidance instead of an empty
/// table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryOutcome {
	/// Summaries in the order the node returned them: newest first. Never
	/// empty.
	History(Vec<TransactionSummary>),
	NoHistory,
}

/// One transaction-history query.
///
/// Runs as a single pass: validate the address, fetch the recent signature
/// list, resolve every transaction's detail concurrently, assemble the
/// summaries. Validation and signature-list failures abort the query;
/// per-transaction detail failures degrade only their own entry.
///
/// Nothing is shared between queries and nothing is retried here. A query
/// that has been superseded can be abandoned via [`HistoryFetch::abort_on`].
pub struct HistoryFetch<'a, A> {
	api: &'a A,
	raw_address: &'a str,
	limit: usize,
	commitment: Commitment,
	detail_timeout: Duration,
	kill_switch: Option<&'a AtomicBool>,
}

impl<'a, A> HistoryFetch<'a, A>
where
	A: CallApi,
	HistoryError: From<A::Error>,
{
	pub fn new(api: &'a A, raw_address: &'a str) -> Self {
		Self {
			api,
			raw_address,
			limit: DEFAULT_LIMIT,
			commitment: Commitment::default(),
			detail_timeout: DEFAULT_DETAIL_TIMEOUT,
			kill_switch: None,
		}
	}

	pub fn limit(mut self, limit: usize) -> Self {
		self.limit = limit;
		self
	}

	pub fn commitment(mut self, commitment: Commitment) -> Self {
		self.commitment = commitment;
		self
	}

	/// Deadline for each individual detail lookup.
	pub fn detail_timeout(mut self, timeout: Duration) -> Self {
		self.detail_timeout = timeout;
		self
	}

	/// Abandon the query at the next phase boundary once the flag is set.
	pub fn abort_on(mut self, kill_switch: &'a AtomicBool) -> Self {
		self.kill_switch = Some(kill_switch);
		self
	}

	pub async fn run(self) -> Result<HistoryOutcome, HistoryError> {
		let address = validate_address(self.raw_address)?;

		self.ensure_running()?;
		debug!("fetching up to {} signatures for {}", self.limit, address);
		let records = self
			.api
			.call(
				GetSignaturesForAddress::for_address(address)
					.limit(self.limit)
					.commitment(self.commitment),
			)
			.await?;

		if records.is_empty() {
			debug!("no transactions found for {}", address);
			return Ok(HistoryOutcome::NoHistory)
		}

		self.ensure_running()?;
		debug!("resolving details of {} transactions", records.len());
		let details =
			resolve_details(self.api, &address, &records, self.commitment, self.detail_timeout)
				.await;

		self.ensure_running()?;
		Ok(HistoryOutcome::History(assemble(details)))
	}

	fn ensure_running(&self) -> Result<(), HistoryError> {
		match self.kill_switch {
			Some(kill_switch) if kill_switch.load(Ordering::Relaxed) =>
				Err(HistoryError::Aborted),
			_ => Ok(()),
		}
	}
}
