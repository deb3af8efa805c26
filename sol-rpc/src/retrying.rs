use std::time::Duration;

use tracing::warn;

use crate::{
	error::Error,
	traits::{Call, CallApi},
};

/// Retry schedule for [`Retrying`].
#[derive(Debug, Clone, Copy)]
pub struct Delays {
	pub initial: Duration,
	pub max: Duration,
	pub attempts: usize,
}

impl Default for Delays {
	fn default() -> Self {
		Self { initial: Duration::from_millis(400), max: Duration::from_secs(5), attempts: 3 }
	}
}

/// Wraps a [`CallApi`] and re-submits requests that failed with a transient
/// transport error, doubling the delay between attempts.
///
/// Retrying is strictly an opt-in of the caller. Rate limits and RPC-level
/// errors pass through unchanged on the first attempt: when and whether to
/// come back after a 429 is the caller's policy, not this client's.
#[derive(Clone)]
pub struct Retrying<A> {
	inner: A,
	delays: Delays,
}

impl<A> Retrying<A> {
	pub fn new(inner: A, delays: Delays) -> Self {
		Self { inner, delays }
	}
}

#[async_trait::async_trait]
impl<A> CallApi for Retrying<A>
where
	A: CallApi<Error = Error>,
{
	type Error = Error;

	async fn call<C: Call>(&self, call: C) -> Result<C::Response, Self::Error> {
		let mut delay = self.delays.initial;
		let mut attempt = 1;
		loop {
			match self.inner.call(&call).await {
				Err(reason) if reason.is_transient() && attempt < self.delays.attempts => {
					warn!(
						"{} attempt #{} failed: {}; retrying in {:?}",
						C::CALL_METHOD_NAME,
						attempt,
						reason,
						delay,
					);
					tokio::time::sleep(delay).await;
					delay = (delay * 2).min(self.delays.max);
					attempt += 1;
				},
				other => return other,
			}
		}
	}
}

#[cfg(test)]
mod tests {
	use std::sync::atomic::{AtomicUsize, Ordering};

	use serde_json::json;

	use crate::types::JsValue;

	use super::*;

	struct Ping;

	impl Call for Ping {
		type Response = u64;
		const CALL_METHOD_NAME: &'static str = "ping";

		fn call_params(&self) -> JsValue {
			json!([])
		}
	}

	/// Fails with the given error a fixed number of times, then succeeds.
	struct Flaky {
		failures_left: AtomicUsize,
		calls: AtomicUsize,
		error: fn() -> Error,
	}

	impl Flaky {
		fn new(failures: usize, error: fn() -> Error) -> Self {
			Self { failures_left: AtomicUsize::new(failures), calls: AtomicUsize::new(0), error }
		}
	}

	#[async_trait::async_trait]
	impl CallApi for Flaky {
		type Error = Error;

		async fn call<C: Call>(&self, call: C) -> Result<C::Response, Self::Error> {
			self.calls.fetch_add(1, Ordering::Relaxed);
			if self
				.failures_left
				.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |left| left.checked_sub(1))
				.is_ok()
			{
				Err((self.error)())
			} else {
				Ok(call.process_response(json!(42))?)
			}
		}
	}

	#[tokio::test(start_paused = true)]
	async fn retries_transient_failures_until_success() {
		let api = Retrying::new(Flaky::new(2, || Error::Timeout), Delays::default());

		assert_eq!(api.call(Ping).await.unwrap(), 42);
		assert_eq!(api.inner.calls.load(Ordering::Relaxed), 3);
	}

	#[tokio::test(start_paused = true)]
	async fn gives_up_after_the_configured_attempts() {
		let api = Retrying::new(Flaky::new(usize::MAX, || Error::Timeout), Delays::default());

		assert!(matches!(api.call(Ping).await, Err(Error::Timeout)));
		assert_eq!(api.inner.calls.load(Ordering::Relaxed), 3);
	}

	#[tokio::test(start_paused = true)]
	async fn rate_limits_pass_through_on_the_first_attempt() {
		let api = Retrying::new(Flaky::new(usize::MAX, || Error::RateLimited), Delays::default());

		assert!(matches!(api.call(Ping).await, Err(Error::RateLimited)));
		assert_eq!(api.inner.calls.load(Ordering::Relaxed), 1);
	}
}
