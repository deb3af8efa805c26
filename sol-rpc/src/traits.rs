use std::error::Error as StdError;

use crate::types::JsValue;

/// One method of the node's JSON-RPC surface: its name, how to encode the
/// params, and what the result decodes into.
pub trait Call: Send + Sync {
	type Response: serde::de::DeserializeOwned + Send;

	const CALL_METHOD_NAME: &'static str;

	/// The JSON-RPC `params` array for this call.
	fn call_params(&self) -> JsValue;

	fn process_response(&self, input: JsValue) -> Result<Self::Response, serde_json::Error> {
		serde_json::from_value(input)
	}
}

/// A transport that can execute a [`Call`].
#[async_trait::async_trait]
pub trait CallApi: Send + Sync {
	type Error: StdError + Send + Sync + 'static;
	async fn call<C: Call>(&self, call: C) -> Result<C::Response, Self::Error>;
}

impl<'a, C> Call for &'a C
where
	C: Call,
{
	type Response = C::Response;

	const CALL_METHOD_NAME: &'static str = C::CALL_METHOD_NAME;
	fn call_params(&self) -> JsValue {
		<C as Call>::call_params(*self)
	}
}

#[async_trait::async_trait]
impl<'a, A> CallApi for &'a A
where
	A: CallApi,
{
	type Error = A::Error;

	async fn call<C: Call>(&self, call: C) -> Result<C::Response, Self::Error> {
		<A as CallApi>::call(*self, call).await
	}
}
