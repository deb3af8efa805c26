use std::time::Duration;

use reqwest::{header::CONTENT_TYPE, Client, StatusCode};
use serde_json::json;
use tracing::trace;

use crate::{
	error::Error,
	traits::{Call, CallApi},
	types::JsValue,
};

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// A plain JSON-RPC 2.0 client over http(s).
///
/// Never retries: callers that want retries wrap it in
/// [`crate::retrying::Retrying`].
#[derive(Clone)]
pub struct HttpClient {
	// Internally the Client is Arc'd
	client: Client,
	endpoint: String,
}

impl HttpClient {
	pub fn new(endpoint: impl Into<String>) -> Result<Self, Error> {
		let client =
			Client::builder().timeout(REQUEST_TIMEOUT).connect_timeout(CONNECT_TIMEOUT).build()?;
		Ok(Self { client, endpoint: endpoint.into() })
	}

	async fn call_rpc(&self, method: &str, params: JsValue) -> Result<JsValue, Error> {
		let request_body = json!({
			"jsonrpc": "2.0",
			"id": 0,
			"method": method,
			"params": params,
		});
		trace!("request: {}", request_body);

		let response = self
			.client
			.post(&self.endpoint)
			.header(CONTENT_TYPE, "application/json")
			.json(&request_body)
			.send()
			.await?;

		if response.status() == StatusCode::TOO_MANY_REQUESTS {
			return Err(Error::RateLimited)
		}

		let mut body = response.error_for_status()?.json::<JsValue>().await?;
		if body["error"].is_object() {
			return Err(Error::Rpc(serde_json::from_value(body["error"].take())?))
		}
		Ok(body["result"].take())
	}
}

#[async_trait::async_trait]
impl CallApi for HttpClient {
	type Error = Error;

	async fn call<C: Call>(&self, call: C) -> Result<C::Response, Self::Error> {
		let response = self.call_rpc(C::CALL_METHOD_NAME, call.call_params()).await?;
		Ok(call.process_response(response)?)
	}
}
