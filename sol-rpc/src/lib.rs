//! A minimal JSON-RPC client for the Solana HTTP API.
//!
//! Calls are described by the [`traits::Call`] trait (method name, params,
//! response type) and executed through any [`traits::CallApi`]
//! implementation: the plain [`HttpClient`], the opt-in
//! [`retrying::Retrying`] wrapper, or a test stub.

pub mod calls;
pub mod error;
pub mod http;
pub mod retrying;
pub mod traits;
pub mod types;

pub use error::Error;
pub use http::HttpClient;
