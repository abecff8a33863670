//! The Pocket client and its operations.
//!
//! [`Client`] owns the consumer key, the service configuration and a shared transport handle.
//! Each operation lives in its own submodule next to the wire shapes it sends and receives:
//!
//! 1. [`Client::request_token`] obtains a short-lived request token.
//! 2. [`Client::authorization_url`] builds the page the user must visit to approve it.
//! 3. [`Client::access_token`] exchanges the approved token for an [`AccessGrant`].
//! 4. [`Client::add_item`] saves a URL to the user's list with that grant's access token.
//!
//! [`AccessGrant`]: crate::auth::AccessGrant

pub mod access_token;
pub mod add;
pub mod request_token;

pub use add::*;

// self
#[cfg(feature = "reqwest")] use crate::http::ReqwestHttpClient;
use crate::{
	_prelude::*,
	http::ApiHttpClient,
	obs::{self, CallOutcome, CallSpan, Operation},
	service::ServiceConfig,
};

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestPocketClient = Client<ReqwestHttpClient>;

/// Entry point for every Pocket API call.
///
/// The client holds no mutable state: one value may be cloned and shared across tasks that
/// work on independent tokens. The consumer key is not validated locally; an empty key is
/// simply rejected by the service.
pub struct Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	http_client: Arc<C>,
	service: ServiceConfig,
	consumer_key: String,
}
impl<C> Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(
		consumer_key: impl Into<String>,
		service: ServiceConfig,
		http_client: impl Into<Arc<C>>,
	) -> Self {
		Self { http_client: http_client.into(), service, consumer_key: consumer_key.into() }
	}

	/// Application identifier sent with every call.
	pub fn consumer_key(&self) -> &str {
		&self.consumer_key
	}

	/// Service configuration this client targets.
	pub fn service(&self) -> &ServiceConfig {
		&self.service
	}

	/// Shared transport handle.
	pub fn http_client(&self) -> &Arc<C> {
		&self.http_client
	}
}
#[cfg(feature = "reqwest")]
impl Client<ReqwestHttpClient> {
	/// Creates a client for the production Pocket service.
	///
	/// The client provisions its own reqwest-backed transport; each request is bounded by the
	/// default ten-second timeout.
	pub fn new(consumer_key: impl Into<String>) -> Self {
		Self::with_service(consumer_key, ServiceConfig::default())
	}

	/// Creates a reqwest-backed client targeting a custom service configuration.
	pub fn with_service(consumer_key: impl Into<String>, service: ServiceConfig) -> Self {
		Self::with_http_client(consumer_key, service, ReqwestHttpClient::default())
	}
}
impl<C> Clone for Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: Arc::clone(&self.http_client),
			service: self.service.clone(),
			consumer_key: self.consumer_key.clone(),
		}
	}
}
impl<C> Debug for Client<C>
where
	C: ?Sized + ApiHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Client")
			.field("consumer_key", &self.consumer_key)
			.field("service", &self.service)
			.finish()
	}
}

/// Runs `fut` inside an operation span and records attempt/outcome counters.
pub(crate) async fn observe<T, Fut>(
	operation: Operation,
	stage: &'static str,
	fut: Fut,
) -> Result<T>
where
	Fut: Future<Output = Result<T>>,
{
	let span = CallSpan::new(operation, stage);

	obs::record_call_outcome(operation, CallOutcome::Attempt);

	let result = span.instrument(fut).await;
	let outcome = CallOutcome::of(&result);

	if let Err(err) = &result {
		if let Some(status) = err.status() {
			obs::record_http_status(operation, status);
		}

		obs::trace_failure(operation, err);
	}

	span.record_outcome(outcome);
	obs::record_call_outcome(operation, outcome);

	result
}
