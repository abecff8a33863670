//! Transport primitives for Pocket API calls.
//!
//! The module exposes [`ApiHttpClient`] alongside [`ApiRequest`], [`ApiResponse`] and
//! [`ResponseMetadata`] so downstream crates (and tests) can plug in their own HTTP stack.
//! Implementations only move bytes: the client builds the JSON body and the fixed headers,
//! and interprets status codes and payloads itself.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
use std::time::Duration as StdDuration;
// crates.io
#[cfg(feature = "reqwest")] use reqwest::header::{HeaderMap, RETRY_AFTER};
#[cfg(feature = "reqwest")] use time::format_description::well_known::Rfc2822;
// self
#[cfg(feature = "reqwest")] use crate::error::ConfigError;
use crate::{_prelude::*, error::TransportError};

/// `User-Agent` sent by [`ReqwestHttpClient::try_new`].
#[cfg(feature = "reqwest")]
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Boxed future returned by [`ApiHttpClient::execute`].
pub type HttpFuture<'a> =
	Pin<Box<dyn Future<Output = Result<ApiResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of POSTing a JSON body and returning the raw
/// response.
///
/// The trait is the client's only dependency on an HTTP stack. Implementations must be
/// `Send + Sync + 'static` so a single transport can be shared (behind `Arc`) by clones of
/// the same client. They must surface connection failures as [`TransportError`] and return
/// every HTTP response, whatever its status, as an [`ApiResponse`].
pub trait ApiHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Sends `request` as an HTTP POST and resolves with the response.
	fn execute(&self, request: ApiRequest) -> HttpFuture<'_>;
}

/// Fully prepared POST request.
#[derive(Clone, Debug)]
pub struct ApiRequest {
	/// Absolute endpoint URL.
	pub url: Url,
	/// Headers to send verbatim.
	pub headers: Vec<(&'static str, &'static str)>,
	/// Encoded JSON body.
	pub body: Vec<u8>,
	/// Upper bound for the whole round-trip.
	pub timeout: StdDuration,
}
impl ApiRequest {
	/// Looks up a header value, ignoring ASCII case in the name.
	pub fn header(&self, name: &str) -> Option<&'static str> {
		self.headers.iter().find(|(key, _)| key.eq_ignore_ascii_case(name)).map(|(_, value)| *value)
	}
}

/// Raw response handed back by a transport.
#[derive(Clone, Debug)]
pub struct ApiResponse {
	/// HTTP status code.
	pub status: u16,
	/// Canonical reason phrase for `status` (may be empty).
	pub status_text: String,
	/// Diagnostic headers captured from the response.
	pub metadata: ResponseMetadata,
	/// Raw body bytes.
	pub body: Vec<u8>,
}
impl ApiResponse {
	/// Creates a response without reason phrase or metadata.
	pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
		Self {
			status,
			status_text: String::new(),
			metadata: ResponseMetadata::default(),
			body: body.into(),
		}
	}

	/// Sets the reason phrase.
	pub fn with_status_text(mut self, status_text: impl Into<String>) -> Self {
		self.status_text = status_text.into();

		self
	}

	/// Sets the captured metadata.
	pub fn with_metadata(mut self, metadata: ResponseMetadata) -> Self {
		self.metadata = metadata;

		self
	}
}

/// Diagnostic headers Pocket attaches to failed responses.
///
/// Additional fields may be added in future releases, so downstream code should construct
/// values using field names instead of struct update syntax.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseMetadata {
	/// `X-Error-Code` header value.
	pub error_code: Option<u32>,
	/// `X-Error` header value.
	pub error_message: Option<String>,
	/// Retry hint expressed as a relative duration.
	pub retry_after: Option<Duration>,
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Timeouts are applied per request from the client's service configuration, so any
/// [`ReqwestClient`] can be wrapped without extra setup.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Builds a dedicated reqwest client that identifies itself as this crate.
	pub fn try_new() -> Result<Self, ConfigError> {
		ReqwestClient::builder()
			.user_agent(USER_AGENT)
			.build()
			.map(Self)
			.map_err(ConfigError::http_client_build)
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl ApiHttpClient for ReqwestHttpClient {
	fn execute(&self, request: ApiRequest) -> HttpFuture<'_> {
		Box::pin(async move {
			let ApiRequest { url, headers, body, timeout } = request;
			let mut builder = self.0.post(url).timeout(timeout).body(body);

			for (name, value) in headers {
				builder = builder.header(name, value);
			}

			let response = builder.send().await?;
			let status = response.status();
			let metadata = parse_metadata(response.headers());
			let body = response.bytes().await?.to_vec();

			Ok(ApiResponse {
				status: status.as_u16(),
				status_text: status.canonical_reason().unwrap_or_default().to_owned(),
				metadata,
				body,
			})
		})
	}
}

#[cfg(feature = "reqwest")]
fn parse_metadata(headers: &HeaderMap) -> ResponseMetadata {
	let error_code = header_str(headers, "x-error-code").and_then(|raw| raw.parse().ok());
	let error_message = header_str(headers, "x-error").map(ToOwned::to_owned);
	let retry_after = parse_retry_after(headers).or_else(|| {
		header_str(headers, "x-limit-user-reset")
			.and_then(|raw| raw.parse::<u64>().ok())
			.map(|secs| Duration::seconds(secs as i64))
	});

	ResponseMetadata { error_code, error_message, retry_after }
}

#[cfg(feature = "reqwest")]
fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
	headers.get(name)?.to_str().ok().map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(feature = "reqwest")]
fn parse_retry_after(headers: &HeaderMap) -> Option<Duration> {
	let value = headers.get(RETRY_AFTER)?;
	let raw = value.to_str().ok()?.trim();

	if let Ok(secs) = raw.parse::<u64>() {
		return Some(Duration::seconds(secs as i64));
	}
	if let Ok(moment) = OffsetDateTime::parse(raw, &Rfc2822) {
		let delta = moment - OffsetDateTime::now_utc();

		if delta.is_positive() {
			return Some(delta);
		}
	}

	None
}
