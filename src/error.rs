//! Client-level error types shared across flows, the transport layer, and configuration.

// self
use crate::{_prelude::*, service::ServiceConfigError};

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Caller input rejected before any network call.
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeout) or a non-200 response.
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response arrived but did not carry what the endpoint promises.
	#[error(transparent)]
	Protocol(#[from] ProtocolError),
}
impl Error {
	/// Returns the HTTP status when the service answered with a non-200 response.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Transport(e) => e.status(),
			_ => None,
		}
	}
}
impl From<ServiceConfigError> for Error {
	fn from(e: ServiceConfigError) -> Self {
		Self::Config(e.into())
	}
}

/// Required caller inputs that were empty.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ValidationError {
	/// Authorization URL inputs were empty.
	#[error("Empty parameters.")]
	EmptyParameters,
	/// Redirect URI was empty.
	#[error("Redirect URI cannot be empty.")]
	EmptyRedirectUri,
	/// Request token was empty.
	#[error("Request token cannot be empty.")]
	EmptyRequestToken,
	/// Item URL was empty.
	#[error("Item URL cannot be empty.")]
	EmptyUrl,
	/// Access token was empty.
	#[error("Access token cannot be empty.")]
	EmptyAccessToken,
}

/// Configuration and request-construction failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// Service endpoint cannot be parsed.
	#[error("Service endpoint `{endpoint}` is invalid.")]
	InvalidEndpoint {
		/// Endpoint string that failed to parse.
		endpoint: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Request body could not be encoded as JSON.
	#[error("Request body could not be encoded as JSON.")]
	RequestEncode(#[source] serde_json::Error),
	/// Service configuration failed validation.
	#[error(transparent)]
	Service(#[from] ServiceConfigError),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Transport-level failures (network, timeout, unexpected HTTP status).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the Pocket API.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// The service answered with a status other than `200 OK`.
	#[error("Pocket API responded with {}.", status_line(.status, .status_text))]
	Status {
		/// HTTP status code.
		status: u16,
		/// Canonical reason phrase for the status; may be empty.
		status_text: String,
		/// Value of the `X-Error-Code` header, if present.
		error_code: Option<u32>,
		/// Value of the `X-Error` header, if present.
		message: Option<String>,
		/// Retry hint from `Retry-After` or `X-Limit-User-Reset`.
		retry_after: Option<Duration>,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}

	/// Returns the HTTP status when the failure came from a response.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Status { status, .. } => Some(*status),
			_ => None,
		}
	}
}
#[cfg(feature = "reqwest")]
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

fn status_line(status: &u16, status_text: &str) -> String {
	if status_text.is_empty() { status.to_string() } else { format!("{status} {status_text}") }
}

/// Response-shape failures: the call succeeded but the payload is unusable.
#[derive(Debug, ThisError)]
pub enum ProtocolError {
	/// `code` was missing or empty in the request-token response.
	#[error("Empty request token code in API response.")]
	EmptyRequestTokenCode,
	/// `access_token` was missing or empty in the authorize response.
	#[error("Empty access token in API response.")]
	EmptyAccessToken,
	/// `username` was missing or empty in the authorize response.
	#[error("Empty username in API response.")]
	EmptyUsername,
	/// Response body was not the expected JSON object.
	#[error("Pocket API returned malformed JSON.")]
	MalformedResponse {
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
}
