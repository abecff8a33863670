//! Optional observability helpers for API calls.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `pocket_client.call` with the `operation`
//!   and `stage` (call site) fields; the `outcome` field is filled in when the call finishes,
//!   and failures emit a debug event carrying the HTTP status and Pocket error code.
//! - Enable `metrics` to increment the `pocket_client_call_total` counter (labels `operation`,
//!   `outcome`) and, for non-200 responses, `pocket_client_http_status_total` (labels
//!   `operation`, `status`).

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Client operations observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// Request-token acquisition.
	RequestToken,
	/// Authorization URL construction.
	AuthorizationUrl,
	/// Access-token exchange.
	AccessToken,
	/// Item submission.
	AddItem,
}
impl Operation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::RequestToken => "request_token",
			Operation::AuthorizationUrl => "authorization_url",
			Operation::AccessToken => "access_token",
			Operation::AddItem => "add_item",
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
///
/// Failures are split by error class so rejected input, network trouble, and misbehaving
/// responses can be told apart on a dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Entry to a client operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Caller input rejected before any request was sent.
	Rejected,
	/// Local configuration or request-encoding failure.
	ConfigFailure,
	/// Network failure, timeout, or non-200 status.
	TransportFailure,
	/// Response arrived but its payload was unusable.
	ProtocolFailure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Rejected => "rejected",
			CallOutcome::ConfigFailure => "config_failure",
			CallOutcome::TransportFailure => "transport_failure",
			CallOutcome::ProtocolFailure => "protocol_failure",
		}
	}

	/// Maps a finished call to its outcome label.
	pub fn of<T>(result: &Result<T>) -> Self {
		match result {
			Ok(_) => CallOutcome::Success,
			Err(err) => Self::of_error(err),
		}
	}

	/// Maps an error to the failure label of its class.
	pub fn of_error(err: &Error) -> Self {
		match err {
			Error::Validation(_) => CallOutcome::Rejected,
			Error::Config(_) => CallOutcome::ConfigFailure,
			Error::Transport(_) => CallOutcome::TransportFailure,
			Error::Protocol(_) => CallOutcome::ProtocolFailure,
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
