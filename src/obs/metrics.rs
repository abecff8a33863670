// self
use crate::obs::{CallOutcome, Operation};

/// Increments `pocket_client_call_total` for `operation` and `outcome` (when enabled).
pub fn record_call_outcome(operation: Operation, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"pocket_client_call_total",
			"operation" => operation.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome);
	}
}

/// Increments `pocket_client_http_status_total` for a non-200 answer (when enabled).
pub fn record_http_status(operation: Operation, status: u16) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"pocket_client_http_status_total",
			"operation" => operation.as_str(),
			"status" => status.to_string()
		)
		.increment(1);
	}
	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, status);
	}
}
