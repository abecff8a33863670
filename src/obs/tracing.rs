// self
use crate::{
	_prelude::*,
	obs::{CallOutcome, Operation},
};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedCall<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedCall<F> = F;

/// Span wrapping one Pocket API call.
///
/// The span opens with `operation` and `stage`; `outcome` stays empty until
/// [`CallSpan::record_outcome`] runs.
#[derive(Clone, Debug)]
pub struct CallSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl CallSpan {
	/// Opens a span for `operation` at the given call site.
	pub fn new(operation: Operation, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"pocket_client.call",
				operation = operation.as_str(),
				stage,
				outcome = tracing::field::Empty,
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (operation, stage);

			Self {}
		}
	}

	/// Fills in the span's `outcome` field.
	pub fn record_outcome(&self, outcome: CallOutcome) {
		#[cfg(feature = "tracing")]
		{
			self.span.record("outcome", outcome.as_str());
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = outcome;
		}
	}

	/// Enters the span for synchronous operations such as URL construction.
	pub fn entered(self) -> CallSpanGuard {
		#[cfg(feature = "tracing")]
		{
			CallSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			CallSpanGuard {}
		}
	}

	/// Runs a network call inside the span.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedCall<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// Guard returned by [`CallSpan::entered`].
pub struct CallSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for CallSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("CallSpanGuard(..)")
	}
}

/// Emits a debug event for a failed call, with the HTTP status and Pocket error code when the
/// service answered.
pub fn trace_failure(operation: Operation, err: &Error) {
	#[cfg(feature = "tracing")]
	{
		let error_code = match err {
			Error::Transport(crate::error::TransportError::Status { error_code, .. }) =>
				*error_code,
			_ => None,
		};

		tracing::debug!(
			operation = operation.as_str(),
			outcome = CallOutcome::of_error(err).as_str(),
			status = err.status(),
			error_code,
			error = %err,
			"Pocket API call failed."
		);
	}
	#[cfg(not(feature = "tracing"))]
	{
		let _ = (operation, err);
	}
}
