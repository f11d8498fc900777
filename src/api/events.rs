//! Hooks the client calls when a request fails or the session ends.

// self
use crate::_prelude::*;

/// Receives user-facing notifications from [`ApiClient`](crate::api::ApiClient).
///
/// Every method has a no-op default. Implementations must be cheap and must not block; they
/// run inline on the request task.
pub trait ClientEvents
where
	Self: Send + Sync,
{
	/// Called with every error a request returns while `report_errors` is set.
	fn on_error(&self, error: &Error) {
		let _ = error;
	}

	/// Called once the session could not be renewed and the user has been signed out.
	fn on_session_expired(&self) {}
}

/// Event sink that ignores everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopEvents;
impl ClientEvents for NoopEvents {}

/// Event sink that forwards notifications to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingEvents;
impl ClientEvents for TracingEvents {
	fn on_error(&self, error: &Error) {
		#[cfg(feature = "tracing")]
		tracing::error!(status = ?error.status(), "API error: {error}");
		#[cfg(not(feature = "tracing"))]
		let _ = error;
	}

	fn on_session_expired(&self) {
		#[cfg(feature = "tracing")]
		tracing::warn!("Session expired; the user must sign in again.");
	}
}
