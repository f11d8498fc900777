//! Client-level error types shared across the transport, auth, and resource layers.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Session storage failure.
	#[error("{0}")]
	Storage(
		#[from]
		#[source]
		crate::store::StoreError,
	),
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS, timeouts).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response body did not match the expected shape.
	#[error(transparent)]
	Decode(#[from] DecodeError),
	/// Booking form rejected before it reached the server.
	#[error(transparent)]
	Validation(#[from] crate::booking::BookingValidationError),

	/// Server answered with a non-success status.
	#[error("{message}")]
	Api {
		/// HTTP status code returned by the server.
		status: u16,
		/// Server-supplied `message`, or a generic status summary.
		message: String,
	},
	/// The request needs a session but no access token is stored.
	#[error("Please sign in to continue.")]
	NotAuthenticated,
	/// The session could not be renewed; the caller has been signed out.
	#[error("Session expired, please sign in again: {reason}.")]
	SessionExpired {
		/// Why the refresh failed.
		reason: String,
	},
}
impl Error {
	/// Returns the HTTP status attached to server-side failures.
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Api { status, .. } => Some(*status),
			Self::Decode(DecodeError::Json { status, .. }) => Some(*status),
			_ => None,
		}
	}

	/// Returns `true` when the caller must sign in again.
	pub fn requires_login(&self) -> bool {
		matches!(self, Self::NotAuthenticated | Self::SessionExpired { .. })
	}
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
	/// Base URL cannot be parsed.
	#[error("Base URL `{value}` is invalid.")]
	InvalidBaseUrl {
		/// Raw value that failed to parse.
		value: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Base URL parsed but cannot host endpoint paths.
	#[error("Base URL `{url}` must be an http(s) URL that can carry a path.")]
	UnsupportedBaseUrl {
		/// Offending URL.
		url: String,
	},
	/// Endpoint path could not be joined onto the base URL.
	#[error("Endpoint path `{path}` is invalid.")]
	InvalidEndpoint {
		/// Offending path.
		path: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// Request body could not be serialized.
	#[error("Request body could not be serialized.")]
	RequestBody(#[source] serde_json::Error),
	/// Date or time could not be rendered for a request.
	#[error("Date or time could not be formatted.")]
	DateFormat(#[from] time::error::Format),
}
impl From<time::error::Format> for Error {
	fn from(e: time::error::Format) -> Self {
		Self::Config(e.into())
	}
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling {url}.")]
	Network {
		/// Target URL of the failed call.
		url: String,
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
	/// Underlying IO failure surfaced during transport.
	#[error("I/O error occurred while calling the API.")]
	Io(#[from] std::io::Error),
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(url: &Url, src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { url: url.to_string(), source: Box::new(src) }
	}
}

/// Response decoding failures.
#[derive(Debug, ThisError)]
pub enum DecodeError {
	/// Response body was not the JSON shape the caller asked for.
	#[error("Response from {path} returned malformed JSON.")]
	Json {
		/// Endpoint path that produced the body.
		path: String,
		/// HTTP status code of the response.
		status: u16,
		/// Structured parsing failure.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
	},
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::store::StoreError;

	#[test]
	fn store_error_converts_with_source() {
		let store_error = StoreError::Backend { message: "disk full".into() };
		let error: Error = store_error.clone().into();

		assert!(matches!(error, Error::Storage(_)));
		assert!(error.to_string().contains("disk full"));

		let source = StdError::source(&error).expect("Storage error should expose its source.");

		assert_eq!(source.to_string(), store_error.to_string());
	}

	#[test]
	fn api_error_displays_server_message() {
		let error = Error::Api { status: 409, message: "Slot already booked".into() };

		assert_eq!(error.to_string(), "Slot already booked");
		assert_eq!(error.status(), Some(409));
		assert!(!error.requires_login());
	}

	#[test]
	fn session_errors_require_login() {
		assert!(Error::NotAuthenticated.requires_login());
		assert!(Error::SessionExpired { reason: "refresh rejected".into() }.requires_login());
	}
}
