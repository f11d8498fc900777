//! Transport primitives for API calls.
//!
//! The module exposes [`HttpTransport`] alongside the owned [`HttpRequest`] and
//! [`HttpResponse`] values so embedders can plug in custom HTTP stacks (or scripted fakes in
//! tests) without touching the auth and retry logic that sits above the transport.

// std
use std::ops::Deref;
// crates.io
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
// self
use crate::{
	_prelude::*,
	config::ApiConfig,
	error::{ConfigError, DecodeError, TransportError},
};

/// Boxed future returned by [`HttpTransport::send`].
pub type TransportFuture<'a> =
	Pin<Box<dyn Future<Output = Result<HttpResponse, TransportError>> + 'a + Send>>;

/// Abstraction over HTTP stacks capable of executing API requests.
///
/// Implementations must be `Send + Sync + 'static` so a single transport can be shared behind
/// an `Arc` by the client and the auth service, including from inside the shared refresh
/// future. Non-success statuses are **not** transport errors; they must be returned as an
/// ordinary [`HttpResponse`] so the caller can apply its 401 handling.
pub trait HttpTransport
where
	Self: 'static + Send + Sync,
{
	/// Executes `request` and buffers the full response body.
	fn send(&self, request: HttpRequest) -> TransportFuture<'_>;
}

/// Owned request description handed to an [`HttpTransport`].
#[derive(Clone, Debug)]
pub struct HttpRequest {
	/// HTTP verb.
	pub method: Method,
	/// Absolute target URL.
	pub url: Url,
	/// Request headers.
	pub headers: HeaderMap,
	/// Serialized request body, if any.
	pub body: Option<Vec<u8>>,
}
impl HttpRequest {
	/// Creates a body-less request.
	pub fn new(method: Method, url: Url) -> Self {
		Self { method, url, headers: HeaderMap::new(), body: None }
	}

	/// Attaches a JSON body and the matching content type.
	pub fn with_json_body(mut self, body: Vec<u8>) -> Self {
		self.headers
			.insert(reqwest::header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
		self.body = Some(body);

		self
	}

	/// Inserts a header, replacing any previous value for the same name.
	pub fn with_header(mut self, name: HeaderName, value: HeaderValue) -> Self {
		self.headers.insert(name, value);

		self
	}
}

/// Fully buffered response returned by an [`HttpTransport`].
#[derive(Clone, Debug)]
pub struct HttpResponse {
	/// HTTP status code.
	pub status: StatusCode,
	/// Response headers.
	pub headers: HeaderMap,
	/// Raw response body.
	pub body: Vec<u8>,
}
impl HttpResponse {
	/// Creates a response with the provided status and body.
	pub fn new(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
		Self { status, headers: HeaderMap::new(), body: body.into() }
	}

	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		self.status.is_success()
	}

	/// Returns `true` when the body carries no content.
	pub fn is_empty(&self) -> bool {
		self.status == StatusCode::NO_CONTENT || self.body.iter().all(u8::is_ascii_whitespace)
	}

	/// Decodes the body as JSON, reporting the failing field path on mismatch.
	///
	/// Empty bodies decode as JSON `null`, so `()` and `Option<_>` targets accept `204`.
	pub fn json<T>(&self, path: &str) -> Result<T, DecodeError>
	where
		T: DeserializeOwned,
	{
		let result = if self.is_empty() {
			serde_path_to_error::deserialize(serde_json::Value::Null)
		} else {
			let mut de = serde_json::Deserializer::from_slice(&self.body);

			serde_path_to_error::deserialize(&mut de)
		};

		result.map_err(|source| DecodeError::Json {
			path: path.to_owned(),
			status: self.status.as_u16(),
			source,
		})
	}

	/// Extracts the server-provided `message` field from a JSON error body.
	pub fn error_message(&self) -> Option<String> {
		#[derive(Deserialize)]
		struct ErrorBody {
			message: Option<String>,
		}

		serde_json::from_slice::<ErrorBody>(&self.body)
			.ok()
			.and_then(|body| body.message)
			.filter(|message| !message.trim().is_empty())
	}
}

/// Thin wrapper around [`reqwest::Client`] so shared HTTP behavior lives in one place.
#[derive(Clone, Debug, Default)]
pub struct ReqwestTransport(pub reqwest::Client);
impl ReqwestTransport {
	/// Wraps an existing reqwest client.
	pub fn with_client(client: reqwest::Client) -> Self {
		Self(client)
	}

	/// Builds a reqwest client honouring the timeout and user agent in `config`.
	pub fn from_config(config: &ApiConfig) -> Result<Self, ConfigError> {
		let mut builder = reqwest::Client::builder();

		if let Some(timeout) = config.timeout {
			builder = builder.timeout(timeout);
		}
		if let Some(user_agent) = config.user_agent.as_deref() {
			builder = builder.user_agent(user_agent);
		}

		builder.build().map(Self).map_err(ConfigError::http_client_build)
	}
}
impl AsRef<reqwest::Client> for ReqwestTransport {
	fn as_ref(&self) -> &reqwest::Client {
		&self.0
	}
}
impl Deref for ReqwestTransport {
	type Target = reqwest::Client;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl HttpTransport for ReqwestTransport {
	fn send(&self, request: HttpRequest) -> TransportFuture<'_> {
		Box::pin(async move {
			let HttpRequest { method, url, headers, body } = request;
			let mut builder = self.0.request(method, url.clone()).headers(headers);

			if let Some(body) = body {
				builder = builder.body(body);
			}

			let response =
				builder.send().await.map_err(|e| TransportError::network(&url, e))?;
			let status = response.status();
			let headers = response.headers().to_owned();
			let body = response.bytes().await.map_err(|e| TransportError::network(&url, e))?;

			Ok(HttpResponse { status, headers, body: body.to_vec() })
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn error_message_prefers_server_message() {
		let response = HttpResponse::new(
			StatusCode::CONFLICT,
			br#"{"message":"Specialist is fully booked","status":409}"#.to_vec(),
		);

		assert_eq!(response.error_message().as_deref(), Some("Specialist is fully booked"));

		let response = HttpResponse::new(StatusCode::BAD_GATEWAY, b"<html>bad gateway</html>".to_vec());

		assert_eq!(response.error_message(), None);

		let response = HttpResponse::new(StatusCode::BAD_REQUEST, br#"{"message":"  "}"#.to_vec());

		assert_eq!(response.error_message(), None);
	}

	#[test]
	fn empty_detection_covers_no_content_and_blank_bodies() {
		assert!(HttpResponse::new(StatusCode::NO_CONTENT, Vec::new()).is_empty());
		assert!(HttpResponse::new(StatusCode::OK, b"  \n".to_vec()).is_empty());
		assert!(!HttpResponse::new(StatusCode::OK, b"[]".to_vec()).is_empty());
	}
}
