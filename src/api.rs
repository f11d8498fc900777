//! Authenticated request wrapper and typed resource operations.
//!
//! [`ApiClient::request`] is the single path every call takes:
//!
//! 1. When the request needs a session, a missing access token fails fast with
//!    [`Error::NotAuthenticated`] and an expired one is refreshed before sending.
//! 2. The request carries `Authorization: Bearer …` whenever a token is stored.
//! 3. A `401` triggers one shared refresh and exactly one retry. If the refresh fails the user
//!    is signed out, [`ClientEvents::on_session_expired`] fires, and
//!    [`Error::SessionExpired`] is returned.
//! 4. Other failures become [`Error::Api`] with the server's `message` when it sent one.
//! 5. Errors are reported to [`ClientEvents::on_error`] unless the caller opted out.

pub mod events;

mod blogs;
mod bookings;
mod catalog;
mod dashboard;
mod reports;
mod schedule;
mod specialists;
mod users;

pub use events::*;

// crates.io
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
// self
use crate::{
	_prelude::*,
	auth::{AuthService, TokenSecret, service},
	config::ApiConfig,
	error::ConfigError,
	http::{HttpRequest, HttpResponse, HttpTransport, ReqwestTransport},
	obs::{self, OpKind, OpOutcome, OpSpan},
	store::SessionStore,
};

/// Per-request behaviour switches.
#[derive(Clone, Debug)]
pub struct RequestOptions {
	/// Fail with [`Error::NotAuthenticated`] when no session exists (default `true`).
	pub requires_auth: bool,
	/// Report failures to [`ClientEvents::on_error`] (default `true`).
	pub report_errors: bool,
	/// Extra headers; they override the defaults.
	pub headers: HeaderMap,
}
impl RequestOptions {
	/// Options for endpoints that work without a session.
	pub fn public() -> Self {
		Self { requires_auth: false, ..Default::default() }
	}

	/// Suppresses error reporting for this request.
	pub fn quiet(mut self) -> Self {
		self.report_errors = false;

		self
	}

	/// Adds or replaces a header.
	pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
		self.headers.insert(name, value);

		self
	}
}
impl Default for RequestOptions {
	fn default() -> Self {
		Self { requires_auth: true, report_errors: true, headers: HeaderMap::new() }
	}
}

/// Typed client for the booking API; cheap to clone and safe to share across tasks.
#[derive(Clone)]
pub struct ApiClient {
	config: ApiConfig,
	transport: Arc<dyn HttpTransport>,
	auth: AuthService,
	events: Arc<dyn ClientEvents>,
}
impl ApiClient {
	/// Creates a client backed by the default reqwest transport.
	pub fn new(config: ApiConfig, store: Arc<dyn SessionStore>) -> Result<Self> {
		let transport = ReqwestTransport::from_config(&config)?;

		Ok(Self::with_transport(config, Arc::new(transport), store))
	}

	/// Creates a client from [`ApiConfig::from_env`].
	pub fn from_env(store: Arc<dyn SessionStore>) -> Result<Self> {
		Self::new(ApiConfig::from_env()?, store)
	}

	/// Creates a client that sends every request through `transport`.
	pub fn with_transport(
		config: ApiConfig,
		transport: Arc<dyn HttpTransport>,
		store: Arc<dyn SessionStore>,
	) -> Self {
		let auth = AuthService::new(config.clone(), transport.clone(), store);

		Self { config, transport, auth, events: Arc::new(NoopEvents) }
	}

	/// Replaces the event sink.
	pub fn with_events(mut self, events: Arc<dyn ClientEvents>) -> Self {
		self.events = events;

		self
	}

	/// Session operations (login, logout, refresh, profile).
	pub fn auth(&self) -> &AuthService {
		&self.auth
	}

	/// Active configuration.
	pub fn config(&self) -> &ApiConfig {
		&self.config
	}

	/// Sends a request and decodes the JSON response into `T`.
	///
	/// `path` is relative to the base URL and may carry a query string. Empty and `204`
	/// responses decode from JSON `null`, so `()` and `Option<_>` targets accept them.
	pub async fn request<T, B>(
		&self,
		method: Method,
		path: &str,
		body: Option<&B>,
		options: RequestOptions,
	) -> Result<T>
	where
		T: DeserializeOwned,
		B: ?Sized + Serialize,
	{
		let span = OpSpan::new(OpKind::Request, "request");

		obs::record_op_outcome(OpKind::Request, OpOutcome::Attempt);

		let result = match body.map(serde_json::to_vec).transpose() {
			Ok(payload) => span.instrument(self.execute(method, path, payload, &options)).await,
			Err(e) => Err(ConfigError::RequestBody(e).into()),
		};

		match &result {
			Ok(_) => obs::record_op_outcome(OpKind::Request, OpOutcome::Success),
			Err(e) => {
				obs::record_op_outcome(OpKind::Request, OpOutcome::Failure);

				if options.report_errors {
					self.events.on_error(e);
				}
			},
		}

		result
	}

	/// `GET path`.
	pub async fn get<T>(&self, path: &str) -> Result<T>
	where
		T: DeserializeOwned,
	{
		self.get_with(path, RequestOptions::default()).await
	}

	/// `GET path` with explicit options.
	pub async fn get_with<T>(&self, path: &str, options: RequestOptions) -> Result<T>
	where
		T: DeserializeOwned,
	{
		self.request::<T, ()>(Method::GET, path, None, options).await
	}

	/// `POST path` with a JSON body.
	pub async fn post<T, B>(&self, path: &str, body: &B) -> Result<T>
	where
		T: DeserializeOwned,
		B: ?Sized + Serialize,
	{
		self.post_with(path, body, RequestOptions::default()).await
	}

	/// `POST path` with a JSON body and explicit options.
	pub async fn post_with<T, B>(&self, path: &str, body: &B, options: RequestOptions) -> Result<T>
	where
		T: DeserializeOwned,
		B: ?Sized + Serialize,
	{
		self.request(Method::POST, path, Some(body), options).await
	}

	/// `PUT path` with a JSON body.
	pub async fn put<T, B>(&self, path: &str, body: &B) -> Result<T>
	where
		T: DeserializeOwned,
		B: ?Sized + Serialize,
	{
		self.put_with(path, body, RequestOptions::default()).await
	}

	/// `PUT path` with a JSON body and explicit options.
	pub async fn put_with<T, B>(&self, path: &str, body: &B, options: RequestOptions) -> Result<T>
	where
		T: DeserializeOwned,
		B: ?Sized + Serialize,
	{
		self.request(Method::PUT, path, Some(body), options).await
	}

	/// `PATCH path` with a JSON body.
	pub async fn patch<T, B>(&self, path: &str, body: &B) -> Result<T>
	where
		T: DeserializeOwned,
		B: ?Sized + Serialize,
	{
		self.patch_with(path, body, RequestOptions::default()).await
	}

	/// `PATCH path` with a JSON body and explicit options.
	pub async fn patch_with<T, B>(&self, path: &str, body: &B, options: RequestOptions) -> Result<T>
	where
		T: DeserializeOwned,
		B: ?Sized + Serialize,
	{
		self.request(Method::PATCH, path, Some(body), options).await
	}

	/// `DELETE path`.
	pub async fn delete<T>(&self, path: &str) -> Result<T>
	where
		T: DeserializeOwned,
	{
		self.delete_with(path, RequestOptions::default()).await
	}

	/// `DELETE path` with explicit options.
	pub async fn delete_with<T>(&self, path: &str, options: RequestOptions) -> Result<T>
	where
		T: DeserializeOwned,
	{
		self.request::<T, ()>(Method::DELETE, path, None, options).await
	}

	async fn execute<T>(
		&self,
		method: Method,
		path: &str,
		payload: Option<Vec<u8>>,
		options: &RequestOptions,
	) -> Result<T>
	where
		T: DeserializeOwned,
	{
		if options.requires_auth {
			let token = self.auth.get_token().await?.ok_or(Error::NotAuthenticated)?;

			if self.auth.is_token_expired(&token) {
				obs::debug(OpKind::Request, "Token expired, refreshing before sending.");

				if let Err(e) = self.auth.refresh_token().await {
					return Err(self.end_session(e).await);
				}
			}
		}

		let url = self.config.url_for(path)?;

		obs::debug(OpKind::Request, format_args!("Making {method} request to {path}."));

		let (mut response, sent_token) =
			self.send_once(&method, &url, payload.as_deref(), options).await?;

		if response.status == StatusCode::UNAUTHORIZED {
			let stored = self.auth.get_token().await?;
			let rotated = match (&stored, &sent_token) {
				(Some(stored), Some(sent)) => stored.expose() != sent.expose(),
				_ => false,
			};

			if rotated {
				// Another caller refreshed while this request was in flight.
				obs::debug(OpKind::Request, "Received 401 for a replaced token, retrying.");
			} else {
				obs::debug(OpKind::Request, "Received 401, attempting token refresh.");

				if let Err(e) = self.auth.refresh_token().await {
					return Err(self.end_session(e).await);
				}

				obs::debug(OpKind::Request, "Token refreshed, retrying request.");
			}

			(response, _) = self.send_once(&method, &url, payload.as_deref(), options).await?;
		}
		if !response.is_success() {
			return Err(Error::Api {
				status: response.status.as_u16(),
				message: response
					.error_message()
					.unwrap_or_else(|| format!("Server error: {}", response.status.as_u16())),
			});
		}

		Ok(response.json(path)?)
	}

	async fn send_once(
		&self,
		method: &Method,
		url: &Url,
		payload: Option<&[u8]>,
		options: &RequestOptions,
	) -> Result<(HttpResponse, Option<TokenSecret>)> {
		let json = HeaderValue::from_static("application/json");
		let mut request = HttpRequest::new(method.clone(), url.clone())
			.with_header(ACCEPT, json.clone())
			.with_header(CONTENT_TYPE, json);

		// Read per attempt so a retry picks up the refreshed token.
		let token = self.auth.get_token().await?;

		if let Some(token) = &token {
			request = request.with_header(AUTHORIZATION, service::bearer_header(token)?);
		}

		request.body = payload.map(<[u8]>::to_vec);

		for (name, value) in &options.headers {
			request.headers.insert(name.clone(), value.clone());
		}

		Ok((self.transport.send(request).await?, token))
	}

	async fn end_session(&self, cause: Error) -> Error {
		obs::warn(OpKind::Request, format_args!("Refresh failed, signing out: {cause}"));

		if let Err(e) = self.auth.logout().await {
			obs::warn(OpKind::Request, format_args!("Failed to clear session: {e}"));
		}

		self.events.on_session_expired();

		match cause {
			Error::SessionExpired { .. } => cause,
			other => Error::SessionExpired { reason: other.to_string() },
		}
	}
}
impl Debug for ApiClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("ApiClient")
			.field("base_url", &self.config.base_url.as_str())
			.field("auth", &self.auth)
			.finish_non_exhaustive()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn options_default_to_authenticated_and_reported() {
		let options = RequestOptions::default();

		assert!(options.requires_auth);
		assert!(options.report_errors);

		let options = RequestOptions::public()
			.quiet()
			.header(ACCEPT, HeaderValue::from_static("text/plain"));

		assert!(!options.requires_auth);
		assert!(!options.report_errors);
		assert_eq!(options.headers.get(ACCEPT).map(HeaderValue::as_bytes), Some(&b"text/plain"[..]));
	}
}
