//! Session lifecycle: sign-in, registration, logout, profile reloads, and single-flight token
//! refresh.
//!
//! [`AuthService::refresh_token`] guarantees that concurrent callers who all discover an
//! expired session trigger **one** `POST /auth/refresh`. The first caller stores the pending
//! exchange as a shared future; everyone arriving while it is in flight awaits that same
//! future. Once it resolves (successfully or not) the slot is cleared, so the next expiry
//! starts a fresh exchange.

mod metrics;

pub use metrics::RefreshMetrics;

// crates.io
use futures::future::{BoxFuture, FutureExt, Shared};
use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderValue};
// self
use crate::{
	_prelude::*,
	auth::{
		AuthResponse, CachedUser, LoginRequest, RegisterRequest, TokenSecret, claims,
		session::RefreshRequest,
	},
	config::{ApiConfig, endpoints},
	error::ConfigError,
	http::{HttpRequest, HttpResponse, HttpTransport},
	obs::{self, OpKind, OpOutcome, OpSpan},
	store::{SessionStore, StorageKey},
};

type SharedRefresh = Shared<BoxFuture<'static, RefreshOutcome>>;

/// Result of one refresh exchange, shared by every caller that awaited it.
#[derive(Clone, Debug)]
enum RefreshOutcome {
	Refreshed(TokenSecret),
	Failed(String),
}

/// Handle over the persisted session; cheap to clone and safe to share across tasks.
#[derive(Clone)]
pub struct AuthService {
	inner: Arc<AuthInner>,
}
struct AuthInner {
	config: ApiConfig,
	transport: Arc<dyn HttpTransport>,
	store: Arc<dyn SessionStore>,
	pending_refresh: Mutex<Option<SharedRefresh>>,
	refresh_metrics: RefreshMetrics,
}
impl AuthService {
	/// Creates a service that talks to `config.base_url` through `transport` and persists the
	/// session in `store`.
	pub fn new(
		config: ApiConfig,
		transport: Arc<dyn HttpTransport>,
		store: Arc<dyn SessionStore>,
	) -> Self {
		Self {
			inner: Arc::new(AuthInner {
				config,
				transport,
				store,
				pending_refresh: Mutex::new(None),
				refresh_metrics: RefreshMetrics::default(),
			}),
		}
	}

	/// Counters describing refresh activity so far.
	pub fn refresh_metrics(&self) -> &RefreshMetrics {
		&self.inner.refresh_metrics
	}

	/// Session store backing this service.
	pub fn store(&self) -> &Arc<dyn SessionStore> {
		&self.inner.store
	}

	/// Returns `true` while a refresh exchange is in flight.
	pub fn refresh_in_flight(&self) -> bool {
		self.inner.pending_refresh.lock().is_some()
	}

	/// Reads the stored access token.
	pub async fn get_token(&self) -> Result<Option<TokenSecret>> {
		Ok(self.inner.store.get(StorageKey::Token).await?.map(TokenSecret::new))
	}

	/// Reads the stored refresh token.
	pub async fn get_refresh_token(&self) -> Result<Option<TokenSecret>> {
		Ok(self.inner.store.get(StorageKey::RefreshToken).await?.map(TokenSecret::new))
	}

	/// Returns `true` when `token` is expired or cannot be decoded.
	pub fn is_token_expired(&self, token: &TokenSecret) -> bool {
		claims::is_token_expired(token.expose())
	}

	/// Parses the cached user snapshot.
	///
	/// A corrupt snapshot signs the user out and yields `None`.
	pub async fn get_current_user(&self) -> Result<Option<CachedUser>> {
		let Some(raw) = self.inner.store.get(StorageKey::User).await? else {
			return Ok(None);
		};

		match serde_json::from_str(&raw) {
			Ok(user) => Ok(Some(user)),
			Err(e) => {
				obs::warn(OpKind::Profile, format_args!("Error parsing user data: {e}"));
				self.logout().await?;

				Ok(None)
			},
		}
	}

	/// Signs in with username + password and persists the new session.
	pub async fn login(
		&self,
		username: impl Into<String>,
		password: impl Into<String>,
	) -> Result<CachedUser> {
		let body = LoginRequest { username: username.into(), password: password.into() };

		self.authenticate(OpKind::Login, endpoints::auth::LOGIN, &body, "Login failed").await
	}

	/// Registers a customer account and persists the new session.
	pub async fn register(&self, request: &RegisterRequest) -> Result<CachedUser> {
		self.authenticate(OpKind::Register, endpoints::auth::REGISTER, request, "Registration failed")
			.await
	}

	/// Removes every persisted session key.
	pub async fn logout(&self) -> Result<()> {
		clear_session(self.inner.store.as_ref()).await
	}

	/// Exchanges the stored refresh token for a new access token.
	///
	/// Concurrent callers share one in-flight exchange. On failure the session is cleared and
	/// [`Error::SessionExpired`] is returned to every waiting caller.
	pub async fn refresh_token(&self) -> Result<TokenSecret> {
		let Some(refresh) = self.get_refresh_token().await? else {
			self.logout().await?;

			return Err(Error::SessionExpired { reason: "no refresh token is stored".into() });
		};
		let shared = {
			let mut pending = self.inner.pending_refresh.lock();

			match pending.as_ref() {
				Some(inflight) => {
					self.inner.refresh_metrics.record_join();

					inflight.clone()
				},
				None => {
					let exchange = run_refresh(self.inner.clone(), refresh).boxed().shared();

					*pending = Some(exchange.clone());

					exchange
				},
			}
		};

		match shared.await {
			RefreshOutcome::Refreshed(token) => Ok(token),
			RefreshOutcome::Failed(reason) => Err(Error::SessionExpired { reason }),
		}
	}

	/// Reloads the profile from `/auth/me`, refreshing the session first when needed.
	///
	/// Yields `None` when no session exists or the profile cannot be fetched; the cached
	/// snapshot is replaced on success.
	pub async fn get_user_profile(&self) -> Option<CachedUser> {
		let span = OpSpan::new(OpKind::Profile, "get_user_profile");

		match span.instrument(self.fetch_profile()).await {
			Ok(profile) => profile,
			Err(e) => {
				obs::warn(OpKind::Profile, format_args!("Error fetching user profile: {e}"));

				None
			},
		}
	}

	async fn fetch_profile(&self) -> Result<Option<CachedUser>> {
		let Some(mut token) = self.get_token().await? else {
			return Ok(None);
		};

		if self.is_token_expired(&token) {
			token = match self.refresh_token().await {
				Ok(token) => token,
				Err(_) => return Ok(None),
			};
		}

		let request = HttpRequest::new(Method::GET, self.inner.config.url_for(endpoints::auth::ME)?)
			.with_header(ACCEPT, HeaderValue::from_static("application/json"))
			.with_header(AUTHORIZATION, bearer_header(&token)?);
		let response = self.inner.transport.send(request).await?;

		if !response.is_success() {
			return Err(api_error(&response, "Failed to get user profile"));
		}

		let profile: CachedUser = response.json(endpoints::auth::ME)?;
		let snapshot = serde_json::to_string(&profile).map_err(ConfigError::RequestBody)?;

		self.inner.store.set(StorageKey::User, snapshot).await?;

		Ok(Some(profile))
	}

	async fn authenticate<B>(
		&self,
		kind: OpKind,
		path: &'static str,
		body: &B,
		fallback: &'static str,
	) -> Result<CachedUser>
	where
		B: Serialize,
	{
		let span = OpSpan::new(kind, path);

		obs::record_op_outcome(kind, OpOutcome::Attempt);

		let result = span
			.instrument(async {
				let response = post_json(&self.inner, path, body).await?;

				if !response.is_success() {
					return Err(api_error(&response, fallback));
				}

				let session: AuthResponse = response.json(path)?;

				persist_session(self.inner.store.as_ref(), &session, true).await?;

				Ok(session.cached_user())
			})
			.await;

		match &result {
			Ok(_) => obs::record_op_outcome(kind, OpOutcome::Success),
			Err(_) => obs::record_op_outcome(kind, OpOutcome::Failure),
		}

		result
	}
}
impl Debug for AuthService {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthService")
			.field("base_url", &self.inner.config.base_url.as_str())
			.field("refresh_in_flight", &self.refresh_in_flight())
			.field("refresh_metrics", &self.inner.refresh_metrics)
			.finish()
	}
}

/// Builds an `Authorization: Bearer …` header value.
pub(crate) fn bearer_header(token: &TokenSecret) -> Result<HeaderValue> {
	let mut value = HeaderValue::try_from(token.bearer()).map_err(|_| Error::SessionExpired {
		reason: "stored access token is not a valid header value".into(),
	})?;

	value.set_sensitive(true);

	Ok(value)
}

/// Maps a non-success response to [`Error::Api`], preferring the server's message.
pub(crate) fn api_error(response: &HttpResponse, fallback: &str) -> Error {
	Error::Api {
		status: response.status.as_u16(),
		message: response.error_message().unwrap_or_else(|| fallback.to_owned()),
	}
}

fn run_refresh(inner: Arc<AuthInner>, refresh: TokenSecret) -> impl Future<Output = RefreshOutcome> {
	let span = OpSpan::new(OpKind::Refresh, "refresh_token");

	span.instrument(async move {
		obs::record_op_outcome(OpKind::Refresh, OpOutcome::Attempt);
		obs::debug(OpKind::Refresh, "Access token expired, refreshing.");
		inner.refresh_metrics.record_attempt();

		let outcome = match exchange_refresh(&inner, &refresh).await {
			Ok(token) => {
				inner.refresh_metrics.record_success();
				obs::record_op_outcome(OpKind::Refresh, OpOutcome::Success);

				RefreshOutcome::Refreshed(token)
			},
			Err(e) => {
				obs::warn(OpKind::Refresh, format_args!("Token refresh failed: {e}"));

				if let Err(clear_err) = clear_session(inner.store.as_ref()).await {
					obs::warn(
						OpKind::Refresh,
						format_args!("Failed to clear session after refresh failure: {clear_err}"),
					);
				}

				inner.refresh_metrics.record_failure();
				obs::record_op_outcome(OpKind::Refresh, OpOutcome::Failure);

				RefreshOutcome::Failed(e.to_string())
			},
		};

		inner.pending_refresh.lock().take();

		outcome
	})
}

async fn exchange_refresh(inner: &AuthInner, refresh: &TokenSecret) -> Result<TokenSecret> {
	let body = RefreshRequest { refresh_token: refresh.expose() };
	let response = post_json(inner, endpoints::auth::REFRESH, &body).await?;

	if !response.is_success() {
		return Err(api_error(&response, "Token refresh failed"));
	}

	let session: AuthResponse = response.json(endpoints::auth::REFRESH)?;

	persist_session(inner.store.as_ref(), &session, false).await?;

	Ok(session.token)
}

async fn post_json<B>(inner: &AuthInner, path: &str, body: &B) -> Result<HttpResponse>
where
	B: Serialize,
{
	let payload = serde_json::to_vec(body).map_err(ConfigError::RequestBody)?;
	let request = HttpRequest::new(Method::POST, inner.config.url_for(path)?)
		.with_header(ACCEPT, HeaderValue::from_static("application/json"))
		.with_json_body(payload);

	Ok(inner.transport.send(request).await?)
}

async fn persist_session(
	store: &dyn SessionStore,
	session: &AuthResponse,
	replace_user: bool,
) -> Result<()> {
	let user = (replace_user || session.has_profile())
		.then(|| serde_json::to_string(&session.cached_user()))
		.transpose()
		.map_err(ConfigError::RequestBody)?;

	store.set(StorageKey::Token, session.token.expose().to_owned()).await?;

	// Servers that do not rotate refresh tokens omit the field; keep the current one.
	if let Some(refresh) = session.refresh_token.as_ref() {
		store.set(StorageKey::RefreshToken, refresh.expose().to_owned()).await?;
	}
	// A token-only refresh body keeps the snapshot from the last login.
	if let Some(user) = user {
		store.set(StorageKey::User, user).await?;
	}

	Ok(())
}

async fn clear_session(store: &dyn SessionStore) -> Result<()> {
	for key in StorageKey::ALL {
		store.remove(key).await?;
	}

	Ok(())
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{
		_preludet::{mint_jwt, seed_session},
		error::TransportError,
		http::TransportFuture,
		store::MemoryStore,
	};

	/// Scripted transport that answers every call with the same response after yielding once.
	struct ScriptedTransport {
		calls: Mutex<Vec<(Method, String, Option<String>)>>,
		status: StatusCode,
		body: String,
	}
	impl ScriptedTransport {
		fn new(status: StatusCode, body: impl Into<String>) -> Arc<Self> {
			Arc::new(Self { calls: Mutex::new(Vec::new()), status, body: body.into() })
		}

		fn calls(&self) -> Vec<(Method, String, Option<String>)> {
			self.calls.lock().clone()
		}
	}
	impl HttpTransport for ScriptedTransport {
		fn send(&self, request: HttpRequest) -> TransportFuture<'_> {
			Box::pin(async move {
				self.calls.lock().push((
					request.method.clone(),
					request.url.path().to_owned(),
					request.body.as_ref().map(|body| String::from_utf8_lossy(body).into_owned()),
				));
				tokio::time::sleep(std::time::Duration::from_millis(20)).await;

				Ok(HttpResponse::new(self.status, self.body.clone().into_bytes()))
			})
		}
	}

	struct OfflineTransport;
	impl HttpTransport for OfflineTransport {
		fn send(&self, request: HttpRequest) -> TransportFuture<'_> {
			Box::pin(async move {
				Err(TransportError::network(
					&request.url,
					std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "offline"),
				))
			})
		}
	}

	fn service(transport: Arc<dyn HttpTransport>) -> (AuthService, Arc<MemoryStore>) {
		let store = Arc::new(MemoryStore::default());
		let service = AuthService::new(ApiConfig::default(), transport, store.clone());

		(service, store)
	}

	#[tokio::test]
	async fn concurrent_refreshes_share_one_exchange() {
		let fresh = mint_jwt("linh", Duration::hours(1));
		let transport = ScriptedTransport::new(
			StatusCode::OK,
			format!(r#"{{"token":"{fresh}","refreshToken":"refresh-2","username":"linh"}}"#),
		);
		let (service, store) = service(transport.clone());

		seed_session(&store, &mint_jwt("linh", -Duration::minutes(1)), "refresh-1").await;

		let (a, b, c) =
			tokio::join!(service.refresh_token(), service.refresh_token(), service.refresh_token());

		for token in [a, b, c] {
			assert_eq!(token.expect("Every caller should see the new token.").expose(), fresh);
		}

		let calls = transport.calls();

		assert_eq!(calls.len(), 1, "Exactly one refresh exchange should be sent.");
		assert_eq!(calls[0].0, Method::POST);
		assert_eq!(calls[0].1, "/api/auth/refresh");
		assert_eq!(calls[0].2.as_deref(), Some(r#"{"refreshToken":"refresh-1"}"#));
		assert_eq!(service.refresh_metrics().attempts(), 1);
		assert_eq!(service.refresh_metrics().joined(), 2);
		assert!(!service.refresh_in_flight(), "Pending slot must be cleared after completion.");
		assert_eq!(store.peek(StorageKey::RefreshToken).as_deref(), Some("refresh-2"));

		service.refresh_token().await.expect("A later refresh should start a new exchange.");

		assert_eq!(transport.calls().len(), 2);
	}

	#[tokio::test]
	async fn token_only_refresh_keeps_the_user_snapshot() {
		let fresh = mint_jwt("linh", Duration::hours(1));
		let transport = ScriptedTransport::new(StatusCode::OK, format!(r#"{{"token":"{fresh}"}}"#));
		let (service, store) = service(transport.clone());

		seed_session(&store, &mint_jwt("linh", -Duration::minutes(1)), "refresh-1").await;

		let before = store.peek(StorageKey::User);

		service.refresh_token().await.expect("Refresh should succeed.");

		assert_eq!(store.peek(StorageKey::Token).as_deref(), Some(fresh.as_str()));
		assert_eq!(store.peek(StorageKey::RefreshToken).as_deref(), Some("refresh-1"));
		assert_eq!(store.peek(StorageKey::User), before);

		let user = service
			.get_current_user()
			.await
			.expect("Reading the session should succeed.")
			.expect("The snapshot should survive the refresh.");

		assert_eq!(user.full_name.as_deref(), Some("Linh Tran"));
	}

	#[tokio::test]
	async fn failed_refresh_logs_out_every_waiter() {
		let transport =
			ScriptedTransport::new(StatusCode::UNAUTHORIZED, r#"{"message":"Refresh token revoked"}"#);
		let (service, store) = service(transport.clone());

		seed_session(&store, "expired", "refresh-1").await;

		let (a, b) = tokio::join!(service.refresh_token(), service.refresh_token());

		for result in [a, b] {
			let err = result.expect_err("Refresh failures should reach every caller.");

			assert!(
				matches!(&err, Error::SessionExpired { reason } if reason.contains("Refresh token revoked"))
			);
		}

		assert_eq!(transport.calls().len(), 1);
		assert!(store.is_empty(), "Refresh failure must clear all three session keys.");
		assert_eq!(service.refresh_metrics().failures(), 1);
		assert!(!service.refresh_in_flight());
	}

	#[tokio::test]
	async fn missing_refresh_token_logs_out_without_network() {
		let transport = ScriptedTransport::new(StatusCode::OK, "{}");
		let (service, store) = service(transport.clone());

		store.set(StorageKey::Token, "orphan".into()).await.expect("Seeding should succeed.");

		let err = service.refresh_token().await.expect_err("Refresh needs a refresh token.");

		assert!(matches!(err, Error::SessionExpired { .. }));
		assert!(transport.calls().is_empty());
		assert!(store.is_empty());
	}

	#[tokio::test]
	async fn corrupt_user_snapshot_signs_out() {
		let (service, store) = service(Arc::new(OfflineTransport));

		seed_session(&store, "token", "refresh").await;
		store.set(StorageKey::User, "{not json".into()).await.expect("Seeding should succeed.");

		assert_eq!(service.get_current_user().await.expect("Store reads should succeed."), None);
		assert!(store.is_empty());
	}

	#[tokio::test]
	async fn logout_clears_all_three_keys() {
		let (service, store) = service(Arc::new(OfflineTransport));

		seed_session(&store, "token", "refresh").await;

		assert!(service.get_current_user().await.expect("Read should succeed.").is_some());

		service.logout().await.expect("Logout should succeed.");

		for key in StorageKey::ALL {
			assert_eq!(store.peek(key), None, "{key} should be removed on logout.");
		}
	}

	#[tokio::test]
	async fn profile_is_none_when_offline_or_signed_out() {
		let (service, store) = service(Arc::new(OfflineTransport));

		assert_eq!(service.get_user_profile().await, None);

		seed_session(&store, &mint_jwt("linh", Duration::hours(1)), "refresh").await;

		assert_eq!(service.get_user_profile().await, None);
		assert!(store.peek(StorageKey::Token).is_some(), "Transport errors must not sign out.");
	}
}
