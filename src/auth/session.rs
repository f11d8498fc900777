//! Session records exchanged with the auth endpoints and persisted in the session store.

// self
use crate::{_prelude::*, auth::TokenSecret, model::Role};

/// Body returned by login, registration, and refresh.
#[derive(Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
	/// Bearer access token.
	pub token: TokenSecret,
	/// Refresh token; some servers omit it on refresh.
	#[serde(default)]
	pub refresh_token: Option<TokenSecret>,
	/// Username of the signed-in account.
	#[serde(default)]
	pub username: Option<String>,
	/// Email address.
	#[serde(default)]
	pub email: Option<String>,
	/// Display name.
	#[serde(default)]
	pub full_name: Option<String>,
	/// Account role.
	#[serde(default)]
	pub role: Option<Role>,
	/// Avatar URL.
	#[serde(default)]
	pub profile_image: Option<String>,
}
impl AuthResponse {
	/// Returns `true` when the response names the account, not just new tokens.
	pub fn has_profile(&self) -> bool {
		self.username.is_some()
			|| self.email.is_some()
			|| self.full_name.is_some()
			|| self.role.is_some()
			|| self.profile_image.is_some()
	}

	/// Projects the user snapshot persisted under the `user` key.
	pub fn cached_user(&self) -> CachedUser {
		CachedUser {
			id: None,
			username: self.username.clone(),
			email: self.email.clone(),
			full_name: self.full_name.clone(),
			role: self.role.clone(),
			profile_image: self.profile_image.clone(),
			phone: None,
		}
	}
}
impl Debug for AuthResponse {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthResponse")
			.field("token", &self.token)
			.field("refresh_token", &self.refresh_token)
			.field("username", &self.username)
			.field("role", &self.role)
			.finish_non_exhaustive()
	}
}

/// Snapshot of the signed-in user kept alongside the tokens.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CachedUser {
	/// Server-side identifier, when the profile endpoint supplied one.
	#[serde(default, skip_serializing_if = "Option::is_none", with = "crate::model::fmt::opt_id")]
	pub id: Option<i64>,
	/// Username.
	#[serde(default)]
	pub username: Option<String>,
	/// Email address.
	#[serde(default)]
	pub email: Option<String>,
	/// Display name.
	#[serde(default)]
	pub full_name: Option<String>,
	/// Account role.
	#[serde(default)]
	pub role: Option<Role>,
	/// Avatar URL.
	#[serde(default)]
	pub profile_image: Option<String>,
	/// Phone number, used to prefill booking forms.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
}
impl CachedUser {
	/// Returns `true` for administrator accounts.
	pub fn is_admin(&self) -> bool {
		matches!(self.role, Some(Role::Admin))
	}
}

/// Credentials posted to the login endpoint.
#[derive(Clone, Serialize)]
pub struct LoginRequest {
	/// Username.
	pub username: String,
	/// Plain-text password; sent over TLS only.
	pub password: String,
}
impl Debug for LoginRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("LoginRequest")
			.field("username", &self.username)
			.field("password", &"<redacted>")
			.finish()
	}
}

/// Registration form posted to the register endpoint.
#[derive(Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
	/// Desired username.
	pub username: String,
	/// Plain-text password; sent over TLS only.
	pub password: String,
	/// Email address.
	pub email: String,
	/// Display name.
	pub full_name: String,
	/// Optional phone number.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub phone: Option<String>,
}
impl Debug for RegisterRequest {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RegisterRequest")
			.field("username", &self.username)
			.field("password", &"<redacted>")
			.field("email", &self.email)
			.field("full_name", &self.full_name)
			.field("phone", &self.phone)
			.finish()
	}
}

/// Body posted to the refresh endpoint.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct RefreshRequest<'a> {
	pub(crate) refresh_token: &'a str,
}
