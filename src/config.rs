//! API configuration: base URL resolution, transport knobs, and the endpoint catalogue.
//!
//! [`ApiConfig`] is immutable once built. Use [`ApiConfig::builder`] to assemble one in code or
//! [`ApiConfig::from_env`] to honour the `SPA_API_URL` deployment override.

pub mod endpoints;

// std
use std::env;
// self
use crate::{_prelude::*, error::ConfigError};

/// Environment variable that overrides the API base URL.
pub const API_URL_ENV: &str = "SPA_API_URL";
/// Base URL used when nothing else is configured.
pub const DEFAULT_API_URL: &str = "http://localhost:8081/api";

/// Immutable client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
	/// Base URL every endpoint path is appended to (includes the `/api` prefix).
	pub base_url: Url,
	/// Per-request timeout applied by the default transport.
	pub timeout: Option<std::time::Duration>,
	/// Optional `User-Agent` header value.
	pub user_agent: Option<String>,
}
impl ApiConfig {
	/// Returns a builder seeded with [`DEFAULT_API_URL`].
	pub fn builder() -> ApiConfigBuilder {
		ApiConfigBuilder::default()
	}

	/// Builds a configuration from `SPA_API_URL`, falling back to [`DEFAULT_API_URL`].
	pub fn from_env() -> Result<Self, ConfigError> {
		match env::var(API_URL_ENV) {
			Ok(raw) if !raw.trim().is_empty() => Self::builder().base_url_str(raw.trim())?.build(),
			_ => Self::builder().build(),
		}
	}

	/// Joins an endpoint path (with optional query string) onto the base URL.
	///
	/// The base path is kept intact, so `/bookings` on `http://host/api` resolves to
	/// `http://host/api/bookings` rather than `http://host/bookings`.
	pub fn url_for(&self, path: &str) -> Result<Url, ConfigError> {
		let base = self.base_url.as_str().trim_end_matches('/');
		let suffix = path.trim_start_matches('/');
		let joined = format!("{base}/{suffix}");

		Url::parse(&joined)
			.map_err(|source| ConfigError::InvalidEndpoint { path: path.to_owned(), source })
	}
}
impl Default for ApiConfig {
	fn default() -> Self {
		Self { base_url: default_base_url(), timeout: None, user_agent: None }
	}
}

/// Builder for [`ApiConfig`].
#[derive(Clone, Debug)]
pub struct ApiConfigBuilder {
	base_url: Url,
	timeout: Option<std::time::Duration>,
	user_agent: Option<String>,
}
impl ApiConfigBuilder {
	/// Sets the base URL.
	pub fn base_url(mut self, url: Url) -> Self {
		self.base_url = url;

		self
	}

	/// Parses and sets the base URL.
	pub fn base_url_str(self, raw: &str) -> Result<Self, ConfigError> {
		let url = Url::parse(raw)
			.map_err(|source| ConfigError::InvalidBaseUrl { value: raw.to_owned(), source })?;

		Ok(self.base_url(url))
	}

	/// Sets the per-request timeout.
	pub fn timeout(mut self, timeout: std::time::Duration) -> Self {
		self.timeout = Some(timeout);

		self
	}

	/// Sets the `User-Agent` header value.
	pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
		self.user_agent = Some(user_agent.into());

		self
	}

	/// Consumes the builder and validates the resulting configuration.
	pub fn build(self) -> Result<ApiConfig, ConfigError> {
		if self.base_url.cannot_be_a_base() || !matches!(self.base_url.scheme(), "http" | "https")
		{
			return Err(ConfigError::UnsupportedBaseUrl { url: self.base_url.to_string() });
		}

		Ok(ApiConfig { base_url: self.base_url, timeout: self.timeout, user_agent: self.user_agent })
	}
}
impl Default for ApiConfigBuilder {
	fn default() -> Self {
		Self { base_url: default_base_url(), timeout: None, user_agent: None }
	}
}

fn default_base_url() -> Url {
	Url::parse(DEFAULT_API_URL).expect("Default API URL should parse.")
}
