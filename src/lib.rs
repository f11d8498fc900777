//! Typed async client for the spa booking REST API.
//!
//! Bearer sessions refresh through a single shared exchange, booking forms validate locally,
//! and every customer and admin endpoint has a typed operation on [`api::ApiClient`].

#![deny(clippy::all, missing_docs)]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub mod api;
pub mod auth;
pub mod booking;
pub mod config;
pub mod error;
pub mod http;
pub mod model;
pub mod obs;
pub mod reports;
pub mod store;
#[cfg(any(test, feature = "test"))]
pub mod _preludet {
	//! Convenience re-exports and helpers for integration tests; enabled via `cfg(test)` or the
	//! `test` crate feature.

	pub use crate::_prelude::*;

	// crates.io
	use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
	// self
	use crate::{
		api::{ApiClient, ClientEvents},
		config::ApiConfig,
		store::{MemoryStore, SessionStore, StorageKey},
	};

	/// Mints an unsigned JWT whose `exp` claim sits `expires_in` away from now.
	///
	/// The signature segment is a fixed placeholder; the client never verifies it.
	pub fn mint_jwt(subject: &str, expires_in: Duration) -> String {
		let exp = (OffsetDateTime::now_utc() + expires_in).unix_timestamp();
		let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
		let payload = URL_SAFE_NO_PAD.encode(
			serde_json::json!({ "sub": subject, "exp": exp, "role": "ROLE_CUSTOMER" }).to_string(),
		);

		format!("{header}.{payload}.signature")
	}

	/// Builds a client rooted at `base_url` backed by an in-memory session store.
	pub fn build_test_client(base_url: &str) -> (ApiClient, Arc<MemoryStore>) {
		build_test_client_with_events(base_url, Arc::new(crate::api::NoopEvents))
	}

	/// Same as [`build_test_client`] but wires caller-provided event hooks.
	pub fn build_test_client_with_events(
		base_url: &str,
		events: Arc<dyn ClientEvents>,
	) -> (ApiClient, Arc<MemoryStore>) {
		let config = ApiConfig::builder()
			.base_url(Url::parse(base_url).expect("Mock server base URL should parse."))
			.build()
			.expect("Test API configuration should be valid.");
		let store_backend = Arc::new(MemoryStore::default());
		let store: Arc<dyn SessionStore> = store_backend.clone();
		let client =
			ApiClient::new(config, store).expect("Test API client should build.").with_events(events);

		(client, store_backend)
	}

	/// Seeds all three session keys as a successful login would.
	pub async fn seed_session(store: &MemoryStore, token: &str, refresh: &str) {
		store.set(StorageKey::Token, token.to_owned()).await.expect("Failed to seed token.");
		store
			.set(StorageKey::RefreshToken, refresh.to_owned())
			.await
			.expect("Failed to seed refresh token.");
		store
			.set(
				StorageKey::User,
				r#"{"username":"linh","email":"linh@example.com","fullName":"Linh Tran","role":"ROLE_CUSTOMER"}"#
					.to_owned(),
			)
			.await
			.expect("Failed to seed cached user.");
	}
}

mod _prelude {
	pub use std::{
		collections::{BTreeMap, HashMap},
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		str::FromStr,
		sync::Arc,
	};

	pub use parking_lot::{Mutex, RwLock};
	pub use reqwest::{Method, StatusCode};
	pub use serde::{Deserialize, Serialize, de::DeserializeOwned};
	pub use thiserror::Error as ThisError;
	pub use time::{Date, Duration, OffsetDateTime};
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use time;
pub use url;
