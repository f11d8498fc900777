//! Session storage contracts and built-in backends for the three persisted session keys.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

// self
use crate::_prelude::*;

/// Boxed future returned by [`SessionStore`] operations.
pub type StoreFuture<'a, T> = Pin<Box<dyn Future<Output = Result<T, StoreError>> + 'a + Send>>;

/// Key-value storage backend holding the signed-in session.
///
/// Each operation is atomic on its own; callers never rely on multi-key transactions.
pub trait SessionStore
where
	Self: Send + Sync,
{
	/// Reads the value stored under `key`, if any.
	fn get(&self, key: StorageKey) -> StoreFuture<'_, Option<String>>;

	/// Stores `value` under `key`, replacing any previous value.
	fn set(&self, key: StorageKey, value: String) -> StoreFuture<'_, ()>;

	/// Removes the value stored under `key`; missing keys are not an error.
	fn remove(&self, key: StorageKey) -> StoreFuture<'_, ()>;
}

/// The keys a session is persisted under.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum StorageKey {
	/// Bearer access token.
	#[serde(rename = "token")]
	Token,
	/// Refresh token exchanged for new access tokens.
	#[serde(rename = "refreshToken")]
	RefreshToken,
	/// JSON snapshot of the signed-in user.
	#[serde(rename = "user")]
	User,
}
impl StorageKey {
	/// Every key, in the order they are cleared on logout.
	pub const ALL: [Self; 3] = [Self::Token, Self::RefreshToken, Self::User];

	/// Returns the persisted key name.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Token => "token",
			Self::RefreshToken => "refreshToken",
			Self::User => "user",
		}
	}
}
impl Display for StorageKey {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Error type produced by [`SessionStore`] implementations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ThisError)]
pub enum StoreError {
	/// Serialization failures surfaced by the backend.
	#[error("Serialization error: {message}.")]
	Serialization {
		/// Human-readable error payload.
		message: String,
	},
	/// Backend-level failure for the storage engine.
	#[error("Backend failure: {message}.")]
	Backend {
		/// Human-readable error payload.
		message: String,
	},
}
