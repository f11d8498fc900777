//! Thread-safe in-memory [`SessionStore`] implementation for embedders and tests.

// self
use crate::{
	_prelude::*,
	store::{SessionStore, StorageKey, StoreFuture},
};

type StoreMap = Arc<RwLock<HashMap<StorageKey, String>>>;

/// Storage backend that keeps the session in-process.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore(StoreMap);
impl MemoryStore {
	/// Returns `true` when no session key is present.
	pub fn is_empty(&self) -> bool {
		self.0.read().is_empty()
	}

	/// Synchronous read used by tests and diagnostics.
	pub fn peek(&self, key: StorageKey) -> Option<String> {
		self.0.read().get(&key).cloned()
	}
}
impl SessionStore for MemoryStore {
	fn get(&self, key: StorageKey) -> StoreFuture<'_, Option<String>> {
		let map = self.0.clone();

		Box::pin(async move { Ok(map.read().get(&key).cloned()) })
	}

	fn set(&self, key: StorageKey, value: String) -> StoreFuture<'_, ()> {
		let map = self.0.clone();

		Box::pin(async move {
			map.write().insert(key, value);

			Ok(())
		})
	}

	fn remove(&self, key: StorageKey) -> StoreFuture<'_, ()> {
		let map = self.0.clone();

		Box::pin(async move {
			map.write().remove(&key);

			Ok(())
		})
	}
}
