//! Specialist operations.

// crates.io
use serde::de::IgnoredAny;
// self
use crate::{
	_prelude::*,
	api::{ApiClient, RequestOptions},
	config::endpoints::specialists,
	model::Specialist,
};

impl ApiClient {
	/// Lists every specialist.
	pub async fn specialists(&self) -> Result<Vec<Specialist>> {
		self.get_with(specialists::ALL, RequestOptions::public()).await
	}

	/// Lists specialists promoted on the landing page.
	pub async fn featured_specialists(&self) -> Result<Vec<Specialist>> {
		self.get_with(specialists::FEATURED, RequestOptions::public()).await
	}

	/// Fetches one specialist.
	pub async fn specialist(&self, id: i64) -> Result<Specialist> {
		self.get_with(&specialists::by_id(id), RequestOptions::public()).await
	}

	/// Availability labels for specialist `id`.
	pub async fn specialist_availability(&self, id: i64) -> Result<Vec<String>> {
		self.get_with(&specialists::availability(id), RequestOptions::public()).await
	}

	/// Lists specialists with admin-only fields.
	pub async fn admin_specialists(&self) -> Result<Vec<Specialist>> {
		self.get(specialists::ADMIN).await
	}

	/// Creates a specialist.
	pub async fn create_specialist(&self, specialist: &Specialist) -> Result<Specialist> {
		self.post(specialists::ADMIN, specialist).await
	}

	/// Replaces specialist `id`.
	pub async fn update_specialist(&self, id: i64, specialist: &Specialist) -> Result<Specialist> {
		self.put(&specialists::admin_by_id(id), specialist).await
	}

	/// Deletes specialist `id`.
	pub async fn delete_specialist(&self, id: i64) -> Result<()> {
		let _: IgnoredAny = self.delete(&specialists::admin_by_id(id)).await?;

		Ok(())
	}
}
