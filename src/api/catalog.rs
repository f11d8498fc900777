//! Service catalogue operations.

// crates.io
use serde::de::IgnoredAny;
// self
use crate::{
	_prelude::*,
	api::{ApiClient, RequestOptions},
	config::endpoints::services,
	model::{PopularService, Service, ServiceCategory},
};

impl ApiClient {
	/// Lists every public service.
	pub async fn services(&self) -> Result<Vec<Service>> {
		self.get_with(services::ALL, RequestOptions::public()).await
	}

	/// Lists services promoted on the landing page.
	pub async fn featured_services(&self) -> Result<Vec<Service>> {
		self.get_with(services::FEATURED, RequestOptions::public()).await
	}

	/// Fetches one service.
	pub async fn service(&self, id: i64) -> Result<Service> {
		self.get_with(&services::by_id(id), RequestOptions::public()).await
	}

	/// Lists services suggested to the signed-in customer.
	pub async fn recommended_services(&self) -> Result<Vec<Service>> {
		self.get(services::RECOMMENDED).await
	}

	/// Lists public service categories.
	pub async fn service_categories(&self) -> Result<Vec<ServiceCategory>> {
		self.get_with(services::CATEGORIES, RequestOptions::public()).await
	}

	/// Fetches one service category.
	pub async fn service_category(&self, id: i64) -> Result<ServiceCategory> {
		self.get_with(&services::category(id), RequestOptions::public()).await
	}

	/// Lists every service, including inactive ones.
	pub async fn admin_services(&self) -> Result<Vec<Service>> {
		self.get(services::ADMIN).await
	}

	/// Creates a service.
	pub async fn create_service(&self, service: &Service) -> Result<Service> {
		self.post(services::ADMIN, service).await
	}

	/// Replaces service `id`.
	pub async fn update_service(&self, id: i64, service: &Service) -> Result<Service> {
		self.put(&services::admin_by_id(id), service).await
	}

	/// Deletes service `id`.
	pub async fn delete_service(&self, id: i64) -> Result<()> {
		let _: IgnoredAny = self.delete(&services::admin_by_id(id)).await?;

		Ok(())
	}

	/// Lists service categories with their service counts.
	pub async fn admin_service_categories(&self) -> Result<Vec<ServiceCategory>> {
		self.get(services::ADMIN_CATEGORIES).await
	}

	/// Creates a service category.
	pub async fn create_service_category(
		&self,
		category: &ServiceCategory,
	) -> Result<ServiceCategory> {
		self.post(services::ADMIN_CATEGORIES, category).await
	}

	/// Replaces service category `id`.
	pub async fn update_service_category(
		&self,
		id: i64,
		category: &ServiceCategory,
	) -> Result<ServiceCategory> {
		self.put(&services::admin_category(id), category).await
	}

	/// Deletes service category `id`.
	pub async fn delete_service_category(&self, id: i64) -> Result<()> {
		let _: IgnoredAny = self.delete(&services::admin_category(id)).await?;

		Ok(())
	}

	/// Most-booked services for the admin dashboard.
	pub async fn popular_services(&self) -> Result<Vec<PopularService>> {
		self.get(services::ADMIN_POPULAR).await
	}
}
