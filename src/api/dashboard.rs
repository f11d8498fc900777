//! Dashboards and payment transactions.

// self
use crate::{
	_prelude::*,
	api::{ApiClient, RequestOptions},
	config::endpoints::dashboard,
	model::{DashboardStats, Transaction, TransactionFilter, TransactionStatus, UserDashboard},
};

impl ApiClient {
	/// Customer dashboard: upcoming and past bookings plus recommendations, fetched together.
	///
	/// The first failing listing fails the whole dashboard.
	pub async fn user_dashboard(&self) -> Result<UserDashboard> {
		let (upcoming, past, recommended) = futures::try_join!(
			self.upcoming_bookings(),
			self.past_bookings(),
			self.recommended_services(),
		)?;

		Ok(UserDashboard { upcoming, past, recommended })
	}

	/// Headline figures for the admin dashboard.
	pub async fn admin_dashboard_stats(&self) -> Result<DashboardStats> {
		self.get(dashboard::ADMIN_STATS).await
	}

	/// Lists transactions matching `filter`.
	pub async fn admin_transactions(&self, filter: TransactionFilter) -> Result<Vec<Transaction>> {
		let query = filter.query()?;

		if query.is_empty() {
			self.get(dashboard::TRANSACTIONS).await
		} else {
			self.get(&format!("{}?{query}", dashboard::TRANSACTIONS)).await
		}
	}

	/// Fetches one transaction.
	pub async fn admin_transaction(&self, id: i64) -> Result<Transaction> {
		self.get(&dashboard::transaction(id)).await
	}

	/// Records a payment.
	pub async fn create_transaction(&self, transaction: &Transaction) -> Result<Transaction> {
		self.post(dashboard::TRANSACTIONS, transaction).await
	}

	/// Moves transaction `id` to `status`; the status travels as a query parameter.
	pub async fn update_transaction_status(
		&self,
		id: i64,
		status: TransactionStatus,
	) -> Result<Transaction> {
		let path = format!("{}?status={status}", dashboard::transaction_status(id));

		self.request::<_, ()>(Method::PUT, &path, None, RequestOptions::default()).await
	}

	/// Payments made by the signed-in customer.
	pub async fn my_transactions(&self) -> Result<Vec<Transaction>> {
		self.get(dashboard::USER_TRANSACTIONS).await
	}
}
