//! Dashboard summaries.

// self
use crate::{
	_prelude::*,
	model::{Booking, Service},
};

/// Headline figures on the admin dashboard. Growth values are percentages versus the previous
/// month.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DashboardStats {
	/// Registered accounts.
	pub total_users: u64,
	/// Account growth.
	pub user_growth: f64,
	/// Offered services.
	pub total_services: u64,
	/// Service growth.
	pub service_growth: f64,
	/// Active specialists.
	pub total_specialists: u64,
	/// Specialists added this month.
	pub new_specialists: u64,
	/// Bookings this month.
	pub total_bookings: u64,
	/// Booking growth.
	pub booking_growth: f64,
	/// Revenue this month in VND.
	pub total_revenue: f64,
	/// Revenue growth.
	pub revenue_growth: f64,
}

/// Customer dashboard, assembled from the upcoming, past, and recommended listings.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UserDashboard {
	/// Bookings still ahead.
	pub upcoming: Vec<Booking>,
	/// Bookings already behind.
	pub past: Vec<Booking>,
	/// Services suggested to the customer.
	pub recommended: Vec<Service>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn missing_stats_default_to_zero() {
		let stats: DashboardStats = serde_json::from_str(r#"{"totalUsers":120,"userGrowth":-2.5}"#)
			.expect("Partial stats should decode.");

		assert_eq!(stats.total_users, 120);
		assert_eq!(stats.user_growth, -2.5);
		assert_eq!(stats.total_bookings, 0);
	}
}
