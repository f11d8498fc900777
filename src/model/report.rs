//! Report payloads returned by the admin reporting endpoints.

// self
use crate::{_prelude::*, model::fmt};

/// Named value in a breakdown (revenue by service, bookings by status, ...).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportItem {
	/// Label.
	pub name: String,
	/// Value.
	pub value: f64,
}

/// Revenue for one day.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DailyRevenueItem {
	/// Day.
	#[serde(with = "fmt::iso_date")]
	pub date: Date,
	/// Revenue in VND.
	#[serde(default)]
	pub revenue: f64,
}

/// Combined period report.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Report {
	/// Period label the report was requested for.
	pub period: String,
	/// Revenue in the period.
	pub total_revenue: f64,
	/// Bookings in the period.
	pub total_bookings: u64,
	/// Completed bookings.
	pub completed_bookings: u64,
	/// Cancelled bookings.
	pub cancelled_bookings: u64,
	/// Completed / total, as a percentage.
	pub completion_rate: f64,
	/// Revenue per service.
	pub revenue_by_service: Vec<ReportItem>,
	/// Booking counts per status.
	pub bookings_by_status: Vec<ReportItem>,
	/// Daily revenue series.
	pub daily_revenue: Vec<DailyRevenueItem>,
	/// Returning vs new customers.
	pub customer_retention_rate: Vec<ReportItem>,
}

/// Revenue breakdown.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevenueReport {
	/// Revenue in the period.
	pub total_revenue: f64,
	/// Revenue per payment method.
	pub by_payment_method: Vec<ReportItem>,
}

/// Booking breakdown.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingsReport {
	/// Bookings in the period.
	pub total_bookings: u64,
	/// Booking counts per status.
	pub by_status: Vec<ReportItem>,
}
