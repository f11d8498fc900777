//! Admin reports over a [`ReportPeriod`].

// self
use crate::{
	_prelude::*,
	api::ApiClient,
	config::endpoints::reports,
	model::{BookingsReport, Report, RevenueReport},
	reports::ReportPeriod,
};

impl ApiClient {
	/// Combined report for the window `period` covers, ending today.
	pub async fn report(&self, period: ReportPeriod) -> Result<Report> {
		self.get(&period.report_path(period.range())?).await
	}

	/// Revenue breakdown for the window `period` covers, ending today.
	pub async fn revenue_report(&self, period: ReportPeriod) -> Result<RevenueReport> {
		self.get(&period.range().apply_to(reports::REVENUE)?).await
	}

	/// Booking breakdown for the window `period` covers, ending today.
	pub async fn bookings_report(&self, period: ReportPeriod) -> Result<BookingsReport> {
		self.get(&period.range().apply_to(reports::BOOKINGS)?).await
	}
}
