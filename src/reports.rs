//! Reporting periods and the date ranges they cover.

// self
use crate::{_prelude::*, config::endpoints, model::fmt};

/// Reporting window selectable on the admin reports screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportPeriod {
	/// Last 7 days.
	Week,
	/// Last 30 days.
	#[default]
	Month,
	/// Last 90 days.
	Quarter,
	/// Last 365 days.
	Year,
}
impl ReportPeriod {
	/// Parses a period label, falling back to [`ReportPeriod::Month`] for anything unknown.
	pub fn from_label(label: &str) -> Self {
		match label.trim().to_ascii_lowercase().as_str() {
			"week" => Self::Week,
			"quarter" => Self::Quarter,
			"year" => Self::Year,
			_ => Self::Month,
		}
	}

	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Week => "week",
			Self::Month => "month",
			Self::Quarter => "quarter",
			Self::Year => "year",
		}
	}

	/// Days between the start and the end of the window.
	pub const fn days(self) -> i64 {
		match self {
			Self::Week => 7,
			Self::Month => 30,
			Self::Quarter => 90,
			Self::Year => 365,
		}
	}

	/// Window ending on `today`.
	pub fn range_ending(self, today: Date) -> DateRange {
		DateRange { start: today.saturating_sub(Duration::days(self.days())), end: today }
	}

	/// Window ending on the current UTC day.
	pub fn range(self) -> DateRange {
		self.range_ending(OffsetDateTime::now_utc().date())
	}

	/// Path and query for the combined report over `range`.
	pub fn report_path(self, range: DateRange) -> Result<String> {
		Ok(format!("{}?period={}&{}", endpoints::reports::ALL, self.as_str(), range.query()?))
	}
}
impl Display for ReportPeriod {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl From<&str> for ReportPeriod {
	fn from(label: &str) -> Self {
		Self::from_label(label)
	}
}

/// Inclusive day range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DateRange {
	/// First day.
	pub start: Date,
	/// Last day.
	pub end: Date,
}
impl DateRange {
	/// Query string (`startDate=…&endDate=…`) without the leading `?`.
	pub fn query(&self) -> Result<String> {
		Ok(format!(
			"startDate={}&endDate={}",
			fmt::format_date(self.start)?,
			fmt::format_date(self.end)?
		))
	}

	/// Appends this range to `path` as a query string.
	pub fn apply_to(&self, path: &str) -> Result<String> {
		Ok(format!("{path}?{}", self.query()?))
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros::date;
	// self
	use super::*;

	#[test]
	fn periods_cover_expected_windows() {
		let today = date!(2025 - 03 - 31);

		assert_eq!(ReportPeriod::Week.range_ending(today).start, date!(2025 - 03 - 24));
		assert_eq!(ReportPeriod::Month.range_ending(today).start, date!(2025 - 03 - 01));
		assert_eq!(ReportPeriod::Quarter.range_ending(today).start, date!(2024 - 12 - 31));
		assert_eq!(ReportPeriod::Year.range_ending(today).start, date!(2024 - 03 - 31));
		assert_eq!(ReportPeriod::Year.range_ending(today).end, today);
	}

	#[test]
	fn unknown_labels_fall_back_to_month() {
		assert_eq!(ReportPeriod::from_label("fortnight"), ReportPeriod::Month);
		assert_eq!(ReportPeriod::from("QUARTER"), ReportPeriod::Quarter);
	}

	#[test]
	fn report_paths_carry_period_and_range() {
		let range = ReportPeriod::Week.range_ending(date!(2025 - 01 - 08));

		assert_eq!(
			ReportPeriod::Week.report_path(range).expect("Report path should render."),
			"/admin/reports?period=week&startDate=2025-01-01&endDate=2025-01-08"
		);
		assert_eq!(
			range.apply_to(endpoints::reports::REVENUE).expect("Range should render."),
			"/admin/reports/revenue?startDate=2025-01-01&endDate=2025-01-08"
		);
	}
}
