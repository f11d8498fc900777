//! Booking records and their lifecycle status.

// crates.io
use serde::{Deserializer, Serializer};
use time::Time;
// self
use crate::{
	_prelude::*,
	model::{self, UnknownLabel, fmt},
};

/// Booking lifecycle status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BookingStatus {
	/// Awaiting confirmation.
	Pending,
	/// Confirmed by the salon.
	Confirmed,
	/// Visit took place.
	Completed,
	/// Cancelled by the customer or an admin.
	Cancelled,
}
impl BookingStatus {
	/// Every status, in lifecycle order.
	pub const ALL: [Self; 4] = [Self::Pending, Self::Confirmed, Self::Completed, Self::Cancelled];

	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Pending => "PENDING",
			Self::Confirmed => "CONFIRMED",
			Self::Completed => "COMPLETED",
			Self::Cancelled => "CANCELLED",
		}
	}

	/// Returns `true` while the customer may still cancel.
	pub const fn is_cancellable(self) -> bool {
		matches!(self, Self::Pending | Self::Confirmed)
	}
}
impl Display for BookingStatus {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for BookingStatus {
	type Err = UnknownLabel;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| UnknownLabel::new("booking status", s))
	}
}
impl Serialize for BookingStatus {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(self.as_str())
	}
}
impl<'de> Deserialize<'de> for BookingStatus {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		model::deserialize_label(deserializer)
	}
}

/// Booking as returned by the booking endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
	/// Identifier; empty on create.
	#[serde(default, skip_serializing_if = "Option::is_none", with = "fmt::opt_id")]
	pub id: Option<i64>,
	/// Customer account, absent for guest bookings.
	#[serde(default, with = "fmt::opt_id")]
	pub customer_id: Option<i64>,
	/// Customer display name.
	#[serde(default, alias = "customerName")]
	pub customer: Option<String>,
	/// Customer email.
	#[serde(default, alias = "customerEmail")]
	pub email: Option<String>,
	/// Customer phone.
	#[serde(default, alias = "customerPhone")]
	pub phone: Option<String>,
	/// Booked service.
	#[serde(default, with = "fmt::opt_id")]
	pub service_id: Option<i64>,
	/// Booked service name.
	#[serde(default)]
	pub service: Option<String>,
	/// Price charged.
	#[serde(default)]
	pub price: Option<f64>,
	/// Assigned specialist.
	#[serde(default, with = "fmt::opt_id")]
	pub specialist_id: Option<i64>,
	/// Assigned specialist name.
	#[serde(default)]
	pub specialist: Option<String>,
	/// Visit date.
	#[serde(default, with = "fmt::opt_iso_date")]
	pub booking_date: Option<Date>,
	/// Visit time.
	#[serde(default, with = "fmt::opt_clock_time")]
	pub booking_time: Option<Time>,
	/// Lifecycle status.
	#[serde(default)]
	pub status: Option<BookingStatus>,
	/// Customer note.
	#[serde(default, alias = "notes")]
	pub note: Option<String>,
}

/// Body posted to create a booking (signed-in, guest, or admin-created).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
	/// Service to book.
	pub service_id: i64,
	/// Specialist to book with.
	pub specialist_id: i64,
	/// Visit date.
	#[serde(with = "fmt::iso_date")]
	pub booking_date: Date,
	/// Visit time.
	#[serde(with = "fmt::clock_time")]
	pub booking_time: Time,
	/// Customer display name.
	pub customer_name: String,
	/// Customer phone.
	pub customer_phone: String,
	/// Customer email.
	pub customer_email: String,
	/// Optional note.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub note: Option<String>,
}

/// Admin booking-list filter; the server honours a date range **or** a status, not both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BookingFilter {
	/// Every booking.
	#[default]
	All,
	/// Bookings whose visit date falls within `start..=end`.
	DateRange {
		/// First day, inclusive.
		start: Date,
		/// Last day, inclusive.
		end: Date,
	},
	/// Bookings with the given status.
	Status(BookingStatus),
}
impl BookingFilter {
	/// Renders the filter as a query string (without the leading `?`); empty for [`Self::All`].
	pub fn query(&self) -> Result<String> {
		let mut query = url::form_urlencoded::Serializer::new(String::new());

		match self {
			Self::All => {},
			Self::DateRange { start, end } => {
				query
					.append_pair("startDate", &fmt::format_date(*start)?)
					.append_pair("endDate", &fmt::format_date(*end)?);
			},
			Self::Status(status) => {
				query.append_pair("status", status.as_str());
			},
		}

		Ok(query.finish())
	}
}

#[derive(Serialize)]
pub(crate) struct StatusChange<S> {
	pub(crate) status: S,
}

#[derive(Serialize)]
pub(crate) struct Rating<'a> {
	pub(crate) rating: u8,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub(crate) feedback: Option<&'a str>,
}

#[derive(Serialize)]
pub(crate) struct Feedback<'a> {
	pub(crate) feedback: &'a str,
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros::{date, time};
	// self
	use super::*;

	#[test]
	fn booking_decodes_server_projection() {
		let booking: Booking = serde_json::from_str(
			r#"{"id":12,"customerId":null,"customer":"Lan","email":"lan@example.com","phone":"0912345678","serviceId":3,"service":"Hot stone","price":450000.0,"specialistId":4,"specialist":"Thu","bookingDate":"2025-06-02","bookingTime":"14:00:00","status":"CONFIRMED","note":null}"#,
		)
		.expect("Booking should decode.");

		assert_eq!(booking.booking_date, Some(date!(2025 - 06 - 02)));
		assert_eq!(booking.booking_time, Some(time!(14:00)));
		assert_eq!(booking.status, Some(BookingStatus::Confirmed));
		assert!(booking.status.is_some_and(BookingStatus::is_cancellable));
	}

	#[test]
	fn status_labels_decode_in_any_case() {
		let statuses: Vec<BookingStatus> =
			serde_json::from_str(r#"["pending","Confirmed"," COMPLETED "]"#)
				.expect("Status labels should decode.");

		assert_eq!(
			statuses,
			[BookingStatus::Pending, BookingStatus::Confirmed, BookingStatus::Completed]
		);
		assert_eq!(
			serde_json::to_string(&statuses).expect("Statuses should encode."),
			r#"["PENDING","CONFIRMED","COMPLETED"]"#
		);
		assert!(serde_json::from_str::<BookingStatus>(r#""ON_HOLD""#).is_err());
	}

	#[test]
	fn filter_renders_one_criterion() {
		assert_eq!(BookingFilter::All.query().expect("Filter should render."), "");
		assert_eq!(
			BookingFilter::Status(BookingStatus::Pending).query().expect("Filter should render."),
			"status=PENDING"
		);
		assert_eq!(
			BookingFilter::DateRange { start: date!(2025 - 01 - 01), end: date!(2025 - 01 - 31) }
				.query()
				.expect("Filter should render."),
			"startDate=2025-01-01&endDate=2025-01-31"
		);
	}

	#[test]
	fn status_labels_parse_case_insensitively() {
		assert_eq!("cancelled".parse::<BookingStatus>(), Ok(BookingStatus::Cancelled));
		assert!("done".parse::<BookingStatus>().is_err());
	}
}
