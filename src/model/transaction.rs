//! Payment transactions.

// crates.io
use serde::{Deserializer, Serializer};
use time::PrimitiveDateTime;
// self
use crate::{
	_prelude::*,
	model::{self, UnknownLabel, fmt},
};

/// Payment status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransactionStatus {
	/// Awaiting settlement.
	Pending,
	/// Settled.
	Completed,
	/// Declined or errored.
	Failed,
	/// Returned to the customer.
	Refunded,
}
impl TransactionStatus {
	/// Every status.
	pub const ALL: [Self; 4] = [Self::Pending, Self::Completed, Self::Failed, Self::Refunded];

	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Pending => "PENDING",
			Self::Completed => "COMPLETED",
			Self::Failed => "FAILED",
			Self::Refunded => "REFUNDED",
		}
	}
}
impl Display for TransactionStatus {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for TransactionStatus {
	type Err = UnknownLabel;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| UnknownLabel::new("transaction status", s))
	}
}
impl Serialize for TransactionStatus {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(self.as_str())
	}
}
impl<'de> Deserialize<'de> for TransactionStatus {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		model::deserialize_label(deserializer)
	}
}

/// Payment recorded against a booking.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
	/// Identifier; empty on create.
	#[serde(default, skip_serializing_if = "Option::is_none", with = "fmt::opt_id")]
	pub id: Option<i64>,
	/// Human-facing transaction code.
	#[serde(default)]
	pub transaction_id: Option<String>,
	/// Paid booking.
	#[serde(default, with = "fmt::opt_id")]
	pub booking_id: Option<i64>,
	/// Customer display name.
	#[serde(default)]
	pub customer_name: Option<String>,
	/// Service name.
	#[serde(default)]
	pub service_name: Option<String>,
	/// Specialist name.
	#[serde(default)]
	pub specialist_name: Option<String>,
	/// Amount in VND.
	#[serde(default)]
	pub amount: Option<f64>,
	/// Payment method label (cash, card, transfer, ...).
	#[serde(default)]
	pub payment_method: Option<String>,
	/// Payment status.
	#[serde(default)]
	pub status: Option<TransactionStatus>,
	/// When the payment happened.
	#[serde(default, with = "fmt::opt_datetime")]
	pub transaction_date: Option<PrimitiveDateTime>,
	/// Processor reference.
	#[serde(default)]
	pub reference_number: Option<String>,
	/// Free-text note.
	#[serde(default)]
	pub note: Option<String>,
}

/// Admin transaction-list filter; every criterion is optional and they combine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TransactionFilter {
	/// Only transactions with this status.
	pub status: Option<TransactionStatus>,
	/// Only transactions on or after this day.
	pub start_date: Option<Date>,
	/// Only transactions on or before this day.
	pub end_date: Option<Date>,
}
impl TransactionFilter {
	/// Restricts the listing to `status`.
	pub fn status(mut self, status: TransactionStatus) -> Self {
		self.status = Some(status);

		self
	}

	/// Restricts the listing to `start..=end`.
	pub fn between(mut self, start: Date, end: Date) -> Self {
		self.start_date = Some(start);
		self.end_date = Some(end);

		self
	}

	/// Renders the filter as a query string (without the leading `?`).
	pub fn query(&self) -> Result<String> {
		let mut query = url::form_urlencoded::Serializer::new(String::new());

		if let Some(status) = self.status {
			query.append_pair("status", status.as_str());
		}
		if let Some(start) = self.start_date {
			query.append_pair("startDate", &fmt::format_date(start)?);
		}
		if let Some(end) = self.end_date {
			query.append_pair("endDate", &fmt::format_date(end)?);
		}

		Ok(query.finish())
	}
}
