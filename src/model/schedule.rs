//! Specialist work schedule.

// crates.io
use serde::{Deserializer, Serializer};
use time::Time;
// self
use crate::{
	_prelude::*,
	model::{self, UnknownLabel, fmt},
};

/// Schedule state of a day or slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScheduleStatus {
	/// Open for bookings.
	Available,
	/// Taken by a booking.
	Booked,
	/// Specialist is off.
	Off,
}
impl ScheduleStatus {
	/// Every status.
	pub const ALL: [Self; 3] = [Self::Available, Self::Booked, Self::Off];

	/// Returns the wire label.
	pub const fn as_str(self) -> &'static str {
		match self {
			Self::Available => "AVAILABLE",
			Self::Booked => "BOOKED",
			Self::Off => "OFF",
		}
	}
}
impl Display for ScheduleStatus {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for ScheduleStatus {
	type Err = UnknownLabel;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::ALL
			.into_iter()
			.find(|status| status.as_str().eq_ignore_ascii_case(s.trim()))
			.ok_or_else(|| UnknownLabel::new("schedule status", s))
	}
}
impl Serialize for ScheduleStatus {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(self.as_str())
	}
}
impl<'de> Deserialize<'de> for ScheduleStatus {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		model::deserialize_label(deserializer)
	}
}

/// One time slot on a specialist's schedule.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleSlot {
	/// Identifier, used to delete the slot.
	#[serde(default, skip_serializing_if = "Option::is_none", with = "fmt::opt_id")]
	pub id: Option<i64>,
	/// Day of the slot.
	#[serde(default, with = "fmt::opt_iso_date")]
	pub date: Option<Date>,
	/// Start time.
	#[serde(default, with = "fmt::opt_clock_time")]
	pub time: Option<Time>,
	/// Whether the slot can still be booked.
	#[serde(default)]
	pub available: Option<bool>,
	/// Day-level status.
	#[serde(default)]
	pub status: Option<ScheduleStatus>,
	/// Admin note.
	#[serde(default)]
	pub notes: Option<String>,
}
impl ScheduleSlot {
	/// Returns `true` unless the slot is explicitly booked or off.
	pub fn is_open(&self) -> bool {
		match (self.available, self.status) {
			(Some(available), _) => available,
			(None, Some(status)) => status == ScheduleStatus::Available,
			(None, None) => true,
		}
	}
}

/// Slot added to a specialist's schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct NewScheduleSlot {
	/// Day of the slot.
	#[serde(with = "fmt::iso_date")]
	pub date: Date,
	/// Start time.
	#[serde(with = "fmt::clock_time")]
	pub time: Time,
	/// Whether the slot opens for bookings immediately.
	pub available: bool,
}
impl NewScheduleSlot {
	/// An open slot at `time` on `date`.
	pub fn open(date: Date, time: Time) -> Self {
		Self { date, time, available: true }
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros::{date, time};
	// self
	use super::*;

	#[test]
	fn slot_payload_uses_short_time() {
		let slot = NewScheduleSlot::open(date!(2025 - 06 - 02), time!(9:00));

		assert_eq!(
			serde_json::to_string(&slot).expect("Slot should encode."),
			r#"{"date":"2025-06-02","time":"09:00","available":true}"#
		);

		let listed: Vec<ScheduleSlot> = serde_json::from_str(
			r#"[{"id":1,"time":"09:00:00","available":false},{"id":2,"time":"10:00","status":"AVAILABLE"}]"#,
		)
		.expect("Schedule should decode.");

		assert!(!listed[0].is_open());
		assert!(listed[1].is_open());
	}

	#[test]
	fn status_labels_decode_in_any_case() {
		let statuses: Vec<ScheduleStatus> = serde_json::from_str(r#"["available","Booked","OFF"]"#)
			.expect("Status labels should decode.");

		assert_eq!(statuses, ScheduleStatus::ALL);
		assert_eq!(ScheduleStatus::Off.to_string(), "OFF");
		assert!("closed".parse::<ScheduleStatus>().is_err());
	}
}
