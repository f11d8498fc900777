//! Specialists (staff members customers book with).

// self
use crate::_prelude::*;

/// Staff member assignable to bookings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specialist {
	/// Identifier; empty on create.
	#[serde(default, skip_serializing_if = "Option::is_none", with = "crate::model::fmt::opt_id")]
	pub id: Option<i64>,
	/// Display name.
	#[serde(default)]
	pub name: String,
	/// Job title.
	#[serde(default)]
	pub role: Option<String>,
	/// Primary specialty.
	#[serde(default)]
	pub specialty: Option<String>,
	/// Email address.
	#[serde(default)]
	pub email: Option<String>,
	/// Phone number.
	#[serde(default)]
	pub phone: Option<String>,
	/// Experience, as free text or a number of years.
	#[serde(default, with = "crate::model::fmt::opt_text")]
	pub experience: Option<String>,
	/// Biography.
	#[serde(default)]
	pub bio: Option<String>,
	/// Specialty tags.
	#[serde(default, with = "crate::model::fmt::string_list")]
	pub specialties: Vec<String>,
	/// Average customer rating.
	#[serde(default)]
	pub rating: Option<f64>,
	/// Photo URL.
	#[serde(default)]
	pub image: Option<String>,
	/// Employment status label.
	#[serde(default)]
	pub status: Option<String>,
	/// Weekday/slot labels the specialist works.
	#[serde(default, with = "crate::model::fmt::string_list")]
	pub availability: Vec<String>,
	/// Linked account.
	#[serde(default, skip_serializing_if = "Option::is_none", with = "crate::model::fmt::opt_id")]
	pub user_id: Option<i64>,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn specialist_accepts_comma_separated_specialties() {
		let specialist: Specialist = serde_json::from_str(
			r#"{"id":4,"name":"Thu Nguyen","experience":"5 years","specialties":"Massage, Aromatherapy","availability":["Mon","Wed"],"rating":4.8}"#,
		)
		.expect("Specialist should decode.");

		assert_eq!(specialist.specialties, vec!["Massage".to_owned(), "Aromatherapy".to_owned()]);
		assert_eq!(specialist.availability.len(), 2);
		assert_eq!(specialist.experience.as_deref(), Some("5 years"));
		assert_eq!(specialist.user_id, None);
	}
}
