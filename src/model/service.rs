//! Service catalogue records.

// self
use crate::_prelude::*;

/// Bookable service.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
	/// Identifier; empty on create.
	#[serde(default, skip_serializing_if = "Option::is_none", with = "crate::model::fmt::opt_id")]
	pub id: Option<i64>,
	/// Display name.
	#[serde(default)]
	pub name: String,
	/// Marketing copy.
	#[serde(default)]
	pub description: Option<String>,
	/// Price in VND.
	#[serde(default)]
	pub price: Option<f64>,
	/// Duration in minutes.
	#[serde(default)]
	pub duration: Option<u32>,
	/// Owning category.
	#[serde(default, with = "crate::model::fmt::opt_id")]
	pub category_id: Option<i64>,
	/// Owning category name.
	#[serde(default)]
	pub category_name: Option<String>,
	/// Image URL.
	#[serde(default)]
	pub image: Option<String>,
	/// Whether the service is offered.
	#[serde(default)]
	pub active: Option<bool>,
}

/// Group of services.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceCategory {
	/// Identifier; empty on create.
	#[serde(default, skip_serializing_if = "Option::is_none", with = "crate::model::fmt::opt_id")]
	pub id: Option<i64>,
	/// Display name.
	#[serde(default)]
	pub name: String,
	/// Description.
	#[serde(default)]
	pub description: Option<String>,
	/// Image URL.
	#[serde(default)]
	pub image: Option<String>,
	/// Number of services in the category (read only).
	#[serde(default, skip_serializing)]
	pub service_count: Option<u32>,
}

/// Entry in the admin "popular services" ranking.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopularService {
	/// Service identifier.
	#[serde(default, skip_serializing_if = "Option::is_none", with = "crate::model::fmt::opt_id")]
	pub id: Option<i64>,
	/// Service name.
	#[serde(default)]
	pub name: String,
	/// Bookings in the period.
	#[serde(default)]
	pub bookings: u64,
	/// Revenue in the period.
	#[serde(default)]
	pub revenue: f64,
}
impl PopularService {
	/// Share of `total_bookings` held by this service, rounded to a whole percent.
	pub fn share_of(&self, total_bookings: u64) -> u64 {
		let total = total_bookings.max(1) as f64;

		(self.bookings as f64 / total * 100.0).round() as u64
	}
}
