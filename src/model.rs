//! Records mirrored from server responses.
//!
//! The server is authoritative for every entity here; the client only types the fields. Most
//! fields are optional because different endpoints project different subsets of the same
//! record, and the same records double as create/update payloads (with `id` left empty).

pub mod blog;
pub mod booking;
pub mod dashboard;
pub mod fmt;
pub mod report;
pub mod schedule;
pub mod service;
pub mod specialist;
pub mod transaction;
pub mod user;

pub use blog::*;
pub use booking::*;
pub use dashboard::*;
pub use report::*;
pub use schedule::*;
pub use service::*;
pub use specialist::*;
pub use transaction::*;
pub use user::*;

// crates.io
use serde::Deserializer;
// self
use crate::_prelude::*;

/// Error returned when a status or role label is not recognised.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Unknown {kind} `{value}`.")]
pub struct UnknownLabel {
	/// Which enumeration rejected the label.
	pub kind: &'static str,
	/// The rejected label.
	pub value: String,
}
impl UnknownLabel {
	pub(crate) fn new(kind: &'static str, value: &str) -> Self {
		Self { kind, value: value.to_owned() }
	}
}

/// Reads a status or role label through its case-insensitive [`FromStr`] parser.
pub(crate) fn deserialize_label<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
	D: Deserializer<'de>,
	T: FromStr<Err = UnknownLabel>,
{
	let raw = String::deserialize(deserializer)?;

	raw.parse().map_err(serde::de::Error::custom)
}
