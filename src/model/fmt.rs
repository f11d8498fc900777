//! Serde adapters for the wire formats the server and older clients emit.
//!
//! Identifiers arrive as numbers or numeric strings, dates as `YYYY-MM-DD`, booking times as
//! `HH:MM` or `HH:MM:SS`, and timestamps as `YYYY-MM-DDTHH:MM:SS[.fraction]`.

// crates.io
use serde::{Deserializer, Serializer};
use time::{
	PrimitiveDateTime, Time,
	error::{Format, Parse},
	format_description::BorrowedFormatItem,
	macros::format_description,
};
// self
use crate::_prelude::*;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrString {
	Int(i64),
	Float(f64),
	Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ListOrString {
	List(Vec<String>),
	Text(String),
}

const DATE: &[BorrowedFormatItem] = format_description!("[year]-[month]-[day]");
const CLOCK: &[BorrowedFormatItem] = format_description!("[hour]:[minute]");
const CLOCK_SECONDS: &[BorrowedFormatItem] = format_description!("[hour]:[minute]:[second]");
const DATETIME: &[BorrowedFormatItem] =
	format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");

/// Formats a date as `YYYY-MM-DD`.
pub fn format_date(date: Date) -> Result<String, Format> {
	date.format(DATE)
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<Date, Parse> {
	Date::parse(raw.trim(), DATE)
}

/// Formats a time of day as `HH:MM`.
pub fn format_time(time: Time) -> Result<String, Format> {
	time.format(CLOCK)
}

/// Parses `HH:MM` or `HH:MM:SS`.
pub fn parse_time(raw: &str) -> Result<Time, Parse> {
	let raw = raw.trim();

	Time::parse(raw, CLOCK_SECONDS).or_else(|_| Time::parse(raw, CLOCK))
}

/// Parses a server timestamp, discarding any fractional seconds.
pub fn parse_datetime(raw: &str) -> Result<PrimitiveDateTime, Parse> {
	let head = raw.trim().split('.').next().unwrap_or_default();

	PrimitiveDateTime::parse(head, DATETIME)
}

/// Formats a timestamp as `YYYY-MM-DDTHH:MM:SS`.
pub fn format_datetime(value: PrimitiveDateTime) -> Result<String, Format> {
	value.format(DATETIME)
}

fn id_from(value: NumberOrString) -> Result<i64, String> {
	match value {
		NumberOrString::Int(id) => Ok(id),
		NumberOrString::Float(id) if id.fract() == 0.0 => Ok(id as i64),
		NumberOrString::Float(id) => Err(format!("identifier {id} is not an integer")),
		NumberOrString::Text(text) =>
			text.trim().parse().map_err(|_| format!("identifier `{text}` is not numeric")),
	}
}

/// Optional identifiers encoded as numbers or numeric strings.
pub mod opt_id {
	// crates.io
	use serde::de::Error as _;
	// self
	use super::*;

	/// Writes the identifier as a JSON number.
	pub fn serialize<S>(value: &Option<i64>, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match value {
			Some(id) => serializer.serialize_i64(*id),
			None => serializer.serialize_none(),
		}
	}

	/// Accepts `null`, a number, or a numeric string.
	pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
	where
		D: Deserializer<'de>,
	{
		match Option::<NumberOrString>::deserialize(deserializer)? {
			None => Ok(None),
			Some(NumberOrString::Text(text)) if text.trim().is_empty() => Ok(None),
			Some(value) => id_from(value).map(Some).map_err(D::Error::custom),
		}
	}
}

/// Required `YYYY-MM-DD` dates.
pub mod iso_date {
	// crates.io
	use serde::{de::Error as _, ser::Error as _};
	// self
	use super::*;

	/// Writes the date as `YYYY-MM-DD`.
	pub fn serialize<S>(value: &Date, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&format_date(*value).map_err(S::Error::custom)?)
	}

	/// Reads a `YYYY-MM-DD` date.
	pub fn deserialize<'de, D>(deserializer: D) -> Result<Date, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = String::deserialize(deserializer)?;

		parse_date(&raw).map_err(|e| D::Error::custom(format!("invalid date `{raw}`: {e}")))
	}
}

/// Optional `YYYY-MM-DD` dates.
pub mod opt_iso_date {
	// crates.io
	use serde::{de::Error as _, ser::Error as _};
	// self
	use super::*;

	/// Writes the date as `YYYY-MM-DD` or `null`.
	pub fn serialize<S>(value: &Option<Date>, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match value {
			Some(date) => serializer.serialize_str(&format_date(*date).map_err(S::Error::custom)?),
			None => serializer.serialize_none(),
		}
	}

	/// Reads an optional `YYYY-MM-DD` date; blank strings count as absent.
	pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Date>, D::Error>
	where
		D: Deserializer<'de>,
	{
		match Option::<String>::deserialize(deserializer)? {
			Some(raw) if !raw.trim().is_empty() => parse_date(&raw)
				.map(Some)
				.map_err(|e| D::Error::custom(format!("invalid date `{raw}`: {e}"))),
			_ => Ok(None),
		}
	}
}

/// Required booking times, read as `HH:MM[:SS]` and written as `HH:MM`.
pub mod clock_time {
	// crates.io
	use serde::{de::Error as _, ser::Error as _};
	// self
	use super::*;

	/// Writes the time as `HH:MM`.
	pub fn serialize<S>(value: &Time, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(&format_time(*value).map_err(S::Error::custom)?)
	}

	/// Reads `HH:MM` or `HH:MM:SS`.
	pub fn deserialize<'de, D>(deserializer: D) -> Result<Time, D::Error>
	where
		D: Deserializer<'de>,
	{
		let raw = String::deserialize(deserializer)?;

		parse_time(&raw).map_err(|e| D::Error::custom(format!("invalid time `{raw}`: {e}")))
	}
}

/// Optional booking times.
pub mod opt_clock_time {
	// crates.io
	use serde::{de::Error as _, ser::Error as _};
	// self
	use super::*;

	/// Writes the time as `HH:MM` or `null`.
	pub fn serialize<S>(value: &Option<Time>, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match value {
			Some(time) => serializer.serialize_str(&format_time(*time).map_err(S::Error::custom)?),
			None => serializer.serialize_none(),
		}
	}

	/// Reads an optional `HH:MM[:SS]` value; blank strings count as absent.
	pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Time>, D::Error>
	where
		D: Deserializer<'de>,
	{
		match Option::<String>::deserialize(deserializer)? {
			Some(raw) if !raw.trim().is_empty() => parse_time(&raw)
				.map(Some)
				.map_err(|e| D::Error::custom(format!("invalid time `{raw}`: {e}"))),
			_ => Ok(None),
		}
	}
}

/// Optional server timestamps without offset.
pub mod opt_datetime {
	// crates.io
	use serde::{de::Error as _, ser::Error as _};
	// self
	use super::*;

	/// Writes the timestamp as `YYYY-MM-DDTHH:MM:SS` or `null`.
	pub fn serialize<S>(value: &Option<PrimitiveDateTime>, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match value {
			Some(value) =>
				serializer.serialize_str(&format_datetime(*value).map_err(S::Error::custom)?),
			None => serializer.serialize_none(),
		}
	}

	/// Reads an optional timestamp; fractional seconds are dropped.
	pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<PrimitiveDateTime>, D::Error>
	where
		D: Deserializer<'de>,
	{
		match Option::<String>::deserialize(deserializer)? {
			Some(raw) if !raw.trim().is_empty() => parse_datetime(&raw)
				.map(Some)
				.map_err(|e| D::Error::custom(format!("invalid timestamp `{raw}`: {e}"))),
			_ => Ok(None),
		}
	}
}

/// Optional text fields that some endpoints send as numbers (`"5"` vs `5`).
pub mod opt_text {
	// self
	use super::*;

	/// Writes the value as a string or `null`.
	pub fn serialize<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		match value {
			Some(text) => serializer.serialize_str(text),
			None => serializer.serialize_none(),
		}
	}

	/// Accepts `null`, a string, or a number.
	pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
	where
		D: Deserializer<'de>,
	{
		Ok(Option::<NumberOrString>::deserialize(deserializer)?.map(|value| match value {
			NumberOrString::Int(n) => n.to_string(),
			NumberOrString::Float(n) => n.to_string(),
			NumberOrString::Text(text) => text,
		}))
	}
}

/// String lists sent either as JSON arrays or comma-separated text.
pub mod string_list {
	// self
	use super::*;

	/// Writes the list as a JSON array.
	pub fn serialize<S>(value: &[String], serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.collect_seq(value)
	}

	/// Accepts `null`, an array, or `"a, b, c"`.
	pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
	where
		D: Deserializer<'de>,
	{
		Ok(match Option::<ListOrString>::deserialize(deserializer)? {
			None => Vec::new(),
			Some(ListOrString::List(items)) => items,
			Some(ListOrString::Text(text)) => text
				.split(',')
				.map(str::trim)
				.filter(|item| !item.is_empty())
				.map(str::to_owned)
				.collect(),
		})
	}
}
