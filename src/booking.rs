//! Client-side booking form validation.
//!
//! [`BookingForm`] mirrors what a customer fills in; [`BookingForm::validate_at`] checks every
//! field, collects all problems at once, and produces the [`BookingRequest`] the booking
//! endpoints accept.

// std
use std::sync::LazyLock;
// crates.io
use regex::Regex;
// self
use crate::{
	_prelude::*,
	auth::CachedUser,
	model::{BookingRequest, fmt},
};

/// Bookable start times, in display order.
pub const TIME_SLOTS: [&str; 7] = ["09:00", "10:00", "11:00", "14:00", "15:00", "16:00", "17:00"];

static PHONE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"^\+?[0-9]{10,11}$").expect("Phone pattern should compile."));
static EMAIL: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Email pattern should compile.")
});

/// Booking form as filled in by a customer or an admin.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookingForm {
	/// Selected services; only the first one is booked.
	pub service_ids: Vec<i64>,
	/// Selected specialist.
	pub specialist_id: Option<i64>,
	/// Visit date.
	pub date: Option<Date>,
	/// Visit time label, one of [`TIME_SLOTS`].
	pub time: Option<String>,
	/// Customer display name.
	pub customer_name: String,
	/// Customer phone number.
	pub customer_phone: String,
	/// Customer email.
	pub customer_email: String,
	/// Optional note for the salon.
	pub notes: Option<String>,
}
impl BookingForm {
	/// Starts a form with the contact fields taken from the signed-in user.
	pub fn prefilled(user: &CachedUser) -> Self {
		Self {
			customer_name: user.full_name.clone().unwrap_or_default(),
			customer_phone: user.phone.clone().unwrap_or_default(),
			customer_email: user.email.clone().unwrap_or_default(),
			..Default::default()
		}
	}

	/// Validates against the current UTC day.
	pub fn validate(&self) -> Result<BookingRequest, BookingValidationError> {
		self.validate_at(OffsetDateTime::now_utc().date())
	}

	/// Validates the form, treating `today` as the earliest bookable day.
	pub fn validate_at(&self, today: Date) -> Result<BookingRequest, BookingValidationError> {
		let mut issues = Vec::new();
		let service_id = self.service_ids.first().copied();

		if service_id.is_none() {
			issues.push(BookingIssue::NoService);
		}
		if self.specialist_id.is_none() {
			issues.push(BookingIssue::NoSpecialist);
		}

		match self.date {
			None => issues.push(BookingIssue::MissingDate),
			Some(date) if date < today => issues.push(BookingIssue::PastDate { date }),
			Some(_) => {},
		}

		let time = match self.time.as_deref().map(str::trim).filter(|raw| !raw.is_empty()) {
			None => {
				issues.push(BookingIssue::MissingTime);

				None
			},
			Some(raw) => match fmt::parse_time(raw) {
				Ok(time)
					if TIME_SLOTS.iter().any(|slot| fmt::parse_time(slot).is_ok_and(|slot| slot == time)) =>
					Some(time),
				_ => {
					issues.push(BookingIssue::UnknownTimeSlot { time: raw.to_owned() });

					None
				},
			},
		};
		let name = self.customer_name.trim();

		if name.chars().count() < 2 {
			issues.push(BookingIssue::NameTooShort);
		}

		let phone: String = self.customer_phone.chars().filter(|c| !c.is_whitespace()).collect();

		if !PHONE.is_match(&phone) {
			issues.push(BookingIssue::InvalidPhone);
		}

		let email = self.customer_email.trim();

		if !EMAIL.is_match(email) {
			issues.push(BookingIssue::InvalidEmail);
		}

		match (service_id, self.specialist_id, self.date, time) {
			(Some(service_id), Some(specialist_id), Some(booking_date), Some(booking_time))
				if issues.is_empty() =>
				Ok(BookingRequest {
					service_id,
					specialist_id,
					booking_date,
					booking_time,
					customer_name: name.to_owned(),
					customer_phone: phone,
					customer_email: email.to_owned(),
					note: self.notes.as_deref().map(str::trim).filter(|n| !n.is_empty()).map(str::to_owned),
				}),
			_ => Err(BookingValidationError { issues }),
		}
	}
}

/// Single validation problem.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum BookingIssue {
	/// No service selected.
	#[error("Please choose at least one service.")]
	NoService,
	/// No specialist selected.
	#[error("Please choose a specialist.")]
	NoSpecialist,
	/// No date selected.
	#[error("Please choose a date.")]
	MissingDate,
	/// Selected date lies before today.
	#[error("Date {date} is in the past.")]
	PastDate {
		/// Rejected date.
		date: Date,
	},
	/// No time selected.
	#[error("Please choose a time.")]
	MissingTime,
	/// Selected time is not a bookable slot.
	#[error("Time `{time}` is not an available slot.")]
	UnknownTimeSlot {
		/// Rejected time label.
		time: String,
	},
	/// Name shorter than two characters.
	#[error("Name must be at least 2 characters.")]
	NameTooShort,
	/// Phone is not 10 or 11 digits.
	#[error("Phone number must have 10-11 digits.")]
	InvalidPhone,
	/// Email is not well formed.
	#[error("Email address is invalid.")]
	InvalidEmail,
}

/// Every problem found in a [`BookingForm`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BookingValidationError {
	/// Problems in field order.
	pub issues: Vec<BookingIssue>,
}
impl BookingValidationError {
	/// Returns `true` when `issue` was reported.
	pub fn contains(&self, issue: &BookingIssue) -> bool {
		self.issues.contains(issue)
	}
}
impl Display for BookingValidationError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("Booking form is invalid:")?;

		for issue in &self.issues {
			write!(f, " {issue}")?;
		}

		Ok(())
	}
}
impl StdError for BookingValidationError {}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros::{date, time};
	// self
	use super::*;

	const TODAY: Date = date!(2025 - 06 - 02);

	fn valid_form() -> BookingForm {
		BookingForm {
			service_ids: vec![3, 5],
			specialist_id: Some(4),
			date: Some(TODAY),
			time: Some("14:00".into()),
			customer_name: "  Lan Vo ".into(),
			customer_phone: "0912 345 678".into(),
			customer_email: "lan@example.com".into(),
			notes: Some("   ".into()),
		}
	}

	#[test]
	fn valid_form_books_first_service() {
		let request = valid_form().validate_at(TODAY).expect("Form should validate.");

		assert_eq!(request.service_id, 3);
		assert_eq!(request.booking_time, time!(14:00));
		assert_eq!(request.customer_name, "Lan Vo");
		assert_eq!(request.customer_phone, "0912345678");
		assert_eq!(request.note, None);
		assert_eq!(
			serde_json::to_string(&request).expect("Request should encode."),
			r#"{"serviceId":3,"specialistId":4,"bookingDate":"2025-06-02","bookingTime":"14:00","customerName":"Lan Vo","customerPhone":"0912345678","customerEmail":"lan@example.com"}"#
		);
	}

	#[test]
	fn past_dates_are_rejected() {
		let form = BookingForm { date: Some(date!(2025 - 06 - 01)), ..valid_form() };
		let err = form.validate_at(TODAY).expect_err("Yesterday must be rejected.");

		assert_eq!(err.issues, vec![BookingIssue::PastDate { date: date!(2025 - 06 - 01) }]);
	}

	#[test]
	fn every_problem_is_reported() {
		let form = BookingForm {
			time: Some("12:30".into()),
			customer_name: "A".into(),
			customer_phone: "+84-912".into(),
			customer_email: "lan@".into(),
			..Default::default()
		};
		let err = form.validate_at(TODAY).expect_err("Empty form must be rejected.");

		assert_eq!(
			err.issues,
			vec![
				BookingIssue::NoService,
				BookingIssue::NoSpecialist,
				BookingIssue::MissingDate,
				BookingIssue::UnknownTimeSlot { time: "12:30".into() },
				BookingIssue::NameTooShort,
				BookingIssue::InvalidPhone,
				BookingIssue::InvalidEmail,
			]
		);
		assert!(err.to_string().starts_with("Booking form is invalid: Please choose at least one"));
	}

	#[test]
	fn seconds_and_international_numbers_are_accepted() {
		let form = BookingForm {
			time: Some("09:00:00".into()),
			customer_phone: "+84912345678".into(),
			..valid_form()
		};

		assert!(form.validate_at(TODAY).is_ok());
		assert!(BookingForm { time: None, ..valid_form() }
			.validate_at(TODAY)
			.is_err_and(|err| err.contains(&BookingIssue::MissingTime)));
	}

	#[test]
	fn prefill_copies_contact_details() {
		let user = CachedUser {
			full_name: Some("Linh Tran".into()),
			email: Some("linh@example.com".into()),
			phone: Some("0987654321".into()),
			..Default::default()
		};
		let form = BookingForm::prefilled(&user);

		assert_eq!(form.customer_name, "Linh Tran");
		assert_eq!(form.customer_phone, "0987654321");
		assert!(form.service_ids.is_empty());
	}
}
