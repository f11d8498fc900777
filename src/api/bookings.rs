//! Booking operations for customers and administrators.

// crates.io
use serde::de::IgnoredAny;
// self
use crate::{
	_prelude::*,
	api::{ApiClient, RequestOptions},
	booking::BookingForm,
	config::endpoints::bookings,
	model::{
		Booking, BookingFilter, BookingRequest, BookingStatus,
		booking::{Feedback, Rating, StatusChange},
	},
};

impl ApiClient {
	/// Books a visit for the signed-in customer.
	pub async fn create_booking(&self, request: &BookingRequest) -> Result<Booking> {
		self.post(bookings::USER, request).await
	}

	/// Validates `form` against today and books it for the signed-in customer.
	///
	/// Validation failures never reach the server.
	pub async fn submit_booking(&self, form: &BookingForm) -> Result<Booking> {
		let request = form.validate()?;

		self.create_booking(&request).await
	}

	/// Books a visit without an account.
	pub async fn create_guest_booking(&self, request: &BookingRequest) -> Result<Booking> {
		self.post_with(bookings::GUEST, request, RequestOptions::public()).await
	}

	/// Every booking of the signed-in customer.
	pub async fn my_bookings(&self) -> Result<Vec<Booking>> {
		self.get(bookings::USER).await
	}

	/// Bookings still ahead.
	pub async fn upcoming_bookings(&self) -> Result<Vec<Booking>> {
		self.get(bookings::UPCOMING).await
	}

	/// Bookings already behind.
	pub async fn past_bookings(&self) -> Result<Vec<Booking>> {
		self.get(bookings::PAST).await
	}

	/// Completed bookings eligible for rating.
	pub async fn booking_history(&self) -> Result<Vec<Booking>> {
		self.get(bookings::HISTORY).await
	}

	/// Cancels one of the signed-in customer's bookings.
	pub async fn cancel_my_booking(&self, id: i64) -> Result<Booking> {
		self.request::<_, ()>(Method::PUT, &bookings::user_cancel(id), None, RequestOptions::default())
			.await
	}

	/// Rates a completed visit (1 to 5 stars) with optional feedback.
	pub async fn rate_booking(&self, id: i64, rating: u8, feedback: Option<&str>) -> Result<()> {
		let _: IgnoredAny =
			self.post(&bookings::rate(id), &Rating { rating: rating.clamp(1, 5), feedback }).await?;

		Ok(())
	}

	/// Leaves free-text feedback on a visit.
	pub async fn booking_feedback(&self, id: i64, feedback: &str) -> Result<()> {
		let _: IgnoredAny = self.post(&bookings::feedback(id), &Feedback { feedback }).await?;

		Ok(())
	}

	/// Lists bookings for administrators.
	pub async fn admin_bookings(&self, filter: BookingFilter) -> Result<Vec<Booking>> {
		let query = filter.query()?;

		if query.is_empty() {
			self.get(bookings::ADMIN).await
		} else {
			self.get(&format!("{}?{query}", bookings::ADMIN)).await
		}
	}

	/// Fetches one booking.
	pub async fn admin_booking(&self, id: i64) -> Result<Booking> {
		self.get(&bookings::admin_by_id(id)).await
	}

	/// Latest bookings for the admin dashboard.
	pub async fn recent_bookings(&self) -> Result<Vec<Booking>> {
		self.get(bookings::ADMIN_RECENT).await
	}

	/// Books a visit on a customer's behalf.
	pub async fn create_admin_booking(&self, request: &BookingRequest) -> Result<Booking> {
		self.post(bookings::ADMIN, request).await
	}

	/// Moves booking `id` to `status`.
	pub async fn update_booking_status(&self, id: i64, status: BookingStatus) -> Result<Booking> {
		self.patch(&bookings::status(id), &StatusChange { status }).await
	}

	/// Cancels booking `id` as an administrator.
	pub async fn cancel_booking(&self, id: i64) -> Result<Booking> {
		self.request::<_, ()>(Method::PATCH, &bookings::cancel(id), None, RequestOptions::default())
			.await
	}
}
