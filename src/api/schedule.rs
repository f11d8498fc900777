//! Specialist schedule management.

// crates.io
use serde::de::IgnoredAny;
// self
use crate::{
	_prelude::*,
	api::ApiClient,
	config::endpoints::specialists,
	model::{NewScheduleSlot, ScheduleSlot, fmt},
};

impl ApiClient {
	/// Slots on `date` for specialist `id`.
	pub async fn specialist_schedule(&self, id: i64, date: Date) -> Result<Vec<ScheduleSlot>> {
		let path = format!("{}?date={}", specialists::admin_schedule(id), fmt::format_date(date)?);

		self.get(&path).await
	}

	/// Adds a slot to specialist `id`'s schedule.
	pub async fn add_schedule_slot(&self, id: i64, slot: &NewScheduleSlot) -> Result<ScheduleSlot> {
		self.post(&specialists::admin_schedule(id), slot).await
	}

	/// Removes slot `slot_id`.
	pub async fn delete_schedule_slot(&self, slot_id: i64) -> Result<()> {
		let _: IgnoredAny = self.delete(&specialists::schedule_slot(slot_id)).await?;

		Ok(())
	}
}
