//! User administration.

// crates.io
use serde::de::IgnoredAny;
// self
use crate::{
	_prelude::*,
	api::ApiClient,
	config::endpoints::users,
	model::{NewUser, Role, User, user::RoleChange},
};

impl ApiClient {
	/// Lists every account.
	pub async fn admin_users(&self) -> Result<Vec<User>> {
		self.get(users::ADMIN).await
	}

	/// Creates an account.
	pub async fn create_user(&self, user: &NewUser) -> Result<User> {
		self.post(users::ADMIN, user).await
	}

	/// Deletes account `id`.
	pub async fn delete_user(&self, id: i64) -> Result<()> {
		let _: IgnoredAny = self.delete(&users::by_id(id)).await?;

		Ok(())
	}

	/// Changes the role of account `id`.
	pub async fn change_user_role(&self, id: i64, role: Role) -> Result<User> {
		self.patch(&users::role(id), &RoleChange { role }).await
	}
}
