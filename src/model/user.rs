//! Accounts and roles.

// crates.io
use serde::{Deserializer, Serializer};
use time::PrimitiveDateTime;
// self
use crate::{
	_prelude::*,
	model::{self, UnknownLabel},
};

/// Account role.
///
/// Serialized with the `ROLE_` prefix the server stores. Input is case-insensitive, the prefix is
/// optional, and `USER` is the legacy name for [`Role::Customer`]. Labels the client does not
/// know are kept verbatim in [`Role::Other`] and carry customer privileges.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
	/// Full administrative access.
	Admin,
	/// Staff member.
	Staff,
	/// Regular customer.
	Customer,
	/// Role label introduced by the server after this client was built.
	Other(String),
}
impl Role {
	/// Returns the wire label.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Admin => "ROLE_ADMIN",
			Self::Staff => "ROLE_STAFF",
			Self::Customer => "ROLE_CUSTOMER",
			Self::Other(label) => label.as_str(),
		}
	}
}
impl Display for Role {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
impl FromStr for Role {
	type Err = UnknownLabel;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let label = s.trim();

		if label.is_empty() {
			return Err(UnknownLabel::new("role", s));
		}

		let upper = label.to_ascii_uppercase();

		Ok(match upper.strip_prefix("ROLE_").unwrap_or(&upper) {
			"ADMIN" => Self::Admin,
			"STAFF" => Self::Staff,
			"CUSTOMER" | "USER" => Self::Customer,
			_ => Self::Other(label.to_owned()),
		})
	}
}
impl Serialize for Role {
	fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
	where
		S: Serializer,
	{
		serializer.serialize_str(self.as_str())
	}
}
impl<'de> Deserialize<'de> for Role {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: Deserializer<'de>,
	{
		model::deserialize_label(deserializer)
	}
}

/// Account as listed by the user administration endpoints.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
	/// Identifier.
	#[serde(default, skip_serializing_if = "Option::is_none", with = "crate::model::fmt::opt_id")]
	pub id: Option<i64>,
	/// Login name.
	#[serde(default)]
	pub username: Option<String>,
	/// Display name.
	#[serde(default, alias = "fullName")]
	pub name: Option<String>,
	/// Email address.
	#[serde(default)]
	pub email: Option<String>,
	/// Phone number.
	#[serde(default)]
	pub phone: Option<String>,
	/// Role.
	#[serde(default)]
	pub role: Option<Role>,
	/// `active` or `inactive`.
	#[serde(default)]
	pub status: Option<String>,
	/// Account creation time.
	#[serde(default, with = "crate::model::fmt::opt_datetime")]
	pub created_at: Option<PrimitiveDateTime>,
}

/// Account created by an administrator.
#[derive(Clone, Serialize)]
pub struct NewUser {
	/// Display name.
	pub name: String,
	/// Email address.
	pub email: String,
	/// Phone number.
	pub phone: String,
	/// Initial password.
	pub password: String,
	/// Initial role.
	pub role: Role,
}
impl Debug for NewUser {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("NewUser")
			.field("name", &self.name)
			.field("email", &self.email)
			.field("phone", &self.phone)
			.field("password", &"<redacted>")
			.field("role", &self.role)
			.finish()
	}
}

#[derive(Serialize)]
pub(crate) struct RoleChange {
	pub(crate) role: Role,
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn roles_accept_both_spellings() {
		let roles: Vec<Role> = serde_json::from_str(r#"["ROLE_ADMIN","STAFF","ROLE_CUSTOMER"]"#)
			.expect("Role labels should decode.");

		assert_eq!(roles, vec![Role::Admin, Role::Staff, Role::Customer]);
		assert_eq!(serde_json::to_string(&Role::Staff).expect("Role should encode."), "\"ROLE_STAFF\"");
		assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
		assert_eq!("role_customer".parse::<Role>(), Ok(Role::Customer));
		assert_eq!("ROLE_USER".parse::<Role>(), Ok(Role::Customer));
		assert_eq!("ROLE_OWNER".parse::<Role>(), Ok(Role::Other("ROLE_OWNER".into())));
		assert!(" ".parse::<Role>().is_err());
	}

	#[test]
	fn unknown_roles_survive_a_round_trip() {
		let roles: Vec<Role> =
			serde_json::from_str(r#"["role_admin"," ROLE_USER ","ROLE_MANAGER"]"#)
				.expect("Any non-empty role label should decode.");

		assert_eq!(roles, vec![Role::Admin, Role::Customer, Role::Other("ROLE_MANAGER".into())]);
		assert_eq!(
			serde_json::to_string(&roles).expect("Roles should encode."),
			r#"["ROLE_ADMIN","ROLE_CUSTOMER","ROLE_MANAGER"]"#
		);
		assert!(serde_json::from_str::<Role>(r#""""#).is_err());
	}

	#[test]
	fn user_listing_decodes() {
		let user: User = serde_json::from_str(
			r#"{"id":"9","name":"Hoa Le","email":"hoa@example.com","phone":"0901234567","role":"ROLE_STAFF","status":"active","createdAt":"2025-02-10T08:00:00.5"}"#,
		)
		.expect("User should decode.");

		assert_eq!(user.id, Some(9));
		assert_eq!(user.role, Some(Role::Staff));
		assert!(user.created_at.is_some());

		let new_user = NewUser {
			name: "Hoa Le".into(),
			email: "hoa@example.com".into(),
			phone: "0901234567".into(),
			password: "s3cret!".into(),
			role: Role::Staff,
		};

		assert!(!format!("{new_user:?}").contains("s3cret!"));
	}
}
