//! Blog posts and categories.

// crates.io
use time::PrimitiveDateTime;
// self
use crate::{_prelude::*, model::fmt};

/// Blog category.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogCategory {
	/// Identifier; empty on create.
	#[serde(default, skip_serializing_if = "Option::is_none", with = "fmt::opt_id")]
	pub id: Option<i64>,
	/// Display name.
	#[serde(default)]
	pub name: String,
	/// URL slug.
	#[serde(default)]
	pub slug: Option<String>,
	/// Description.
	#[serde(default)]
	pub description: Option<String>,
	/// Whether the category is listed publicly.
	#[serde(default, alias = "isActive")]
	pub active: Option<bool>,
	/// Number of posts (read only).
	#[serde(default, skip_serializing)]
	pub posts_count: Option<u32>,
}

/// Blog post.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
	/// Identifier; empty on create.
	#[serde(default, skip_serializing_if = "Option::is_none", with = "fmt::opt_id")]
	pub id: Option<i64>,
	/// Headline.
	#[serde(default)]
	pub title: String,
	/// URL slug.
	#[serde(default)]
	pub slug: Option<String>,
	/// Teaser shown in listings.
	#[serde(default)]
	pub excerpt: Option<String>,
	/// Body (HTML).
	#[serde(default)]
	pub content: Option<String>,
	/// Hero image URL.
	#[serde(default, alias = "image")]
	pub featured_image: Option<String>,
	/// Publication time.
	#[serde(default, with = "fmt::opt_datetime")]
	pub published_at: Option<PrimitiveDateTime>,
	/// Author display name.
	#[serde(default)]
	pub author: Option<String>,
	/// Whether the post is listed publicly.
	#[serde(default, alias = "isActive")]
	pub active: Option<bool>,
	/// Owning category.
	#[serde(default, with = "fmt::opt_id")]
	pub category_id: Option<i64>,
	/// Owning category name.
	#[serde(default)]
	pub category_name: Option<String>,
}
