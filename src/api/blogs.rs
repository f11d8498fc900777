//! Blog operations.

// crates.io
use serde::de::IgnoredAny;
// self
use crate::{
	_prelude::*,
	api::{ApiClient, RequestOptions},
	config::endpoints::blogs,
	model::{BlogCategory, BlogPost},
};

impl ApiClient {
	/// Lists published posts, optionally restricted to `category_id`.
	pub async fn blogs(&self, category_id: Option<i64>) -> Result<Vec<BlogPost>> {
		let path = match category_id {
			Some(id) => format!("{}?categoryId={id}", blogs::ALL),
			None => blogs::ALL.to_owned(),
		};

		self.get_with(&path, RequestOptions::public()).await
	}

	/// Lists posts promoted on the landing page.
	pub async fn featured_blogs(&self) -> Result<Vec<BlogPost>> {
		self.get_with(blogs::FEATURED, RequestOptions::public()).await
	}

	/// Fetches one post.
	pub async fn blog(&self, id: i64) -> Result<BlogPost> {
		self.get_with(&blogs::by_id(id), RequestOptions::public()).await
	}

	/// Lists public blog categories.
	pub async fn blog_categories(&self) -> Result<Vec<BlogCategory>> {
		self.get_with(blogs::CATEGORIES, RequestOptions::public()).await
	}

	/// Lists every post, including drafts.
	pub async fn admin_blogs(&self) -> Result<Vec<BlogPost>> {
		self.get(blogs::ADMIN).await
	}

	/// Creates a post.
	pub async fn create_blog(&self, post: &BlogPost) -> Result<BlogPost> {
		self.post(blogs::ADMIN, post).await
	}

	/// Replaces post `id`.
	pub async fn update_blog(&self, id: i64, post: &BlogPost) -> Result<BlogPost> {
		self.put(&blogs::admin_by_id(id), post).await
	}

	/// Deletes post `id`.
	pub async fn delete_blog(&self, id: i64) -> Result<()> {
		let _: IgnoredAny = self.delete(&blogs::admin_by_id(id)).await?;

		Ok(())
	}

	/// Lists blog categories with post counts.
	pub async fn admin_blog_categories(&self) -> Result<Vec<BlogCategory>> {
		self.get(blogs::ADMIN_CATEGORIES).await
	}

	/// Creates a blog category.
	pub async fn create_blog_category(&self, category: &BlogCategory) -> Result<BlogCategory> {
		self.post(blogs::ADMIN_CATEGORIES, category).await
	}

	/// Replaces blog category `id`.
	pub async fn update_blog_category(
		&self,
		id: i64,
		category: &BlogCategory,
	) -> Result<BlogCategory> {
		self.put(&blogs::admin_category(id), category).await
	}

	/// Deletes blog category `id`.
	pub async fn delete_blog_category(&self, id: i64) -> Result<()> {
		let _: IgnoredAny = self.delete(&blogs::admin_category(id)).await?;

		Ok(())
	}
}
