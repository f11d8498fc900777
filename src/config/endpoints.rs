//! Endpoint catalogue, relative to [`ApiConfig::base_url`](super::ApiConfig::base_url).

/// Authentication endpoints.
pub mod auth {
	/// Username/password sign-in.
	pub const LOGIN: &str = "/auth/login";
	/// Customer self-registration.
	pub const REGISTER: &str = "/auth/register";
	/// Refresh-token exchange.
	pub const REFRESH: &str = "/auth/refresh";
	/// Current user profile.
	pub const ME: &str = "/auth/me";
}

/// Service catalogue endpoints.
pub mod services {
	/// Public service list.
	pub const ALL: &str = "/services";
	/// Services promoted on the landing page.
	pub const FEATURED: &str = "/services/featured";
	/// Services suggested to the signed-in customer.
	pub const RECOMMENDED: &str = "/services/recommended";
	/// Public category list.
	pub const CATEGORIES: &str = "/services/categories";
	/// Admin service list.
	pub const ADMIN: &str = "/admin/services";
	/// Admin category list.
	pub const ADMIN_CATEGORIES: &str = "/admin/services/categories";
	/// Most-booked services for the admin dashboard.
	pub const ADMIN_POPULAR: &str = "/admin/services/popular";

	/// Single public service.
	pub fn by_id(id: i64) -> String {
		format!("{ALL}/{id}")
	}

	/// Single public category.
	pub fn category(id: i64) -> String {
		format!("{CATEGORIES}/{id}")
	}

	/// Single admin service.
	pub fn admin_by_id(id: i64) -> String {
		format!("{ADMIN}/{id}")
	}

	/// Single admin category.
	pub fn admin_category(id: i64) -> String {
		format!("{ADMIN_CATEGORIES}/{id}")
	}
}

/// Specialist (staff) endpoints.
pub mod specialists {
	/// Public specialist list.
	pub const ALL: &str = "/specialists";
	/// Specialists promoted on the landing page.
	pub const FEATURED: &str = "/specialists/featured";
	/// Admin specialist list.
	pub const ADMIN: &str = "/admin/specialists";

	/// Single public specialist.
	pub fn by_id(id: i64) -> String {
		format!("{ALL}/{id}")
	}

	/// Availability labels for one specialist.
	pub fn availability(id: i64) -> String {
		format!("{ALL}/schedule/{id}")
	}

	/// Single admin specialist.
	pub fn admin_by_id(id: i64) -> String {
		format!("{ADMIN}/{id}")
	}

	/// Schedule slots managed by admins.
	pub fn admin_schedule(id: i64) -> String {
		format!("{ADMIN}/{id}/schedule")
	}

	/// One schedule slot.
	pub fn schedule_slot(slot_id: i64) -> String {
		format!("/admin/schedule/{slot_id}")
	}
}

/// Booking endpoints.
pub mod bookings {
	/// Signed-in user's bookings (GET) and booking creation (POST).
	pub const USER: &str = "/bookings";
	/// Guest booking creation.
	pub const GUEST: &str = "/bookings/guest";
	/// Upcoming bookings for the signed-in user.
	pub const UPCOMING: &str = "/bookings/user/upcoming";
	/// Past bookings for the signed-in user.
	pub const PAST: &str = "/bookings/user/past";
	/// Completed-booking history for the signed-in user.
	pub const HISTORY: &str = "/bookings/history";
	/// Admin booking list.
	pub const ADMIN: &str = "/admin/bookings";
	/// Latest bookings for the admin dashboard.
	pub const ADMIN_RECENT: &str = "/admin/bookings/recent";

	/// Customer-initiated cancellation.
	pub fn user_cancel(id: i64) -> String {
		format!("{USER}/{id}/cancel")
	}

	/// Post-visit rating.
	pub fn rate(id: i64) -> String {
		format!("{USER}/{id}/rate")
	}

	/// Post-visit free-text feedback.
	pub fn feedback(id: i64) -> String {
		format!("{USER}/{id}/feedback")
	}

	/// Single admin booking.
	pub fn admin_by_id(id: i64) -> String {
		format!("{ADMIN}/{id}")
	}

	/// Admin cancellation.
	pub fn cancel(id: i64) -> String {
		format!("{ADMIN}/{id}/cancel")
	}

	/// Admin status change.
	pub fn status(id: i64) -> String {
		format!("{ADMIN}/{id}/status")
	}
}

/// Blog endpoints.
pub mod blogs {
	/// Public post list.
	pub const ALL: &str = "/blogs";
	/// Posts promoted on the landing page.
	pub const FEATURED: &str = "/blogs/featured";
	/// Public category list.
	pub const CATEGORIES: &str = "/blogs/categories";
	/// Admin post list.
	pub const ADMIN: &str = "/admin/blogs";
	/// Admin category list.
	pub const ADMIN_CATEGORIES: &str = "/admin/blogs/categories";

	/// Single public post.
	pub fn by_id(id: i64) -> String {
		format!("{ALL}/{id}")
	}

	/// Single admin post.
	pub fn admin_by_id(id: i64) -> String {
		format!("{ADMIN}/{id}")
	}

	/// Single admin category.
	pub fn admin_category(id: i64) -> String {
		format!("{ADMIN_CATEGORIES}/{id}")
	}
}

/// Dashboard and transaction endpoints.
pub mod dashboard {
	/// Admin headline statistics.
	pub const ADMIN_STATS: &str = "/admin/dashboard/stats";
	/// Admin transaction list.
	pub const TRANSACTIONS: &str = "/admin/transactions";
	/// Signed-in user's transactions.
	pub const USER_TRANSACTIONS: &str = "/user/transactions";

	/// Single admin transaction.
	pub fn transaction(id: i64) -> String {
		format!("{TRANSACTIONS}/{id}")
	}

	/// Transaction status change.
	pub fn transaction_status(id: i64) -> String {
		format!("{TRANSACTIONS}/{id}/status")
	}
}

/// User administration endpoints.
pub mod users {
	/// Admin user list.
	pub const ADMIN: &str = "/admin/users";

	/// Single user.
	pub fn by_id(id: i64) -> String {
		format!("{ADMIN}/{id}")
	}

	/// Role change.
	pub fn role(id: i64) -> String {
		format!("{ADMIN}/{id}/role")
	}
}

/// Reporting endpoints.
pub mod reports {
	/// Combined period report.
	pub const ALL: &str = "/admin/reports";
	/// Revenue breakdown.
	pub const REVENUE: &str = "/admin/reports/revenue";
	/// Booking breakdown.
	pub const BOOKINGS: &str = "/admin/reports/bookings";
}
