// crates.io
use httpmock::prelude::*;
use time::macros::date;
// self
use spa_booking_client::{
	_preludet::*,
	booking::{BookingForm, BookingIssue},
	model::{BookingFilter, BookingStatus, Role, TransactionFilter, TransactionStatus},
	reports::ReportPeriod,
};

async fn signed_in(server: &MockServer) -> (spa_booking_client::api::ApiClient, String) {
	let (client, store) = build_test_client(&server.base_url());
	let token = mint_jwt("admin", Duration::hours(1));

	seed_session(&store, &token, "refresh-admin").await;

	(client, format!("Bearer {token}"))
}

#[tokio::test(flavor = "multi_thread")]
async fn deletes_accept_empty_responses() {
	let server = MockServer::start_async().await;
	let (client, bearer) = signed_in(&server).await;
	let no_content = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/admin/services/4").header("authorization", bearer.as_str());
			then.status(204);
		})
		.await;
	let with_body = server
		.mock_async(|when, then| {
			when.method(DELETE).path("/admin/blogs/9");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"message":"Blog deleted"}"#);
		})
		.await;

	client.delete_service(4).await.expect("204 delete should succeed.");
	client.delete_blog(9).await.expect("Delete with a JSON body should succeed.");

	no_content.assert_calls_async(1).await;
	with_body.assert_calls_async(1).await;
}

#[tokio::test(flavor = "multi_thread")]
async fn admin_booking_filters_become_query_parameters() {
	let server = MockServer::start_async().await;
	let (client, _) = signed_in(&server).await;
	let by_status = server
		.mock_async(|when, then| {
			when.method(GET).path("/admin/bookings").query_param("status", "CONFIRMED");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"[{"id":5,"customerName":"An","bookingDate":"2025-05-02","bookingTime":"10:30:00","status":"CONFIRMED"}]"#);
		})
		.await;
	let by_range = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/admin/bookings")
				.query_param("startDate", "2025-05-01")
				.query_param("endDate", "2025-05-31");
			then.status(200).header("content-type", "application/json").body("[]");
		})
		.await;
	let confirmed = client
		.admin_bookings(BookingFilter::Status(BookingStatus::Confirmed))
		.await
		.expect("Status filter should load.");

	assert_eq!(confirmed.len(), 1);
	assert_eq!(confirmed[0].customer.as_deref(), Some("An"));
	assert_eq!(confirmed[0].booking_date, Some(date!(2025 - 05 - 02)));
	assert_eq!(confirmed[0].status, Some(BookingStatus::Confirmed));

	let in_may = client
		.admin_bookings(BookingFilter::DateRange {
			start: date!(2025 - 05 - 01),
			end: date!(2025 - 05 - 31),
		})
		.await
		.expect("Date filter should load.");

	assert!(in_may.is_empty());

	by_status.assert_calls_async(1).await;
	by_range.assert_calls_async(1).await;
}

#[tokio::test(flavor = "multi_thread")]
async fn status_changes_use_the_server_verbs() {
	let server = MockServer::start_async().await;
	let (client, _) = signed_in(&server).await;
	let booking_status = server
		.mock_async(|when, then| {
			when.method(PATCH)
				.path("/admin/bookings/5/status")
				.json_body(serde_json::json!({ "status": "COMPLETED" }));
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"id":5,"status":"COMPLETED"}"#);
		})
		.await;
	let transaction_status = server
		.mock_async(|when, then| {
			when.method(PUT).path("/admin/transactions/3/status").query_param("status", "REFUNDED");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"id":3,"amount":450000,"status":"REFUNDED"}"#);
		})
		.await;
	let role = server
		.mock_async(|when, then| {
			when.method(PATCH)
				.path("/admin/users/8/role")
				.json_body(serde_json::json!({ "role": "ROLE_STAFF" }));
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"id":8,"username":"binh","role":"STAFF"}"#);
		})
		.await;
	let booking = client
		.update_booking_status(5, BookingStatus::Completed)
		.await
		.expect("Booking status change should succeed.");

	assert_eq!(booking.status, Some(BookingStatus::Completed));

	let transaction = client
		.update_transaction_status(3, TransactionStatus::Refunded)
		.await
		.expect("Transaction status change should succeed.");

	assert_eq!(transaction.status, Some(TransactionStatus::Refunded));
	assert_eq!(transaction.amount, Some(450_000.0));

	let user = client.change_user_role(8, Role::Staff).await.expect("Role change should succeed.");

	assert_eq!(user.role, Some(Role::Staff));

	booking_status.assert_calls_async(1).await;
	transaction_status.assert_calls_async(1).await;
	role.assert_calls_async(1).await;
}

#[tokio::test(flavor = "multi_thread")]
async fn admin_users_keep_unfamiliar_roles() {
	let server = MockServer::start_async().await;
	let (client, bearer) = signed_in(&server).await;
	let users = server
		.mock_async(|when, then| {
			when.method(GET).path("/admin/users").header("authorization", bearer.as_str());
			then.status(200).header("content-type", "application/json").body(
				r#"[{"id":1,"username":"mai","role":"ROLE_ADMIN"},{"id":2,"username":"hoa","role":"ROLE_USER"},{"id":3,"username":"an","role":"ROLE_MANAGER","status":"active"}]"#,
			);
		})
		.await;
	let listed = client.admin_users().await.expect("Users with any role label should decode.");

	users.assert_calls_async(1).await;

	assert_eq!(
		listed.iter().map(|user| user.role.clone()).collect::<Vec<_>>(),
		[Some(Role::Admin), Some(Role::Customer), Some(Role::Other("ROLE_MANAGER".into()))]
	);
	assert_eq!(listed[2].status.as_deref(), Some("active"));
}

#[tokio::test(flavor = "multi_thread")]
async fn transaction_filters_combine() {
	let server = MockServer::start_async().await;
	let (client, _) = signed_in(&server).await;
	let filtered = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/admin/transactions")
				.query_param("status", "COMPLETED")
				.query_param("startDate", "2025-02-01")
				.query_param("endDate", "2025-02-28");
			then.status(200).header("content-type", "application/json").body("[]");
		})
		.await;
	let transactions = client
		.admin_transactions(
			TransactionFilter::default()
				.status(TransactionStatus::Completed)
				.between(date!(2025 - 02 - 01), date!(2025 - 02 - 28)),
		)
		.await
		.expect("Filtered transactions should load.");

	assert!(transactions.is_empty());

	filtered.assert_calls_async(1).await;
}

#[tokio::test(flavor = "multi_thread")]
async fn reports_request_the_period_window() {
	let server = MockServer::start_async().await;
	let (client, _) = signed_in(&server).await;
	let range = ReportPeriod::Quarter.range();
	let start = range.start.to_string();
	let end = range.end.to_string();
	let report = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/admin/reports")
				.query_param("period", "quarter")
				.query_param("startDate", start.as_str())
				.query_param("endDate", end.as_str());
			then.status(200).header("content-type", "application/json").body(
				r#"{"period":"quarter","totalRevenue":12500000,"totalBookings":40,"completedBookings":31,"cancelledBookings":4,"completionRate":77.5,"dailyRevenue":[{"date":"2025-01-02","revenue":350000}]}"#,
			);
		})
		.await;
	let revenue = server
		.mock_async(|when, then| {
			when.method(GET)
				.path("/admin/reports/revenue")
				.query_param("startDate", start.as_str())
				.query_param("endDate", end.as_str());
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"{"totalRevenue":12500000}"#);
		})
		.await;
	let quarter = client.report(ReportPeriod::Quarter).await.expect("Report should load.");

	assert_eq!(quarter.total_bookings, 40);
	assert_eq!(quarter.completed_bookings, 31);
	assert_eq!(quarter.daily_revenue.len(), 1);
	assert!(quarter.revenue_by_service.is_empty());

	let totals =
		client.revenue_report(ReportPeriod::Quarter).await.expect("Revenue report should load.");

	assert_eq!(totals.total_revenue, 12_500_000.0);

	report.assert_calls_async(1).await;
	revenue.assert_calls_async(1).await;
}

#[tokio::test(flavor = "multi_thread")]
async fn user_dashboard_gathers_three_listings() {
	let server = MockServer::start_async().await;
	let (client, _) = signed_in(&server).await;

	server
		.mock_async(|when, then| {
			when.method(GET).path("/bookings/user/upcoming");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"[{"id":1,"status":"PENDING"},{"id":2,"status":"CONFIRMED"}]"#);
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/bookings/user/past");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"[{"id":0,"status":"COMPLETED"}]"#);
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/services/recommended");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"[{"id":7,"name":"Aroma therapy"}]"#);
		})
		.await;

	let dashboard = client.user_dashboard().await.expect("Dashboard should load.");

	assert_eq!(dashboard.upcoming.len(), 2);
	assert_eq!(dashboard.past.len(), 1);
	assert_eq!(dashboard.recommended[0].name, "Aroma therapy");
}

#[tokio::test(flavor = "multi_thread")]
async fn user_dashboard_fails_when_any_listing_fails() {
	let server = MockServer::start_async().await;
	let (client, _) = signed_in(&server).await;

	server
		.mock_async(|when, then| {
			when.method(GET).path_includes("/bookings/user/");
			then.status(200).header("content-type", "application/json").body("[]");
		})
		.await;
	server
		.mock_async(|when, then| {
			when.method(GET).path("/services/recommended");
			then.status(503);
		})
		.await;

	let err = client.user_dashboard().await.expect_err("A failed listing fails the dashboard.");

	assert_eq!(err.status(), Some(503));
}

#[tokio::test(flavor = "multi_thread")]
async fn invalid_booking_form_never_reaches_the_server() {
	let server = MockServer::start_async().await;
	let (client, _) = signed_in(&server).await;
	let create = server
		.mock_async(|when, then| {
			when.method(POST).path("/bookings");
			then.status(201);
		})
		.await;
	let form = BookingForm {
		service_ids: vec![2],
		specialist_id: Some(4),
		date: Some(date!(2020 - 01 - 01)),
		time: Some("10:00".into()),
		customer_name: "An".into(),
		customer_phone: "12345".into(),
		customer_email: "an@example.com".into(),
		notes: None,
	};
	let err = client.submit_booking(&form).await.expect_err("A past date must be rejected.");
	let Error::Validation(issues) = err else {
		panic!("Expected a validation error, got {err:?}.");
	};

	assert!(issues.contains(&BookingIssue::PastDate { date: date!(2020 - 01 - 01) }));
	assert!(issues.contains(&BookingIssue::InvalidPhone));

	create.assert_calls_async(0).await;
}

#[tokio::test(flavor = "multi_thread")]
async fn valid_booking_form_posts_the_first_service() {
	let server = MockServer::start_async().await;
	let (client, _) = signed_in(&server).await;
	let visit = (OffsetDateTime::now_utc() + Duration::days(3)).date();
	let create = server
		.mock_async(|when, then| {
			when.method(POST).path("/bookings").json_body(serde_json::json!({
				"serviceId": 2,
				"specialistId": 4,
				"bookingDate": visit.to_string(),
				"bookingTime": "14:00",
				"customerName": "An Pham",
				"customerPhone": "0912345678",
				"customerEmail": "an@example.com",
				"note": "Quiet room please",
			}));
			then.status(201)
				.header("content-type", "application/json")
				.body(r#"{"id":77,"status":"PENDING"}"#);
		})
		.await;
	let form = BookingForm {
		service_ids: vec![2, 3],
		specialist_id: Some(4),
		date: Some(visit),
		time: Some("14:00".into()),
		customer_name: "An Pham".into(),
		customer_phone: "0912345678".into(),
		customer_email: "an@example.com".into(),
		notes: Some("Quiet room please".into()),
	};
	let booking = client.submit_booking(&form).await.expect("Booking should be created.");

	assert_eq!(booking.id, Some(77));
	assert_eq!(booking.status, Some(BookingStatus::Pending));

	create.assert_calls_async(1).await;
}

#[tokio::test(flavor = "multi_thread")]
async fn guest_bookings_and_blog_filters_are_public() {
	let server = MockServer::start_async().await;
	let (client, _store) = build_test_client(&server.base_url());
	let blogs = server
		.mock_async(|when, then| {
			when.method(GET).path("/blogs").query_param("categoryId", "2").header_missing("authorization");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"[{"id":1,"title":"Skin care in winter","categoryId":2}]"#);
		})
		.await;
	let availability = server
		.mock_async(|when, then| {
			when.method(GET).path("/specialists/schedule/4").header_missing("authorization");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"["09:00","10:00"]"#);
		})
		.await;
	let posts = client.blogs(Some(2)).await.expect("Blog list should load signed out.");

	assert_eq!(posts.len(), 1);

	let slots = client.specialist_availability(4).await.expect("Availability should load.");

	assert_eq!(slots, vec!["09:00".to_owned(), "10:00".to_owned()]);

	blogs.assert_calls_async(1).await;
	availability.assert_calls_async(1).await;
}
