//! Walks a customer through sign-in, browsing the catalogue, and booking a visit against a mock
//! API server, using the default reqwest transport and an in-memory session store.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
// self
use spa_booking_client::{
	api::{ApiClient, TracingEvents},
	booking::{BookingForm, TIME_SLOTS},
	config::ApiConfig,
	store::{MemoryStore, SessionStore},
	time::{Duration, OffsetDateTime},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let login_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/auth/login");
			then.status(200).header("content-type", "application/json").body(
				// Header and payload decode to `{"exp":4102444800}` (year 2100).
				r#"{"token":"eyJhbGciOiJIUzI1NiJ9.eyJleHAiOjQxMDI0NDQ4MDB9.demo","refreshToken":"demo-refresh","username":"linh","email":"linh@example.com","fullName":"Linh Tran","role":"ROLE_CUSTOMER"}"#,
			);
		})
		.await;
	let services_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/services/featured");
			then.status(200)
				.header("content-type", "application/json")
				.body(r#"[{"id":2,"name":"Hot stone massage","price":450000,"duration":90}]"#);
		})
		.await;
	let booking_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/bookings").header_exists("authorization");
			then.status(201)
				.header("content-type", "application/json")
				.body(r#"{"id":101,"service":"Hot stone massage","status":"PENDING"}"#);
		})
		.await;
	let config = ApiConfig::builder().base_url_str(&server.url("/api"))?.build()?;
	let store: Arc<dyn SessionStore> = Arc::new(MemoryStore::default());
	let client = ApiClient::new(config, store)?.with_events(Arc::new(TracingEvents));
	let user = client.auth().login("linh", "demo-password").await?;
	let featured = client.featured_services().await?;

	println!("Signed in as {}.", user.full_name.as_deref().unwrap_or("guest"));

	for service in &featured {
		println!("Featured: {} ({} VND).", service.name, service.price.unwrap_or_default());
	}

	let mut form = BookingForm::prefilled(&user);

	form.service_ids = featured.iter().filter_map(|service| service.id).collect();
	form.specialist_id = Some(4);
	form.date = Some((OffsetDateTime::now_utc() + Duration::days(2)).date());
	form.time = Some(TIME_SLOTS[0].to_owned());
	form.customer_phone = "0912345678".into();

	let booking = client.submit_booking(&form).await?;

	println!("Booking {:?} is {:?}.", booking.id, booking.status);

	login_mock.assert_async().await;
	services_mock.assert_async().await;
	booking_mock.assert_async().await;

	Ok(())
}
