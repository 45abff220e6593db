//! Test server for integration tests
//!
//! Boots the full router against the mock telemetry API with deterministic
//! rates, bound to an ephemeral local port.

use axum::Router;
use brewery_monitor::mocks::{mock_rate_source, MockTelemetryApi};
use brewery_monitor::{api::routes::create_router, MonitorBuilder};
use std::sync::Arc;
use tokio::task::JoinHandle;

/// Live test server instance
pub struct TestServer {
	pub base_url: String,
	pub handle: JoinHandle<()>,
}

impl TestServer {
	/// Spawn a test server with the default mock payloads
	#[allow(dead_code)]
	pub async fn spawn() -> Result<Self, Box<dyn std::error::Error>> {
		Self::spawn_with_api(MockTelemetryApi::new()).await
	}

	/// Spawn a test server around a configured mock API
	pub async fn spawn_with_api(api: MockTelemetryApi) -> Result<Self, Box<dyn std::error::Error>> {
		let (_router, state) = MonitorBuilder::new()
			.with_telemetry_api(Arc::new(api))
			.with_rate_source(Box::new(mock_rate_source()))
			.start()
			.await?;

		let app: Router = create_router().with_state(state);

		let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
		let addr = listener.local_addr()?;
		let base_url = format!("http://{}:{}", addr.ip(), addr.port());

		let handle = tokio::spawn(async move {
			// Ignore serve errors when a test aborts the task
			let _ = axum::serve(listener, app).await;
		});

		// Give the server time to start
		tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

		Ok(Self { base_url, handle })
	}
}
