//! End-to-end tests starting a live HTTP server

use brewery_monitor::mocks::MockTelemetryApi;
use brewery_monitor::serde_json::{json, Value};
use brewery_monitor::MonitorBuilder;
use reqwest::Client;

mod mocks;
use mocks::fixtures;
use mocks::TestServer;

#[tokio::test]
async fn test_health_endpoint() {
	let server = TestServer::spawn().await.expect("Failed to start server");

	let response = reqwest::get(&format!("{}/health", server.base_url))
		.await
		.expect("Failed to get health endpoint");

	assert_eq!(response.status(), 200);
	assert_eq!(response.text().await.unwrap(), "OK");

	server.handle.abort();
}

#[tokio::test]
async fn test_ready_endpoint_degrades_without_upstream() {
	let server = TestServer::spawn_with_api(MockTelemetryApi::new().with_failing_live_data())
		.await
		.expect("Failed to start server");

	let response = reqwest::get(&format!("{}/ready", server.base_url))
		.await
		.expect("Failed to get ready endpoint");

	assert_eq!(response.status(), 503);
	let json: Value = response.json().await.expect("Failed to parse JSON");
	assert_eq!(json["status"], "degraded");
	assert_eq!(json["upstream_healthy"], false);
	assert_eq!(json["cauldrons"], 3);

	server.handle.abort();
}

#[tokio::test]
async fn test_levels_equivalent_across_payload_shapes() {
	for (shape, payload) in fixtures::equivalent_payloads() {
		let server =
			TestServer::spawn_with_api(MockTelemetryApi::new().with_live_payload(payload))
				.await
				.expect("Failed to start server");

		let response = reqwest::get(&format!("{}/assets/levels", server.base_url))
			.await
			.expect("Failed to get levels endpoint");
		assert_eq!(response.status(), 200, "shape {shape}");

		let merged: Vec<Value> = response.json().await.expect("Failed to parse JSON");
		assert_eq!(merged.len(), 3, "shape {shape}");
		assert_eq!(merged[0]["id"], "cauldron_001");
		assert_eq!(merged[0]["current_level"], 750.5, "shape {shape}");
		// Cauldrons absent from the payload default to level zero.
		assert_eq!(merged[1]["current_level"], 0.0, "shape {shape}");
		assert_eq!(merged[1]["overflow"], false, "shape {shape}");

		server.handle.abort();
	}
}

#[tokio::test]
async fn test_levels_time_series_takes_latest_sample() {
	// Default mock payload carries two samples; the later one must win.
	let server = TestServer::spawn().await.expect("Failed to start server");

	let response = reqwest::get(&format!("{}/assets/levels", server.base_url))
		.await
		.expect("Failed to get levels endpoint");
	let merged: Vec<Value> = response.json().await.expect("Failed to parse JSON");

	assert_eq!(merged[0]["current_level"], 750.5);
	assert_eq!(merged[1]["current_level"], 80.0);
	assert_eq!(merged[2]["current_level"], 20.0);

	server.handle.abort();
}

#[tokio::test]
async fn test_levels_unrecognized_payload_is_format_error() {
	let server = TestServer::spawn_with_api(MockTelemetryApi::new().with_live_payload(json!(42)))
		.await
		.expect("Failed to start server");

	let response = reqwest::get(&format!("{}/assets/levels", server.base_url))
		.await
		.expect("Failed to get levels endpoint");

	assert_eq!(response.status(), 500);
	let json: Value = response.json().await.expect("Failed to parse JSON");
	assert_eq!(json["error"], "FORMAT_ERROR");

	server.handle.abort();
}

#[tokio::test]
async fn test_levels_upstream_outage_is_bad_gateway() {
	let server = TestServer::spawn_with_api(MockTelemetryApi::new().with_failing_live_data())
		.await
		.expect("Failed to start server");

	let response = reqwest::get(&format!("{}/assets/levels", server.base_url))
		.await
		.expect("Failed to get levels endpoint");

	assert_eq!(response.status(), 502);
	let json: Value = response.json().await.expect("Failed to parse JSON");
	assert_eq!(json["error"], "UPSTREAM_ERROR");

	server.handle.abort();
}

#[tokio::test]
async fn test_status_endpoint_percent_and_time_to_full() {
	let server = TestServer::spawn_with_api(
		MockTelemetryApi::new().with_live_payload(fixtures::half_and_full_levels()),
	)
	.await
	.expect("Failed to start server");

	let response = reqwest::get(&format!("{}/assets/status", server.base_url))
		.await
		.expect("Failed to get status endpoint");
	assert_eq!(response.status(), 200);

	let report: Vec<Value> = response.json().await.expect("Failed to parse JSON");
	// cauldron_001: 500/1000 full, filling at 1.0 L/min.
	assert_eq!(report[0]["percent_full"], 50.0);
	assert_eq!(report[0]["time_to_full_min"], 500.0);
	// cauldron_002 is exactly at capacity: overflow, no forecast.
	assert_eq!(report[1]["percent_full"], 100.0);
	assert_eq!(report[1]["time_to_full_min"], Value::Null);
	assert_eq!(report[1]["overflow"], true);

	server.handle.abort();
}

#[tokio::test]
async fn test_forecast_endpoint_omits_full_cauldrons() {
	let server = TestServer::spawn_with_api(
		MockTelemetryApi::new().with_live_payload(fixtures::half_and_full_levels()),
	)
	.await
	.expect("Failed to start server");

	let response = reqwest::get(&format!("{}/logistics/forecast", server.base_url))
		.await
		.expect("Failed to get forecast endpoint");
	assert_eq!(response.status(), 200);

	let forecasts: Vec<Value> = response.json().await.expect("Failed to parse JSON");
	let ids: Vec<&str> = forecasts
		.iter()
		.map(|f| f["cauldron_id"].as_str().unwrap())
		.collect();

	// cauldron_002 is full and must not appear, not even as zero.
	assert!(!ids.contains(&"cauldron_002"));
	assert_eq!(ids, ["cauldron_001", "cauldron_003"]);

	// (1000 - 500) / 1.0 and (750 - 0) / 1.0 minutes.
	assert_eq!(forecasts[0]["time_to_full_min"], 500.0);
	assert_eq!(forecasts[1]["time_to_full_min"], 750.0);

	server.handle.abort();
}

#[tokio::test]
async fn test_dispatch_known_cauldron() {
	let server = TestServer::spawn().await.expect("Failed to start server");

	let client = Client::new();
	let response = client
		.post(format!("{}/logistics/dispatch", server.base_url))
		.json(&json!({"cauldron_id": "cauldron_001"}))
		.send()
		.await
		.expect("Failed to post dispatch");

	assert_eq!(response.status(), 200);
	let json: Value = response.json().await.expect("Failed to parse JSON");
	assert_eq!(json["status"], "success");
	assert_eq!(
		json["message"],
		"Courier dispatched to Azure Vat. (Simulation)"
	);

	server.handle.abort();
}

#[tokio::test]
async fn test_dispatch_unknown_cauldron_is_client_error() {
	let server = TestServer::spawn().await.expect("Failed to start server");

	let client = Client::new();
	let response = client
		.post(format!("{}/logistics/dispatch", server.base_url))
		.json(&json!({"cauldron_id": "cauldron_999"}))
		.send()
		.await
		.expect("Failed to post dispatch");

	assert_eq!(response.status(), 400);
	let json: Value = response.json().await.expect("Failed to parse JSON");
	assert_eq!(json["error"], "UNKNOWN_CAULDRON");

	server.handle.abort();
}

#[tokio::test]
async fn test_discrepancies_all_clear() {
	let server = TestServer::spawn().await.expect("Failed to start server");

	let response = reqwest::get(&format!("{}/tickets/discrepancies", server.base_url))
		.await
		.expect("Failed to get discrepancies endpoint");
	assert_eq!(response.status(), 200);

	let alerts: Vec<Value> = response.json().await.expect("Failed to parse JSON");
	assert_eq!(alerts.len(), 1);
	assert_eq!(alerts[0]["message"], "All tickets reconciled.");
	assert!(alerts[0].get("cauldron_id").is_none());

	server.handle.abort();
}

#[tokio::test]
async fn test_discrepancies_flags_overclaiming_ticket() {
	let api = MockTelemetryApi::new()
		.with_history_payload(fixtures::drain_history())
		.with_tickets(vec![fixtures::overclaiming_ticket()]);
	let server = TestServer::spawn_with_api(api)
		.await
		.expect("Failed to start server");

	let response = reqwest::get(&format!("{}/tickets/discrepancies", server.base_url))
		.await
		.expect("Failed to get discrepancies endpoint");

	let alerts: Vec<Value> = response.json().await.expect("Failed to parse JSON");
	assert_eq!(alerts.len(), 1);
	assert_eq!(alerts[0]["cauldron_id"], "cauldron_001");
	let message = alerts[0]["message"].as_str().unwrap();
	assert!(message.contains("Suspicious ticket ticket_042"));
	assert!(message.contains("630.0L"));
	assert!(message.contains("999.0L"));

	server.handle.abort();
}

#[tokio::test]
async fn test_discrepancies_quiet_for_matching_ticket() {
	let api = MockTelemetryApi::new()
		.with_history_payload(fixtures::drain_history())
		.with_tickets(vec![fixtures::matching_ticket()]);
	let server = TestServer::spawn_with_api(api)
		.await
		.expect("Failed to start server");

	let response = reqwest::get(&format!("{}/tickets/discrepancies", server.base_url))
		.await
		.expect("Failed to get discrepancies endpoint");

	let alerts: Vec<Value> = response.json().await.expect("Failed to parse JSON");
	assert_eq!(alerts[0]["message"], "All tickets reconciled.");

	server.handle.abort();
}

#[tokio::test]
async fn test_discrepancies_flags_unlogged_drain() {
	let api = MockTelemetryApi::new().with_history_payload(fixtures::drain_history());
	let server = TestServer::spawn_with_api(api)
		.await
		.expect("Failed to start server");

	let response = reqwest::get(&format!("{}/tickets/discrepancies", server.base_url))
		.await
		.expect("Failed to get discrepancies endpoint");

	let alerts: Vec<Value> = response.json().await.expect("Failed to parse JSON");
	assert_eq!(alerts.len(), 1);
	assert!(alerts[0]["message"]
		.as_str()
		.unwrap()
		.contains("Unlogged drain of 630.0L"));

	server.handle.abort();
}

#[tokio::test]
async fn test_startup_aborts_when_catalog_load_fails() {
	use brewery_monitor::mocks::mock_rate_source;
	use std::sync::Arc;

	let api = MockTelemetryApi::new().with_failing_reference_data();
	let result = MonitorBuilder::new()
		.with_telemetry_api(Arc::new(api))
		.with_rate_source(Box::new(mock_rate_source()))
		.start()
		.await;

	assert!(result.is_err(), "partial catalogs must not serve");
}
