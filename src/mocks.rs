//! Mock telemetry API for examples and testing
//!
//! This module provides a simple, configurable stand-in for the external
//! telemetry service so examples and tests run without network access.

use async_trait::async_trait;
use brewery_types::serde_json::{json, Value};
use brewery_types::{
	CauldronRates, CauldronRecord, Courier, TelemetryApi, TelemetryError, TelemetryResult, Ticket,
};

use brewery_service::FixedRates;

/// Configurable in-memory [`TelemetryApi`] double.
///
/// Defaults to three cauldrons with a time-series live payload; payloads
/// can be swapped per test to exercise the other recognized shapes or the
/// failure paths.
#[derive(Debug, Clone)]
pub struct MockTelemetryApi {
	pub live_payload: Value,
	pub history_payload: Value,
	pub tickets: Vec<Ticket>,
	pub fail_reference: bool,
	pub fail_live: bool,
}

impl MockTelemetryApi {
	pub fn new() -> Self {
		Self {
			live_payload: json!([
				{
					"timestamp": "2025-11-02T10:00:00Z",
					"cauldron_levels": {"cauldron_001": 100.0, "cauldron_002": 50.0}
				},
				{
					"timestamp": "2025-11-02T11:00:00Z",
					"cauldron_levels": {"cauldron_001": 750.5, "cauldron_002": 80.0, "cauldron_003": 20.0}
				}
			]),
			history_payload: json!([]),
			tickets: vec![],
			fail_reference: false,
			fail_live: false,
		}
	}

	/// Replace the live-data payload.
	pub fn with_live_payload(mut self, payload: Value) -> Self {
		self.live_payload = payload;
		self
	}

	/// Replace the drain-history payload.
	pub fn with_history_payload(mut self, payload: Value) -> Self {
		self.history_payload = payload;
		self
	}

	/// Replace the logged tickets.
	pub fn with_tickets(mut self, tickets: Vec<Ticket>) -> Self {
		self.tickets = tickets;
		self
	}

	/// Make the live-data endpoint fail with an upstream outage.
	pub fn with_failing_live_data(mut self) -> Self {
		self.fail_live = true;
		self
	}

	/// Make the reference endpoints fail, breaking catalog load.
	pub fn with_failing_reference_data(mut self) -> Self {
		self.fail_reference = true;
		self
	}

	fn outage(&self) -> TelemetryError {
		TelemetryError::HttpStatus {
			status: 503,
			reason: "mock outage".to_string(),
		}
	}
}

impl Default for MockTelemetryApi {
	fn default() -> Self {
		Self::new()
	}
}

#[async_trait]
impl TelemetryApi for MockTelemetryApi {
	async fn cauldrons(&self) -> TelemetryResult<Vec<CauldronRecord>> {
		if self.fail_reference {
			return Err(self.outage());
		}
		Ok(vec![
			CauldronRecord {
				id: "cauldron_001".to_string(),
				name: Some("Azure Vat".to_string()),
				max_volume: 1000.0,
			},
			CauldronRecord {
				id: "cauldron_002".to_string(),
				name: Some("Crimson Kettle".to_string()),
				max_volume: 500.0,
			},
			CauldronRecord {
				id: "cauldron_003".to_string(),
				name: Some("Verdant Still".to_string()),
				max_volume: 750.0,
			},
		])
	}

	async fn network(&self) -> TelemetryResult<Value> {
		if self.fail_reference {
			return Err(self.outage());
		}
		Ok(json!([
			{"from": "market", "to": "cauldron_001", "distance": 4},
			{"from": "market", "to": "cauldron_002", "distance": 7},
			{"from": "cauldron_001", "to": "cauldron_003", "distance": 2}
		]))
	}

	async fn market(&self) -> TelemetryResult<Value> {
		if self.fail_reference {
			return Err(self.outage());
		}
		Ok(json!({"name": "Night Market", "unload_time_min": 15}))
	}

	async fn couriers(&self) -> TelemetryResult<Vec<Courier>> {
		if self.fail_reference {
			return Err(self.outage());
		}
		Ok(vec![
			Courier {
				id: "courier_001".to_string(),
				name: Some("Wren".to_string()),
				capacity: Some(250.0),
			},
			Courier {
				id: "courier_002".to_string(),
				name: Some("Sable".to_string()),
				capacity: Some(300.0),
			},
		])
	}

	async fn live_data(&self) -> TelemetryResult<Value> {
		if self.fail_live {
			return Err(self.outage());
		}
		Ok(self.live_payload.clone())
	}

	async fn history(&self) -> TelemetryResult<Value> {
		Ok(self.history_payload.clone())
	}

	async fn tickets(&self) -> TelemetryResult<Vec<Ticket>> {
		Ok(self.tickets.clone())
	}
}

/// Deterministic rate source matching the mock catalog: 1.0 L/min fill,
/// 12.0 L/min drain for every cauldron.
pub fn mock_rate_source() -> FixedRates {
	FixedRates(CauldronRates {
		fill_rate_per_min: 1.0,
		drain_rate_per_min: 12.0,
	})
}
