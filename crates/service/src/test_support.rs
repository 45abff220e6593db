//! Shared stub telemetry API for unit tests

use async_trait::async_trait;
use brewery_types::{
	Catalog, CauldronRates, CauldronRecord, Cauldron, Courier, Market, TelemetryApi,
	TelemetryError, TelemetryResult, Ticket,
};
use serde_json::{json, Value};

/// In-memory [`TelemetryApi`] double with configurable payloads.
#[derive(Debug, Clone)]
pub struct StubApi {
	pub cauldron_records: Vec<CauldronRecord>,
	pub live: Value,
	pub history: Value,
	pub tickets: Vec<Ticket>,
	pub fail_reference: bool,
	pub fail_live: bool,
}

impl StubApi {
	pub fn with_two_cauldrons() -> Self {
		Self {
			cauldron_records: vec![
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
			],
			live: json!([]),
			history: json!([]),
			tickets: vec![],
			fail_reference: false,
			fail_live: false,
		}
	}
}

#[async_trait]
impl TelemetryApi for StubApi {
	async fn cauldrons(&self) -> TelemetryResult<Vec<CauldronRecord>> {
		if self.fail_reference {
			return Err(TelemetryError::HttpStatus {
				status: 503,
				reason: "stubbed outage".to_string(),
			});
		}
		Ok(self.cauldron_records.clone())
	}

	async fn network(&self) -> TelemetryResult<Value> {
		Ok(json!([{"from": "market", "to": "cauldron_001", "distance": 4}]))
	}

	async fn market(&self) -> TelemetryResult<Value> {
		Ok(json!({"name": "Night Market"}))
	}

	async fn couriers(&self) -> TelemetryResult<Vec<Courier>> {
		Ok(vec![Courier {
			id: "courier_001".to_string(),
			name: None,
			capacity: Some(250.0),
		}])
	}

	async fn live_data(&self) -> TelemetryResult<Value> {
		if self.fail_live {
			return Err(TelemetryError::HttpStatus {
				status: 502,
				reason: "stubbed outage".to_string(),
			});
		}
		Ok(self.live.clone())
	}

	async fn history(&self) -> TelemetryResult<Value> {
		Ok(self.history.clone())
	}

	async fn tickets(&self) -> TelemetryResult<Vec<Ticket>> {
		Ok(self.tickets.clone())
	}
}

/// Catalog with the same two cauldrons as [`StubApi::with_two_cauldrons`]
/// and fixed 1.0/12.0 rates.
pub fn fixture_catalog() -> Catalog {
	let rates = CauldronRates {
		fill_rate_per_min: 1.0,
		drain_rate_per_min: 12.0,
	};
	let cauldrons = vec![
		Cauldron {
			id: "cauldron_001".to_string(),
			name: "Azure Vat".to_string(),
			max_volume: 1000.0,
			fill_rate_per_min: rates.fill_rate_per_min,
			drain_rate_per_min: rates.drain_rate_per_min,
		},
		Cauldron {
			id: "cauldron_002".to_string(),
			name: "Crimson Kettle".to_string(),
			max_volume: 500.0,
			fill_rate_per_min: rates.fill_rate_per_min,
			drain_rate_per_min: rates.drain_rate_per_min,
		},
	];
	Catalog::new(
		cauldrons,
		json!([{"from": "market", "to": "cauldron_001"}]),
		Market(json!({"name": "Night Market"})),
		vec![Courier {
			id: "courier_001".to_string(),
			name: None,
			capacity: Some(250.0),
		}],
	)
	.unwrap()
}
