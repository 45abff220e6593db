//! Shared payload fixtures for the integration tests
//!
//! The mock catalog has three cauldrons (1000/500/750 max volume) with
//! fixed 1.0 L/min fill and 12.0 L/min drain rates.

use brewery_monitor::serde_json::{json, Value};
use brewery_monitor::Ticket;

/// The same single-cauldron data expressed in each recognized live-payload
/// shape: cauldron_001 at 750.5.
#[allow(dead_code)]
pub fn equivalent_payloads() -> Vec<(&'static str, Value)> {
	vec![
		(
			"time-series",
			json!([{"timestamp": "2025-11-02T11:00:00Z", "cauldron_levels": {"cauldron_001": 750.5}}]),
		),
		(
			"flat-list",
			json!([{"cauldronId": "cauldron_001", "currentVolume": 750.5}]),
		),
		(
			"wrapped",
			json!({"data": [{"cauldronId": "cauldron_001", "currentVolume": 750.5}]}),
		),
		(
			"single-record",
			json!({"cauldronId": "cauldron_001", "currentVolume": 750.5}),
		),
	]
}

/// Flat list with cauldron_001 half full and cauldron_002 exactly at
/// capacity; cauldron_003 is absent.
#[allow(dead_code)]
pub fn half_and_full_levels() -> Value {
	json!([
		{"cauldronId": "cauldron_001", "currentVolume": 500.0},
		{"cauldronId": "cauldron_002", "currentVolume": 500.0}
	])
}

/// One 30-minute drain of cauldron_001 from 800 to 200. With the fixed
/// 1.0 L/min fill rate its true drained volume is 630 L.
#[allow(dead_code)]
pub fn drain_history() -> Value {
	json!([{
		"cauldronId": "cauldron_001",
		"start": "2025-11-02T13:00:00Z",
		"end": "2025-11-02T13:30:00Z",
		"startLevel": 800.0,
		"endLevel": 200.0
	}])
}

/// A ticket overclaiming against [`drain_history`].
#[allow(dead_code)]
pub fn overclaiming_ticket() -> Ticket {
	Ticket {
		id: "ticket_042".to_string(),
		cauldron_id: "cauldron_001".to_string(),
		amount: 999.0,
		date: Some("2025-11-02".to_string()),
	}
}

/// A ticket matching [`drain_history`] within tolerance.
#[allow(dead_code)]
pub fn matching_ticket() -> Ticket {
	Ticket {
		id: "ticket_041".to_string(),
		cauldron_id: "cauldron_001".to_string(),
		amount: 630.0,
		date: Some("2025-11-02".to_string()),
	}
}
