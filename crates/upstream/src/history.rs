//! Drain-history payload parsing
//!
//! The `Data/metadata` endpoint serves historical fill/drain records in a
//! shape that, like the live feed, is not contractually fixed. The parser
//! accepts a bare list or a wrapped list and tolerates per-record noise:
//! records that do not look like drain events are skipped with a warning
//! rather than failing the whole document.

use brewery_types::{DrainEvent, TelemetryError, TelemetryResult};
use serde_json::Value;
use tracing::{debug, warn};

const WRAPPER_KEYS: [&str; 4] = ["data", "items", "results", "events"];

/// Extract drain events from one history payload.
pub fn parse_drain_events(payload: &Value) -> TelemetryResult<Vec<DrainEvent>> {
	let records = match payload {
		Value::Array(records) => records.as_slice(),
		Value::Object(map) => {
			let wrapped = WRAPPER_KEYS
				.iter()
				.find_map(|key| map.get(*key).and_then(Value::as_array));
			match wrapped {
				Some(records) => records.as_slice(),
				None => {
					debug!("Unrecognized history payload: {}", payload);
					return Err(TelemetryError::UnrecognizedShape {
						reason: "history object carries no known wrapper key".to_string(),
					});
				},
			}
		},
		other => {
			debug!("Unrecognized history payload: {}", other);
			return Err(TelemetryError::UnrecognizedShape {
				reason: "history payload is neither a list nor an object".to_string(),
			});
		},
	};

	let mut events = Vec::with_capacity(records.len());
	for record in records {
		match serde_json::from_value::<DrainEvent>(record.clone()) {
			Ok(event) => events.push(event),
			Err(e) => {
				warn!("Skipping malformed history record: {}", e);
			},
		}
	}

	Ok(events)
}
