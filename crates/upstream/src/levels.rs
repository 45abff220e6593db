//! Live-level payload normalization
//!
//! The upstream `Data` endpoint does not commit to a payload shape. This
//! module recognizes the known shapes in priority order and reduces any of
//! them to one uniform cauldron-id → level map:
//!
//!   1. a time series: `[{timestamp, cauldron_levels: {id: level, ...}}]`,
//!      where the chronologically latest sample wins;
//!   2. a flat list of per-cauldron records with aliased id/level fields;
//!   3. a wrapper object holding one of the above under `data`/`items`/
//!      `results`/`value`;
//!   4. a single record object, treated as a one-element list.
//!
//! Anything else is an explicit `UnrecognizedShape` error; callers must
//! report it rather than serve an empty map as success.

use brewery_types::{LevelSnapshot, PayloadShape, TelemetryError, TelemetryResult};
use chrono::DateTime;
use serde_json::{Map, Value};
use std::collections::HashMap;
use tracing::{debug, warn};

const WRAPPER_KEYS: [&str; 4] = ["data", "items", "results", "value"];
const ID_KEYS: [&str; 3] = ["cauldronId", "cauldron_id", "id"];
const LEVEL_KEYS: [&str; 6] = [
	"currentVolume",
	"current_volume",
	"volume",
	"level",
	"value",
	"current",
];
const TIMESTAMP_KEYS: [&str; 3] = ["timestamp", "time", "ts"];
const LEVELS_MAP_KEY: &str = "cauldron_levels";

/// Reduce one live-data payload to a [`LevelSnapshot`]. Pure transform;
/// diagnostics go through `tracing` only.
pub fn normalize_levels(payload: &Value) -> TelemetryResult<LevelSnapshot> {
	match payload {
		Value::Array(records) => normalize_list(records),
		Value::Object(map) => {
			for key in WRAPPER_KEYS {
				if let Some(Value::Array(records)) = map.get(key) {
					let inner = normalize_list(records)?;
					return Ok(LevelSnapshot {
						shape: PayloadShape::Wrapped(Box::new(inner.shape)),
						levels: inner.levels,
					});
				}
			}
			if looks_like_record(map) {
				let inner = normalize_list(std::slice::from_ref(payload))?;
				return Ok(LevelSnapshot {
					shape: PayloadShape::Single,
					levels: inner.levels,
				});
			}
			Err(unrecognized(
				payload,
				"object carries no known wrapper or record fields",
			))
		},
		other => Err(unrecognized(other, value_kind(other))),
	}
}

fn normalize_list(records: &[Value]) -> TelemetryResult<LevelSnapshot> {
	let is_time_series = records
		.iter()
		.any(|record| record.get(LEVELS_MAP_KEY).is_some_and(Value::is_object));

	if is_time_series {
		return Ok(LevelSnapshot {
			shape: PayloadShape::TimeSeries,
			levels: latest_sample(records),
		});
	}

	// Flat list: one record per cauldron. Records without an id are
	// skipped; uncoercible levels are recorded as absent.
	let mut levels = HashMap::new();
	for record in records {
		let Some(map) = record.as_object() else {
			continue;
		};
		let Some(id) = record_id(map) else {
			continue;
		};
		match record_level(map) {
			Some(level) => {
				levels.insert(id, level);
			},
			None => {
				warn!("Live record for '{}' has no coercible level; treating as absent", id);
			},
		}
	}

	Ok(LevelSnapshot {
		shape: PayloadShape::FlatList,
		levels,
	})
}

/// Pick the latest time-series sample. Records are compared by their
/// parseable timestamps; when none parses, the last record carrying a
/// levels map wins (list order assumed chronological).
fn latest_sample(records: &[Value]) -> HashMap<String, f64> {
	let mut chosen: Option<&Map<String, Value>> = None;
	let mut best_ts: Option<f64> = None;

	for record in records {
		let Some(sample) = record.get(LEVELS_MAP_KEY).and_then(Value::as_object) else {
			continue;
		};
		match record.as_object().and_then(record_timestamp) {
			Some(ts) => {
				// Ties resolve to the later list element.
				if best_ts.map_or(true, |best| ts >= best) {
					best_ts = Some(ts);
					chosen = Some(sample);
				}
			},
			None => {
				if best_ts.is_none() {
					chosen = Some(sample);
				}
			},
		}
	}

	let mut levels = HashMap::new();
	if let Some(sample) = chosen {
		for (id, value) in sample {
			match coerce_level(value) {
				Some(level) => {
					levels.insert(id.clone(), level);
				},
				None => {
					warn!("Uncoercible level for '{}' in time-series sample; treating as absent", id);
				},
			}
		}
	}
	levels
}

fn record_timestamp(map: &Map<String, Value>) -> Option<f64> {
	for key in TIMESTAMP_KEYS {
		match map.get(key) {
			Some(Value::Number(n)) => return n.as_f64(),
			Some(Value::String(s)) => {
				if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
					return Some(ts.timestamp_millis() as f64);
				}
			},
			_ => {},
		}
	}
	None
}

fn record_id(map: &Map<String, Value>) -> Option<String> {
	for key in ID_KEYS {
		if let Some(id) = map.get(key).and_then(Value::as_str) {
			return Some(id.to_string());
		}
	}
	// Some deployments nest the cauldron reference.
	map.get("cauldron")
		.and_then(Value::as_object)
		.and_then(|cauldron| cauldron.get("id"))
		.and_then(Value::as_str)
		.map(str::to_string)
}

fn record_level(map: &Map<String, Value>) -> Option<f64> {
	for key in LEVEL_KEYS {
		if let Some(value) = map.get(key) {
			return coerce_level(value);
		}
	}
	None
}

fn coerce_level(value: &Value) -> Option<f64> {
	match value {
		Value::Number(n) => n.as_f64(),
		Value::String(s) => s.trim().parse::<f64>().ok(),
		_ => None,
	}
}

fn looks_like_record(map: &Map<String, Value>) -> bool {
	if map.get(LEVELS_MAP_KEY).is_some_and(Value::is_object) {
		return true;
	}
	ID_KEYS
		.iter()
		.chain(LEVEL_KEYS.iter())
		.any(|key| map.contains_key(*key))
}

fn value_kind(value: &Value) -> &'static str {
	match value {
		Value::Null => "null payload",
		Value::Bool(_) => "bare boolean",
		Value::Number(_) => "bare number",
		Value::String(_) => "bare string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

fn unrecognized(payload: &Value, reason: &str) -> TelemetryError {
	// Full payload only at debug; the error itself stays terse.
	debug!("Unrecognized live-data payload: {}", payload);
	TelemetryError::UnrecognizedShape {
		reason: reason.to_string(),
	}
}
