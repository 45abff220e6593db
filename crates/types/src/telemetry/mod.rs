//! Live telemetry models and the upstream API seam

pub mod errors;
pub mod traits;

pub use errors::{TelemetryError, TelemetryResult};
pub use traits::TelemetryApi;

use std::collections::HashMap;
use std::fmt;

/// Uniform view of one live-data poll: which payload shape was recognized
/// and the per-cauldron levels extracted from it.
///
/// Rebuilt on every poll; never persisted. A cauldron absent from `levels`
/// is treated as level 0 by the status merger.
#[derive(Debug, Clone, PartialEq)]
pub struct LevelSnapshot {
	pub shape: PayloadShape,
	pub levels: HashMap<String, f64>,
}

impl LevelSnapshot {
	pub fn level(&self, cauldron_id: &str) -> Option<f64> {
		self.levels.get(cauldron_id).copied()
	}
}

/// Discriminated result of the payload-shape recognizer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayloadShape {
	/// List of `{timestamp, cauldron_levels}` samples.
	TimeSeries,
	/// Flat list of per-cauldron records with aliased id/level fields.
	FlatList,
	/// One object standing in for a one-element list.
	Single,
	/// A wrapper object (`data`, `items`, ...) around one of the above.
	Wrapped(Box<PayloadShape>),
}

impl fmt::Display for PayloadShape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			PayloadShape::TimeSeries => write!(f, "time-series"),
			PayloadShape::FlatList => write!(f, "flat-list"),
			PayloadShape::Single => write!(f, "single-record"),
			PayloadShape::Wrapped(inner) => write!(f, "wrapped({})", inner),
		}
	}
}
