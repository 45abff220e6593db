//! Derived per-cauldron status records
//!
//! These are ephemeral join products of the catalog and one live snapshot,
//! computed fresh for every request and never cached.

use serde::Serialize;

/// One catalog cauldron joined with its live level.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct MergedStatus {
	pub id: String,
	pub name: String,
	pub max_volume: f64,
	pub fill_rate_per_min: f64,
	pub drain_rate_per_min: f64,
	/// 0.0 when the cauldron is absent from the live snapshot.
	pub current_level: f64,
	/// True iff a live level was present and at or above capacity.
	pub overflow: bool,
}

/// Merged status extended with the dashboard-facing derived fields.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct StatusRecord {
	#[serde(flatten)]
	pub status: MergedStatus,
	pub percent_full: f64,
	/// Absent when the cauldron is full or its fill rate is non-positive.
	pub time_to_full_min: Option<f64>,
}

/// Linear time-to-full estimate for one cauldron.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Forecast {
	pub cauldron_id: String,
	pub name: String,
	pub time_to_full_min: f64,
}
