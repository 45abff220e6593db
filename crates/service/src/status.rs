//! Live status merging
//!
//! Joins the read-only catalog with one normalized live snapshot. Missing
//! live data is a policy case (level 0), never an error; only the upstream
//! fetch itself can fail.

use crate::forecast::{forecast, round1};
use brewery_types::{
	Catalog, Forecast, LevelSnapshot, MergedStatus, StatusRecord, TelemetryApi, TelemetryResult,
};
use brewery_upstream::normalize_levels;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Per-request status computation over the shared catalog.
pub struct StatusService {
	api: Arc<dyn TelemetryApi>,
	catalog: Arc<Catalog>,
}

impl StatusService {
	pub fn new(api: Arc<dyn TelemetryApi>, catalog: Arc<Catalog>) -> Self {
		Self { api, catalog }
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	/// Fetch the live feed, normalize it, and join it with the catalog.
	pub async fn live_levels(&self) -> TelemetryResult<Vec<MergedStatus>> {
		let payload = self.api.live_data().await?;
		let snapshot = normalize_levels(&payload)?;
		debug!(
			"Live snapshot: {} level(s) via {} payload",
			snapshot.levels.len(),
			snapshot.shape
		);
		Ok(merge(&self.catalog, &snapshot))
	}

	/// Time-to-full for every cauldron still filling, in catalog order.
	pub async fn forecast(&self) -> TelemetryResult<Vec<Forecast>> {
		Ok(forecast(&self.live_levels().await?))
	}

	/// Merged status extended with percent-full and time-to-full.
	pub async fn status_report(&self) -> TelemetryResult<Vec<StatusRecord>> {
		let merged = self.live_levels().await?;
		let by_id: HashMap<String, f64> = forecast(&merged)
			.into_iter()
			.map(|f| (f.cauldron_id, f.time_to_full_min))
			.collect();

		Ok(merged
			.into_iter()
			.map(|status| {
				let percent_full = round1(status.current_level / status.max_volume * 100.0);
				let time_to_full_min = by_id.get(&status.id).copied();
				StatusRecord {
					status,
					percent_full,
					time_to_full_min,
				}
			})
			.collect())
	}
}

/// Join catalog entries with a live snapshot, preserving catalog order.
pub fn merge(catalog: &Catalog, snapshot: &LevelSnapshot) -> Vec<MergedStatus> {
	catalog
		.cauldrons()
		.iter()
		.map(|cauldron| {
			let live = snapshot.level(&cauldron.id);
			MergedStatus {
				id: cauldron.id.clone(),
				name: cauldron.name.clone(),
				max_volume: cauldron.max_volume,
				fill_rate_per_min: cauldron.fill_rate_per_min,
				drain_rate_per_min: cauldron.drain_rate_per_min,
				current_level: live.unwrap_or(0.0),
				overflow: live.is_some_and(|level| level >= cauldron.max_volume),
			}
		})
		.collect()
}
