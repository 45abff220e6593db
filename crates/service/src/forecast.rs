//! Linear time-to-full forecasting

use brewery_types::{Forecast, MergedStatus};

/// Compute time-to-full for every cauldron still filling.
///
/// Cauldrons already at or above capacity, or with a non-positive fill
/// rate, are omitted rather than zeroed: "no forecast" avoids implying a
/// falsely completed state.
pub fn forecast(statuses: &[MergedStatus]) -> Vec<Forecast> {
	statuses
		.iter()
		.filter(|status| status.current_level < status.max_volume && status.fill_rate_per_min > 0.0)
		.map(|status| Forecast {
			cauldron_id: status.id.clone(),
			name: status.name.clone(),
			time_to_full_min: round1(
				(status.max_volume - status.current_level) / status.fill_rate_per_min,
			),
		})
		.collect()
}

pub(crate) fn round1(value: f64) -> f64 {
	(value * 10.0).round() / 10.0
}
