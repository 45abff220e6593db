//! Startup catalog loading
//!
//! Runs once at process start. Fetches the four reference documents from
//! the upstream service and assembles the read-only [`Catalog`]. Any
//! failure is fatal to startup; the system has no valid degraded mode
//! without its catalog.

use brewery_types::{
	Catalog, CatalogError, Cauldron, CauldronRates, CauldronRecord, Market, TelemetryApi,
};
use rand::Rng;
use tracing::info;

/// Source of per-cauldron fill/drain rates.
///
/// The upstream reference data carries no rate fields, so rates are
/// injected at load time. Tests provide [`FixedRates`]; production uses
/// [`SyntheticRates`] until a real metadata source exists.
pub trait RateSource: Send + Sync {
	fn rates_for(&self, record: &CauldronRecord) -> CauldronRates;
}

/// Placeholder rate source drawing uniform random values.
///
/// TODO: replace with rates derived from the `Data/metadata` endpoint once
/// its shape is known.
#[derive(Debug, Clone)]
pub struct SyntheticRates {
	pub fill_range: (f64, f64),
	pub drain_range: (f64, f64),
}

impl Default for SyntheticRates {
	fn default() -> Self {
		Self {
			fill_range: (0.5, 2.0),
			drain_range: (10.0, 20.0),
		}
	}
}

impl RateSource for SyntheticRates {
	fn rates_for(&self, _record: &CauldronRecord) -> CauldronRates {
		let mut rng = rand::thread_rng();
		CauldronRates {
			fill_rate_per_min: round2(rng.gen_range(self.fill_range.0..self.fill_range.1)),
			drain_rate_per_min: round2(rng.gen_range(self.drain_range.0..self.drain_range.1)),
		}
	}
}

/// Deterministic rates for tests and fixtures.
#[derive(Debug, Clone, Copy)]
pub struct FixedRates(pub CauldronRates);

impl RateSource for FixedRates {
	fn rates_for(&self, _record: &CauldronRecord) -> CauldronRates {
		self.0
	}
}

fn round2(value: f64) -> f64 {
	(value * 100.0).round() / 100.0
}

/// Fetch and assemble the startup catalog.
pub async fn load_catalog(
	api: &dyn TelemetryApi,
	rates: &dyn RateSource,
) -> Result<Catalog, CatalogError> {
	info!("Loading static factory reference data");

	let records = api.cauldrons().await.map_err(|source| CatalogError::Fetch {
		resource: "cauldrons",
		source,
	})?;
	let network = api.network().await.map_err(|source| CatalogError::Fetch {
		resource: "network",
		source,
	})?;
	let market = api.market().await.map_err(|source| CatalogError::Fetch {
		resource: "market",
		source,
	})?;
	let couriers = api.couriers().await.map_err(|source| CatalogError::Fetch {
		resource: "couriers",
		source,
	})?;

	let cauldrons: Vec<Cauldron> = records
		.into_iter()
		.map(|record| {
			let assigned = rates.rates_for(&record);
			Cauldron::from_record(record, assigned)
		})
		.collect();

	let catalog = Catalog::new(cauldrons, network, Market(market), couriers)?;
	info!(
		"Catalog loaded: {} cauldrons, {} couriers, {} network edges",
		catalog.len(),
		catalog.couriers().len(),
		catalog.network_edge_count()
	);

	Ok(catalog)
}
