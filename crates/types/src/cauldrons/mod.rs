//! Cauldron catalog models
//!
//! The catalog is assembled once at startup from the upstream reference
//! endpoints and shared read-only for the rest of the process lifetime.

pub mod errors;

pub use errors::CatalogError;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A monitored cauldron: static reference data plus the rates synthesized
/// at load time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Cauldron {
	pub id: String,
	pub name: String,
	pub max_volume: f64,
	/// Volume per minute. Placeholder value pending a real metadata source.
	pub fill_rate_per_min: f64,
	/// Volume per minute. Placeholder value pending a real metadata source.
	pub drain_rate_per_min: f64,
}

impl Cauldron {
	/// Build a cauldron from its upstream record and a pair of rates.
	pub fn from_record(record: CauldronRecord, rates: CauldronRates) -> Self {
		let name = record.name.unwrap_or_else(|| record.id.clone());
		Self {
			id: record.id,
			name,
			max_volume: record.max_volume,
			fill_rate_per_min: rates.fill_rate_per_min,
			drain_rate_per_min: rates.drain_rate_per_min,
		}
	}
}

/// Wire shape of a cauldron as served by the reference endpoint.
///
/// Field names are not contractually fixed upstream; aliases cover the
/// observed variants. The record carries no rate fields.
#[derive(Debug, Clone, Deserialize)]
pub struct CauldronRecord {
	#[serde(alias = "cauldronId", alias = "cauldron_id")]
	pub id: String,
	#[serde(default, alias = "displayName", alias = "display_name")]
	pub name: Option<String>,
	#[serde(alias = "maxVolume", alias = "max_capacity", alias = "capacity")]
	pub max_volume: f64,
}

/// Fill/drain rates for one cauldron, volume per minute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CauldronRates {
	pub fill_rate_per_min: f64,
	pub drain_rate_per_min: f64,
}

/// A courier unit that can be dispatched to service a cauldron.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct Courier {
	#[serde(alias = "courierId", alias = "courier_id")]
	pub id: String,
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default, alias = "maxCapacity", alias = "max_capacity")]
	pub capacity: Option<f64>,
}

/// Market descriptor. The upstream shape is externally defined, so the raw
/// value is kept and only a display name is extracted best-effort.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Market(pub Value);

impl Market {
	pub fn name(&self) -> &str {
		self.0
			.get("name")
			.and_then(Value::as_str)
			.unwrap_or("the market")
	}
}

/// Process-wide reference catalog, read-only after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
	cauldrons: Vec<Cauldron>,
	index: HashMap<String, usize>,
	network: Value,
	market: Market,
	couriers: Vec<Courier>,
}

impl Catalog {
	/// Assemble and validate a catalog. Any invalid cauldron record fails
	/// the whole construction; a partial catalog is not a valid state.
	pub fn new(
		cauldrons: Vec<Cauldron>,
		network: Value,
		market: Market,
		couriers: Vec<Courier>,
	) -> Result<Self, CatalogError> {
		let mut index = HashMap::with_capacity(cauldrons.len());
		for (pos, cauldron) in cauldrons.iter().enumerate() {
			if cauldron.id.trim().is_empty() {
				return Err(CatalogError::InvalidCauldron {
					id: cauldron.id.clone(),
					reason: "empty id".to_string(),
				});
			}
			if cauldron.max_volume <= 0.0 {
				return Err(CatalogError::InvalidCauldron {
					id: cauldron.id.clone(),
					reason: format!("non-positive max_volume {}", cauldron.max_volume),
				});
			}
			if cauldron.fill_rate_per_min <= 0.0 || cauldron.drain_rate_per_min <= 0.0 {
				return Err(CatalogError::InvalidCauldron {
					id: cauldron.id.clone(),
					reason: "non-positive rate".to_string(),
				});
			}
			if index.insert(cauldron.id.clone(), pos).is_some() {
				return Err(CatalogError::DuplicateCauldron {
					id: cauldron.id.clone(),
				});
			}
		}

		Ok(Self {
			cauldrons,
			index,
			network,
			market,
			couriers,
		})
	}

	/// Cauldrons in upstream order.
	pub fn cauldrons(&self) -> &[Cauldron] {
		&self.cauldrons
	}

	pub fn get(&self, id: &str) -> Option<&Cauldron> {
		self.index.get(id).map(|pos| &self.cauldrons[*pos])
	}

	pub fn len(&self) -> usize {
		self.cauldrons.len()
	}

	pub fn is_empty(&self) -> bool {
		self.cauldrons.is_empty()
	}

	pub fn network(&self) -> &Value {
		&self.network
	}

	/// Edge count of the network topology, tolerating either a list of
	/// edges or an adjacency object.
	pub fn network_edge_count(&self) -> usize {
		match &self.network {
			Value::Array(edges) => edges.len(),
			Value::Object(map) => map.len(),
			_ => 0,
		}
	}

	pub fn market(&self) -> &Market {
		&self.market
	}

	pub fn couriers(&self) -> &[Courier] {
		&self.couriers
	}

	/// Resolve a cauldron mentioned in free text: either its literal id or
	/// the first word of its display name, case-insensitive.
	pub fn resolve_mention(&self, text: &str) -> Option<&Cauldron> {
		let haystack = text.to_lowercase();
		self.cauldrons.iter().find(|cauldron| {
			if haystack.contains(&cauldron.id.to_lowercase()) {
				return true;
			}
			cauldron
				.name
				.split_whitespace()
				.next()
				.is_some_and(|word| haystack.contains(&word.to_lowercase()))
		})
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	fn cauldron(id: &str, name: &str) -> Cauldron {
		Cauldron {
			id: id.to_string(),
			name: name.to_string(),
			max_volume: 1000.0,
			fill_rate_per_min: 1.0,
			drain_rate_per_min: 12.0,
		}
	}

	fn catalog(cauldrons: Vec<Cauldron>) -> Catalog {
		Catalog::new(cauldrons, json!([]), Market::default(), vec![]).unwrap()
	}

	#[test]
	fn test_record_aliases() {
		let record: CauldronRecord =
			serde_json::from_value(json!({"cauldronId": "c1", "maxVolume": 500.0})).unwrap();
		assert_eq!(record.id, "c1");
		assert_eq!(record.max_volume, 500.0);
		assert!(record.name.is_none());
	}

	#[test]
	fn test_from_record_defaults_name_to_id() {
		let record: CauldronRecord =
			serde_json::from_value(json!({"id": "c2", "capacity": 100.0})).unwrap();
		let built = Cauldron::from_record(
			record,
			CauldronRates {
				fill_rate_per_min: 1.0,
				drain_rate_per_min: 10.0,
			},
		);
		assert_eq!(built.name, "c2");
	}

	#[test]
	fn test_catalog_rejects_non_positive_capacity() {
		let mut bad = cauldron("c1", "Azure Vat");
		bad.max_volume = 0.0;
		let err = Catalog::new(vec![bad], json!([]), Market::default(), vec![]).unwrap_err();
		assert!(matches!(err, CatalogError::InvalidCauldron { .. }));
	}

	#[test]
	fn test_catalog_rejects_duplicate_ids() {
		let err = Catalog::new(
			vec![cauldron("c1", "Azure Vat"), cauldron("c1", "Other")],
			json!([]),
			Market::default(),
			vec![],
		)
		.unwrap_err();
		assert!(matches!(err, CatalogError::DuplicateCauldron { .. }));
	}

	#[test]
	fn test_resolve_mention_by_id_and_name_word() {
		let catalog = catalog(vec![
			cauldron("cauldron_001", "Azure Vat"),
			cauldron("cauldron_002", "Crimson Kettle"),
		]);

		let by_id = catalog.resolve_mention("please empty CAULDRON_002 now");
		assert_eq!(by_id.unwrap().id, "cauldron_002");

		let by_name = catalog.resolve_mention("dispatch someone to the azure one");
		assert_eq!(by_name.unwrap().id, "cauldron_001");

		assert!(catalog.resolve_mention("dispatch a courier").is_none());
	}

	#[test]
	fn test_network_edge_count_shapes() {
		let list = Catalog::new(
			vec![],
			json!([{"from": "a", "to": "b"}]),
			Market::default(),
			vec![],
		)
		.unwrap();
		assert_eq!(list.network_edge_count(), 1);

		let object = Catalog::new(
			vec![],
			json!({"a": ["b"], "b": ["a"]}),
			Market::default(),
			vec![],
		)
		.unwrap();
		assert_eq!(object.network_edge_count(), 2);
	}

	#[test]
	fn test_market_name_fallback() {
		assert_eq!(Market::default().name(), "the market");
		let named = Market(json!({"name": "Night Market"}));
		assert_eq!(named.name(), "Night Market");
	}
}
