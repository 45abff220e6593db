//! Error types for catalog construction

use crate::telemetry::TelemetryError;
use thiserror::Error;

/// Errors raised while loading the startup catalog.
///
/// Any of these is fatal: the process must not serve requests with a
/// partially-initialized catalog.
#[derive(Error, Debug)]
pub enum CatalogError {
	#[error("Failed to fetch {resource} reference data: {source}")]
	Fetch {
		resource: &'static str,
		#[source]
		source: TelemetryError,
	},

	#[error("Invalid cauldron record '{id}': {reason}")]
	InvalidCauldron { id: String, reason: String },

	#[error("Duplicate cauldron id '{id}' in reference data")]
	DuplicateCauldron { id: String },
}
