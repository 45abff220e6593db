//! Courier dispatch models

pub mod errors;

pub use errors::DispatchError;

use serde::{Deserialize, Serialize};

/// Body of `POST /logistics/dispatch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DispatchRequest {
	pub cauldron_id: String,
}

/// Outcome of a (simulated) courier dispatch.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct DispatchReceipt {
	pub status: String,
	pub message: String,
}

impl DispatchReceipt {
	pub fn success(cauldron_name: &str) -> Self {
		Self {
			status: "success".to_string(),
			message: format!("Courier dispatched to {}. (Simulation)", cauldron_name),
		}
	}
}
