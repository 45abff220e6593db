//! Simulated courier dispatch
//!
//! The upstream service has no write endpoint, so dispatching only
//! validates the target and logs the action. Nothing mutates.

use brewery_types::{Catalog, DispatchError, DispatchReceipt};
use std::sync::Arc;
use tracing::info;

pub struct DispatchService {
	catalog: Arc<Catalog>,
}

impl DispatchService {
	pub fn new(catalog: Arc<Catalog>) -> Self {
		Self { catalog }
	}

	/// Dispatch a courier to a cauldron by id. Unknown ids are a client
	/// error, not a server fault.
	pub fn dispatch(&self, cauldron_id: &str) -> Result<DispatchReceipt, DispatchError> {
		let Some(cauldron) = self.catalog.get(cauldron_id) else {
			return Err(DispatchError::UnknownCauldron {
				cauldron_id: cauldron_id.to_string(),
			});
		};

		info!("Simulated dispatch: courier sent to {}", cauldron.name);
		Ok(DispatchReceipt::success(&cauldron.name))
	}
}
