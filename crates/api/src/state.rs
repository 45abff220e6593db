use std::sync::Arc;

use brewery_service::{AgentService, DispatchService, ReconcileService, StatusService};
use brewery_types::Catalog;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
	pub status_service: Arc<StatusService>,
	pub reconcile_service: Arc<ReconcileService>,
	pub dispatch_service: Arc<DispatchService>,
	pub agent_service: Arc<AgentService>,
	pub catalog: Arc<Catalog>,
}
