//! Brewery Monitor Service
//!
//! Core logic of the monitoring facade: catalog loading, status merging,
//! forecasting, ticket reconciliation, courier dispatch, and the chat agent.

pub mod agent;
pub mod catalog;
pub mod dispatch;
pub mod forecast;
pub mod reconcile;
pub mod status;

pub use agent::{AgentService, Intent};
pub use catalog::{load_catalog, FixedRates, RateSource, SyntheticRates};
pub use dispatch::DispatchService;
pub use forecast::forecast;
pub use reconcile::{reconcile, ReconcileService};
pub use status::{merge, StatusService};

#[cfg(test)]
pub(crate) mod test_support;
