//! The upstream telemetry API seam
//!
//! Services depend on this trait rather than a concrete HTTP client so
//! tests can inject doubles and never touch the network.

use crate::cauldrons::{CauldronRecord, Courier};
use crate::telemetry::TelemetryResult;
use crate::tickets::Ticket;
use async_trait::async_trait;
use serde_json::Value;
use std::fmt::Debug;

/// Read surface of the external factory-telemetry service.
///
/// Reference data (`cauldrons`, `network`, `market`, `couriers`) is fetched
/// once at startup; `live_data`, `history`, and `tickets` are fetched per
/// request. Payloads whose shape is not contractually fixed upstream are
/// returned as raw JSON and interpreted defensively by the caller.
#[async_trait]
pub trait TelemetryApi: Send + Sync + Debug {
	async fn cauldrons(&self) -> TelemetryResult<Vec<CauldronRecord>>;

	async fn network(&self) -> TelemetryResult<Value>;

	async fn market(&self) -> TelemetryResult<Value>;

	async fn couriers(&self) -> TelemetryResult<Vec<Courier>>;

	/// Current levels, arbitrary shape. See the live-level normalizer.
	async fn live_data(&self) -> TelemetryResult<Value>;

	/// Historical fill/drain records, arbitrary shape.
	async fn history(&self) -> TelemetryResult<Value>;

	async fn tickets(&self) -> TelemetryResult<Vec<Ticket>>;
}
