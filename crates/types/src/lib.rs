//! Brewery Monitor Types
//!
//! Shared models and traits for the brewery monitoring facade.
//! This crate contains all domain models organized by business entity.

pub mod agent;
pub mod cauldrons;
pub mod logistics;
pub mod models;
pub mod status;
pub mod telemetry;
pub mod tickets;

// Re-export chrono and serde_json for convenience
pub use chrono;
pub use serde_json;

// Re-export commonly used types for convenience
pub use cauldrons::{
	Catalog, CatalogError, Cauldron, CauldronRates, CauldronRecord, Courier, Market,
};

pub use telemetry::{LevelSnapshot, PayloadShape, TelemetryApi, TelemetryError, TelemetryResult};

pub use status::{Forecast, MergedStatus, StatusRecord};

pub use tickets::{Alert, DrainEvent, Ticket};

pub use logistics::{DispatchError, DispatchReceipt, DispatchRequest};

pub use agent::{ChatReply, ChatRequest, CompletionError, CompletionOutcome};

// Shared infrastructure models
pub use models::SecretString;
