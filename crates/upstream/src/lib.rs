//! Brewery Monitor Upstream
//!
//! HTTP access to the external factory-telemetry API and the optional
//! completion service, plus the defensive payload normalizers.

pub mod client;
pub mod completion;
pub mod history;
pub mod levels;

pub use client::HttpTelemetryClient;
pub use completion::CompletionClient;
pub use history::parse_drain_events;
pub use levels::normalize_levels;

pub use brewery_types::{TelemetryApi, TelemetryError, TelemetryResult};
