//! Configuration settings structures

use crate::{configurable_value::ConfigurableValue, ConfigurableValueError};
use brewery_types::SecretString;
use serde::{Deserialize, Serialize};

/// Main application settings
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct Settings {
	pub server: ServerSettings,
	pub upstream: UpstreamSettings,
	pub completion: CompletionSettings,
	pub reconcile: ReconcileSettings,
	pub logging: LoggingSettings,
}

/// Server configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
	pub host: String,
	pub port: u16,
}

/// Upstream telemetry API configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct UpstreamSettings {
	/// Base URL serving the `Information/*`, `Data`, and `Tickets` routes.
	pub base_url: String,
	/// Bounded timeout applied to every upstream request.
	pub timeout_ms: u64,
}

/// Optional completion-service configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct CompletionSettings {
	/// Engage the completion service even when a request does not ask for it.
	pub enabled: bool,
	pub base_url: String,
	pub model: String,
	pub timeout_ms: u64,
	/// Credential source. Defaults to the COMPLETION_API_KEY environment
	/// variable; a per-request key overrides it.
	pub api_key: ConfigurableValue,
	/// Surface reasoning fragments in plan logs without a per-request flag.
	pub show_reasoning: bool,
}

/// Discrepancy reconciliation tuning
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct ReconcileSettings {
	/// Claimed-vs-calculated volume difference tolerated before a ticket
	/// bucket is flagged, in volume units.
	pub tolerance: f64,
}

/// Logging configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct LoggingSettings {
	pub level: String,
	pub format: LogFormat,
	pub structured: bool,
}

/// Log format options
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	Json,
	Pretty,
	Compact,
}

impl Default for ServerSettings {
	fn default() -> Self {
		Self {
			host: "0.0.0.0".to_string(),
			port: 3000,
		}
	}
}

impl Default for UpstreamSettings {
	fn default() -> Self {
		Self {
			base_url: "https://telemetry.example.net/api".to_string(),
			timeout_ms: 5000,
		}
	}
}

impl Default for CompletionSettings {
	fn default() -> Self {
		Self {
			enabled: false,
			base_url: "https://integrate.api.nvidia.com/v1".to_string(),
			model: "nvidia/nvidia-nemotron-nano-9b-v2".to_string(),
			timeout_ms: 30_000,
			api_key: ConfigurableValue::from_env("COMPLETION_API_KEY"),
			show_reasoning: false,
		}
	}
}

impl Default for ReconcileSettings {
	fn default() -> Self {
		Self { tolerance: 1.0 }
	}
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: "info".to_string(),
			format: LogFormat::Pretty,
			structured: false,
		}
	}
}

impl Default for Settings {
	fn default() -> Self {
		Self {
			server: ServerSettings::default(),
			upstream: UpstreamSettings::default(),
			completion: CompletionSettings::default(),
			reconcile: ReconcileSettings::default(),
			logging: LoggingSettings::default(),
		}
	}
}

impl Settings {
	/// Get server bind address
	pub fn bind_address(&self) -> String {
		format!("{}:{}", self.server.host, self.server.port)
	}

	/// Resolve the configured completion credential, if any.
	///
	/// An unresolvable credential is not an error at this level: the agent
	/// degrades to local responses and records the reason in its plan log.
	pub fn completion_api_key(&self) -> Result<SecretString, ConfigurableValueError> {
		self.completion.api_key.resolve_for_secret()
	}
}
