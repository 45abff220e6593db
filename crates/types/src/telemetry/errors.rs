//! Error types for upstream telemetry operations

use thiserror::Error;

pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// Errors from the upstream telemetry API or from interpreting its payloads.
#[derive(Error, Debug)]
pub enum TelemetryError {
	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("Upstream returned HTTP {status}: {reason}")]
	HttpStatus { status: u16, reason: String },

	#[error("Invalid response body: {reason}")]
	InvalidResponse { reason: String },

	#[error("Unrecognized live-data payload shape: {reason}")]
	UnrecognizedShape { reason: String },

	#[error("Invalid base URL '{url}': {reason}")]
	InvalidUrl { url: String, reason: String },
}

impl TelemetryError {
	/// True for payloads the recognizer refused, as opposed to transport
	/// failures. Handlers report these as format errors rather than
	/// upstream outages.
	pub fn is_format_error(&self) -> bool {
		matches!(self, TelemetryError::UnrecognizedShape { .. })
	}
}
