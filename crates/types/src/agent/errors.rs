//! Error types for the optional completion service
//!
//! These never fail a chat turn; the agent records them in the plan log
//! and keeps its locally composed response.

use thiserror::Error;

/// Errors from the streamed completion call.
#[derive(Error, Debug)]
pub enum CompletionError {
	#[error("Invalid completion base URL '{url}': {reason}")]
	InvalidUrl { url: String, reason: String },

	#[error("HTTP request failed: {0}")]
	Http(#[from] reqwest::Error),

	#[error("Completion service returned HTTP {status}")]
	HttpStatus { status: u16 },

	#[error("Malformed stream chunk: {reason}")]
	MalformedChunk { reason: String },

	#[error("Completion stream timed out after {timeout_ms}ms")]
	Timeout { timeout_ms: u64 },
}
