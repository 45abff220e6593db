//! Conversational front-end models
//!
//! One chat turn is stateless: free text in, a reply plus the ordered plan
//! log out. Nothing is retained across turns.

pub mod errors;

pub use errors::CompletionError;

use crate::models::SecretString;
use serde::{Deserialize, Serialize};

/// Body of `POST /agent/chat`.
#[derive(Debug, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ChatRequest {
	pub message: String,
	/// Per-request completion-service credential. Presence alone opts the
	/// turn into remote completion.
	#[serde(default)]
	#[cfg_attr(feature = "openapi", schema(value_type = Option<String>))]
	pub api_key: Option<SecretString>,
	/// Explicit opt-in to remote completion (without sending a credential).
	#[serde(default)]
	pub use_assistant: bool,
	/// Surface completion-service reasoning fragments in the plan log.
	#[serde(default)]
	pub debug: bool,
}

impl ChatRequest {
	pub fn from_message(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
			api_key: None,
			use_assistant: false,
			debug: false,
		}
	}
}

/// One completed chat turn.
#[derive(Debug, Clone, Serialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct ChatReply {
	pub response: String,
	/// Ordered narration of the intermediate steps taken for this turn.
	pub plan: Vec<String>,
}

/// Assembled output of one streamed completion call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompletionOutcome {
	/// Concatenated content fragments, trimmed. May be empty.
	pub text: String,
	/// Reasoning-trace fragments, surfaced only in debug mode.
	pub reasoning: Vec<String>,
}
