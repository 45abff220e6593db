//! Error types for dispatch operations

use thiserror::Error;

/// Errors from the courier dispatch action.
#[derive(Error, Debug)]
pub enum DispatchError {
	/// A client error, not a server fault: the caller named a cauldron the
	/// catalog does not know.
	#[error("Unknown cauldron id '{cauldron_id}'")]
	UnknownCauldron { cauldron_id: String },
}
