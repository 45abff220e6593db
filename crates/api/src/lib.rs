//! Brewery Monitor API
//!
//! Axum-based HTTP surface with routes and middleware for the brewery
//! monitoring facade.

pub mod handlers;
#[cfg(feature = "openapi")]
pub mod openapi;
pub mod router;
pub mod security;
pub mod state;

pub use router::create_router;
pub use state::AppState;
