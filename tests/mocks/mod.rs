//! Centralized mocks and fixtures for testing
//!
//! Reusable payload fixtures and the live test server, shared across the
//! integration test files.

pub mod fixtures;
pub mod test_server;

#[allow(unused_imports)]
pub use test_server::TestServer;
