//! Shared infrastructure models used across business entities

pub mod secret_string;

pub use secret_string::SecretString;
