//! Brewery Monitor Configuration
//!
//! Configuration management and startup utilities for the brewery monitor.

pub mod configurable_value;
pub mod loader;
pub mod settings;
pub mod startup_logger;

pub use configurable_value::{ConfigurableValue, ConfigurableValueError};
pub use loader::load_config;
pub use settings::{
	CompletionSettings, LogFormat, LoggingSettings, ReconcileSettings, ServerSettings, Settings,
	UpstreamSettings,
};
pub use startup_logger::{log_service_info, log_service_shutdown, log_startup_complete};
