//! Configuration loading utilities

use crate::Settings;
use config::{Config, ConfigError, Environment, File};

/// Load configuration from the optional config file, then apply
/// `BREWERY__`-prefixed environment overrides (e.g.
/// `BREWERY__UPSTREAM__BASE_URL`). Missing file and missing variables fall
/// back to [`Settings::default`] values.
pub fn load_config() -> Result<Settings, ConfigError> {
	let s = Config::builder()
		.add_source(File::with_name("config/config").required(false))
		.add_source(
			Environment::with_prefix("BREWERY")
				.prefix_separator("__")
				.separator("__"),
		)
		.build()?;

	s.try_deserialize()
}
