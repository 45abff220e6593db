//! Brewery Monitor Library
//!
//! A monitoring and orchestration facade over an external factory-telemetry
//! API: merged live levels, fill-time forecasting, ticket reconciliation,
//! courier dispatch, and a conversational front-end.

// Core domain types - the most commonly used types
pub use brewery_types::{
	chrono,
	// External dependencies for convenience
	serde_json,
	Alert,
	Catalog,
	CatalogError,
	// Primary domain entities
	Cauldron,
	CauldronRates,
	CauldronRecord,
	ChatReply,
	ChatRequest,
	CompletionError,
	Courier,
	DispatchError,
	DispatchReceipt,
	DispatchRequest,
	Forecast,
	LevelSnapshot,
	Market,
	MergedStatus,
	PayloadShape,
	SecretString,
	StatusRecord,
	// The upstream seam
	TelemetryApi,
	// Error types
	TelemetryError,
	TelemetryResult,
	Ticket,
};

// Service layer
pub use brewery_service::{
	load_catalog, AgentService, DispatchService, FixedRates, Intent, RateSource,
	ReconcileService, StatusService, SyntheticRates,
};

// Upstream clients and normalizers
pub use brewery_upstream::{
	normalize_levels, parse_drain_events, CompletionClient, HttpTelemetryClient,
};

// API layer
pub use brewery_api::{create_router, AppState};

// Config
pub use brewery_config::{load_config, log_service_info, log_startup_complete, Settings};

// Module aliases for qualified access
pub mod models {
	pub use brewery_types::*;
}

pub mod config {
	pub use brewery_config::*;
}

pub mod upstream {
	pub use brewery_upstream::*;
}

pub mod service {
	pub use brewery_service::*;
}

pub mod api {
	pub use brewery_api::*;
	pub mod routes {
		pub use brewery_api::{create_router, AppState};
	}
}

pub mod mocks;

use std::net::SocketAddr;
use std::sync::Arc;
use tracing::{info, warn};

// Re-export external dependencies for examples
pub use async_trait;
pub use reqwest;

/// Builder pattern for configuring the monitor
///
/// The telemetry API and rate source are injectable so tests and examples
/// can run against doubles; production defaults to the HTTP client and the
/// synthetic rate placeholder.
pub struct MonitorBuilder {
	settings: Option<Settings>,
	telemetry_api: Option<Arc<dyn TelemetryApi>>,
	rate_source: Option<Box<dyn RateSource>>,
}

impl Default for MonitorBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl MonitorBuilder {
	pub fn new() -> Self {
		Self {
			settings: None,
			telemetry_api: None,
			rate_source: None,
		}
	}

	/// Set custom settings
	pub fn with_settings(mut self, settings: Settings) -> Self {
		self.settings = Some(settings);
		self
	}

	/// Inject a telemetry API implementation (e.g. a mock for tests)
	pub fn with_telemetry_api(mut self, api: Arc<dyn TelemetryApi>) -> Self {
		self.telemetry_api = Some(api);
		self
	}

	/// Inject a rate source instead of the synthetic placeholder
	pub fn with_rate_source(mut self, rates: Box<dyn RateSource>) -> Self {
		self.rate_source = Some(rates);
		self
	}

	/// Get the current settings
	pub fn settings(&self) -> Option<&Settings> {
		self.settings.as_ref()
	}

	/// Initialize tracing with configuration-based settings
	fn init_tracing_from_settings(
		&self,
		settings: &Settings,
	) -> Result<(), Box<dyn std::error::Error>> {
		use brewery_config::LogFormat;

		// Create env filter using config level or environment variable
		let log_level = &settings.logging.level;
		let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
			.unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

		match settings.logging.format {
			LogFormat::Json => {
				let subscriber = tracing_subscriber::fmt().json().with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Pretty => {
				let subscriber = tracing_subscriber::fmt()
					.pretty()
					.with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
			LogFormat::Compact => {
				let subscriber = tracing_subscriber::fmt()
					.compact()
					.with_env_filter(env_filter);
				if settings.logging.structured {
					subscriber.with_target(true).with_thread_ids(true).init();
				} else {
					subscriber.init();
				}
			},
		}

		info!(
			"Logging configuration applied: level={}, format={:?}, structured={}",
			settings.logging.level, settings.logging.format, settings.logging.structured
		);

		Ok(())
	}

	/// Load the catalog and return the configured router with state.
	///
	/// Catalog loading is fatal on failure: there is no valid
	/// partially-initialized state to serve from.
	pub async fn start(self) -> Result<(axum::Router, AppState), Box<dyn std::error::Error>> {
		let settings = self.settings.clone().unwrap_or_default();

		let telemetry_api: Arc<dyn TelemetryApi> = match self.telemetry_api {
			Some(api) => api,
			None => Arc::new(HttpTelemetryClient::new(
				&settings.upstream.base_url,
				settings.upstream.timeout_ms,
			)?),
		};
		let rate_source = self
			.rate_source
			.unwrap_or_else(|| Box::new(SyntheticRates::default()));

		let catalog = Arc::new(load_catalog(telemetry_api.as_ref(), rate_source.as_ref()).await?);
		info!("Successfully initialized with {} cauldron(s)", catalog.len());

		let status_service = Arc::new(StatusService::new(
			Arc::clone(&telemetry_api),
			Arc::clone(&catalog),
		));
		let reconcile_service = Arc::new(ReconcileService::new(
			Arc::clone(&telemetry_api),
			Arc::clone(&catalog),
			settings.reconcile.tolerance,
		));
		let dispatch_service = Arc::new(DispatchService::new(Arc::clone(&catalog)));

		let mut agent = AgentService::new(
			Arc::clone(&status_service),
			Arc::clone(&reconcile_service),
			Arc::clone(&dispatch_service),
			Arc::clone(&catalog),
		);
		match CompletionClient::new(
			&settings.completion.base_url,
			&settings.completion.model,
			settings.completion.timeout_ms,
		) {
			Ok(client) => {
				// A missing credential only disables the default key; a turn
				// can still bring its own.
				let default_key = settings.completion_api_key().ok().filter(|k| !k.is_empty());
				agent = agent.with_completion(
					client,
					settings.completion.enabled,
					default_key,
					settings.completion.show_reasoning,
				);
			},
			Err(e) => {
				warn!("Completion client unavailable: {}", e);
			},
		}

		let app_state = AppState {
			status_service,
			reconcile_service,
			dispatch_service,
			agent_service: Arc::new(agent),
			catalog,
		};

		let router = create_router().with_state(app_state.clone());
		Ok((router, app_state))
	}

	/// Start the complete server with all defaults and setup
	/// This method handles everything needed to run the server, including:
	/// - Loading .env file
	/// - Loading configuration with defaults
	/// - Initializing tracing
	/// - Loading the startup catalog (fatal on failure)
	/// - Binding and serving the application
	pub async fn start_server(mut self) -> Result<(), Box<dyn std::error::Error>> {
		// Load .env file if it exists
		dotenvy::dotenv().ok();

		// Use provided settings or load from config with defaults
		let using_provided_settings = self.settings.is_some();
		let settings = if using_provided_settings {
			self.settings.clone().unwrap()
		} else {
			load_config().unwrap_or_default()
		};

		self.init_tracing_from_settings(&settings)?;
		log_service_info();

		info!(
			"Using configuration: loaded from {}",
			if using_provided_settings {
				"provided settings"
			} else {
				"config file or defaults"
			}
		);
		info!(
			"Upstream telemetry: {} ({}ms timeout)",
			settings.upstream.base_url, settings.upstream.timeout_ms
		);
		if settings.completion.enabled {
			info!("Completion service enabled: {}", settings.completion.model);
		}

		// Parse bind address
		let bind_addr = settings.bind_address();
		let addr: SocketAddr = bind_addr
			.parse()
			.map_err(|e| format!("Invalid bind address '{}': {}", bind_addr, e))?;

		if self.settings.is_none() {
			self.settings = Some(settings);
		}

		let (app, _) = self.start().await?;

		let listener = tokio::net::TcpListener::bind(addr).await?;

		log_startup_complete(&bind_addr);
		info!("API endpoints available:");
		info!("  GET  /health");
		info!("  GET  /ready");
		info!("  GET  /assets/levels");
		info!("  GET  /assets/status");
		info!("  GET  /tickets/discrepancies");
		info!("  GET  /logistics/forecast");
		info!("  POST /logistics/dispatch");
		info!("  POST /agent/chat");
		if cfg!(feature = "openapi") {
			info!("  GET  /swagger-ui");
			info!("  GET  /api-docs/openapi.json");
		}

		axum::serve(listener, app).await?;

		Ok(())
	}
}
