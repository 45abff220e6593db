//! Brewery Monitor Server
//!
//! Main entry point for the monitoring facade

use brewery_monitor::MonitorBuilder;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
	// Start the complete server with all defaults and setup handled automatically
	MonitorBuilder::new().start_server().await
}
